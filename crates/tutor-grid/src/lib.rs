//! # tutor-grid
//!
//! Weekly tutor availability for a scheduling grid.
//!
//! Given each tutor's recurring weekly availability and a snapshot of dated
//! bookings, the engine subtracts bookings from declared availability,
//! quantizes the display window into fixed-width slots, and classifies every
//! (day, slot) cell of a week as `free`, `busy` or `partial` across any set
//! of selected tutors.
//!
//! ## Modules
//!
//! - [`time`] — `"HH:MM"` text ↔ minutes since midnight
//! - [`interval`] — Minute intervals, overlap test, booking subtraction
//! - [`slots`] — Display window → fixed-width slots
//! - [`weekly`] — Weekly availability map → intervals for one day
//! - [`bookings`] — Bookings of one tutor on one date
//! - [`classify`] — Per-tutor free/declared/booked flags for a slot
//! - [`aggregate`] — Multi-tutor `free > busy > partial` classification
//! - [`week`] — ISO dates and week boundaries
//! - [`model`] — Tutor, booking and snapshot records
//! - [`load`] — Fail-fast loading of the data collections
//! - [`controller`] — Owner of the mutable selection state
//! - [`config`] — Display window configuration
//! - [`error`] — Error types

pub mod aggregate;
pub mod bookings;
pub mod classify;
pub mod config;
pub mod controller;
pub mod error;
pub mod interval;
pub mod load;
pub mod model;
pub mod slots;
pub mod time;
pub mod week;
pub mod weekly;

pub use aggregate::{
    aggregate, classify_day, classify_slot, classify_week, subject_matches, Classification,
    DayColumn, Selection, WeekGrid,
};
pub use bookings::collect_bookings;
pub use classify::{classify_tutor_slot, tutor_day_labels, SlotFlags, TutorDay, TutorSlotLabel};
pub use config::GridConfig;
pub use controller::{GridController, LegendEntry};
pub use error::GridError;
pub use interval::{subtract, Interval};
pub use load::load_snapshot;
pub use model::{Booking, Snapshot, Tutor, TutorId};
pub use slots::{build_slots, SlotWindow};
pub use time::{minutes_to_text, parse_range, text_to_minutes, Minutes};
pub use week::{iso_date, parse_iso_date, start_of_week, week_days};
pub use weekly::{resolve_date, resolve_day, WeekdayKey, WeeklyAvailability};
