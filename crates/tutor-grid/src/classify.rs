//! Per-tutor, per-date slot classification.
//!
//! For one tutor on one date the declared availability is resolved, the
//! day's bookings are collected, and bookings are subtracted from the
//! declared intervals. Each slot then gets three independent flags; the
//! aggregator combines them across tutors.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::bookings::collect_bookings;
use crate::interval::{any_overlap, subtract, Interval};
use crate::model::{Booking, Tutor};
use crate::week::iso_date;
use crate::weekly::resolve_date;

/// The three facts known about one tutor for one slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotFlags {
    /// Some free (declared minus booked) interval overlaps the slot.
    pub free: bool,
    /// Some declared interval overlaps the slot, bookings ignored.
    pub declared: bool,
    /// Some booking overlaps the slot.
    pub booked: bool,
}

/// The interval lists of one tutor on one date, derived once per render.
#[derive(Debug, Clone, PartialEq)]
pub struct TutorDay {
    pub declared: Vec<Interval>,
    pub booked: Vec<Interval>,
    pub free: Vec<Interval>,
}

impl TutorDay {
    pub fn new(declared: Vec<Interval>, booked: Vec<Interval>) -> Self {
        let free = subtract(&declared, &booked);
        Self {
            declared,
            booked,
            free,
        }
    }

    pub fn resolve(tutor: &Tutor, bookings: &[Booking], date: NaiveDate) -> Self {
        let declared = resolve_date(&tutor.availability, date);
        let booked = collect_bookings(bookings, &tutor.id, &iso_date(date));
        Self::new(declared, booked)
    }

    pub fn flags(&self, slot: &Interval) -> SlotFlags {
        SlotFlags {
            free: any_overlap(&self.free, slot),
            declared: any_overlap(&self.declared, slot),
            booked: any_overlap(&self.booked, slot),
        }
    }
}

/// Compute the flags of one tutor for one slot on `date`.
pub fn classify_tutor_slot(tutor: &Tutor, bookings: &[Booking], date: NaiveDate, slot: &Interval) -> SlotFlags {
    TutorDay::resolve(tutor, bookings, date).flags(slot)
}

/// A single tutor's view of a slot: free to book or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TutorSlotLabel {
    Free,
    Busy,
}

/// Label every slot for a single tutor on `date`.
///
/// A slot is `Free` when it overlaps any free interval and `Busy` otherwise,
/// including slots outside the tutor's declared availability.
pub fn tutor_day_labels(tutor: &Tutor, bookings: &[Booking], date: NaiveDate, slots: &[Interval]) -> Vec<TutorSlotLabel> {
    let day = TutorDay::resolve(tutor, bookings, date);
    slots
        .iter()
        .map(|slot| {
            if any_overlap(&day.free, slot) {
                TutorSlotLabel::Free
            } else {
                TutorSlotLabel::Busy
            }
        })
        .collect()
}
