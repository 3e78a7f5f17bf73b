//! Select one tutor's bookings on one date.

use log::warn;

use crate::interval::Interval;
use crate::model::{Booking, TutorId};
use crate::time::text_to_minutes;

/// Bookings of `tutor_id` on `date_iso`, as minute intervals.
///
/// Both keys are matched by equality. Tutor ids are compared after
/// normalisation: integer ids in the data are read as strings, so a booking
/// for `4` matches the tutor `"4"`. Output keeps input order.
/// A matching booking whose times cannot be decoded is skipped with a
/// warning.
pub fn collect_bookings(bookings: &[Booking], tutor_id: &TutorId, date_iso: &str) -> Vec<Interval> {
    bookings
        .iter()
        .filter(|b| &b.tutor_id == tutor_id && b.date == date_iso)
        .filter_map(|b| match (text_to_minutes(&b.start), text_to_minutes(&b.end)) {
            (Ok(start), Ok(end)) => Some(Interval::new(start, end)),
            (Err(e), _) | (_, Err(e)) => {
                warn!("skipping booking of tutor {} on {}: {}", b.tutor_id, b.date, e);
                None
            }
        })
        .collect()
}
