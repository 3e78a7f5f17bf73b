//! Minute intervals and booking subtraction.
//!
//! Intervals are half-open `[start, end)` ranges of minutes since midnight.
//! Two intervals overlap when `a.start < b.end && b.start < a.end`, so
//! intervals that merely touch (one ends exactly when the other starts) do
//! NOT overlap.

use serde::{Deserialize, Serialize};

use crate::time::Minutes;

/// A `(start, end)` range of minutes. Valid only when `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub start: Minutes,
    pub end: Minutes,
}

impl Interval {
    pub const fn new(start: Minutes, end: Minutes) -> Self {
        Self { start, end }
    }

    /// Positive length. Zero and negative length intervals are discarded by
    /// every consumer.
    pub fn is_valid(&self) -> bool {
        self.start < self.end
    }

    pub fn duration_minutes(&self) -> Minutes {
        (self.end - self.start).max(0)
    }

    /// Open-interval overlap test. Touching endpoints never overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        other.end > self.start && other.start < self.end
    }
}

impl From<(Minutes, Minutes)> for Interval {
    fn from((start, end): (Minutes, Minutes)) -> Self {
        Self { start, end }
    }
}

/// True if any interval in `intervals` overlaps `slot`.
pub fn any_overlap(intervals: &[Interval], slot: &Interval) -> bool {
    intervals.iter().any(|interval| slot.overlaps(interval))
}

/// Remove every busy interval from the available intervals.
///
/// Busy intervals are applied one at a time, each refining the free set left
/// by the previous one. An available interval that overlaps a busy interval
/// is split into the remnant before the busy start and the remnant after the
/// busy end; the covered middle is dropped. Remnants with non-positive
/// length are discarded after every step.
///
/// The result is neither sorted nor merged: adjacent remnants stay separate.
/// Consumers only ever test it for overlap.
pub fn subtract(available: &[Interval], busy: &[Interval]) -> Vec<Interval> {
    let mut free: Vec<Interval> = available.to_vec();

    for b in busy {
        let mut next = Vec::with_capacity(free.len() + 1);
        for a in &free {
            if b.end <= a.start || b.start >= a.end {
                next.push(*a);
                continue;
            }
            if b.start > a.start {
                next.push(Interval::new(a.start, b.start.min(a.end).max(a.start)));
            }
            if b.end < a.end {
                next.push(Interval::new(b.end.min(a.end).max(a.start), a.end));
            }
        }
        next.retain(Interval::is_valid);
        free = next;
    }

    free
}
