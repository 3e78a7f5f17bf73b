//! Multi-tutor aggregation into the grid's free/busy/partial classification.
//!
//! Each selected tutor that matches the subject filter contributes its
//! [`SlotFlags`] for a slot. The flags are OR-ed across tutors and reduced
//! with a fixed precedence:
//!
//! 1. `Free` if any tutor is free in the slot, regardless of the others;
//! 2. otherwise `Busy` if any tutor has declared availability in the slot
//!    that is also booked over;
//! 3. otherwise `Partial` (no tutors, no declared availability, or
//!    declared but neither free nor booked).

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::classify::{SlotFlags, TutorDay};
use crate::interval::Interval;
use crate::model::{Booking, Snapshot, Tutor, TutorId};
use crate::slots::SlotWindow;
use crate::week::{iso_date, week_days};

/// Classification of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Free,
    Busy,
    Partial,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Free => "free",
            Classification::Busy => "busy",
            Classification::Partial => "partial",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive substring match of `query` in `subjects`. An empty
/// query matches everything.
pub fn subject_matches(subjects: &str, query: &str) -> bool {
    query.is_empty() || subjects.to_lowercase().contains(&query.to_lowercase())
}

/// Which tutors a render covers: an explicit id set narrowed by a subject
/// query. Immutable for the duration of one render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    #[serde(default)]
    pub tutor_ids: BTreeSet<TutorId>,
    #[serde(default)]
    pub subject_query: String,
}

impl Selection {
    pub fn new<I, T>(tutor_ids: I, subject_query: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TutorId>,
    {
        Self {
            tutor_ids: tutor_ids.into_iter().map(Into::into).collect(),
            subject_query: subject_query.into(),
        }
    }

    pub fn includes(&self, tutor: &Tutor) -> bool {
        self.tutor_ids.contains(&tutor.id) && subject_matches(&tutor.subjects, &self.subject_query)
    }

    /// The tutors from `tutors` this selection covers, in input order.
    pub fn filter<'a>(&'a self, tutors: &'a [Tutor]) -> impl Iterator<Item = &'a Tutor> + 'a {
        tutors.iter().filter(move |t| self.includes(t))
    }
}

/// Reduce per-tutor flags to one classification using `free > busy > partial`.
pub fn aggregate<I>(flags: I) -> Classification
where
    I: IntoIterator<Item = SlotFlags>,
{
    let mut any_free = false;
    let mut any_busy = false;
    for f in flags {
        any_free |= f.free;
        any_busy |= f.declared && f.booked;
    }

    if any_free {
        Classification::Free
    } else if any_busy {
        Classification::Busy
    } else {
        Classification::Partial
    }
}

/// Classify one slot on one date across the selected tutors.
pub fn classify_slot(
    tutors: &[Tutor],
    bookings: &[Booking],
    selection: &Selection,
    date: NaiveDate,
    slot: &Interval,
) -> Classification {
    aggregate(
        selection
            .filter(tutors)
            .map(|t| TutorDay::resolve(t, bookings, date).flags(slot)),
    )
}

/// Classify every slot of one date across the selected tutors.
///
/// Interval lists are derived once per tutor for the date rather than once
/// per slot; the result is identical to calling [`classify_slot`] per slot.
pub fn classify_day(
    tutors: &[Tutor],
    bookings: &[Booking],
    selection: &Selection,
    date: NaiveDate,
    slots: &[Interval],
) -> Vec<Classification> {
    let days: Vec<TutorDay> = selection
        .filter(tutors)
        .map(|t| TutorDay::resolve(t, bookings, date))
        .collect();

    slots
        .iter()
        .map(|slot| aggregate(days.iter().map(|d| d.flags(slot))))
        .collect()
}

/// One column of the week grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayColumn {
    /// ISO date, `"YYYY-MM-DD"`.
    pub date: String,
    /// One classification per slot, in slot order.
    pub cells: Vec<Classification>,
}

/// The full week: seven day columns over a shared slot list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekGrid {
    pub week_start: String,
    pub window: SlotWindow,
    pub slots: Vec<Interval>,
    pub days: Vec<DayColumn>,
}

impl WeekGrid {
    /// Classification of the cell at (`day`, `slot`), if both are in range.
    pub fn cell(&self, day: usize, slot: usize) -> Option<Classification> {
        self.days.get(day)?.cells.get(slot).copied()
    }

    /// Number of cells with the given classification over the whole week.
    pub fn count(&self, class: Classification) -> usize {
        self.days
            .iter()
            .flat_map(|d| d.cells.iter())
            .filter(|c| **c == class)
            .count()
    }
}

/// Re-derive the whole week grid from the snapshot.
pub fn classify_week(snapshot: &Snapshot, selection: &Selection, week_start: NaiveDate, window: &SlotWindow) -> WeekGrid {
    let slots = window.slots();
    let days: Vec<DayColumn> = week_days(week_start)
        .into_iter()
        .map(|date| DayColumn {
            date: iso_date(date),
            cells: classify_day(&snapshot.tutors, &snapshot.bookings, selection, date, &slots),
        })
        .collect();

    debug!(
        "classified week of {} for {} selected tutor(s): {} slots per day",
        week_start,
        selection.filter(&snapshot.tutors).count(),
        slots.len()
    );

    WeekGrid {
        week_start: iso_date(week_start),
        window: *window,
        slots,
        days,
    }
}
