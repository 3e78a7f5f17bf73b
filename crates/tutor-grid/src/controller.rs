//! The single owner of mutable grid state.
//!
//! A front end holds one [`GridController`], forwards user actions to it, and
//! re-renders from [`GridController::render`]. The engine itself only ever
//! sees the immutable [`Selection`] snapshot for the current render.

use chrono::NaiveDate;
use log::debug;

use crate::aggregate::{classify_week, subject_matches, Selection, WeekGrid};
use crate::config::GridConfig;
use crate::error::Result;
use crate::model::{Snapshot, Tutor, TutorId};
use crate::slots::SlotWindow;
use crate::week::start_of_week;

/// A selected tutor as shown in the legend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub id: TutorId,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone)]
pub struct GridController {
    snapshot: Snapshot,
    window: SlotWindow,
    default_selection: usize,
    today: NaiveDate,
    selection: Selection,
    week_start: NaiveDate,
}

impl GridController {
    /// Build a controller with the default state: the first
    /// `config.default_selection` tutors selected, no subject query, and the
    /// week containing `today`.
    ///
    /// # Errors
    /// Fails if the configured window does not decode.
    pub fn new(snapshot: Snapshot, config: &GridConfig, today: NaiveDate) -> Result<Self> {
        let window = config.window()?;
        let mut controller = Self {
            snapshot,
            window,
            default_selection: config.default_selection,
            today,
            selection: Selection::default(),
            week_start: start_of_week(today),
        };
        controller.select_defaults();
        Ok(controller)
    }

    fn select_defaults(&mut self) {
        self.selection = Selection {
            tutor_ids: self
                .snapshot
                .tutors
                .iter()
                .take(self.default_selection)
                .map(|t| t.id.clone())
                .collect(),
            subject_query: String::new(),
        };
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn window(&self) -> &SlotWindow {
        &self.window
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn week_start(&self) -> NaiveDate {
        self.week_start
    }

    /// Check or uncheck a tutor. Unknown ids are ignored.
    pub fn toggle_tutor(&mut self, id: &TutorId, checked: bool) {
        if self.snapshot.tutor(id).is_none() {
            debug!("ignoring toggle of unknown tutor {}", id);
            return;
        }
        if checked {
            self.selection.tutor_ids.insert(id.clone());
        } else {
            self.selection.tutor_ids.remove(id);
        }
    }

    /// Replace the selection with exactly `ids` (unknown ids are dropped).
    pub fn select_only<'a, I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = &'a TutorId>,
    {
        self.selection.tutor_ids = ids
            .into_iter()
            .filter(|id| self.snapshot.tutor(id).is_some())
            .cloned()
            .collect();
    }

    pub fn select_all(&mut self) {
        self.selection.tutor_ids = self.snapshot.tutors.iter().map(|t| t.id.clone()).collect();
    }

    pub fn set_subject_query(&mut self, query: impl Into<String>) {
        self.selection.subject_query = query.into();
    }

    /// Show the week starting at `start`, or the current week when `None`.
    ///
    /// The given date is used as the first column as-is.
    pub fn set_week_start(&mut self, start: Option<NaiveDate>) {
        self.week_start = start.unwrap_or_else(|| start_of_week(self.today));
    }

    /// Clear the subject query and restore the default tutor selection.
    /// The displayed week is kept.
    pub fn reset(&mut self) {
        self.select_defaults();
    }

    /// Tutors matching the subject query, selected or not, in snapshot order.
    pub fn visible_tutors(&self) -> Vec<&Tutor> {
        self.snapshot
            .tutors
            .iter()
            .filter(|t| subject_matches(&t.subjects, &self.selection.subject_query))
            .collect()
    }

    /// Selected tutors in snapshot order, regardless of the subject query.
    pub fn legend(&self) -> Vec<LegendEntry> {
        self.snapshot
            .tutors
            .iter()
            .filter(|t| self.selection.tutor_ids.contains(&t.id))
            .map(|t| LegendEntry {
                id: t.id.clone(),
                name: t.name.clone(),
                color: t.display_color().to_string(),
            })
            .collect()
    }

    /// Re-derive the week grid from scratch for the current state.
    pub fn render(&self) -> WeekGrid {
        classify_week(&self.snapshot, &self.selection, self.week_start, &self.window)
    }
}
