//! Fail-fast loading of the three data collections.
//!
//! Tutors, bookings and subjects are all required. The first collection that
//! cannot be read or parsed aborts the load with a single
//! [`GridError::Load`]; no partial snapshot is ever returned and nothing is
//! retried.

use std::path::Path;

use log::debug;
use serde::de::DeserializeOwned;

use crate::error::{GridError, Result};
use crate::model::{validate_bookings, validate_tutors, Booking, Snapshot, Tutor};

pub const TUTORS_FILE: &str = "mock_tutors.json";
pub const EVENTS_FILE: &str = "mock_events.json";
pub const SUBJECTS_FILE: &str = "mock_subjects.json";

fn parse<T: DeserializeOwned>(collection: &'static str, json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|e| GridError::load(collection, e))
}

fn read(collection: &'static str, path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| GridError::load(collection, e))
}

impl Snapshot {
    /// Parse and validate the three collections from JSON text.
    ///
    /// # Errors
    /// `GridError::Load` naming the first collection that failed to parse or
    /// that holds undecodable times, ranges or dates.
    pub fn from_json(tutors_json: &str, events_json: &str, subjects_json: &str) -> Result<Self> {
        let tutors: Vec<Tutor> = parse("tutors", tutors_json)?;
        let bookings: Vec<Booking> = parse("events", events_json)?;
        let subjects: Vec<String> = parse("subjects", subjects_json)?;

        validate_tutors(&tutors).map_err(|e| GridError::load("tutors", e))?;
        validate_bookings(&bookings).map_err(|e| GridError::load("events", e))?;

        let snapshot = Snapshot::new(tutors, bookings, subjects);
        debug!(
            "loaded {} tutors, {} bookings, {} subjects",
            snapshot.tutors.len(),
            snapshot.bookings.len(),
            snapshot.subjects.len()
        );
        Ok(snapshot)
    }
}

/// Load `mock_tutors.json`, `mock_events.json` and `mock_subjects.json` from
/// `dir`.
///
/// All three files are read before anything is parsed; any failure aborts.
pub fn load_snapshot(dir: impl AsRef<Path>) -> Result<Snapshot> {
    let dir = dir.as_ref();
    debug!("loading data collections from {}", dir.display());

    let tutors = read("tutors", &dir.join(TUTORS_FILE))?;
    let events = read("events", &dir.join(EVENTS_FILE))?;
    let subjects = read("subjects", &dir.join(SUBJECTS_FILE))?;

    Snapshot::from_json(&tutors, &events, &subjects)
}
