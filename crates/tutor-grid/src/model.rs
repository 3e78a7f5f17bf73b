//! Input records: tutors, bookings and the subject list.
//!
//! Field names follow the JSON data files (`tutor_id`, `subjects`,
//! `availability`, ...). A [`Snapshot`] is the read-only view every render
//! is computed from.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{GridError, Result};
use crate::time::{parse_range, text_to_minutes};
use crate::weekly::WeeklyAvailability;

/// Colour used when a tutor record carries none.
pub const DEFAULT_COLOR: &str = "#888";

/// Tutor identifier. Data files may carry ids as strings or integers; both
/// are normalised to text and compared by exact equality.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TutorId(pub String);

impl TutorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TutorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TutorId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for TutorId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Int(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => TutorId(s),
            Raw::Int(n) => TutorId(n.to_string()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tutor {
    pub id: TutorId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    /// Free-text subject list, e.g. `"Math, Physics"`.
    #[serde(default)]
    pub subjects: String,
    #[serde(default)]
    pub availability: WeeklyAvailability,
}

impl Tutor {
    pub fn new(id: impl Into<String>, availability: WeeklyAvailability) -> Self {
        Self {
            id: TutorId::new(id),
            name: String::new(),
            color: None,
            subjects: String::new(),
            availability,
        }
    }

    pub fn with_subjects(mut self, subjects: impl Into<String>) -> Self {
        self.subjects = subjects.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn display_color(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_COLOR)
    }
}

/// A committed occupation of a tutor's time on one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub tutor_id: TutorId,
    /// ISO calendar date, `"YYYY-MM-DD"`.
    pub date: String,
    pub start: String,
    pub end: String,
}

impl Booking {
    pub fn new(tutor_id: impl Into<String>, date: &str, start: &str, end: &str) -> Self {
        Self {
            tutor_id: TutorId::new(tutor_id),
            date: date.to_string(),
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}

/// Everything a render reads: tutors, bookings and the subject names used
/// for autocompletion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub tutors: Vec<Tutor>,
    pub bookings: Vec<Booking>,
    pub subjects: Vec<String>,
}

impl Snapshot {
    pub fn new(tutors: Vec<Tutor>, bookings: Vec<Booking>, subjects: Vec<String>) -> Self {
        Self {
            tutors,
            bookings,
            subjects,
        }
    }

    pub fn tutor(&self, id: &TutorId) -> Option<&Tutor> {
        self.tutors.iter().find(|t| &t.id == id)
    }

    /// Reject data the time codec cannot decode.
    ///
    /// Run once at load time so that later recomputation works only on
    /// well-formed input. Inverted ranges (`start >= end`) are accepted; they
    /// never overlap anything and so contribute nothing.
    ///
    /// # Errors
    /// `MalformedRange` for a bad availability entry, `MalformedTime` for a
    /// bad booking time, `InvalidDate` for a booking date that is not
    /// `YYYY-MM-DD`.
    pub fn validate(&self) -> Result<()> {
        validate_tutors(&self.tutors)?;
        validate_bookings(&self.bookings)
    }
}

/// Every availability range of every tutor must decode.
pub fn validate_tutors(tutors: &[Tutor]) -> Result<()> {
    for tutor in tutors {
        for (_, range) in tutor.availability.iter() {
            parse_range(range)?;
        }
    }
    Ok(())
}

/// Every booking must carry an ISO date and decodable times.
pub fn validate_bookings(bookings: &[Booking]) -> Result<()> {
    for booking in bookings {
        NaiveDate::parse_from_str(&booking.date, "%Y-%m-%d")
            .map_err(|_| GridError::InvalidDate(booking.date.clone()))?;
        text_to_minutes(&booking.start)?;
        text_to_minutes(&booking.end)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekly::WeekdayKey;

    #[test]
    fn tutor_id_accepts_strings_and_integers() {
        let from_str: TutorId = serde_json::from_str(r#""t1""#).unwrap();
        let from_int: TutorId = serde_json::from_str("42").unwrap();
        assert_eq!(from_str, TutorId::new("t1"));
        assert_eq!(from_int, TutorId::new("42"));
    }

    #[test]
    fn tutor_defaults_for_missing_fields() {
        let tutor: Tutor = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(tutor.subjects, "");
        assert_eq!(tutor.display_color(), DEFAULT_COLOR);
        assert_eq!(tutor.availability, WeeklyAvailability::default());
    }

    #[test]
    fn validate_rejects_bad_range() {
        let tutor = Tutor::new("t1", WeeklyAvailability::new().with_day(WeekdayKey::Mon, ["8am-noon"]));
        let snapshot = Snapshot::new(vec![tutor], vec![], vec![]);
        assert!(matches!(snapshot.validate(), Err(GridError::MalformedRange(_))));
    }

    #[test]
    fn validate_rejects_bad_booking_date_and_time() {
        let bad_date = Snapshot::new(vec![], vec![Booking::new("t1", "16/03/2026", "09:00", "10:00")], vec![]);
        assert!(matches!(bad_date.validate(), Err(GridError::InvalidDate(_))));

        let bad_time = Snapshot::new(vec![], vec![Booking::new("t1", "2026-03-16", "9", "10:00")], vec![]);
        assert!(matches!(bad_time.validate(), Err(GridError::MalformedTime(_))));
    }

    #[test]
    fn validate_accepts_inverted_range() {
        let tutor = Tutor::new("t1", WeeklyAvailability::new().with_day(WeekdayKey::Mon, ["12:00-08:00"]));
        assert!(Snapshot::new(vec![tutor], vec![], vec![]).validate().is_ok());
    }
}
