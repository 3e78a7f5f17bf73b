//! Recurring weekly availability and its resolution to a concrete day.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::interval::Interval;
use crate::time::parse_range;

/// Symbolic weekday keys used in availability maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekdayKey {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl WeekdayKey {
    /// Sunday-indexed lookup: `0 => sun, 1 => mon, ... 6 => sat`.
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(WeekdayKey::Sun),
            1 => Some(WeekdayKey::Mon),
            2 => Some(WeekdayKey::Tue),
            3 => Some(WeekdayKey::Wed),
            4 => Some(WeekdayKey::Thu),
            5 => Some(WeekdayKey::Fri),
            6 => Some(WeekdayKey::Sat),
            _ => None,
        }
    }

    pub fn for_date(date: NaiveDate) -> Self {
        match date.weekday().num_days_from_sunday() {
            0 => WeekdayKey::Sun,
            1 => WeekdayKey::Mon,
            2 => WeekdayKey::Tue,
            3 => WeekdayKey::Wed,
            4 => WeekdayKey::Thu,
            5 => WeekdayKey::Fri,
            _ => WeekdayKey::Sat,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeekdayKey::Sun => "sun",
            WeekdayKey::Mon => "mon",
            WeekdayKey::Tue => "tue",
            WeekdayKey::Wed => "wed",
            WeekdayKey::Thu => "thu",
            WeekdayKey::Fri => "fri",
            WeekdayKey::Sat => "sat",
        }
    }
}

/// Declared availability per weekday, as `"HH:MM-HH:MM"` range strings.
///
/// A missing key means no availability that day. Ranges may be unsorted or
/// overlap each other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklyAvailability(pub BTreeMap<WeekdayKey, Vec<String>>);

impl WeeklyAvailability {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for tests and fixtures.
    pub fn with_day<I, S>(mut self, day: WeekdayKey, ranges: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.insert(day, ranges.into_iter().map(Into::into).collect());
        self
    }

    pub fn ranges(&self, day: WeekdayKey) -> &[String] {
        self.0.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (WeekdayKey, &String)> {
        self.0
            .iter()
            .flat_map(|(day, ranges)| ranges.iter().map(move |r| (*day, r)))
    }
}

/// Resolve declared availability for a Sunday-indexed weekday (`0..=6`).
///
/// Ranges are decoded but not checked for `start < end`. A range that cannot
/// be decoded at all is skipped with a warning; an out-of-range index yields
/// no intervals.
pub fn resolve_day(weekly: &WeeklyAvailability, weekday_index: u32) -> Vec<Interval> {
    match WeekdayKey::from_index(weekday_index) {
        Some(day) => decode_day(weekly, day),
        None => Vec::new(),
    }
}

/// Resolve declared availability for the weekday of a calendar date.
pub fn resolve_date(weekly: &WeeklyAvailability, date: NaiveDate) -> Vec<Interval> {
    decode_day(weekly, WeekdayKey::for_date(date))
}

fn decode_day(weekly: &WeeklyAvailability, day: WeekdayKey) -> Vec<Interval> {
    weekly
        .ranges(day)
        .iter()
        .filter_map(|range| match parse_range(range) {
            Ok(interval) => Some(interval),
            Err(e) => {
                warn!("skipping availability on {}: {}", day.as_str(), e);
                None
            }
        })
        .collect()
}
