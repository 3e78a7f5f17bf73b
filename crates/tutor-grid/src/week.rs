//! Calendar helpers for the displayed week.

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{GridError, Result};

/// Format a date as `"YYYY-MM-DD"`.
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a `"YYYY-MM-DD"` date.
///
/// # Errors
/// Returns `GridError::InvalidDate` if the text is not a valid ISO date.
pub fn parse_iso_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").map_err(|_| GridError::InvalidDate(text.to_string()))
}

/// The Monday on or before `date`. Sunday belongs to the week that started
/// six days earlier.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Seven consecutive dates beginning at `start`.
pub fn week_days(start: NaiveDate) -> [NaiveDate; 7] {
    std::array::from_fn(|i| start + Duration::days(i as i64))
}
