//! Conversion between `"HH:MM"` text and minutes since midnight.

use crate::error::{GridError, Result};
use crate::interval::Interval;

/// Minutes since midnight. Signed so that interval arithmetic can carry
/// values outside a single day (e.g. a booking spanning `-10..70`).
pub type Minutes = i32;

pub const MINUTES_PER_DAY: Minutes = 24 * 60;

/// Decode `"H:MM"` or `"HH:MM"` into minutes since midnight.
///
/// Only the shape is checked: one or two hour digits, a colon, exactly two
/// minute digits. Values are not bounds-checked, so `"25:00"` decodes to 1500.
///
/// # Errors
/// Returns `GridError::MalformedTime` if the text does not have that shape.
pub fn text_to_minutes(text: &str) -> Result<Minutes> {
    let malformed = || GridError::MalformedTime(text.to_string());

    let (hours, minutes) = text.split_once(':').ok_or_else(malformed)?;
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

    if !(1..=2).contains(&hours.len()) || minutes.len() != 2 {
        return Err(malformed());
    }
    if !all_digits(hours) || !all_digits(minutes) {
        return Err(malformed());
    }

    let h: Minutes = hours.parse().map_err(|_| malformed())?;
    let m: Minutes = minutes.parse().map_err(|_| malformed())?;
    Ok(h * 60 + m)
}

/// Encode minutes since midnight as zero-padded `"HH:MM"`.
///
/// Defined for `0 <= minutes < 1440`; the engine never produces other values
/// for display.
pub fn minutes_to_text(minutes: Minutes) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Decode an `"HH:MM-HH:MM"` range into an [`Interval`].
///
/// The result is not checked for `start < end`; degenerate ranges are
/// neutralised later by the interval algebra.
///
/// # Errors
/// Returns `GridError::MalformedRange` if the text has no `-` separator or
/// either half is not a valid time of day.
pub fn parse_range(text: &str) -> Result<Interval> {
    let malformed = || GridError::MalformedRange(text.to_string());

    let (start, end) = text.split_once('-').ok_or_else(malformed)?;
    let start = text_to_minutes(start.trim()).map_err(|_| malformed())?;
    let end = text_to_minutes(end.trim()).map_err(|_| malformed())?;
    Ok(Interval::new(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_padded_and_unpadded_hours() {
        assert_eq!(text_to_minutes("08:00").unwrap(), 480);
        assert_eq!(text_to_minutes("8:30").unwrap(), 510);
        assert_eq!(text_to_minutes("23:59").unwrap(), 1439);
        assert_eq!(text_to_minutes("00:00").unwrap(), 0);
    }

    #[test]
    fn does_not_bounds_check() {
        assert_eq!(text_to_minutes("25:00").unwrap(), 1500);
    }

    #[test]
    fn rejects_bad_shapes() {
        for bad in ["", "8", "8:0", "123:00", "ab:cd", "08-00", "08:00:00", " 8:00", "+8:00"] {
            assert!(
                matches!(text_to_minutes(bad), Err(GridError::MalformedTime(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn encodes_zero_padded() {
        assert_eq!(minutes_to_text(0), "00:00");
        assert_eq!(minutes_to_text(485), "08:05");
        assert_eq!(minutes_to_text(1200), "20:00");
        assert_eq!(minutes_to_text(1439), "23:59");
    }

    #[test]
    fn parses_ranges() {
        assert_eq!(parse_range("08:00-12:00").unwrap(), Interval::new(480, 720));
        // Inverted ranges are passed through untouched.
        assert_eq!(parse_range("12:00-08:00").unwrap(), Interval::new(720, 480));
        assert!(matches!(parse_range("08:00"), Err(GridError::MalformedRange(_))));
        assert!(matches!(parse_range("8-12"), Err(GridError::MalformedRange(_))));
    }
}
