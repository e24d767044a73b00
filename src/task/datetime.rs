//! Date-time parsing for deadline and event fields.
//!
//! Input is accepted in exactly one shape, `yyyy-mm-dd hh:mm` on a 24-hour
//! clock, and must name a real calendar instant.

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

/// `chrono` pattern for date-times typed at the prompt and kept in storage.
pub const INPUT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// `chrono` pattern for date-times shown back to the user.
pub const DISPLAY_FORMAT: &str = "%b %d %Y %H:%M";

// chrono accepts single-digit fields for %m/%d/%H/%M, so the width is pinned here.
static DATETIME_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}$")
        .unwrap_or_else(|e| panic!("Invalid datetime regex: {e}"))
});

/// Parse a raw `yyyy-mm-dd hh:mm` string.
///
/// Returns `None` if the input has the wrong shape or is not a valid
/// calendar date-time (e.g. `2024-02-30 10:00` or `2024-01-01 24:00`).
#[must_use]
pub fn parse_datetime(input: &str) -> Option<NaiveDateTime> {
    if !DATETIME_SHAPE.is_match(input) {
        return None;
    }
    NaiveDateTime::parse_from_str(input, INPUT_FORMAT).ok()
}

/// Render a date-time in the input format, so it parses back unchanged.
#[must_use]
pub fn to_input_string(value: &NaiveDateTime) -> String {
    value.format(INPUT_FORMAT).to_string()
}

/// Render a date-time for display, e.g. `Mar 15 2024 18:00`.
#[must_use]
pub fn to_display_string(value: &NaiveDateTime) -> String {
    value.format(DISPLAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn test_parse_valid() {
        let parsed = parse_datetime("2024-03-15 18:00").unwrap();
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(parsed.hour(), 18);
        assert_eq!(parsed.minute(), 0);
    }

    #[test]
    fn test_parse_leap_day() {
        assert!(parse_datetime("2024-02-29 00:00").is_some());
        assert!(parse_datetime("2023-02-29 00:00").is_none());
    }

    #[test]
    fn test_parse_rejects_bad_calendar_values() {
        assert!(parse_datetime("2024-02-30 10:00").is_none());
        assert!(parse_datetime("2024-13-01 10:00").is_none());
        assert!(parse_datetime("2024-01-01 24:00").is_none());
        assert!(parse_datetime("2024-01-01 12:60").is_none());
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        assert!(parse_datetime("tomorrow").is_none());
        assert!(parse_datetime("2024-3-15 18:00").is_none());
        assert!(parse_datetime("2024-03-15 6:00").is_none());
        assert!(parse_datetime("2024-03-15").is_none());
        assert!(parse_datetime("2024-03-15T18:00").is_none());
        assert!(parse_datetime(" 2024-03-15 18:00").is_none());
        assert!(parse_datetime("").is_none());
    }

    #[test]
    fn test_input_string_parses_back() {
        let parsed = parse_datetime("2024-01-02 09:05").unwrap();
        assert_eq!(to_input_string(&parsed), "2024-01-02 09:05");
    }

    #[test]
    fn test_display_string() {
        let parsed = parse_datetime("2024-03-15 18:00").unwrap();
        assert_eq!(to_display_string(&parsed), "Mar 15 2024 18:00");
    }
}
