//! String round-tripping for date/time values with explicit patterns.
//!
//! Parsing returns `None` on malformed input so callers can fall back to a
//! default instead of handling a parse error at every call site.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// ISO calendar date pattern: `2008-01-31`.
pub const ISO_DATE: &str = "%Y-%m-%d";
/// ISO wall-clock time pattern: `10:30:00`.
pub const ISO_TIME: &str = "%H:%M:%S";
/// ISO date and time pattern: `2008-01-31T10:30:00`.
pub const ISO_DATETIME: &str = "%Y-%m-%dT%H:%M:%S";

/// Parses a date with the given pattern, `None` on failure.
pub fn parse_date(input: &str, pattern: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input, pattern).ok()
}

/// Parses a time with the given pattern, `None` on failure.
pub fn parse_time(input: &str, pattern: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(input, pattern).ok()
}

/// Parses a date and time with the given pattern, `None` on failure.
pub fn parse_datetime(input: &str, pattern: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(input, pattern).ok()
}

/// Formats a date with the given pattern.
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    date.format(pattern).to_string()
}

/// Formats a time with the given pattern.
pub fn format_time(time: NaiveTime, pattern: &str) -> String {
    time.format(pattern).to_string()
}

/// Formats a date and time with the given pattern.
pub fn format_datetime(datetime: NaiveDateTime, pattern: &str) -> String {
    datetime.format(pattern).to_string()
}
