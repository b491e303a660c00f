//! Checked construction of date/time values under a [`DateTimeConfig`].
//!
//! chrono's `_opt` constructors return `None` on out-of-range fields; these
//! helpers turn that into a proper error and project "now" into the
//! configured zone.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use thiserror::Error;

use crate::config::DateTimeConfig;

/// Errors that can occur when constructing date/time values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FactoryError {
    #[error("Value out of range for {what}")]
    OutOfRange { what: &'static str },
}

/// Returns the current instant in the configured zone.
pub fn now(config: &DateTimeConfig) -> DateTime<Tz> {
    Utc::now().with_timezone(&config.zone())
}

/// Returns the current wall-clock date and time in the configured zone.
pub fn current_local_datetime(config: &DateTimeConfig) -> NaiveDateTime {
    now(config).naive_local()
}

/// Returns the current calendar date in the configured zone.
pub fn current_local_date(config: &DateTimeConfig) -> NaiveDate {
    current_local_datetime(config).date()
}

/// Returns the current wall-clock time in the configured zone.
pub fn current_local_time(config: &DateTimeConfig) -> NaiveTime {
    current_local_datetime(config).time()
}

/// Creates a calendar date, rejecting out-of-range fields.
pub fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, FactoryError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(FactoryError::OutOfRange {
        what: "year/month/day",
    })
}

/// Creates a wall-clock time, rejecting out-of-range fields.
pub fn time(hour: u32, minute: u32, second: u32) -> Result<NaiveTime, FactoryError> {
    NaiveTime::from_hms_opt(hour, minute, second).ok_or(FactoryError::OutOfRange {
        what: "hour/minute/second",
    })
}

/// Creates a date and time, rejecting out-of-range fields.
pub fn datetime(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> Result<NaiveDateTime, FactoryError> {
    Ok(date(year, month, day)?.and_time(time(hour, minute, second)?))
}

/// Creates an instant in the configured zone from epoch milliseconds.
pub fn from_epoch_millis(
    millis: i64,
    config: &DateTimeConfig,
) -> Result<DateTime<Tz>, FactoryError> {
    let utc = Utc
        .timestamp_millis_opt(millis)
        .single()
        .ok_or(FactoryError::OutOfRange {
            what: "epoch milliseconds",
        })?;
    Ok(utc.with_timezone(&config.zone()))
}
