use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::PeriodError;
use crate::compare::is_between_incl;

/// A calendar date range with optional open bounds.
///
/// A `None` bound means unbounded on that side. Derived values like
/// [`DatePeriod::duration`] require both bounds; check
/// [`DatePeriod::is_closed`] first or handle the [`PeriodError`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatePeriod {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DatePeriod {
    /// Creates a period from optional bounds.
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Creates a period with both bounds present.
    pub fn closed(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Creates a fully open period.
    pub fn open() -> Self {
        Self::default()
    }

    /// Returns true if both bounds are present.
    pub fn is_closed(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Returns true if the date lies within the period (inclusive bounds,
    /// `None` bound unbounded).
    pub fn contains(&self, date: NaiveDate) -> bool {
        is_between_incl(&date, self.start.as_ref(), self.end.as_ref())
    }

    /// Returns the closed `(start, end)` pair, rejecting open-ended periods.
    pub fn interval(&self) -> Result<(NaiveDate, NaiveDate), PeriodError> {
        let start = self.start.ok_or(PeriodError::MissingStart)?;
        let end = self.end.ok_or(PeriodError::MissingEnd)?;
        Ok((start, end))
    }

    /// Returns the signed duration from start to end.
    pub fn duration(&self) -> Result<Duration, PeriodError> {
        let (start, end) = self.interval()?;
        Ok(end.signed_duration_since(start))
    }
}

/// A wall-clock time range within a single day, with optional open bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePeriod {
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
}

impl TimePeriod {
    /// Creates a period from optional bounds.
    pub fn new(start: Option<NaiveTime>, end: Option<NaiveTime>) -> Self {
        Self { start, end }
    }

    /// Creates a period with both bounds present.
    pub fn closed(start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Creates a fully open period.
    pub fn open() -> Self {
        Self::default()
    }

    /// Returns true if both bounds are present.
    pub fn is_closed(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Returns true if the time lies within the period (inclusive bounds,
    /// `None` bound unbounded).
    pub fn contains(&self, time: NaiveTime) -> bool {
        is_between_incl(&time, self.start.as_ref(), self.end.as_ref())
    }

    /// Returns the closed `(start, end)` pair, rejecting open-ended periods.
    pub fn interval(&self) -> Result<(NaiveTime, NaiveTime), PeriodError> {
        let start = self.start.ok_or(PeriodError::MissingStart)?;
        let end = self.end.ok_or(PeriodError::MissingEnd)?;
        Ok((start, end))
    }

    /// Returns the signed duration from start to end.
    pub fn duration(&self) -> Result<Duration, PeriodError> {
        let (start, end) = self.interval()?;
        Ok(end.signed_duration_since(start))
    }
}

/// A date-and-time range with optional open bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTimePeriod {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl DateTimePeriod {
    /// Creates a period from optional bounds.
    pub fn new(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> Self {
        Self { start, end }
    }

    /// Creates a period with both bounds present.
    pub fn closed(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Creates a fully open period.
    pub fn open() -> Self {
        Self::default()
    }

    /// Returns true if both bounds are present.
    pub fn is_closed(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Returns true if the instant lies within the period (inclusive bounds,
    /// `None` bound unbounded).
    pub fn contains(&self, datetime: NaiveDateTime) -> bool {
        is_between_incl(&datetime, self.start.as_ref(), self.end.as_ref())
    }

    /// Returns the closed `(start, end)` pair, rejecting open-ended periods.
    pub fn interval(&self) -> Result<(NaiveDateTime, NaiveDateTime), PeriodError> {
        let start = self.start.ok_or(PeriodError::MissingStart)?;
        let end = self.end.ok_or(PeriodError::MissingEnd)?;
        Ok((start, end))
    }

    /// Returns the signed duration from start to end.
    pub fn duration(&self) -> Result<Duration, PeriodError> {
        let (start, end) = self.interval()?;
        Ok(end.signed_duration_since(start))
    }
}
