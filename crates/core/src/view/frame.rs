use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use super::types::CalendarEntry;
use crate::utils::last_day_of_month;

/// A pair of optional dates bounding a visible calendar range.
///
/// A `None` bound means unbounded on that side; present bounds are inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeFrame {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl TimeFrame {
    /// Creates a frame with both bounds present.
    pub fn closed(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Returns true if the date lies within the frame. A frame with no
    /// bounds contains every date.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|s| date >= s) && self.end.is_none_or(|e| date <= e)
    }

    /// Returns true if a range overlaps this frame: it starts within the
    /// frame, ends within it, or spans it entirely. A `None` end falls back
    /// to the start (punctual range).
    pub fn overlaps(&self, start: NaiveDate, end: Option<NaiveDate>) -> bool {
        let end = end.unwrap_or(start);

        // starts within the frame
        if self.contains(start) {
            return true;
        }
        // ends within the frame
        if self.contains(end) {
            return true;
        }
        // spans the frame
        self.start.is_none_or(|s| start <= s) && self.end.is_none_or(|e| end >= e)
    }
}

/// Returns the cursor at the first instant of its day.
pub(crate) fn start_of_day(cursor: NaiveDateTime) -> NaiveDateTime {
    cursor.date().and_time(NaiveTime::MIN)
}

/// Returns the cursor at the last representable millisecond of its day.
pub(crate) fn end_of_day(cursor: NaiveDateTime) -> NaiveDateTime {
    cursor
        .date()
        .and_hms_milli_opt(23, 59, 59, 999)
        .expect("end-of-day time is always valid")
}

/// Returns the cursor at the start of its ISO week (Monday).
pub(crate) fn start_of_week(cursor: NaiveDateTime) -> NaiveDateTime {
    let back = cursor.date().weekday().num_days_from_monday() as i64;
    start_of_day(cursor - Duration::days(back))
}

/// Returns the cursor at the end of its ISO week (Sunday).
pub(crate) fn end_of_week(cursor: NaiveDateTime) -> NaiveDateTime {
    let forward = Weekday::Sun.num_days_from_monday() as i64
        - cursor.date().weekday().num_days_from_monday() as i64;
    end_of_day(cursor + Duration::days(forward))
}

/// Returns the cursor at the start of its month.
pub(crate) fn start_of_month(cursor: NaiveDateTime) -> NaiveDateTime {
    let date = cursor.date().with_day(1).expect("day 1 exists in every month");
    start_of_day(date.and_time(cursor.time()))
}

/// Returns the cursor at the end of its month.
pub(crate) fn end_of_month(cursor: NaiveDateTime) -> NaiveDateTime {
    let date = last_day_of_month(cursor.date().year(), cursor.date().month());
    end_of_day(date.and_time(cursor.time()))
}

/// Returns the cursor at the end of its year (December 31st).
pub(crate) fn end_of_year(cursor: NaiveDateTime) -> NaiveDateTime {
    let date = NaiveDate::from_ymd_opt(cursor.date().year(), 12, 31)
        .expect("December 31st exists in every year");
    end_of_day(date.and_time(cursor.time()))
}

/// Tracks a movable cursor together with the committed and pointer time
/// frames of a grid walk.
///
/// The committed frame is the whole requested view; the pointer frame is the
/// finer-grained sub-range (single day or week) currently being walked, used
/// to query entries without widening the query to the whole view.
#[derive(Debug, Clone)]
pub struct FrameTracker {
    cursor: NaiveDateTime,
    frame: TimeFrame,
    pointer: TimeFrame,
}

impl FrameTracker {
    /// Creates a tracker with the cursor at the given position and both
    /// frames fully open.
    pub fn new(cursor: NaiveDateTime) -> Self {
        Self {
            cursor,
            frame: TimeFrame::default(),
            pointer: TimeFrame::default(),
        }
    }

    /// Returns the current cursor position.
    pub fn cursor(&self) -> NaiveDateTime {
        self.cursor
    }

    /// Returns the committed time frame.
    pub fn frame(&self) -> TimeFrame {
        self.frame
    }

    /// Returns the pointer time frame.
    pub fn pointer(&self) -> TimeFrame {
        self.pointer
    }

    /// Moves the cursor to the given position.
    pub fn set_cursor(&mut self, cursor: NaiveDateTime) {
        self.cursor = cursor;
    }

    /// Moves the cursor to the given date, keeping the time of day.
    pub fn go_to(&mut self, date: NaiveDate) {
        self.cursor = date.and_time(self.cursor.time());
    }

    /// Moves the cursor to the first instant of its day. Idempotent.
    pub fn go_to_start_of_day(&mut self) {
        self.cursor = start_of_day(self.cursor);
    }

    /// Moves the cursor to the last millisecond of its day.
    pub fn go_to_end_of_day(&mut self) {
        self.cursor = end_of_day(self.cursor);
    }

    /// Moves the cursor to the start of its ISO week.
    pub fn go_to_start_of_week(&mut self) {
        self.cursor = start_of_week(self.cursor);
    }

    /// Moves the cursor to the end of its ISO week.
    pub fn go_to_end_of_week(&mut self) {
        self.cursor = end_of_week(self.cursor);
    }

    /// Moves the cursor to the start of its month.
    pub fn go_to_start_of_month(&mut self) {
        self.cursor = start_of_month(self.cursor);
    }

    /// Moves the cursor to the end of its month.
    pub fn go_to_end_of_month(&mut self) {
        self.cursor = end_of_month(self.cursor);
    }

    /// Moves the cursor to the end of its year.
    pub fn go_to_end_of_year(&mut self) {
        self.cursor = end_of_year(self.cursor);
    }

    /// Sets the pointer frame to the cursor's day; with `commit`, also the
    /// committed frame.
    pub fn set_frame_day(&mut self, commit: bool) {
        let start = start_of_day(self.cursor).date();
        let end = end_of_day(self.cursor).date();
        self.set_pointer(start, end, commit);
    }

    /// Sets the pointer frame to the cursor's ISO week; with `commit`, also
    /// the committed frame.
    pub fn set_frame_week(&mut self, commit: bool) {
        let start = start_of_week(self.cursor).date();
        let end = end_of_week(self.cursor).date();
        self.set_pointer(start, end, commit);
    }

    /// Sets the pointer frame to the cursor's month; with `commit`, also the
    /// committed frame.
    pub fn set_frame_month(&mut self, commit: bool) {
        let start = start_of_month(self.cursor).date();
        let end = end_of_month(self.cursor).date();
        self.set_pointer(start, end, commit);
    }

    fn set_pointer(&mut self, start: NaiveDate, end: NaiveDate, commit: bool) {
        self.pointer = TimeFrame::closed(start, end);
        if commit {
            self.frame = self.pointer;
        }
    }

    /// Recommits the day frame, then advances the cursor by `count` days
    /// (negative moves backward).
    pub fn roll_days(&mut self, count: i64, commit: bool) {
        self.set_frame_day(commit);
        self.cursor += Duration::days(count);
    }

    /// Recommits the week frame, then advances the cursor by `count` weeks.
    pub fn roll_weeks(&mut self, count: i64, commit: bool) {
        self.set_frame_week(commit);
        self.cursor += Duration::weeks(count);
    }

    /// Recommits the month frame, then advances the cursor by `count`
    /// months, saturating at the representable date range.
    pub fn roll_months(&mut self, count: i32, commit: bool) {
        self.set_frame_month(commit);
        let months = Months::new(count.unsigned_abs());
        let moved = if count >= 0 {
            self.cursor.checked_add_months(months)
        } else {
            self.cursor.checked_sub_months(months)
        };
        if let Some(moved) = moved {
            self.cursor = moved;
        }
    }

    /// Returns true if the date lies within the committed frame.
    pub fn is_in_frame(&self, date: NaiveDate) -> bool {
        self.frame.contains(date)
    }

    /// Returns true if the entry overlaps the pointer frame (or the
    /// committed frame when `use_pointer` is false).
    pub fn entry_in_frame(&self, entry: &CalendarEntry, use_pointer: bool) -> bool {
        let frame = if use_pointer { self.pointer } else { self.frame };
        frame.overlaps(entry.start.date(), entry.end.map(|e| e.date()))
    }

    /// Returns the ISO week number at the cursor.
    pub fn week_of_year(&self) -> u32 {
        self.cursor.date().iso_week().week()
    }

    /// Returns the ISO week-year at the cursor. The week containing the
    /// first days of a year counts towards that year.
    pub fn week_year(&self) -> i32 {
        self.cursor.date().iso_week().year()
    }
}
