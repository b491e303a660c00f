use chrono::NaiveDate;

use super::frame::TimeFrame;
use super::settings::CalendarSettings;
use super::types::{CalendarEntry, ViewMode};

/// Supplies the calendar entries overlapping a queried range.
///
/// Called once per day/week/month sub-range during a walk, chronologically
/// front to back; implementations must not assume any other call ordering.
pub trait EntryProvider {
    /// Returns the entries overlapping the given frame.
    fn entries_for_range(&self, frame: TimeFrame) -> Vec<CalendarEntry>;
}

/// Receives the lifecycle callbacks of a grid walk and owns presentation.
///
/// All `on_*` hooks default to no-ops; implement only the granularities the
/// widget renders.
pub trait CalendarHandler {
    /// Returns the settings (business hours, working days, holidays) the
    /// presentation layer renders against.
    fn settings(&self) -> &CalendarSettings;

    /// Records the date the view is focused on.
    fn set_selected_date(&mut self, date: NaiveDate);

    /// Returns the currently selected date, if one was set.
    fn selected_date(&self) -> Option<NaiveDate>;

    /// Called once before any other callback of a walk.
    fn on_view_start(&mut self, _mode: ViewMode) {}

    /// Called once after all other callbacks of a walk.
    fn on_view_end(&mut self, _mode: ViewMode) {}

    /// Called when a month traversal begins, with the month's first day.
    fn on_month_start(&mut self, _date: NaiveDate) {}

    /// Called when a month traversal ends, with the cursor's resting date.
    fn on_month_end(&mut self, _date: NaiveDate) {}

    /// Called when a week traversal begins, with the week's last day (the
    /// cursor sits at the end of the week to resolve year-spanning weeks).
    fn on_week_start(&mut self, _date: NaiveDate) {}

    /// Called when a week traversal ends, with the cursor's resting date.
    fn on_week_end(&mut self, _date: NaiveDate) {}

    /// Called once per day inside the committed frame, with the entries
    /// active on that date.
    fn on_day(&mut self, _date: NaiveDate, _entries: &[CalendarEntry]) {}
}
