use chrono::{Datelike, NaiveDate, NaiveDateTime};

use super::frame::{end_of_week, start_of_week, FrameTracker, TimeFrame};
use super::traits::{CalendarHandler, EntryProvider};
use super::types::{CalendarEntry, ViewMode};
use crate::config::DateTimeConfig;
use crate::factory;
use crate::utils::{last_day_of_month, weeks_in_week_year, weeks_of_month};

/// Walks a day, week or month grid and delivers ordered lifecycle callbacks
/// to a [`CalendarHandler`].
///
/// A single walk is synchronous and deterministic. The view is not
/// reentrant: concurrent walks need separate instances, since a walk mutates
/// the shared cursor and frames.
#[derive(Debug, Clone)]
pub struct CalendarView {
    mode: ViewMode,
    tracker: FrameTracker,
}

impl CalendarView {
    /// Creates a view in the given mode with the cursor at the current
    /// instant of the configured zone.
    pub fn new(mode: ViewMode, config: &DateTimeConfig) -> Self {
        Self::with_cursor(mode, factory::current_local_datetime(config))
    }

    /// Creates a view in the given mode with an explicit cursor position.
    pub fn with_cursor(mode: ViewMode, cursor: NaiveDateTime) -> Self {
        Self {
            mode,
            tracker: FrameTracker::new(cursor),
        }
    }

    /// Returns the current view mode.
    pub fn view_mode(&self) -> ViewMode {
        self.mode
    }

    /// Switches the view mode and recommits the time frame for the new
    /// granularity.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        tracing::debug!(%mode, "Switching view mode");
        self.mode = mode;
        match mode {
            ViewMode::Day => self.tracker.set_frame_day(true),
            ViewMode::Week => self.tracker.set_frame_week(true),
            ViewMode::Month => self.tracker.set_frame_month(true),
        }
    }

    /// Returns the cursor's current date.
    pub fn cursor_date(&self) -> NaiveDate {
        self.tracker.cursor().date()
    }

    /// Returns the cursor's current year.
    pub fn current_year(&self) -> i32 {
        self.tracker.cursor().year()
    }

    /// Returns the ISO week-year at the cursor. The week containing the
    /// first days of a year counts towards that year.
    pub fn week_year(&self) -> i32 {
        self.tracker.week_year()
    }

    /// Returns the month the cursor's week is counted towards: week 1 always
    /// belongs to January, otherwise the month holding the majority of the
    /// week's days.
    pub fn month_of_week(&self) -> u32 {
        let cursor = self.tracker.cursor();
        if cursor.date().iso_week().week() == 1 {
            return 1;
        }
        let week_start = start_of_week(cursor).date();
        let week_end = end_of_week(cursor).date();
        if week_start.month() != week_end.month() {
            let days_in_start_month =
                last_day_of_month(week_start.year(), week_start.month()).day() - week_start.day();
            if days_in_start_month > 2 {
                week_start.month()
            } else {
                week_end.month()
            }
        } else {
            cursor.date().month()
        }
    }

    /// Returns the committed time frame.
    pub fn committed_frame(&self) -> TimeFrame {
        self.tracker.frame()
    }

    /// Returns the pointer time frame.
    pub fn pointer_frame(&self) -> TimeFrame {
        self.tracker.pointer()
    }

    /// Moves the cursor to the given date.
    pub fn go_to(&mut self, date: NaiveDate) {
        self.tracker.go_to(date);
    }

    /// Moves the cursor to the current instant of the configured zone.
    pub fn go_today(&mut self, config: &DateTimeConfig) {
        self.tracker.set_cursor(factory::current_local_datetime(config));
    }

    /// Recommits the time frame for the current granularity, then advances
    /// the cursor by `count` units of it (negative moves backward).
    pub fn roll(&mut self, count: i32) {
        match self.mode {
            ViewMode::Day => self.tracker.roll_days(count as i64, true),
            ViewMode::Week => self.tracker.roll_weeks(count as i64, true),
            ViewMode::Month => self.tracker.roll_months(count, true),
        }
    }

    /// Walks the grid in the current mode, driving the handler.
    ///
    /// The handler's selected date is set to the cursor's date, the
    /// `on_view_start`/`on_view_end` events bracket the walk, and the cursor
    /// is restored afterwards so the call does not leak its mutation. An
    /// absent provider yields empty entry lists; `on_day` still fires.
    pub fn get_view(
        &mut self,
        handler: &mut dyn CalendarHandler,
        provider: Option<&dyn EntryProvider>,
    ) {
        let saved = self.tracker.cursor();
        handler.set_selected_date(saved.date());
        handler.on_view_start(self.mode);
        match self.mode {
            ViewMode::Day => self.view_day(true, handler, provider),
            ViewMode::Week => self.view_week(true, handler, provider),
            ViewMode::Month => self.view_month(true, handler, provider),
        }
        handler.on_view_end(self.mode);
        self.tracker.set_cursor(saved);
    }

    /// Switches the view mode, then walks the grid.
    pub fn get_view_in_mode(
        &mut self,
        handler: &mut dyn CalendarHandler,
        provider: Option<&dyn EntryProvider>,
        mode: ViewMode,
    ) {
        self.set_view_mode(mode);
        self.get_view(handler, provider);
    }

    fn view_month(
        &mut self,
        commit: bool,
        handler: &mut dyn CalendarHandler,
        provider: Option<&dyn EntryProvider>,
    ) {
        self.tracker.set_frame_month(commit);
        self.tracker.go_to_start_of_month();
        let first = self.tracker.cursor().date();
        handler.on_month_start(first);

        let (start_week, end_week) = weeks_of_month(first.year(), first.month());
        // A month whose week numbering wraps (a December ending in week 1 of
        // the next week-year, or a January starting in week 52/53 of the
        // previous one) reports end_week < start_week; extend past the wrap
        // by the length of the week-year the first day belongs to.
        let last_week = if end_week < start_week {
            end_week + weeks_in_week_year(first.iso_week().year())
        } else {
            end_week
        };
        let month = first.month();
        let year = first.year();
        for week in start_week..=last_week {
            self.view_week(false, handler, provider);
            let at = self.tracker.cursor().date();
            let month_last_day = last_day_of_month(at.year(), at.month());
            // Stop once the walk has passed the target month: the cursor sits
            // on its month's last day, or left the month, or crossed into the
            // next year past week 1.
            if at == month_last_day || at.month() != month || (at.year() != year && week > 1) {
                break;
            }
            self.tracker.roll_weeks(1, false);
        }
        handler.on_month_end(self.tracker.cursor().date());
    }

    fn view_week(
        &mut self,
        commit: bool,
        handler: &mut dyn CalendarHandler,
        provider: Option<&dyn EntryProvider>,
    ) {
        self.tracker.set_frame_week(commit);
        // Resolve year-spanning weeks from the end of the week: the week
        // containing 2007-12-31 and 2008-01-01 must count as week 1 of 2008.
        self.tracker.go_to_end_of_week();
        handler.on_week_start(self.tracker.cursor().date());

        self.tracker.go_to_start_of_week();
        for day in 0..7 {
            self.view_day(false, handler, provider);
            if day < 6 {
                self.tracker.roll_days(1, false);
            }
        }
        handler.on_week_end(self.tracker.cursor().date());
    }

    fn view_day(
        &mut self,
        commit: bool,
        handler: &mut dyn CalendarHandler,
        provider: Option<&dyn EntryProvider>,
    ) {
        self.tracker.set_frame_day(commit);
        self.tracker.go_to_start_of_day();

        let date = self.tracker.cursor().date();
        // Grid days outside the committed frame (the trailing/leading days of
        // a week that spill over the requested month) get no callback.
        if self.tracker.is_in_frame(date) {
            let entries = self.fetch_entries(provider);
            handler.on_day(date, &entries);
        }
    }

    fn fetch_entries(&self, provider: Option<&dyn EntryProvider>) -> Vec<CalendarEntry> {
        let Some(provider) = provider else {
            return Vec::new();
        };
        provider
            .entries_for_range(self.tracker.pointer())
            .into_iter()
            .filter(|entry| self.tracker.entry_in_frame(entry, true))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::settings::CalendarSettings;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn make_datetime(year: i32, month: u32, day: u32, hour: u32, min: u32) -> NaiveDateTime {
        make_date(year, month, day).and_hms_opt(hour, min, 0).unwrap()
    }

    /// Records every callback in order for assertions.
    #[derive(Debug)]
    struct RecordingHandler {
        settings: CalendarSettings,
        selected: Option<NaiveDate>,
        view_events: Vec<(&'static str, ViewMode)>,
        month_events: Vec<(&'static str, NaiveDate)>,
        week_events: Vec<(&'static str, NaiveDate)>,
        days: Vec<(NaiveDate, Vec<CalendarEntry>)>,
    }

    impl RecordingHandler {
        fn new(settings: CalendarSettings) -> Self {
            Self {
                settings,
                selected: None,
                view_events: Vec::new(),
                month_events: Vec::new(),
                week_events: Vec::new(),
                days: Vec::new(),
            }
        }

        fn day_dates(&self) -> Vec<NaiveDate> {
            self.days.iter().map(|(date, _)| *date).collect()
        }

        fn entries_on(&self, date: NaiveDate) -> Option<&[CalendarEntry]> {
            self.days
                .iter()
                .find(|(d, _)| *d == date)
                .map(|(_, entries)| entries.as_slice())
        }
    }

    impl CalendarHandler for RecordingHandler {
        fn settings(&self) -> &CalendarSettings {
            &self.settings
        }

        fn set_selected_date(&mut self, date: NaiveDate) {
            self.selected = Some(date);
        }

        fn selected_date(&self) -> Option<NaiveDate> {
            self.selected
        }

        fn on_view_start(&mut self, mode: ViewMode) {
            self.view_events.push(("start", mode));
        }

        fn on_view_end(&mut self, mode: ViewMode) {
            self.view_events.push(("end", mode));
        }

        fn on_month_start(&mut self, date: NaiveDate) {
            self.month_events.push(("start", date));
        }

        fn on_month_end(&mut self, date: NaiveDate) {
            self.month_events.push(("end", date));
        }

        fn on_week_start(&mut self, date: NaiveDate) {
            self.week_events.push(("start", date));
        }

        fn on_week_end(&mut self, date: NaiveDate) {
            self.week_events.push(("end", date));
        }

        fn on_day(&mut self, date: NaiveDate, entries: &[CalendarEntry]) {
            self.days.push((date, entries.to_vec()));
        }
    }

    /// The four-entry October 2007 fixture; entry 4 spans most of the month.
    struct OctoberEntries;

    impl EntryProvider for OctoberEntries {
        fn entries_for_range(&self, _frame: TimeFrame) -> Vec<CalendarEntry> {
            vec![
                CalendarEntry::new("TestEntry 1", make_datetime(2007, 10, 26, 10, 30))
                    .with_end(make_datetime(2007, 10, 26, 15, 0))
                    .with_link("-1-"),
                CalendarEntry::new("TestEntry 2", make_datetime(2007, 10, 27, 7, 0))
                    .with_end(make_datetime(2007, 10, 27, 13, 30))
                    .with_link("-2-"),
                CalendarEntry::new("TestEntry 3", make_datetime(2007, 10, 29, 16, 0))
                    .with_end(make_datetime(2007, 10, 29, 18, 30))
                    .with_link("-3-"),
                CalendarEntry::new("TestEntry 4", make_datetime(2007, 10, 4, 10, 0))
                    .with_end(make_datetime(2007, 10, 31, 23, 30))
                    .with_link("-4-"),
            ]
        }
    }

    fn october_settings() -> CalendarSettings {
        let mut settings = CalendarSettings::default();
        settings.set_holiday(make_date(2007, 10, 26), "Nationalfeiertag");
        settings.set_holiday(make_date(2007, 10, 19), "Heiliger Boris");
        settings
    }

    #[test]
    fn test_month_walk_covers_every_day_once() {
        let mut view =
            CalendarView::with_cursor(ViewMode::Month, make_datetime(2008, 1, 15, 12, 0));
        let mut handler = RecordingHandler::new(CalendarSettings::default());
        view.get_view(&mut handler, None);

        let expected: Vec<NaiveDate> = (1..=31).map(|d| make_date(2008, 1, d)).collect();
        assert_eq!(handler.day_dates(), expected);
    }

    #[test]
    fn test_month_walk_december_year_spanning() {
        // December 2008 ends in week 1 of 2009; the walk must still cover
        // all 31 days and stop before swallowing January.
        let mut view =
            CalendarView::with_cursor(ViewMode::Month, make_datetime(2008, 12, 10, 0, 0));
        let mut handler = RecordingHandler::new(CalendarSettings::default());
        view.get_view(&mut handler, None);

        let expected: Vec<NaiveDate> = (1..=31).map(|d| make_date(2008, 12, d)).collect();
        assert_eq!(handler.day_dates(), expected);
    }

    #[test]
    fn test_month_walk_january_week_year_spanning() {
        // January 2010 starts in week 53 of week-year 2009; the wrap must be
        // resolved against 2009's week count, not 2010's, or the walk stops
        // a week short.
        let mut view =
            CalendarView::with_cursor(ViewMode::Month, make_datetime(2010, 1, 15, 12, 0));
        let mut handler = RecordingHandler::new(CalendarSettings::default());
        view.get_view(&mut handler, None);

        let expected: Vec<NaiveDate> = (1..=31).map(|d| make_date(2010, 1, d)).collect();
        assert_eq!(handler.day_dates(), expected);
    }

    #[test]
    fn test_month_walk_january_spanning_six_grid_weeks() {
        // January 2005 starts on a Saturday in week 53 of 2004 and touches
        // six grid weeks.
        let mut view =
            CalendarView::with_cursor(ViewMode::Month, make_datetime(2005, 1, 1, 0, 0));
        let mut handler = RecordingHandler::new(CalendarSettings::default());
        view.get_view(&mut handler, None);

        let expected: Vec<NaiveDate> = (1..=31).map(|d| make_date(2005, 1, d)).collect();
        assert_eq!(handler.day_dates(), expected);
        assert_eq!(handler.week_events.iter().filter(|(e, _)| *e == "start").count(), 6);
    }

    #[test]
    fn test_month_walk_february_leap_year() {
        let mut view =
            CalendarView::with_cursor(ViewMode::Month, make_datetime(2008, 2, 1, 0, 0));
        let mut handler = RecordingHandler::new(CalendarSettings::default());
        view.get_view(&mut handler, None);

        assert_eq!(handler.day_dates().len(), 29);
        assert_eq!(handler.day_dates()[28], make_date(2008, 2, 29));
    }

    #[test]
    fn test_month_events_bracket_weeks() {
        let mut view =
            CalendarView::with_cursor(ViewMode::Month, make_datetime(2008, 1, 15, 12, 0));
        let mut handler = RecordingHandler::new(CalendarSettings::default());
        view.get_view(&mut handler, None);

        assert_eq!(handler.view_events.first(), Some(&("start", ViewMode::Month)));
        assert_eq!(handler.view_events.last(), Some(&("end", ViewMode::Month)));
        assert_eq!(handler.month_events[0], ("start", make_date(2008, 1, 1)));
        assert_eq!(handler.month_events[1].0, "end");
        // January 2008 spans weeks 1 through 5.
        assert_eq!(handler.week_events.iter().filter(|(e, _)| *e == "start").count(), 5);
    }

    #[test]
    fn test_week_walk_emits_seven_days() {
        // 2008-01-02 is a Wednesday; its week runs 2007-12-31 .. 2008-01-06.
        let mut view =
            CalendarView::with_cursor(ViewMode::Week, make_datetime(2008, 1, 2, 9, 0));
        let mut handler = RecordingHandler::new(CalendarSettings::default());
        view.get_view(&mut handler, None);

        let expected: Vec<NaiveDate> = (0..7)
            .map(|offset| make_date(2007, 12, 31) + chrono::Duration::days(offset))
            .collect();
        assert_eq!(handler.day_dates(), expected);
        // The week-start event carries the end-of-week date, which resolves
        // the year-spanning week to week 1 of 2008.
        assert_eq!(handler.week_events[0], ("start", make_date(2008, 1, 6)));
    }

    #[test]
    fn test_day_walk_sets_selected_date_and_restores_cursor() {
        let cursor = make_datetime(2007, 10, 26, 14, 30);
        let mut view = CalendarView::with_cursor(ViewMode::Day, cursor);
        let mut handler = RecordingHandler::new(october_settings());
        view.get_view(&mut handler, None);

        assert_eq!(handler.selected, Some(make_date(2007, 10, 26)));
        assert_eq!(handler.day_dates(), vec![make_date(2007, 10, 26)]);
        assert_eq!(view.cursor_date(), make_date(2007, 10, 26));
    }

    #[test]
    fn test_absent_provider_still_fires_on_day() {
        let mut view =
            CalendarView::with_cursor(ViewMode::Day, make_datetime(2007, 10, 26, 0, 0));
        let mut handler = RecordingHandler::new(CalendarSettings::default());
        view.get_view(&mut handler, None);

        assert_eq!(handler.entries_on(make_date(2007, 10, 26)), Some(&[][..]));
    }

    #[test]
    fn test_day_walk_filters_entries_to_the_day() {
        let mut view =
            CalendarView::with_cursor(ViewMode::Day, make_datetime(2007, 10, 26, 0, 0));
        let mut handler = RecordingHandler::new(october_settings());
        view.get_view(&mut handler, Some(&OctoberEntries));

        let entries = handler.entries_on(make_date(2007, 10, 26)).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.display_name.as_str()).collect();
        assert_eq!(names, vec!["TestEntry 1", "TestEntry 4"]);
    }

    #[test]
    fn test_spanning_entry_appears_on_every_day() {
        // Entry 4 runs 2007-10-04 through 2007-10-31; a day walk on every
        // date of that range must list it (starts-within, spans and
        // ends-within cases of the overlap test).
        let mut view =
            CalendarView::with_cursor(ViewMode::Day, make_datetime(2007, 10, 1, 0, 0));
        for day in 1..=31 {
            view.go_to(make_date(2007, 10, day));
            let mut handler = RecordingHandler::new(october_settings());
            view.get_view(&mut handler, Some(&OctoberEntries));

            let entries = handler.entries_on(make_date(2007, 10, day)).unwrap();
            let has_spanning = entries.iter().any(|e| e.display_name == "TestEntry 4");
            assert_eq!(has_spanning, (4..=31).contains(&day), "day {day}");
        }
    }

    #[test]
    fn test_month_walk_with_entries() {
        let mut view =
            CalendarView::with_cursor(ViewMode::Month, make_datetime(2007, 10, 15, 0, 0));
        let mut handler = RecordingHandler::new(october_settings());
        view.get_view(&mut handler, Some(&OctoberEntries));

        assert_eq!(handler.day_dates().len(), 31);
        for day in 4..=31 {
            let entries = handler.entries_on(make_date(2007, 10, day)).unwrap();
            assert!(
                entries.iter().any(|e| e.display_name == "TestEntry 4"),
                "entry 4 missing on day {day}"
            );
        }
    }

    #[test]
    fn test_holiday_working_day_and_weekend_classification() {
        let settings = october_settings();
        let mut view =
            CalendarView::with_cursor(ViewMode::Day, make_datetime(2007, 10, 26, 0, 0));

        // 2007-10-26 is the configured holiday.
        let mut handler = RecordingHandler::new(settings.clone());
        view.get_view(&mut handler, None);
        let day = handler.day_dates()[0];
        assert_eq!(handler.settings().holiday(day), Some("Nationalfeiertag"));

        // 2007-10-25 is a plain Thursday working day.
        view.go_to(make_date(2007, 10, 25));
        let mut handler = RecordingHandler::new(settings.clone());
        view.get_view(&mut handler, None);
        let day = handler.day_dates()[0];
        assert!(!handler.settings().is_holiday(day));
        assert!(handler.settings().is_working_day(day));

        // 2007-10-27 is a Saturday: neither holiday nor working day.
        view.go_to(make_date(2007, 10, 27));
        let mut handler = RecordingHandler::new(settings);
        view.get_view(&mut handler, None);
        let day = handler.day_dates()[0];
        assert!(!handler.settings().is_holiday(day));
        assert!(!handler.settings().is_working_day(day));
    }

    #[test]
    fn test_roll_day_round_trip() {
        let mut view =
            CalendarView::with_cursor(ViewMode::Day, make_datetime(2008, 1, 15, 8, 0));
        view.roll(1);
        assert_eq!(view.cursor_date(), make_date(2008, 1, 16));
        view.roll(-1);
        assert_eq!(view.cursor_date(), make_date(2008, 1, 15));
    }

    #[test]
    fn test_roll_dispatches_on_mode() {
        let mut view =
            CalendarView::with_cursor(ViewMode::Week, make_datetime(2008, 1, 15, 0, 0));
        view.roll(2);
        assert_eq!(view.cursor_date(), make_date(2008, 1, 29));

        view.set_view_mode(ViewMode::Month);
        view.roll(-3);
        assert_eq!(view.cursor_date(), make_date(2007, 10, 29));
    }

    #[test]
    fn test_set_view_mode_commits_frame() {
        let mut view =
            CalendarView::with_cursor(ViewMode::Day, make_datetime(2008, 1, 15, 0, 0));
        view.set_view_mode(ViewMode::Month);
        assert_eq!(
            view.committed_frame(),
            TimeFrame::closed(make_date(2008, 1, 1), make_date(2008, 1, 31))
        );
    }

    #[test]
    fn test_repeated_walks_are_identical() {
        let mut view =
            CalendarView::with_cursor(ViewMode::Month, make_datetime(2008, 1, 15, 12, 0));

        let mut first = RecordingHandler::new(CalendarSettings::default());
        view.get_view(&mut first, Some(&OctoberEntries));
        let mut second = RecordingHandler::new(CalendarSettings::default());
        view.get_view(&mut second, Some(&OctoberEntries));

        assert_eq!(first.days, second.days);
        assert_eq!(first.week_events, second.week_events);
    }

    #[test]
    fn test_month_of_week() {
        // Week 1 always counts towards January.
        let view = CalendarView::with_cursor(ViewMode::Week, make_datetime(2007, 12, 31, 0, 0));
        assert_eq!(view.month_of_week(), 1);

        // 2008-01-31 (Thursday) sits in a week spanning January/February;
        // January holds Mon..Thu, the majority.
        let view = CalendarView::with_cursor(ViewMode::Week, make_datetime(2008, 1, 31, 0, 0));
        assert_eq!(view.month_of_week(), 1);

        // A mid-month week stays in its month.
        let view = CalendarView::with_cursor(ViewMode::Week, make_datetime(2008, 8, 13, 0, 0));
        assert_eq!(view.month_of_week(), 8);
    }

    #[test]
    fn test_week_year() {
        let view = CalendarView::with_cursor(ViewMode::Week, make_datetime(2008, 1, 1, 0, 0));
        assert_eq!(view.week_year(), 2008);
        assert_eq!(view.current_year(), 2008);

        // 2007-12-31 belongs to week 1 of 2008.
        let view = CalendarView::with_cursor(ViewMode::Week, make_datetime(2007, 12, 31, 0, 0));
        assert_eq!(view.week_year(), 2008);
        assert_eq!(view.current_year(), 2007);
    }
}
