//! Calendar predicates and week arithmetic.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::config::DateTimeConfig;
use crate::factory;

/// Returns true for Saturday and Sunday.
pub fn is_weekend_day(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}

/// Returns true if the date falls on a weekend.
pub fn is_weekend(date: NaiveDate) -> bool {
    is_weekend_day(date.weekday())
}

/// Returns true if the date falls on a weekday (Monday through Friday).
pub fn is_workday(date: NaiveDate) -> bool {
    !is_weekend(date)
}

/// Returns true if the date is the first day of an ISO week (Monday).
pub fn is_first_day_of_week(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Mon
}

/// Returns true if the date is the last day of an ISO week (Sunday).
pub fn is_last_day_of_week(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sun
}

/// Returns the last calendar day of the given month.
///
/// # Panics
/// Panics if `month` is not in `1..=12`.
pub fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .expect("Invalid year/month for last_day_of_month");
    first_of_next
        .pred_opt()
        .expect("Failed to get last day of month")
}

/// Returns the ISO week numbers of the month's first and last day.
///
/// Note that for a December whose last days already belong to week 1 of the
/// next week-year, the second number can be smaller than the first.
///
/// # Panics
/// Panics if `month` is not in `1..=12`.
pub fn weeks_of_month(year: i32, month: u32) -> (u32, u32) {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("Invalid year/month");
    let last = last_day_of_month(year, month);
    (first.iso_week().week(), last.iso_week().week())
}

/// Returns the number of ISO weeks in the given week-year (52 or 53).
///
/// December 28th always lies in the last week of its week-year.
pub fn weeks_in_week_year(year: i32) -> u32 {
    NaiveDate::from_ymd_opt(year, 12, 28)
        .expect("December 28th always exists")
        .iso_week()
        .week()
}

/// Returns today if it is a weekday, otherwise the next Monday.
pub fn current_or_next_workday(config: &DateTimeConfig) -> NaiveDate {
    let mut date = factory::current_local_date(config);
    while is_weekend(date) {
        date += Duration::days(1);
    }
    date
}

/// Returns true if the date is December 31st.
pub fn is_new_years_eve(date: NaiveDate) -> bool {
    date.month() == 12 && date.day() == 31
}
