use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use super::error::SettingsError;

/// Business-hours bounds, working days and a holiday table for a calendar
/// widget.
///
/// The hour/minute bounds are validated at construction and immutable
/// afterwards; the holiday table stays mutable so holidays can be merged in
/// as they are resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarSettings {
    start_hour: u32,
    start_minute: u32,
    end_hour: u32,
    end_minute: u32,
    working_days: Vec<Weekday>,
    holidays: HashMap<NaiveDate, String>,
}

impl CalendarSettings {
    /// Creates settings with the given business-hours bounds and the default
    /// Monday-through-Friday working days.
    pub fn new(
        start_hour: u32,
        start_minute: u32,
        end_hour: u32,
        end_minute: u32,
    ) -> Result<Self, SettingsError> {
        if start_hour > 23 {
            return Err(SettingsError::InvalidHour {
                field: "start",
                value: start_hour,
            });
        }
        if start_minute > 59 {
            return Err(SettingsError::InvalidMinute {
                field: "start",
                value: start_minute,
            });
        }
        if end_hour > 23 {
            return Err(SettingsError::InvalidHour {
                field: "end",
                value: end_hour,
            });
        }
        if end_minute > 59 {
            return Err(SettingsError::InvalidMinute {
                field: "end",
                value: end_minute,
            });
        }
        Ok(Self {
            start_hour,
            start_minute,
            end_hour,
            end_minute,
            working_days: vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ],
            holidays: HashMap::new(),
        })
    }

    /// Replaces the working days. At most 7 entries.
    pub fn set_working_days(&mut self, working_days: &[Weekday]) -> Result<(), SettingsError> {
        if working_days.len() > 7 {
            return Err(SettingsError::TooManyWorkingDays(working_days.len()));
        }
        self.working_days = working_days.to_vec();
        Ok(())
    }

    /// Returns the configured working days.
    pub fn working_days(&self) -> &[Weekday] {
        &self.working_days
    }

    /// Returns true if the date falls on a configured working day.
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        self.working_days.contains(&date.weekday())
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn start_minute(&self) -> u32 {
        self.start_minute
    }

    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    pub fn end_minute(&self) -> u32 {
        self.end_minute
    }

    /// Returns the start of business hours as a wall-clock time.
    pub fn opening_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.start_hour, self.start_minute, 0)
            .expect("bounds validated at construction")
    }

    /// Returns the end of business hours as a wall-clock time.
    pub fn closing_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.end_hour, self.end_minute, 0)
            .expect("bounds validated at construction")
    }

    /// Records a holiday with its display label.
    pub fn set_holiday(&mut self, date: NaiveDate, label: impl Into<String>) {
        self.holidays.insert(date, label.into());
    }

    /// Merges a holiday table into this one. Existing dates are overwritten.
    pub fn add_holidays(&mut self, holidays: HashMap<NaiveDate, String>) {
        self.holidays.extend(holidays);
    }

    /// Returns the holiday label for the date, if any.
    pub fn holiday(&self, date: NaiveDate) -> Option<&str> {
        self.holidays.get(&date).map(String::as_str)
    }

    /// Returns true if the date is a configured holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains_key(&date)
    }
}

impl Default for CalendarSettings {
    /// Business hours 06:00 to 20:00, Monday through Friday.
    fn default() -> Self {
        Self::new(6, 0, 20, 0).expect("default bounds are valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_default_settings() {
        let settings = CalendarSettings::default();
        assert_eq!(settings.start_hour(), 6);
        assert_eq!(settings.end_hour(), 20);
        assert_eq!(settings.working_days().len(), 5);
        assert_eq!(settings.opening_time(), NaiveTime::from_hms_opt(6, 0, 0).unwrap());
        assert_eq!(settings.closing_time(), NaiveTime::from_hms_opt(20, 0, 0).unwrap());
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        assert_eq!(
            CalendarSettings::new(24, 0, 20, 0),
            Err(SettingsError::InvalidHour {
                field: "start",
                value: 24
            })
        );
        assert_eq!(
            CalendarSettings::new(6, 60, 20, 0),
            Err(SettingsError::InvalidMinute {
                field: "start",
                value: 60
            })
        );
        assert_eq!(
            CalendarSettings::new(6, 0, 99, 0),
            Err(SettingsError::InvalidHour {
                field: "end",
                value: 99
            })
        );
        assert_eq!(
            CalendarSettings::new(6, 0, 20, 61),
            Err(SettingsError::InvalidMinute {
                field: "end",
                value: 61
            })
        );
    }

    #[test]
    fn test_too_many_working_days_rejected() {
        let mut settings = CalendarSettings::default();
        let days = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
            Weekday::Mon,
        ];
        assert_eq!(
            settings.set_working_days(&days),
            Err(SettingsError::TooManyWorkingDays(8))
        );
        // The previous working days stay in effect.
        assert_eq!(settings.working_days().len(), 5);
    }

    #[test]
    fn test_working_day_lookup() {
        let settings = CalendarSettings::default();
        assert!(settings.is_working_day(make_date(2007, 10, 25))); // Thursday
        assert!(settings.is_working_day(make_date(2007, 10, 26))); // Friday
        assert!(!settings.is_working_day(make_date(2007, 10, 27))); // Saturday
    }

    #[test]
    fn test_holiday_table() {
        let mut settings = CalendarSettings::default();
        settings.set_holiday(make_date(2007, 10, 26), "Nationalfeiertag");

        assert!(settings.is_holiday(make_date(2007, 10, 26)));
        assert_eq!(settings.holiday(make_date(2007, 10, 26)), Some("Nationalfeiertag"));
        assert!(!settings.is_holiday(make_date(2007, 10, 25)));
        assert_eq!(settings.holiday(make_date(2007, 10, 25)), None);
    }

    #[test]
    fn test_holiday_merge_overwrites() {
        let mut settings = CalendarSettings::default();
        settings.set_holiday(make_date(2007, 10, 26), "Old label");

        let mut incoming = HashMap::new();
        incoming.insert(make_date(2007, 10, 26), "Nationalfeiertag".to_string());
        incoming.insert(make_date(2007, 10, 19), "Heiliger Boris".to_string());
        settings.add_holidays(incoming);

        assert_eq!(settings.holiday(make_date(2007, 10, 26)), Some("Nationalfeiertag"));
        assert_eq!(settings.holiday(make_date(2007, 10, 19)), Some("Heiliger Boris"));
    }
}
