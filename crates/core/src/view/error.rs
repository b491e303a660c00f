use thiserror::Error;

/// Errors that can occur when constructing calendar settings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("{field} hour is invalid: {value} (must be 0..=23)")]
    InvalidHour { field: &'static str, value: u32 },
    #[error("{field} minute is invalid: {value} (must be 0..=59)")]
    InvalidMinute { field: &'static str, value: u32 },
    #[error("Too many working days: {0} (at most 7)")]
    TooManyWorkingDays(usize),
}
