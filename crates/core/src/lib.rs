//! Date/time utilities and calendar grid views built on [`chrono`].
//!
//! The crate groups a handful of small, independent concerns:
//!
//! - [`config`] - the time-zone configuration snapshot and the process-wide
//!   default it is seeded from.
//! - [`factory`] - checked construction of dates, times and zoned instants
//!   under a [`config::DateTimeConfig`].
//! - [`compare`] - null-safe comparisons and inclusive range checks over
//!   `Option`-wrapped date/time values.
//! - [`format`] - string round-tripping with explicit patterns.
//! - [`period`] - start/end range value objects with optional open bounds.
//! - [`expiration`] - expiration-tracking value objects.
//! - [`view`] - the calendar grid walker: time-frame tracking, day/week/month
//!   traversal and the handler/entry-provider contracts that drive calendar
//!   widgets.

pub mod compare;
pub mod config;
pub mod expiration;
pub mod factory;
pub mod format;
pub mod period;
pub mod serde;
pub mod utils;
pub mod view;

pub use config::{ConfigError, DateTimeConfig};
pub use expiration::{Expirable, Expiration, Expiring};
pub use period::{DatePeriod, DateTimePeriod, PeriodError, TimePeriod};
pub use view::{
    CalendarEntry, CalendarHandler, CalendarSettings, CalendarView, EntryProvider, SettingsError,
    TimeFrame, ViewMode,
};
