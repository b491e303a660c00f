//! Calendar grid views.
//!
//! A [`CalendarView`] walks a day, week or month grid and drives a
//! [`CalendarHandler`] with begin/end events and a per-day callback carrying
//! the [`CalendarEntry`] values an [`EntryProvider`] reports for that day.

mod error;
mod frame;
mod settings;
mod traits;
mod types;
mod walker;

pub use error::SettingsError;
pub use frame::{FrameTracker, TimeFrame};
pub use settings::CalendarSettings;
pub use traits::{CalendarHandler, EntryProvider};
pub use types::{CalendarEntry, ViewMode};
pub use walker::CalendarView;
