//! Start/end range value objects with optional open bounds.

mod error;
mod types;

pub use error::PeriodError;
pub use types::{DatePeriod, DateTimePeriod, TimePeriod};
