use thiserror::Error;

/// Errors that can occur when deriving values from an open-ended period.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PeriodError {
    #[error("Period has no start bound")]
    MissingStart,
    #[error("Period has no end bound")]
    MissingEnd,
}
