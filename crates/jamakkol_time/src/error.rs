//! Error types for calendar and clock parsing.

use thiserror::Error;

/// Errors from date, clock-time, or UTC offset parsing.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Calendar date did not match `YYYY-MM-DD` or does not exist.
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
    /// Clock time did not match `HH:MM` (24-hour).
    #[error("invalid clock time '{0}': expected HH:MM")]
    InvalidClockTime(String),
    /// UTC offset outside the civil range.
    #[error("UTC offset {0} h outside [-14, 14]")]
    InvalidUtcOffset(f64),
}
