//! Error types for time conversions.

use thiserror::Error;

/// Errors from calendar and time-of-day validation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Calendar field out of range (month, day, hour, minute, second).
    #[error("invalid date: {0}")]
    InvalidDate(&'static str),
    /// UTC offset outside the civil range [-14, +14] hours.
    #[error("invalid utc offset: {0}")]
    InvalidOffset(&'static str),
}
