//! Error type for the computation layer.

use bhaskar_ephem::EphemError;
use bhaskar_time::TimeError;

/// Errors surfaced by panchang, kundali, dasha and matching operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum JyotishError {
    #[error(transparent)]
    Time(#[from] TimeError),

    #[error(transparent)]
    Ephem(#[from] EphemError),

    /// An angular boundary search failed to bracket or converge.
    #[error("boundary search failed: {0}")]
    SearchFailed(&'static str),

    /// The Sun does not rise (or set) at this latitude and date, so no
    /// vedic day can be anchored.
    #[error("no sunrise at this location and date: {0}")]
    NoSunrise(&'static str),

    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_time_error() {
        let err: JyotishError = TimeError::InvalidDate("month must be 1-12").into();
        assert!(matches!(err, JyotishError::Time(_)));
    }

    #[test]
    fn display_includes_context() {
        let err = JyotishError::SearchFailed("tithi end");
        assert_eq!(err.to_string(), "boundary search failed: tithi end");
    }
}
