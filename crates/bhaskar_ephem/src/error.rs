//! Error types for ephemeris computations.

use thiserror::Error;

/// Errors from analytic ephemeris evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemError {
    /// Iterative solver (Kepler, rise/set refinement) did not converge.
    #[error("no convergence: {0}")]
    NoConvergence(&'static str),
    /// Epoch outside the validity range of the element tables.
    #[error("epoch out of range: {0}")]
    EpochOutOfRange(&'static str),
    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
}
