//! Errors for the ODE integrators.

use thiserror::Error;

/// Errors from setting up or running an integration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OdeError {
    /// The step size must be strictly positive.
    #[error("step size must be positive, got {h}")]
    NonPositiveStep {
        /// The offending step
        h: f64,
    },

    /// The interval end does not lie after the start.
    #[error("empty interval: t_end ({t_end}) must be greater than t0 ({t0})")]
    EmptyInterval {
        /// Interval start
        t0: f64,
        /// Interval end
        t_end: f64,
    },

    /// The right-hand side returned a vector of the wrong dimension.
    #[error("dimension mismatch: state has {expected} components, f returned {got}")]
    DimensionMismatch {
        /// State dimension
        expected: usize,
        /// Dimension returned by the right-hand side
        got: usize,
    },
}
