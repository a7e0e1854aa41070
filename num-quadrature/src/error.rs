//! Errors for the quadrature rules.

use thiserror::Error;

/// Errors from applying a Newton-Cotes rule.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuadratureError {
    /// Fewer than two samples (no segment to integrate).
    #[error("integration needs at least 2 samples, got {got}")]
    TooFewPoints {
        /// Number of samples provided
        got: usize,
    },

    /// Simpson 1/3 needs an even number of segments.
    #[error("Simpson 1/3 requires an EVEN number of segments, got {got}")]
    OddSegments {
        /// Number of segments provided
        got: usize,
    },

    /// Simpson 3/8 needs the segment count to be a multiple of three.
    #[error("Simpson 3/8 requires a number of segments MULTIPLE OF 3, got {got}")]
    SegmentsNotMultipleOfThree {
        /// Number of segments provided
        got: usize,
    },

    /// Abscissae supplied in table mode are not uniformly spaced.
    #[error("x values are not uniformly spaced (step changes at index {index})")]
    NonUniformGrid {
        /// First index where the step deviates
        index: usize,
    },

    /// X and Y tables with different lengths.
    #[error("x and y must have the same length: got {x_len} and {y_len}")]
    MismatchedLengths {
        /// Number of abscissae
        x_len: usize,
        /// Number of ordinates
        y_len: usize,
    },
}
