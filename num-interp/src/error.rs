//! Errors for the interpolation routines.

use thiserror::Error;

/// Errors from interpolation construction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InterpError {
    /// X and Y lists have different lengths.
    #[error("x and y must have the same length: got {x_len} and {y_len}")]
    MismatchedLengths {
        /// Number of abscissae
        x_len: usize,
        /// Number of ordinates
        y_len: usize,
    },

    /// Fewer than two points.
    #[error("interpolation needs at least 2 points, got {got}")]
    TooFewPoints {
        /// Number of points provided
        got: usize,
    },

    /// Two abscissae coincide, which would divide by zero.
    #[error("duplicate x value at index {index}")]
    DuplicateNodes {
        /// Index of the repeated abscissa
        index: usize,
    },

    /// Gregory-Newton requires uniformly spaced abscissae.
    #[error("x values are not uniformly spaced (step changes at index {index})")]
    UnevenSpacing {
        /// First index where the step deviates
        index: usize,
    },
}
