//! Errors for curve fitting.

use num_methods_solvers::SolveError;
use thiserror::Error;

/// Errors from the fitting routines.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FitError {
    /// X and Y lists have different lengths.
    #[error("x and y must have the same length: got {x_len} and {y_len}")]
    MismatchedLengths {
        /// Number of abscissae
        x_len: usize,
        /// Number of ordinates
        y_len: usize,
    },

    /// Fewer than two points.
    #[error("fitting needs at least 2 points, got {got}")]
    TooFewPoints {
        /// Number of points provided
        got: usize,
    },

    /// Polynomial degree outside `1..points`.
    #[error("degree {degree} is invalid for {points} points (need 1 <= degree < points)")]
    InvalidDegree {
        /// Requested degree
        degree: usize,
        /// Number of data points
        points: usize,
    },

    /// First and last point share the same x; no line through them.
    #[error("first and last point have the same x; the line would be vertical")]
    VerticalLine,

    /// The normal equations could not be solved.
    #[error("normal equations are singular: {0}")]
    NormalEquations(#[from] SolveError),
}
