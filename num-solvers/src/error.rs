//! Error types for the linear solvers.

use thiserror::Error;

/// Errors that can occur while solving a linear system.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SolveError {
    /// Elimination found a zero pivot that pivoting could not (or was not
    /// allowed to) repair; the system is singular or needs row exchanges.
    #[error("matrix is singular: zero pivot in column {column}")]
    SingularMatrix {
        /// Column at which elimination stopped
        column: usize,
    },

    /// A zero diagonal entry was hit during forward or back substitution.
    #[error("zero pivot on the diagonal at row {row}")]
    ZeroPivot {
        /// Row of the zero diagonal entry
        row: usize,
    },

    /// Matrix and vector sizes are inconsistent.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Expected length/size
        expected: usize,
        /// Actual length/size
        got: usize,
    },

    /// The coefficient matrix is not square.
    #[error("matrix is not square: {rows}x{cols}")]
    NonSquare {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },
}

/// A specialized `Result` for solver operations.
pub type Result<T> = std::result::Result<T, SolveError>;

impl SolveError {
    /// True for the singular/zero-pivot family, where retrying with a
    /// pivoting method may help.
    pub fn is_singular(&self) -> bool {
        matches!(
            self,
            SolveError::SingularMatrix { .. } | SolveError::ZeroPivot { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = SolveError::SingularMatrix { column: 2 };
        assert_eq!(err.to_string(), "matrix is singular: zero pivot in column 2");
        assert!(err.is_singular());
        let err = SolveError::DimensionMismatch {
            expected: 3,
            got: 2,
        };
        assert!(!err.is_singular());
    }
}
