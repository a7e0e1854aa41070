//! Forward and back substitution for triangular systems
//!
//! Shared by every factorization-based solve path: LU and LUP finish with
//! one forward and one back pass, Gauss elimination with a back pass over
//! the echelon form.

use crate::error::{Result, SolveError};
use ndarray::{Array1, Array2};

/// Solve `L y = b` for lower-triangular `L`, ascending row order.
///
/// Only entries at or below the diagonal are read.
pub fn forward_substitution(l: &Array2<f64>, b: &Array1<f64>) -> Result<Array1<f64>> {
    let n = check_square(l)?;
    check_len(n, b.len())?;

    let mut y = Array1::zeros(n);
    for i in 0..n {
        let mut sum = 0.0;
        for j in 0..i {
            sum += l[[i, j]] * y[j];
        }
        let diag = l[[i, i]];
        if diag == 0.0 {
            return Err(SolveError::ZeroPivot { row: i });
        }
        y[i] = (b[i] - sum) / diag;
    }
    Ok(y)
}

/// Solve `U x = y` for upper-triangular `U`, descending row order.
///
/// Only entries at or above the diagonal are read.
pub fn back_substitution(u: &Array2<f64>, y: &Array1<f64>) -> Result<Array1<f64>> {
    let n = check_square(u)?;
    check_len(n, y.len())?;

    let mut x = Array1::zeros(n);
    for i in (0..n).rev() {
        let mut sum = 0.0;
        for j in (i + 1)..n {
            sum += u[[i, j]] * x[j];
        }
        let diag = u[[i, i]];
        if diag == 0.0 {
            return Err(SolveError::ZeroPivot { row: i });
        }
        x[i] = (y[i] - sum) / diag;
    }
    Ok(x)
}

pub(crate) fn check_square(m: &Array2<f64>) -> Result<usize> {
    if m.nrows() != m.ncols() {
        return Err(SolveError::NonSquare {
            rows: m.nrows(),
            cols: m.ncols(),
        });
    }
    Ok(m.nrows())
}

pub(crate) fn check_len(expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(SolveError::DimensionMismatch { expected, got });
    }
    Ok(())
}
