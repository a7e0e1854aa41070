//! Gauss elimination on the augmented matrix
//!
//! Both variants reduce `[A|b]` to row-echelon form and back-substitute.
//! The naive variant stops at the first zero pivot; the partial-pivoting
//! variant first swaps the largest-magnitude candidate into the pivot row
//! and fails only when that maximum is still zero.

use crate::error::{Result, SolveError};
use crate::substitution::{check_len, check_square};
use ndarray::{Array1, Array2, s};

/// Result of a Gauss solve: the solution and the echelon form it came from.
#[derive(Debug, Clone)]
pub struct GaussSolution {
    /// Solution vector
    pub x: Array1<f64>,
    /// Row-echelon form of the augmented matrix, for display
    pub echelon: Array2<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pivoting {
    None,
    Partial,
}

/// Solve without row exchanges. Fails on the first zero pivot; the caller
/// must restart with a pivoting method.
pub fn solve_naive(a: &Array2<f64>, b: &Array1<f64>) -> Result<GaussSolution> {
    eliminate(a, b, Pivoting::None)
}

/// Solve with partial pivoting: before eliminating column k, the row with
/// the largest absolute value in that column (rows k..n) is swapped into
/// position k. Ties keep the first row encountered.
pub fn solve_partial_pivot(a: &Array2<f64>, b: &Array1<f64>) -> Result<GaussSolution> {
    eliminate(a, b, Pivoting::Partial)
}

fn eliminate(a: &Array2<f64>, b: &Array1<f64>, pivoting: Pivoting) -> Result<GaussSolution> {
    let n = check_square(a)?;
    check_len(n, b.len())?;

    // Working copy [A|b]; the caller's matrices are never touched.
    let mut m = Array2::zeros((n, n + 1));
    m.slice_mut(s![.., ..n]).assign(a);
    m.slice_mut(s![.., n]).assign(b);

    for k in 0..n {
        if pivoting == Pivoting::Partial {
            let mut max_val = m[[k, k]].abs();
            let mut max_row = k;
            for i in (k + 1)..n {
                let val = m[[i, k]].abs();
                if val > max_val {
                    max_val = val;
                    max_row = i;
                }
            }
            if max_row != k {
                for j in 0..=n {
                    m.swap([k, j], [max_row, j]);
                }
            }
        }

        let pivot = m[[k, k]];
        if pivot == 0.0 {
            return Err(SolveError::SingularMatrix { column: k });
        }

        for i in (k + 1)..n {
            let factor = m[[i, k]] / pivot;
            if factor == 0.0 {
                continue;
            }
            for j in k..=n {
                m[[i, j]] -= factor * m[[k, j]];
            }
            m[[i, k]] = 0.0;
        }
    }

    // Back substitution over the echelon form.
    let mut x = Array1::zeros(n);
    for i in (0..n).rev() {
        let mut sum = 0.0;
        for j in (i + 1)..n {
            sum += m[[i, j]] * x[j];
        }
        x[i] = (m[[i, n]] - sum) / m[[i, i]];
    }

    Ok(GaussSolution { x, echelon: m })
}
