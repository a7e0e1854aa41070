//! LUP decomposition: partial pivoting with an explicit permutation
//!
//! Factors `P A = L U`. At each elimination step the largest-magnitude
//! candidate in the pivot column is swapped into place; the swap is applied
//! to the working `U`, to the permutation record, and to the already-filled
//! columns of `L` at once. Leaving `L` out of that swap silently breaks the
//! `P A = L U` identity.

use crate::error::{Result, SolveError};
use crate::substitution::{back_substitution, check_len, check_square, forward_substitution};
use ndarray::{Array1, Array2};

/// The factors of `P A = L U`.
#[derive(Debug, Clone)]
pub struct LupFactors {
    /// Unit lower-triangular factor
    pub l: Array2<f64>,
    /// Upper-triangular factor
    pub u: Array2<f64>,
    /// Row permutation: row `i` of `P A` is row `perm[i]` of `A`
    pub perm: Vec<usize>,
}

impl LupFactors {
    /// The permutation as an explicit 0/1 matrix, for display and for
    /// checking `P A = L U`.
    pub fn permutation_matrix(&self) -> Array2<f64> {
        let n = self.perm.len();
        let mut p = Array2::zeros((n, n));
        for (i, &src) in self.perm.iter().enumerate() {
            p[[i, src]] = 1.0;
        }
        p
    }

    /// Solve `A x = b`: permute `b`, then `L y = P b`, then `U x = y`.
    pub fn solve(&self, b: &Array1<f64>) -> Result<Array1<f64>> {
        let n = self.perm.len();
        check_len(n, b.len())?;

        let permuted = Array1::from_iter(self.perm.iter().map(|&src| b[src]));
        let y = forward_substitution(&self.l, &permuted)?;
        back_substitution(&self.u, &y)
    }
}

/// Factor `A` with partial pivoting. Fails with
/// [`SolveError::SingularMatrix`] only when the largest candidate pivot in a
/// column is zero.
pub fn factorize(a: &Array2<f64>) -> Result<LupFactors> {
    let n = check_square(a)?;

    let mut l = Array2::zeros((n, n));
    let mut u = a.clone();
    let mut perm: Vec<usize> = (0..n).collect();

    for k in 0..n {
        // Largest |u[i,k]| for i >= k; ties keep the first row.
        let mut max_val = u[[k, k]].abs();
        let mut max_row = k;
        for i in (k + 1)..n {
            let val = u[[i, k]].abs();
            if val > max_val {
                max_val = val;
                max_row = i;
            }
        }
        if max_val == 0.0 {
            return Err(SolveError::SingularMatrix { column: k });
        }

        if max_row != k {
            // Three-way swap: working U, permutation, filled columns of L.
            for j in 0..n {
                u.swap([k, j], [max_row, j]);
            }
            perm.swap(k, max_row);
            for j in 0..k {
                l.swap([k, j], [max_row, j]);
            }
        }

        let pivot = u[[k, k]];
        for i in (k + 1)..n {
            let factor = u[[i, k]] / pivot;
            l[[i, k]] = factor;
            for j in k..n {
                u[[i, j]] -= factor * u[[k, j]];
            }
            u[[i, k]] = 0.0;
        }
    }

    // Unit diagonal goes in last, after all row swaps are done.
    for i in 0..n {
        l[[i, i]] = 1.0;
    }

    Ok(LupFactors { l, u, perm })
}

/// Convenience: factor and solve in one call.
pub fn solve(a: &Array2<f64>, b: &Array1<f64>) -> Result<Array1<f64>> {
    factorize(a)?.solve(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    fn assert_pa_equals_lu(a: &Array2<f64>) {
        let f = factorize(a).unwrap();
        let pa = f.permutation_matrix().dot(a);
        let lu = f.l.dot(&f.u);
        for (x, y) in pa.iter().zip(lu.iter()) {
            assert_relative_eq!(x, y, epsilon = 1e-12);
        }
        for i in 0..a.nrows() {
            assert_relative_eq!(f.l[[i, i]], 1.0);
        }
    }

    #[test]
    fn test_pa_equals_lu() {
        assert_pa_equals_lu(&array![
            [3.0, 2.0, -4.0],
            [2.0, 3.0, 3.0],
            [5.0, -3.0, 1.0]
        ]);
        assert_pa_equals_lu(&array![[0.0, 1.0], [1.0, 1.0]]);
        assert_pa_equals_lu(&array![
            [1.0, 2.0, 3.0, 4.0],
            [4.0, 3.0, 2.0, 1.0],
            [1.0, -1.0, 1.0, -1.0],
            [2.0, 0.0, 0.0, 5.0]
        ]);
    }

    #[test]
    fn test_solve_fixture() {
        let a = array![[3.0, 2.0, -4.0], [2.0, 3.0, 3.0], [5.0, -3.0, 1.0]];
        let b = array![3.0, 15.0, 14.0];
        let x = solve(&a, &b).unwrap();
        assert_relative_eq!(x[0], 3.0, epsilon = 1e-10);
        assert_relative_eq!(x[1], 1.0, epsilon = 1e-10);
        assert_relative_eq!(x[2], 2.0, epsilon = 1e-10);
    }

    #[test]
    fn test_zero_pivot_is_repaired() {
        let a = array![[0.0, 1.0], [1.0, 1.0]];
        let b = array![2.0, 3.0];
        let x = solve(&a, &b).unwrap();
        assert_relative_eq!(x[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_singular_matrix_fails() {
        let a = array![[1.0, 2.0], [0.0, 0.0]];
        let b = array![1.0, 0.0];
        assert!(solve(&a, &b).unwrap_err().is_singular());
    }

    #[test]
    fn test_pivot_is_column_maximum() {
        // After factorization each pivot must dominate the eliminated rows'
        // multipliers: |l[i][k]| <= 1 for all i > k.
        let a = array![
            [0.001, 2.0, 3.0],
            [4.0, 5.0, 6.0],
            [7.0, 8.0, 10.0]
        ];
        let f = factorize(&a).unwrap();
        for k in 0..3 {
            for i in (k + 1)..3 {
                assert!(f.l[[i, k]].abs() <= 1.0 + 1e-12);
            }
        }
    }

    #[test]
    fn test_permuted_rhs() {
        // Identity with swapped rows: solution is the permuted b.
        let a = array![[0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]];
        let b = array![10.0, 20.0, 30.0];
        let x = solve(&a, &b).unwrap();
        assert_relative_eq!(x[0], 30.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 10.0, epsilon = 1e-12);
        assert_relative_eq!(x[2], 20.0, epsilon = 1e-12);
    }
}
