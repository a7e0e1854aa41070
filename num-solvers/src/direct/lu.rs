//! LU decomposition in the Doolittle convention, no pivoting
//!
//! Factors `A = L U` with unit-lower-triangular `L` and upper-triangular
//! `U`. The factors are kept separate so they can be reused for several
//! right-hand sides and displayed to the user.

use crate::error::{Result, SolveError};
use crate::substitution::{back_substitution, check_len, check_square, forward_substitution};
use ndarray::{Array1, Array2};

/// The factors of `A = L U`.
#[derive(Debug, Clone)]
pub struct LuFactors {
    /// Unit lower-triangular factor
    pub l: Array2<f64>,
    /// Upper-triangular factor
    pub u: Array2<f64>,
}

impl LuFactors {
    /// Solve `A x = b` as `L y = b` then `U x = y`.
    pub fn solve(&self, b: &Array1<f64>) -> Result<Array1<f64>> {
        check_len(self.l.nrows(), b.len())?;
        let y = forward_substitution(&self.l, b)?;
        back_substitution(&self.u, &y)
    }
}

/// Factor `A` into `L` and `U`. Fails with [`SolveError::SingularMatrix`]
/// on a zero pivot; such a system needs [`super::lup`] instead.
pub fn factorize(a: &Array2<f64>) -> Result<LuFactors> {
    let n = check_square(a)?;

    let mut l = Array2::eye(n);
    let mut u = a.clone();

    for k in 0..n {
        let pivot = u[[k, k]];
        if pivot == 0.0 {
            return Err(SolveError::SingularMatrix { column: k });
        }
        for i in (k + 1)..n {
            let factor = u[[i, k]] / pivot;
            l[[i, k]] = factor;
            for j in k..n {
                u[[i, j]] -= factor * u[[k, j]];
            }
            u[[i, k]] = 0.0;
        }
    }

    Ok(LuFactors { l, u })
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

    #[test]
    fn test_factors_reproduce_a() {
        // No pivoting happens, so L*U must equal A exactly.
        let a = array![[4.0, 3.0], [6.0, 3.0]];
        let f = factorize(&a).unwrap();
        let product = f.l.dot(&f.u);
        for (pa, pb) in product.iter().zip(a.iter()) {
            assert_relative_eq!(pa, pb, epsilon = 1e-12);
        }
        // Doolittle: L has unit diagonal
        assert_relative_eq!(f.l[[0, 0]], 1.0);
        assert_relative_eq!(f.l[[1, 1]], 1.0);
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
    fn test_zero_pivot_fails() {
        let a = array![[0.0, 1.0], [1.0, 1.0]];
        assert_eq!(
            factorize(&a).unwrap_err(),
            SolveError::SingularMatrix { column: 0 }
        );
    }

    #[test]
    fn test_multiple_rhs_reuse() {
        let a = array![[4.0, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 2.0]];
        let f = factorize(&a).unwrap();
        for b in [array![1.0, 2.0, 3.0], array![4.0, 5.0, 6.0]] {
            let x = f.solve(&b).unwrap();
            let r = a.dot(&x) - &b;
            for v in r.iter() {
                assert!(v.abs() < 1e-10);
            }
        }
    }

    #[test]
    fn test_triangular_shape() {
        let a = array![[2.0, 1.0, 1.0], [4.0, -6.0, 0.0], [-2.0, 7.0, 2.0]];
        let f = factorize(&a).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                if j > i {
                    assert_relative_eq!(f.l[[i, j]], 0.0);
                }
                if j < i {
                    assert_relative_eq!(f.u[[i, j]], 0.0);
                }
            }
        }
    }
}
