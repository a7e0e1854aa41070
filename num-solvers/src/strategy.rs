//! The interchangeable-method layer
//!
//! The menu tools let the user pick an algorithm for the system they just
//! typed, and retry the same system with another one. [`Method`] is that
//! choice; every variant honors the same `solve(A, b)` contract and returns
//! the intermediate matrices it produced so the tool can display them.

use crate::direct::{gauss, lu, lup};
use crate::error::Result;
use ndarray::{Array1, Array2};

/// Which solver to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Gauss elimination without row exchanges
    GaussNaive,
    /// Gauss elimination with partial pivoting
    Gauss,
    /// Doolittle LU decomposition, no pivoting
    Lu,
    /// LUP decomposition with partial pivoting
    Lup,
}

/// All methods, in menu order.
pub const ALL_METHODS: [Method; 4] = [Method::Gauss, Method::Lu, Method::Lup, Method::GaussNaive];

impl Method {
    /// Human-readable name for menus and result tables.
    pub fn name(&self) -> &'static str {
        match self {
            Method::GaussNaive => "Gauss elimination (no pivoting)",
            Method::Gauss => "Gauss elimination (partial pivoting)",
            Method::Lu => "LU decomposition (Doolittle)",
            Method::Lup => "LUP decomposition (partial pivoting)",
        }
    }

    /// Solve `A x = b` with this method.
    pub fn solve(&self, a: &Array2<f64>, b: &Array1<f64>) -> Result<LinearSolution> {
        match self {
            Method::GaussNaive => {
                let s = gauss::solve_naive(a, b)?;
                Ok(LinearSolution {
                    x: s.x,
                    details: MethodDetails::Echelon { matrix: s.echelon },
                })
            }
            Method::Gauss => {
                let s = gauss::solve_partial_pivot(a, b)?;
                Ok(LinearSolution {
                    x: s.x,
                    details: MethodDetails::Echelon { matrix: s.echelon },
                })
            }
            Method::Lu => {
                let f = lu::factorize(a)?;
                let x = f.solve(b)?;
                Ok(LinearSolution {
                    x,
                    details: MethodDetails::Factors { l: f.l, u: f.u },
                })
            }
            Method::Lup => {
                let f = lup::factorize(a)?;
                let x = f.solve(b)?;
                let p = f.permutation_matrix();
                Ok(LinearSolution {
                    x,
                    details: MethodDetails::PivotedFactors { l: f.l, u: f.u, p },
                })
            }
        }
    }
}

/// A solve result: the solution vector plus whatever the method produced
/// along the way.
#[derive(Debug, Clone)]
pub struct LinearSolution {
    /// Solution vector
    pub x: Array1<f64>,
    /// Intermediate matrices for display
    pub details: MethodDetails,
}

/// Intermediate matrices, one variant per method family.
#[derive(Debug, Clone)]
pub enum MethodDetails {
    /// Row-echelon form of the augmented matrix (Gauss)
    Echelon { matrix: Array2<f64> },
    /// L and U factors (LU)
    Factors { l: Array2<f64>, u: Array2<f64> },
    /// L, U and the permutation matrix (LUP)
    PivotedFactors {
        l: Array2<f64>,
        u: Array2<f64>,
        p: Array2<f64>,
    },
}

impl MethodDetails {
    /// The matrices with display titles, in presentation order.
    pub fn matrices(&self) -> Vec<(&'static str, &Array2<f64>)> {
        match self {
            MethodDetails::Echelon { matrix } => vec![("Echelon form [A|b]", matrix)],
            MethodDetails::Factors { l, u } => vec![("Matrix L", l), ("Matrix U", u)],
            MethodDetails::PivotedFactors { l, u, p } => {
                vec![("Matrix L", l), ("Matrix U", u), ("Matrix P", p)]
            }
        }
    }
}
