//! Dense linear-system solvers
//!
//! Solves square systems `A x = b` with the classical direct methods:
//!
//! - **Gauss elimination** on the augmented matrix, naive or with partial
//!   pivoting ([`direct::gauss`])
//! - **LU decomposition** in the Doolittle convention, no pivoting
//!   ([`direct::lu`])
//! - **LUP decomposition** with partial pivoting and an explicit permutation
//!   ([`direct::lup`])
//!
//! The methods share one contract, exposed as the [`Method`] enum:
//! `solve(A, b) -> Result<LinearSolution, SolveError>`. Every solver works on
//! its own copy of the inputs, so the same system can be handed to several
//! methods in a row.
//!
//! # Example
//!
//! ```
//! use ndarray::array;
//! use num_methods_solvers::Method;
//!
//! let a = array![[3.0, 2.0, -4.0], [2.0, 3.0, 3.0], [5.0, -3.0, 1.0]];
//! let b = array![3.0, 15.0, 14.0];
//! let solution = Method::Lup.solve(&a, &b).unwrap();
//! let x = solution.x;
//! assert!((x[0] - 3.0).abs() < 1e-10);
//! ```

pub mod direct;
pub mod error;
pub mod strategy;
pub mod substitution;

pub use direct::lu::LuFactors;
pub use direct::lup::LupFactors;
pub use error::SolveError;
pub use strategy::{ALL_METHODS, LinearSolution, Method, MethodDetails};
pub use substitution::{back_substitution, forward_substitution};
