//! Least-squares curve fitting over tabulated points
//!
//! - [`polyfit`]: degree-g polynomial regression through the normal
//!   equations, solved with the LUP solver from `num-methods-solvers`
//! - [`endpoint_line`]: the straight line through the first and last point
//! - [`fit_metrics`]: R-squared and residual variance
//! - [`roots`]: all roots of a fitted polynomial (Durand-Kerner), used to
//!   answer "which x gives this y"

pub mod endpoint_line;
pub mod error;
pub mod least_squares;
pub mod metrics;
pub mod roots;

pub use endpoint_line::endpoint_line;
pub use error::FitError;
pub use least_squares::polyfit;
pub use metrics::{FitMetrics, fit_metrics};
pub use roots::{polynomial_roots, real_solutions};
