//! Direct (elimination-based) solvers.

pub mod gauss;
pub mod lu;
pub mod lup;

pub use gauss::{GaussSolution, solve_naive, solve_partial_pivot};
pub use lu::LuFactors;
pub use lup::LupFactors;
