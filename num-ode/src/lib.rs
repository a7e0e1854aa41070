//! Fixed-step integrators for first-order ODE systems
//!
//! Integrates `dy/dt = f(t, y)` for `y` in R^d over a uniform time grid with
//! the three classical one-step methods: Euler, improved Euler (Heun) and
//! classical Runge-Kutta 4. No step-size control; the grid the user asks
//! for is the grid that runs.
//!
//! # Example
//!
//! ```
//! use ndarray::array;
//! use num_methods_ode::{OdeMethod, integrate};
//!
//! // dy/dt = y, y(0) = 1: y(1) = e
//! let solution = integrate(
//!     |_t, y| y.clone(),
//!     0.0,
//!     &array![1.0],
//!     0.01,
//!     1.0,
//!     OdeMethod::RungeKutta4,
//! )
//! .unwrap();
//! let last = solution.final_state();
//! assert!((last[0] - std::f64::consts::E).abs() < 1e-5);
//! ```

pub mod error;
pub mod method;
pub mod solver;

pub use error::OdeError;
pub use method::{ALL_METHODS, OdeMethod};
pub use solver::{OdeSolution, integrate, time_grid};
