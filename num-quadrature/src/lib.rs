//! Newton-Cotes numerical integration
//!
//! Composite trapezoid, Simpson 1/3 and Simpson 3/8 rules over uniformly
//! sampled integrands ([`newton_cotes`]), plus Gauss-Legendre quadrature
//! ([`gauss`]) used as the high-accuracy reference when reporting errors.
//!
//! # Example
//!
//! ```
//! use ndarray::Array1;
//! use num_methods_quadrature::Rule;
//!
//! // integrate x^2 on [0, 1] with 10 segments
//! let h = 0.1;
//! let y = Array1::from_iter((0..=10).map(|i| (i as f64 * h).powi(2)));
//! let value = Rule::SimpsonOneThird.apply(&y, h).unwrap();
//! assert!((value - 1.0 / 3.0).abs() < 1e-12);
//! ```

pub mod error;
pub mod gauss;
pub mod newton_cotes;

pub use error::QuadratureError;
pub use gauss::{gauss_legendre, reference_integral};
pub use newton_cotes::{
    ALL_RULES, Rule, percent_error, simpson_one_third, simpson_three_eighths, table_step,
    trapezoid,
};
