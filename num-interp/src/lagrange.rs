//! Lagrange form of the interpolating polynomial
//!
//! Builds `P(x) = sum_i y_i * L_i(x)` with
//! `L_i(x) = prod_{j != i} (x - x_j) / (x_i - x_j)`, expanded into a dense
//! polynomial so the user sees the coefficients.

use crate::error::InterpError;
use crate::validate_points;
use num_methods_common::Polynomial;

/// Build the interpolating polynomial through the given points.
pub fn lagrange(xs: &[f64], ys: &[f64]) -> Result<Polynomial<f64>, InterpError> {
    validate_points(xs, ys)?;

    let mut p = Polynomial::zero();
    for (i, (&xi, &yi)) in xs.iter().zip(ys.iter()).enumerate() {
        let mut basis = Polynomial::constant(1.0);
        for (j, &xj) in xs.iter().enumerate() {
            if i != j {
                let factor = Polynomial::linear_factor(xj).scale(1.0 / (xi - xj));
                basis = &basis * &factor;
            }
        }
        p = &p + &basis.scale(yi);
    }
    Ok(p)
}

/// Build the polynomial and evaluate it at `x`.
pub fn lagrange_eval(xs: &[f64], ys: &[f64], x: f64) -> Result<(Polynomial<f64>, f64), InterpError> {
    let p = lagrange(xs, ys)?;
    let value = p.eval(x);
    Ok((p, value))
}
