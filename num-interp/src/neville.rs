//! Neville's tableau
//!
//! Evaluates the interpolating polynomial at one point without ever forming
//! its coefficients.

use crate::error::InterpError;
use crate::validate_points;
use ndarray::Array2;

/// Interpolate the value at `x` through the given points.
pub fn neville(xs: &[f64], ys: &[f64], x: f64) -> Result<f64, InterpError> {
    validate_points(xs, ys)?;
    let n = xs.len();

    let mut q = Array2::zeros((n, n));
    for (i, &y) in ys.iter().enumerate() {
        q[[i, 0]] = y;
    }
    for j in 1..n {
        for i in j..n {
            let num = (x - xs[i - j]) * q[[i, j - 1]] - (x - xs[i]) * q[[i - 1, j - 1]];
            let den = xs[i] - xs[i - j];
            q[[i, j]] = num / den;
        }
    }
    Ok(q[[n - 1, n - 1]])
}
