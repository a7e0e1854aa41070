//! Gregory-Newton forward differences
//!
//! Only valid on uniformly spaced abscissae. Works in the normalized
//! variable `s = (x - x0) / h`; the k-th term is
//! `delta^k y0 * s(s-1)...(s-k+1) / k!`.

use crate::error::InterpError;
use crate::validate_points;
use ndarray::Array2;
use num_methods_common::factorial;
use std::fmt;

/// Relative tolerance for the uniform-spacing check.
const SPACING_TOL: f64 = 1e-9;

/// The interpolating polynomial in Gregory-Newton forward form.
#[derive(Debug, Clone)]
pub struct GregoryNewton {
    x0: f64,
    h: f64,
    /// Forward differences of y0: coeffs[k] = delta^k y0
    coeffs: Vec<f64>,
}

impl GregoryNewton {
    /// Fit over uniformly spaced points; fails with
    /// [`InterpError::UnevenSpacing`] otherwise.
    pub fn fit(xs: &[f64], ys: &[f64]) -> Result<Self, InterpError> {
        validate_points(xs, ys)?;

        let h = xs[1] - xs[0];
        if let Some(index) = num_methods_common::first_uneven_step(xs, SPACING_TOL) {
            return Err(InterpError::UnevenSpacing { index });
        }

        let n = xs.len();
        let mut table = Array2::zeros((n, n));
        for (i, &y) in ys.iter().enumerate() {
            table[[i, 0]] = y;
        }
        for j in 1..n {
            for i in 0..(n - j) {
                table[[i, j]] = table[[i + 1, j - 1]] - table[[i, j - 1]];
            }
        }

        Ok(Self {
            x0: xs[0],
            h,
            coeffs: (0..n).map(|j| table[[0, j]]).collect(),
        })
    }

    /// Evaluate at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        let s = (x - self.x0) / self.h;
        let mut result = self.coeffs[0];
        let mut s_product = 1.0;
        for k in 1..self.coeffs.len() {
            s_product *= s - (k as f64 - 1.0);
            result += self.coeffs[k] * s_product / factorial(k);
        }
        result
    }

    /// The forward differences `delta^k y0`.
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// The normalized variable for a query point.
    pub fn normalized(&self, x: f64) -> f64 {
        (x - self.x0) / self.h
    }
}

impl fmt::Display for GregoryNewton {
    /// `P(s) = c0 + ((c1 * s) / 1!) + ((c2 * s(s - 1)) / 2!) + ...`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P(s) = {:.5}", self.coeffs[0])?;
        let mut s_term = String::new();
        for k in 1..self.coeffs.len() {
            if k == 1 {
                s_term.push('s');
            } else {
                s_term.push_str(&format!("(s - {})", k - 1));
            }
            write!(f, " + (({:.5} * {}) / {}!)", self.coeffs[k], s_term, k)?;
        }
        write!(f, "\nwhere s = (x - {}) / {:.4}", self.x0, self.h)
    }
}
