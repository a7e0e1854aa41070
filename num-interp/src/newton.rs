//! Newton's divided-difference form
//!
//! Keeps the nodes and the divided-difference coefficients so the polynomial
//! can be evaluated at several points and printed in its Newton form.

use crate::error::InterpError;
use crate::validate_points;
use ndarray::Array2;
use std::fmt;

/// The interpolating polynomial in Newton form.
#[derive(Debug, Clone)]
pub struct NewtonPolynomial {
    nodes: Vec<f64>,
    coeffs: Vec<f64>,
}

/// Build the divided-difference table; column 0 holds the ordinates.
pub fn divided_difference_table(xs: &[f64], ys: &[f64]) -> Array2<f64> {
    let n = xs.len();
    let mut table = Array2::zeros((n, n));
    for (i, &y) in ys.iter().enumerate() {
        table[[i, 0]] = y;
    }
    for j in 1..n {
        for i in j..n {
            table[[i, j]] =
                (table[[i, j - 1]] - table[[i - 1, j - 1]]) / (xs[i] - xs[i - j]);
        }
    }
    table
}

impl NewtonPolynomial {
    /// Fit the Newton form through the given points.
    pub fn fit(xs: &[f64], ys: &[f64]) -> Result<Self, InterpError> {
        validate_points(xs, ys)?;
        let table = divided_difference_table(xs, ys);
        let coeffs = (0..xs.len()).map(|i| table[[i, i]]).collect();
        Ok(Self {
            nodes: xs.to_vec(),
            coeffs,
        })
    }

    /// Evaluate at `x` with nested products.
    pub fn eval(&self, x: f64) -> f64 {
        let mut result = self.coeffs[0];
        let mut term = 1.0;
        for k in 1..self.coeffs.len() {
            term *= x - self.nodes[k - 1];
            result += self.coeffs[k] * term;
        }
        result
    }

    /// The divided-difference coefficients, leading entry first.
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }
}

impl fmt::Display for NewtonPolynomial {
    /// `P(x) = c0 + (c1 * (x - x0)) + (c2 * (x - x0)(x - x1)) + ...`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}", self.coeffs[0])?;
        let mut product = String::new();
        for k in 1..self.coeffs.len() {
            product.push_str(&format!("(x - {})", self.nodes[k - 1]));
            write!(f, " + ({:.5} * {})", self.coeffs[k], product)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exact_at_nodes() {
        let xs = [0.0, 1.0, 3.0];
        let ys = [1.0, 3.0, 2.0];
        let p = NewtonPolynomial::fit(&xs, &ys).unwrap();
        for (&x, &y) in xs.iter().zip(ys.iter()) {
            assert_relative_eq!(p.eval(x), y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_matches_lagrange_off_nodes() {
        let xs = [0.0, 1.0, 2.0, 5.0];
        let ys = [3.0, 2.0, 8.0, -1.0];
        let p = NewtonPolynomial::fit(&xs, &ys).unwrap();
        let (lp, expected) = crate::lagrange::lagrange_eval(&xs, &ys, 3.3).unwrap();
        assert_relative_eq!(p.eval(3.3), expected, epsilon = 1e-9);
        assert_relative_eq!(p.eval(-1.0), lp.eval(-1.0), epsilon = 1e-9);
    }

    #[test]
    fn test_display_form() {
        let p = NewtonPolynomial::fit(&[1.0, 2.0], &[5.0, 7.0]).unwrap();
        assert_eq!(format!("{p}"), "5.00000 + (2.00000 * (x - 1))");
    }

    #[test]
    fn test_table_diagonal() {
        // f(x) = 2x: first differences are constant 2, second are 0
        let table = divided_difference_table(&[0.0, 1.0, 2.0], &[0.0, 2.0, 4.0]);
        assert_relative_eq!(table[[1, 1]], 2.0);
        assert_relative_eq!(table[[2, 1]], 2.0);
        assert_relative_eq!(table[[2, 2]], 0.0);
    }
}
