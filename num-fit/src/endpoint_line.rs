//! The line through the first and last data point
//!
//! Not a least-squares fit: the course material uses it to show how badly a
//! two-point line can represent the interior of the data.

use crate::error::FitError;
use crate::least_squares::validate;
use num_methods_common::Polynomial;

/// Build the line through `(x_0, y_0)` and `(x_last, y_last)`.
///
/// The points are expected sorted by x; equal endpoint abscissae make the
/// line vertical, which has no polynomial form.
pub fn endpoint_line(xs: &[f64], ys: &[f64]) -> Result<Polynomial<f64>, FitError> {
    validate(xs, ys)?;

    let (x0, y0) = (xs[0], ys[0]);
    let (x1, y1) = (xs[xs.len() - 1], ys[ys.len() - 1]);
    if x0 == x1 {
        return Err(FitError::VerticalLine);
    }

    let slope = (y1 - y0) / (x1 - x0);
    let intercept = y0 - slope * x0;
    Ok(Polynomial::new(vec![intercept, slope]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_passes_through_endpoints() {
        let xs = [1.0, 2.0, 5.0];
        let ys = [3.0, 100.0, 11.0];
        let line = endpoint_line(&xs, &ys).unwrap();
        assert_relative_eq!(line.eval(1.0), 3.0, epsilon = 1e-12);
        assert_relative_eq!(line.eval(5.0), 11.0, epsilon = 1e-12);
        // interior point is ignored
        assert_relative_eq!(line.eval(2.0), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_vertical_line_rejected() {
        let xs = [2.0, 3.0, 2.0];
        let ys = [1.0, 2.0, 5.0];
        assert_eq!(endpoint_line(&xs, &ys).unwrap_err(), FitError::VerticalLine);
    }
}
