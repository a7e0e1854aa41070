//! Composite Newton-Cotes rules over uniform samples
//!
//! All rules take the sampled ordinates `y` (n segments, n+1 samples) and
//! the step `h`. The Simpson rules are picky about the segment count and
//! report it rather than silently degrading.

use crate::error::QuadratureError;
use ndarray::Array1;

/// Composite trapezoid rule: `h/2 * (y0 + 2*middle + yn)`.
pub fn trapezoid(y: &Array1<f64>, h: f64) -> Result<f64, QuadratureError> {
    check_samples(y)?;
    let n = y.len() - 1;
    let middle: f64 = y.iter().skip(1).take(n - 1).sum();
    Ok(h / 2.0 * (y[0] + 2.0 * middle + y[n]))
}

/// Composite Simpson 1/3: requires an even segment count.
pub fn simpson_one_third(y: &Array1<f64>, h: f64) -> Result<f64, QuadratureError> {
    check_samples(y)?;
    let n = y.len() - 1;
    if n % 2 != 0 {
        return Err(QuadratureError::OddSegments { got: n });
    }
    let mut odd = 0.0;
    let mut even = 0.0;
    for i in 1..n {
        if i % 2 == 1 {
            odd += y[i];
        } else {
            even += y[i];
        }
    }
    Ok(h / 3.0 * (y[0] + 4.0 * odd + 2.0 * even + y[n]))
}

/// Composite Simpson 3/8: requires the segment count to be a multiple of 3.
pub fn simpson_three_eighths(y: &Array1<f64>, h: f64) -> Result<f64, QuadratureError> {
    check_samples(y)?;
    let n = y.len() - 1;
    if n % 3 != 0 {
        return Err(QuadratureError::SegmentsNotMultipleOfThree { got: n });
    }
    let mut sum = y[0] + y[n];
    for i in 1..n {
        let factor = if i % 3 == 0 { 2.0 } else { 3.0 };
        sum += factor * y[i];
    }
    Ok(3.0 * h / 8.0 * sum)
}

fn check_samples(y: &Array1<f64>) -> Result<(), QuadratureError> {
    if y.len() < 2 {
        return Err(QuadratureError::TooFewPoints { got: y.len() });
    }
    Ok(())
}

/// Validate a typed x/y table for the composite rules and return the step.
///
/// Checks equal lengths, at least two samples, and uniform spacing of the
/// abscissae (relative to the first step).
pub fn table_step(xs: &[f64], ys: &[f64]) -> Result<f64, QuadratureError> {
    if xs.len() != ys.len() {
        return Err(QuadratureError::MismatchedLengths {
            x_len: xs.len(),
            y_len: ys.len(),
        });
    }
    if xs.len() < 2 {
        return Err(QuadratureError::TooFewPoints { got: xs.len() });
    }
    if let Some(index) = num_methods_common::first_uneven_step(xs, 1e-9) {
        return Err(QuadratureError::NonUniformGrid { index });
    }
    Ok(xs[1] - xs[0])
}

/// Which Newton-Cotes rule to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Trapezoid,
    SimpsonOneThird,
    SimpsonThreeEighths,
}

/// All rules, in menu order.
pub const ALL_RULES: [Rule; 3] = [Rule::Trapezoid, Rule::SimpsonOneThird, Rule::SimpsonThreeEighths];

impl Rule {
    /// Human-readable name for menus and result tables.
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Trapezoid => "Trapezoid rule",
            Rule::SimpsonOneThird => "Simpson 1/3",
            Rule::SimpsonThreeEighths => "Simpson 3/8",
        }
    }

    /// Apply the rule to sampled ordinates with step `h`.
    pub fn apply(&self, y: &Array1<f64>, h: f64) -> Result<f64, QuadratureError> {
        match self {
            Rule::Trapezoid => trapezoid(y, h),
            Rule::SimpsonOneThird => simpson_one_third(y, h),
            Rule::SimpsonThreeEighths => simpson_three_eighths(y, h),
        }
    }
}

/// Percent error against a reference value; `None` when no reference exists
/// or the reference is too close to zero to divide by.
pub fn percent_error(reference: Option<f64>, numeric: f64) -> Option<f64> {
    let reference = reference?;
    if reference.abs() < 1e-15 {
        return None;
    }
    Some(((reference - numeric) / reference).abs() * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use num_methods_common::lin_space;

    fn sample(f: impl Fn(f64) -> f64, a: f64, b: f64, n: usize) -> (Array1<f64>, f64) {
        let xs = lin_space(a, b, n + 1);
        let h = (b - a) / n as f64;
        (Array1::from_iter(xs.into_iter().map(f)), h)
    }

    #[test]
    fn test_trapezoid_linear_exact() {
        // Trapezoid is exact for straight lines.
        let (y, h) = sample(|x| 2.0 * x + 1.0, 0.0, 4.0, 7);
        assert_relative_eq!(trapezoid(&y, h).unwrap(), 20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_trapezoid_error_shrinks() {
        let exact = 1.0 / 3.0;
        let (y1, h1) = sample(|x| x * x, 0.0, 1.0, 10);
        let (y2, h2) = sample(|x| x * x, 0.0, 1.0, 100);
        let e1 = (trapezoid(&y1, h1).unwrap() - exact).abs();
        let e2 = (trapezoid(&y2, h2).unwrap() - exact).abs();
        assert!(e2 < e1 / 50.0, "error should shrink ~quadratically");
    }

    #[test]
    fn test_simpson13_exact_for_cubics() {
        let (y, h) = sample(|x| x.powi(3) - 2.0 * x + 1.0, 0.0, 2.0, 10);
        // integral = 4 - 4 + 2 = 2
        assert_relative_eq!(simpson_one_third(&y, h).unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_simpson13_parity() {
        let (y, h) = sample(|x| x, 0.0, 1.0, 7);
        assert_eq!(
            simpson_one_third(&y, h).unwrap_err(),
            QuadratureError::OddSegments { got: 7 }
        );
    }

    #[test]
    fn test_simpson38_exact_for_cubics() {
        let (y, h) = sample(|x| x.powi(3), 0.0, 3.0, 9);
        assert_relative_eq!(
            simpson_three_eighths(&y, h).unwrap(),
            81.0 / 4.0,
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_simpson38_parity() {
        let (y, h) = sample(|x| x, 0.0, 1.0, 8);
        assert_eq!(
            simpson_three_eighths(&y, h).unwrap_err(),
            QuadratureError::SegmentsNotMultipleOfThree { got: 8 }
        );
    }

    #[test]
    fn test_too_few_points() {
        let y = Array1::from_vec(vec![1.0]);
        assert_eq!(
            trapezoid(&y, 0.1).unwrap_err(),
            QuadratureError::TooFewPoints { got: 1 }
        );
    }

    #[test]
    fn test_table_step() {
        assert_relative_eq!(table_step(&[0.0, 0.5, 1.0], &[1.0, 2.0, 3.0]).unwrap(), 0.5);
        assert_eq!(
            table_step(&[0.0, 0.5, 1.2], &[1.0, 2.0, 3.0]).unwrap_err(),
            QuadratureError::NonUniformGrid { index: 2 }
        );
        assert_eq!(
            table_step(&[0.0, 1.0], &[1.0]).unwrap_err(),
            QuadratureError::MismatchedLengths { x_len: 2, y_len: 1 }
        );
    }

    #[test]
    fn test_percent_error() {
        assert_eq!(percent_error(None, 1.0), None);
        assert_eq!(percent_error(Some(0.0), 1.0), None);
        assert_relative_eq!(percent_error(Some(2.0), 1.9).unwrap(), 5.0);
    }
}
