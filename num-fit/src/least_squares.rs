//! Polynomial regression through the normal equations
//!
//! For degree g the normal equations are a (g+1)x(g+1) system built from
//! power sums: `sum_i x_i^(j+k) a_k = sum_i x_i^j y_i`. The system goes to
//! the LUP solver; higher degrees make it increasingly ill conditioned,
//! which is the classroom motivation for pivoting.

use crate::error::FitError;
use ndarray::{Array1, Array2};
use num_methods_common::Polynomial;
use num_methods_solvers::direct::lup;

pub(crate) fn validate(xs: &[f64], ys: &[f64]) -> Result<(), FitError> {
    if xs.len() != ys.len() {
        return Err(FitError::MismatchedLengths {
            x_len: xs.len(),
            y_len: ys.len(),
        });
    }
    if xs.len() < 2 {
        return Err(FitError::TooFewPoints { got: xs.len() });
    }
    Ok(())
}

/// Fit a degree-`degree` polynomial to the points by least squares.
pub fn polyfit(xs: &[f64], ys: &[f64], degree: usize) -> Result<Polynomial<f64>, FitError> {
    validate(xs, ys)?;
    if degree < 1 || degree >= xs.len() {
        return Err(FitError::InvalidDegree {
            degree,
            points: xs.len(),
        });
    }

    let m = degree + 1;

    // Power sums S_p = sum x^p for p = 0..2g, built once.
    let mut power_sums = vec![0.0; 2 * degree + 1];
    for &x in xs {
        let mut xp = 1.0;
        for sum in power_sums.iter_mut() {
            *sum += xp;
            xp *= x;
        }
    }

    let mut a = Array2::zeros((m, m));
    for j in 0..m {
        for k in 0..m {
            a[[j, k]] = power_sums[j + k];
        }
    }

    let mut b = Array1::zeros(m);
    for (&x, &y) in xs.iter().zip(ys.iter()) {
        let mut xp = 1.0;
        for j in 0..m {
            b[j] += xp * y;
            xp *= x;
        }
    }

    let coeffs = lup::solve(&a, &b)?;
    Ok(Polynomial::new(coeffs.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_recovers_exact_quadratic() {
        let xs: Vec<f64> = (0..6).map(|i| i as f64).collect();
        let ys: Vec<f64> = xs.iter().map(|&x| 2.0 * x * x - 3.0 * x + 1.0).collect();
        let p = polyfit(&xs, &ys, 2).unwrap();
        assert_relative_eq!(p.coeffs()[0], 1.0, epsilon = 1e-8);
        assert_relative_eq!(p.coeffs()[1], -3.0, epsilon = 1e-8);
        assert_relative_eq!(p.coeffs()[2], 2.0, epsilon = 1e-8);
    }

    #[test]
    fn test_line_through_noisy_symmetric_data() {
        // Hand-checked normal equations: slope 0.96, intercept 0.06.
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [0.1, 0.9, 2.1, 2.9];
        let p = polyfit(&xs, &ys, 1).unwrap();
        assert_relative_eq!(p.coeffs()[1], 0.96, epsilon = 1e-8);
        assert_relative_eq!(p.coeffs()[0], 0.06, epsilon = 1e-8);
    }

    #[test]
    fn test_invalid_degree() {
        let xs = [0.0, 1.0, 2.0];
        let ys = [1.0, 2.0, 3.0];
        assert_eq!(
            polyfit(&xs, &ys, 0).unwrap_err(),
            FitError::InvalidDegree { degree: 0, points: 3 }
        );
        assert_eq!(
            polyfit(&xs, &ys, 3).unwrap_err(),
            FitError::InvalidDegree { degree: 3, points: 3 }
        );
    }

    #[test]
    fn test_mismatched_input() {
        assert!(matches!(
            polyfit(&[1.0, 2.0], &[1.0], 1),
            Err(FitError::MismatchedLengths { .. })
        ));
        assert!(matches!(
            polyfit(&[1.0], &[1.0], 1),
            Err(FitError::TooFewPoints { .. })
        ));
    }
}
