//! Polynomial root finding by Durand-Kerner iteration
//!
//! Finds all complex roots simultaneously, then filters the near-real ones.
//! Feeds the "which x gives this y" prediction: the real solutions of
//! `p(x) - y = 0`.

use ndarray::Array1;
use num_complex::Complex64;
use num_methods_common::Polynomial;

const MAX_ITERATIONS: usize = 500;
const CONVERGENCE_TOL: f64 = 1e-12;

/// All complex roots of `p`. Returns an empty vector for constants.
pub fn polynomial_roots(p: &Polynomial<f64>) -> Vec<Complex64> {
    let degree = p.degree();
    if degree == 0 {
        return Vec::new();
    }

    // Monic coefficients, ascending powers.
    let lead = p.coeffs()[degree];
    let monic: Vec<Complex64> = p
        .coeffs()
        .iter()
        .map(|&c| Complex64::new(c / lead, 0.0))
        .collect();

    let eval = |z: Complex64| -> Complex64 {
        monic.iter().rev().fold(Complex64::new(0.0, 0.0), |acc, &c| acc * z + c)
    };

    // Standard starting points: powers of a non-real seed off the unit
    // circle, so no two iterates start symmetric about the real axis.
    let seed = Complex64::new(0.4, 0.9);
    let mut roots: Array1<Complex64> =
        Array1::from_iter((0..degree).map(|k| seed.powu(k as u32 + 1)));

    for _ in 0..MAX_ITERATIONS {
        let mut max_step = 0.0_f64;
        for i in 0..degree {
            let zi = roots[i];
            let mut denom = Complex64::new(1.0, 0.0);
            for j in 0..degree {
                if j != i {
                    denom *= zi - roots[j];
                }
            }
            if denom.norm() == 0.0 {
                continue;
            }
            let step = eval(zi) / denom;
            roots[i] = zi - step;
            max_step = max_step.max(step.norm());
        }
        if max_step < CONVERGENCE_TOL {
            break;
        }
    }

    roots.to_vec()
}

/// Real solutions of `p(x) = target`, ascending and deduplicated.
pub fn real_solutions(p: &Polynomial<f64>, target: f64) -> Vec<f64> {
    let shifted = p.minus_constant(target);
    if shifted.is_zero() {
        return Vec::new();
    }

    // Scale the near-real filter with the root magnitude.
    let mut reals: Vec<f64> = polynomial_roots(&shifted)
        .into_iter()
        .filter(|z| z.im.abs() < 1e-8 * (1.0 + z.re.abs()))
        .map(|z| z.re)
        .collect();
    reals.sort_by(|a, b| a.total_cmp(b));
    reals.dedup_by(|a, b| (*a - *b).abs() < 1e-8 * (1.0 + b.abs()));
    reals
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_quadratic_roots() {
        // x^2 - 3x + 2 = (x-1)(x-2)
        let p = Polynomial::new(vec![2.0, -3.0, 1.0]);
        let roots = real_solutions(&p, 0.0);
        assert_eq!(roots.len(), 2);
        assert_relative_eq!(roots[0], 1.0, epsilon = 1e-8);
        assert_relative_eq!(roots[1], 2.0, epsilon = 1e-8);
    }

    #[test]
    fn test_no_real_roots() {
        // x^2 + 1
        let p = Polynomial::new(vec![1.0, 0.0, 1.0]);
        assert!(real_solutions(&p, 0.0).is_empty());
        // but p(x) = 2 has solutions x = +-1
        let sols = real_solutions(&p, 2.0);
        assert_eq!(sols.len(), 2);
        assert_relative_eq!(sols[0], -1.0, epsilon = 1e-8);
        assert_relative_eq!(sols[1], 1.0, epsilon = 1e-8);
    }

    #[test]
    fn test_cubic_with_target() {
        // x^3 = 8 -> one real solution x = 2
        let p = Polynomial::new(vec![0.0, 0.0, 0.0, 1.0]);
        let sols = real_solutions(&p, 8.0);
        assert_eq!(sols.len(), 1);
        assert_relative_eq!(sols[0], 2.0, epsilon = 1e-7);
    }

    #[test]
    fn test_line_solution() {
        // 2x + 1 = 7 -> x = 3
        let p = Polynomial::new(vec![1.0, 2.0]);
        let sols = real_solutions(&p, 7.0);
        assert_eq!(sols.len(), 1);
        assert_relative_eq!(sols[0], 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_all_complex_roots_found() {
        // x^4 - 1: roots 1, -1, i, -i
        let p = Polynomial::new(vec![-1.0, 0.0, 0.0, 0.0, 1.0]);
        let roots = polynomial_roots(&p);
        assert_eq!(roots.len(), 4);
        for z in &roots {
            assert_relative_eq!((z * z * z * z).re, 1.0, epsilon = 1e-6);
            assert_relative_eq!((z * z * z * z).im, 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_constant_has_no_roots() {
        let p = Polynomial::constant(5.0);
        assert!(polynomial_roots(&p).is_empty());
        assert!(real_solutions(&p, 0.0).is_empty());
    }
}
