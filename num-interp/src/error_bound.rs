//! Truncation-error bound for polynomial interpolation
//!
//! For n+1 interpolation points, `|E(x)| <= M / (n+1)! * |omega(x)|` where
//! `omega(x) = prod_i (x - x_i)` and M bounds `|f^(n+1)|` on the data
//! interval. M is estimated numerically by sampling a finite-difference
//! derivative; symbolic differentiation is out of scope here.

use num_methods_common::{factorial, lin_space};

/// The pieces of the bound, kept separate for display.
#[derive(Debug, Clone, Copy)]
pub struct TruncationBound {
    /// The bound |E(x)|
    pub bound: f64,
    /// omega(x) = prod (x - x_i)
    pub omega: f64,
    /// (n+1)! for n = points - 1
    pub factorial: f64,
    /// The derivative bound M that was used
    pub max_derivative: f64,
}

/// omega(x) = prod_i (x - x_i).
pub fn omega(xs: &[f64], x: f64) -> f64 {
    xs.iter().map(|&xi| x - xi).product()
}

/// Evaluate the bound given a derivative bound `max_derivative` for
/// `|f^(n+1)|` over the data interval.
pub fn truncation_bound(xs: &[f64], x: f64, max_derivative: f64) -> TruncationBound {
    let n = xs.len() - 1;
    let fact = factorial(n + 1);
    let om = omega(xs, x);
    TruncationBound {
        bound: max_derivative.abs() / fact * om.abs(),
        omega: om,
        factorial: fact,
        max_derivative,
    }
}

/// Estimate `max |f^(order)|` over `[a, b]` by sampling a central
/// finite-difference stencil at `samples` points.
///
/// The order-m central difference is
/// `f^(m)(x) ~ h^-m * sum_k (-1)^k C(m,k) f(x + (m/2 - k) h)`.
/// The step is kept coarse; the result feeds an error *bound*, not a value
/// that needs many digits.
pub fn estimate_max_derivative<F>(f: F, order: usize, a: f64, b: f64, samples: usize) -> f64
where
    F: Fn(f64) -> f64,
{
    let h = (b - a).abs().max(1.0) * 1e-2;
    let m = order as f64;

    // Binomial coefficients C(order, k) via the multiplicative recurrence.
    let mut binom = vec![1.0_f64; order + 1];
    for k in 1..=order {
        binom[k] = binom[k - 1] * (m - k as f64 + 1.0) / k as f64;
    }

    let mut max = 0.0_f64;
    for x in lin_space(a, b, samples.max(2)) {
        let mut sum = 0.0;
        for (k, &c) in binom.iter().enumerate() {
            let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
            sum += sign * c * f(x + (m / 2.0 - k as f64) * h);
        }
        let deriv = (sum / h.powi(order as i32)).abs();
        if deriv.is_finite() && deriv > max {
            max = deriv;
        }
    }
    max
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_omega_product() {
        assert_relative_eq!(omega(&[1.0, 2.0, 3.0], 4.0), 6.0);
        assert_relative_eq!(omega(&[1.0, 2.0], 1.0), 0.0);
    }

    #[test]
    fn test_bound_formula() {
        // Two points (n=1): |E| <= M/2! * |omega|
        let tb = truncation_bound(&[0.0, 1.0], 0.5, 4.0);
        assert_relative_eq!(tb.factorial, 2.0);
        assert_relative_eq!(tb.omega, -0.25);
        assert_relative_eq!(tb.bound, 0.5);
    }

    #[test]
    fn test_derivative_estimate_exp() {
        // Every derivative of e^x is e^x; its max on [0, 1] is e.
        let max = estimate_max_derivative(|x| x.exp(), 2, 0.0, 1.0, 200);
        assert_relative_eq!(max, std::f64::consts::E, max_relative = 0.05);
    }

    #[test]
    fn test_derivative_estimate_cubic() {
        // f = x^3: f'' = 6x, max over [0, 2] is 12.
        let max = estimate_max_derivative(|x| x.powi(3), 2, 0.0, 2.0, 200);
        assert_relative_eq!(max, 12.0, max_relative = 0.05);
    }

    #[test]
    fn test_bound_dominates_true_error() {
        // Interpolate sin on 3 points; the bound must exceed the true error.
        let xs: [f64; 3] = [0.0, 0.5, 1.0];
        let ys: Vec<f64> = xs.iter().map(|&x| x.sin()).collect();
        let x = 0.75;
        let p = crate::lagrange::lagrange(&xs, &ys).unwrap();
        let true_err = (p.eval(x) - x.sin()).abs();
        let m = estimate_max_derivative(|t| t.sin(), 3, 0.0, 1.0, 500);
        let tb = truncation_bound(&xs, x, m);
        assert!(tb.bound >= true_err);
    }
}
