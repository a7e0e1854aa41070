//! Gauss-Legendre quadrature
//!
//! Used as the high-accuracy reference when the tools report how far a
//! Newton-Cotes result is from the "true" integral. Orders 1 to 5 are exact
//! for polynomials up to degree 2*order - 1; the composite form splits
//! [a, b] into panels and applies the rule on each.

/// Nodes and weights on [-1, 1] for orders 1..=5.
///
/// Requests above order 5 fall back to order 5; combined with panel
/// subdivision that is plenty for a reference value.
pub fn gauss_legendre_points(order: usize) -> Vec<(f64, f64)> {
    match order {
        1 => vec![(0.0, 2.0)],
        2 => {
            let x = 1.0 / 3.0_f64.sqrt();
            vec![(-x, 1.0), (x, 1.0)]
        }
        3 => {
            let x = (3.0 / 5.0_f64).sqrt();
            vec![(-x, 5.0 / 9.0), (0.0, 8.0 / 9.0), (x, 5.0 / 9.0)]
        }
        4 => {
            let a = (3.0 / 7.0 - 2.0 / 7.0 * (6.0 / 5.0_f64).sqrt()).sqrt();
            let b = (3.0 / 7.0 + 2.0 / 7.0 * (6.0 / 5.0_f64).sqrt()).sqrt();
            let wa = (18.0 + 30.0_f64.sqrt()) / 36.0;
            let wb = (18.0 - 30.0_f64.sqrt()) / 36.0;
            vec![(-b, wb), (-a, wa), (a, wa), (b, wb)]
        }
        5 => {
            let a = (5.0 - 2.0 * (10.0 / 7.0_f64).sqrt()).sqrt() / 3.0;
            let b = (5.0 + 2.0 * (10.0 / 7.0_f64).sqrt()).sqrt() / 3.0;
            let wa = (322.0 + 13.0 * 70.0_f64.sqrt()) / 900.0;
            let wb = (322.0 - 13.0 * 70.0_f64.sqrt()) / 900.0;
            vec![
                (-b, wb),
                (-a, wa),
                (0.0, 128.0 / 225.0),
                (a, wa),
                (b, wb),
            ]
        }
        _ => gauss_legendre_points(5),
    }
}

/// Composite Gauss-Legendre integration of `f` over `[a, b]`.
pub fn gauss_legendre<F>(f: F, a: f64, b: f64, order: usize, panels: usize) -> f64
where
    F: Fn(f64) -> f64,
{
    let points = gauss_legendre_points(order);
    let panels = panels.max(1);
    let width = (b - a) / panels as f64;

    let mut total = 0.0;
    for p in 0..panels {
        let lo = a + p as f64 * width;
        let mid = lo + width / 2.0;
        let half = width / 2.0;
        for &(xi, w) in &points {
            total += w * f(mid + half * xi);
        }
    }
    total * (b - a) / (2.0 * panels as f64)
}

/// The reference integral the error tables compare against: order 5 over 64
/// panels, far more accurate than any Newton-Cotes run at classroom sizes.
pub fn reference_integral<F>(f: F, a: f64, b: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    gauss_legendre(f, a, b, 5, 64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_weights_sum_to_interval() {
        for order in 1..=5 {
            let sum: f64 = gauss_legendre_points(order).iter().map(|&(_, w)| w).sum();
            assert_relative_eq!(sum, 2.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_exactness_degree() {
        // Order-2 rule integrates x^3 on [-1, 1] exactly (zero).
        let value = gauss_legendre(|x| x.powi(3), -1.0, 1.0, 2, 1);
        assert_relative_eq!(value, 0.0, epsilon = 1e-14);
        // and x^2 gives 2/3
        let value = gauss_legendre(|x| x.powi(2), -1.0, 1.0, 2, 1);
        assert_relative_eq!(value, 2.0 / 3.0, epsilon = 1e-14);
    }

    #[test]
    fn test_composite_on_shifted_interval() {
        let value = gauss_legendre(|x| 2.0 * x + 1.0, 1.0, 4.0, 3, 4);
        assert_relative_eq!(value, 18.0, epsilon = 1e-12);
    }

    #[test]
    fn test_reference_accuracy() {
        let value = reference_integral(|x| x.sin(), 0.0, std::f64::consts::PI);
        assert_relative_eq!(value, 2.0, epsilon = 1e-12);
        let value = reference_integral(|x| x.exp(), 0.0, 1.0);
        assert_relative_eq!(value, std::f64::consts::E - 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_high_order_falls_back() {
        assert_eq!(gauss_legendre_points(9).len(), 5);
    }
}
