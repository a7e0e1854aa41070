//! Uniform grids and small numeric helpers shared by the tool crates

/// Generate `num` linearly spaced values from `start` to `end` inclusive.
pub fn lin_space(start: f64, end: f64, num: usize) -> Vec<f64> {
    if num < 2 {
        return vec![start];
    }
    (0..num)
        .map(|i| start + (end - start) * i as f64 / (num - 1) as f64)
        .collect()
}

/// Check that consecutive abscissae are separated by the same step.
///
/// Returns the index of the first point whose step deviates from the first
/// step, or `None` if the grid is uniform. The comparison is relative to the
/// first step so grids built by repeated addition still pass.
pub fn first_uneven_step(xs: &[f64], rel_tol: f64) -> Option<usize> {
    if xs.len() < 2 {
        return None;
    }
    let h = xs[1] - xs[0];
    let tol = rel_tol * h.abs().max(1.0);
    xs.windows(2)
        .position(|w| ((w[1] - w[0]) - h).abs() > tol)
        .map(|i| i + 1)
}

/// Sort (x, y) pairs by ascending x, keeping pairs together.
///
/// Line plots and endpoint fits assume the data runs left to right.
pub fn sort_points(xs: &[f64], ys: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let mut pairs: Vec<(f64, f64)> = xs.iter().copied().zip(ys.iter().copied()).collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
    pairs.into_iter().unzip()
}

/// n! as an f64. Overflows to infinity past n = 170, which is far beyond any
/// interpolation degree the error-bound formula is used with.
pub fn factorial(n: usize) -> f64 {
    (1..=n).fold(1.0, |acc, k| acc * k as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lin_space_endpoints() {
        let xs = lin_space(0.0, 1.0, 11);
        assert_eq!(xs.len(), 11);
        assert_relative_eq!(xs[0], 0.0);
        assert_relative_eq!(xs[10], 1.0);
        assert_relative_eq!(xs[5], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_lin_space_degenerate() {
        assert_eq!(lin_space(3.0, 9.0, 1), vec![3.0]);
        assert_eq!(lin_space(3.0, 9.0, 0), vec![3.0]);
    }

    #[test]
    fn test_uniform_spacing() {
        assert_eq!(first_uneven_step(&[0.0, 0.5, 1.0, 1.5], 1e-9), None);
        assert_eq!(first_uneven_step(&[0.0, 0.5, 1.1], 1e-9), Some(2));
        assert_eq!(first_uneven_step(&[1.0], 1e-9), None);
    }

    #[test]
    fn test_sort_points_keeps_pairs() {
        let (xs, ys) = sort_points(&[3.0, 1.0, 2.0], &[30.0, 10.0, 20.0]);
        assert_eq!(xs, vec![1.0, 2.0, 3.0]);
        assert_eq!(ys, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_factorial() {
        assert_relative_eq!(factorial(0), 1.0);
        assert_relative_eq!(factorial(5), 120.0);
        assert_relative_eq!(factorial(10), 3628800.0);
    }
}
