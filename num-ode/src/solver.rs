//! Fixed-grid integration driver.

use crate::error::OdeError;
use crate::method::OdeMethod;
use ndarray::{Array1, Array2, s};

/// A computed trajectory: the grid and one state row per grid point.
#[derive(Debug, Clone)]
pub struct OdeSolution {
    /// Time grid, uniformly spaced
    pub times: Vec<f64>,
    /// States, one row per time (shape: times x dimension)
    pub states: Array2<f64>,
}

impl OdeSolution {
    /// The state at the last grid point.
    pub fn final_state(&self) -> Array1<f64> {
        self.states.row(self.states.nrows() - 1).to_owned()
    }

    /// One component of the trajectory as a plain vector, for plotting.
    pub fn component(&self, index: usize) -> Vec<f64> {
        self.states.column(index).to_vec()
    }
}

/// Build the uniform grid `t0, t0+h, ..., t_end`.
///
/// The number of steps is rounded so accumulated floating-point drift cannot
/// drop the final point; the last grid value is pinned to `t_end` when the
/// division is exact to within a relative 1e-9.
pub fn time_grid(t0: f64, t_end: f64, h: f64) -> Result<Vec<f64>, OdeError> {
    if h <= 0.0 {
        return Err(OdeError::NonPositiveStep { h });
    }
    if t_end <= t0 {
        return Err(OdeError::EmptyInterval { t0, t_end });
    }

    let span = t_end - t0;
    let steps = (span / h + 1e-9).floor() as usize;
    let mut times: Vec<f64> = (0..=steps).map(|i| t0 + i as f64 * h).collect();
    if let Some(last) = times.last_mut() {
        if (*last - t_end).abs() <= 1e-9 * span.max(1.0) {
            *last = t_end;
        }
    }
    Ok(times)
}

/// Integrate `dy/dt = f(t, y)` from `y(t0) = y0` to `t_end` with fixed step
/// `h` and the chosen method.
pub fn integrate<F>(
    f: F,
    t0: f64,
    y0: &Array1<f64>,
    h: f64,
    t_end: f64,
    method: OdeMethod,
) -> Result<OdeSolution, OdeError>
where
    F: Fn(f64, &Array1<f64>) -> Array1<f64>,
{
    let times = time_grid(t0, t_end, h)?;
    let dim = y0.len();

    // One probe call so a mis-sized right-hand side fails cleanly instead of
    // panicking inside the array arithmetic.
    let probe = f(t0, y0);
    if probe.len() != dim {
        return Err(OdeError::DimensionMismatch {
            expected: dim,
            got: probe.len(),
        });
    }

    let mut states = Array2::zeros((times.len(), dim));
    states.slice_mut(s![0, ..]).assign(y0);

    let mut y = y0.clone();
    for i in 0..times.len() - 1 {
        y = method.step(&f, times[i], &y, h);
        states.slice_mut(s![i + 1, ..]).assign(&y);
    }

    Ok(OdeSolution { times, states })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_grid_covers_interval() {
        let times = time_grid(0.0, 1.0, 0.1).unwrap();
        assert_eq!(times.len(), 11);
        assert_relative_eq!(times[0], 0.0);
        assert_relative_eq!(*times.last().unwrap(), 1.0);
    }

    #[test]
    fn test_grid_with_awkward_step() {
        // 0.3 does not divide 1.0; the grid stops at the last point <= t_end.
        let times = time_grid(0.0, 1.0, 0.3).unwrap();
        assert_eq!(times.len(), 4);
        assert_relative_eq!(*times.last().unwrap(), 0.9, epsilon = 1e-12);
    }

    #[test]
    fn test_grid_rejects_bad_setup() {
        assert_eq!(
            time_grid(0.0, 1.0, 0.0).unwrap_err(),
            OdeError::NonPositiveStep { h: 0.0 }
        );
        assert_eq!(
            time_grid(1.0, 1.0, 0.1).unwrap_err(),
            OdeError::EmptyInterval { t0: 1.0, t_end: 1.0 }
        );
    }

    #[test]
    fn test_rk4_exponential() {
        let solution = integrate(
            |_t, y| y.clone(),
            0.0,
            &array![1.0],
            0.01,
            1.0,
            OdeMethod::RungeKutta4,
        )
        .unwrap();
        assert_relative_eq!(
            solution.final_state()[0],
            std::f64::consts::E,
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_euler_converges_linearly() {
        let run = |h: f64| {
            integrate(|_t, y| y.clone(), 0.0, &array![1.0], h, 1.0, OdeMethod::Euler)
                .unwrap()
                .final_state()[0]
        };
        let e = std::f64::consts::E;
        let err_coarse = (run(0.1) - e).abs();
        let err_fine = (run(0.01) - e).abs();
        let ratio = err_coarse / err_fine;
        // first order: tenfold smaller step, roughly tenfold smaller error
        assert!(ratio > 5.0 && ratio < 20.0, "ratio = {ratio}");
    }

    #[test]
    fn test_harmonic_oscillator_system() {
        // y'' = -y as a 2-system; RK4 keeps the energy to ~1e-6 over one period.
        let f = |_t: f64, y: &Array1<f64>| array![y[1], -y[0]];
        let two_pi = 2.0 * std::f64::consts::PI;
        let solution = integrate(f, 0.0, &array![1.0, 0.0], 0.01, two_pi, OdeMethod::RungeKutta4)
            .unwrap();
        let last = solution.final_state();
        assert_relative_eq!(last[0], 1.0, epsilon = 1e-5);
        assert_relative_eq!(last[1], 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_dimension_mismatch_detected() {
        let result = integrate(
            |_t, _y: &Array1<f64>| array![1.0, 2.0],
            0.0,
            &array![0.0],
            0.1,
            1.0,
            OdeMethod::Euler,
        );
        assert_eq!(
            result.unwrap_err(),
            OdeError::DimensionMismatch { expected: 1, got: 2 }
        );
    }

    #[test]
    fn test_methods_ranked_by_accuracy() {
        let e = std::f64::consts::E;
        let mut errors = Vec::new();
        for method in crate::ALL_METHODS {
            let y = integrate(|_t, y: &Array1<f64>| y.clone(), 0.0, &array![1.0], 0.05, 1.0, method)
                .unwrap()
                .final_state()[0];
            errors.push((y - e).abs());
        }
        // Euler worst, RK4 best
        assert!(errors[0] > errors[1]);
        assert!(errors[1] > errors[2]);
    }
}
