//! The one-step methods
//!
//! Each method advances the state by one step of size `h` given the
//! right-hand side `f(t, y)`.

use ndarray::Array1;

/// Which integrator to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OdeMethod {
    /// Explicit Euler, first order
    Euler,
    /// Improved Euler (Heun), second order
    ImprovedEuler,
    /// Classical Runge-Kutta, fourth order
    RungeKutta4,
}

/// All methods, in menu order.
pub const ALL_METHODS: [OdeMethod; 3] = [
    OdeMethod::Euler,
    OdeMethod::ImprovedEuler,
    OdeMethod::RungeKutta4,
];

impl OdeMethod {
    /// Human-readable name for menus and plot titles.
    pub fn name(&self) -> &'static str {
        match self {
            OdeMethod::Euler => "Euler",
            OdeMethod::ImprovedEuler => "Improved Euler",
            OdeMethod::RungeKutta4 => "Runge-Kutta 4",
        }
    }

    /// Order of convergence (error ~ h^order).
    pub fn order(&self) -> usize {
        match self {
            OdeMethod::Euler => 1,
            OdeMethod::ImprovedEuler => 2,
            OdeMethod::RungeKutta4 => 4,
        }
    }

    /// Advance `y` from `t` to `t + h`.
    pub fn step<F>(&self, f: &F, t: f64, y: &Array1<f64>, h: f64) -> Array1<f64>
    where
        F: Fn(f64, &Array1<f64>) -> Array1<f64>,
    {
        match self {
            OdeMethod::Euler => {
                let k1 = f(t, y);
                y + &(k1 * h)
            }
            OdeMethod::ImprovedEuler => {
                let k1 = f(t, y);
                let k2 = f(t + h, &(y + &(&k1 * h)));
                y + &((k1 + k2) * (h / 2.0))
            }
            OdeMethod::RungeKutta4 => {
                let k1 = f(t, y);
                let k2 = f(t + h / 2.0, &(y + &(&k1 * (h / 2.0))));
                let k3 = f(t + h / 2.0, &(y + &(&k2 * (h / 2.0))));
                let k4 = f(t + h, &(y + &(&k3 * h)));
                y + &((k1 + &(k2 * 2.0) + &(k3 * 2.0) + k4) * (h / 6.0))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_euler_single_step() {
        // dy/dt = 2: one Euler step of h=0.5 adds exactly 1.
        let y = OdeMethod::Euler.step(&|_t, _y: &Array1<f64>| array![2.0], 0.0, &array![3.0], 0.5);
        assert_relative_eq!(y[0], 4.0);
    }

    #[test]
    fn test_heun_exact_for_linear_rhs() {
        // dy/dt = t: y(h) = h^2/2, which Heun reproduces exactly.
        let y = OdeMethod::ImprovedEuler.step(
            &|t, _y: &Array1<f64>| array![t],
            0.0,
            &array![0.0],
            0.2,
        );
        assert_relative_eq!(y[0], 0.02, epsilon = 1e-14);
    }

    #[test]
    fn test_rk4_single_step_accuracy() {
        // dy/dt = y from y(0)=1: one RK4 step matches e^h to O(h^5).
        let h = 0.1;
        let y = OdeMethod::RungeKutta4.step(&|_t, y: &Array1<f64>| y.clone(), 0.0, &array![1.0], h);
        assert_relative_eq!(y[0], h.exp(), epsilon = 1e-7);
    }
}
