//! Goodness-of-fit metrics
//!
//! R-squared and residual variance, reported with every fit so a high-degree
//! polynomial that merely memorizes the data shows up in the numbers.

use serde::Serialize;

/// Metrics for one fitted model.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FitMetrics {
    /// Coefficient of determination; 1 is a perfect fit
    pub r_squared: f64,
    /// Residual variance SS_res / (m - p); 0 when there are no spare
    /// degrees of freedom
    pub residual_variance: f64,
}

/// Compute metrics from observed values, model predictions and the number of
/// model parameters.
pub fn fit_metrics(observed: &[f64], predicted: &[f64], n_params: usize) -> FitMetrics {
    let m = observed.len();
    let mean = observed.iter().sum::<f64>() / m as f64;

    let ss_res: f64 = observed
        .iter()
        .zip(predicted.iter())
        .map(|(&y, &p)| (y - p) * (y - p))
        .sum();
    let ss_tot: f64 = observed.iter().map(|&y| (y - mean) * (y - mean)).sum();

    let r_squared = if ss_tot != 0.0 { 1.0 - ss_res / ss_tot } else { 0.0 };
    let dof = m.saturating_sub(n_params);
    let residual_variance = if dof > 0 { ss_res / dof as f64 } else { 0.0 };

    FitMetrics {
        r_squared,
        residual_variance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_perfect_fit() {
        let y = [1.0, 2.0, 3.0, 4.0];
        let metrics = fit_metrics(&y, &y, 2);
        assert_relative_eq!(metrics.r_squared, 1.0);
        assert_relative_eq!(metrics.residual_variance, 0.0);
    }

    #[test]
    fn test_known_residuals() {
        let observed = [0.0, 2.0];
        let predicted = [1.0, 1.0];
        // SS_res = 2, SS_tot = 2, R^2 = 0; dof = 1 -> var = 2
        let metrics = fit_metrics(&observed, &predicted, 1);
        assert_relative_eq!(metrics.r_squared, 0.0);
        assert_relative_eq!(metrics.residual_variance, 2.0);
    }

    #[test]
    fn test_constant_data_guard() {
        let observed = [5.0, 5.0, 5.0];
        let predicted = [5.0, 5.0, 5.0];
        let metrics = fit_metrics(&observed, &predicted, 2);
        assert_relative_eq!(metrics.r_squared, 0.0);
    }

    #[test]
    fn test_no_spare_dof() {
        let observed = [1.0, 2.0];
        let predicted = [1.1, 1.9];
        let metrics = fit_metrics(&observed, &predicted, 2);
        assert_relative_eq!(metrics.residual_variance, 0.0);
    }
}
