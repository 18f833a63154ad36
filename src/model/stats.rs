//! Fit-quality metrics and univariate significance tests.

use statrs::distribution::{ContinuousCDF, FisherSnedecor};

/// Univariate F-test of one feature column against the target.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureTest {
    pub feature: String,
    pub f_statistic: f64,
    pub p_value: f64,
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Coefficient of determination. A constant target with a perfect fit
/// scores 1.0, with any residual 0.0.
pub fn r2_score(actual: &[f64], predicted: &[f64]) -> f64 {
    let y_mean = mean(actual);
    let ss_res: f64 = actual
        .iter()
        .zip(predicted)
        .map(|(y, p)| (y - p).powi(2))
        .sum();
    let ss_tot: f64 = actual.iter().map(|y| (y - y_mean).powi(2)).sum();

    if ss_tot == 0.0 {
        return if ss_res == 0.0 { 1.0 } else { 0.0 };
    }
    1.0 - ss_res / ss_tot
}

pub fn mean_squared_error(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.is_empty() {
        return 0.0;
    }
    let total: f64 = actual
        .iter()
        .zip(predicted)
        .map(|(y, p)| (y - p).powi(2))
        .sum();
    total / actual.len() as f64
}

/// Quantile with linear interpolation between the closest order statistics.
/// `q` is clamped to [0, 1]; an empty slice yields NaN.
pub fn quantile(values: &[f64], q: f64) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let position = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;

    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

/// Univariate linear-regression F-test of each column against `target`.
///
/// For column j with Pearson correlation r against the target,
/// F = r² / (1 − r²) · (n − 2) with (1, n − 2) degrees of freedom.
/// Constant columns score F = 0, p = 1; perfectly correlated columns
/// score F = ∞, p = 0.
pub fn f_regression(columns: &[Vec<f64>], names: &[String], target: &[f64]) -> Vec<FeatureTest> {
    let n = target.len();
    let dof = n.saturating_sub(2) as f64;
    let y_mean = mean(target);
    let y_centered: Vec<f64> = target.iter().map(|y| y - y_mean).collect();
    let y_norm = y_centered.iter().map(|y| y * y).sum::<f64>().sqrt();

    columns
        .iter()
        .zip(names)
        .map(|(column, name)| {
            let x_mean = mean(column);
            let mut cross = 0.0;
            let mut x_sq = 0.0;
            for (x, y) in column.iter().zip(&y_centered) {
                let dx = x - x_mean;
                cross += dx * y;
                x_sq += dx * dx;
            }

            let (f_statistic, p_value) = if x_sq == 0.0 || y_norm == 0.0 || dof == 0.0 {
                (0.0, 1.0)
            } else {
                let r = (cross / (x_sq.sqrt() * y_norm)).clamp(-1.0, 1.0);
                let r2 = r * r;
                if r2 >= 1.0 {
                    (f64::INFINITY, 0.0)
                } else {
                    let f = r2 / (1.0 - r2) * dof;
                    (f, f_distribution_sf(f, 1.0, dof))
                }
            };

            FeatureTest {
                feature: name.clone(),
                f_statistic,
                p_value,
            }
        })
        .collect()
}

/// Survival function P(X > f) of the F distribution with (d1, d2)
/// degrees of freedom. Degenerate degrees of freedom yield 1.0.
pub fn f_distribution_sf(f: f64, d1: f64, d2: f64) -> f64 {
    if f <= 0.0 {
        return 1.0;
    }
    if f.is_infinite() {
        return 0.0;
    }
    FisherSnedecor::new(d1, d2)
        .map(|distribution| distribution.sf(f))
        .unwrap_or(1.0)
}
