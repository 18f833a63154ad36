//! Least-squares solver for small dense designs.
//!
//! Columns and target are centered, then the centered design is solved
//! through its SVD. Singular values below the rank cutoff are dropped, so a
//! rank-deficient design (every category of a one-hot block kept next to
//! the intercept) gets the minimum-norm solution.

use crate::errors::{PipelineError, PipelineResult};
use nalgebra::{DMatrix, DVector};

#[derive(Debug, Clone, PartialEq)]
pub struct LeastSquaresFit {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

/// Fits `target ≈ rows · β + intercept`.
pub fn least_squares(rows: &[Vec<f64>], target: &[f64]) -> PipelineResult<LeastSquaresFit> {
    let n = rows.len();
    if n == 0 {
        return Err(PipelineError::InsufficientData(
            "cannot fit a model on zero rows".to_string(),
        ));
    }
    if target.len() != n {
        return Err(PipelineError::InsufficientData(format!(
            "{} rows but {} target values",
            n,
            target.len()
        )));
    }

    let p = rows[0].len();
    if let Some(bad) = rows.iter().position(|row| row.len() != p) {
        return Err(PipelineError::InsufficientData(format!(
            "row {bad} has {} columns, expected {p}",
            rows[bad].len()
        )));
    }

    let y_mean = target.iter().sum::<f64>() / n as f64;
    if p == 0 {
        return Ok(LeastSquaresFit {
            coefficients: Vec::new(),
            intercept: y_mean,
        });
    }

    let x_mean: Vec<f64> = (0..p)
        .map(|j| rows.iter().map(|row| row[j]).sum::<f64>() / n as f64)
        .collect();

    let x = DMatrix::from_fn(n, p, |i, j| rows[i][j] - x_mean[j]);
    let y = DVector::from_iterator(n, target.iter().map(|value| value - y_mean));

    let svd = x.svd(true, true);
    // Same rank cutoff as LAPACK's gelsd default: eps · max(n, p) · σ_max.
    let cutoff = svd.singular_values.max() * f64::EPSILON * n.max(p) as f64;
    let beta = svd
        .solve(&y, cutoff)
        .map_err(|e| PipelineError::InsufficientData(format!("least-squares solve failed: {e}")))?;

    let coefficients: Vec<f64> = beta.iter().cloned().collect();
    let intercept = y_mean
        - coefficients
            .iter()
            .zip(&x_mean)
            .map(|(beta, mean)| beta * mean)
            .sum::<f64>();

    Ok(LeastSquaresFit {
        coefficients,
        intercept,
    })
}
