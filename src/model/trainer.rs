// src/model/trainer.rs

use crate::domain::listing::CleanedListing;
use crate::errors::{PipelineError, PipelineResult};
use crate::model::features::{FeatureRow, ModelVariant};
use crate::model::outliers::{filter_price_outliers, OutlierSummary};
use crate::model::regression::FittedModel;
use crate::model::stats::{f_regression, mean_squared_error, r2_score, FeatureTest};
use tracing::{info, warn};

/// Everything the console report shows about one fit. All metrics are
/// in-sample: they are computed on the rows the model was fitted on.
#[derive(Debug, Clone)]
pub struct TrainingReport {
    pub variant: ModelVariant,
    pub listings_seen: usize,
    pub rows_used: usize,
    /// Rows dropped for a missing area, price or neighborhood.
    pub rows_incomplete: usize,
    pub outliers: Option<OutlierSummary>,
    pub r2: f64,
    pub mse: f64,
    /// Sorted by F-statistic, highest first.
    pub feature_tests: Vec<FeatureTest>,
    /// Sorted by absolute coefficient, largest first.
    pub coefficients: Vec<(String, f64)>,
    pub intercept: f64,
}

/// Feature engineering, optional outlier filter, OLS fit and evaluation.
pub fn train(
    variant: ModelVariant,
    listings: &[CleanedListing],
) -> PipelineResult<(FittedModel, TrainingReport)> {
    let rows: Vec<FeatureRow> = listings.iter().map(FeatureRow::from_listing).collect();

    let (rows, outliers) = if variant.filters_price_outliers() {
        filter_price_outliers(rows)
    } else {
        (rows, None)
    };

    let before = rows.len();
    let rows: Vec<FeatureRow> = rows.into_iter().filter(FeatureRow::is_complete).collect();
    let rows_incomplete = before - rows.len();
    if rows_incomplete > 0 {
        warn!(
            dropped = rows_incomplete,
            "rows without area, price or neighborhood left out of the fit"
        );
    }

    if rows.is_empty() {
        return Err(PipelineError::InsufficientData(
            "no listing has area, price and neighborhood".to_string(),
        ));
    }

    let (fitted, design, target) = FittedModel::fit(variant, &rows)?;

    let predicted: Vec<f64> = design.iter().map(|row| fitted.model.predict_row(row)).collect();
    let r2 = r2_score(&target, &predicted);
    let mse = mean_squared_error(&target, &predicted);

    let names = fitted.feature_names();
    let columns: Vec<Vec<f64>> = (0..names.len())
        .map(|j| design.iter().map(|row| row[j]).collect())
        .collect();
    let mut feature_tests = f_regression(&columns, &names, &target);
    feature_tests.sort_by(|a, b| b.f_statistic.total_cmp(&a.f_statistic));

    info!(
        variant = %variant,
        rows = rows.len(),
        features = names.len(),
        r2,
        mse,
        "model fitted"
    );

    let report = TrainingReport {
        variant,
        listings_seen: listings.len(),
        rows_used: rows.len(),
        rows_incomplete,
        outliers,
        r2,
        mse,
        feature_tests,
        coefficients: fitted.ranked_coefficients(),
        intercept: fitted.model.intercept,
    };

    Ok((fitted, report))
}
