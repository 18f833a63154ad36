// src/model/outliers.rs

use crate::model::features::FeatureRow;
use crate::model::stats::quantile;

const IQR_FENCE: f64 = 1.5;

/// Tukey fences on price: [Q1 − 1.5·IQR, Q3 + 1.5·IQR].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IqrBounds {
    pub q1: f64,
    pub q3: f64,
    pub lower: f64,
    pub upper: f64,
}

impl IqrBounds {
    /// Returns `None` for an empty sample.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let q1 = quantile(values, 0.25);
        let q3 = quantile(values, 0.75);
        let iqr = q3 - q1;

        Some(IqrBounds {
            q1,
            q3,
            lower: q1 - IQR_FENCE * iqr,
            upper: q3 + IQR_FENCE * iqr,
        })
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutlierSummary {
    pub bounds: IqrBounds,
    pub removed: usize,
}

/// Drops rows whose price lies outside the fences.
///
/// The fences come from every priced row of the pooled dataset, with no
/// split and no per-neighborhood grouping. This is a known methodological
/// defect: the rows being judged shape their own bounds, and cheap
/// neighborhoods lose more lots than expensive ones. Rows without a price
/// are left for the completeness filter.
pub fn filter_price_outliers(rows: Vec<FeatureRow>) -> (Vec<FeatureRow>, Option<OutlierSummary>) {
    let prices: Vec<f64> = rows.iter().filter_map(|r| r.price).collect();
    let Some(bounds) = IqrBounds::from_values(&prices) else {
        return (rows, None);
    };

    let before = rows.len();
    let kept: Vec<FeatureRow> = rows
        .into_iter()
        .filter(|r| r.price.map_or(true, |price| bounds.contains(price)))
        .collect();
    let removed = before - kept.len();

    tracing::info!(
        q1 = bounds.q1,
        q3 = bounds.q3,
        lower = bounds.lower,
        upper = bounds.upper,
        removed,
        "price outliers filtered"
    );

    (kept, Some(OutlierSummary { bounds, removed }))
}
