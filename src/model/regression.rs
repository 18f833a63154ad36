// src/model/regression.rs

use crate::errors::PipelineResult;
use crate::model::features::{design_row, feature_names, FeatureRow, ModelVariant, NeighborhoodEncoder};
use crate::model::linalg::least_squares;

#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LinearModel {
    /// Ordinary least squares with an intercept, no regularization.
    pub fn fit(design: &[Vec<f64>], target: &[f64]) -> PipelineResult<Self> {
        let fit = least_squares(design, target)?;
        Ok(LinearModel {
            coefficients: fit.coefficients,
            intercept: fit.intercept,
        })
    }

    pub fn predict_row(&self, row: &[f64]) -> f64 {
        row.iter()
            .zip(&self.coefficients)
            .map(|(x, beta)| x * beta)
            .sum::<f64>()
            + self.intercept
    }
}

/// Neighborhood encoding composed with the linear model.
#[derive(Debug, Clone)]
pub struct FittedModel {
    pub variant: ModelVariant,
    pub encoder: NeighborhoodEncoder,
    pub model: LinearModel,
}

impl FittedModel {
    /// Fits on complete rows only; the encoder learns the neighborhoods of
    /// exactly those rows.
    pub fn fit(variant: ModelVariant, rows: &[FeatureRow]) -> PipelineResult<(Self, Vec<Vec<f64>>, Vec<f64>)> {
        let encoder = NeighborhoodEncoder::fit(rows);
        let design = rows
            .iter()
            .map(|row| design_row(&encoder, variant, row))
            .collect::<PipelineResult<Vec<_>>>()?;
        let target: Vec<f64> = rows.iter().map(|r| r.price.unwrap_or(f64::NAN)).collect();

        let model = LinearModel::fit(&design, &target)?;
        Ok((
            FittedModel {
                variant,
                encoder,
                model,
            },
            design,
            target,
        ))
    }

    pub fn feature_names(&self) -> Vec<String> {
        feature_names(&self.encoder, self.variant)
    }

    /// Predicted price. An unseen neighborhood is an `UnknownNeighborhood`
    /// error rather than a silent all-zero encoding.
    pub fn predict(&self, row: &FeatureRow) -> PipelineResult<f64> {
        let encoded = design_row(&self.encoder, self.variant, row)?;
        Ok(self.model.predict_row(&encoded))
    }

    /// Coefficients paired with feature names, largest magnitude first.
    pub fn ranked_coefficients(&self) -> Vec<(String, f64)> {
        let mut ranked: Vec<(String, f64)> = self
            .feature_names()
            .into_iter()
            .zip(self.model.coefficients.iter().cloned())
            .collect();
        ranked.sort_by(|a, b| b.1.abs().total_cmp(&a.1.abs()));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PipelineError;

    fn lot(neighborhood: &str, area: f64, corner: bool, price: f64) -> FeatureRow {
        FeatureRow {
            neighborhood: neighborhood.to_string(),
            area: Some(area),
            corner_lot: corner,
            on_avenue: false,
            price: Some(price),
        }
    }

    #[test]
    fn test_predict_and_unknown_neighborhood() {
        let rows: Vec<FeatureRow> = (0..12)
            .map(|i| {
                let neighborhood = if i % 2 == 0 { "CENTRO" } else { "VILA NOVA" };
                let area = 200.0 + 25.0 * i as f64;
                let corner = i % 3 == 0;
                let premium = if neighborhood == "CENTRO" { 20_000.0 } else { 0.0 };
                let price = 150.0 * area + if corner { 8_000.0 } else { 0.0 } + premium + 10_000.0;
                lot(neighborhood, area, corner, price)
            })
            .collect();

        let (fitted, _, _) = FittedModel::fit(ModelVariant::Baseline, &rows).unwrap();

        let query = lot("CENTRO", 400.0, false, 0.0);
        let predicted = fitted.predict(&query).unwrap();
        assert!((predicted - (150.0 * 400.0 + 30_000.0)).abs() < 1e-4);

        let unknown = lot("JARDIM", 400.0, false, 0.0);
        assert!(matches!(
            fitted.predict(&unknown),
            Err(PipelineError::UnknownNeighborhood(_))
        ));
    }

    #[test]
    fn test_ranked_coefficients_by_magnitude() {
        let fitted = FittedModel {
            variant: ModelVariant::Baseline,
            encoder: NeighborhoodEncoder::fit(&[lot("A", 1.0, false, 1.0)]),
            model: LinearModel {
                coefficients: vec![-5.0, 2.0, -30.0],
                intercept: 0.0,
            },
        };

        let ranked = fitted.ranked_coefficients();
        let names: Vec<&str> = ranked.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["corner_lot", "neighborhood=A", "area"]);
    }
}
