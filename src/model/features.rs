// src/model/features.rs

use crate::config::ExampleLot;
use crate::domain::extraction::is_on_avenue;
use crate::domain::listing::CleanedListing;
use crate::errors::{PipelineError, PipelineResult};
use std::collections::BTreeSet;
use std::fmt;

/// Which feature set a model is trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelVariant {
    /// Neighborhood, area and corner flag.
    Baseline,
    /// Baseline plus area×corner, avenue adjacency and corner×avenue,
    /// trained after the IQR price filter.
    Extended,
}

impl ModelVariant {
    pub fn numeric_feature_names(&self) -> &'static [&'static str] {
        match self {
            ModelVariant::Baseline => &["area", "corner_lot"],
            ModelVariant::Extended => &[
                "area",
                "corner_lot",
                "area_x_corner",
                "on_avenue",
                "corner_x_avenue",
            ],
        }
    }

    pub fn filters_price_outliers(&self) -> bool {
        matches!(self, ModelVariant::Extended)
    }
}

impl fmt::Display for ModelVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelVariant::Baseline => write!(f, "baseline"),
            ModelVariant::Extended => write!(f, "extended (IQR-filtered)"),
        }
    }
}

/// The modeling view of one listing. Area and price stay optional here so
/// the outlier filter can see every priced row before incomplete rows are
/// dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    pub neighborhood: String,
    pub area: Option<f64>,
    pub corner_lot: bool,
    pub on_avenue: bool,
    pub price: Option<f64>,
}

impl FeatureRow {
    pub fn from_listing(listing: &CleanedListing) -> Self {
        FeatureRow {
            neighborhood: listing.neighborhood.clone().unwrap_or_default(),
            area: listing.area,
            corner_lot: listing.is_corner_lot,
            on_avenue: is_on_avenue(listing.address.as_deref()),
            price: listing.price,
        }
    }

    pub fn from_example(example: &ExampleLot) -> Self {
        FeatureRow {
            neighborhood: example.neighborhood.clone(),
            area: Some(example.area),
            corner_lot: example.corner_lot,
            on_avenue: example.on_avenue,
            price: None,
        }
    }

    /// Numeric passthrough columns for `variant`. A missing area is NaN;
    /// callers drop such rows before fitting.
    pub fn numeric(&self, variant: ModelVariant) -> Vec<f64> {
        let area = self.area.unwrap_or(f64::NAN);
        let corner = flag(self.corner_lot);

        match variant {
            ModelVariant::Baseline => vec![area, corner],
            ModelVariant::Extended => {
                let avenue = flag(self.on_avenue);
                vec![area, corner, area * corner, avenue, corner * avenue]
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.area.is_some() && self.price.is_some() && !self.neighborhood.is_empty()
    }
}

fn flag(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

/// One indicator column per neighborhood seen at fit time, sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborhoodEncoder {
    categories: Vec<String>,
}

impl NeighborhoodEncoder {
    pub fn fit(rows: &[FeatureRow]) -> Self {
        let categories: BTreeSet<&str> = rows.iter().map(|r| r.neighborhood.as_str()).collect();
        NeighborhoodEncoder {
            categories: categories.into_iter().map(str::to_string).collect(),
        }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn width(&self) -> usize {
        self.categories.len()
    }

    pub fn encode(&self, neighborhood: &str) -> PipelineResult<Vec<f64>> {
        let index = self
            .categories
            .binary_search_by(|c| c.as_str().cmp(neighborhood))
            .map_err(|_| PipelineError::UnknownNeighborhood(neighborhood.to_string()))?;

        let mut columns = vec![0.0; self.categories.len()];
        columns[index] = 1.0;
        Ok(columns)
    }

    pub fn feature_names(&self) -> Vec<String> {
        self.categories
            .iter()
            .map(|c| format!("neighborhood={c}"))
            .collect()
    }
}

/// Encoded row: indicators first, numeric passthrough after.
pub fn design_row(
    encoder: &NeighborhoodEncoder,
    variant: ModelVariant,
    row: &FeatureRow,
) -> PipelineResult<Vec<f64>> {
    let mut encoded = encoder.encode(&row.neighborhood)?;
    encoded.extend(row.numeric(variant));
    Ok(encoded)
}

pub fn feature_names(encoder: &NeighborhoodEncoder, variant: ModelVariant) -> Vec<String> {
    let mut names = encoder.feature_names();
    names.extend(variant.numeric_feature_names().iter().map(|n| n.to_string()));
    names
}
