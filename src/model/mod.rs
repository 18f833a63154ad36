pub mod features;
pub mod linalg;
pub mod outliers;
pub mod regression;
pub mod stats;
pub mod trainer;

pub use features::{FeatureRow, ModelVariant, NeighborhoodEncoder};
pub use outliers::{filter_price_outliers, IqrBounds, OutlierSummary};
pub use regression::{FittedModel, LinearModel};
pub use trainer::{train, TrainingReport};
