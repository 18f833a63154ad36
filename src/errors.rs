// errors.rs
use std::path::PathBuf;

use thiserror::Error;

/// Errors originating from either the cleaning stage
/// (reading the feed, writing artifacts) or the modeling stage.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error on {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Xlsx error: {0}")]
    XlsxError(String),

    /// A pattern matched but the captured number could not be parsed.
    #[error("Area parse error: {raw:?} is not a number")]
    AreaParse { raw: String },

    /// Prediction was requested for a neighborhood the model never saw.
    #[error("Unknown neighborhood: {0:?} was not present in the training data")]
    UnknownNeighborhood(String),

    #[error("Not enough data: {0}")]
    InsufficientData(String),
}

// Type alias used across both stages.
pub type PipelineResult<T> = Result<T, PipelineError>;

impl PipelineError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PipelineError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        PipelineError::Json {
            path: path.into(),
            source,
        }
    }
}
