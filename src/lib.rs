//! Lot price pipeline: extracts area and corner-lot flags from listing
//! text, then fits a linear price model on the cleaned listings.

pub mod cleaning;
pub mod config;
pub mod domain;
pub mod errors;
pub mod listings;
pub mod model;
pub mod report;
pub mod spreadsheets;

#[cfg(test)]
mod tests;

pub use config::{ExampleLot, PipelineConfig};
pub use errors::{PipelineError, PipelineResult};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the stderr log subscriber. `RUST_LOG` overrides the default
/// `info` level.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
