use crate::config::PipelineConfig;
use crate::domain::extraction::{resolve_area, AreaResolution};
use crate::domain::listing::CleanedListing;
use crate::errors::{PipelineError, PipelineResult};
use crate::listings::{ListingId, RawListing};
use crate::spreadsheets::export_review_xlsx;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Everything the cleaning stage produces for one run.
#[derive(Debug, Default)]
pub struct CleaningOutcome {
    /// One entry per input listing, in input order, resolved or not.
    pub listings: Vec<CleanedListing>,
    /// Ids whose area is `None` in `listings`, in input order.
    pub unresolved_ids: Vec<ListingId>,
    /// Listings whose matched area text failed to parse.
    pub parse_failures: usize,
    /// Listings whose matched area was zero or negative.
    pub non_positive: usize,
}

impl CleaningOutcome {
    pub fn resolved_count(&self) -> usize {
        self.listings.len() - self.unresolved_ids.len()
    }

    pub fn corner_lot_count(&self) -> usize {
        self.listings.iter().filter(|l| l.is_corner_lot).count()
    }
}

pub fn load_listings(path: &Path) -> PipelineResult<Vec<RawListing>> {
    let file = File::open(path).map_err(|e| PipelineError::io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| PipelineError::json(path, e))
}

/// Runs the extractor exactly once per listing.
///
/// A listing whose area text cannot be parsed only loses its own area;
/// the rest of the batch is unaffected.
pub fn clean_listings(raw: &[RawListing]) -> CleaningOutcome {
    let mut outcome = CleaningOutcome::default();

    for listing in raw {
        let resolution = resolve_area(listing.description_text());

        match &resolution {
            AreaResolution::Unparseable(text) => {
                warn!(id = %listing.id, raw = %text, "area text did not parse, marking unresolved");
                outcome.parse_failures += 1;
            }
            AreaResolution::NonPositive(area) => {
                warn!(id = %listing.id, area, "non-positive area, marking unresolved");
                outcome.non_positive += 1;
            }
            AreaResolution::NotFound => {
                debug!(id = %listing.id, "no area pattern in description");
            }
            AreaResolution::Resolved(_) => {}
        }

        let cleaned = CleanedListing::from_raw(listing, &resolution);
        if !cleaned.has_area() {
            outcome.unresolved_ids.push(cleaned.id.clone());
        }
        outcome.listings.push(cleaned);
    }

    outcome
}

/// Writes the cleaned listings and the unresolved id list.
pub fn write_artifacts(outcome: &CleaningOutcome, config: &PipelineConfig) -> PipelineResult<()> {
    fs::create_dir_all(&config.output_dir).map_err(|e| PipelineError::io(&config.output_dir, e))?;

    write_json(&config.cleaned_path(), &outcome.listings)?;
    write_json(&config.unresolved_path(), &outcome.unresolved_ids)?;
    Ok(())
}

/// Load, clean, write. The whole extraction stage in one call.
pub fn run_cleaning_stage(config: &PipelineConfig) -> PipelineResult<CleaningOutcome> {
    info!(input = %config.input_path().display(), "loading raw listings");
    let raw = load_listings(config.input_path())?;

    let outcome = clean_listings(&raw);
    write_artifacts(&outcome, config)?;
    export_review_xlsx(&outcome.listings, &config.review_workbook_path())?;

    info!(
        listings = outcome.listings.len(),
        resolved = outcome.resolved_count(),
        unresolved = outcome.unresolved_ids.len(),
        corner_lots = outcome.corner_lot_count(),
        parse_failures = outcome.parse_failures,
        non_positive = outcome.non_positive,
        output = %config.output_dir.display(),
        "cleaning stage complete"
    );

    Ok(outcome)
}

pub fn load_cleaned(path: &Path) -> PipelineResult<Vec<CleanedListing>> {
    let file = File::open(path).map_err(|e| PipelineError::io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| PipelineError::json(path, e))
}

/// Reads the cleaned artifact, producing it first when it is missing.
pub fn ensure_cleaned_listings(config: &PipelineConfig) -> PipelineResult<Vec<CleanedListing>> {
    let path = config.cleaned_path();

    if !path.exists() {
        warn!(
            path = %path.display(),
            "cleaned listings not found, running the cleaning stage first"
        );
        run_cleaning_stage(config)?;
    }

    load_cleaned(&path)
}

// Two-space indentation, UTF-8 kept as-is (no \u escapes).
fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> PipelineResult<()> {
    let file = File::create(path).map_err(|e| PipelineError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, value).map_err(|e| PipelineError::json(path, e))?;
    writer.flush().map_err(|e| PipelineError::io(path, e))?;

    debug!(path = %path.display(), "artifact written");
    Ok(())
}
