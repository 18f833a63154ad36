use crate::domain::listing::CleanedListing;
use crate::errors::{PipelineError, PipelineResult};
use rust_xlsxwriter::Workbook;
use serde_json::Value;
use std::path::Path;

// Excel rejects cells longer than 32,767 characters.
const MAX_CELL_CHARS: usize = 32_767;

/// Writes one row per cleaned listing so unresolved areas can be
/// reviewed and filled in by hand.
pub fn export_review_xlsx(listings: &[CleanedListing], path: &Path) -> PipelineResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // Headers
    let headers = [
        "Id",
        "Neighborhood",
        "Address",
        "Area (m²)",
        "Price",
        "Corner Lot",
        "Area Resolved",
        "Description",
    ];

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                PipelineError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    // Rows
    for (i, listing) in listings.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_string(r, 0, listing.id.to_string())
            .map_err(|e| PipelineError::XlsxError(format!("Failed to write id: {}", e)))?;

        let neighborhood = listing.neighborhood.as_deref().unwrap_or("");
        worksheet
            .write_string(r, 1, neighborhood)
            .map_err(|e| PipelineError::XlsxError(format!("Failed to write neighborhood: {}", e)))?;

        let address = listing.address.as_deref().unwrap_or("");
        worksheet
            .write_string(r, 2, address)
            .map_err(|e| PipelineError::XlsxError(format!("Failed to write address: {}", e)))?;

        if let Some(area) = listing.area {
            worksheet
                .write_number(r, 3, area)
                .map_err(|e| PipelineError::XlsxError(format!("Failed to write area: {}", e)))?;
        }

        if let Some(price) = listing.price {
            worksheet
                .write_number(r, 4, price)
                .map_err(|e| PipelineError::XlsxError(format!("Failed to write price: {}", e)))?;
        }

        worksheet
            .write_string(r, 5, if listing.is_corner_lot { "Yes" } else { "No" })
            .map_err(|e| PipelineError::XlsxError(format!("Failed to write corner lot: {}", e)))?;

        worksheet
            .write_string(r, 6, if listing.has_area() { "Yes" } else { "No" })
            .map_err(|e| {
                PipelineError::XlsxError(format!("Failed to write area resolved: {}", e))
            })?;

        let description = match &listing.description {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };
        let description: String = description.chars().take(MAX_CELL_CHARS).collect();
        worksheet
            .write_string(r, 7, description)
            .map_err(|e| PipelineError::XlsxError(format!("Failed to write description: {}", e)))?;
    }

    workbook
        .save(path)
        .map_err(|e| PipelineError::XlsxError(format!("Failed to save workbook: {}", e)))?;

    tracing::debug!(path = %path.display(), rows = listings.len(), "review workbook written");
    Ok(())
}
