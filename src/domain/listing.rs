// src/domain/listing.rs

use crate::domain::extraction::{is_corner_lot, AreaResolution};
use crate::listings::{ListingId, RawListing};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A listing after extraction, as written to the cleaned artifact.
/// Field names follow the feed so the artifact stays readable next to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanedListing {
    pub id: ListingId,
    #[serde(rename = "bairro")]
    pub neighborhood: Option<String>,
    #[serde(rename = "endereco")]
    pub address: Option<String>,
    /// Extracted area in m²; `None` when unresolved.
    pub area: Option<f64>,
    #[serde(rename = "valor")]
    pub price: Option<f64>,
    #[serde(rename = "esquina", with = "flag")]
    pub is_corner_lot: bool,
    /// Original description, kept for auditing the extraction.
    #[serde(rename = "descricaoImovel")]
    pub description: Option<Value>,
}

impl CleanedListing {
    pub fn from_raw(raw: &RawListing, resolution: &AreaResolution) -> Self {
        CleanedListing {
            id: raw.id.clone(),
            neighborhood: raw.neighborhood.clone(),
            address: raw.address.clone(),
            area: resolution.area(),
            price: raw.price,
            is_corner_lot: is_corner_lot(raw.description_text()),
            description: raw.description.clone(),
        }
    }

    pub fn has_area(&self) -> bool {
        self.area.is_some()
    }
}

/// Booleans stored as 0/1, the way the artifact has always encoded flags.
mod flag {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(u8::deserialize(deserializer)? != 0)
    }
}
