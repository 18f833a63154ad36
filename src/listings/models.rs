use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

// listing
//  ├── id
//  ├── bairro            (neighborhood)
//  ├── endereco          (street address)
//  ├── descricaoImovel   (free text, may be missing or not a string)
//  └── valor             (asking price)

#[derive(Debug, Clone, Deserialize)]
pub struct RawListing {
    pub id: ListingId,
    #[serde(rename = "bairro", default)]
    pub neighborhood: Option<String>,
    #[serde(rename = "endereco", default)]
    pub address: Option<String>,
    #[serde(rename = "descricaoImovel", default)]
    pub description: Option<Value>,
    #[serde(rename = "valor", default)]
    pub price: Option<f64>,
}

impl RawListing {
    /// The description as text. Numbers, arrays and other non-string
    /// values are treated the same as a missing description.
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_ref().and_then(Value::as_str)
    }
}

/// Listing identifier exactly as the feed spells it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListingId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingId::Number(n) => write!(f, "{n}"),
            ListingId::Text(s) => write!(f, "{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_listing_accepts_feed_shape() {
        let json = r#"[
            {"id": 865, "bairro": "CENTRO", "endereco": "RUA A", "descricaoImovel": "Lote 300 m2", "valor": 90000},
            {"id": "A-7", "bairro": "CENTRO", "endereco": null, "descricaoImovel": 42, "valor": 1.5e5},
            {"id": 867}
        ]"#;

        let listings: Vec<RawListing> = serde_json::from_str(json).unwrap();
        assert_eq!(listings.len(), 3);

        assert_eq!(listings[0].id, ListingId::Number(865));
        assert_eq!(listings[0].description_text(), Some("Lote 300 m2"));
        assert_eq!(listings[0].price, Some(90000.0));

        assert_eq!(listings[1].id, ListingId::Text("A-7".to_string()));
        assert_eq!(listings[1].description_text(), None);
        assert_eq!(listings[1].address, None);

        assert_eq!(listings[2].neighborhood, None);
        assert_eq!(listings[2].description_text(), None);
        assert_eq!(listings[2].price, None);
    }

    #[test]
    fn test_listing_id_serializes_unchanged() {
        let ids = vec![ListingId::Number(865), ListingId::Text("A-7".into())];
        assert_eq!(serde_json::to_string(&ids).unwrap(), r#"[865,"A-7"]"#);
        assert_eq!(ids[0].to_string(), "865");
    }
}
