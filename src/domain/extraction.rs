// src/domain/extraction.rs

use crate::errors::{PipelineError, PipelineResult};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    // "TAMANHO: 10 x 20 m", "DIMENSÕES 12,5X30m²"
    static ref DIMENSIONS_RE: Regex = Regex::new(
        r"(?i)(?:TAMANHO|DIMENS[ÕO]ES)\s*:?\s*([0-9]+[,.]?[0-9]*)\s*[x×]\s*([0-9]+[,.]?[0-9]*)\s*(?:m|&sup2;|²)"
    ).unwrap();

    // "Área do Terreno: 150 m²", "área 360m"
    static ref LABELED_AREA_RE: Regex = Regex::new(
        r"(?i)Área\s*(?:do\s*Terreno)?\s*:?\s*([0-9]+[,.]?[0-9]*)\s*(?:m|&sup2;|²)"
    ).unwrap();

    // "MEDINDO 80 m²"
    static ref MEASURING_RE: Regex = Regex::new(
        r"(?i)MEDINDO\s*([0-9]+[,.]?[0-9]*)\s*(?:m|&sup2;|²)"
    ).unwrap();

    // "lote de 300 m2 plano", not glued to other digits
    static ref BARE_AREA_RE: Regex = Regex::new(
        r"(?i)(?:^|[^0-9])([0-9]+[,.]?[0-9]*)\s*(?:m²|m2)(?:[^0-9]|$)"
    ).unwrap();

    static ref CORNER_RE: Regex = Regex::new(r"(?i)esquina").unwrap();
    static ref AVENUE_RE: Regex = Regex::new(r"(?i)avenida").unwrap();
}

/// A matcher returns `None` when its pattern is absent, otherwise the
/// parsed area (or the parse failure of the text it captured).
type AreaMatcher = fn(&str) -> Option<PipelineResult<f64>>;

/// Tried in order; the first matcher whose pattern is present decides.
const AREA_MATCHERS: [(&str, AreaMatcher); 4] = [
    ("dimensions", match_dimensions),
    ("labeled_area", match_labeled_area),
    ("measuring", match_measuring),
    ("bare_area", match_bare_area),
];

/// Outcome of the single extraction attempt made for each listing.
#[derive(Debug, Clone, PartialEq)]
pub enum AreaResolution {
    Resolved(f64),
    /// Missing or non-string description, or no pattern present.
    NotFound,
    /// A pattern matched but its number could not be parsed.
    Unparseable(String),
    /// A pattern matched but produced zero or a negative area.
    NonPositive(f64),
}

impl AreaResolution {
    pub fn area(&self) -> Option<f64> {
        match self {
            AreaResolution::Resolved(area) => Some(*area),
            _ => None,
        }
    }
}

/// Runs the matcher cascade over `text`.
///
/// Returns `Ok(None)` when no pattern is present and an
/// `AreaParse` error when the winning pattern captured an unparseable number.
/// Later matchers are never consulted once one pattern is present.
pub fn extract_area_strict(text: &str) -> PipelineResult<Option<f64>> {
    for (name, matcher) in AREA_MATCHERS.iter() {
        if let Some(result) = matcher(text) {
            tracing::trace!(matcher = *name, "area pattern matched");
            return result.map(Some);
        }
    }
    Ok(None)
}

/// Classifies a listing description, downgrading every failure to a
/// non-`Resolved` outcome instead of an error.
pub fn resolve_area(description: Option<&str>) -> AreaResolution {
    let Some(text) = description else {
        return AreaResolution::NotFound;
    };

    match extract_area_strict(text) {
        Ok(Some(area)) if area > 0.0 => AreaResolution::Resolved(area),
        Ok(Some(area)) => AreaResolution::NonPositive(area),
        Ok(None) => AreaResolution::NotFound,
        Err(PipelineError::AreaParse { raw }) => AreaResolution::Unparseable(raw),
        Err(other) => AreaResolution::Unparseable(other.to_string()),
    }
}

/// Area in m², or `None` when it cannot be determined.
pub fn extract_area(description: Option<&str>) -> Option<f64> {
    let resolution = resolve_area(description);
    match &resolution {
        AreaResolution::Unparseable(raw) => {
            tracing::warn!(raw = %raw, "area text matched but did not parse, leaving unresolved");
        }
        AreaResolution::NonPositive(area) => {
            tracing::warn!(area, "non-positive area extracted, leaving unresolved");
        }
        _ => {}
    }
    resolution.area()
}

/// Whether the description mentions a corner lot ("esquina").
pub fn is_corner_lot(description: Option<&str>) -> bool {
    description.is_some_and(|text| CORNER_RE.is_match(text))
}

/// Whether the street address is on an avenue ("avenida").
pub fn is_on_avenue(address: Option<&str>) -> bool {
    address.is_some_and(|text| AVENUE_RE.is_match(text))
}

fn parse_decimal(raw: &str) -> PipelineResult<f64> {
    raw.replace(',', ".")
        .parse::<f64>()
        .map_err(|_| PipelineError::AreaParse {
            raw: raw.to_string(),
        })
}

fn single_value(caps: Captures<'_>) -> PipelineResult<f64> {
    parse_decimal(&caps[1])
}

fn match_dimensions(text: &str) -> Option<PipelineResult<f64>> {
    DIMENSIONS_RE.captures(text).map(|caps| {
        let width = parse_decimal(&caps[1])?;
        let depth = parse_decimal(&caps[2])?;
        Ok(width * depth)
    })
}

fn match_labeled_area(text: &str) -> Option<PipelineResult<f64>> {
    LABELED_AREA_RE.captures(text).map(single_value)
}

fn match_measuring(text: &str) -> Option<PipelineResult<f64>> {
    MEASURING_RE.captures(text).map(single_value)
}

fn match_bare_area(text: &str) -> Option<PipelineResult<f64>> {
    BARE_AREA_RE.captures(text).map(single_value)
}
