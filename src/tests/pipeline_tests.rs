// src/tests/pipeline_tests.rs

use super::utils::{workspace_with_feed, SAMPLE_FEED};
use crate::cleaning::{
    clean_listings, ensure_cleaned_listings, load_cleaned, load_listings, run_cleaning_stage,
};
use crate::errors::PipelineError;
use crate::listings::ListingId;
use std::collections::HashSet;
use std::fs;

#[test]
fn test_every_listing_is_cleaned_once() {
    let (_dir, config) = workspace_with_feed(SAMPLE_FEED);
    let raw = load_listings(config.input_path()).unwrap();
    let outcome = clean_listings(&raw);

    assert_eq!(outcome.listings.len(), raw.len());

    let ids: Vec<&ListingId> = outcome.listings.iter().map(|l| &l.id).collect();
    let raw_ids: Vec<&ListingId> = raw.iter().map(|l| &l.id).collect();
    assert_eq!(ids, raw_ids);

    let areas: Vec<Option<f64>> = outcome.listings.iter().map(|l| l.area).collect();
    assert_eq!(
        areas,
        vec![Some(360.0), None, Some(360.0), None, None, Some(300.0)]
    );

    let corners: Vec<bool> = outcome.listings.iter().map(|l| l.is_corner_lot).collect();
    assert_eq!(corners, vec![true, false, false, false, false, true]);
}

#[test]
fn test_unresolved_ids_match_null_areas() {
    let (_dir, config) = workspace_with_feed(SAMPLE_FEED);
    let outcome = clean_listings(&load_listings(config.input_path()).unwrap());

    let null_area: Vec<ListingId> = outcome
        .listings
        .iter()
        .filter(|l| l.area.is_none())
        .map(|l| l.id.clone())
        .collect();

    assert_eq!(outcome.unresolved_ids, null_area);
    assert_eq!(
        outcome.unresolved_ids,
        vec![ListingId::Number(866), ListingId::Number(868), ListingId::Number(869)]
    );
    assert_eq!(outcome.resolved_count(), 3);
}

#[test]
fn test_non_ascii_digits_leave_record_unresolved() {
    let (_dir, config) = workspace_with_feed(SAMPLE_FEED);
    let outcome = clean_listings(&load_listings(config.input_path()).unwrap());

    // 868 reads "MEDINDO" followed by Arabic-Indic digits: no pattern matches.
    assert_eq!(outcome.parse_failures, 0);
    let measured = outcome
        .listings
        .iter()
        .find(|l| l.id == ListingId::Number(868))
        .unwrap();
    assert_eq!(measured.area, None);
    assert_eq!(measured.price, Some(99000.0));

    let after = outcome
        .listings
        .iter()
        .find(|l| l.id == ListingId::Number(869))
        .unwrap();
    assert_eq!(after.price, Some(120000.0));
}

#[test]
fn test_stage_writes_artifacts_that_round_trip() {
    let (_dir, config) = workspace_with_feed(SAMPLE_FEED);
    let outcome = run_cleaning_stage(&config).unwrap();

    let reloaded = load_cleaned(&config.cleaned_path()).unwrap();
    assert_eq!(reloaded, outcome.listings);

    let unresolved: Vec<ListingId> =
        serde_json::from_str(&fs::read_to_string(config.unresolved_path()).unwrap()).unwrap();
    assert_eq!(unresolved, outcome.unresolved_ids);

    let unresolved_set: HashSet<&ListingId> = unresolved.iter().collect();
    for listing in &reloaded {
        assert_eq!(listing.area.is_none(), unresolved_set.contains(&listing.id));
    }

    assert!(config.review_workbook_path().exists());
}

#[test]
fn test_artifact_is_indented_and_keeps_accents() {
    let (_dir, config) = workspace_with_feed(SAMPLE_FEED);
    run_cleaning_stage(&config).unwrap();

    let text = fs::read_to_string(config.cleaned_path()).unwrap();
    assert!(text.starts_with("[\n  {\n    \"id\": 865,"));
    assert!(text.contains("Ótimo lote plano"));
    assert!(text.contains("\"esquina\": 1"));
    assert!(text.contains("\"area\": null"));

    let ids = fs::read_to_string(config.unresolved_path()).unwrap();
    assert_eq!(ids, "[\n  866,\n  868,\n  869\n]");
}

#[test]
fn test_missing_artifact_triggers_cleaning_stage() {
    let (_dir, config) = workspace_with_feed(SAMPLE_FEED);
    assert!(!config.cleaned_path().exists());

    let listings = ensure_cleaned_listings(&config).unwrap();
    assert_eq!(listings.len(), 6);
    assert!(config.cleaned_path().exists());
    assert!(config.unresolved_path().exists());
}

#[test]
fn test_existing_artifact_is_reused() {
    let (_dir, config) = workspace_with_feed(SAMPLE_FEED);
    run_cleaning_stage(&config).unwrap();

    // A feed change after cleaning is not picked up while the artifact exists.
    fs::write(config.input_path(), "[]").unwrap();
    let listings = ensure_cleaned_listings(&config).unwrap();
    assert_eq!(listings.len(), 6);
}

#[test]
fn test_missing_feed_is_fatal() {
    let (dir, config) = workspace_with_feed(SAMPLE_FEED);
    fs::remove_file(dir.path().join("input/data.json")).unwrap();

    assert!(matches!(
        ensure_cleaned_listings(&config),
        Err(PipelineError::Io { .. })
    ));
}

#[test]
fn test_malformed_feed_is_reported_with_path() {
    let (_dir, config) = workspace_with_feed("{ not json");

    let err = run_cleaning_stage(&config).unwrap_err();
    assert!(matches!(err, PipelineError::Json { .. }));
    assert!(err.to_string().contains("data.json"));
}
