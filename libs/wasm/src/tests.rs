//! Tests for the WASM boundary helpers.

use super::*;

#[test]
fn test_default_venue_round_trips() {
    let json = default_venue_json();
    let layout = plan_venue_internal(&json).unwrap();
    assert!(!layout.rings.is_empty());
    assert!(!layout.seats.is_empty());
    assert!(!layout.poles.is_empty());
}

#[test]
fn test_empty_request_uses_defaults() {
    let layout = plan_venue_internal("{}").unwrap();
    assert!(layout.seats.len() > layout.rings.len());
}

#[test]
fn test_overrides_apply() {
    let small = plan_venue_internal(r#"{ "tier_count": 1 }"#).unwrap();
    let full = plan_venue_internal("{}").unwrap();
    assert!(small.seats.len() < full.seats.len());
}

#[test]
fn test_malformed_json_is_reported() {
    let err = plan_venue_internal("not json").unwrap_err();
    assert!(matches!(err, PlanError::MalformedRequest(_)));
}

#[test]
fn test_invalid_request_is_reported() {
    let err = plan_venue_internal(r#"{ "circus_radius": -1.0 }"#).unwrap_err();
    assert!(matches!(err, PlanError::InvalidRequest(_)));
    // Error message carries the offending field
    assert!(err.to_string().contains("circus_radius"));
}

#[test]
fn test_layout_serializes_to_json() {
    let layout = plan_venue_internal("{}").unwrap();
    let json = serde_json::to_string(&layout).unwrap();
    assert!(json.contains("\"rings\""));
    assert!(json.contains("\"facing_center\""));
}
