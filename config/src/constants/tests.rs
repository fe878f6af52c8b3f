//! Tests for the centralized configuration constants.

use super::*;
use std::f64::consts::TAU;

/// Ensures default venue dimensions are sane and nested correctly.
#[test]
fn default_venue_is_valid() {
    let venue = VenueConfig::default();
    assert!(venue.circus_radius > 0.0);
    assert!(venue.stage_radius < venue.circus_radius);
    assert!(venue.tier_count >= 1);
    assert!(venue.ring_width > 0.0);
}

/// Validates the builder rejects invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        VenueConfig::new(0.0, 7.0, 8, 1.6).unwrap_err(),
        ConfigError::InvalidRadius(0.0)
    );
    assert_eq!(
        VenueConfig::new(17.0, 17.0, 8, 1.6).unwrap_err(),
        ConfigError::InvalidStageRadius(17.0)
    );
    assert_eq!(
        VenueConfig::new(17.0, 7.0, 0, 1.6).unwrap_err(),
        ConfigError::InvalidTierCount(0)
    );
    assert_eq!(
        VenueConfig::new(17.0, 7.0, 8, -1.0).unwrap_err(),
        ConfigError::InvalidRingWidth(-1.0)
    );
}

/// The exit openings never cover the whole circle between them.
#[test]
fn exit_openings_leave_room() {
    assert!(ARTISTS_EXIT_WIDTH + PUBLIC_EXIT_WIDTH < TAU);
    assert!(ARTISTS_EXIT_WIDTH > 0.0);
    assert!(PUBLIC_EXIT_WIDTH > 0.0);
}
