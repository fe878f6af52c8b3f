//! # Tier Progression
//!
//! Concentric gallery tiers at fixed radial spacing, climbing outward from
//! the stage until the next ring would breach the tent boundary.

use config::constants::VenueConfig;
use serde::{Deserialize, Serialize};

/// One concentric ring/row in the radial layout, indexed outward from the
/// central stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    /// Zero-based tier index, innermost first.
    pub index: u32,
    /// Inner radius of the ring.
    pub inner_radius: f64,
    /// Outer radius of the ring.
    pub outer_radius: f64,
    /// Radius at which this tier's gap widths convert to angles and items
    /// are placed. One radius per tier for all conversions: the ring
    /// mid-radius by default, overridden to the seat-row radius in discrete
    /// mode.
    pub effective_radius: f64,
    /// Height of the ring's floor.
    pub floor_y: f64,
}

impl Tier {
    /// Returns the tier with a different effective radius.
    pub fn with_effective_radius(self, effective_radius: f64) -> Self {
        Self {
            effective_radius,
            ..self
        }
    }
}

/// Geometric progression of tiers: `inner(i) = start + i * (width + gap)`,
/// each tier `height_step` higher than the previous one.
///
/// # Examples
///
/// ```rust
/// use circus_layout::TierProgression;
/// use config::constants::VenueConfig;
///
/// let tiers = TierProgression::from_venue(&VenueConfig::default(), 1.2);
/// for tier in tiers.iter() {
///     assert!(tier.outer_radius < VenueConfig::default().circus_radius);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierProgression {
    start_radius: f64,
    ring_width: f64,
    ring_gap: f64,
    base_y: f64,
    height_step: f64,
    limit_radius: f64,
    requested: u32,
}

impl TierProgression {
    /// Builds the progression for a venue; `start_inset` is the radial gap
    /// between the stage edge and the innermost ring.
    pub fn from_venue(venue: &VenueConfig, start_inset: f64) -> Self {
        Self {
            start_radius: venue.stage_radius + start_inset,
            ring_width: venue.ring_width,
            ring_gap: venue.ring_gap,
            base_y: venue.base_y,
            height_step: venue.height_step,
            limit_radius: venue.circus_radius,
            requested: venue.tier_count,
        }
    }

    /// The tier at `index`, or `None` past the requested count or once the
    /// ring would reach the tent boundary. Hitting the boundary is the
    /// progression's terminal condition, not an error.
    pub fn tier(&self, index: u32) -> Option<Tier> {
        if index >= self.requested {
            return None;
        }
        let inner = self.start_radius + f64::from(index) * (self.ring_width + self.ring_gap);
        let outer = inner + self.ring_width;
        if outer >= self.limit_radius {
            return None;
        }
        Some(Tier {
            index,
            inner_radius: inner,
            outer_radius: outer,
            effective_radius: (inner + outer) / 2.0,
            floor_y: self.base_y + f64::from(index) * self.height_step,
        })
    }

    /// Iterates tiers innermost first, stopping at the first one that does
    /// not fit. Outer radii grow strictly, so the iteration always ends.
    pub fn iter(&self) -> impl Iterator<Item = Tier> + '_ {
        (0..self.requested).map_while(move |index| self.tier(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue() -> VenueConfig {
        VenueConfig::default()
    }

    #[test]
    fn test_first_tier_geometry() {
        let tiers = TierProgression::from_venue(&venue(), 1.2);
        let first = tiers.tier(0).unwrap();
        assert_eq!(first.index, 0);
        assert!((first.inner_radius - (venue().stage_radius + 1.2)).abs() < 1e-12);
        assert!((first.outer_radius - first.inner_radius - venue().ring_width).abs() < 1e-12);
        assert!((first.floor_y - venue().base_y).abs() < 1e-12);
    }

    #[test]
    fn test_tiers_climb_outward_and_upward() {
        let tiers: Vec<Tier> = TierProgression::from_venue(&venue(), 1.2).iter().collect();
        assert!(tiers.len() >= 2);
        for pair in tiers.windows(2) {
            assert!(pair[1].inner_radius > pair[0].outer_radius - 1e-12);
            assert!(pair[1].floor_y > pair[0].floor_y);
            assert_eq!(pair[1].index, pair[0].index + 1);
        }
    }

    #[test]
    fn test_terminates_at_boundary() {
        // Ask for far more tiers than the tent can hold
        let mut cramped = venue();
        cramped.tier_count = 1000;
        let tiers: Vec<Tier> = TierProgression::from_venue(&cramped, 1.2).iter().collect();
        assert!(!tiers.is_empty());
        assert!((tiers.len() as u32) < cramped.tier_count);
        for tier in &tiers {
            assert!(tier.outer_radius < cramped.circus_radius);
        }
        // The next tier would not have fit
        let next = tiers.last().unwrap().index + 1;
        assert!(TierProgression::from_venue(&cramped, 1.2).tier(next).is_none());
    }

    #[test]
    fn test_respects_requested_count() {
        let mut small = venue();
        small.tier_count = 3;
        let tiers: Vec<Tier> = TierProgression::from_venue(&small, 1.2).iter().collect();
        assert_eq!(tiers.len(), 3);
    }

    #[test]
    fn test_no_room_at_all() {
        // Start inset pushes the first ring past the boundary
        let tiers: Vec<Tier> = TierProgression::from_venue(&venue(), 100.0).iter().collect();
        assert!(tiers.is_empty());
    }

    #[test]
    fn test_default_effective_radius_is_mid_ring() {
        let tier = TierProgression::from_venue(&venue(), 1.2).tier(0).unwrap();
        let mid = (tier.inner_radius + tier.outer_radius) / 2.0;
        assert!((tier.effective_radius - mid).abs() < 1e-12);
    }
}
