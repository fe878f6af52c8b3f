//! # Perimeter Poles
//!
//! Uniform radial distribution around the tent perimeter, with poles dropped
//! where an exit or other exclusion zone needs clearance. The inverse of the
//! seating problem: instead of filling allowed arcs, a fixed distribution is
//! thinned by the gaps.

use circus_arc::{circular_distance, Gap};
use config::constants::EPSILON_RADIANS;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, TAU};

/// One perimeter pole position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoleSlot {
    /// Index in the uniform distribution, kept stable across exclusions so
    /// a pole keeps its identity when its neighbors disappear.
    pub index: u32,
    /// Canonical placement angle.
    pub angle: f64,
    /// Radius of the pole ring.
    pub radius: f64,
}

impl PoleSlot {
    /// World-space position of the pole's base.
    pub fn position(&self) -> DVec3 {
        DVec3::new(
            self.angle.cos() * self.radius,
            0.0,
            self.angle.sin() * self.radius,
        )
    }

    /// Yaw rotation that turns the pole toward the center (yaw 0 faces -Z).
    pub fn facing_yaw(&self) -> f64 {
        FRAC_PI_2 - self.angle
    }
}

/// Distributes `count` poles uniformly around the circle, skipping excluded
/// indices and poles whose angle falls inside an exclusion zone.
///
/// A pole at angle `a` is blocked by a gap when the circular distance from
/// `a` to the gap's center is at most half the gap's width, measured at the
/// pole ring's radius.
///
/// # Examples
///
/// ```rust
/// use circus_layout::pole_slots;
/// use circus_arc::Gap;
/// use std::f64::consts::PI;
///
/// let all = pole_slots(12, 17.0, 0.35, &[], &[]);
/// assert_eq!(all.len(), 12);
///
/// // A 60° clearance removes the poles in front of the exit
/// let cleared = pole_slots(12, 17.0, 0.35, &[], &[Gap::from_angle(0.0, PI / 3.0)]);
/// assert!(cleared.len() < all.len());
/// ```
pub fn pole_slots(
    count: u32,
    circus_radius: f64,
    inset: f64,
    excluded_indices: &[u32],
    exclusions: &[Gap],
) -> Vec<PoleSlot> {
    let radius = (circus_radius - inset).max(0.0);
    let mut slots = Vec::with_capacity(count as usize);

    for index in 0..count {
        if excluded_indices.contains(&index) {
            continue;
        }
        let angle = f64::from(index) / f64::from(count) * TAU;
        // A pole exactly on a gap edge must not survive by a rounding ulp
        let blocked = exclusions.iter().any(|gap| {
            circular_distance(angle, gap.center) <= gap.angular_width(radius) / 2.0 + EPSILON_RADIANS
        });
        if blocked {
            continue;
        }
        slots.push(PoleSlot {
            index,
            angle,
            radius,
        });
    }

    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::constants::EPSILON_RADIANS;
    use std::f64::consts::PI;

    #[test]
    fn test_uniform_distribution_without_exclusions() {
        let slots = pole_slots(36, 17.0, 0.35, &[], &[]);
        assert_eq!(slots.len(), 36);
        let pitch = TAU / 36.0;
        for pair in slots.windows(2) {
            assert!(((pair[1].angle - pair[0].angle) - pitch).abs() < 1e-12);
        }
        assert!((slots[0].radius - (17.0 - 0.35)).abs() < 1e-12);
    }

    #[test]
    fn test_index_exclusion() {
        let slots = pole_slots(10, 17.0, 0.35, &[0, 5], &[]);
        assert_eq!(slots.len(), 8);
        assert!(slots.iter().all(|slot| slot.index != 0 && slot.index != 5));
    }

    #[test]
    fn test_angular_exclusion_removes_exactly_the_covered_poles() {
        let count = 36;
        let width = PI / 3.0;
        let gap = Gap::from_angle(0.0, width);
        let slots = pole_slots(count, 17.0, 0.35, &[], &[gap]);

        for index in 0..count {
            let angle = f64::from(index) / f64::from(count) * TAU;
            let inside = circular_distance(angle, 0.0) <= width / 2.0 + EPSILON_RADIANS;
            let kept = slots.iter().any(|slot| slot.index == index);
            assert_eq!(kept, !inside, "pole {index} at angle {angle}");
        }
    }

    #[test]
    fn test_pole_on_gap_edge_is_dropped() {
        // With 36 poles and a 60° clearance at angle 0, poles 3 and 33 sit
        // exactly on the gap edges (circular distance π/6 up to rounding).
        // Edge poles count as covered regardless of which way the last ulp
        // falls.
        let slots = pole_slots(36, 17.0, 0.35, &[], &[Gap::from_angle(0.0, PI / 3.0)]);
        assert!(slots.iter().all(|slot| slot.index != 3));
        assert!(slots.iter().all(|slot| slot.index != 33));
        // The next poles out survive
        assert!(slots.iter().any(|slot| slot.index == 4));
        assert!(slots.iter().any(|slot| slot.index == 32));
    }

    #[test]
    fn test_arc_length_exclusion_uses_pole_radius() {
        // 4 m of clearance at the pole ring, not at the boundary
        let gap = Gap::from_arc_length(PI, 4.0);
        let slots = pole_slots(36, 17.0, 0.35, &[], &[gap]);
        assert!(slots.len() < 36);
        for slot in &slots {
            assert!(circular_distance(slot.angle, PI) > gap.angular_width(slot.radius) / 2.0);
        }
    }

    #[test]
    fn test_zero_count_is_empty() {
        assert!(pole_slots(0, 17.0, 0.35, &[], &[]).is_empty());
    }

    #[test]
    fn test_slot_faces_center() {
        let slots = pole_slots(4, 10.0, 0.0, &[], &[]);
        let east = &slots[0];
        assert_eq!(east.angle, 0.0);
        let p = east.position();
        assert!((p.x - 10.0).abs() < 1e-9);
        assert!(p.z.abs() < 1e-9);
        assert!((east.facing_yaw() - FRAC_PI_2).abs() < 1e-9);
    }
}
