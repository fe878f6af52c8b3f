//! # Discrete Placer
//!
//! Fits whole items (seats) into an allowed arc at a fixed physical pitch,
//! centering the row so no item sits flush against either cut edge.

use circus_arc::Interval;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

/// Computes centered item angles within one allowed arc.
///
/// The pitch is physical (item size plus spacing, in meters); the arc is
/// measured at `radius` to decide how many whole items fit. Half of the
/// leftover length pads each end of the arc, never biased to one side.
///
/// # Arguments
///
/// * `arc` - One allowed arc, already free of wraparound
/// * `radius` - Radius of the row the items stand on
/// * `pitch_meters` - Physical footprint of one item including spacing
///
/// # Returns
///
/// One angle per placed item, empty when nothing fits. Non-positive radius
/// or pitch yields no items; this function never faults.
///
/// # Examples
///
/// ```rust
/// use circus_layout::place;
/// use circus_arc::Interval;
/// use std::f64::consts::PI;
///
/// // Exactly five pitches fit: no padding, symmetric about the midpoint
/// let angles = place(Interval::new(0.0, PI), 10.0, PI * 10.0 / 5.0);
/// assert_eq!(angles.len(), 5);
/// assert!((angles[0] + angles[4] - PI).abs() < 1e-9);
/// ```
pub fn place(arc: Interval, radius: f64, pitch_meters: f64) -> Vec<f64> {
    if radius <= 0.0 || pitch_meters <= 0.0 {
        return Vec::new();
    }

    let arc_length = arc.length() * radius;
    // Tolerance keeps an exact fit from rounding one ulp short of a whole item
    let count = (arc_length / pitch_meters + 1e-9).floor();
    if count < 1.0 {
        return Vec::new();
    }

    let used = count * pitch_meters;
    let pad = (arc_length - used) / 2.0;

    (0..count as u32)
        .map(|i| {
            let offset = pad + f64::from(i) * pitch_meters + pitch_meters / 2.0;
            arc.start + offset / radius
        })
        .collect()
}

/// One placed item, consumable by the renderer as a single transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    /// Tier the item stands on.
    pub tier: u32,
    /// Canonical placement angle.
    pub angle: f64,
    /// Radius of the row.
    pub radius: f64,
    /// Height of the item's base.
    pub y: f64,
    /// The item's forward axis points from its position toward the circle's
    /// center. Always true for seats; a pure function of the angle, carried
    /// for the renderer's benefit.
    pub facing_center: bool,
}

impl Slot {
    /// World-space position of the slot.
    pub fn position(&self) -> DVec3 {
        DVec3::new(
            self.angle.cos() * self.radius,
            self.y,
            self.angle.sin() * self.radius,
        )
    }

    /// Yaw rotation that turns the item toward the center (yaw 0 faces -Z).
    pub fn facing_yaw(&self) -> f64 {
        FRAC_PI_2 - self.angle
    }
}
