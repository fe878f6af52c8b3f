//! # Gap Conversion
//!
//! Turns a named exclusion (exit, stairway, doorway) into canonical angular
//! intervals. A gap is specified around a center angle, either directly by an
//! angular width or by a physical arc length that becomes an angle at a given
//! radius.

use crate::angle::normalize;
use crate::interval::Interval;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// How wide a gap is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapWidth {
    /// Angular width in radians, independent of radius.
    Radians(f64),
    /// Physical arc length in meters, converted per radius.
    Meters(f64),
}

/// An excluded angular sector of the circle.
///
/// # Examples
///
/// ```rust
/// use circus_arc::Gap;
/// use std::f64::consts::PI;
///
/// // A 60° exit opening at the back of the tent
/// let exit = Gap::from_angle(-PI / 2.0, PI / 3.0);
/// // A 1.2 m wide stairway, however many radians that is at the tier radius
/// let stair = Gap::from_arc_length(PI / 4.0, 1.2);
/// assert!(stair.angular_width(12.0) < exit.angular_width(12.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gap {
    /// Center angle of the opening, any real angle.
    pub center: f64,
    /// Total width of the opening.
    pub width: GapWidth,
}

impl Gap {
    /// Gap from a center angle and a total angular width.
    pub fn from_angle(center: f64, radians: f64) -> Self {
        Self {
            center,
            width: GapWidth::Radians(radians),
        }
    }

    /// Gap from a center angle and a physical arc length in meters.
    pub fn from_arc_length(center: f64, meters: f64) -> Self {
        Self {
            center,
            width: GapWidth::Meters(meters),
        }
    }

    /// Angular width of the gap at the given radius.
    ///
    /// Degenerate inputs never fault: a non-positive radius (or width) makes
    /// the gap a no-op of width zero.
    pub fn angular_width(&self, radius: f64) -> f64 {
        let width = match self.width {
            GapWidth::Radians(radians) => radians,
            GapWidth::Meters(meters) => {
                if radius <= 0.0 {
                    0.0
                } else {
                    meters / radius
                }
            }
        };
        width.max(0.0)
    }

    /// Converts the gap into canonical intervals inside `[0, 2π]`.
    ///
    /// Returns an empty list for a zero-width gap, the full circle for a gap
    /// at least one turn wide, and otherwise one interval - or two when the
    /// gap straddles angle 0. The split is mandatory: downstream algebra
    /// assumes no interval ever needs further wraparound handling.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use circus_arc::Gap;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// // A gap centered on the seam splits in two
    /// let parts = Gap::from_angle(0.0, FRAC_PI_2).to_intervals(1.0);
    /// assert_eq!(parts.len(), 2);
    /// let total: f64 = parts.iter().map(|p| p.length()).sum();
    /// assert!((total - FRAC_PI_2).abs() < 1e-12);
    /// ```
    pub fn to_intervals(&self, radius: f64) -> Vec<Interval> {
        let width = self.angular_width(radius);
        if width <= 0.0 {
            return Vec::new();
        }
        if width >= TAU {
            // Wider than the circle: excludes everything
            return vec![Interval::FULL_CIRCLE];
        }

        let half = width / 2.0;
        let start = normalize(self.center - half);
        let end = normalize(self.center + half);

        if start <= end {
            vec![Interval::new(start, end)]
        } else {
            vec![Interval::new(0.0, end), Interval::new(start, TAU)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_plain_gap_single_interval() {
        let parts = Gap::from_angle(PI, FRAC_PI_2).to_intervals(1.0);
        assert_eq!(parts.len(), 1);
        assert!((parts[0].start - (PI - FRAC_PI_2 / 2.0)).abs() < 1e-12);
        assert!((parts[0].end - (PI + FRAC_PI_2 / 2.0)).abs() < 1e-12);
    }

    #[test]
    fn test_seam_gap_splits_in_two() {
        let parts = Gap::from_angle(0.0, FRAC_PI_2).to_intervals(1.0);
        assert_eq!(parts.len(), 2);
        // One piece starts at 0, the other ends at 2π
        assert_eq!(parts[0].start, 0.0);
        assert_eq!(parts[1].end, TAU);
        let total: f64 = parts.iter().map(|p| p.length()).sum();
        assert!((total - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_negative_center_is_canonicalized() {
        let parts = Gap::from_angle(-FRAC_PI_2, PI / 9.0).to_intervals(1.0);
        assert_eq!(parts.len(), 1);
        assert!(parts[0].start >= 0.0);
        assert!(parts[0].end <= TAU);
    }

    #[test]
    fn test_arc_length_scales_with_radius() {
        let stair = Gap::from_arc_length(1.0, 2.0);
        assert!((stair.angular_width(4.0) - 0.5).abs() < 1e-12);
        assert!((stair.angular_width(8.0) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_non_positive_radius_is_noop() {
        let stair = Gap::from_arc_length(1.0, 2.0);
        assert_eq!(stair.angular_width(0.0), 0.0);
        assert_eq!(stair.angular_width(-3.0), 0.0);
        assert!(stair.to_intervals(0.0).is_empty());
    }

    #[test]
    fn test_full_turn_gap_covers_circle() {
        let parts = Gap::from_angle(1.0, TAU + 0.5).to_intervals(1.0);
        assert_eq!(parts.len(), 1);
        assert!(parts[0].approx_eq(&Interval::FULL_CIRCLE));
    }

    #[test]
    fn test_negative_width_is_noop() {
        assert!(Gap::from_angle(1.0, -0.5).to_intervals(1.0).is_empty());
    }
}
