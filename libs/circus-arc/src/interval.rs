//! # Angular Intervals
//!
//! The value type the interval algebra operates on.

use config::constants::EPSILON_RADIANS;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// A half-open angular interval `[start, end)` with `start < end`.
///
/// Both endpoints stay inside `[0, 2π]`; `end` may reach exactly `2π` for the
/// arc that closes the circle. Intervals crossing the 0/2π seam never exist
/// here: [`crate::Gap::to_intervals`] splits them before they reach the
/// algebra.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    /// Start angle in radians.
    pub start: f64,
    /// End angle in radians, greater than `start`.
    pub end: f64,
}

impl Interval {
    /// The whole circle as a single interval.
    pub const FULL_CIRCLE: Interval = Interval {
        start: 0.0,
        end: TAU,
    };

    /// Creates an interval from two ordered endpoints.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Angular length of the interval.
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Midpoint angle of the interval.
    pub fn midpoint(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    /// Whether the interval is too short to be a usable arc. Seams left over
    /// from subtraction fall below [`EPSILON_RADIANS`] and are dropped.
    pub fn is_degenerate(&self) -> bool {
        self.length() <= EPSILON_RADIANS
    }

    /// Endpoint-wise comparison within [`EPSILON_RADIANS`].
    pub fn approx_eq(&self, other: &Interval) -> bool {
        (self.start - other.start).abs() <= EPSILON_RADIANS
            && (self.end - other.end).abs() <= EPSILON_RADIANS
    }

    /// Whether a canonical angle falls inside the interval.
    pub fn contains(&self, angle: f64) -> bool {
        self.start <= angle && angle < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_circle_measure() {
        assert!((Interval::FULL_CIRCLE.length() - TAU).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_threshold() {
        assert!(Interval::new(1.0, 1.0 + EPSILON_RADIANS).is_degenerate());
        assert!(!Interval::new(1.0, 1.0 + 10.0 * EPSILON_RADIANS).is_degenerate());
    }

    #[test]
    fn test_approx_eq_within_epsilon() {
        let a = Interval::new(0.5, 1.5);
        let b = Interval::new(0.5 + EPSILON_RADIANS / 2.0, 1.5 - EPSILON_RADIANS / 2.0);
        let c = Interval::new(0.5 + 0.01, 1.5);
        assert!(a.approx_eq(&b));
        assert!(!a.approx_eq(&c));
    }

    #[test]
    fn test_contains_is_half_open() {
        let arc = Interval::new(1.0, 2.0);
        assert!(arc.contains(1.0));
        assert!(arc.contains(1.999));
        assert!(!arc.contains(2.0));
        assert!(!arc.contains(0.5));
    }
}
