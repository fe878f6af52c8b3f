//! # Angle Math
//!
//! Scalar helpers for angles on the unit circle.

use std::f64::consts::TAU;

/// Reduces an angle into the canonical range `[0, 2π)`.
///
/// The native `%` operator keeps the sign of its left operand, so negative
/// inputs get one extra turn added back.
///
/// # Examples
///
/// ```rust
/// use circus_arc::angle::normalize;
/// use std::f64::consts::{PI, TAU};
///
/// assert_eq!(normalize(-PI / 2.0), 1.5 * PI);
/// assert_eq!(normalize(TAU + 0.25), 0.25);
/// // Idempotent
/// assert_eq!(normalize(normalize(-7.0)), normalize(-7.0));
/// ```
pub fn normalize(angle: f64) -> f64 {
    let reduced = angle % TAU;
    if reduced < 0.0 {
        reduced + TAU
    } else {
        reduced
    }
}

/// Minimal distance between two angles measured around the circle.
///
/// Always in `[0, π]`; the operands do not need to be canonical.
///
/// # Examples
///
/// ```rust
/// use circus_arc::angle::circular_distance;
/// use std::f64::consts::PI;
///
/// // 350° and 10° are 20° apart, not 340°
/// let d = circular_distance(-10.0_f64.to_radians(), 10.0_f64.to_radians());
/// assert!((d - 20.0_f64.to_radians()).abs() < 1e-12);
/// assert!(circular_distance(0.0, PI) <= PI);
/// ```
pub fn circular_distance(a: f64, b: f64) -> f64 {
    let d = (normalize(a) - normalize(b)).abs();
    d.min(TAU - d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_normalize_positive_passthrough() {
        assert_eq!(normalize(1.0), 1.0);
        assert_eq!(normalize(0.0), 0.0);
    }

    #[test]
    fn test_normalize_negative() {
        assert!((normalize(-FRAC_PI_2) - 1.5 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_full_turn() {
        assert!(normalize(TAU) < 1e-12);
        assert!((normalize(3.0 * TAU + 0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_idempotent() {
        for raw in [-12.3, -TAU, -0.1, 0.0, 0.1, TAU, 25.0] {
            let once = normalize(raw);
            assert_eq!(normalize(once), once);
            assert!((0.0..TAU).contains(&once));
        }
    }

    #[test]
    fn test_circular_distance_symmetric() {
        let d1 = circular_distance(0.1, 5.9);
        let d2 = circular_distance(5.9, 0.1);
        assert!((d1 - d2).abs() < 1e-12);
    }

    #[test]
    fn test_circular_distance_wraps_seam() {
        // 0.1 rad and TAU - 0.1 rad are 0.2 rad apart across the seam
        let d = circular_distance(0.1, TAU - 0.1);
        assert!((d - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_circular_distance_never_exceeds_pi() {
        for a in 0..16 {
            for b in 0..16 {
                let d = circular_distance(a as f64 * 0.4, b as f64 * 0.4);
                assert!((0.0..=PI + 1e-12).contains(&d));
            }
        }
    }
}
