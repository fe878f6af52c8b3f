//! # Interval Set Algebra
//!
//! Repeated subtraction of gap intervals from the full circle. Every input
//! interval is already canonical (see [`Gap::to_intervals`]), so the algebra
//! is plain one-dimensional set difference with no wraparound cases.

use crate::gap::Gap;
use crate::interval::Interval;

/// Subtracts one gap interval from a set of allowed arcs.
///
/// Arcs untouched by the gap pass through unchanged. An arc overlapping the
/// gap leaves a left remainder, a right remainder, both, or nothing when it
/// sits fully inside the gap.
///
/// # Examples
///
/// ```rust
/// use circus_arc::{subtract, Interval};
///
/// let remaining = subtract(&[Interval::new(0.0, 3.0)], Interval::new(1.0, 2.0));
/// assert_eq!(remaining, vec![Interval::new(0.0, 1.0), Interval::new(2.0, 3.0)]);
/// ```
pub fn subtract(allowed: &[Interval], gap: Interval) -> Vec<Interval> {
    let mut out = Vec::with_capacity(allowed.len() + 1);
    for arc in allowed {
        // No overlap
        if gap.end <= arc.start || gap.start >= arc.end {
            out.push(*arc);
            continue;
        }
        if gap.start > arc.start {
            out.push(Interval::new(arc.start, gap.start));
        }
        if gap.end < arc.end {
            out.push(Interval::new(gap.end, arc.end));
        }
    }
    out
}

/// Computes the allowed arcs of the circle after removing every gap.
///
/// Gaps are converted at `radius` and folded in input order; the result does
/// not depend on that order, but no canonicalization of the gap list is
/// assumed. Once the allowed set empties, remaining gaps are skipped since
/// subtraction cannot un-exclude anything. Seam-thin leftovers are filtered
/// out and the surviving arcs are returned sorted ascending by start.
///
/// # Arguments
///
/// * `gaps` - Exclusions in any order, centers not necessarily canonical
/// * `radius` - Radius used to convert arc-length gap widths to angles
///
/// # Examples
///
/// ```rust
/// use circus_arc::{allowed_from_gaps, Interval};
/// use std::f64::consts::TAU;
///
/// // No gaps: the full circle survives
/// let arcs = allowed_from_gaps(&[], 10.0);
/// assert_eq!(arcs, vec![Interval::FULL_CIRCLE]);
/// ```
pub fn allowed_from_gaps(gaps: &[Gap], radius: f64) -> Vec<Interval> {
    let mut allowed = vec![Interval::FULL_CIRCLE];

    'gaps: for gap in gaps {
        for piece in gap.to_intervals(radius) {
            allowed = subtract(&allowed, piece);
            if allowed.is_empty() {
                break 'gaps;
            }
        }
    }

    let mut arcs: Vec<Interval> = allowed
        .into_iter()
        .filter(|arc| !arc.is_degenerate())
        .collect();
    arcs.sort_by(|a, b| a.start.total_cmp(&b.start));
    arcs
}
