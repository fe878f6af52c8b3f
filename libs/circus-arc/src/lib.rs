//! # Circus Arc
//!
//! Angular-interval algebra over the unit circle for the circus layout
//! pipeline. Takes the full circle, carves out named gaps (exits, stairways,
//! doorways), and reports the surviving arcs in canonical form.
//!
//! ## Architecture
//!
//! ```text
//! Gap (center + width) → canonical Intervals → allowed arcs
//! ```
//!
//! Gaps may be given directly as an angular width or as a physical arc length
//! at a radius. A gap straddling the 0/2π seam is split into two intervals at
//! conversion time, so the algebra itself never needs wraparound handling.
//!
//! ## Usage
//!
//! ```rust
//! use circus_arc::{allowed_from_gaps, Gap};
//! use std::f64::consts::{PI, TAU};
//!
//! let exits = [Gap::from_angle(PI / 2.0, PI / 3.0)];
//! let arcs = allowed_from_gaps(&exits, 10.0);
//! let total: f64 = arcs.iter().map(|arc| arc.length()).sum();
//! assert!((total - (TAU - PI / 3.0)).abs() < 1e-9);
//! ```

pub mod algebra;
pub mod angle;
pub mod gap;
pub mod interval;

pub use algebra::{allowed_from_gaps, subtract};
pub use angle::{circular_distance, normalize};
pub use gap::{Gap, GapWidth};
pub use interval::Interval;
