//! # Config Crate
//!
//! Centralized configuration constants for the circus layout pipeline.
//! All magic numbers and tunable venue dimensions are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON_RADIANS, CIRCUS_RADIUS, STAGE_RADIUS};
//!
//! // Use EPSILON_RADIANS for angular comparisons
//! let arc_length: f64 = 0.00005; // shorter than a usable arc
//! assert!(arc_length < EPSILON_RADIANS);
//!
//! // The stage always fits inside the enclosing circle
//! assert!(STAGE_RADIUS < CIRCUS_RADIUS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Meters Everywhere**: One scene unit equals one meter
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
