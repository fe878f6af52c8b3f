//! # Layout Errors
//!
//! Error types for layout requests. These only surface at configuration
//! validation time; the layout computations themselves assume validated
//! numbers and degrade to empty output instead of failing.

use thiserror::Error;

/// Errors raised while validating a layout request.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Invalid venue dimensions, rejected by the config crate
    #[error("Invalid venue: {0}")]
    InvalidVenue(#[from] config::constants::ConfigError),

    /// A numeric field that must be positive is not
    #[error("{field} must be positive: {value}")]
    NonPositive { field: &'static str, value: f64 },

    /// A numeric field is NaN or infinite
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
}

impl LayoutError {
    /// Creates a non-positive field error.
    pub fn non_positive(field: &'static str, value: f64) -> Self {
        Self::NonPositive { field, value }
    }

    /// Creates a non-finite field error.
    pub fn not_finite(field: &'static str) -> Self {
        Self::NotFinite { field }
    }
}
