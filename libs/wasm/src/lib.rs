//! WASM-facing entry points for the circus layout pipeline.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests interact with the internal helper
//! `plan_venue_internal` to avoid depending on a JS host.
//!
//! ```
//! let layout = circus_wasm::plan_venue_internal("{}").unwrap();
//! assert!(!layout.seats.is_empty());
//! ```

use circus_layout::{LayoutError, VenueLayout, VenuePlanRequest};
use config::constants::EPSILON_RADIANS;
use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "circus-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the angular tolerance used by the layout pipeline. This is a thin
/// wrapper around a shared constant so the JS side can mirror comparisons.
///
/// # Examples
/// ```
/// let eps = circus_wasm::epsilon_radians();
/// assert!(eps > 0.0);
/// ```
#[wasm_bindgen]
pub fn epsilon_radians() -> f64 {
    EPSILON_RADIANS
}

/// Returns the stock venue request as JSON, ready to be edited field by
/// field on the JS side and sent back to [`plan_venue`].
///
/// # Examples
/// ```
/// let json = circus_wasm::default_venue_json();
/// assert!(json.contains("circus_radius"));
/// ```
#[wasm_bindgen]
pub fn default_venue_json() -> String {
    // The stock request always serializes
    serde_json::to_string_pretty(&VenuePlanRequest::default()).unwrap_or_default()
}

/// Computes a full venue layout from a JSON request and returns the result
/// lists (ring segments, seat slots, pole slots) as JSON.
///
/// This function is the primary entry point used from JavaScript. For Rust
/// tests, prefer [`plan_venue_internal`], which exposes Rust error types
/// directly.
///
/// # Errors
/// Returns a JavaScript error value containing a human-readable message when
/// the request is malformed or fails validation.
///
/// # Examples
/// ```no_run
/// // In JavaScript: const layout = JSON.parse(plan_venue("{}"));
/// ```
#[wasm_bindgen]
pub fn plan_venue(request_json: &str) -> Result<String, JsValue> {
    let layout =
        plan_venue_internal(request_json).map_err(|err| JsValue::from_str(&err.to_string()))?;
    serde_json::to_string(&layout).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Errors crossing the wasm boundary.
#[derive(Debug, Error)]
pub enum PlanError {
    /// The request JSON did not parse into a plan request
    #[error("Malformed request: {0}")]
    MalformedRequest(#[from] serde_json::Error),

    /// The request parsed but failed validation
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] LayoutError),
}

/// Host-only helper that parses a JSON request and computes the layout,
/// returning Rust error types.
///
/// # Examples
/// ```
/// let layout = circus_wasm::plan_venue_internal(r#"{ "tier_count": 2 }"#).unwrap();
/// assert!(!layout.rings.is_empty());
/// ```
pub fn plan_venue_internal(request_json: &str) -> Result<VenueLayout, PlanError> {
    let request: VenuePlanRequest = serde_json::from_str(request_json)?;
    let layout = circus_layout::plan_venue(&request)?;
    Ok(layout)
}

#[cfg(test)]
mod tests;
