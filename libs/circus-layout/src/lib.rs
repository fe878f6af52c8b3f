//! # Circus Layout
//!
//! Radial placement engine for the circus venue. Converts a validated venue
//! configuration into flat lists of descriptors the rendering layer consumes
//! blindly: annular ring segments for the gallery tiers, seat slots facing
//! the stage, and perimeter pole positions.
//!
//! ## Architecture
//!
//! ```text
//! VenuePlanRequest → circus-arc (allowed arcs per tier) → descriptors
//! ```
//!
//! Every operation is a pure function over its inputs; nothing here mutates
//! shared state, performs I/O, or errors mid-computation. Degenerate inputs
//! (a fully excluded tier, an arc shorter than one seat, a tier past the tent
//! boundary) degrade to "emit nothing".
//!
//! ## Usage
//!
//! ```rust
//! use circus_layout::{plan_venue, VenuePlanRequest};
//!
//! let layout = plan_venue(&VenuePlanRequest::default()).unwrap();
//! assert!(!layout.rings.is_empty());
//! assert!(!layout.seats.is_empty());
//! ```

pub mod error;
pub mod facade;
pub mod placer;
pub mod poles;
pub mod tier;

pub use error::LayoutError;
pub use facade::{
    build_tiers, plan_venue, RingFill, RingSegment, TierLayout, VenueLayout, VenuePlanRequest,
};
pub use placer::{place, Slot};
pub use poles::{pole_slots, PoleSlot};
pub use tier::{Tier, TierProgression};
