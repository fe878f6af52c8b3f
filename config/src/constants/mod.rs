//! Centralized configuration values shared across the circus layout pipeline.
//!
//! Each public item in this module documents its purpose so that downstream
//! crates can remain declarative and avoid scattering literals. All lengths
//! are meters, all angles radians.

use std::f64::consts::PI;
use std::fmt;

/// Angular tolerance used by the interval algebra.
///
/// Intervals shorter than this are seams left over from subtraction, not
/// usable arcs, and are dropped.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_RADIANS;
/// assert!(EPSILON_RADIANS < 1.0e-3);
/// ```
pub const EPSILON_RADIANS: f64 = 1.0e-4;

/// Radius of the enclosing circus circle (34 m diameter tent).
///
/// # Examples
/// ```
/// use config::constants::CIRCUS_RADIUS;
/// assert!(CIRCUS_RADIUS > 0.0);
/// ```
pub const CIRCUS_RADIUS: f64 = 17.0;

/// Radius of the central stage.
pub const STAGE_RADIUS: f64 = 7.0;

/// Number of concentric gallery tiers requested by default. The layout may
/// emit fewer when the outermost rings would breach [`CIRCUS_RADIUS`].
pub const GALLERY_TIERS: u32 = 8;

/// Radial width of one gallery ring.
pub const GALLERY_RING_WIDTH: f64 = 1.6;

/// Radial spacing between consecutive gallery rings.
pub const GALLERY_RING_GAP: f64 = 0.01;

/// Height of the lowest gallery tier above the ground plane.
pub const GALLERY_BASE_Y: f64 = 0.20;

/// Height gained per tier moving outward.
pub const GALLERY_HEIGHT_STEP: f64 = 0.6;

/// Vertical thickness of each extruded gallery ring.
pub const GALLERY_THICKNESS: f64 = 0.55;

/// Radial inset from the stage edge to the innermost gallery ring.
pub const GALLERY_START_INSET: f64 = 1.2;

/// Radial inset from the stage edge to the innermost seat row. Seats sit a
/// little further out than the ring they stand on.
pub const SEAT_START_INSET: f64 = 1.5;

/// Footprint of one seat (square base).
pub const SEAT_SIZE: f64 = 0.5;

/// Free space between adjacent seats along the row.
pub const SEAT_SPACING: f64 = 0.08;

/// Radial inset from a ring's outer edge to its seat row.
pub const SEAT_OUTER_INSET: f64 = 0.15;

/// Small lift so seats rest on top of the ring surface rather than z-fight
/// with it.
pub const SEAT_LIFT: f64 = 0.02;

/// Number of perimeter poles distributed around the tent.
pub const POLE_COUNT: u32 = 36;

/// Radial inset from the circus boundary to the pole ring.
pub const POLE_INSET: f64 = 0.35;

/// Center angle of the artists' exit. The performers enter facing -Z.
pub const ARTISTS_EXIT_CENTER: f64 = -PI / 2.0;

/// Total angular opening of the artists' exit.
pub const ARTISTS_EXIT_WIDTH: f64 = PI / 3.0;

/// Center angle of the public exit, directly opposite the artists' exit.
pub const PUBLIC_EXIT_CENTER: f64 = PI / 2.0;

/// Total angular opening of the public exit.
pub const PUBLIC_EXIT_WIDTH: f64 = PI / 9.0;

/// Immutable snapshot of the venue dimensions that can be shared between
/// crates. Layout computations take a snapshot by value so that callers can
/// never mutate a configuration mid-computation.
///
/// # Examples
/// ```
/// use config::constants::VenueConfig;
/// let venue = VenueConfig::default();
/// assert!(venue.stage_radius < venue.circus_radius);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VenueConfig {
    /// Radius of the enclosing circle.
    pub circus_radius: f64,
    /// Radius of the central stage.
    pub stage_radius: f64,
    /// Requested number of gallery tiers.
    pub tier_count: u32,
    /// Radial width of one ring.
    pub ring_width: f64,
    /// Radial spacing between rings.
    pub ring_gap: f64,
    /// Height of the lowest tier.
    pub base_y: f64,
    /// Height gained per tier.
    pub height_step: f64,
    /// Vertical thickness of one ring.
    pub ring_thickness: f64,
}

impl VenueConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// dimensions. This is the only place malformed input surfaces as an
    /// error; the layout functions themselves assume validated numbers.
    ///
    /// # Examples
    /// ```
    /// use config::constants::VenueConfig;
    /// let venue = VenueConfig::new(17.0, 7.0, 8, 1.6).expect("valid venue");
    /// assert_eq!(venue.tier_count, 8);
    /// ```
    pub fn new(
        circus_radius: f64,
        stage_radius: f64,
        tier_count: u32,
        ring_width: f64,
    ) -> Result<Self, ConfigError> {
        if circus_radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(circus_radius));
        }
        if stage_radius <= 0.0 || stage_radius >= circus_radius {
            return Err(ConfigError::InvalidStageRadius(stage_radius));
        }
        if tier_count == 0 {
            return Err(ConfigError::InvalidTierCount(tier_count));
        }
        if ring_width <= 0.0 {
            return Err(ConfigError::InvalidRingWidth(ring_width));
        }
        Ok(Self {
            circus_radius,
            stage_radius,
            tier_count,
            ring_width,
            ..Self::default()
        })
    }
}

impl Default for VenueConfig {
    fn default() -> Self {
        Self {
            circus_radius: CIRCUS_RADIUS,
            stage_radius: STAGE_RADIUS,
            tier_count: GALLERY_TIERS,
            ring_width: GALLERY_RING_WIDTH,
            ring_gap: GALLERY_RING_GAP,
            base_y: GALLERY_BASE_Y,
            height_step: GALLERY_HEIGHT_STEP,
            ring_thickness: GALLERY_THICKNESS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the circus radius is zero or negative.
    InvalidRadius(f64),
    /// Raised when the stage radius is non-positive or would swallow the
    /// whole venue.
    InvalidStageRadius(f64),
    /// Raised when zero tiers are requested.
    InvalidTierCount(u32),
    /// Raised when the ring width is zero or negative.
    InvalidRingWidth(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRadius(value) => {
                write!(f, "circus_radius must be positive: {value}")
            }
            ConfigError::InvalidStageRadius(value) => {
                write!(f, "stage_radius must be positive and smaller than circus_radius: {value}")
            }
            ConfigError::InvalidTierCount(value) => {
                write!(f, "tier_count must be >= 1: {value}")
            }
            ConfigError::InvalidRingWidth(value) => {
                write!(f, "ring_width must be positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
