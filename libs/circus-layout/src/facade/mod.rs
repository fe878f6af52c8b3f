//! # Radial Layout Facade
//!
//! Orchestrates the interval algebra and the discrete placer across all
//! tiers. Each tier gathers its gap list (the fixed exits converted at that
//! tier's effective radius, plus any tier-specific cuts such as stairways),
//! asks `circus-arc` for the allowed arcs, and materializes them either as
//! continuous ring segments or as discrete item slots.

use crate::error::LayoutError;
use crate::placer::{place, Slot};
use crate::poles::{pole_slots, PoleSlot};
use crate::tier::{Tier, TierProgression};
use circus_arc::{allowed_from_gaps, Gap, GapWidth, Interval};
use config::constants::{self, VenueConfig};
use serde::{Deserialize, Serialize};

/// How each tier's allowed arcs are materialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RingFill {
    /// One continuous ring segment per allowed arc, no discretization.
    Segments,
    /// Evenly pitched discrete items per allowed arc.
    Items {
        /// Physical footprint of one item along the row.
        size: f64,
        /// Free space between adjacent items.
        spacing: f64,
        /// Radial inset from the ring's outer edge to the item row.
        outer_inset: f64,
        /// Lift above the ring surface.
        lift: f64,
    },
}

/// One annular sector of a gallery tier, directly consumable as a 2D outline
/// to be extruded by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingSegment {
    /// Tier the segment belongs to.
    pub tier: u32,
    /// Start angle of the sector.
    pub start_angle: f64,
    /// End angle of the sector.
    pub end_angle: f64,
    /// Inner radius of the sector.
    pub inner_radius: f64,
    /// Outer radius of the sector.
    pub outer_radius: f64,
    /// Height of the sector's underside.
    pub base_y: f64,
    /// Extrusion thickness.
    pub thickness: f64,
}

/// Everything the layout computed for one tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierLayout {
    /// The tier's geometry.
    pub tier: Tier,
    /// Arcs that survived gap subtraction, sorted ascending.
    pub allowed_arcs: Vec<Interval>,
    /// Ring segments (continuous mode only).
    pub segments: Vec<RingSegment>,
    /// Item slots (discrete mode only).
    pub slots: Vec<Slot>,
}

/// Runs the layout for every tier of a venue.
///
/// Tiers are laid out independently: each converts the fixed gaps plus its
/// own extra gaps at its effective radius, so no counters or angles are
/// shared across tiers. A tier fully excluded by gaps contributes an empty
/// layout rather than an error; a tier past the tent boundary is simply not
/// emitted.
///
/// # Arguments
///
/// * `venue` - Validated venue dimensions
/// * `fill` - Continuous segments or discrete items
/// * `start_inset` - Radial gap between the stage edge and the first ring
/// * `fixed_gaps` - Exits shared by every tier
/// * `extra_gaps` - Per-tier cuts (e.g. stairways), queried tier by tier
pub fn build_tiers<F>(
    venue: &VenueConfig,
    fill: RingFill,
    start_inset: f64,
    fixed_gaps: &[Gap],
    mut extra_gaps: F,
) -> Vec<TierLayout>
where
    F: FnMut(&Tier) -> Vec<Gap>,
{
    let progression = TierProgression::from_venue(venue, start_inset);
    let mut layouts = Vec::new();

    for tier in progression.iter() {
        let tier = match fill {
            RingFill::Segments => tier,
            RingFill::Items {
                size, outer_inset, ..
            } => tier.with_effective_radius(tier.outer_radius - outer_inset - size / 2.0),
        };

        let mut gaps = fixed_gaps.to_vec();
        gaps.extend(extra_gaps(&tier));
        let allowed_arcs = allowed_from_gaps(&gaps, tier.effective_radius);

        let mut layout = TierLayout {
            tier,
            allowed_arcs,
            segments: Vec::new(),
            slots: Vec::new(),
        };

        match fill {
            RingFill::Segments => {
                for arc in &layout.allowed_arcs {
                    layout.segments.push(RingSegment {
                        tier: tier.index,
                        start_angle: arc.start,
                        end_angle: arc.end,
                        inner_radius: tier.inner_radius,
                        outer_radius: tier.outer_radius,
                        base_y: tier.floor_y,
                        thickness: venue.ring_thickness,
                    });
                }
            }
            RingFill::Items {
                size,
                spacing,
                lift,
                ..
            } => {
                let y = tier.floor_y + venue.ring_thickness + lift;
                for arc in &layout.allowed_arcs {
                    for angle in place(*arc, tier.effective_radius, size + spacing) {
                        layout.slots.push(Slot {
                            tier: tier.index,
                            angle,
                            radius: tier.effective_radius,
                            y,
                            facing_center: true,
                        });
                    }
                }
            }
        }

        layouts.push(layout);
    }

    layouts
}

/// A full venue layout request. Defaults to the stock venue profile from the
/// `config` crate; deserialized requests may override any subset of fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VenuePlanRequest {
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
    /// Stage-to-first-ring inset for the gallery rings.
    pub ring_start_inset: f64,
    /// Stage-to-first-row inset for the seats.
    pub seat_start_inset: f64,
    /// Footprint of one seat.
    pub seat_size: f64,
    /// Free space between adjacent seats.
    pub seat_spacing: f64,
    /// Inset from a ring's outer edge to its seat row.
    pub seat_outer_inset: f64,
    /// Lift above the ring surface.
    pub seat_lift: f64,
    /// Number of perimeter poles.
    pub pole_count: u32,
    /// Inset from the boundary to the pole ring.
    pub pole_inset: f64,
    /// Exits shared by every tier and by the pole ring.
    pub fixed_gaps: Vec<Gap>,
    /// Stairway cuts applied to the seat rows of every tier.
    pub stairs: Vec<Gap>,
    /// Poles removed by index regardless of angle.
    pub excluded_poles: Vec<u32>,
}

impl Default for VenuePlanRequest {
    fn default() -> Self {
        Self {
            circus_radius: constants::CIRCUS_RADIUS,
            stage_radius: constants::STAGE_RADIUS,
            tier_count: constants::GALLERY_TIERS,
            ring_width: constants::GALLERY_RING_WIDTH,
            ring_gap: constants::GALLERY_RING_GAP,
            base_y: constants::GALLERY_BASE_Y,
            height_step: constants::GALLERY_HEIGHT_STEP,
            ring_thickness: constants::GALLERY_THICKNESS,
            ring_start_inset: constants::GALLERY_START_INSET,
            seat_start_inset: constants::SEAT_START_INSET,
            seat_size: constants::SEAT_SIZE,
            seat_spacing: constants::SEAT_SPACING,
            seat_outer_inset: constants::SEAT_OUTER_INSET,
            seat_lift: constants::SEAT_LIFT,
            pole_count: constants::POLE_COUNT,
            pole_inset: constants::POLE_INSET,
            fixed_gaps: vec![
                Gap::from_angle(
                    constants::ARTISTS_EXIT_CENTER,
                    constants::ARTISTS_EXIT_WIDTH,
                ),
                Gap::from_angle(constants::PUBLIC_EXIT_CENTER, constants::PUBLIC_EXIT_WIDTH),
            ],
            stairs: Vec::new(),
            excluded_poles: Vec::new(),
        }
    }
}

impl VenuePlanRequest {
    /// Validates the request. This is the only point where malformed input
    /// surfaces as an error; past it, the layout never faults.
    pub fn validate(&self) -> Result<(), LayoutError> {
        for (field, value) in [
            ("circus_radius", self.circus_radius),
            ("stage_radius", self.stage_radius),
            ("ring_width", self.ring_width),
            ("ring_gap", self.ring_gap),
            ("ring_thickness", self.ring_thickness),
            ("ring_start_inset", self.ring_start_inset),
            ("seat_start_inset", self.seat_start_inset),
            ("seat_size", self.seat_size),
            ("seat_spacing", self.seat_spacing),
            ("seat_outer_inset", self.seat_outer_inset),
            ("seat_lift", self.seat_lift),
            ("pole_inset", self.pole_inset),
        ] {
            if !value.is_finite() {
                return Err(LayoutError::not_finite(field));
            }
        }
        if self.seat_size <= 0.0 {
            return Err(LayoutError::non_positive("seat_size", self.seat_size));
        }
        // A NaN inside a gap would poison every interval comparison and
        // silently empty the layout, so gaps go through the same gate
        for gap in self.fixed_gaps.iter().chain(&self.stairs) {
            if !gap.center.is_finite() {
                return Err(LayoutError::not_finite("gap center"));
            }
            let width = match gap.width {
                GapWidth::Radians(radians) => radians,
                GapWidth::Meters(meters) => meters,
            };
            if !width.is_finite() {
                return Err(LayoutError::not_finite("gap width"));
            }
        }
        // Radius, tier count and ring width share the config crate's rules
        VenueConfig::new(
            self.circus_radius,
            self.stage_radius,
            self.tier_count,
            self.ring_width,
        )?;
        Ok(())
    }

    fn venue(&self) -> VenueConfig {
        VenueConfig {
            circus_radius: self.circus_radius,
            stage_radius: self.stage_radius,
            tier_count: self.tier_count,
            ring_width: self.ring_width,
            ring_gap: self.ring_gap,
            base_y: self.base_y,
            height_step: self.height_step,
            ring_thickness: self.ring_thickness,
        }
    }
}

/// Flat result lists for the whole venue, ready for the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueLayout {
    /// Gallery ring segments across all tiers.
    pub rings: Vec<RingSegment>,
    /// Seat slots across all tiers.
    pub seats: Vec<Slot>,
    /// Perimeter pole slots.
    pub poles: Vec<PoleSlot>,
}

/// Computes the complete venue layout: gallery rings, seats and perimeter
/// poles. This is the main entry point of the layout pipeline.
///
/// # Errors
///
/// Only validation failures; the computation itself degrades to empty lists
/// on degenerate input.
///
/// # Examples
///
/// ```rust
/// use circus_layout::{plan_venue, VenuePlanRequest};
///
/// let layout = plan_venue(&VenuePlanRequest::default()).unwrap();
/// assert!(layout.seats.len() > layout.rings.len());
/// ```
pub fn plan_venue(request: &VenuePlanRequest) -> Result<VenueLayout, LayoutError> {
    request.validate()?;
    let venue = request.venue();

    let rings = build_tiers(
        &venue,
        RingFill::Segments,
        request.ring_start_inset,
        &request.fixed_gaps,
        |_| Vec::new(),
    )
    .into_iter()
    .flat_map(|layout| layout.segments)
    .collect();

    let seats = build_tiers(
        &venue,
        RingFill::Items {
            size: request.seat_size,
            spacing: request.seat_spacing,
            outer_inset: request.seat_outer_inset,
            lift: request.seat_lift,
        },
        request.seat_start_inset,
        &request.fixed_gaps,
        |_| request.stairs.clone(),
    )
    .into_iter()
    .flat_map(|layout| layout.slots)
    .collect();

    let poles = pole_slots(
        request.pole_count,
        request.circus_radius,
        request.pole_inset,
        &request.excluded_poles,
        &request.fixed_gaps,
    );

    Ok(VenueLayout { rings, seats, poles })
}
