//! # Ring Parameters
//!
//! The raw parameter record supplied by the host and its normalized form.
//!
//! Raw parameters may be inconsistent (outer radius smaller than inner,
//! reversed sector, too few segments). [`RingParameters::normalize`] never
//! rejects them; it corrects them and reports what it changed through
//! [`Corrections`], so callers that want a strict API can observe the fix-up.

use config::constants::{
    DEFAULT_PERIMETER_SEGMENTS, DEFAULT_RADIUS_IN, DEFAULT_RADIUS_OUT, DEFAULT_RADIUS_SEGMENTS,
    DEFAULT_SECTOR_FROM, DEFAULT_SECTOR_TO, DEFAULT_USE_INNER, DEGENERATE_RADIUS,
    MIN_PERIMETER_SEGMENTS, MIN_RADIUS_SEGMENTS,
};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use tracing::debug;

/// Input parameters of a ring or sector disc.
///
/// Angles are in radians; the ring lies in the XY plane around the Z axis.
///
/// # Example
///
/// ```rust
/// use ring_mesh::RingParameters;
///
/// let params = RingParameters::default()
///     .with_radii(2.0, 1.0)
///     .with_segments(6, 1);
/// assert_eq!(params.seg_perimeter, 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingParameters {
    /// Outer radius
    pub radius_out: f64,
    /// Fill the ring between the radii; when false only the outer outline is produced
    pub use_inner: bool,
    /// Inner radius
    pub radius_in: f64,
    /// Subdivision of the perimeter
    pub seg_perimeter: u32,
    /// Subdivision of the radius
    pub seg_radius: u32,
    /// Sector start angle
    pub sector_from: f64,
    /// Sector end angle
    pub sector_to: f64,
}

impl Default for RingParameters {
    fn default() -> Self {
        Self {
            radius_out: DEFAULT_RADIUS_OUT,
            use_inner: DEFAULT_USE_INNER,
            radius_in: DEFAULT_RADIUS_IN,
            seg_perimeter: DEFAULT_PERIMETER_SEGMENTS,
            seg_radius: DEFAULT_RADIUS_SEGMENTS,
            sector_from: DEFAULT_SECTOR_FROM,
            sector_to: DEFAULT_SECTOR_TO,
        }
    }
}

impl RingParameters {
    /// Sets the outer and inner radius.
    pub fn with_radii(mut self, radius_out: f64, radius_in: f64) -> Self {
        self.radius_out = radius_out;
        self.radius_in = radius_in;
        self
    }

    /// Sets the perimeter and radial subdivision.
    pub fn with_segments(mut self, seg_perimeter: u32, seg_radius: u32) -> Self {
        self.seg_perimeter = seg_perimeter;
        self.seg_radius = seg_radius;
        self
    }

    /// Sets the angular sector.
    pub fn with_sector(mut self, sector_from: f64, sector_to: f64) -> Self {
        self.sector_from = sector_from;
        self.sector_to = sector_to;
        self
    }

    /// Enables or disables the inner radius.
    pub fn with_inner(mut self, use_inner: bool) -> Self {
        self.use_inner = use_inner;
        self
    }

    /// Corrects the parameters and derives the step sizes and loop counts.
    ///
    /// Subdivision counts are clamped before any step is divided by them.
    pub fn normalize(&self) -> NormalizedRing {
        let mut corrections = Corrections::default();

        let mut radius_out = self.radius_out.max(0.0);
        let mut radius_in = self.radius_in.max(0.0);
        if radius_out != self.radius_out || radius_in != self.radius_in {
            corrections.radii_clamped = true;
        }

        if radius_out < radius_in {
            std::mem::swap(&mut radius_out, &mut radius_in);
            corrections.radii_swapped = true;
        }

        let (mut sector_from, mut sector_to) = (self.sector_from, self.sector_to);
        if sector_from > sector_to {
            std::mem::swap(&mut sector_from, &mut sector_to);
            corrections.sectors_swapped = true;
        }

        let mut use_inner = self.use_inner;
        if use_inner && radius_out - radius_in < DEGENERATE_RADIUS {
            use_inner = false;
            corrections.inner_collapsed = true;
        }

        let seg_perimeter = self.seg_perimeter.max(MIN_PERIMETER_SEGMENTS);
        corrections.perimeter_clamped = seg_perimeter != self.seg_perimeter;
        let seg_radius = self.seg_radius.max(MIN_RADIUS_SEGMENTS);
        corrections.radius_clamped = seg_radius != self.seg_radius;

        let step_angle = (sector_to - sector_from) / f64::from(seg_perimeter);
        let step_radius = (radius_out - radius_in) / f64::from(seg_radius);

        // A true annulus needs a loop on the inner boundary; a disc gets its
        // centre from the cap vertex instead.
        let reaches_inner_boundary = radius_in > DEGENERATE_RADIUS;
        let loop_number = if reaches_inner_boundary {
            seg_radius + 1
        } else {
            seg_radius
        };

        let closed = sector_to - sector_from >= TAU;
        let seg_number = if closed {
            seg_perimeter
        } else {
            seg_perimeter + 1
        };

        if corrections.any() {
            debug!(?corrections, "Normalized ring parameters");
        }
        debug!(
            loop_number,
            seg_number, closed, use_inner, "Derived ring subdivision"
        );

        NormalizedRing {
            radius_out,
            use_inner,
            radius_in,
            seg_perimeter,
            seg_radius,
            sector_from,
            sector_to,
            step_angle,
            step_radius,
            loop_number,
            seg_number,
            closed,
            corrections,
        }
    }
}

/// Records which inputs [`RingParameters::normalize`] had to fix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Corrections {
    /// A negative radius was raised to zero
    pub radii_clamped: bool,
    /// Outer and inner radius were exchanged
    pub radii_swapped: bool,
    /// Sector start and end were exchanged
    pub sectors_swapped: bool,
    /// `use_inner` was turned off because the radii coincide
    pub inner_collapsed: bool,
    /// Perimeter subdivision was raised to the minimum
    pub perimeter_clamped: bool,
    /// Radial subdivision was raised to the minimum
    pub radius_clamped: bool,
}

impl Corrections {
    /// Returns true if any input was changed.
    pub fn any(&self) -> bool {
        self.radii_clamped
            || self.radii_swapped
            || self.sectors_swapped
            || self.inner_collapsed
            || self.perimeter_clamped
            || self.radius_clamped
    }
}

/// Parameters after normalization, with the derived subdivision.
///
/// Invariants: `radius_out >= radius_in >= 0`, `sector_from <= sector_to`,
/// `seg_perimeter >= 3`, `seg_radius >= 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedRing {
    /// Outer radius
    pub radius_out: f64,
    /// Whether the filled (loop bridging) path is used
    pub use_inner: bool,
    /// Inner radius
    pub radius_in: f64,
    /// Perimeter subdivision
    pub seg_perimeter: u32,
    /// Radial subdivision
    pub seg_radius: u32,
    /// Sector start angle
    pub sector_from: f64,
    /// Sector end angle
    pub sector_to: f64,
    /// Angle between neighbouring samples of a loop
    pub step_angle: f64,
    /// Radius difference between neighbouring loops
    pub step_radius: f64,
    /// Number of concentric loops on the filled path
    pub loop_number: u32,
    /// Number of samples per loop
    pub seg_number: u32,
    /// Whether the sector is a full turn and loops wrap around
    pub closed: bool,
    /// Inputs that were corrected
    pub corrections: Corrections,
}

impl NormalizedRing {
    /// Whether the innermost loop is fanned to a centre vertex.
    #[inline]
    pub fn has_center_cap(&self) -> bool {
        self.use_inner && self.loop_number == self.seg_radius
    }

    /// Radius of loop `r`, counted from the outside.
    #[inline]
    pub fn loop_radius(&self, r: u32) -> f64 {
        self.radius_out - f64::from(r) * self.step_radius
    }

    /// Number of vertices the generator will emit.
    pub fn vertex_count(&self) -> usize {
        let loops = if self.use_inner {
            self.loop_number as usize
        } else {
            1
        };
        loops * self.seg_number as usize + usize::from(self.has_center_cap())
    }

    /// Returns the corrected values as a plain parameter record.
    pub fn to_parameters(&self) -> RingParameters {
        RingParameters {
            radius_out: self.radius_out,
            use_inner: self.use_inner,
            radius_in: self.radius_in,
            seg_perimeter: self.seg_perimeter,
            seg_radius: self.seg_radius,
            sector_from: self.sector_from,
            sector_to: self.sector_to,
        }
    }
}
