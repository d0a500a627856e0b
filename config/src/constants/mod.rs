//! # Configuration Constants
//!
//! Centralized constants for the ring generator. Precision values,
//! subdivision floors, parameter defaults and shading thresholds are
//! defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Limits**: Minimum subdivision counts
//! - **Defaults**: Initial values of a freshly added ring
//! - **Shading**: Angle threshold forwarded to the host's smoothing

use std::f64::consts::{PI, TAU};
use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
/// assert!(EPSILON < 1.0e-6);
/// ```
pub const EPSILON: f64 = 1e-10;

/// Radius tolerance of the ring generator.
///
/// Two radii closer than this are treated as equal (the annulus collapses to
/// an outline), and an inner radius at or below it is treated as the centre.
///
/// # Examples
/// ```
/// use config::constants::DEGENERATE_RADIUS;
/// assert_eq!(DEGENERATE_RADIUS, 0.0001);
/// ```
pub const DEGENERATE_RADIUS: f64 = 0.0001;

/// Smallest face area accepted by mesh validation.
///
/// # Examples
/// ```
/// use config::constants::AREA_EPSILON;
/// assert!(AREA_EPSILON > 0.0);
/// ```
pub const AREA_EPSILON: f64 = 1e-12;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Minimum number of perimeter segments.
///
/// Three samples is the smallest closed polygon.
pub const MIN_PERIMETER_SEGMENTS: u32 = 3;

/// Minimum number of radial segments.
///
/// Guards the radial step division.
pub const MIN_RADIUS_SEGMENTS: u32 = 1;

// =============================================================================
// DEFAULT PARAMETERS
// =============================================================================

/// Default outer radius.
pub const DEFAULT_RADIUS_OUT: f64 = 1.0;

/// Whether a new ring uses its inner radius (filled surface) by default.
pub const DEFAULT_USE_INNER: bool = true;

/// Default inner radius. Zero produces a filled disc.
pub const DEFAULT_RADIUS_IN: f64 = 0.0;

/// Default perimeter subdivision.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_PERIMETER_SEGMENTS, MIN_PERIMETER_SEGMENTS};
/// assert!(DEFAULT_PERIMETER_SEGMENTS >= MIN_PERIMETER_SEGMENTS);
/// ```
pub const DEFAULT_PERIMETER_SEGMENTS: u32 = 24;

/// Default radial subdivision.
pub const DEFAULT_RADIUS_SEGMENTS: u32 = 1;

/// Default sector start angle (radians).
pub const DEFAULT_SECTOR_FROM: f64 = 0.0;

/// Default sector end angle (radians). A full turn.
pub const DEFAULT_SECTOR_TO: f64 = TAU;

/// Whether smooth shading is requested by default.
pub const DEFAULT_SMOOTHED: bool = true;

// =============================================================================
// SHADING CONSTANTS
// =============================================================================

/// Angle threshold (radians) for auto smoothing, roughly 50 degrees.
///
/// Faces meeting at a sharper angle than this keep a hard edge.
///
/// # Examples
/// ```
/// use config::constants::AUTO_SMOOTH_ANGLE;
/// assert!((AUTO_SMOOTH_ANGLE.to_degrees() - 50.0).abs() < 1.0e-3);
/// ```
pub const AUTO_SMOOTH_ANGLE: f64 = 0.872665;

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of the settings shared by the generator's consumers.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Numeric tolerance propagated into normal comparisons.
    pub tolerance: f64,
    /// Angle threshold (radians) handed to the smoothing capability.
    pub smooth_angle: f64,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and smoothing angle.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 0.5).expect("valid config");
    /// assert_eq!(cfg.smooth_angle, 0.5);
    /// ```
    pub fn new(tolerance: f64, smooth_angle: f64) -> Result<Self, ConfigError> {
        if !(tolerance > 0.0) {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if !(smooth_angle > 0.0 && smooth_angle <= PI) {
            return Err(ConfigError::InvalidSmoothAngle(smooth_angle));
        }
        Ok(Self {
            tolerance,
            smooth_angle,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON,
            smooth_angle: AUTO_SMOOTH_ANGLE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or NaN.
    InvalidTolerance(f64),
    /// Raised when the smoothing angle is outside `(0, π]`.
    InvalidSmoothAngle(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidSmoothAngle(value) => {
                write!(f, "smooth_angle must be in (0, pi]: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

#[cfg(test)]
mod tests;
