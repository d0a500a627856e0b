//! # Config Crate
//!
//! Centralized configuration constants for the ring primitive generator.
//! Tolerances, subdivision floors, parameter defaults and the shading
//! threshold handed to the host all live here so the generator and its
//! consumers agree on the same values.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEGENERATE_RADIUS, MIN_PERIMETER_SEGMENTS};
//!
//! // A ring whose radii are closer than DEGENERATE_RADIUS collapses to a disc
//! let (outer, inner) = (1.0_f64, 0.99995_f64);
//! assert!(outer - inner < DEGENERATE_RADIUS);
//!
//! // Perimeter subdivision never drops below a triangle
//! let segments = 2_u32.max(MIN_PERIMETER_SEGMENTS);
//! assert_eq!(segments, 3);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Plain constants and a validated config snapshot
//! - **Host Compatible**: Defaults match the interactive add-on's properties

pub mod constants;

#[cfg(test)]
mod tests;
