//! # Ring Mesh
//!
//! Procedural ring, annulus and sector disc primitive.
//!
//! ## Architecture
//!
//! ```text
//! RingParameters → normalize → loops (AngularSampler)
//!                            → bridge_loops / fan_close | edge chain
//!                            → MeshBuffers (vertices, edges, faces)
//!                            → Mesh + host Smoothing
//! ```
//!
//! The generator is a pure function: invalid parameters are corrected, never
//! rejected, and each call rebuilds the whole primitive.
//!
//! ## Usage
//!
//! ```rust
//! use ring_mesh::{generate_ring, RingParameters};
//! use std::f64::consts::PI;
//!
//! let params = RingParameters::default()
//!     .with_inner(false)
//!     .with_segments(4, 1)
//!     .with_sector(0.0, PI);
//! let (vertices, edges, faces) = generate_ring(&params).into_parts();
//! assert_eq!((vertices.len(), edges.len(), faces.len()), (5, 4, 0));
//! ```

pub mod bridge;
pub mod buffers;
pub mod error;
pub mod mesh;
pub mod params;
pub mod primitive;
pub mod ring;
pub mod sampler;
pub mod shading;

pub use bridge::{bridge_loops, fan_close, BridgeMode};
pub use buffers::{Face, MeshBuffers};
pub use error::MeshError;
pub use mesh::Mesh;
pub use params::{Corrections, NormalizedRing, RingParameters};
pub use primitive::{PrimitiveKind, RingPrimitive};
pub use ring::{generate_ring, RingMesh};
pub use sampler::AngularSampler;
pub use shading::{AngleSmoothing, Smoothing};
