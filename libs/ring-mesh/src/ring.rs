//! # Ring Generator
//!
//! Builds the vertex / edge / face buffers of a ring, annulus or sector disc.
//!
//! ## Algorithm
//!
//! 1. Normalize the parameters (swaps, clamps, degenerate collapse)
//! 2. Filled path: one loop per radial step, outer first, bridged pairwise;
//!    when the inner radius is at the centre, fan the innermost loop to a
//!    centre vertex
//! 3. Outline path: a single loop at the outer radius chained into edges
//!
//! The call is a pure function of its input; nothing is cached between calls.

use crate::bridge::{bridge_loops, fan_close, BridgeMode};
use crate::buffers::{Face, MeshBuffers};
use crate::params::{NormalizedRing, RingParameters};
use crate::sampler::AngularSampler;
use glam::DVec3;
use tracing::trace;

/// Generated ring: the normalized parameters and the buffers built from them.
#[derive(Debug, Clone, PartialEq)]
pub struct RingMesh {
    /// Parameters after correction, with derived counts
    pub params: NormalizedRing,
    /// Vertices, edges and faces
    pub buffers: MeshBuffers,
}

impl RingMesh {
    /// Splits into the `(vertices, edges, faces)` triple.
    pub fn into_parts(self) -> (Vec<DVec3>, Vec<[u32; 2]>, Vec<Face>) {
        let MeshBuffers {
            vertices,
            edges,
            faces,
        } = self.buffers;
        (vertices, edges, faces)
    }
}

/// Generates a ring from raw parameters.
///
/// Invalid input is corrected, never rejected; see
/// [`RingParameters::normalize`].
///
/// # Example
///
/// ```rust
/// use ring_mesh::{generate_ring, RingParameters};
/// use std::f64::consts::TAU;
///
/// let params = RingParameters::default()
///     .with_radii(2.0, 1.0)
///     .with_segments(6, 1)
///     .with_sector(0.0, TAU);
/// let ring = generate_ring(&params);
/// assert_eq!(ring.buffers.vertex_count(), 12);
/// assert_eq!(ring.buffers.face_count(), 6);
/// ```
pub fn generate_ring(params: &RingParameters) -> RingMesh {
    let ring = params.normalize();
    let buffers = if ring.use_inner {
        build_surface(&ring)
    } else {
        build_outline(&ring)
    };

    trace!(
        vertices = buffers.vertex_count(),
        edges = buffers.edge_count(),
        faces = buffers.face_count(),
        "Generated ring"
    );

    RingMesh {
        params: ring,
        buffers,
    }
}

fn sampler(ring: &NormalizedRing) -> AngularSampler {
    AngularSampler::from_step(ring.sector_from, ring.step_angle, ring.seg_number)
}

fn build_surface(ring: &NormalizedRing) -> MeshBuffers {
    let sampler = sampler(ring);
    let mut buffers = MeshBuffers::with_capacity(ring.vertex_count());

    let loops: Vec<Vec<u32>> = (0..ring.loop_number)
        .map(|r| {
            sampler
                .sample(ring.loop_radius(r))
                .map(|position| buffers.push_vertex(position))
                .collect()
        })
        .collect();

    for pair in loops.windows(2) {
        buffers.faces.extend(bridge_loops(
            &pair[0],
            &pair[1],
            ring.closed,
            BridgeMode::Quads,
        ));
    }

    if ring.has_center_cap() {
        if let Some(innermost) = loops.last() {
            let center = buffers.push_vertex(DVec3::ZERO);
            buffers
                .faces
                .extend(fan_close(innermost, center, ring.closed));
        }
    }

    buffers
}

fn build_outline(ring: &NormalizedRing) -> MeshBuffers {
    let sampler = sampler(ring);
    let mut buffers = MeshBuffers::with_capacity(ring.seg_number as usize);

    for position in sampler.sample(ring.radius_out) {
        buffers.push_vertex(position);
    }

    let count = buffers.vertex_count() as u32;
    buffers.edges = (1..count).map(|v| [v - 1, v]).collect();
    if ring.closed && count > 1 {
        buffers.edges.push([count - 1, 0]);
    }

    buffers
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{PI, TAU};

    #[test]
    fn test_full_disc() {
        let params = RingParameters::default()
            .with_radii(1.0, 0.0)
            .with_segments(8, 1)
            .with_sector(0.0, TAU);
        let ring = generate_ring(&params);

        assert_eq!(ring.params.loop_number, 1);
        assert_eq!(ring.buffers.vertex_count(), 9);
        assert_eq!(ring.buffers.face_count(), 8);
        assert_eq!(ring.buffers.edge_count(), 0);
        assert!(ring.buffers.faces.iter().all(|f| f.arity() == 3));
        assert_eq!(ring.buffers.vertices[8], DVec3::ZERO);
        assert_eq!(ring.buffers.faces[7], Face::Triangle([7, 0, 8]));
    }

    #[test]
    fn test_open_sector_outline() {
        let params = RingParameters::default()
            .with_inner(false)
            .with_segments(4, 1)
            .with_sector(0.0, PI);
        let ring = generate_ring(&params);

        assert!(!ring.params.closed);
        assert_eq!(ring.buffers.vertex_count(), 5);
        assert_eq!(
            ring.buffers.edges,
            vec![[0, 1], [1, 2], [2, 3], [3, 4]]
        );
        assert_eq!(ring.buffers.face_count(), 0);
        assert_relative_eq!(ring.buffers.vertices[4].x, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_closed_outline_wraps() {
        let params = RingParameters::default()
            .with_inner(false)
            .with_segments(5, 1);
        let ring = generate_ring(&params);
        assert_eq!(ring.buffers.vertex_count(), 5);
        assert_eq!(ring.buffers.edge_count(), 5);
        assert_eq!(ring.buffers.edges.last(), Some(&[4, 0]));
    }

    #[test]
    fn test_annulus() {
        let params = RingParameters::default()
            .with_radii(2.0, 1.0)
            .with_segments(6, 1)
            .with_sector(0.0, TAU);
        let ring = generate_ring(&params);

        assert_eq!(ring.params.loop_number, 2);
        assert_eq!(ring.buffers.vertex_count(), 12);
        assert_eq!(ring.buffers.face_count(), 6);
        assert!(ring.buffers.faces.iter().all(|f| f.arity() == 4));
        assert_eq!(ring.buffers.faces[0], Face::Quad([0, 1, 7, 6]));
        assert_eq!(ring.buffers.faces[5], Face::Quad([5, 0, 6, 11]));
        assert_relative_eq!(ring.buffers.vertices[6].x, 1.0);
    }

    #[test]
    fn test_open_sector_disc_has_no_wrap_triangle() {
        let params = RingParameters::default()
            .with_segments(4, 2)
            .with_sector(0.0, PI);
        let ring = generate_ring(&params);

        // two loops of five samples, centre vertex
        assert_eq!(ring.buffers.vertex_count(), 11);
        // four quads between the loops, four fan triangles
        assert_eq!(ring.buffers.face_count(), 8);
        assert_eq!(ring.buffers.faces[7], Face::Triangle([8, 9, 10]));
    }

    #[test]
    fn test_innermost_disc_loop_sits_one_step_from_centre() {
        let params = RingParameters::default()
            .with_radii(3.0, 0.0)
            .with_segments(8, 3);
        let ring = generate_ring(&params);
        let innermost = ring.buffers.vertices[2 * 8];
        assert_relative_eq!(innermost.length(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_into_parts() {
        let (vertices, edges, faces) = generate_ring(&RingParameters::default()).into_parts();
        assert_eq!(vertices.len(), 25);
        assert!(edges.is_empty());
        assert_eq!(faces.len(), 24);
    }
}
