//! # Loop Bridging
//!
//! Connects two parallel vertex loops with a strip of faces, and caps a loop
//! with a triangle fan to a single point.
//!
//! ## Winding
//!
//! With `outer` sampled counter-clockwise and `inner` lying inside it, the
//! quad `(outer[k], outer[k+1], inner[k+1], inner[k])` is counter-clockwise,
//! so every strip face points along +Z.

use crate::buffers::Face;

/// How a bridged strip is tessellated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BridgeMode {
    /// One quad per segment
    #[default]
    Quads,
    /// Two triangles per segment
    Triangles,
}

/// Bridges two loops of equal length into a strip of faces.
///
/// Corresponding vertices are connected. When `closed` is true the strip
/// also gets a seam face joining the last vertices back to the first.
/// Loops are expected to have the same length; surplus indices on the
/// longer loop are ignored.
///
/// # Example
///
/// ```rust
/// use ring_mesh::{bridge_loops, BridgeMode, Face};
///
/// let faces = bridge_loops(&[0, 1, 2], &[3, 4, 5], false, BridgeMode::Quads);
/// assert_eq!(faces, vec![Face::Quad([0, 1, 4, 3]), Face::Quad([1, 2, 5, 4])]);
/// ```
pub fn bridge_loops(outer: &[u32], inner: &[u32], closed: bool, mode: BridgeMode) -> Vec<Face> {
    debug_assert_eq!(outer.len(), inner.len(), "bridged loops differ in length");

    let len = outer.len().min(inner.len());
    if len < 2 {
        return Vec::new();
    }

    let segments = if closed { len } else { len - 1 };
    let mut faces = Vec::with_capacity(match mode {
        BridgeMode::Quads => segments,
        BridgeMode::Triangles => segments * 2,
    });

    for k in 0..segments {
        let next = (k + 1) % len;
        let quad = [outer[k], outer[next], inner[next], inner[k]];
        match mode {
            BridgeMode::Quads => faces.push(Face::Quad(quad)),
            BridgeMode::Triangles => faces.extend(
                Face::Quad(quad)
                    .triangles()
                    .into_iter()
                    .map(Face::Triangle),
            ),
        }
    }

    faces
}

/// Fans a loop to a single centre vertex.
///
/// Emits `(ring[s], ring[s+1], center)` for every consecutive pair, plus
/// `(ring[last], ring[0], center)` when `closed` is true.
///
/// # Example
///
/// ```rust
/// use ring_mesh::{fan_close, Face};
///
/// let faces = fan_close(&[0, 1, 2], 3, true);
/// assert_eq!(faces.len(), 3);
/// assert_eq!(faces[2], Face::Triangle([2, 0, 3]));
/// ```
pub fn fan_close(ring: &[u32], center: u32, closed: bool) -> Vec<Face> {
    let mut faces: Vec<Face> = ring
        .windows(2)
        .map(|pair| Face::Triangle([pair[0], pair[1], center]))
        .collect();

    if closed && ring.len() > 2 {
        if let (Some(&last), Some(&first)) = (ring.last(), ring.first()) {
            faces.push(Face::Triangle([last, first, center]));
        }
    }

    faces
}
