//! # Mesh Buffers
//!
//! The three containers the generator emits: vertices, loose edges and
//! faces. Indices are positions in the vertex buffer, assigned in
//! generation order.

use crate::error::MeshError;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A triangle or quad, counter-clockwise when seen from +Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    /// Three vertex indices
    Triangle([u32; 3]),
    /// Four vertex indices
    Quad([u32; 4]),
}

impl Face {
    /// Vertex indices in winding order.
    pub fn indices(&self) -> &[u32] {
        match self {
            Face::Triangle(idx) => idx.as_slice(),
            Face::Quad(idx) => idx.as_slice(),
        }
    }

    /// Number of corners (3 or 4).
    #[inline]
    pub fn arity(&self) -> usize {
        self.indices().len()
    }

    /// Splits the face into triangles, keeping the winding.
    ///
    /// Quads are split along the `0-2` diagonal.
    pub fn triangles(&self) -> Vec<[u32; 3]> {
        match *self {
            Face::Triangle(t) => vec![t],
            Face::Quad([a, b, c, d]) => vec![[a, b, c], [a, c, d]],
        }
    }
}

/// Vertex, edge and face buffers of a generated primitive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshBuffers {
    /// Vertex positions
    pub vertices: Vec<DVec3>,
    /// Loose edges (only on the outline path)
    pub edges: Vec<[u32; 2]>,
    /// Faces (only on the filled path)
    pub faces: Vec<Face>,
}

impl MeshBuffers {
    /// Creates empty buffers with pre-allocated vertex capacity.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            edges: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Appends a vertex and returns its index.
    pub fn push_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Signed area of a face projected on the XY plane.
    ///
    /// Positive for counter-clockwise winding (normal along +Z).
    pub fn signed_area(&self, face: &Face) -> f64 {
        let idx = face.indices();
        let mut twice_area = 0.0;
        for (i, &a) in idx.iter().enumerate() {
            let b = idx[(i + 1) % idx.len()];
            let p = self.vertices[a as usize];
            let q = self.vertices[b as usize];
            twice_area += p.x * q.y - q.x * p.y;
        }
        twice_area * 0.5
    }

    /// Checks that every edge and face references existing, distinct vertices.
    pub fn validate(&self) -> Result<(), MeshError> {
        let count = self.vertices.len();
        if count > u32::MAX as usize {
            return Err(MeshError::TooManyVertices {
                count,
                max: u32::MAX as usize,
            });
        }

        for (i, edge) in self.edges.iter().enumerate() {
            if edge.iter().any(|&v| v as usize >= count) {
                return Err(MeshError::invalid_topology(format!(
                    "edge {i} {edge:?} references a missing vertex ({count} vertices)"
                )));
            }
            if edge[0] == edge[1] {
                return Err(MeshError::degenerate(format!(
                    "edge {i} is a loop on vertex {}",
                    edge[0]
                )));
            }
        }

        for (i, face) in self.faces.iter().enumerate() {
            let idx = face.indices();
            if idx.iter().any(|&v| v as usize >= count) {
                return Err(MeshError::invalid_topology(format!(
                    "face {i} {idx:?} references a missing vertex ({count} vertices)"
                )));
            }
            for (k, a) in idx.iter().enumerate() {
                if idx[k + 1..].contains(a) {
                    return Err(MeshError::degenerate(format!(
                        "face {i} repeats vertex {a}"
                    )));
                }
            }
        }

        Ok(())
    }
}
