//! # Mesh Data Structure
//!
//! Triangle mesh built from generated [`MeshBuffers`]: quads are split into
//! triangles, loose edges are kept, and normals can be attached by a
//! [`Smoothing`](crate::shading::Smoothing) implementation.

use crate::buffers::MeshBuffers;
use crate::error::MeshError;
use config::constants::AREA_EPSILON;
use glam::DVec3;

/// A triangle mesh with optional loose edges and vertex normals.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the host boundary for GPU upload.
///
/// # Example
///
/// ```rust
/// use ring_mesh::{generate_ring, Mesh, RingParameters};
///
/// let ring = generate_ring(&RingParameters::default().with_radii(2.0, 1.0));
/// let mesh = Mesh::from_buffers(&ring.buffers).unwrap();
/// assert_eq!(mesh.triangle_count(), 2 * ring.buffers.face_count());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    /// Edges that do not belong to any face
    edges: Vec<[u32; 2]>,
    /// Optional vertex normals
    normals: Option<Vec<DVec3>>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a mesh from generated buffers.
    ///
    /// Buffers are validated first; every index must address an existing
    /// vertex. Quads are split along their `0-2` diagonal.
    pub fn from_buffers(buffers: &MeshBuffers) -> Result<Self, MeshError> {
        buffers.validate()?;

        let triangles = buffers
            .faces
            .iter()
            .flat_map(|face| face.triangles())
            .collect();

        Ok(Self {
            vertices: buffers.vertices.clone(),
            triangles,
            edges: buffers.edges.clone(),
            normals: None,
        })
    }

    /// Creates a mesh from raw parts without validation.
    pub(crate) fn from_parts(
        vertices: Vec<DVec3>,
        triangles: Vec<[u32; 3]>,
        edges: Vec<[u32; 2]>,
        normals: Option<Vec<DVec3>>,
    ) -> Self {
        Self {
            vertices,
            triangles,
            edges,
            normals,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns the number of loose edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns a reference to the loose edges.
    #[inline]
    pub fn edges(&self) -> &[[u32; 2]] {
        &self.edges
    }

    /// Sets vertex normals.
    pub fn set_normals(&mut self, normals: Vec<DVec3>) {
        self.normals = Some(normals);
    }

    /// Returns the vertex normals.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Unnormalized normal of a triangle (length is twice its area).
    pub fn triangle_normal(&self, tri: &[u32; 3]) -> DVec3 {
        let v0 = self.vertices[tri[0] as usize];
        let v1 = self.vertices[tri[1] as usize];
        let v2 = self.vertices[tri[2] as usize];
        (v1 - v0).cross(v2 - v0)
    }

    /// Computes and sets area-weighted normals for each vertex.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for tri in &self.triangles {
            let normal = self.triangle_normal(tri);
            for &v in tri {
                normals[v as usize] += normal;
            }
        }

        for normal in &mut normals {
            *normal = normal.normalize_or_zero();
        }

        self.normals = Some(normals);
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle and edge indices are valid
    /// - No degenerate triangles (repeated index or zero area)
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        let edges_ok = self
            .edges
            .iter()
            .all(|e| e[0] < vertex_count && e[1] < vertex_count && e[0] != e[1]);
        if !edges_ok {
            return false;
        }

        for tri in &self.triangles {
            if tri.iter().any(|&v| v >= vertex_count) {
                return false;
            }

            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }

            if self.triangle_normal(tri).length() < AREA_EPSILON {
                return false;
            }
        }

        true
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        flatten_f32(&self.vertices)
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals.as_deref().map(flatten_f32)
    }
}

fn flatten_f32(values: &[DVec3]) -> Vec<f32> {
    let mut result = Vec::with_capacity(values.len() * 3);
    for v in values {
        result.push(v.x as f32);
        result.push(v.y as f32);
        result.push(v.z as f32);
    }
    result
}
