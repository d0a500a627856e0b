//! # Shading
//!
//! The generator never touches shading. Hosts differ in how they smooth a
//! mesh by angle, so that step is a single capability, [`Smoothing`], that a
//! host integration implements. [`AngleSmoothing`] is the built-in
//! implementation working directly on [`Mesh`] normals.

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::{GlobalConfig, EPSILON};
use glam::DVec3;
use tracing::debug;

/// Host capability that smooths a mesh, keeping edges sharper than
/// `angle_threshold` (radians) hard.
pub trait Smoothing {
    /// Applies angle-limited smoothing to `mesh`.
    fn apply_smoothing(&self, mesh: &mut Mesh, angle_threshold: f64) -> Result<(), MeshError>;
}

/// Auto smoothing by splitting vertex normals at sharp edges.
///
/// Every triangle corner gets the area-weighted average of the normals of
/// the triangles around its vertex that lie within the threshold of the
/// corner's own triangle. A vertex whose corners end up with different
/// normals is duplicated, one copy per normal. Vertices that belong to no
/// triangle keep a zero normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleSmoothing {
    /// Corners whose unit normals differ by less than this share a vertex
    pub tolerance: f64,
}

impl Default for AngleSmoothing {
    fn default() -> Self {
        Self { tolerance: EPSILON }
    }
}

impl AngleSmoothing {
    /// Takes the normal tolerance from the global configuration.
    pub fn from_config(config: &GlobalConfig) -> Self {
        Self {
            tolerance: config.tolerance,
        }
    }
}

impl Smoothing for AngleSmoothing {
    fn apply_smoothing(&self, mesh: &mut Mesh, angle_threshold: f64) -> Result<(), MeshError> {
        if !(angle_threshold >= 0.0) {
            return Err(MeshError::validation(format!(
                "smoothing angle must be non-negative: {angle_threshold}"
            )));
        }
        let min_dot = angle_threshold.cos();
        let same_normal = 1.0 - self.tolerance;

        let face_normals: Vec<DVec3> = mesh
            .triangles()
            .iter()
            .map(|tri| mesh.triangle_normal(tri))
            .collect();
        let unit_normals: Vec<DVec3> = face_normals
            .iter()
            .map(|n| n.normalize_or_zero())
            .collect();

        let mut incident: Vec<Vec<usize>> = vec![Vec::new(); mesh.vertex_count()];
        for (t, tri) in mesh.triangles().iter().enumerate() {
            for &v in tri {
                incident[v as usize].push(t);
            }
        }

        let mut vertices = mesh.vertices().to_vec();
        let mut normals: Vec<Option<DVec3>> = vec![None; vertices.len()];
        // per input vertex: (normal, emitted vertex index)
        let mut copies: Vec<Vec<(DVec3, u32)>> = vec![Vec::new(); vertices.len()];
        let mut triangles = Vec::with_capacity(mesh.triangle_count());

        for (t, tri) in mesh.triangles().iter().enumerate() {
            let mut corners = [0u32; 3];
            for (corner, &v) in corners.iter_mut().zip(tri) {
                let normal = incident[v as usize]
                    .iter()
                    .filter(|&&u| unit_normals[t].dot(unit_normals[u]) >= min_dot)
                    .map(|&u| face_normals[u])
                    .sum::<DVec3>()
                    .normalize_or_zero();

                let slot = &mut copies[v as usize];
                *corner = match slot.iter().find(|(n, _)| n.dot(normal) >= same_normal) {
                    Some(&(_, index)) => index,
                    None if normals[v as usize].is_none() => {
                        normals[v as usize] = Some(normal);
                        slot.push((normal, v));
                        v
                    }
                    None => {
                        let index = vertices.len() as u32;
                        vertices.push(vertices[v as usize]);
                        normals.push(Some(normal));
                        slot.push((normal, index));
                        index
                    }
                };
            }
            triangles.push(corners);
        }

        let split = vertices.len() - mesh.vertex_count();
        debug!(split, angle_threshold, "Applied angle smoothing");

        let normals = normals.into_iter().map(|n| n.unwrap_or(DVec3::ZERO)).collect();
        *mesh = Mesh::from_parts(vertices, triangles, mesh.edges().to_vec(), Some(normals));
        Ok(())
    }
}
