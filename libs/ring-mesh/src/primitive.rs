//! # Primitive Record
//!
//! The caller-held record a host stores alongside a generated mesh. Editing
//! a property changes the record, and the whole record is fed back into the
//! generator; there is no incremental update.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::params::RingParameters;
use crate::ring::{generate_ring, RingMesh};
use crate::shading::Smoothing;
use config::constants::{GlobalConfig, DEFAULT_SMOOTHED};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Kind tag stored with a primitive record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimitiveKind {
    /// Ring, annulus or sector disc
    #[default]
    Ring,
}

/// Stored description of a ring primitive.
///
/// # Example
///
/// ```rust
/// use ring_mesh::{AngleSmoothing, RingPrimitive};
/// use config::constants::GlobalConfig;
///
/// let mut record = RingPrimitive::default();
/// let ring = record.update(|p| p.seg_perimeter = 12);
/// assert_eq!(ring.buffers.vertex_count(), 13);
///
/// let config = GlobalConfig::default();
/// let mesh = record.build_mesh(&AngleSmoothing::from_config(&config), &config).unwrap();
/// assert!(mesh.normals().is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingPrimitive {
    /// Kind tag
    pub kind: PrimitiveKind,
    /// Geometry parameters
    pub params: RingParameters,
    /// Request angle-limited smoothing from the host
    pub smoothed: bool,
    /// Host-side flag marking the primitive as animated; not used by the generator
    pub animated: bool,
}

impl Default for RingPrimitive {
    fn default() -> Self {
        Self::new(RingParameters::default())
    }
}

impl RingPrimitive {
    /// Creates a record with default shading flags.
    pub fn new(params: RingParameters) -> Self {
        Self {
            kind: PrimitiveKind::Ring,
            params,
            smoothed: DEFAULT_SMOOTHED,
            animated: false,
        }
    }

    /// Sets the smoothing flag.
    pub fn with_smoothed(mut self, smoothed: bool) -> Self {
        self.smoothed = smoothed;
        self
    }

    /// Regenerates the full ring from the stored parameters.
    pub fn regenerate(&self) -> RingMesh {
        generate_ring(&self.params)
    }

    /// Edits the parameters and regenerates from scratch.
    pub fn update(&mut self, edit: impl FnOnce(&mut RingParameters)) -> RingMesh {
        edit(&mut self.params);
        self.regenerate()
    }

    /// Regenerates and builds a shaded mesh.
    ///
    /// Normals are always computed; when `smoothed` is set the mesh is also
    /// handed to `host` with the configured angle threshold.
    pub fn build_mesh(
        &self,
        host: &impl Smoothing,
        config: &GlobalConfig,
    ) -> Result<Mesh, MeshError> {
        let ring = self.regenerate();
        let mut mesh = Mesh::from_buffers(&ring.buffers)?;
        mesh.compute_normals();

        if self.smoothed {
            debug!(angle = config.smooth_angle, "Forwarding smoothing to host");
            host.apply_smoothing(&mut mesh, config.smooth_angle)?;
        }

        Ok(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Host stand-in that records the threshold it was called with.
    #[derive(Default)]
    struct RecordingHost {
        angle: Cell<Option<f64>>,
    }

    impl Smoothing for RecordingHost {
        fn apply_smoothing(&self, _mesh: &mut Mesh, angle_threshold: f64) -> Result<(), MeshError> {
            self.angle.set(Some(angle_threshold));
            Ok(())
        }
    }

    #[test]
    fn test_smoothed_record_forwards_angle() {
        let host = RecordingHost::default();
        let config = GlobalConfig::default();
        RingPrimitive::default().build_mesh(&host, &config).unwrap();
        assert_eq!(host.angle.get(), Some(config.smooth_angle));
    }

    #[test]
    fn test_unsmoothed_record_skips_host() {
        let host = RecordingHost::default();
        let mesh = RingPrimitive::default()
            .with_smoothed(false)
            .build_mesh(&host, &GlobalConfig::default())
            .unwrap();
        assert_eq!(host.angle.get(), None);
        assert!(mesh.normals().is_some());
    }

    #[test]
    fn test_update_regenerates_whole_ring() {
        let mut record = RingPrimitive::default();
        let before = record.regenerate();
        let after = record.update(|p| {
            p.radius_in = 0.5;
            p.seg_radius = 2;
        });
        assert_ne!(before, after);
        assert_eq!(after, record.regenerate());
        assert_eq!(after.params.loop_number, 3);
    }

    #[test]
    fn test_record_deserializes_with_defaults() {
        let record: RingPrimitive =
            serde_json::from_str(r#"{"smoothed": false, "params": {"seg_radius": 4}}"#).unwrap();
        assert_eq!(record.kind, PrimitiveKind::Ring);
        assert!(!record.smoothed);
        assert!(!record.animated);
        assert_eq!(record.params.seg_radius, 4);
        assert_eq!(record.params.seg_perimeter, 24);
    }
}
