//! # Mesh Errors
//!
//! Error types for turning generated buffers into a mesh. The generator
//! itself never fails; these only surface when buffers are consumed.

use thiserror::Error;

/// Errors that can occur while building or shading a mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A face or edge references a vertex that does not exist
    #[error("Invalid topology: {message}")]
    InvalidTopology {
        /// What was wrong
        message: String,
    },

    /// Degenerate geometry
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry {
        /// What was wrong
        message: String,
    },

    /// Mesh validation failed
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// What was wrong
        message: String,
    },

    /// Too many vertices to address with 32-bit indices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices {
        /// Vertex count that was requested
        count: usize,
        /// Largest addressable count
        max: usize,
    },
}

impl MeshError {
    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates a validation failed error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::invalid_topology("face 3 references vertex 12");
        assert!(err.to_string().contains("Invalid topology"));
        assert!(err.to_string().contains("vertex 12"));

        let err = MeshError::TooManyVertices {
            count: 5_000_000_000,
            max: u32::MAX as usize,
        };
        assert!(err.to_string().contains("5000000000"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
