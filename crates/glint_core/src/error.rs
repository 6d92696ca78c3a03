//! Errors raised while assembling or addressing a scene.

use thiserror::Error;

use crate::scene::ObjectRef;

/// Errors that can occur while building a [`crate::Scene`] or resolving
/// references into it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Sphere radius (or squared radius) must be finite and positive, got {0}")]
    InvalidSphereRadius(f32),

    #[error("Mesh index buffer length {0} is not a multiple of 3")]
    MeshIndexCount(usize),

    #[error("Mesh index {index} out of range for {vertex_count} vertices")]
    MeshIndexOutOfRange { index: u32, vertex_count: usize },

    #[error("Mesh has {triangles} triangles but {normals} normals")]
    NormalCountMismatch { triangles: usize, normals: usize },

    #[error("Scene already has an ambient light")]
    DuplicateAmbientLight,

    #[error("Object reference {0:?} does not resolve to a primitive")]
    UnresolvedObject(ObjectRef),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;
