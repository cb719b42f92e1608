//! Scene query port
//!
//! Defines the read-only questions a check may ask about a scene object.

use thiserror::Error;

use super::super::models::{ComponentRef, ObjectRef};

/// Errors a scene can report for an object query
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// The reference does not name an object in the scene
    #[error("object not found in scene: {0}")]
    UnknownObject(ObjectRef),

    /// The host could not evaluate the object
    #[error("scene query failed for {object}: {reason}")]
    Query {
        /// Object being queried
        object: ObjectRef,
        /// Host-reported reason
        reason: String,
    },
}

/// Read-only access to scene content
///
/// Callers filter references with [`SceneQuery::contains`] before running
/// checks; a reference the scene does not know is a precondition violation
/// and surfaces as [`SceneError::UnknownObject`].
#[cfg_attr(test, mockall::automock)]
pub trait SceneQuery: Send + Sync {
    /// Whether the reference names a mesh object in the scene
    fn contains(&self, object: &ObjectRef) -> bool;

    /// All mesh objects, in scene order
    fn objects(&self) -> Vec<ObjectRef>;

    /// Number of triangles after triangulating every polygon
    fn triangle_count(&self, object: &ObjectRef) -> Result<usize, SceneError>;

    /// Faces that share all of their edges with another face
    fn lamina_faces(&self, object: &ObjectRef) -> Result<Vec<ComponentRef>, SceneError>;

    /// Number of connected UV regions
    fn uv_shell_count(&self, object: &ObjectRef) -> Result<usize, SceneError>;

    /// Number of nodes in the object's construction history, creation node included
    fn history_len(&self, object: &ObjectRef) -> Result<usize, SceneError>;
}
