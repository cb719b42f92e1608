//! Polygon mesh data and the topology queries the checks rely on.
//!
//! Faces are stored as vertex index lists of any arity (triangles, quads,
//! n-gons). UVs are optional: when present, every face carries one UV index
//! per vertex in `face_uvs`.

mod topology;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use topology::{lamina_faces, uv_shell_count};

/// Structural problems in mesh data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MeshError {
    /// A face refers to a vertex that does not exist
    #[error("face {face} references vertex {index} but the mesh has {count} vertices")]
    VertexOutOfRange {
        /// Face index
        face: usize,
        /// Offending vertex index
        index: u32,
        /// Number of vertices
        count: usize,
    },

    /// A face refers to a UV that does not exist
    #[error("face {face} references uv {index} but the mesh has {count} uvs")]
    UvOutOfRange {
        /// Face index
        face: usize,
        /// Offending UV index
        index: u32,
        /// Number of UVs
        count: usize,
    },

    /// UV faces do not line up with geometry faces
    #[error("mesh has {faces} faces but {uv_faces} uv faces")]
    UvFaceCount {
        /// Number of geometry faces
        faces: usize,
        /// Number of UV faces
        uv_faces: usize,
    },

    /// A UV face has a different vertex count than its geometry face
    #[error("face {face} has {expected} vertices but {found} uvs")]
    UvArity {
        /// Face index
        face: usize,
        /// Vertices in the face
        expected: usize,
        /// UVs in the UV face
        found: usize,
    },
}

/// An indexed polygon mesh
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolyMesh {
    /// Vertex positions
    pub positions: Vec<[f32; 3]>,

    /// Faces as vertex index lists
    pub faces: Vec<Vec<u32>>,

    /// UV coordinates
    #[serde(default)]
    pub uvs: Vec<[f32; 2]>,

    /// Per-face UV index lists, parallel to `faces` (empty when unmapped)
    #[serde(default)]
    pub face_uvs: Vec<Vec<u32>>,
}

impl PolyMesh {
    /// A mesh without UVs
    #[must_use]
    pub const fn new(positions: Vec<[f32; 3]>, faces: Vec<Vec<u32>>) -> Self {
        Self {
            positions,
            faces,
            uvs: Vec::new(),
            face_uvs: Vec::new(),
        }
    }

    /// Attach a UV mapping
    #[must_use]
    pub fn with_uvs(mut self, uvs: Vec<[f32; 2]>, face_uvs: Vec<Vec<u32>>) -> Self {
        self.uvs = uvs;
        self.face_uvs = face_uvs;
        self
    }

    /// Whether the mesh carries a UV mapping
    #[must_use]
    pub fn has_uvs(&self) -> bool {
        !self.face_uvs.is_empty()
    }

    /// Triangles needed to represent every face (an n-gon counts n - 2)
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.faces.iter().map(|f| f.len().saturating_sub(2)).sum()
    }

    /// Indices of faces that share all of their edges with another face
    #[must_use]
    pub fn lamina_faces(&self) -> Vec<usize> {
        lamina_faces(&self.faces)
    }

    /// Number of connected UV regions
    #[must_use]
    pub fn uv_shell_count(&self) -> usize {
        uv_shell_count(&self.face_uvs, self.uvs.len())
    }

    /// Check that every index is in range and UV faces match geometry faces
    pub fn validate(&self) -> Result<(), MeshError> {
        for (face, indices) in self.faces.iter().enumerate() {
            if let Some(&index) = indices.iter().find(|&&i| i as usize >= self.positions.len()) {
                return Err(MeshError::VertexOutOfRange {
                    face,
                    index,
                    count: self.positions.len(),
                });
            }
        }

        if !self.has_uvs() {
            return Ok(());
        }

        if self.face_uvs.len() != self.faces.len() {
            return Err(MeshError::UvFaceCount {
                faces: self.faces.len(),
                uv_faces: self.face_uvs.len(),
            });
        }

        for (face, (indices, uv_indices)) in self.faces.iter().zip(&self.face_uvs).enumerate() {
            if indices.len() != uv_indices.len() {
                return Err(MeshError::UvArity {
                    face,
                    expected: indices.len(),
                    found: uv_indices.len(),
                });
            }
            if let Some(&index) = uv_indices.iter().find(|&&i| i as usize >= self.uvs.len()) {
                return Err(MeshError::UvOutOfRange {
                    face,
                    index,
                    count: self.uvs.len(),
                });
            }
        }

        Ok(())
    }
}
