//! TOML scene manifests
//!
//! A manifest lists objects either inline or by referencing an OBJ file:
//!
//! ```toml
//! [[object]]
//! name = "crate_v001"
//! source = "crate.obj"
//! history = ["polyCube1", "polyBevel1"]
//!
//! [[object]]
//! name = "card_v001"
//! positions = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]]
//! faces = [[0, 1, 2, 3]]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::mesh::PolyMesh;

use super::memory::SceneObject;
use super::obj::load_obj_mesh;

/// A parsed manifest file
#[derive(Debug, Default, Deserialize)]
pub struct SceneManifest {
    /// Objects in scene order
    #[serde(default, rename = "object")]
    pub objects: Vec<ManifestObject>,
}

/// One `[[object]]` entry
#[derive(Debug, Deserialize)]
pub struct ManifestObject {
    /// Object name
    pub name: String,

    /// OBJ file with the geometry, relative to the manifest
    #[serde(default)]
    pub source: Option<PathBuf>,

    /// Inline vertex positions
    #[serde(default)]
    pub positions: Vec<[f32; 3]>,

    /// Inline faces
    #[serde(default)]
    pub faces: Vec<Vec<u32>>,

    /// Inline UV coordinates
    #[serde(default)]
    pub uvs: Vec<[f32; 2]>,

    /// Inline per-face UV indices
    #[serde(default)]
    pub face_uvs: Vec<Vec<u32>>,

    /// Construction history, creation node first
    #[serde(default)]
    pub history: Vec<String>,
}

impl SceneManifest {
    /// Parse a manifest from TOML text
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read a manifest file
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// OBJ files referenced by this manifest, resolved against `base_dir`
    #[must_use]
    pub fn sources(&self, base_dir: &Path) -> Vec<PathBuf> {
        self.objects.iter().filter_map(|o| o.source.as_ref()).map(|s| base_dir.join(s)).collect()
    }

    /// Build the scene objects, loading referenced OBJ files from `base_dir`
    pub fn into_objects(self, base_dir: &Path) -> anyhow::Result<Vec<SceneObject>> {
        self.objects.into_iter().map(|o| o.into_object(base_dir)).collect()
    }
}

impl ManifestObject {
    fn into_object(self, base_dir: &Path) -> anyhow::Result<SceneObject> {
        let mesh = match &self.source {
            Some(source) => load_obj_mesh(&base_dir.join(source))?,
            None => PolyMesh::new(self.positions, self.faces).with_uvs(self.uvs, self.face_uvs),
        };
        mesh.validate().with_context(|| format!("Invalid mesh for object {}", self.name))?;
        Ok(SceneObject::new(self.name, mesh).with_history(self.history))
    }
}

/// Load every object of a manifest file
pub fn load_manifest(path: &Path) -> anyhow::Result<Vec<SceneObject>> {
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let objects = SceneManifest::read(path)?.into_objects(base_dir)?;
    log::debug!("Loaded {} object(s) from {}", objects.len(), path.display());
    Ok(objects)
}
