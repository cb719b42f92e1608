//! In-memory scene
//!
//! Holds named mesh objects with their construction history and answers
//! [`SceneQuery`] from the mesh topology.

use std::collections::HashMap;

use crate::core::models::{ComponentRef, ObjectRef};
use crate::core::ports::{SceneError, SceneQuery};
use crate::mesh::PolyMesh;

/// A mesh object and the operations that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    /// Unique object name
    pub name: ObjectRef,
    /// Geometry
    pub mesh: PolyMesh,
    /// Construction history, creation node first (empty means creation only)
    pub history: Vec<String>,
}

impl SceneObject {
    /// An object with no recorded history
    #[must_use]
    pub fn new(name: impl Into<ObjectRef>, mesh: PolyMesh) -> Self {
        Self {
            name: name.into(),
            mesh,
            history: Vec::new(),
        }
    }

    /// Replace the construction history
    #[must_use]
    pub fn with_history<S: Into<String>>(mut self, history: impl IntoIterator<Item = S>) -> Self {
        self.history = history.into_iter().map(Into::into).collect();
        self
    }

    /// History node count, never less than the creation node
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len().max(1)
    }
}

/// Ordered collection of scene objects
#[derive(Debug, Clone, Default)]
pub struct InMemoryScene {
    objects: Vec<SceneObject>,
    index: HashMap<String, usize>,
}

impl InMemoryScene {
    /// An empty scene
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object; names must be unique
    pub fn insert(&mut self, object: SceneObject) -> anyhow::Result<()> {
        if self.index.contains_key(object.name.as_str()) {
            anyhow::bail!("duplicate object name in scene: {}", object.name);
        }
        self.index.insert(object.name.as_str().to_string(), self.objects.len());
        self.objects.push(object);
        Ok(())
    }

    /// Add every object from another scene
    pub fn extend(&mut self, other: Self) -> anyhow::Result<()> {
        other.objects.into_iter().try_for_each(|o| self.insert(o))
    }

    /// Look up an object by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SceneObject> {
        self.index.get(name).map(|&i| &self.objects[i])
    }

    /// Number of objects
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the scene has no objects
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Objects in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter()
    }

    fn require(&self, object: &ObjectRef) -> Result<&SceneObject, SceneError> {
        self.get(object.as_str()).ok_or_else(|| SceneError::UnknownObject(object.clone()))
    }
}

impl FromIterator<SceneObject> for InMemoryScene {
    /// Later objects with a repeated name are dropped
    fn from_iter<T: IntoIterator<Item = SceneObject>>(iter: T) -> Self {
        let mut scene = Self::new();
        for object in iter {
            if let Err(e) = scene.insert(object) {
                log::warn!("{e}");
            }
        }
        scene
    }
}

impl SceneQuery for InMemoryScene {
    fn contains(&self, object: &ObjectRef) -> bool {
        self.index.contains_key(object.as_str())
    }

    fn objects(&self) -> Vec<ObjectRef> {
        self.objects.iter().map(|o| o.name.clone()).collect()
    }

    fn triangle_count(&self, object: &ObjectRef) -> Result<usize, SceneError> {
        Ok(self.require(object)?.mesh.triangle_count())
    }

    fn lamina_faces(&self, object: &ObjectRef) -> Result<Vec<ComponentRef>, SceneError> {
        let faces = self.require(object)?.mesh.lamina_faces();
        Ok(faces.into_iter().map(|f| object.face(f)).collect())
    }

    fn uv_shell_count(&self, object: &ObjectRef) -> Result<usize, SceneError> {
        Ok(self.require(object)?.mesh.uv_shell_count())
    }

    fn history_len(&self, object: &ObjectRef) -> Result<usize, SceneError> {
        Ok(self.require(object)?.history_len())
    }
}
