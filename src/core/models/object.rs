//! Object and component references
//!
//! Both are opaque names owned by the host scene. The core never resolves
//! them itself; it only passes them to a [`SceneQuery`](crate::core::ports::SceneQuery).

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of a mesh object in the scene
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectRef(String);

impl ObjectRef {
    /// Create a reference from any string-like name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The object name
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Reference to one face of this object (`name.f[index]`)
    #[must_use]
    pub fn face(&self, index: usize) -> ComponentRef {
        ComponentRef(format!("{}.f[{index}]", self.0))
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ObjectRef {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for ObjectRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ObjectRef {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Name of a sub-element (face, edge, vertex) of a scene object
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentRef(String);

impl ComponentRef {
    /// Create a component reference from a raw host name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The component name
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
