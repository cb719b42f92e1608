//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the inspection logic and the
//! host application: reading scene content and highlighting results.
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The checks depend only on these traits, never on a concrete scene. This enables:
//!
//! - **Testability**: Mock scenes for unit tests
//! - **Flexibility**: Any host (or a file-backed scene) can drive the same checks
//! - **Clarity**: Checks are read-only by construction

mod scene;
mod selection;

pub use scene::{SceneError, SceneQuery};
pub use selection::Selection;

#[cfg(test)]
pub use scene::MockSceneQuery;
#[cfg(test)]
pub use selection::MockSelection;
