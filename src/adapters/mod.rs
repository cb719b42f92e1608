//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `scene/` - Scenes loaded from OBJ files and TOML manifests
//! - `toml/` - Preset files and the current-preset pointer
//! - `selection/` - Selection sinks (in-memory list, text file)

pub mod scene;
pub mod selection;
pub mod toml;

pub use scene::{InMemoryScene, SceneObject, load_scene};
pub use selection::{SelectionFile, SelectionList};
pub use self::toml::{LoadedPreset, PresetStore};
