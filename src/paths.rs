//! Centralized path definitions for mesh-inspector
//!
//! This module provides a single source of truth for all filesystem paths
//! used by the tool.
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.mesh-inspector/            # or $MESH_INSPECTOR_HOME, or --home
//! ├── config.toml               # Current-preset pointer
//! ├── default.toml              # Optional user-edited default preset
//! └── presets/
//!     └── custom/               # Saved presets
//!         ├── props.toml
//!         └── hero_assets.toml
//! ```

use std::path::{Path, PathBuf};

/// Environment variable overriding the home directory
pub const HOME_ENV: &str = "MESH_INSPECTOR_HOME";

/// Home directory name under the user's home
const HOME_DIR: &str = ".mesh-inspector";

/// Global config filename
const CONFIG_FILE: &str = "config.toml";

/// Default preset filename
const DEFAULT_PRESET_FILE: &str = "default.toml";

/// Saved presets subdirectory
const CUSTOM_PRESETS_DIR: &str = "presets/custom";

/// Resolve the tool home directory.
///
/// Precedence: explicit override, then `$MESH_INSPECTOR_HOME`, then
/// `~/.mesh-inspector/`.
#[must_use]
pub fn home_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Some(path) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(path);
    }
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(HOME_DIR)
}

/// Get the global config file path.
///
/// Returns `<home>/config.toml`. Holds the current-preset pointer.
#[must_use]
pub fn config_file(home: &Path) -> PathBuf {
    home.join(CONFIG_FILE)
}

/// Get the default preset file path.
///
/// Returns `<home>/default.toml`. Used as the fallback preset when present.
#[must_use]
pub fn default_preset_file(home: &Path) -> PathBuf {
    home.join(DEFAULT_PRESET_FILE)
}

/// Get the saved presets directory.
///
/// Returns `<home>/presets/custom/`.
#[must_use]
pub fn custom_presets_dir(home: &Path) -> PathBuf {
    home.join(CUSTOM_PRESETS_DIR)
}
