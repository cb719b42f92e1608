//! Global configuration management
//!
//! Provides persistent storage for tool state between runs.
//! Config is stored at `<home>/config.toml` (see [`paths`]).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::paths;

/// Global mesh-inspector configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Preset loaded at startup (None = default preset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_preset: Option<PresetPointer>,
}

/// Reference to the current preset file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetPointer {
    /// Display name
    pub name: String,
    /// Preset file path, absolute or relative to the custom presets directory
    pub path: PathBuf,
    /// When the pointer was last moved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl PresetPointer {
    /// Pointer stamped with the current time
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            updated_at: Some(Utc::now()),
        }
    }
}

impl GlobalConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path(home: &Path) -> PathBuf {
        paths::config_file(home)
    }

    /// Load config from disk, or default if missing or unreadable
    #[must_use]
    pub fn load(home: &Path) -> Self {
        let path = Self::config_path(home);
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path).map_err(anyhow::Error::from).and_then(|content| {
            toml::from_str(&content).map_err(anyhow::Error::from)
        }) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring unreadable config {}: {e}", path.display());
                Self::default()
            },
        }
    }

    /// Save config to disk
    pub fn save(&self, home: &Path) -> anyhow::Result<()> {
        fs::create_dir_all(home)
            .with_context(|| format!("Failed to create {}", home.display()))?;

        let path = Self::config_path(home);
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Point at a preset file
    pub fn set_current_preset(&mut self, name: impl Into<String>, path: impl Into<PathBuf>) {
        self.current_preset = Some(PresetPointer::new(name, path));
    }

    /// Forget the current preset (back to default)
    pub fn clear_current_preset(&mut self) {
        self.current_preset = None;
    }
}
