//! Preset store
//!
//! Presets live under the tool home directory. The config file points at
//! the current one; when the pointer is missing or the file is unusable the
//! default preset is used instead.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::config::GlobalConfig;
use crate::core::models::{DEFAULT_PRESET_NAME, Preset};
use crate::core::services::CheckRegistry;
use crate::paths;

use super::parser::{preset_name_from_path, read_preset};
use super::writer::write_preset;

/// A preset together with where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedPreset {
    /// Display name
    pub name: String,
    /// Backing file (None for the built-in default)
    pub path: Option<PathBuf>,
    /// The preset
    pub preset: Preset,
    /// True when the current-preset pointer could not be followed
    pub fallback: bool,
}

impl LoadedPreset {
    fn builtin() -> Self {
        Self {
            name: DEFAULT_PRESET_NAME.to_string(),
            path: None,
            preset: Preset::default_preset(),
            fallback: false,
        }
    }
}

/// Preset persistence rooted at a home directory
#[derive(Debug, Clone)]
pub struct PresetStore {
    home: PathBuf,
}

impl PresetStore {
    /// Create a store for the given home directory
    #[must_use]
    pub const fn new(home: PathBuf) -> Self {
        Self { home }
    }

    /// The home directory
    #[must_use]
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Directory where saved presets go
    #[must_use]
    pub fn custom_dir(&self) -> PathBuf {
        paths::custom_presets_dir(&self.home)
    }

    /// Find a preset file: the path as given, then under the custom directory
    #[must_use]
    pub fn resolve(&self, path: &Path) -> Option<PathBuf> {
        if path.is_file() {
            return Some(path.to_path_buf());
        }
        let in_custom = self.custom_dir().join(path.file_name()?);
        in_custom.is_file().then_some(in_custom)
    }

    /// Where `save` writes: bare file names go to the custom directory
    #[must_use]
    pub fn save_target(&self, path: &Path) -> PathBuf {
        let mut target = if path.is_absolute() || path.components().count() > 1 {
            path.to_path_buf()
        } else {
            self.custom_dir().join(path)
        };
        if target.extension().is_none() {
            target.set_extension("toml");
        }
        target
    }

    /// Saved presets, sorted by path
    pub fn list(&self) -> anyhow::Result<Vec<PathBuf>> {
        let pattern = self.custom_dir().join("*.toml");
        let pattern = pattern.to_string_lossy();
        let mut presets = glob::glob(&pattern)
            .with_context(|| format!("Invalid preset pattern: {pattern}"))?
            .filter_map(Result::ok)
            .collect::<Vec<_>>();
        presets.sort();
        Ok(presets)
    }

    /// Read and validate a preset file
    pub fn read(&self, path: &Path, registry: &CheckRegistry) -> anyhow::Result<LoadedPreset> {
        let resolved =
            self.resolve(path).with_context(|| format!("Preset not found: {}", path.display()))?;
        let mut preset = read_preset(&resolved)?;
        registry
            .validate_preset(&preset)
            .with_context(|| format!("Invalid preset {}", resolved.display()))?;

        let name = preset_name_from_path(&resolved);
        preset.name.clone_from(&name);
        Ok(LoadedPreset {
            name,
            path: Some(resolved),
            preset,
            fallback: false,
        })
    }

    /// The preset the pointer names, or the default preset
    ///
    /// Never fails: an unusable pointer is logged and the default is returned
    /// with `fallback` set.
    #[must_use]
    pub fn load_current(&self, registry: &CheckRegistry) -> LoadedPreset {
        let config = GlobalConfig::load(&self.home);
        let Some(pointer) = config.current_preset else {
            return self.load_default(registry);
        };

        match self.read(&pointer.path, registry) {
            Ok(loaded) => loaded,
            Err(e) => {
                log::warn!("Can't load preset {}: {e:#}. Loading default preset.", pointer.name);
                LoadedPreset {
                    fallback: true,
                    ..self.load_default(registry)
                }
            },
        }
    }

    /// `default.toml` when present and valid, otherwise the built-in preset
    #[must_use]
    pub fn load_default(&self, registry: &CheckRegistry) -> LoadedPreset {
        let path = paths::default_preset_file(&self.home);
        if !path.is_file() {
            return LoadedPreset::builtin();
        }

        match read_preset(&path).and_then(|preset| {
            registry.validate_preset(&preset)?;
            Ok(preset)
        }) {
            Ok(mut preset) => {
                preset.name = DEFAULT_PRESET_NAME.to_string();
                LoadedPreset {
                    name: DEFAULT_PRESET_NAME.to_string(),
                    path: Some(path),
                    preset,
                    fallback: false,
                }
            },
            Err(e) => {
                log::warn!("Ignoring invalid default preset {}: {e:#}", path.display());
                LoadedPreset::builtin()
            },
        }
    }

    /// Validate a preset file and make it current
    pub fn load(&self, path: &Path, registry: &CheckRegistry) -> anyhow::Result<LoadedPreset> {
        let loaded = self.read(path, registry)?;
        self.point_at(&loaded)?;
        Ok(loaded)
    }

    /// Save a preset under a new file and make it current
    pub fn save_as(&self, preset: &Preset, path: &Path) -> anyhow::Result<LoadedPreset> {
        let target = self.save_target(path);
        let name = preset_name_from_path(&target);
        let mut preset = preset.clone();
        preset.name.clone_from(&name);
        write_preset(&target, &preset)?;

        let loaded = LoadedPreset {
            name,
            path: Some(target),
            preset,
            fallback: false,
        };
        self.point_at(&loaded)?;
        Ok(loaded)
    }

    /// Write changes back to the preset's own file
    ///
    /// The built-in default has no file; its changes go to `default.toml`.
    pub fn save_current(&self, loaded: &LoadedPreset) -> anyhow::Result<PathBuf> {
        let path = match &loaded.path {
            Some(path) if !loaded.fallback => path.clone(),
            _ => paths::default_preset_file(&self.home),
        };
        write_preset(&path, &loaded.preset)?;
        Ok(path)
    }

    /// Point back at the default preset
    pub fn reset(&self, registry: &CheckRegistry) -> anyhow::Result<LoadedPreset> {
        let mut config = GlobalConfig::load(&self.home);
        config.clear_current_preset();
        config.save(&self.home)?;
        Ok(self.load_default(registry))
    }

    fn point_at(&self, loaded: &LoadedPreset) -> anyhow::Result<()> {
        let Some(path) = &loaded.path else {
            return Ok(());
        };
        let mut config = GlobalConfig::load(&self.home);
        config.set_current_preset(loaded.name.clone(), path.clone());
        config.save(&self.home)
    }
}
