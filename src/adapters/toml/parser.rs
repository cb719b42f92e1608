//! TOML parser for preset files
//!
//! Handles reading and deserializing presets and deriving display names.

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::core::models::Preset;

/// Separators in preset file names
const NAME_SEPARATORS: [char; 2] = ['_', '.'];

/// File-name tokens that are not part of a preset's display name
const EXTENSIONS: [&str; 2] = ["toml", "txt"];

/// Display name for a preset file
///
/// The file name is split on `_` and `.`, extensions dropped, and the rest
/// joined with spaces: `hero_assets.toml` becomes `hero assets`.
#[must_use]
pub fn preset_name_from_path(path: &Path) -> String {
    let file_name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    file_name
        .split(NAME_SEPARATORS)
        .filter(|part| !part.is_empty() && !EXTENSIONS.contains(&part.to_ascii_lowercase().as_str()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a preset from TOML text
pub fn parse_preset(content: &str) -> anyhow::Result<Preset> {
    Ok(toml::from_str(content)?)
}

/// Read a preset file
pub fn read_preset(path: &Path) -> anyhow::Result<Preset> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    parse_preset(&content).with_context(|| format!("Failed to parse {}", path.display()))
}
