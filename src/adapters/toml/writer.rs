//! TOML writer for preset files

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::core::models::Preset;

/// Format a preset as TOML with a header comment
pub fn format_preset(preset: &Preset) -> anyhow::Result<String> {
    let mut out = String::from("# mesh-inspector preset\n\n");
    out.push_str(&toml::to_string_pretty(preset)?);
    Ok(out)
}

/// Write a preset file, creating parent directories
pub fn write_preset(path: &Path, preset: &Preset) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, format_preset(preset)?)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log::debug!("Wrote preset {} to {}", preset.name, path.display());
    Ok(())
}
