//! Preset management command - show, save, load and edit presets

use std::path::Path;

use mesh_inspector::adapters::PresetStore;
use mesh_inspector::adapters::toml::preset_name_from_path;
use mesh_inspector::config::GlobalConfig;
use mesh_inspector::core::models::Preset;
use mesh_inspector::core::services::CheckRegistry;
use mesh_inspector::output::{
    OperationResult, OutputMode, PresetFileInfo, PresetListResult, PresetResult,
};

use super::common::{check_name, set_option};
use crate::cli::app::PresetAction;

/// Handle preset subcommands
pub fn preset(action: PresetAction, home: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let registry = CheckRegistry::builtin();
    let store = PresetStore::new(home.to_path_buf());

    match action {
        PresetAction::Show => {
            show(&store, &registry, mode);
            Ok(())
        },
        PresetAction::List => list(&store, mode),
        PresetAction::Save { file } => {
            let current = store.load_current(&registry);
            let saved = store.save_as(&current.preset, &file)?;
            let path = saved.path.as_deref().unwrap_or(&file).display().to_string();
            OperationResult::ok(format!("Saved preset '{}' to {path}", saved.name)).render(mode);
            Ok(())
        },
        PresetAction::Load { file } => {
            let loaded = store.load(&file, &registry)?;
            OperationResult::ok(format!("Loaded preset '{}'", loaded.name)).render(mode);
            Ok(())
        },
        PresetAction::Reset => {
            let loaded = store.reset(&registry)?;
            OperationResult::ok(format!("Loaded '{}'", loaded.name)).render(mode);
            Ok(())
        },
        PresetAction::Enable { check } => edit(&store, &registry, mode, |preset| {
            let check = check_name(&registry, &check)?;
            preset.set_enabled(&check, true)?;
            Ok(format!("Enabled {check}"))
        }),
        PresetAction::Disable { check } => edit(&store, &registry, mode, |preset| {
            let check = check_name(&registry, &check)?;
            preset.set_enabled(&check, false)?;
            Ok(format!("Disabled {check}"))
        }),
        PresetAction::Set {
            check,
            option,
            value,
        } => edit(&store, &registry, mode, |preset| {
            set_option(&registry, preset, &check, &option, &value)?;
            Ok(format!("Set {check}.{option} = {value}"))
        }),
        PresetAction::CheckAll { category } => edit(&store, &registry, mode, |preset| {
            preset.check_all(&category)?;
            Ok(format!("Checked all in {category}"))
        }),
        PresetAction::UncheckAll { category } => edit(&store, &registry, mode, |preset| {
            preset.uncheck_all(&category)?;
            Ok(format!("Unchecked all in {category}"))
        }),
        PresetAction::Invert { category } => edit(&store, &registry, mode, |preset| {
            preset.invert(&category)?;
            Ok(format!("Inverted {category}"))
        }),
        PresetAction::RemoveChecked { category } => edit(&store, &registry, mode, |preset| {
            let removed = preset.remove_checked(&category)?;
            if removed.is_empty() {
                Ok(format!("Nothing checked in {category}"))
            } else {
                Ok(format!("Removed {}", removed.join(", ")))
            }
        }),
        PresetAction::Add { check } => edit(&store, &registry, mode, |preset| {
            let check = check_name(&registry, &check)?;
            if preset.add_check(&check)? {
                Ok(format!("Added {check}"))
            } else {
                Ok(format!("{check} is already in the preset"))
            }
        }),
    }
}

fn show(store: &PresetStore, registry: &CheckRegistry, mode: OutputMode) {
    let loaded = store.load_current(registry);
    let result = PresetResult {
        name: loaded.name,
        path: loaded.path.map(|p| p.display().to_string()),
        fallback: loaded.fallback,
        preset: loaded.preset,
    };
    result.render(mode);
}

fn list(store: &PresetStore, mode: OutputMode) -> anyhow::Result<()> {
    let current = GlobalConfig::load(store.home()).current_preset.map(|p| p.path);
    let presets = store
        .list()?
        .into_iter()
        .map(|path| PresetFileInfo {
            name: preset_name_from_path(&path),
            current: current.as_deref() == Some(path.as_path()),
            path: path.display().to_string(),
        })
        .collect();
    PresetListResult { presets }.render(mode);
    Ok(())
}

/// Apply a change to the current preset and save it back
fn edit(
    store: &PresetStore,
    registry: &CheckRegistry,
    mode: OutputMode,
    change: impl FnOnce(&mut Preset) -> anyhow::Result<String>,
) -> anyhow::Result<()> {
    let mut loaded = store.load_current(registry);
    let message = change(&mut loaded.preset)?;
    let path = store.save_current(&loaded)?;
    log::debug!("Saved preset {} to {}", loaded.name, path.display());
    OperationResult::ok(message).render(mode);
    Ok(())
}
