//! Select command - hand the failures of one check to the host

use std::path::{Path, PathBuf};

use mesh_inspector::adapters::{PresetStore, SelectionFile, SelectionList, load_scene};
use mesh_inspector::core::services::{CheckRegistry, run_single};
use mesh_inspector::output::{OutputMode, SelectResult};
use mesh_inspector::session::select_failures;

use super::common::{check_name, scene_objects};

/// Run one check and select its error nodes
///
/// Options come from the current preset even when the check is disabled there.
pub fn select(
    scene: &Path,
    check: &str,
    patterns: &[String],
    output: Option<PathBuf>,
    home: &Path,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let registry = CheckRegistry::builtin();
    let check = check_name(&registry, check)?;
    let scene = load_scene(scene)?;

    let loaded = PresetStore::new(home.to_path_buf()).load_current(&registry);
    let options = loaded.preset.entry(&check).map(|e| e.options.clone()).unwrap_or_default();

    let (objects, unmatched) = scene_objects(&scene, patterns)?;
    for pattern in &unmatched {
        log::warn!("No object matches {pattern}");
    }
    let outcome = run_single(&registry, &scene, &objects, &check, &options)?;

    if let Some(path) = &output {
        select_failures(&outcome, &mut SelectionFile::new(path.clone()))?;
    }
    let mut list = SelectionList::new();
    select_failures(&outcome, &mut list)?;

    let result = SelectResult {
        check,
        targets: list.targets().to_vec(),
        output: output.map(|p| p.display().to_string()),
    };
    result.render(mode);

    Ok(())
}
