//! Inspect command - run a preset over a scene

use std::path::{Path, PathBuf};

use mesh_inspector::adapters::{PresetStore, load_scene};
use mesh_inspector::core::services::CheckRegistry;
use mesh_inspector::output::{InspectResult, OutputMode};
use mesh_inspector::session::Session;

use super::common::{apply_override, check_name, scene_objects};

/// Arguments of the inspect command
#[derive(Debug)]
pub struct InspectArgs {
    /// Scene path
    pub scene: PathBuf,
    /// Object patterns
    pub objects: Vec<String>,
    /// Checks to run instead of the preset's selection
    pub checks: Vec<String>,
    /// Preset file overriding the current preset
    pub preset: Option<PathBuf>,
    /// `CHECK.OPTION=VALUE` overrides
    pub overrides: Vec<String>,
}

/// Run the preset over the scene; exits non-zero when a check fails
pub fn inspect(args: &InspectArgs, home: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let registry = CheckRegistry::builtin();
    let scene = load_scene(&args.scene)?;

    let store = PresetStore::new(home.to_path_buf());
    let loaded = match &args.preset {
        Some(path) => store.read(path, &registry)?,
        None => store.load_current(&registry),
    };

    let mut preset = loaded.preset;
    if !args.checks.is_empty() {
        let names =
            args.checks.iter().map(|c| check_name(&registry, c)).collect::<anyhow::Result<Vec<_>>>()?;
        preset = preset.restricted_to(&names);
    }
    for raw in &args.overrides {
        apply_override(&registry, &mut preset, raw)?;
    }

    let (objects, unmatched) = scene_objects(&scene, &args.objects)?;
    let mut session = Session::new(preset, loaded.name);
    session.add_objects(&scene, &objects);
    let inspection = session.inspect(&registry, &scene)?;
    let passed = inspection.passed();

    let result = InspectResult {
        preset: session.preset_name().to_string(),
        unmatched,
        inspection,
    };
    result.render(mode);

    if !passed {
        std::process::exit(1);
    }

    Ok(())
}
