//! Helpers shared by the commands

use mesh_inspector::adapters::InMemoryScene;
use mesh_inspector::core::models::{ObjectRef, Preset};
use mesh_inspector::core::ports::SceneQuery;
use mesh_inspector::core::services::{CheckRegistry, select_objects};

/// Registry name for user input (`lamina-faces` and `lamina_faces` both work)
pub fn check_name(registry: &CheckRegistry, raw: &str) -> anyhow::Result<String> {
    let name = raw.trim().replace('-', "_");
    registry.require(&name)?;
    Ok(name)
}

/// Set one option from `CHECK.OPTION=VALUE`
pub fn apply_override(registry: &CheckRegistry, preset: &mut Preset, raw: &str) -> anyhow::Result<()> {
    let Some((key, value)) = raw.split_once('=') else {
        anyhow::bail!("Invalid override '{raw}'. Expected: CHECK.OPTION=VALUE");
    };
    let Some((check, option)) = key.split_once('.') else {
        anyhow::bail!("Invalid override '{raw}'. Expected: CHECK.OPTION=VALUE");
    };
    set_option(registry, preset, check, option, value)
}

/// Parse a raw value against the check's schema and store it in the preset
pub fn set_option(
    registry: &CheckRegistry,
    preset: &mut Preset,
    check: &str,
    option: &str,
    value: &str,
) -> anyhow::Result<()> {
    let check = check_name(registry, check)?;
    let value = registry.require(&check)?.parse_option(option, value)?;
    preset.set_option(&check, option, value)?;
    Ok(())
}

/// Objects to inspect: every scene object, or those matching the patterns
///
/// Returns the objects and the patterns that matched nothing.
pub fn scene_objects(
    scene: &InMemoryScene,
    patterns: &[String],
) -> anyhow::Result<(Vec<ObjectRef>, Vec<String>)> {
    let all = scene.objects();
    if patterns.is_empty() {
        return Ok((all, Vec::new()));
    }
    let (selected, unmatched) = select_objects(&all, patterns)?;
    Ok((selected, unmatched.into_iter().map(String::from).collect()))
}
