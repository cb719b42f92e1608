//! Tests for the TOML preset store

use std::fs;
use std::path::Path;

use mesh_inspector::adapters::PresetStore;
use mesh_inspector::adapters::toml::{read_preset, write_preset};
use mesh_inspector::config::GlobalConfig;
use mesh_inspector::core::models::{DEFAULT_PRESET_NAME, OptionValue, Preset};
use mesh_inspector::core::services::CheckRegistry;
use mesh_inspector::paths;
use tempfile::TempDir;

fn store() -> (TempDir, PresetStore) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let store = PresetStore::new(dir.path().to_path_buf());
    (dir, store)
}

#[test]
fn save_load_cycle() {
    let (_dir, store) = store();
    let registry = CheckRegistry::builtin();

    let mut preset = Preset::default();
    preset.set_option("triangle_count", "max", OptionValue::Integer(2500)).unwrap();
    store.save_as(&preset, Path::new("game_props.toml")).unwrap();
    store.reset(&registry).unwrap();
    assert_eq!(store.load_current(&registry).name, DEFAULT_PRESET_NAME);

    let loaded = store.load(Path::new("game_props.toml"), &registry).unwrap();
    assert_eq!(loaded.name, "game props");
    assert_eq!(
        loaded.preset.entry("triangle_count").unwrap().options.get("max"),
        Some(&OptionValue::Integer(2500))
    );
    assert_eq!(store.load_current(&registry).name, "game props");
}

#[test]
fn saved_file_is_readable_toml() {
    let (_dir, store) = store();
    let saved = store.save_as(&Preset::default(), Path::new("props")).unwrap();
    let path = saved.path.unwrap();

    assert_eq!(path.extension().unwrap(), "toml");
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("[[category]]"));
    assert_eq!(read_preset(&path).unwrap().name, "props");
}

#[test]
fn pointer_to_corrupt_file_falls_back() {
    let (dir, store) = store();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "this is = = not toml").unwrap();

    let mut config = GlobalConfig::default();
    config.set_current_preset("broken", &path);
    config.save(store.home()).unwrap();

    let loaded = store.load_current(&CheckRegistry::builtin());
    assert!(loaded.fallback);
    assert_eq!(loaded.preset, Preset::default());
}

#[test]
fn pointer_resolves_relative_to_custom_dir() {
    let (_dir, store) = store();
    write_preset(&store.custom_dir().join("rigs.toml"), &Preset::default()).unwrap();

    let mut config = GlobalConfig::default();
    config.set_current_preset("rigs", "rigs.toml");
    config.save(store.home()).unwrap();

    let loaded = store.load_current(&CheckRegistry::builtin());
    assert!(!loaded.fallback);
    assert_eq!(loaded.name, "rigs");
}

#[test]
fn edits_to_default_go_to_default_file() {
    let (_dir, store) = store();
    let registry = CheckRegistry::builtin();

    let mut loaded = store.load_current(&registry);
    loaded.preset.set_enabled("naming_convention", false).unwrap();
    store.save_current(&loaded).unwrap();

    assert!(paths::default_preset_file(store.home()).is_file());
    let reloaded = store.load_current(&registry);
    assert!(!reloaded.preset.entry("naming_convention").unwrap().enabled);
}

#[test]
fn list_only_returns_toml_files() {
    let (_dir, store) = store();
    store.save_as(&Preset::default(), Path::new("b.toml")).unwrap();
    store.save_as(&Preset::default(), Path::new("a.toml")).unwrap();
    fs::write(store.custom_dir().join("readme.md"), "notes").unwrap();

    let names: Vec<_> = store
        .list()
        .unwrap()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.toml", "b.toml"]);
}
