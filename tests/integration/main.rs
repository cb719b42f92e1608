//! Integration tests for the mesh-inspector CLI
//!
//! These tests run the binary against scenes written to a temporary
//! directory, with a temporary tool home for presets.


use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[path = "../common/fixtures.rs"]
#[allow(dead_code)]
mod fixtures;

use fixtures::SCENE_OBJ;

/// Helper function to create a mesh-inspector command with an isolated home
fn inspector(home: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("mesh-inspector"));
    cmd.arg("--home").arg(home).env_remove("RUST_LOG");
    cmd
}

/// Temp dir with `props.obj` (crate_v001 clean, card_lamina failing)
fn scene_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("props.obj"), SCENE_OBJ).unwrap();
    dir
}

// =============================================================================
// Basic commands
// =============================================================================

#[test]
fn test_version() {
    let home = TempDir::new().unwrap();
    inspector(home.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mesh-inspector v"));
}

#[test]
fn test_version_json() {
    let home = TempDir::new().unwrap();
    inspector(home.path())
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn test_no_command_prints_hint() {
    let home = TempDir::new().unwrap();
    inspector(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("--help"));
}

#[test]
fn test_checks_lists_registry() {
    let home = TempDir::new().unwrap();
    inspector(home.path())
        .arg("checks")
        .assert()
        .success()
        .stdout(predicate::str::contains("triangle_count"))
        .stdout(predicate::str::contains("construction_history"))
        .stdout(predicate::str::contains("--max <integer>"));
}

// =============================================================================
// Inspect
// =============================================================================

#[test]
fn test_inspect_failing_scene_exits_non_zero() {
    let home = TempDir::new().unwrap();
    let scene = scene_dir();
    inspector(home.path())
        .arg("inspect")
        .arg(scene.path().join("props.obj"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("FAIL"))
        .stdout(predicate::str::contains("card_lamina"))
        .stdout(predicate::str::contains("Object has no uv shells"));
}

#[test]
fn test_unmapped_object_next_to_mapped_one_fails_uv_check() {
    let home = TempDir::new().unwrap();
    let scene = scene_dir();
    let output = inspector(home.path())
        .arg("--json")
        .arg("inspect")
        .arg(scene.path().join("props.obj"))
        .args(["-c", "missing_uv_shells"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["outcomes"][0]["error_nodes"], serde_json::json!(["card_lamina"]));
}

#[test]
fn test_inspect_clean_object_passes() {
    let home = TempDir::new().unwrap();
    let scene = scene_dir();
    inspector(home.path())
        .arg("inspect")
        .arg(scene.path().join("props.obj"))
        .args(["-o", "crate_*"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PASSED"));
}

#[test]
fn test_inspect_json_output() {
    let home = TempDir::new().unwrap();
    let scene = scene_dir();
    let output = inspector(home.path())
        .arg("--json")
        .arg("inspect")
        .arg(scene.path().join("props.obj"))
        .args(["-c", "lamina-faces"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "completed");
    assert_eq!(json["objects_checked"], 2);
    assert_eq!(json["outcomes"].as_array().unwrap().len(), 1);
    assert_eq!(
        json["outcomes"][0]["error_nodes"],
        serde_json::json!(["card_lamina.f[0]", "card_lamina.f[1]"])
    );
}

#[test]
fn test_inspect_option_override() {
    let home = TempDir::new().unwrap();
    let scene = scene_dir();
    inspector(home.path())
        .arg("inspect")
        .arg(scene.path().join("props.obj"))
        .args(["-o", "crate_v001", "-c", "triangle_count", "--set", "triangle_count.max=5"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("12 triangles"));
}

#[test]
fn test_inspect_bad_override_is_an_error() {
    let home = TempDir::new().unwrap();
    let scene = scene_dir();
    inspector(home.path())
        .arg("inspect")
        .arg(scene.path().join("props.obj"))
        .args(["--set", "triangle_count.max=lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max"));
}

#[test]
fn test_inspect_unmatched_pattern_nothing_selected() {
    let home = TempDir::new().unwrap();
    let scene = scene_dir();
    inspector(home.path())
        .arg("inspect")
        .arg(scene.path().join("props.obj"))
        .args(["-o", "lamp_*"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no object matches lamp_*"))
        .stdout(predicate::str::contains("Nothing is selected"));
}

#[test]
fn test_inspect_unknown_check() {
    let home = TempDir::new().unwrap();
    let scene = scene_dir();
    inspector(home.path())
        .arg("inspect")
        .arg(scene.path().join("props.obj"))
        .args(["-c", "polygon_soup"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown check"));
}

#[test]
fn test_inspect_missing_scene() {
    let home = TempDir::new().unwrap();
    inspector(home.path())
        .args(["inspect", "does/not/exist.obj"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Scene not found"));
}

// =============================================================================
// Select
// =============================================================================

#[test]
fn test_select_prints_error_nodes() {
    let home = TempDir::new().unwrap();
    let scene = scene_dir();
    inspector(home.path())
        .arg("select")
        .arg(scene.path().join("props.obj"))
        .args(["-c", "lamina_faces"])
        .assert()
        .success()
        .stdout(predicate::eq("card_lamina.f[0]\ncard_lamina.f[1]\n"));
}

#[test]
fn test_select_writes_file() {
    let home = TempDir::new().unwrap();
    let scene = scene_dir();
    let out = scene.path().join("selection.txt");
    inspector(home.path())
        .arg("select")
        .arg(scene.path().join("props.obj"))
        .args(["-c", "naming_convention", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected 1 node(s)"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "card_lamina\n");
}

#[test]
fn test_select_clean_check() {
    let home = TempDir::new().unwrap();
    let scene = scene_dir();
    inspector(home.path())
        .arg("select")
        .arg(scene.path().join("props.obj"))
        .args(["-c", "construction_history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to select"));
}
