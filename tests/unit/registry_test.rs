//! Tests for the check registry and the inspection runner

use mesh_inspector::core::CheckError;
use mesh_inspector::core::models::{
    Category, CheckOptions, Discrepancy, ObjectRef, OptionValue, Preset, PresetEntry, Report,
};
use mesh_inspector::core::ports::SceneQuery;
use mesh_inspector::core::services::{
    CheckDefinition, CheckRegistry, InspectStatus, inspect, run_single,
};

use crate::common::fixtures::{refs, sample_scene};

fn always_fails(
    _scene: &dyn SceneQuery,
    objects: &[ObjectRef],
    _options: &CheckOptions,
) -> Result<Report, CheckError> {
    Ok(objects
        .iter()
        .map(|o| Discrepancy::new(o.clone(), "custom failure"))
        .collect())
}

#[test]
fn custom_checks_can_be_registered() {
    let mut registry = CheckRegistry::builtin();
    registry
        .register(CheckDefinition::new("always_fails", "Fails everything", always_fails))
        .unwrap();
    assert_eq!(registry.len(), 6);

    let outcome = run_single(
        &registry,
        &sample_scene(),
        &refs(&["card"]),
        "always_fails",
        &CheckOptions::new(),
    )
    .unwrap();
    assert!(!outcome.passed);
    assert_eq!(outcome.error_nodes, vec!["card"]);
}

#[test]
fn duplicate_registration_rejected() {
    let mut registry = CheckRegistry::builtin();
    let err = registry
        .register(CheckDefinition::new("lamina_faces", "again", always_fails))
        .unwrap_err();
    assert!(matches!(err, CheckError::DuplicateCheck(name) if name == "lamina_faces"));
}

#[test]
fn unknown_check_rejected() {
    let result = run_single(
        &CheckRegistry::builtin(),
        &sample_scene(),
        &refs(&["card"]),
        "polygon_soup",
        &CheckOptions::new(),
    );
    assert!(matches!(result, Err(CheckError::UnknownCheck(_))));
}

#[test]
fn option_defaults_are_filled() {
    let registry = CheckRegistry::builtin();
    let resolved = registry.resolve_options("triangle_count", &CheckOptions::new()).unwrap();
    assert_eq!(resolved.get("max"), Some(&OptionValue::Integer(10_000)));
}

#[test]
fn wrong_option_type_rejected() {
    let registry = CheckRegistry::builtin();
    let mut overrides = CheckOptions::new();
    overrides.insert("max".to_string(), OptionValue::Text("lots".to_string()));
    assert!(matches!(
        registry.resolve_options("triangle_count", &overrides),
        Err(CheckError::InvalidOption { .. })
    ));
}

#[test]
fn negative_budget_rejected_at_run() {
    let mut overrides = CheckOptions::new();
    overrides.insert("max".to_string(), OptionValue::Integer(-1));
    let result = run_single(
        &CheckRegistry::builtin(),
        &sample_scene(),
        &refs(&["card"]),
        "triangle_count",
        &overrides,
    );
    assert!(matches!(result, Err(CheckError::InvalidOption { .. })));
}

#[test]
fn preset_with_unknown_check_fails_validation() {
    let mut preset = Preset::new("custom");
    preset.categories.push(Category {
        name: "Rigging".to_string(),
        checks: vec![PresetEntry::new("joint_orient")],
    });
    assert!(CheckRegistry::builtin().validate_preset(&preset).is_err());
    assert!(CheckRegistry::builtin().validate_preset(&Preset::default()).is_ok());
}

#[test]
fn inspect_sample_scene_with_default_preset() {
    let scene = sample_scene();
    let mut preset = Preset::default();
    preset.set_option("triangle_count", "max", OptionValue::Integer(1000)).unwrap();

    let inspection =
        inspect(&CheckRegistry::builtin(), &scene, &scene.objects(), &preset).unwrap();
    assert_eq!(inspection.status, InspectStatus::Completed);
    assert_eq!(inspection.objects_checked, 3);

    let failed: Vec<_> = inspection.failed().map(|o| o.check.as_str()).collect();
    assert_eq!(
        failed,
        vec![
            "triangle_count",
            "lamina_faces",
            "missing_uv_shells",
            "naming_convention",
            "construction_history"
        ]
    );

    let naming = inspection.outcome("naming_convention").unwrap();
    assert_eq!(naming.error_nodes, vec!["card"]);
    let history = inspection.outcome("construction_history").unwrap();
    assert_eq!(history.error_nodes, vec!["hero_v003"]);
}

#[test]
fn inspect_with_everything_unchecked() {
    let scene = sample_scene();
    let mut preset = Preset::default();
    for category in ["Geometry", "UVs", "Scene"] {
        preset.uncheck_all(category).unwrap();
    }
    let inspection =
        inspect(&CheckRegistry::builtin(), &scene, &scene.objects(), &preset).unwrap();
    assert_eq!(inspection.status, InspectStatus::NothingChecked);
    assert!(inspection.passed());
}
