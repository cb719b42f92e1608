//! Tests for output serialization

use mesh_inspector::core::models::{Discrepancy, ObjectRef, Preset, Report};
use mesh_inspector::core::services::{CheckOutcome, InspectStatus, Inspection};
use mesh_inspector::output::{InspectResult, OperationResult, PresetResult, SelectResult};

use crate::common::fixtures::refs;

fn lamina_outcome() -> CheckOutcome {
    let mut report = Report::new();
    report.push(
        Discrepancy::new(ObjectRef::new("card"), "Object has 2 lamina face(s)")
            .with_components(vec![ObjectRef::new("card").face(0), ObjectRef::new("card").face(1)]),
    );
    CheckOutcome::from_report("lamina_faces", Some("Geometry".to_string()), &refs(&["crate_v001", "card"]), &report)
}

#[test]
fn inspect_result_json_shape() {
    let result = InspectResult {
        preset: "Default Preset".to_string(),
        unmatched: vec!["lamp*".to_string()],
        inspection: Inspection {
            status: InspectStatus::Completed,
            objects_checked: 2,
            outcomes: vec![lamina_outcome()],
        },
    };

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["preset"], "Default Preset");
    assert_eq!(json["status"], "completed");
    assert_eq!(json["unmatched"][0], "lamp*");

    let outcome = &json["outcomes"][0];
    assert_eq!(outcome["check"], "lamina_faces");
    assert_eq!(outcome["category"], "Geometry");
    assert_eq!(outcome["passed"], false);
    assert_eq!(outcome["objects"][0]["passed"], true);
    assert!(outcome["objects"][0].get("message").is_none());
    assert_eq!(outcome["objects"][1]["components"][1], "card.f[1]");
    assert_eq!(outcome["error_nodes"], serde_json::json!(["card.f[0]", "card.f[1]"]));
}

#[test]
fn select_result_json_omits_missing_output() {
    let result = SelectResult {
        check: "lamina_faces".to_string(),
        targets: vec!["card.f[0]".to_string()],
        output: None,
    };
    let json = serde_json::to_value(&result).unwrap();
    assert!(json.get("output").is_none());
    assert_eq!(json["targets"][0], "card.f[0]");
}

#[test]
fn preset_result_serializes_preset_layout() {
    let result = PresetResult {
        name: "props".to_string(),
        path: None,
        fallback: false,
        preset: Preset::default(),
    };
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["preset"]["category"][0]["name"], "Geometry");
    assert_eq!(json["preset"]["category"][0]["check"][0]["check"], "triangle_count");
    assert_eq!(json["preset"]["category"][0]["check"][0]["enabled"], true);
}

#[test]
fn operation_result_ok() {
    let result = OperationResult::ok("Enabled lamina_faces");
    assert!(result.success);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["message"], "Enabled lamina_faces");
}
