//! The built-in checks
//!
//! Each check takes the objects to inspect and returns a [`Report`] listing the
//! ones that failed, in input order. Duplicate references are inspected once.
//! Checks only read the scene.

use std::collections::HashSet;

use crate::core::models::{Discrepancy, ObjectRef, Report};
use crate::core::ports::{SceneError, SceneQuery};

/// Iterate over references, skipping repeats
fn distinct(objects: &[ObjectRef]) -> impl Iterator<Item = &ObjectRef> {
    let mut seen = HashSet::new();
    objects.iter().filter(move |o| seen.insert(o.as_str()))
}

/// Fail objects with more than `max_triangles` triangles
pub fn triangle_count(
    scene: &dyn SceneQuery,
    objects: &[ObjectRef],
    max_triangles: usize,
) -> Result<Report, SceneError> {
    let mut report = Report::new();
    for obj in distinct(objects) {
        let count = scene.triangle_count(obj)?;
        if count > max_triangles {
            report.push(Discrepancy::new(
                obj.clone(),
                format!("Object has {count} triangles and exceeds {max_triangles} maximum count"),
            ));
        }
    }
    Ok(report)
}

/// Fail objects containing lamina faces, listing the faces
pub fn lamina_faces(scene: &dyn SceneQuery, objects: &[ObjectRef]) -> Result<Report, SceneError> {
    let mut report = Report::new();
    for obj in distinct(objects) {
        let faces = scene.lamina_faces(obj)?;
        if !faces.is_empty() {
            let message = format!("Object has {} lamina face(s)", faces.len());
            report.push(Discrepancy::new(obj.clone(), message).with_components(faces));
        }
    }
    Ok(report)
}

/// Fail objects without any UV shell
pub fn missing_uv_shells(
    scene: &dyn SceneQuery,
    objects: &[ObjectRef],
) -> Result<Report, SceneError> {
    let mut report = Report::new();
    for obj in distinct(objects) {
        if scene.uv_shell_count(obj)? == 0 {
            report.push(Discrepancy::new(obj.clone(), "Object has no uv shells"));
        }
    }
    Ok(report)
}

/// Fail objects whose name does not contain every required prefix
///
/// Each prefix is tested on its own; empty prefixes are ignored. Only the
/// object name is inspected, so no scene is needed.
#[must_use]
pub fn naming_convention<S: AsRef<str>>(objects: &[ObjectRef], required_prefixes: &[S]) -> Report {
    let prefixes: Vec<&str> =
        required_prefixes.iter().map(AsRef::as_ref).filter(|p| !p.is_empty()).collect();

    distinct(objects)
        .filter_map(|obj| {
            let missing: Vec<&str> =
                prefixes.iter().copied().filter(|p| !obj.as_str().contains(p)).collect();
            if missing.is_empty() {
                return None;
            }
            Some(Discrepancy::new(
                obj.clone(),
                format!("Object name {obj} doesn't have {} prefix", missing.join(", ")),
            ))
        })
        .collect()
}

/// Fail objects whose history holds more than the creation node
pub fn construction_history(
    scene: &dyn SceneQuery,
    objects: &[ObjectRef],
) -> Result<Report, SceneError> {
    let mut report = Report::new();
    for obj in distinct(objects) {
        let nodes = scene.history_len(obj)?;
        if nodes > 1 {
            report.push(Discrepancy::new(obj.clone(), format!("Object has history ({nodes} nodes)")));
        }
    }
    Ok(report)
}
