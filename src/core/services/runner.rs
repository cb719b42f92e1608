//! Inspection runner - runs a preset's checks over an object list
//!
//! Turns individual [`Report`]s into per-check, per-object outcomes: every
//! inspected object is listed as passed or failed, and each failing check
//! carries the nodes to select in the host.

use std::collections::HashSet;

use serde::Serialize;

use crate::core::CheckError;
use crate::core::models::{CheckOptions, ComponentRef, ObjectRef, Preset, Report};
use crate::core::ports::SceneQuery;

use super::registry::CheckRegistry;

/// How an inspection ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InspectStatus {
    /// Checks ran
    Completed,
    /// There were no objects to inspect
    NothingSelected,
    /// The preset has no enabled check
    NothingChecked,
}

/// Result for one object under one check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectOutcome {
    /// The inspected object
    pub object: ObjectRef,
    /// Whether it passed
    pub passed: bool,
    /// Failure reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Implicated sub-elements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<ComponentRef>>,
}

/// Result of one check over the inspected objects
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    /// Check name
    pub check: String,
    /// Preset category the check was run from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// True when no object failed
    pub passed: bool,
    /// Every inspected object, in inspection order
    pub objects: Vec<ObjectOutcome>,
    /// Nodes to select to show every failure of this check
    pub error_nodes: Vec<String>,
}

impl CheckOutcome {
    /// Build the outcome of a check from its report
    #[must_use]
    pub fn from_report(
        check: impl Into<String>,
        category: Option<String>,
        objects: &[ObjectRef],
        report: &Report,
    ) -> Self {
        let outcomes = objects
            .iter()
            .map(|obj| match report.find(obj) {
                Some(d) => ObjectOutcome {
                    object: obj.clone(),
                    passed: false,
                    message: Some(d.message.clone()),
                    components: d.components.clone(),
                },
                None => ObjectOutcome {
                    object: obj.clone(),
                    passed: true,
                    message: None,
                    components: None,
                },
            })
            .collect();

        Self {
            check: check.into(),
            category,
            passed: report.is_clean(),
            objects: outcomes,
            error_nodes: report.selection_targets(),
        }
    }

    /// Objects that failed this check
    pub fn failures(&self) -> impl Iterator<Item = &ObjectOutcome> {
        self.objects.iter().filter(|o| !o.passed)
    }
}

/// Result of running a preset over an object list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inspection {
    /// How the run ended
    pub status: InspectStatus,
    /// Number of distinct objects inspected
    pub objects_checked: usize,
    /// One outcome per check run, in preset order
    pub outcomes: Vec<CheckOutcome>,
}

impl Inspection {
    const fn empty(status: InspectStatus, objects_checked: usize) -> Self {
        Self {
            status,
            objects_checked,
            outcomes: Vec::new(),
        }
    }

    /// True when every check that ran passed
    #[must_use]
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    /// Checks that failed
    pub fn failed(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }

    /// Outcome of a check by name
    #[must_use]
    pub fn outcome(&self, check: &str) -> Option<&CheckOutcome> {
        self.outcomes.iter().find(|o| o.check == check)
    }
}

/// Drop repeated references, keeping first occurrences
#[must_use]
pub fn dedup_objects(objects: &[ObjectRef]) -> Vec<ObjectRef> {
    let mut seen = HashSet::new();
    objects.iter().filter(|o| seen.insert(o.as_str())).cloned().collect()
}

/// Run every active check of a preset over the objects
///
/// Checks run in category order, then entry order.
pub fn inspect(
    registry: &CheckRegistry,
    scene: &dyn SceneQuery,
    objects: &[ObjectRef],
    preset: &Preset,
) -> Result<Inspection, CheckError> {
    let objects = dedup_objects(objects);
    if objects.is_empty() {
        log::info!("Nothing is selected");
        return Ok(Inspection::empty(InspectStatus::NothingSelected, 0));
    }

    let active: Vec<_> = preset.active_entries().collect();
    if active.is_empty() {
        log::info!("Nothing is checked");
        return Ok(Inspection::empty(InspectStatus::NothingChecked, objects.len()));
    }

    let mut outcomes = Vec::with_capacity(active.len());
    for (category, entry) in active {
        let report = registry.run(&entry.check, scene, &objects, &entry.options)?;
        outcomes.push(CheckOutcome::from_report(
            entry.check.clone(),
            Some(category.to_string()),
            &objects,
            &report,
        ));
    }

    Ok(Inspection {
        status: InspectStatus::Completed,
        objects_checked: objects.len(),
        outcomes,
    })
}

/// Run one check by name, regardless of any preset
pub fn run_single(
    registry: &CheckRegistry,
    scene: &dyn SceneQuery,
    objects: &[ObjectRef],
    check: &str,
    options: &CheckOptions,
) -> Result<CheckOutcome, CheckError> {
    let objects = dedup_objects(objects);
    let report = registry.run(check, scene, &objects, options)?;
    Ok(CheckOutcome::from_report(check, None, &objects, &report))
}
