//! Inspection session
//!
//! Holds the objects queued for inspection and the preset to run, and hands
//! failures to a [`Selection`] sink.

use std::collections::HashSet;

use serde::Serialize;

use crate::core::CheckError;
use crate::core::models::{DEFAULT_PRESET_NAME, ObjectRef, Preset};
use crate::core::ports::{SceneQuery, Selection};
use crate::core::services::{CheckOutcome, CheckRegistry, Inspection, inspect};

/// What happened to each reference passed to [`Session::add_objects`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AddOutcome {
    /// Newly queued objects
    pub added: Vec<ObjectRef>,
    /// Objects that were already queued
    pub already_added: Vec<ObjectRef>,
    /// References the scene does not know
    pub unknown: Vec<ObjectRef>,
}

/// Objects and preset for one inspection workflow
#[derive(Debug, Clone)]
pub struct Session {
    objects: Vec<ObjectRef>,
    preset: Preset,
    preset_name: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Preset::default_preset(), DEFAULT_PRESET_NAME)
    }
}

impl Session {
    /// Empty session running `preset`
    #[must_use]
    pub fn new(preset: Preset, preset_name: impl Into<String>) -> Self {
        Self {
            objects: Vec::new(),
            preset,
            preset_name: preset_name.into(),
        }
    }

    /// Queued objects, in the order they were added
    #[must_use]
    pub fn objects(&self) -> &[ObjectRef] {
        &self.objects
    }

    /// The preset that will run
    #[must_use]
    pub const fn preset(&self) -> &Preset {
        &self.preset
    }

    /// Mutable access to the preset
    pub const fn preset_mut(&mut self) -> &mut Preset {
        &mut self.preset
    }

    /// Display name of the preset
    #[must_use]
    pub fn preset_name(&self) -> &str {
        &self.preset_name
    }

    /// Switch to another preset, keeping the queued objects
    pub fn set_preset(&mut self, preset: Preset, name: impl Into<String>) {
        self.preset = preset;
        self.preset_name = name.into();
    }

    /// Queue objects known to the scene
    ///
    /// Repeated references, within the call or across calls, are queued once.
    pub fn add_objects(&mut self, scene: &dyn SceneQuery, objects: &[ObjectRef]) -> AddOutcome {
        let mut outcome = AddOutcome::default();
        let mut queued: HashSet<String> =
            self.objects.iter().map(|o| o.as_str().to_string()).collect();

        for object in objects {
            if !scene.contains(object) {
                outcome.unknown.push(object.clone());
            } else if queued.insert(object.as_str().to_string()) {
                self.objects.push(object.clone());
                outcome.added.push(object.clone());
            } else {
                outcome.already_added.push(object.clone());
            }
        }

        if !outcome.already_added.is_empty() {
            let names: Vec<_> = outcome.already_added.iter().map(ObjectRef::as_str).collect();
            log::info!("Already added: {}", names.join(", "));
        }
        outcome
    }

    /// Drop objects from the queue, returning how many were removed
    pub fn remove_objects(&mut self, objects: &[ObjectRef]) -> usize {
        let before = self.objects.len();
        self.objects.retain(|o| !objects.contains(o));
        before - self.objects.len()
    }

    /// Empty the queue
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Run the preset over the queued objects
    pub fn inspect(
        &self,
        registry: &CheckRegistry,
        scene: &dyn SceneQuery,
    ) -> Result<Inspection, CheckError> {
        inspect(registry, scene, &self.objects, &self.preset)
    }
}

/// Select the error nodes of one check outcome
pub fn select_failures(outcome: &CheckOutcome, selection: &mut dyn Selection) -> anyhow::Result<()> {
    selection.select(&outcome.error_nodes)
}
