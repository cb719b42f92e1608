//! Preset model
//!
//! A preset is an ordered list of categories, each holding check entries with
//! an enabled flag, a visible flag and option overrides. Hidden entries are
//! "removed" from the working set but kept so they can be added back.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{BuiltinCheck, CheckOptions, OptionValue};

/// Name given to the built-in fallback preset
pub const DEFAULT_PRESET_NAME: &str = "Default Preset";

/// Category that collects checks requested outside of any preset category
const AD_HOC_CATEGORY: &str = "Ad hoc";

/// Errors raised when editing a preset
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresetError {
    /// No category with this name
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// The preset has no entry for this check
    #[error("check not in preset: {0}")]
    UnknownEntry(String),
}

/// A named check configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    /// Display name
    pub name: String,

    /// Categories in display order
    #[serde(default, rename = "category")]
    pub categories: Vec<Category>,
}

/// A group of related checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category name (unique within the preset)
    pub name: String,

    /// Entries in display order
    #[serde(default, rename = "check")]
    pub checks: Vec<PresetEntry>,
}

/// One check as configured by a preset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetEntry {
    /// Registry name of the check
    pub check: String,

    /// Whether the check runs
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Whether the check is part of the working set
    #[serde(default = "default_true")]
    pub visible: bool,

    /// Option overrides (defaults come from the check schema)
    #[serde(default, skip_serializing_if = "CheckOptions::is_empty")]
    pub options: CheckOptions,
}

const fn default_true() -> bool {
    true
}

impl PresetEntry {
    /// A visible, enabled entry with default options
    #[must_use]
    pub fn new(check: impl Into<String>) -> Self {
        Self {
            check: check.into(),
            enabled: true,
            visible: true,
            options: CheckOptions::new(),
        }
    }

    /// Whether the entry takes part in a run
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.enabled && self.visible
    }
}

impl Preset {
    /// An empty preset
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            categories: Vec::new(),
        }
    }

    /// The preset used when no other preset can be loaded
    ///
    /// Every built-in check, enabled and visible, grouped by category.
    #[must_use]
    pub fn default_preset() -> Self {
        let mut preset = Self::new(DEFAULT_PRESET_NAME);
        for check in BuiltinCheck::ALL {
            preset.category_or_insert(check.category()).checks.push(PresetEntry::new(check.name()));
        }
        preset
    }

    /// Iterate over `(category, entry)` pairs in display order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &PresetEntry)> {
        self.categories
            .iter()
            .flat_map(|c| c.checks.iter().map(move |e| (c.name.as_str(), e)))
    }

    /// Entries that run: enabled and visible
    pub fn active_entries(&self) -> impl Iterator<Item = (&str, &PresetEntry)> {
        self.entries().filter(|(_, e)| e.is_active())
    }

    /// The entry for a check, if present
    #[must_use]
    pub fn entry(&self, check: &str) -> Option<&PresetEntry> {
        self.entries().map(|(_, e)| e).find(|e| e.check == check)
    }

    /// Mutable entry for a check
    pub fn entry_mut(&mut self, check: &str) -> Result<&mut PresetEntry, PresetError> {
        self.categories
            .iter_mut()
            .flat_map(|c| c.checks.iter_mut())
            .find(|e| e.check == check)
            .ok_or_else(|| PresetError::UnknownEntry(check.to_string()))
    }

    /// Look up a category by name
    pub fn category_mut(&mut self, name: &str) -> Result<&mut Category, PresetError> {
        self.categories
            .iter_mut()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| PresetError::UnknownCategory(name.to_string()))
    }

    fn category_or_insert(&mut self, name: &str) -> &mut Category {
        let index = match self.categories.iter().position(|c| c.name == name) {
            Some(index) => index,
            None => {
                self.categories.push(Category {
                    name: name.to_string(),
                    checks: Vec::new(),
                });
                self.categories.len() - 1
            },
        };
        &mut self.categories[index]
    }

    /// Enable every visible check of a category
    pub fn check_all(&mut self, category: &str) -> Result<(), PresetError> {
        self.for_visible(category, |e| e.enabled = true)
    }

    /// Disable every visible check of a category
    pub fn uncheck_all(&mut self, category: &str) -> Result<(), PresetError> {
        self.for_visible(category, |e| e.enabled = false)
    }

    /// Flip the enabled flag of every visible check of a category
    pub fn invert(&mut self, category: &str) -> Result<(), PresetError> {
        self.for_visible(category, |e| e.enabled = !e.enabled)
    }

    fn for_visible(
        &mut self,
        category: &str,
        apply: impl FnMut(&mut PresetEntry),
    ) -> Result<(), PresetError> {
        let category = self.category_mut(category)?;
        category.checks.iter_mut().filter(|e| e.visible).for_each(apply);
        Ok(())
    }

    /// Hide (and disable) the checked entries of a category
    ///
    /// Returns the names of the hidden checks.
    pub fn remove_checked(&mut self, category: &str) -> Result<Vec<String>, PresetError> {
        let category = self.category_mut(category)?;
        let mut removed = Vec::new();
        for entry in category.checks.iter_mut().filter(|e| e.is_active()) {
            entry.visible = false;
            entry.enabled = false;
            removed.push(entry.check.clone());
        }
        Ok(removed)
    }

    /// Bring a check back into the working set
    ///
    /// A hidden entry becomes visible and enabled; a visible entry is left as is.
    /// Returns `true` when the entry changed.
    pub fn add_check(&mut self, check: &str) -> Result<bool, PresetError> {
        let entry = self.entry_mut(check)?;
        if entry.visible {
            return Ok(false);
        }
        entry.visible = true;
        entry.enabled = true;
        Ok(true)
    }

    /// Set the enabled flag of one check
    pub fn set_enabled(&mut self, check: &str, enabled: bool) -> Result<(), PresetError> {
        self.entry_mut(check)?.enabled = enabled;
        Ok(())
    }

    /// Override one option of a check
    ///
    /// The value is stored as given; schema validation belongs to the registry.
    pub fn set_option(
        &mut self,
        check: &str,
        option: impl Into<String>,
        value: OptionValue,
    ) -> Result<(), PresetError> {
        self.entry_mut(check)?.options.insert(option.into(), value);
        Ok(())
    }

    /// Copy of this preset where exactly the named checks run
    ///
    /// Checks missing from the preset are appended to an extra category with
    /// default options.
    #[must_use]
    pub fn restricted_to(&self, checks: &[String]) -> Self {
        let mut preset = self.clone();
        for entry in preset.categories.iter_mut().flat_map(|c| c.checks.iter_mut()) {
            let wanted = checks.contains(&entry.check);
            entry.enabled = wanted;
            entry.visible = entry.visible || wanted;
        }
        for check in checks {
            if preset.entry(check).is_none() {
                preset.category_or_insert(AD_HOC_CATEGORY).checks.push(PresetEntry::new(check.clone()));
            }
        }
        preset
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::default_preset()
    }
}
