//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::Preset;
use crate::core::services::{CheckDefinition, InspectStatus, Inspection};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// Result of an inspect operation
#[derive(Debug, Serialize)]
pub struct InspectResult {
    /// Display name of the preset that ran
    pub preset: String,
    /// Object patterns that matched nothing in the scene
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unmatched: Vec<String>,
    /// The inspection
    #[serde(flatten)]
    pub inspection: Inspection,
}

impl InspectResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        for pattern in &self.unmatched {
            println!("{} no object matches {pattern}", "warning:".yellow().bold());
        }

        match self.inspection.status {
            InspectStatus::NothingSelected => {
                println!("Nothing is selected");
                return;
            },
            InspectStatus::NothingChecked => {
                println!("Nothing is checked");
                return;
            },
            InspectStatus::Completed => {},
        }

        println!(
            "{} {} ({} object(s))\n",
            "Preset:".cyan().bold(),
            self.preset,
            self.inspection.objects_checked
        );

        for outcome in &self.inspection.outcomes {
            let status = if outcome.passed { "PASS".green() } else { "FAIL".red() };
            let label = outcome
                .category
                .as_ref()
                .map_or_else(|| outcome.check.clone(), |c| format!("{c} / {}", outcome.check));
            println!("  {status} {label}");

            for failure in outcome.failures() {
                let message = failure.message.as_deref().unwrap_or_default();
                println!("       {} {}", failure.object.as_str().bold(), message.yellow());
            }
        }

        let failed = self.inspection.failed().count();
        println!();
        if failed == 0 {
            println!("{} all {} check(s) passed", "PASSED".green().bold(), self.inspection.outcomes.len());
        } else {
            println!(
                "{} {failed} of {} check(s) failed",
                "FAILED".red().bold(),
                self.inspection.outcomes.len()
            );
        }
    }
}

/// Result of a select operation
#[derive(Debug, Serialize)]
pub struct SelectResult {
    /// Check whose failures were selected
    pub check: String,
    /// Selected nodes
    pub targets: Vec<String>,
    /// File the selection was written to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl SelectResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if let Some(path) = &self.output {
                    println!("Selected {} node(s) into {path}", self.targets.len());
                } else if self.targets.is_empty() {
                    println!("Nothing to select: {} passed", self.check);
                } else {
                    self.targets.iter().for_each(|t| println!("{t}"));
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// An option in a check's schema
#[derive(Debug, Serialize)]
pub struct OptionInfo {
    /// Option name
    pub name: String,
    /// Value type
    pub kind: String,
    /// Default value
    pub default: String,
    /// What the option controls
    pub description: String,
}

/// A registered check
#[derive(Debug, Serialize)]
pub struct CheckInfo {
    /// Check name
    pub name: String,
    /// One-line description
    pub description: String,
    /// Option schema
    pub options: Vec<OptionInfo>,
}

impl From<&CheckDefinition> for CheckInfo {
    fn from(definition: &CheckDefinition) -> Self {
        Self {
            name: definition.name.clone(),
            description: definition.description.clone(),
            options: definition
                .options
                .iter()
                .map(|o| OptionInfo {
                    name: o.name.to_string(),
                    kind: o.kind().to_string(),
                    default: o.default.to_string(),
                    description: o.description.to_string(),
                })
                .collect(),
        }
    }
}

/// Result of listing the registered checks
#[derive(Debug, Serialize)]
pub struct CheckListResult {
    /// Checks in registration order
    pub checks: Vec<CheckInfo>,
}

impl CheckListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for check in &self.checks {
                    println!("{}", check.name.bold());
                    println!("    {}", check.description);
                    for option in &check.options {
                        println!(
                            "    --{} <{}> (default: {})  {}",
                            option.name,
                            option.kind,
                            option.default,
                            option.description.dimmed()
                        );
                    }
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Result of showing a preset
#[derive(Debug, Serialize)]
pub struct PresetResult {
    /// Display name
    pub name: String,
    /// Backing file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// True when the current preset could not be loaded
    pub fallback: bool,
    /// The preset
    pub preset: Preset,
}

impl PresetResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("{} {}", "Preset:".cyan().bold(), self.name);
        if let Some(path) = &self.path {
            println!("{} {path}", "File:".dimmed());
        }
        if self.fallback {
            println!("{} current preset could not be loaded", "warning:".yellow().bold());
        }

        for category in &self.preset.categories {
            println!("\n{}", category.name.bold());
            for entry in category.checks.iter().filter(|e| e.visible) {
                let mark = if entry.enabled { "[x]".green() } else { "[ ]".normal() };
                let options: Vec<String> =
                    entry.options.iter().map(|(k, v)| format!("{k}={v}")).collect();
                if options.is_empty() {
                    println!("  {mark} {}", entry.check);
                } else {
                    println!("  {mark} {} {}", entry.check, options.join(" ").dimmed());
                }
            }
        }

        let hidden: Vec<&str> =
            self.preset.entries().filter(|(_, e)| !e.visible).map(|(_, e)| e.check.as_str()).collect();
        if !hidden.is_empty() {
            println!("\n{} {}", "Removed:".dimmed(), hidden.join(", "));
        }
    }
}

/// A saved preset file
#[derive(Debug, Serialize)]
pub struct PresetFileInfo {
    /// Display name
    pub name: String,
    /// File path
    pub path: String,
    /// Whether this is the current preset
    pub current: bool,
}

/// Result of listing saved presets
#[derive(Debug, Serialize)]
pub struct PresetListResult {
    /// Saved presets, sorted by path
    pub presets: Vec<PresetFileInfo>,
}

impl PresetListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.presets.is_empty() {
                    println!("No saved presets.");
                    return;
                }
                for preset in &self.presets {
                    let marker = if preset.current { "*" } else { " " };
                    println!("{marker} {} {}", preset.name, preset.path.dimmed());
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Successful operation
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
