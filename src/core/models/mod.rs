//! Domain models for mesh-inspector
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`ObjectRef`] / [`ComponentRef`] - Names of scene objects and their sub-elements
//! - [`Discrepancy`] / [`Report`] - What a check found
//! - [`BuiltinCheck`] - The checks shipped with the tool
//! - [`OptionValue`] / [`OptionSpec`] - Per-check configuration
//! - [`Preset`] - Which checks are enabled, visible and how they are configured

mod check;
mod discrepancy;
mod object;
mod options;
mod preset;

pub use check::BuiltinCheck;
pub use discrepancy::{Discrepancy, Report};
pub use object::{ComponentRef, ObjectRef};
pub use options::{CheckOptions, OptionKind, OptionSpec, OptionValue};
pub use preset::{Category, DEFAULT_PRESET_NAME, Preset, PresetEntry, PresetError};
