//! Inspection services
//!
//! Pure logic that operates on domain models and reads the scene only through
//! the [`SceneQuery`](crate::core::ports::SceneQuery) port.
//!
//! - [`checks`] - The built-in inspection functions
//! - [`registry`] - Name to check mapping with option schemas
//! - [`runner`] - Runs a preset over an object list and aggregates results
//! - [`matcher`] - Select objects by name pattern

pub mod checks;
pub mod matcher;
pub mod registry;
pub mod runner;

pub use matcher::{ObjectPattern, matches_object, select_objects};
pub use registry::{CheckDefinition, CheckFn, CheckRegistry};
pub use runner::{CheckOutcome, InspectStatus, Inspection, ObjectOutcome, inspect, run_single};
