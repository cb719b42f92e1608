//! mesh-inspector - A sanity checker for polygon models
//!
//! This library provides the check registry and result-aggregation model used to
//! validate scene objects (triangle budgets, lamina faces, UV shells, naming and
//! construction history), plus the scene, preset and selection adapters the CLI
//! is built on.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod mesh;
pub mod output;
pub mod paths;
pub mod session;
