//! mesh-inspector - Sanity checks for polygon models
//!
//! Runs the check registry over scenes loaded from OBJ files or TOML
//! manifests, manages presets and writes failing nodes for selection.

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

mod cli;

/// Main entry point for the mesh-inspector CLI
fn main() -> anyhow::Result<()> {
    cli::run()
}
