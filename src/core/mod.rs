//! Core domain logic for mesh-inspector
//!
//! This module contains pure inspection logic with no I/O dependencies.
//! Scene access goes through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`ObjectRef`, `Discrepancy`, `Report`, `Preset`)
//! - `services/` - The checks, the check registry and the inspection runner
//! - `ports/` - Trait definitions for the host scene and selection

pub mod error;
pub mod models;
pub mod ports;
pub mod services;

pub use error::CheckError;
