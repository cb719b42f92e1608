//! TOML-based preset storage
//!
//! - [`parser`] - Read preset files and derive display names
//! - [`writer`] - Write preset files
//! - [`store`] - Current-preset pointer, default fallback, save/load/reset

pub mod parser;
pub mod store;
pub mod writer;

pub use parser::{parse_preset, preset_name_from_path, read_preset};
pub use store::{LoadedPreset, PresetStore};
pub use writer::{format_preset, write_preset};
