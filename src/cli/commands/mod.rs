//! Command implementations

mod checks;
mod common;
mod inspect;
mod preset;
mod select;

pub use checks::checks;
pub use inspect::{InspectArgs, inspect};
pub use preset::preset;
pub use select::select;
