//! Selection port
//!
//! Defines how results are handed back to the host for highlighting.

/// Host selection sink
///
/// Receives object names (`crate_v001`) or component names (`crate_v001.f[4]`)
/// and marks them selected, replacing the previous selection.
#[cfg_attr(test, mockall::automock)]
pub trait Selection {
    /// Replace the current selection with the given targets
    fn select(&mut self, targets: &[String]) -> anyhow::Result<()>;
}
