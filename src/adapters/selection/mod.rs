//! Selection sinks
//!
//! Implements [`Selection`] for hosts that consume a list of node names:
//! an in-memory list and a plain text file with one name per line.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;

use crate::core::ports::Selection;

/// Selection recorded in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionList {
    targets: Vec<String>,
}

impl SelectionList {
    /// An empty selection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected targets
    #[must_use]
    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    /// Whether nothing is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl Selection for SelectionList {
    fn select(&mut self, targets: &[String]) -> anyhow::Result<()> {
        self.targets = targets.to_vec();
        Ok(())
    }
}

/// Selection written to a file, one target per line
#[derive(Debug, Clone)]
pub struct SelectionFile {
    path: PathBuf,
}

impl SelectionFile {
    /// Sink writing to `path`
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Selection for SelectionFile {
    fn select(&mut self, targets: &[String]) -> anyhow::Result<()> {
        let mut content = targets.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write selection to {}", self.path.display()))?;
        log::debug!("Selected {} node(s) into {}", targets.len(), self.path.display());
        Ok(())
    }
}
