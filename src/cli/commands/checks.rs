//! Checks command - list the registry

use mesh_inspector::core::services::CheckRegistry;
use mesh_inspector::output::{CheckInfo, CheckListResult, OutputMode};

/// List registered checks and their option schemas
#[allow(clippy::unnecessary_wraps)]
pub fn checks(mode: OutputMode) -> anyhow::Result<()> {
    let registry = CheckRegistry::builtin();
    let result = CheckListResult {
        checks: registry.definitions().iter().map(CheckInfo::from).collect(),
    };
    result.render(mode);
    Ok(())
}
