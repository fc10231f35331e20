//! CLI implementation for `pickup stage` command
//!
//! Copies the files listed under `[stage.files]` from the trunk checkout
//! into the project's source tree.

use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::output::{is_json, print_detail, print_json, print_success};
use crate::core::stage::{stage_sources, StageAction};
use crate::error::StageError;

use super::load_project;

/// Execute the stage command
pub async fn execute(project_dir: &Path) -> Result<()> {
    let project = load_project(project_dir)?;
    let stage = project.stage_config().ok_or(StageError::NotConfigured)?;

    let result = stage_sources(&stage, &project.layout)
        .with_context(|| format!("Failed to stage sources from {}", stage.trunk_dir.display()))?;

    if is_json() {
        print_json(&serde_json::to_value(&result)?);
        return Ok(());
    }

    for file in result.files.iter().filter(|f| f.action != StageAction::Unchanged) {
        print_detail(&format!("{} -> {}", file.from.display(), file.to.display()));
    }
    print_success(&format!(
        "Staged {} files ({} new, {} updated, {} unchanged)",
        result.files.len(),
        result.count(StageAction::Created),
        result.count(StageAction::Updated),
        result.count(StageAction::Unchanged)
    ));

    Ok(())
}
