//! Source staging
//!
//! Copies listed source files from a trunk checkout into the staged source
//! tree the builder compiles from. Files already identical to the trunk
//! copy (by SHA-256) are left alone.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::defaults;
use crate::core::layout::PackageLayout;
use crate::core::manifest::StageConfig;
use crate::error::StageError;
use crate::infra::filesystem;

/// What happened to one staged file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageAction {
    /// Destination did not exist
    Created,
    /// Destination differed and was overwritten
    Updated,
    /// Destination already matched the trunk copy
    Unchanged,
}

/// One staged file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StagedFile {
    /// Package the file belongs to
    pub package: String,
    /// Trunk source path
    pub from: PathBuf,
    /// Staged destination path
    pub to: PathBuf,
    /// What was done
    pub action: StageAction,
}

/// Result of a staging pass
#[derive(Debug, Default, Serialize)]
pub struct StageResult {
    /// Every file considered, in package then listing order
    pub files: Vec<StagedFile>,
}

impl StageResult {
    /// Number of files with the given action
    pub fn count(&self, action: StageAction) -> usize {
        self.files.iter().filter(|f| f.action == action).count()
    }
}

fn source_file(dir: &Path, stem: &str) -> PathBuf {
    dir.join(format!("{stem}.{}", defaults::SOURCE_EXTENSION))
}

/// Copy every file listed in `stage` into the layout's source tree
///
/// All trunk files are checked for existence before anything is copied, so
/// a typo in the listing leaves the staged tree untouched.
pub fn stage_sources(
    stage: &StageConfig,
    layout: &PackageLayout,
) -> Result<StageResult, StageError> {
    let trunk = PackageLayout::new(&stage.trunk_dir, layout.class_root());

    let mut plan = Vec::new();
    for (package, stems) in &stage.files {
        let trunk_dir = trunk.source_dir(package);
        let staged_dir = layout.source_dir(package);
        for stem in stems {
            let from = source_file(&trunk_dir, stem);
            if !from.is_file() {
                return Err(StageError::MissingSource { path: from });
            }
            plan.push((package, from, source_file(&staged_dir, stem)));
        }
    }

    let mut result = StageResult::default();
    for (package, from, to) in plan {
        let action = if !to.exists() {
            StageAction::Created
        } else if filesystem::sha256_file(&from)? == filesystem::sha256_file(&to)? {
            StageAction::Unchanged
        } else {
            StageAction::Updated
        };

        if action == StageAction::Unchanged {
            tracing::debug!("Unchanged {}", to.display());
        } else {
            tracing::info!("Going to copy {} ---> {}", from.display(), to.display());
            filesystem::copy_file(&from, &to)?;
        }

        result.files.push(StagedFile {
            package: package.clone(),
            from,
            to,
            action,
        });
    }

    Ok(result)
}
