//! Clean logic
//!
//! Removes build artifacts from package output directories so the next
//! run rebuilds them. Cleaning every package is the way to force a full
//! rebuild once resume reports nothing left to build.

use serde::Serialize;

use crate::core::layout::PackageLayout;
use crate::error::FilesystemError;

/// Artifacts removed for one package
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanedPackage {
    /// Package identifier
    pub package: String,
    /// Number of artifact files removed
    pub removed: usize,
}

/// Result of clean operation
#[derive(Debug, Default, Serialize)]
pub struct CleanResult {
    /// Per-package counts, in catalog order
    pub packages: Vec<CleanedPackage>,
}

impl CleanResult {
    /// Total artifacts removed
    pub fn total_removed(&self) -> usize {
        self.packages.iter().map(|p| p.removed).sum()
    }
}

/// Remove the artifacts of each listed package
pub fn clean_packages(
    layout: &PackageLayout,
    packages: &[String],
) -> Result<CleanResult, FilesystemError> {
    let mut result = CleanResult::default();

    for package in packages {
        let removed = layout.clear_artifacts(package)?;
        result.packages.push(CleanedPackage {
            package: package.clone(),
            removed,
        });
    }

    tracing::info!(
        "Removed {} artifacts across {} packages",
        result.total_removed(),
        packages.len()
    );
    Ok(result)
}
