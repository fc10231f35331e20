//! Package build status
//!
//! Recomputes, on demand, which packages already have artifacts and where
//! a resumed build would start.

use serde::Serialize;

use crate::core::builder::compute_resume_point;
use crate::core::layout::PackageLayout;
use crate::error::{BuildError, FilesystemError};

/// Build state of one package
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageStatus {
    /// Package identifier
    pub package: String,
    /// Artifacts currently in its output directory
    pub artifacts: usize,
    /// Whether it counts as built
    pub built: bool,
}

/// Status of the whole catalog
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    /// Per-package state, in catalog order
    pub packages: Vec<PackageStatus>,
    /// First package a resumed build would compile
    pub resume_from: Option<String>,
}

impl StatusReport {
    /// Number of built packages
    pub fn built_count(&self) -> usize {
        self.packages.iter().filter(|p| p.built).count()
    }
}

/// Inspect every package's output directory
pub fn package_status(
    layout: &PackageLayout,
    catalog: &[String],
) -> Result<StatusReport, FilesystemError> {
    let mut packages = Vec::with_capacity(catalog.len());
    for package in catalog {
        let artifacts = layout.artifact_count(package)?;
        packages.push(PackageStatus {
            package: package.clone(),
            artifacts,
            built: artifacts > 0,
        });
    }

    let resume_from = match compute_resume_point(layout, catalog) {
        Ok(remaining) => remaining.first().cloned(),
        Err(BuildError::Filesystem(e)) => return Err(e),
        Err(_) => None,
    };

    Ok(StatusReport {
        packages,
        resume_from,
    })
}
