//! Package layout
//!
//! Maps a package identifier to its staged source directory and to the
//! output directory its artifacts land in, and answers the two questions
//! resume depends on: does a package have artifacts, and how to remove them.
//!
//! A package `examp4enc` under prefix `net.danburfoot` with class root
//! `jclass` has its artifacts in `jclass/net/danburfoot/examp4enc/*.class`.

use std::path::{Path, PathBuf};

use crate::core::manifest::Manifest;
use crate::error::FilesystemError;
use crate::infra::filesystem;

/// Deterministic package -> directory mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageLayout {
    source_root: PathBuf,
    class_root: PathBuf,
    package_prefix: Option<String>,
    artifact_extension: String,
}

/// Turn a dotted identifier into a relative path
fn package_path(id: &str) -> PathBuf {
    id.split('.').collect()
}

impl PackageLayout {
    /// Create a layout from explicit roots
    pub fn new(source_root: impl Into<PathBuf>, class_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            class_root: class_root.into(),
            package_prefix: None,
            artifact_extension: crate::config::defaults::ARTIFACT_EXTENSION.to_string(),
        }
    }

    /// Set the package prefix used for output paths
    #[must_use]
    pub fn with_package_prefix(mut self, prefix: Option<String>) -> Self {
        self.package_prefix = prefix;
        self
    }

    /// Set the artifact extension
    #[must_use]
    pub fn with_artifact_extension(mut self, extension: impl Into<String>) -> Self {
        self.artifact_extension = extension.into();
        self
    }

    /// Build the layout described by a manifest, rooted at `install_root`
    pub fn from_manifest(manifest: &Manifest, install_root: &Path) -> Self {
        Self::new(
            install_root.join(&manifest.layout.source_dir),
            install_root.join(&manifest.layout.class_dir),
        )
        .with_package_prefix(manifest.layout.package_prefix.clone())
        .with_artifact_extension(manifest.layout.artifact_extension.clone())
    }

    /// Root of all artifacts
    pub fn class_root(&self) -> &Path {
        &self.class_root
    }

    /// Staged source directory of a package
    pub fn source_dir(&self, package: &str) -> PathBuf {
        self.source_root.join(package_path(package))
    }

    /// Artifact output directory of a package
    pub fn output_dir(&self, package: &str) -> PathBuf {
        let mut dir = self.class_root.clone();
        if let Some(prefix) = &self.package_prefix {
            dir.push(package_path(prefix));
        }
        dir.push(package_path(package));
        dir
    }

    /// Artifact files currently present for a package
    pub fn artifacts(&self, package: &str) -> Result<Vec<PathBuf>, FilesystemError> {
        filesystem::list_files_with_extension(&self.output_dir(package), &self.artifact_extension)
    }

    /// Number of artifacts currently present for a package
    pub fn artifact_count(&self, package: &str) -> Result<usize, FilesystemError> {
        self.artifacts(package).map(|files| files.len())
    }

    /// Whether a package has at least one artifact
    pub fn has_artifacts(&self, package: &str) -> Result<bool, FilesystemError> {
        self.artifact_count(package).map(|count| count > 0)
    }

    /// Remove every artifact of a package, returning how many were removed
    ///
    /// Only artifact files are touched; the directory itself and any other
    /// files in it stay.
    pub fn clear_artifacts(&self, package: &str) -> Result<usize, FilesystemError> {
        let artifacts = self.artifacts(package)?;
        for path in &artifacts {
            filesystem::remove_file(path)?;
        }
        if !artifacts.is_empty() {
            tracing::debug!("Removed {} artifacts for package '{package}'", artifacts.len());
        }
        Ok(artifacts.len())
    }
}
