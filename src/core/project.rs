//! Loaded project context
//!
//! Resolves a manifest against its directory and merges compiler settings
//! from the CLI, the manifest and the global config, in that order.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::builder::BuildSettings;
use crate::core::error_log::ErrorLog;
use crate::core::global_config::GlobalConfig;
use crate::core::layout::PackageLayout;
use crate::core::manifest::{Manifest, StageConfig};
use crate::error::ManifestError;

/// A manifest resolved against its install root
#[derive(Debug, Clone)]
pub struct Project {
    /// Validated manifest
    pub manifest: Manifest,
    /// Install root all layout paths hang off
    pub install_root: PathBuf,
    /// Package -> directory mapping
    pub layout: PackageLayout,
}

impl Project {
    /// Load `pickup.toml` from `project_dir`
    pub fn load(project_dir: &Path) -> Result<Self, ManifestError> {
        let manifest = Manifest::load(project_dir)?;
        Ok(Self::from_manifest(manifest, project_dir))
    }

    /// Resolve an already parsed manifest
    pub fn from_manifest(manifest: Manifest, project_dir: &Path) -> Self {
        let install_root = manifest.install_root(project_dir);
        let layout = PackageLayout::from_manifest(&manifest, &install_root);
        Self {
            manifest,
            install_root,
            layout,
        }
    }

    /// Ordered package catalog
    pub fn catalog(&self) -> &[String] {
        &self.manifest.packages.order
    }

    /// The shared compile error log
    pub fn error_log(&self) -> ErrorLog {
        ErrorLog::new(self.install_root.join(&self.manifest.layout.error_log))
    }

    /// Settings for a [`crate::core::builder::PackageBuilder`]
    pub fn build_settings(&self) -> BuildSettings {
        BuildSettings {
            layout: self.layout.clone(),
            error_log: self.error_log(),
            extra_args: self.manifest.compiler.extra_args.clone(),
        }
    }

    /// javac to run: CLI override, then manifest, then global config
    pub fn javac(&self, cli_override: Option<&str>, global: &GlobalConfig) -> String {
        cli_override
            .or(self.manifest.compiler.javac.as_deref())
            .unwrap_or_else(|| global.javac())
            .to_string()
    }

    /// Watchdog timeout: manifest, then global config, else none
    pub fn compiler_timeout(&self, global: &GlobalConfig) -> Option<Duration> {
        self.manifest
            .compiler
            .timeout_secs
            .or(global.compiler.timeout_secs)
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Staging table with `trunk_dir` resolved against the install root
    pub fn stage_config(&self) -> Option<StageConfig> {
        self.manifest.stage.as_ref().map(|stage| StageConfig {
            trunk_dir: self.install_root.join(&stage.trunk_dir),
            files: stage.files.clone(),
        })
    }
}
