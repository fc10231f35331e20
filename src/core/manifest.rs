//! Manifest (pickup.toml) parsing and validation
//!
//! The manifest is the main configuration file for a pickup project. It
//! holds the ordered package catalog, the source/artifact layout, compiler
//! settings and the optional source staging table.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::config::defaults;
use crate::error::ManifestError;
use crate::infra::filesystem;

/// Manifest file name
pub const MANIFEST_FILE: &str = "pickup.toml";

/// The main project manifest (pickup.toml)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Manifest {
    /// Project configuration
    pub project: ProjectConfig,

    /// Source and artifact layout
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Compiler settings
    #[serde(default)]
    pub compiler: CompilerConfig,

    /// Ordered package catalog
    pub packages: PackagesConfig,

    /// Source staging from a trunk checkout
    #[serde(default)]
    pub stage: Option<StageConfig>,
}

/// Project-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectConfig {
    /// Project name
    pub name: String,

    /// Install root, relative to the manifest directory when not absolute
    #[serde(default)]
    pub install_dir: Option<PathBuf>,
}

/// Source and artifact layout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Staged source root (one directory per package)
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// Artifact root, passed to the compiler as both `-d` and `-cp`
    #[serde(default = "default_class_dir")]
    pub class_dir: PathBuf,

    /// Package prefix prepended to every identifier for output paths
    #[serde(default)]
    pub package_prefix: Option<String>,

    /// Extension of build artifacts
    #[serde(default = "default_artifact_extension")]
    pub artifact_extension: String,

    /// Shared compile error log
    #[serde(default = "default_error_log")]
    pub error_log: PathBuf,
}

fn default_source_dir() -> PathBuf {
    PathBuf::from(defaults::SOURCE_DIR)
}

fn default_class_dir() -> PathBuf {
    PathBuf::from(defaults::CLASS_DIR)
}

fn default_artifact_extension() -> String {
    defaults::ARTIFACT_EXTENSION.to_string()
}

fn default_error_log() -> PathBuf {
    PathBuf::from(defaults::ERROR_LOG)
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            class_dir: default_class_dir(),
            package_prefix: None,
            artifact_extension: default_artifact_extension(),
            error_log: default_error_log(),
        }
    }
}

/// Compiler settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CompilerConfig {
    /// Compiler binary; falls back to the global config
    #[serde(default)]
    pub javac: Option<String>,

    /// Arguments passed to every compiler invocation
    #[serde(default)]
    pub extra_args: Vec<String>,

    /// Watchdog timeout per package
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Ordered package catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PackagesConfig {
    /// Package identifiers in build order
    #[serde(default)]
    pub order: Vec<String>,
}

/// Source staging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StageConfig {
    /// Trunk source root to copy from
    pub trunk_dir: PathBuf,

    /// Source file stems to copy, per package
    #[serde(default)]
    pub files: BTreeMap<String, Vec<String>>,
}

fn package_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$")
            .expect("Invalid package identifier pattern")
    })
}

fn class_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("Invalid class name pattern")
    })
}

/// Check whether a string is a dotted Java package identifier
pub fn is_valid_package_id(id: &str) -> bool {
    package_pattern().is_match(id)
}

/// Check whether a string is a bare Java class name (a source file stem)
pub fn is_valid_class_name(name: &str) -> bool {
    class_name_pattern().is_match(name)
}

impl Manifest {
    /// Parse a manifest from TOML without validating it
    pub fn from_toml(content: &str) -> Result<Self, ManifestError> {
        toml::from_str(content).map_err(|e| ManifestError::ParseError(e.to_string()))
    }

    /// Load and validate `pickup.toml` from a project directory
    pub fn load(project_dir: &Path) -> Result<Self, ManifestError> {
        let path = project_dir.join(MANIFEST_FILE);
        if !path.exists() {
            return Err(ManifestError::NotFound { path });
        }

        let content = filesystem::read_file(&path).map_err(|e| ManifestError::ReadError {
            path: path.clone(),
            error: e.to_string(),
        })?;

        let manifest = Self::from_toml(&content)?;
        manifest.validate()?;
        tracing::debug!(
            "Loaded manifest for '{}' with {} packages",
            manifest.project.name,
            manifest.packages.order.len()
        );
        Ok(manifest)
    }

    /// Validate the package catalog, prefix and staging table
    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.packages.order.is_empty() {
            return Err(ManifestError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for package in &self.packages.order {
            if !is_valid_package_id(package) {
                return Err(ManifestError::InvalidPackage {
                    package: package.clone(),
                });
            }
            if !seen.insert(package.as_str()) {
                return Err(ManifestError::DuplicatePackage {
                    package: package.clone(),
                });
            }
        }

        if let Some(prefix) = &self.layout.package_prefix {
            if !is_valid_package_id(prefix) {
                return Err(ManifestError::InvalidPrefix {
                    prefix: prefix.clone(),
                });
            }
        }

        if let Some(stage) = &self.stage {
            if let Some(package) = stage.files.keys().find(|p| !seen.contains(p.as_str())) {
                return Err(ManifestError::UnknownStagePackage {
                    package: package.clone(),
                });
            }
            for (package, stems) in &stage.files {
                if let Some(stem) = stems.iter().find(|s| !is_valid_class_name(s)) {
                    return Err(ManifestError::InvalidStageFile {
                        package: package.clone(),
                        file: stem.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Resolve the install root against the manifest directory
    pub fn install_root(&self, project_dir: &Path) -> PathBuf {
        match &self.project.install_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => project_dir.join(dir),
            None => project_dir.to_path_buf(),
        }
    }
}
