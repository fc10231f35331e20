//! Build orchestration logic
//!
//! Builds an ordered list of packages one at a time, stops at the first
//! package that fails to compile, and can resume a previous run from the
//! first package that has no artifacts yet.
//!
//! Resume only works because a failed package never keeps partial
//! artifacts: the builder clears its output directory before returning.

use std::collections::HashSet;
use std::path::PathBuf;

use serde::Serialize;

use crate::core::compiler::{CompileRequest, Compiler};
use crate::core::error_log::ErrorLog;
use crate::core::layout::PackageLayout;
use crate::error::BuildError;

/// Explicit configuration handed to the builder
#[derive(Debug, Clone)]
pub struct BuildSettings {
    /// Package -> directory mapping
    pub layout: PackageLayout,
    /// Shared compile error log
    pub error_log: ErrorLog,
    /// Arguments passed to every compiler invocation
    pub extra_args: Vec<String>,
}

/// Terminal state of a build run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunOutcome {
    /// Every requested package compiled
    AllBuilt,
    /// The run stopped at a package with compile errors
    Stopped {
        /// Failing package
        package: String,
        /// Diagnostics the compiler produced for it
        diagnostics: String,
        /// Partial artifacts removed from its output directory
        cleared_artifacts: usize,
    },
}

/// Report of one `build_all` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    /// Packages that compiled, in build order
    pub built: Vec<String>,
    /// How the run ended
    pub outcome: RunOutcome,
    /// Packages after the failing one, never handed to the compiler
    pub not_attempted: Vec<String>,
    /// Location of the retained error log
    pub error_log: PathBuf,
}

impl BuildReport {
    /// Whether every package compiled
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, RunOutcome::AllBuilt)
    }

    /// The package the run stopped at, if any
    pub fn failed_package(&self) -> Option<&str> {
        match &self.outcome {
            RunOutcome::AllBuilt => None,
            RunOutcome::Stopped { package, .. } => Some(package.as_str()),
        }
    }
}

/// Progress notifications emitted while building
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildEvent<'a> {
    /// A package is about to be compiled
    Started { index: usize, package: &'a str },
    /// A package finished compiling
    Finished { package: &'a str, succeeded: bool },
}

/// Find where an interrupted run should pick up
///
/// Returns the tail of `catalog` starting at the first package whose output
/// directory has no artifacts. Fails with `NoResumePossible` when every
/// package already has artifacts (or the catalog is empty).
pub fn compute_resume_point<'a>(
    layout: &PackageLayout,
    catalog: &'a [String],
) -> Result<&'a [String], BuildError> {
    for (index, package) in catalog.iter().enumerate() {
        if !layout.has_artifacts(package)? {
            tracing::info!(
                "Resuming at package '{package}' ({} of {} remaining)",
                catalog.len() - index,
                catalog.len()
            );
            return Ok(&catalog[index..]);
        }
        tracing::debug!("Package '{package}' already has artifacts, skipping");
    }
    Err(BuildError::NoResumePossible)
}

/// Restrict the catalog to the requested packages, keeping catalog order
pub fn select_packages(catalog: &[String], requested: &[String]) -> Result<Vec<String>, BuildError> {
    if let Some(unknown) = requested.iter().find(|p| !catalog.contains(p)) {
        return Err(BuildError::UnknownPackage {
            package: unknown.clone(),
        });
    }
    let wanted: HashSet<&str> = requested.iter().map(String::as_str).collect();
    Ok(catalog
        .iter()
        .filter(|p| wanted.contains(p.as_str()))
        .cloned()
        .collect())
}

/// Sequential package builder
#[derive(Debug)]
pub struct PackageBuilder<C> {
    settings: BuildSettings,
    compiler: C,
}

impl<C: Compiler> PackageBuilder<C> {
    /// Create a builder from settings and a compiler
    pub fn new(settings: BuildSettings, compiler: C) -> Self {
        Self { settings, compiler }
    }

    /// Builder settings
    pub fn settings(&self) -> &BuildSettings {
        &self.settings
    }

    /// See [`compute_resume_point`]
    pub fn compute_resume_point<'a>(&self, catalog: &'a [String]) -> Result<&'a [String], BuildError> {
        compute_resume_point(&self.settings.layout, catalog)
    }

    /// Build every package in order, stopping at the first failure
    pub async fn build_all(
        &self,
        packages: &[String],
        extra_args: &[String],
    ) -> Result<BuildReport, BuildError> {
        self.build_all_with(packages, extra_args, |_| {}).await
    }

    /// [`Self::build_all`] with a progress callback
    pub async fn build_all_with<F>(
        &self,
        packages: &[String],
        extra_args: &[String],
        mut on_event: F,
    ) -> Result<BuildReport, BuildError>
    where
        F: FnMut(BuildEvent<'_>),
    {
        let layout = &self.settings.layout;
        let error_log = &self.settings.error_log;
        error_log.reset()?;

        let mut args = self.settings.extra_args.clone();
        args.extend_from_slice(extra_args);

        let mut built = Vec::with_capacity(packages.len());
        for (index, package) in packages.iter().enumerate() {
            on_event(BuildEvent::Started { index, package });
            tracing::info!("Building package '{package}'");

            let request = CompileRequest {
                package,
                source_dir: layout.source_dir(package),
                class_root: layout.class_root(),
                extra_args: &args,
            };

            let result = match self.compiler.compile(&request).await {
                Ok(result) => result,
                Err(source) => {
                    let cleared = layout.clear_artifacts(package)?;
                    tracing::warn!(
                        "Compiler invocation failed for '{package}', cleared {cleared} artifacts"
                    );
                    on_event(BuildEvent::Finished {
                        package,
                        succeeded: false,
                    });
                    return Err(BuildError::Compiler {
                        package: package.clone(),
                        source,
                    });
                }
            };

            error_log.append(&result.diagnostics)?;

            if !result.succeeded {
                let cleared_artifacts = layout.clear_artifacts(package)?;
                tracing::warn!("Found compile errors in package {package}");
                on_event(BuildEvent::Finished {
                    package,
                    succeeded: false,
                });
                return Ok(BuildReport {
                    built,
                    outcome: RunOutcome::Stopped {
                        package: package.clone(),
                        diagnostics: result.diagnostics,
                        cleared_artifacts,
                    },
                    not_attempted: packages[index + 1..].to_vec(),
                    error_log: error_log.path().to_path_buf(),
                });
            }

            if let Some(code) = result.exit_code.filter(|code| *code != 0) {
                tracing::warn!(
                    "Compiler exited with status {code} for '{package}' but produced no diagnostics"
                );
            }
            if !layout.has_artifacts(package)? {
                tracing::warn!("Package '{package}' compiled but produced no artifacts");
            }

            on_event(BuildEvent::Finished {
                package,
                succeeded: true,
            });
            built.push(package.clone());
        }

        Ok(BuildReport {
            built,
            outcome: RunOutcome::AllBuilt,
            not_attempted: Vec::new(),
            error_log: error_log.path().to_path_buf(),
        })
    }
}
