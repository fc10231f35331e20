//! Build command implementation
//!
//! Implements `pickup build`: a full build of the catalog, a build of
//! selected packages, or a resumed build from the first package without
//! artifacts.

use std::path::Path;

use anyhow::{bail, Result};

use crate::cli::output::{
    create_build_bar, is_json, print_detail, print_info, print_json, print_success, print_warning,
    status,
};
use crate::core::builder::{select_packages, BuildEvent, BuildReport, PackageBuilder, RunOutcome};
use crate::infra::javac::JavacCompiler;

use super::{load_global_config, load_project};

/// Build options
#[derive(Debug, Default)]
pub struct BuildOptions {
    /// Start at the first package without artifacts
    pub resume: bool,
    /// Build only these packages
    pub packages: Vec<String>,
    /// Extra compiler arguments for this run
    pub extra_args: Vec<String>,
}

/// Execute the build command
pub async fn execute(project_dir: &Path, javac: Option<&str>, options: BuildOptions) -> Result<()> {
    let project = load_project(project_dir)?;
    let global = load_global_config()?;

    let compiler = JavacCompiler::new(project.javac(javac, &global))
        .with_timeout(project.compiler_timeout(&global));
    tracing::info!(
        "Building project {} with {}",
        project.manifest.project.name,
        compiler.program().display()
    );
    let builder = PackageBuilder::new(project.build_settings(), compiler);

    let catalog = project.catalog();
    let packages = if options.resume {
        builder.compute_resume_point(catalog)?.to_vec()
    } else if options.packages.is_empty() {
        catalog.to_vec()
    } else {
        select_packages(catalog, &options.packages)?
    };

    if options.resume && !is_json() {
        print_info(&format!(
            "Resuming at '{}' ({} of {} packages left)",
            packages[0],
            packages.len(),
            catalog.len()
        ));
    }

    let bar = create_build_bar(packages.len() as u64);
    let report = builder
        .build_all_with(&packages, &options.extra_args, |event| match event {
            BuildEvent::Started { package, .. } => bar.set_message(package.to_string()),
            BuildEvent::Finished { .. } => bar.inc(1),
        })
        .await;
    bar.finish_and_clear();
    let report = report?;

    if is_json() {
        print_json(&serde_json::to_value(&report)?);
    } else {
        print_report(&report);
    }

    match &report.outcome {
        RunOutcome::AllBuilt => Ok(()),
        RunOutcome::Stopped { package, .. } => bail!(
            "Compile errors in package '{package}'. See {}",
            report.error_log.display()
        ),
    }
}

fn print_report(report: &BuildReport) {
    match &report.outcome {
        RunOutcome::AllBuilt => {
            print_success(&format!("Built {} packages", report.built.len()));
        }
        RunOutcome::Stopped {
            package,
            diagnostics,
            cleared_artifacts,
        } => {
            if !report.built.is_empty() {
                print_info(&format!("Built {} packages", report.built.len()));
            }
            eprintln!("{} Found compile errors in package {package}", status::ERROR);
            for line in diagnostics.lines().take(20) {
                eprintln!("  {line}");
            }
            if *cleared_artifacts > 0 {
                print_detail(&format!("Removed {cleared_artifacts} partial artifacts"));
            }
            if !report.not_attempted.is_empty() {
                print_warning(&format!(
                    "Not attempted: {}",
                    report.not_attempted.join(", ")
                ));
            }
            print_detail("Fix the errors and run 'pickup build --resume'");
        }
    }
}
