//! CLI command for `pickup status`
//!
//! Lists each package's artifact count and where `pickup build --resume`
//! would start.

use std::path::Path;

use anyhow::Result;

use crate::cli::output::{is_json, is_quiet, print_detail, print_info, print_json, print_success, status};
use crate::core::status::package_status;

use super::load_project;

/// Execute the status command
pub async fn execute(project_dir: &Path) -> Result<()> {
    let project = load_project(project_dir)?;
    let report = package_status(&project.layout, project.catalog())?;

    if is_json() {
        print_json(&serde_json::to_value(&report)?);
        return Ok(());
    }
    if is_quiet() {
        return Ok(());
    }

    for package in &report.packages {
        let marker = if package.built { status::SUCCESS } else { " " };
        println!(
            "  {marker} {:<32} {} artifacts",
            package.package, package.artifacts
        );
    }
    println!();

    let total = report.packages.len();
    match &report.resume_from {
        Some(package) => {
            print_info(&format!("{}/{total} packages built", report.built_count()));
            print_detail(&format!("'pickup build --resume' starts at {package}"));
        }
        None => {
            print_success(&format!("All {total} packages built"));
            print_detail("Run 'pickup clean' to force a full rebuild");
        }
    }

    Ok(())
}
