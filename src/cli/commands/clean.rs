//! CLI implementation for `pickup clean` command
//!
//! Removes artifacts from package output directories.

use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::output::{is_json, print_detail, print_json, print_success};
use crate::core::builder::select_packages;
use crate::core::clean::clean_packages;

use super::load_project;

/// Execute the clean command
pub async fn execute(project_dir: &Path, packages: &[String]) -> Result<()> {
    let project = load_project(project_dir)?;

    let targets = if packages.is_empty() {
        project.catalog().to_vec()
    } else {
        select_packages(project.catalog(), packages)?
    };

    let result = clean_packages(&project.layout, &targets)
        .with_context(|| "Failed to clean build artifacts")?;

    if is_json() {
        print_json(&serde_json::to_value(&result)?);
        return Ok(());
    }

    if result.total_removed() == 0 {
        print_success("Nothing to clean");
    } else {
        print_success(&format!("Removed {} artifacts", result.total_removed()));
        for package in result.packages.iter().filter(|p| p.removed > 0) {
            print_detail(&format!("{}: {}", package.package, package.removed));
        }
    }

    Ok(())
}
