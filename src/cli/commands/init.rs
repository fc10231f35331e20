//! CLI implementation for `pickup init` command
//!
//! This module handles the CLI interface for project initialization.

use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::output::{is_json, print_detail, print_json, print_success};
use crate::core::init::{init_project, InitOptions};
use crate::core::manifest::MANIFEST_FILE;

/// Execute the init command
pub async fn execute(
    path: &Path,
    name: Option<String>,
    packages: Vec<String>,
    force: bool,
) -> Result<()> {
    let options = InitOptions {
        name,
        packages,
        force,
    };

    let result = init_project(path, &options).with_context(|| "Failed to initialize project")?;

    if is_json() {
        print_json(&serde_json::json!({
            "status": "success",
            "manifest": result.manifest_path,
            "packages": result.packages,
            "discovered": result.discovered,
        }));
        return Ok(());
    }

    print_success(&format!("Initialized pickup project in {}", path.display()));
    print_detail(&format!("Created {MANIFEST_FILE}"));
    if result.discovered {
        print_detail(&format!(
            "Discovered {} packages (sorted by name; reorder [packages] order to build order)",
            result.packages.len()
        ));
    } else {
        print_detail(&format!("Catalog: {}", result.packages.join(", ")));
    }
    if result.gitignore_existed {
        print_detail("Updated .gitignore");
    } else {
        print_detail("Created .gitignore");
    }

    Ok(())
}
