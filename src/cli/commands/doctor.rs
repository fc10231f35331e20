//! CLI command for `pickup doctor`
//!
//! Checks the Java compiler and project configuration and reports issues
//! with suggestions.

use std::path::Path;

use anyhow::Result;

use crate::cli::output::{is_json, is_quiet, print_detail, print_info, print_json, print_success, print_warning, status};
use crate::core::doctor::run_doctor;
use crate::core::manifest::MANIFEST_FILE;
use crate::core::project::Project;

use super::load_global_config;

/// Execute the doctor command
pub async fn execute(project_dir: &Path, javac: Option<&str>) -> Result<()> {
    let global = load_global_config()?;
    let program = match Project::load(project_dir) {
        Ok(project) => project.javac(javac, &global),
        Err(_) => javac.unwrap_or_else(|| global.javac()).to_string(),
    };
    let manifest_dir = project_dir.join(MANIFEST_FILE).exists().then_some(project_dir);
    let report = run_doctor(&program, manifest_dir);

    // JSON output mode
    if is_json() {
        print_json(&serde_json::json!({
            "status": if report.all_passed() { "success" } else { "error" },
            "checks": report.checks.iter().map(|c| serde_json::json!({
                "name": c.name,
                "passed": c.passed,
                "required": c.required,
                "version": c.version,
                "error": c.error,
                "suggestion": c.suggestion
            })).collect::<Vec<_>>(),
            "config_issues": report.config_issues,
            "passed_count": report.passed_count(),
            "total_count": report.checks.len()
        }));

        if !report.all_passed() {
            return Err(anyhow::anyhow!("Doctor found problems"));
        }
        return Ok(());
    }

    // Quiet mode - only show errors
    if is_quiet() {
        for check in report.failed_required() {
            eprintln!("{} Missing required: {}", status::ERROR, check.name);
        }
        for issue in &report.config_issues {
            eprintln!("{} {issue}", status::ERROR);
        }
        if !report.all_passed() {
            return Err(anyhow::anyhow!("Doctor found problems"));
        }
        return Ok(());
    }

    print_info("Checking build environment...");
    println!();

    for check in &report.checks {
        let version_str = check
            .version
            .as_ref()
            .map(|v| format!(" ({v})"))
            .unwrap_or_default();

        if check.passed {
            println!("  {} {}{version_str}", status::SUCCESS, check.name);
        } else {
            println!("  {} {}", status::ERROR, check.name);
            if let Some(error) = &check.error {
                print_detail(&format!("Error: {error}"));
            }
            if let Some(suggestion) = &check.suggestion {
                print_detail(&format!("Suggestion: {suggestion}"));
            }
        }
    }

    if !report.config_issues.is_empty() {
        println!();
        print_warning("Configuration issues:");
        for issue in &report.config_issues {
            print_detail(&format!("• {issue}"));
        }
    }

    println!();
    let passed = report.passed_count();
    let total = report.checks.len();
    if report.all_passed() {
        print_success(&format!("All checks passed ({passed}/{total})"));
        Ok(())
    } else {
        Err(anyhow::anyhow!(
            "{passed}/{total} checks passed with {} configuration issues",
            report.config_issues.len()
        ))
    }
}
