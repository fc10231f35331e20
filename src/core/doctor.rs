//! Doctor command logic
//!
//! Checks that the compiler is available and that the project manifest is
//! usable, and reports issues with suggestions.

use std::path::Path;

use crate::core::manifest::{Manifest, MANIFEST_FILE};

/// Result of a single dependency check
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Name of the dependency being checked
    pub name: String,
    /// Whether the check passed
    pub passed: bool,
    /// Version if available
    pub version: Option<String>,
    /// Error message if check failed
    pub error: Option<String>,
    /// Suggestion for fixing the issue
    pub suggestion: Option<String>,
    /// Whether this is a required or optional dependency
    pub required: bool,
}

impl CheckResult {
    /// Create a passing check result
    pub fn pass(name: &str, version: Option<String>, required: bool) -> Self {
        Self {
            name: name.to_string(),
            passed: true,
            version,
            error: None,
            suggestion: None,
            required,
        }
    }

    /// Create a failing check result
    pub fn fail(name: &str, error: &str, suggestion: Option<&str>, required: bool) -> Self {
        Self {
            name: name.to_string(),
            passed: false,
            version: None,
            error: Some(error.to_string()),
            suggestion: suggestion.map(String::from),
            required,
        }
    }
}

/// Overall doctor report
#[derive(Debug, Default)]
pub struct DoctorReport {
    /// Individual check results
    pub checks: Vec<CheckResult>,
    /// Configuration issues found
    pub config_issues: Vec<String>,
}

impl DoctorReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a check result
    pub fn add_check(&mut self, result: CheckResult) {
        self.checks.push(result);
    }

    /// Add a configuration issue
    pub fn add_config_issue(&mut self, issue: String) {
        self.config_issues.push(issue);
    }

    /// Check if all checks passed and the configuration is clean
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed) && self.config_issues.is_empty()
    }

    /// Count passed checks
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    /// Get all failed required checks
    pub fn failed_required(&self) -> Vec<&CheckResult> {
        self.checks
            .iter()
            .filter(|c| c.required && !c.passed)
            .collect()
    }
}

/// Extract version string from command output
fn extract_version(output: &str) -> Option<String> {
    // javac prints "javac 17.0.8" or "javac 1.8.0_392"
    let version_regex = regex::Regex::new(r"(\d+(?:\.\d+)*(?:_\d+)?(?:-\w+)?)").ok()?;
    version_regex
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Locate a compiler binary and read its version
///
/// Returns `None` when the binary cannot be found on PATH (or at the given
/// path). The version is `None` when the binary runs but prints nothing
/// recognisable.
pub fn probe_compiler(program: &str) -> Option<Option<String>> {
    let path = which::which(program).ok()?;
    let version = std::process::Command::new(&path)
        .arg("-version")
        .output()
        .ok()
        .and_then(|output| {
            // Older JDKs print the version on stderr
            let stdout = String::from_utf8_lossy(&output.stdout);
            let stderr = String::from_utf8_lossy(&output.stderr);
            extract_version(&format!("{stdout}{stderr}"))
        });
    Some(version)
}

/// Check compiler availability
pub fn check_compiler(program: &str) -> CheckResult {
    match probe_compiler(program) {
        Some(version) => CheckResult::pass(&format!("Java compiler ({program})"), version, true),
        None => CheckResult::fail(
            &format!("Java compiler ({program})"),
            &format!("'{program}' not found in PATH"),
            Some("Install a JDK, or set [compiler] javac in pickup.toml or --javac"),
            true,
        ),
    }
}

/// Check if project configuration is valid
pub fn check_project_config(project_dir: &Path) -> Vec<String> {
    if !project_dir.join(MANIFEST_FILE).exists() {
        return vec![format!("No {MANIFEST_FILE} in {}", project_dir.display())];
    }

    match Manifest::load(project_dir) {
        Ok(_) => Vec::new(),
        Err(e) => vec![e.to_string()],
    }
}

/// Run all doctor checks
pub fn run_doctor(javac: &str, project_dir: Option<&Path>) -> DoctorReport {
    let mut report = DoctorReport::new();

    report.add_check(check_compiler(javac));

    if let Some(dir) = project_dir {
        for issue in check_project_config(dir) {
            report.add_config_issue(issue);
        }
    }

    report
}
