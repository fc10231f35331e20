//! Integration tests for `pickup build --resume`

#![cfg(unix)]

mod common;

use common::{json, stderr, stdout, TestProject};

#[test]
fn test_resume_skips_built_packages() {
    let project = TestProject::with_packages(&["pkgA", "pkgB", "pkgC"]);
    project.add_source("pkgC", "Broken", "class Broken { BROKEN }");
    assert!(!project.run(&["build"]).status.success());

    project.create_file("java/pkgC/Broken.java", "class Broken {}");
    let before = project.compiled_sources().len();
    let output = project.run(&["build", "--resume"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let resumed = &project.compiled_sources()[before..];
    assert!(resumed.iter().all(|src| src.contains("/pkgC/")));
    assert_eq!(project.artifact_count("pkgC"), 2);
    assert!(stdout(&output).contains("Resuming at 'pkgC'"));
}

#[test]
fn test_resume_clears_previous_error_log() {
    let project = TestProject::with_packages(&["pkgA", "pkgB"]);
    project.add_source("pkgB", "Broken", "class Broken { BROKEN }");
    assert!(!project.run(&["build"]).status.success());
    assert!(!project.read_file("compile_errors.txt").is_empty());

    project.create_file("java/pkgB/Broken.java", "class Broken {}");
    let output = project.run(&["build", "--resume"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(project.read_file("compile_errors.txt").is_empty());
}

#[test]
fn test_resume_when_everything_is_built() {
    let project = TestProject::with_packages(&["pkgA", "pkgB"]);
    assert!(project.run(&["build"]).status.success());
    let calls = project.compiled_sources().len();

    let output = project.run(&["build", "--resume"]);

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("found no empty artifact directories"));
    assert!(err.contains("pickup clean"));
    assert_eq!(project.compiled_sources().len(), calls);
}

#[test]
fn test_resume_after_clean_rebuilds_everything() {
    let project = TestProject::with_packages(&["pkgA", "pkgB"]);
    assert!(project.run(&["build"]).status.success());
    assert!(project.run(&["clean"]).status.success());

    let output = project.run(&["--json", "build", "--resume"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(json(&output)["built"], serde_json::json!(["pkgA", "pkgB"]));
}

#[test]
fn test_resume_conflicts_with_package() {
    let project = TestProject::with_packages(&["pkgA"]);

    let output = project.run(&["build", "--resume", "--package", "pkgA"]);

    assert!(!output.status.success());
    assert!(project.compiled_sources().is_empty());
}
