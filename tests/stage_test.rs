//! Integration tests for `pickup stage`

#![cfg(unix)]

mod common;

use common::{json, stderr, TestProject};

const STAGE: &str = r#"
[stage]
trunk_dir = "trunk/java"

[stage.files]
encoder = ["Symbol", "EncoderUtil"]
"#;

fn staged_project() -> TestProject {
    let project = TestProject::new();
    project.write_manifest(&["encoder"], STAGE);
    project.create_file("trunk/java/encoder/Symbol.java", "class Symbol {}");
    project.create_file("trunk/java/encoder/EncoderUtil.java", "class EncoderUtil {}");
    project.create_file("trunk/java/encoder/Unlisted.java", "class Unlisted {}");
    project
}

#[test]
fn test_stage_copies_listed_files() {
    let project = staged_project();

    let output = project.run(&["stage"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(project.read_file("java/encoder/Symbol.java"), "class Symbol {}");
    assert!(project.file_exists("java/encoder/EncoderUtil.java"));
    assert!(!project.file_exists("java/encoder/Unlisted.java"));
}

#[test]
fn test_stage_then_build() {
    let project = staged_project();
    assert!(project.run(&["stage"]).status.success());

    let output = project.run(&["build"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(project.artifact_count("encoder"), 2);
}

#[test]
fn test_restage_reports_unchanged() {
    let project = staged_project();
    assert!(project.run(&["stage"]).status.success());
    project.create_file("trunk/java/encoder/Symbol.java", "class Symbol { int id; }");

    let output = project.run(&["--json", "stage"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let files = json(&output)["files"].as_array().cloned().unwrap_or_default();
    let actions: Vec<_> = files.iter().map(|f| f["action"].clone()).collect();
    assert_eq!(actions, vec!["updated", "unchanged"]);
}

#[test]
fn test_stage_missing_trunk_file_fails() {
    let project = TestProject::new();
    project.write_manifest(&["encoder"], STAGE);
    project.create_file("trunk/java/encoder/Symbol.java", "class Symbol {}");

    let output = project.run(&["stage"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("EncoderUtil.java"));
    assert!(!project.file_exists("java/encoder/Symbol.java"));
}

#[test]
fn test_stage_without_section_fails() {
    let project = TestProject::with_packages(&["encoder"]);

    let output = project.run(&["stage"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("No [stage] section"));
}

#[test]
fn test_stage_rejects_paths_outside_package() {
    let project = TestProject::new();
    project.write_manifest(
        &["encoder"],
        "\n[stage]\ntrunk_dir = \"trunk/java\"\n\n[stage.files]\nencoder = [\"../../outside\"]\n",
    );
    project.create_file("outside.java", "class Outside {}");

    let output = project.run(&["stage"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("is not a class name"));
    assert!(!project.file_exists("java/outside.java"));
}
