//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests: a temporary
//! project directory, a fake `javac` shell script and a runner for the
//! `pickup` binary that isolates it from the user's configuration.
//!
//! The fake compiler writes one empty `.class` file per source into the
//! `-d` directory, mirroring the source path below `java/`. A source
//! containing `BROKEN` produces an error on stderr and exit status 1; with
//! `-warnAll`, a source containing `WARNING` produces a warning but exit
//! status 0. Every source it is handed is appended to `javac_calls.log`.

#![allow(dead_code)]

use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Fake javac implementation
const FAKE_JAVAC: &str = r#"#!/bin/sh
out=""
warn_all=0
status=0
while [ $# -gt 0 ]; do
  case "$1" in
    -version) echo "javac 17.0.8"; exit 0 ;;
    -d) out="$2"; shift 2 ;;
    -cp) shift 2 ;;
    -warnAll) warn_all=1; shift ;;
    -*) shift ;;
    *)
      src="$1"; shift
      if [ -n "$FAKE_JAVAC_LOG" ]; then echo "$src" >> "$FAKE_JAVAC_LOG"; fi
      if grep -q BROKEN "$src"; then
        echo "$src:1: error: cannot find symbol" >&2
        status=1
        continue
      fi
      if [ "$warn_all" = 1 ] && grep -q WARNING "$src"; then
        echo "$src:1: warning: [deprecation] old API" >&2
      fi
      rel="${src#*/java/}"
      mkdir -p "$out/$(dirname "$rel")"
      : > "$out/${rel%.java}.class"
      ;;
  esac
done
exit $status
"#;

/// Test project context
///
/// Creates a temporary directory for test projects and provides
/// utilities for setting up test scenarios.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
    /// Directory holding the fake compiler and global config
    pub tools: TempDir,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        let project = Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
            tools: TempDir::new().expect("Failed to create tools directory"),
        };
        let javac = project.fake_javac();
        std::fs::write(&javac, FAKE_JAVAC).expect("Failed to write fake javac");
        std::fs::set_permissions(&javac, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake javac executable");
        project
    }

    /// Create a project with a manifest and one clean source per package
    pub fn with_packages(packages: &[&str]) -> Self {
        let project = Self::new();
        project.write_manifest(packages, "");
        for package in packages {
            project.add_source(package, "Main", "class Main {}");
        }
        project
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Path of the fake javac script
    pub fn fake_javac(&self) -> PathBuf {
        self.tools.path().join("javac")
    }

    /// Global config directory used by [`Self::run`]
    pub fn config_dir(&self) -> PathBuf {
        self.tools.path().join("config")
    }

    /// Sources the fake compiler has been handed, in call order
    pub fn compiled_sources(&self) -> Vec<String> {
        std::fs::read_to_string(self.tools.path().join("javac_calls.log"))
            .map(|log| log.lines().map(ToString::to_string).collect())
            .unwrap_or_default()
    }

    /// Write `pickup.toml` with the given catalog and extra TOML appended
    pub fn write_manifest(&self, packages: &[&str], extra: &str) {
        let order = packages
            .iter()
            .map(|p| format!("\"{p}\""))
            .collect::<Vec<_>>()
            .join(", ");
        self.create_file(
            "pickup.toml",
            &format!("[project]\nname = \"test-project\"\n\n[packages]\norder = [{order}]\n{extra}"),
        );
    }

    /// Add a source file for a package under `java/`
    pub fn add_source(&self, package: &str, class: &str, body: &str) {
        let dir = package.replace('.', "/");
        self.create_file(&format!("java/{dir}/{class}.java"), body);
    }

    /// Number of `.class` files in a package's output directory
    pub fn artifact_count(&self, package: &str) -> usize {
        let dir = self
            .dir
            .path()
            .join("jclass")
            .join(package.replace('.', "/"));
        std::fs::read_dir(dir)
            .map(|entries| {
                entries
                    .filter_map(Result::ok)
                    .filter(|e| e.path().extension().is_some_and(|ext| ext == "class"))
                    .count()
            })
            .unwrap_or(0)
    }

    /// Run pickup in the project directory with the fake compiler
    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .env("PICKUP_JAVAC", self.fake_javac())
            .output()
            .expect("Failed to execute pickup")
    }

    /// A pickup command isolated from the user's environment
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_pickup"));
        cmd.current_dir(self.path())
            .args(args)
            .env("PICKUP_CONFIG_DIR", self.config_dir())
            .env("FAKE_JAVAC_LOG", self.tools.path().join("javac_calls.log"))
            .env_remove("PICKUP_JAVAC")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Check if a file exists in the test project
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the test project
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Stdout of a finished command
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr of a finished command
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Parse the JSON document a `--json` command printed
pub fn json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON")
}

