//! Project initialization logic
//!
//! Writes a commented `pickup.toml` and adds build outputs to `.gitignore`.
//! The package catalog comes from `--package` flags or, failing that, from
//! the package directories already present under the source root.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::defaults;
use crate::core::manifest::{is_valid_package_id, Manifest, MANIFEST_FILE};
use crate::error::InitError;

/// Marker comment for pickup section in .gitignore
pub const GITIGNORE_MARKER: &str = "# pickup";

/// Options for project initialization
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Project name (defaults to the directory name)
    pub name: Option<String>,
    /// Packages in build order
    pub packages: Vec<String>,
    /// Overwrite an existing manifest
    pub force: bool,
}

/// Result of initialization
#[derive(Debug)]
pub struct InitResult {
    /// Path to created manifest
    pub manifest_path: PathBuf,
    /// Package catalog written
    pub packages: Vec<String>,
    /// Whether the catalog was discovered from the source tree
    pub discovered: bool,
    /// Whether .gitignore already existed
    pub gitignore_existed: bool,
}

/// Find package directories under `source_root`
///
/// A package is any directory (at any depth) directly containing at least
/// one source file; its identifier is its relative path joined with dots.
/// Results are sorted, since directory order carries no build order.
pub fn discover_packages(source_root: &Path) -> Vec<String> {
    let mut packages: Vec<String> = WalkDir::new(source_root)
        .min_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_dir())
        .filter(|e| {
            std::fs::read_dir(e.path()).is_ok_and(|mut entries| {
                entries.any(|entry| {
                    entry.is_ok_and(|entry| {
                        entry
                            .path()
                            .extension()
                            .is_some_and(|ext| ext == defaults::SOURCE_EXTENSION)
                    })
                })
            })
        })
        .filter_map(|e| {
            let relative = e.path().strip_prefix(source_root).ok()?;
            let parts: Vec<&str> = relative.iter().filter_map(|p| p.to_str()).collect();
            Some(parts.join("."))
        })
        .filter(|id| is_valid_package_id(id))
        .collect();
    packages.sort();
    packages
}

/// Generate the default manifest content with comments
pub fn generate_manifest_content(project_name: &str, packages: &[String]) -> String {
    let order = packages
        .iter()
        .map(|p| format!("    \"{p}\","))
        .collect::<Vec<_>>()
        .join("\n");
    let extra_args = defaults::TEMPLATE_EXTRA_ARGS
        .iter()
        .map(|a| format!("\"{a}\""))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"# pickup project configuration

[project]
name = "{project_name}"
# Root for all paths below (defaults to this directory)
# install_dir = "/userdata/external/{project_name}"

[layout]
source_dir = "{source_dir}"
class_dir = "{class_dir}"
# Output directories live under class_dir/<prefix>/<package>
# package_prefix = "com.example"
error_log = "{error_log}"

[compiler]
# javac = "/usr/lib/jvm/default/bin/javac"
extra_args = [{extra_args}]
# Kill a package build that runs longer than this
# timeout_secs = 600

[packages]
# Build order; resume picks up at the first package without artifacts
order = [
{order}
]

# Copy sources from a trunk checkout with `pickup stage`
# [stage]
# trunk_dir = "/path/to/trunk/java"
# [stage.files]
# mypackage = ["MyClass", "OtherClass"]
"#,
        source_dir = defaults::SOURCE_DIR,
        class_dir = defaults::CLASS_DIR,
        error_log = defaults::ERROR_LOG,
    )
}

/// Generate .gitignore content for pickup
pub fn generate_gitignore_content() -> String {
    format!(
        "{GITIGNORE_MARKER}\n{}/\n{}\n",
        defaults::CLASS_DIR,
        defaults::ERROR_LOG
    )
}

/// Append pickup entries to existing .gitignore content
pub fn append_gitignore_entries(existing: &str) -> String {
    if existing.contains(GITIGNORE_MARKER) {
        return existing.to_string();
    }

    let mut result = existing.to_string();
    if !result.is_empty() && !result.ends_with('\n') {
        result.push('\n');
    }
    if !result.is_empty() {
        result.push('\n');
    }
    result.push_str(&generate_gitignore_content());
    result
}

/// Derive project name from directory
pub fn derive_project_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map_or_else(|| "my-project".to_string(), ToString::to_string)
}

fn write(path: &Path, content: &str) -> Result<(), InitError> {
    std::fs::write(path, content).map_err(|e| InitError::IoError {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Initialize a project in `path`
pub fn init_project(path: &Path, options: &InitOptions) -> Result<InitResult, InitError> {
    if !path.is_dir() {
        return Err(InitError::DirectoryNotFound {
            path: path.to_path_buf(),
        });
    }

    let manifest_path = path.join(MANIFEST_FILE);
    if manifest_path.exists() && !options.force {
        return Err(InitError::ManifestExists {
            path: manifest_path,
        });
    }

    let discovered = options.packages.is_empty();
    let packages = if discovered {
        let source_root = path.join(defaults::SOURCE_DIR);
        let found = discover_packages(&source_root);
        if found.is_empty() {
            return Err(InitError::NoPackages { source_dir: source_root });
        }
        found
    } else {
        options.packages.clone()
    };

    let name = options
        .name
        .clone()
        .unwrap_or_else(|| derive_project_name(path));
    let content = generate_manifest_content(&name, &packages);
    Manifest::from_toml(&content)?.validate()?;
    write(&manifest_path, &content)?;

    let gitignore_path = path.join(".gitignore");
    let gitignore_existed = gitignore_path.exists();
    let gitignore = if gitignore_existed {
        let existing = std::fs::read_to_string(&gitignore_path).map_err(|e| InitError::IoError {
            path: gitignore_path.clone(),
            error: e.to_string(),
        })?;
        append_gitignore_entries(&existing)
    } else {
        generate_gitignore_content()
    };
    write(&gitignore_path, &gitignore)?;

    tracing::info!("Wrote {} with {} packages", manifest_path.display(), packages.len());
    Ok(InitResult {
        manifest_path,
        packages,
        discovered,
        gitignore_existed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generated_manifest_parses_and_keeps_order() {
        let packages = vec!["zeta".to_string(), "alpha".to_string()];
        let content = generate_manifest_content("demo", &packages);

        let manifest = Manifest::from_toml(&content).unwrap();
        manifest.validate().unwrap();
        assert_eq!(manifest.project.name, "demo");
        assert_eq!(manifest.packages.order, packages);
        assert_eq!(
            manifest.compiler.extra_args,
            vec!["-Xlint:unchecked", "-Xlint:deprecation"]
        );
    }

    #[test]
    fn test_append_gitignore_entries_idempotent() {
        let first = append_gitignore_entries("*.log");
        assert!(first.starts_with("*.log\n\n# pickup\n"));
        assert!(first.contains("jclass/"));
        assert_eq!(append_gitignore_entries(&first), first);
    }

    #[test]
    fn test_discover_packages() {
        let temp = TempDir::new().unwrap();
        let java = temp.path().join("java");
        for (dir, file) in [
            ("encoder", "Symbol.java"),
            ("examp4enc", "ExampleEntry.java"),
            ("util/io", "Reader.java"),
            ("docs", "README.md"),
        ] {
            std::fs::create_dir_all(java.join(dir)).unwrap();
            std::fs::write(java.join(dir).join(file), "").unwrap();
        }

        assert_eq!(
            discover_packages(&java),
            vec!["encoder", "examp4enc", "util.io"]
        );
    }

    #[test]
    fn test_init_with_explicit_packages() {
        let temp = TempDir::new().unwrap();
        let options = InitOptions {
            name: Some("mirrenc".to_string()),
            packages: vec!["encoder".to_string(), "examp4enc".to_string()],
            force: false,
        };

        let result = init_project(temp.path(), &options).unwrap();

        assert!(!result.discovered);
        assert!(result.manifest_path.exists());
        assert!(temp.path().join(".gitignore").exists());
        let manifest = Manifest::load(temp.path()).unwrap();
        assert_eq!(manifest.packages.order, vec!["encoder", "examp4enc"]);
    }

    #[test]
    fn test_init_refuses_existing_manifest_without_force() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(MANIFEST_FILE), "# mine").unwrap();
        let mut options = InitOptions {
            packages: vec!["a".to_string()],
            ..InitOptions::default()
        };

        assert!(matches!(
            init_project(temp.path(), &options),
            Err(InitError::ManifestExists { .. })
        ));

        options.force = true;
        assert!(init_project(temp.path(), &options).is_ok());
    }

    #[test]
    fn test_init_without_packages_or_sources_fails() {
        let temp = TempDir::new().unwrap();
        assert!(matches!(
            init_project(temp.path(), &InitOptions::default()),
            Err(InitError::NoPackages { .. })
        ));
    }

    #[test]
    fn test_init_rejects_invalid_package() {
        let temp = TempDir::new().unwrap();
        let options = InitOptions {
            packages: vec!["not a package".to_string()],
            ..InitOptions::default()
        };
        assert!(matches!(
            init_project(temp.path(), &options),
            Err(InitError::Manifest(_))
        ));
        assert!(!temp.path().join(MANIFEST_FILE).exists());
    }

    #[test]
    fn test_derive_project_name() {
        assert_eq!(derive_project_name(Path::new("/home/user/mirrenc")), "mirrenc");
    }
}
