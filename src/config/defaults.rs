//! Default configuration values

/// Default compiler binary
pub const DEFAULT_JAVAC: &str = "javac";

/// Default staged source root, relative to the install root
pub const SOURCE_DIR: &str = "java";

/// Default artifact root, relative to the install root
pub const CLASS_DIR: &str = "jclass";

/// Default artifact extension
pub const ARTIFACT_EXTENSION: &str = "class";

/// Default source file extension
pub const SOURCE_EXTENSION: &str = "java";

/// Default compile error log, relative to the install root
pub const ERROR_LOG: &str = "compile_errors.txt";

/// Extra compiler arguments written into new manifests
pub const TEMPLATE_EXTRA_ARGS: &[&str] = &["-Xlint:unchecked", "-Xlint:deprecation"];
