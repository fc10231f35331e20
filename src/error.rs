//! Error types for pickup
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Manifest (pickup.toml) errors
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file does not exist
    #[error("Manifest not found at '{path}'. Run 'pickup init' to create a project.")]
    NotFound { path: PathBuf },

    /// Manifest could not be read
    #[error("Failed to read manifest '{path}': {error}")]
    ReadError { path: PathBuf, error: String },

    /// Manifest is not valid TOML or has the wrong shape
    #[error("Failed to parse manifest: {0}")]
    ParseError(String),

    /// Package catalog is empty
    #[error("Package catalog is empty: add identifiers to [packages] order")]
    EmptyCatalog,

    /// Package identifier listed twice
    #[error("Package '{package}' is listed more than once in [packages] order")]
    DuplicatePackage { package: String },

    /// Package identifier is not a dotted Java package name
    #[error("Invalid package identifier '{package}': expected dotted Java package name")]
    InvalidPackage { package: String },

    /// Package prefix is not a dotted Java package name
    #[error("Invalid package prefix '{prefix}'")]
    InvalidPrefix { prefix: String },

    /// Staging entry refers to a package outside the catalog
    #[error("[stage.files] names package '{package}' which is not in [packages] order")]
    UnknownStagePackage { package: String },

    /// Staging entry is not a bare class name
    #[error("[stage.files] entry '{file}' for package '{package}' is not a class name")]
    InvalidStageFile { package: String, file: String },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to list directory contents
    #[error("Failed to read directory '{path}': {error}")]
    ReadDir { path: PathBuf, error: String },

    /// Failed to remove a file
    #[error("Failed to remove file '{path}': {error}")]
    RemoveFile { path: PathBuf, error: String },

    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },

    /// Failed to copy file
    #[error("Failed to copy '{from}' to '{to}': {error}")]
    CopyFile {
        from: PathBuf,
        to: PathBuf,
        error: String,
    },
}

/// Compiler invocation errors
///
/// These are failures of the invocation itself, not compile errors in the
/// sources; those come back as a failed `CompileResult`.
#[derive(Error, Debug)]
pub enum CompilerError {
    /// Compiler binary could not be started
    #[error("Failed to launch compiler '{program}': {error}")]
    Launch { program: String, error: String },

    /// Compiler did not finish within the watchdog timeout
    #[error("Compiler timed out after {seconds}s while building package '{package}'")]
    TimedOut { package: String, seconds: u64 },

    /// Source directory could not be scanned
    #[error("Failed to collect sources for package '{package}': {source}")]
    Sources {
        package: String,
        #[source]
        source: FilesystemError,
    },
}

/// Build errors
#[derive(Error, Debug)]
pub enum BuildError {
    /// Resume requested but every package already has artifacts
    #[error("Attempted to resume, but found no empty artifact directories. Run 'pickup clean' for a full rebuild.")]
    NoResumePossible,

    /// Package not present in the catalog
    #[error("Package '{package}' not found in [packages] order")]
    UnknownPackage { package: String },

    /// Compiler invocation failed for a package
    #[error("Compiler invocation failed for package '{package}': {source}")]
    Compiler {
        package: String,
        #[source]
        source: CompilerError,
    },

    /// Artifact directory or error log I/O failed
    #[error(transparent)]
    Filesystem(#[from] FilesystemError),
}

/// Source staging errors
#[derive(Error, Debug)]
pub enum StageError {
    /// No [stage] section in the manifest
    #[error("No [stage] section in pickup.toml: nothing to stage")]
    NotConfigured,

    /// Trunk source file is missing
    #[error("Trunk source '{path}' does not exist")]
    MissingSource { path: PathBuf },

    /// Copy or hashing failed
    #[error(transparent)]
    Filesystem(#[from] FilesystemError),
}

/// Project initialization errors
#[derive(Error, Debug)]
pub enum InitError {
    /// Directory not found
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// A manifest is already present
    #[error("{path} already exists. Use --force to overwrite it")]
    ManifestExists { path: PathBuf },

    /// No package given and none discovered
    #[error("No packages found under '{source_dir}'. Pass --package for each package in build order")]
    NoPackages { source_dir: PathBuf },

    /// Generated manifest failed validation
    #[error("Generated manifest is invalid: {0}")]
    Manifest(#[from] ManifestError),

    /// IO error during initialization
    #[error("IO error for '{path}': {error}")]
    IoError { path: PathBuf, error: String },
}
