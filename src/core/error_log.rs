//! Shared compile error log
//!
//! One file collects compiler diagnostics for a whole run. It is recreated
//! empty at the start of every run and kept afterwards so a failing run can
//! be inspected. "Exists with size 0" means no package produced diagnostics.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::FilesystemError;
use crate::infra::filesystem;

/// Handle to the compile error log file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLog {
    path: PathBuf,
}

impl ErrorLog {
    /// Create a handle; nothing is touched on disk
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete any previous log and recreate it empty
    pub fn reset(&self) -> Result<(), FilesystemError> {
        if self.path.exists() {
            filesystem::remove_file(&self.path)?;
            tracing::info!("Deleted old compile error file {}", self.path.display());
        }
        filesystem::write_file(&self.path, "")
    }

    /// Append diagnostics for one package
    pub fn append(&self, diagnostics: &str) -> Result<(), FilesystemError> {
        if diagnostics.is_empty() {
            return Ok(());
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| FilesystemError::WriteFile {
                path: self.path.clone(),
                error: e.to_string(),
            })?;
        file.write_all(diagnostics.as_bytes())
            .and_then(|()| {
                if diagnostics.ends_with('\n') {
                    Ok(())
                } else {
                    file.write_all(b"\n")
                }
            })
            .map_err(|e| FilesystemError::WriteFile {
                path: self.path.clone(),
                error: e.to_string(),
            })
    }

    /// Current size in bytes; a missing log is empty
    pub fn size(&self) -> Result<u64, FilesystemError> {
        filesystem::file_size(&self.path)
    }

    /// Whether the log holds no diagnostics
    pub fn is_empty(&self) -> Result<bool, FilesystemError> {
        self.size().map(|size| size == 0)
    }

    /// Read the whole log
    pub fn contents(&self) -> Result<String, FilesystemError> {
        if !self.path.exists() {
            return Ok(String::new());
        }
        filesystem::read_file(&self.path)
    }
}
