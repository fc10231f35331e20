//! Compiler collaborator seam
//!
//! The builder hands one package at a time to a [`Compiler`] and gets back a
//! [`CompileResult`]. Whether a package compiled is decided by that result,
//! never by a process exit status.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::CompilerError;

/// Everything the compiler needs to build one package
#[derive(Debug, Clone)]
pub struct CompileRequest<'a> {
    /// Package identifier
    pub package: &'a str,
    /// Directory holding the package's sources
    pub source_dir: PathBuf,
    /// Artifact root (output and classpath)
    pub class_root: &'a Path,
    /// Extra arguments, passed verbatim
    pub extra_args: &'a [String],
}

/// Outcome of compiling one package
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompileResult {
    /// Whether the package compiled cleanly
    pub succeeded: bool,
    /// Compiler output destined for the error log
    pub diagnostics: String,
    /// Process exit code, informational only
    pub exit_code: Option<i32>,
}

impl CompileResult {
    /// A clean compile
    pub fn success() -> Self {
        Self {
            succeeded: true,
            diagnostics: String::new(),
            exit_code: Some(0),
        }
    }

    /// A failed compile with diagnostics
    pub fn failure(diagnostics: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            diagnostics: diagnostics.into(),
            exit_code: None,
        }
    }

    /// Build a result from captured compiler output
    ///
    /// Any output at all, even a bare newline, counts as failure, matching
    /// a non-empty error log.
    pub fn from_output(diagnostics: String, exit_code: Option<i32>) -> Self {
        Self {
            succeeded: diagnostics.is_empty(),
            diagnostics,
            exit_code,
        }
    }
}

/// A compiler that can build one package
#[allow(async_fn_in_trait)]
pub trait Compiler {
    /// Compile a single package
    ///
    /// `Err` means the invocation itself broke (could not start, timed
    /// out); compile errors in the sources are a failed `CompileResult`.
    async fn compile(&self, request: &CompileRequest<'_>) -> Result<CompileResult, CompilerError>;
}
