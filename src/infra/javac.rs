//! javac invocation
//!
//! Runs the Java compiler for one package as a child process:
//! `javac -cp <class_root> -d <class_root> <extra args> <sources>`.
//! Everything javac prints (stdout and stderr) becomes the diagnostics of
//! the result, so lint warnings fail a package just like errors do.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use crate::config::defaults;
use crate::core::compiler::{CompileRequest, CompileResult, Compiler};
use crate::error::CompilerError;
use crate::infra::filesystem;

/// Child-process javac wrapper
#[derive(Debug, Clone)]
pub struct JavacCompiler {
    /// Path or name of the javac binary
    program: PathBuf,
    /// Watchdog timeout per package
    timeout: Option<Duration>,
}

impl JavacCompiler {
    /// Create a wrapper around the given javac binary
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            timeout: None,
        }
    }

    /// Kill javac when a package takes longer than `timeout`
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Path of the javac binary
    pub fn program(&self) -> &PathBuf {
        &self.program
    }

    fn program_name(&self) -> String {
        self.program.display().to_string()
    }

    /// Assemble the argument list for one package
    pub fn arguments(request: &CompileRequest<'_>, sources: &[PathBuf]) -> Vec<String> {
        let class_root = request.class_root.display().to_string();
        let mut args = vec![
            "-cp".to_string(),
            class_root.clone(),
            "-d".to_string(),
            class_root,
        ];
        args.extend(request.extra_args.iter().cloned());
        args.extend(sources.iter().map(|p| p.display().to_string()));
        args
    }
}

impl Compiler for JavacCompiler {
    async fn compile(&self, request: &CompileRequest<'_>) -> Result<CompileResult, CompilerError> {
        let sources =
            filesystem::list_files_with_extension(&request.source_dir, defaults::SOURCE_EXTENSION)
                .map_err(|source| CompilerError::Sources {
                    package: request.package.to_string(),
                    source,
                })?;

        if sources.is_empty() {
            return Ok(CompileResult::failure(format!(
                "error: no source files found in {}",
                request.source_dir.display()
            )));
        }

        filesystem::create_dir_all(request.class_root).map_err(|source| CompilerError::Sources {
            package: request.package.to_string(),
            source,
        })?;

        let args = Self::arguments(request, &sources);
        tracing::debug!("{} {}", self.program_name(), args.join(" "));

        let child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| CompilerError::Launch {
                program: self.program_name(),
                error: e.to_string(),
            })?;

        let waited = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, child.wait_with_output())
                .await
                .map_err(|_| CompilerError::TimedOut {
                    package: request.package.to_string(),
                    seconds: limit.as_secs(),
                })?,
            None => child.wait_with_output().await,
        };

        let output = waited.map_err(|e| CompilerError::Launch {
            program: self.program_name(),
            error: e.to_string(),
        })?;

        let mut diagnostics = String::from_utf8_lossy(&output.stdout).into_owned();
        diagnostics.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(CompileResult::from_output(diagnostics, output.status.code()))
    }
}
