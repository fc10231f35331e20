//! Pickup - incremental, resumable package builder for Java source trees
//!
//! Compiles an ordered catalog of packages one at a time, stops at the
//! first package with compiler diagnostics, and can resume from the first
//! package whose output directory is still empty.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Business logic (resume, build loop, manifest, staging)
//! - [`infra`] - Infrastructure layer (filesystem, javac process)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
