//! Core business logic module
//!
//! This module contains the build, resume and project logic for pickup.
//! Process spawning lives in [`crate::infra`]; the builder only sees the
//! [`compiler::Compiler`] trait.
//!
//! # Submodules
//!
//! - [`manifest`] - Manifest (pickup.toml) parsing and validation
//! - [`layout`] - Source and output directory layout per package
//! - [`error_log`] - Per-run compiler diagnostics file
//! - [`compiler`] - Compiler invocation boundary
//! - [`builder`] - Resume point and build orchestration
//! - [`project`] - Manifest plus global configuration, resolved
//! - [`global_config`] - Global configuration management
//! - [`status`] - Built/unbuilt state of the catalog
//! - [`clean`] - Clean build artifacts logic
//! - [`stage`] - Copying sources from a trunk checkout
//! - [`doctor`] - Environment checks
//! - [`init`] - Project initialization logic

pub mod builder;
pub mod clean;
pub mod compiler;
pub mod doctor;
pub mod error_log;
pub mod global_config;
pub mod init;
pub mod layout;
pub mod manifest;
pub mod project;
pub mod stage;
pub mod status;
