//! Infrastructure layer
//!
//! Handles filesystem access, directory discovery and the javac process.

pub mod dirs;
pub mod filesystem;
pub mod javac;
