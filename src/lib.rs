//! Electron application tree assembler library
//!
//! This library assembles the directory tree an Electron packager consumes
//! from two independently produced inputs:
//! - the web application build output
//! - the project's desktop harness (manifest, resources, lifecycle script)
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod assembler;
pub mod cli;
pub mod error;
pub mod metadata;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
