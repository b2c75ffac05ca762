//! Error types for tree assembly.
//!
//! Every variant is terminal for the current run. Nothing is retried; the
//! caller surfaces the error and aborts the surrounding build.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for assembler operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while loading, composing, or writing a tree.
#[derive(Error, Debug)]
pub enum Error {
    /// A required input root does not exist.
    #[error("missing input: {} does not exist", path.display())]
    MissingInput {
        /// Path that was expected to exist
        path: PathBuf,
    },

    /// A source file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Encoding {
        /// File that failed to read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The manifest could not be rendered to text.
    #[error("cannot serialize {what}: {source}")]
    Serialization {
        /// What was being serialized
        what: &'static str,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The host descriptor is not valid JSON.
    #[error("invalid descriptor {}: {source}", path.display())]
    InvalidDescriptor {
        /// Descriptor path
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// A tree path is empty, absolute, or escapes its root.
    #[error("invalid tree path '{path}': {reason}")]
    InvalidPath {
        /// Offending path as given
        path: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// A platform identifier cannot name a resource directory.
    #[error("invalid platform identifier '{0}'")]
    InvalidPlatform(String),

    /// Filesystem operation failed while writing output.
    #[error("{context} {}: {source}", path.display())]
    Fs {
        /// Operation being performed
        context: &'static str,
        /// Path involved
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// A blocking task panicked or was cancelled.
    #[error("task failed: {0}")]
    TaskFailed(String),

    /// Anything else.
    #[error("{0}")]
    GenericError(String),
}

impl From<tokio::task::JoinError> for Error {
    fn from(e: tokio::task::JoinError) -> Self {
        Error::TaskFailed(e.to_string())
    }
}

/// Attaches filesystem context to IO results.
pub trait ErrorExt<T> {
    /// Wraps the error with an operation description and the path involved.
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}

/// Converts `Option`s and foreign results into [`Error::GenericError`].
pub trait Context<T> {
    /// Replaces a missing value or error with the given message.
    fn context<C: std::fmt::Display>(self, msg: C) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context<C: std::fmt::Display>(self, msg: C) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(msg.to_string()))
    }
}

impl<T> Context<T> for Result<T> {
    fn context<C: std::fmt::Display>(self, msg: C) -> Result<T> {
        self.map_err(|e| Error::GenericError(format!("{msg}: {e}")))
    }
}

/// Returns early with a [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::assembler::Error::GenericError(format!($($arg)*)))
    };
}
