//! Top-level error types for the command line tool.
//!
//! Library errors live in [`crate::assembler::Error`]; this module wraps them
//! together with argument and output errors for the binary.

use thiserror::Error;

/// Result type alias for command line operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type for all command line operations
#[derive(Error, Debug)]
pub enum BundlerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Assembly errors
    #[error("{0}")]
    Assembler(#[from] crate::assembler::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Command execution failed
    #[error("Command execution failed: {command} - {reason}")]
    ExecutionFailed {
        /// Command that failed
        command: String,
        /// Reason for the error
        reason: String,
    },
}

impl BundlerError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        use crate::assembler::Error as AssemblerError;

        match self {
            BundlerError::Cli(CliError::InvalidArguments { .. }) => {
                vec!["Run with --help to see the accepted arguments".to_string()]
            }
            BundlerError::Assembler(AssemblerError::MissingInput { path }) => vec![
                format!("Create {} or point --project-root at the right project", path.display()),
                "Check that the web build finished before assembling".to_string(),
            ],
            BundlerError::Assembler(AssemblerError::InvalidDescriptor { .. }) => {
                vec!["Fix the JSON syntax of the project's package.json".to_string()]
            }
            BundlerError::Assembler(AssemblerError::InvalidPlatform(_)) => vec![
                "Use a platform name such as darwin, win32 or linux".to_string(),
                "Check EMBER_CLI_ELECTRON_BUILD_PLATFORM".to_string(),
            ],
            BundlerError::Assembler(AssemblerError::Encoding { .. }) => {
                vec!["Check file permissions of the input trees".to_string()]
            }
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
