use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Orchestrators treat any non-zero status as a failed inventory run,
/// so an unknown host or an empty inventory is still `Success`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Inventory or host variables were written
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable inventory, malformed config, write failure, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for inventory loading and emission.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Inventory source not found: {path}\n\n💡 Hint: {suggestion}")]
    SourceNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse inventory source: {path}\nDetails: {details}\n\n💡 Hint: Top-level keys must be group names (plus an optional \"_meta\" block); each group is a host list or an object with children/hosts/vars")]
    SourceParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid group name: {name:?}\nReason: {reason}")]
    InvalidGroupName { name: String, reason: String },

    #[error("Invalid host name: {name:?}\nReason: {reason}")]
    InvalidHostName { name: String, reason: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
