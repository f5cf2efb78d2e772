use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to tell a failed scan apart from
/// a misuse of the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the report was produced
    Success = 0,
    /// Application error (project not found, invalid project, tool failure, I/O error)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
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
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for dependency scanning.
///
/// `ProjectNotFound`, `InvalidProject` and `ScanFailed` are the three scan
/// outcomes a caller can branch on; the remaining variants come from the
/// filesystem adapters.
#[derive(Debug, Error)]
pub enum DeplisterError {
    #[error("No supported project found at: {path}\n\n💡 Hint: {suggestion}")]
    ProjectNotFound { path: PathBuf, suggestion: String },

    #[error("Invalid project: {reason}\n\n💡 Hint: Please verify that the manifest and lock files are well-formed and declare at least one dependency")]
    InvalidProject { reason: String },

    #[error("Scan failed: `{command}` did not complete\nDetails: {details}\n\n💡 Hint: Please verify that the required toolchain is installed and on your PATH")]
    ScanFailed { command: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    /// Validation error for user-supplied options
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl DeplisterError {
    pub fn invalid_project(reason: impl Into<String>) -> Self {
        DeplisterError::InvalidProject {
            reason: reason.into(),
        }
    }
}
