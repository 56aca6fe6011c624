use std::path::PathBuf;

use thiserror::Error;

/// Failure taxonomy shared by the executor boundary and the navigation layer.
///
/// Executor-level variants (`Command`, `NotFound`, `Permission`) are folded into
/// a [`crate::executor::CommandResult`] before they reach a screen; only the
/// validation and navigation variants travel as `Err` values inside the shell.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AutogitError {
    #[error("{program} exited with status {status}")]
    Command { program: String, status: i32 },

    #[error("{0} was not found on PATH")]
    NotFound(String),

    #[error("permission denied: {}", .0.display())]
    Permission(PathBuf),

    #[error("{0}")]
    Validation(String),

    #[error("unknown screen: {0}")]
    UnknownScreen(String),

    #[error("operation not supported: {0}")]
    UnsupportedOperation(String),
}

impl AutogitError {
    /// Exit status used when the failure is turned into a command result.
    pub fn status(&self) -> i32 {
        match self {
            AutogitError::Command { status, .. } => *status,
            AutogitError::NotFound(_) => 127,
            AutogitError::Permission(_) => 126,
            _ => 1,
        }
    }

    /// Title for the popup that reports this failure.
    pub fn popup_title(&self) -> &'static str {
        match self {
            AutogitError::Command { .. } => "Command Failed",
            AutogitError::NotFound(_) => "Not Found",
            AutogitError::Permission(_) => "Permission Error",
            AutogitError::Validation(_) => "Invalid Input",
            AutogitError::UnknownScreen(_) => "Unknown Screen",
            AutogitError::UnsupportedOperation(_) => "Not Supported",
        }
    }
}

pub type AutogitResult<T> = std::result::Result<T, AutogitError>;
