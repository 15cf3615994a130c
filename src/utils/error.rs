// Common error types for pynew

use std::path::PathBuf;
use thiserror::Error;

/// Exit status used when the tool refuses to run inside an active virtual environment
pub const EXIT_NESTED_ENVIRONMENT: i32 = 3;

/// Exit status for every other failure
pub const EXIT_FAILURE: i32 = 1;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Project already exists: {}", .0.display())]
    ProjectExists(PathBuf),

    #[error("Running inside virtual environment {prefix} (base installation: {base_prefix})")]
    NestedEnvironment { prefix: String, base_prefix: String },

    #[error("Command `{command}` failed: {reason}")]
    CommandFailed { command: String, reason: String },

    #[error("Command `{0}` not found")]
    CommandNotFound(String),
}

pub type Result<T> = std::result::Result<T, SetupError>;

/// A failure rendered for the terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserError {
    pub message: String,
    pub suggestion: Option<String>,
    pub exit_code: i32,
}

impl UserError {
    pub fn from_setup_error(err: &SetupError) -> Self {
        match err {
            SetupError::NestedEnvironment { .. } => Self {
                message: "You're currently inside a virtual environment. Please deactivate it before running this tool.".to_string(),
                suggestion: Some("Run `deactivate` and try again.".to_string()),
                exit_code: EXIT_NESTED_ENVIRONMENT,
            },
            SetupError::ValidationError(msg) => Self {
                message: msg.clone(),
                suggestion: None,
                exit_code: EXIT_FAILURE,
            },
            SetupError::CommandNotFound(command) => Self {
                message: format!("Could not find '{command}' on PATH."),
                suggestion: Some(format!("Install {command} or make sure it is on your PATH.")),
                exit_code: EXIT_FAILURE,
            },
            other => Self {
                message: other.to_string(),
                suggestion: None,
                exit_code: EXIT_FAILURE,
            },
        }
    }

    pub fn print(&self) {
        eprintln!("Error: {}", self.message);
        if let Some(suggestion) = &self.suggestion {
            eprintln!("\n{suggestion}");
        }
    }
}
