//! Error types for the bracecheck CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Bracket violations found by the validator are data, not errors; they are
//! only lifted into `CheckError` by the command layer to pick an exit code.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for bracecheck operations.
#[derive(Error, Debug)]
pub enum CheckError {
    /// User provided invalid arguments, config, or input.
    #[error("{0}")]
    UserError(String),

    /// One or more expressions contained a bracket violation.
    #[error("Syntax check failed: {0}")]
    SyntaxError(String),

    /// An expression nested deeper than the configured stack capacity.
    #[error("Capacity exceeded: {0}")]
    CapacityExceeded(String),
}

impl CheckError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckError::UserError(_) => exit_codes::USER_ERROR,
            CheckError::SyntaxError(_) => exit_codes::SYNTAX_FAILURE,
            CheckError::CapacityExceeded(_) => exit_codes::CAPACITY_FAILURE,
        }
    }
}

/// Result type alias for bracecheck operations.
pub type Result<T> = std::result::Result<T, CheckError>;
