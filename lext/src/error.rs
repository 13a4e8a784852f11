//! Error handling module for the lext CLI.
//!
//! Lexical problems in the inputs are not errors here; they are reported as
//! diagnostics. These variants cover everything that stops a command.

use dfalex_lex::SourceError;
use thiserror::Error;

/// Main error type for the lext CLI application.
#[derive(Error, Debug)]
pub enum LextError {
    /// Configuration could not be found, parsed or applied.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An input file could not be opened.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Arguments or configuration values are invalid.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A command finished but did not succeed.
    #[error("Command execution failed: {0}")]
    CommandExecution(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An input could not be read as UTF-8 text.
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

/// Result type alias using LextError.
pub type Result<T> = std::result::Result<T, LextError>;
