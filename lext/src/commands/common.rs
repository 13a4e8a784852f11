//! Common types and utilities for lext commands.
//!
//! Both commands read a list of inputs, lex them on a thread pool and report
//! in the order the inputs were given. That shared pipeline lives here.

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use dfalex_lex::{Engine, ReaderSource, Token};
use rayon::prelude::*;
use rayon::ThreadPool;
use tracing::debug;

use crate::error::{LextError, Result};

/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";

// ============================================================================
// Output Format
// ============================================================================

/// Supported token output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One token per line
    Text,
    /// A JSON array of token records per input
    Json,
}

impl FromStr for OutputFormat {
    type Err = LextError;

    /// Parse a format name, ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(LextError::Validation(format!(
                "{}: {}",
                error_messages::UNKNOWN_FORMAT,
                s
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

// ============================================================================
// Input Lexing
// ============================================================================

/// The tokens of one input.
#[derive(Debug, Clone)]
pub struct LexedFile {
    /// Display name: the path as given, or `<stdin>`.
    pub name: String,
    /// Every token of the input, trivia included.
    pub tokens: Vec<Token>,
}

impl LexedFile {
    /// The input text, rebuilt from the token texts.
    pub fn source(&self) -> String {
        self.tokens.iter().map(Token::text).collect()
    }
}

/// Display name for an input path.
pub fn display_name(path: &Path) -> String {
    if path == Path::new(STDIN_PATH) {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

/// Lex one input, streaming it from disk or standard input.
pub fn lex_file(path: &Path) -> Result<LexedFile> {
    let engine = Engine::new();
    let tokens = if path == Path::new(STDIN_PATH) {
        engine.tokenize_source(ReaderSource::new(io::stdin().lock()))?
    } else {
        let file = File::open(path).map_err(|e| {
            LextError::FileOperation(format!("{}: {}", path.display(), e))
        })?;
        engine.tokenize_source(ReaderSource::new(BufReader::new(file)))?
    };
    debug!(file = %path.display(), tokens = tokens.len(), "lexed");
    Ok(LexedFile {
        name: display_name(path),
        tokens,
    })
}

/// Build the worker pool for `jobs` parallel inputs.
pub fn build_pool(jobs: usize) -> Result<ThreadPool> {
    if jobs == 0 {
        return Err(LextError::Validation(
            error_messages::ZERO_JOBS.to_string(),
        ));
    }
    rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .map_err(|e| LextError::Config(format!("Failed to start worker pool: {}", e)))
}

/// Run `work` over every input on the pool, keeping input order.
pub fn for_each_input<T, F>(pool: &ThreadPool, inputs: &[PathBuf], work: F) -> Vec<Result<T>>
where
    T: Send,
    F: Fn(&Path) -> Result<T> + Sync,
{
    pool.install(|| inputs.par_iter().map(|path| work(path)).collect())
}

/// Reject an empty input list.
pub fn validate_inputs(inputs: &[PathBuf]) -> Result<()> {
    if inputs.is_empty() {
        return Err(LextError::Validation(
            error_messages::NO_INPUT_FILES.to_string(),
        ));
    }
    Ok(())
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when an unknown format is specified.
    pub const UNKNOWN_FORMAT: &str = "Unknown output format";

    /// Error when the job count is zero.
    pub const ZERO_JOBS: &str = "Number of jobs must be at least 1";

    /// Error when inputs could not be read.
    pub const FILES_FAILED: &str = "file(s) could not be read";

    /// Error when inputs contain lexical errors.
    pub const LEXICAL_ERRORS: &str = "lexical error(s) found";
}
