//! Error types for character sources.
//!
//! Lexical problems never surface here; they become `Error` tokens. The
//! only way a tokenization run can fail is the source itself failing.

use thiserror::Error;

/// Failure while pulling characters from a source
#[derive(Debug, Error)]
pub enum SourceError {
    /// The underlying reader failed
    #[error("failed to read source: {0}")]
    Io(#[from] std::io::Error),

    /// The byte stream is not valid UTF-8
    #[error("invalid UTF-8 at byte offset {offset}")]
    InvalidUtf8 {
        /// Offset of the first byte of the bad sequence
        offset: usize,
    },
}

/// Result alias for source operations
pub type SourceResult<T> = std::result::Result<T, SourceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_utf8_display() {
        let err = SourceError::InvalidUtf8 { offset: 12 };
        assert_eq!(err.to_string(), "invalid UTF-8 at byte offset 12");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: SourceError = io_err.into();
        assert!(matches!(err, SourceError::Io(_)));
        assert_eq!(err.to_string(), "failed to read source: eof");
    }
}
