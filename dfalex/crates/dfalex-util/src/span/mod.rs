//! Span module - Source location tracking.
//!
//! A [`Span`] pairs a byte range with the human-readable position of its
//! first character. Lines and columns are 1-based; columns count characters,
//! not bytes, so a span after a multi-byte character still points at the
//! column an editor would show.

mod source_file;

pub use source_file::SourceFile;

use std::fmt;

/// Source location span
///
/// Displays as `line:column`.
///
/// # Examples
///
/// ```
/// use dfalex_util::span::Span;
///
/// let span = Span::new(4, 7, 2, 1);
/// assert_eq!(span.to_string(), "2:1");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number in characters (1-based)
    pub column: u32,
}

impl Span {
    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_new() {
        let span = Span::new(10, 20, 1, 5);
        assert_eq!(span.start, 10);
        assert_eq!(span.end, 20);
        assert_eq!(span.line, 1);
        assert_eq!(span.column, 5);
    }

    #[test]
    fn test_span_display() {
        assert_eq!(Span::new(0, 1, 3, 7).to_string(), "3:7");
    }
}
