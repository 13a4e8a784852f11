//! Source files and line lookup.

use std::fmt;
use std::sync::Arc;

/// A source file with its content and precomputed line table
///
/// Lines end at `\n`, `\r` or `\r\n`, the same terminators the lexer
/// recognises.
///
/// # Examples
///
/// ```
/// use dfalex_util::span::SourceFile;
///
/// let file = SourceFile::new("a.java", "one\r\ntwo\rthree\nfour");
/// assert_eq!(file.line_at(1), Some("one"));
/// assert_eq!(file.line_at(2), Some("two"));
/// assert_eq!(file.line_at(4), Some("four"));
/// assert_eq!(file.line_at(5), None);
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Byte offset of the first character of every line
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn line_starts(content: &str) -> Arc<[usize]> {
        let bytes = content.as_bytes();
        let breaks = bytes.iter().enumerate().filter_map(|(i, &b)| match b {
            b'\n' => Some(i + 1),
            // \r\n breaks once, at the \n
            b'\r' if bytes.get(i + 1) != Some(&b'\n') => Some(i + 1),
            _ => None,
        });
        std::iter::once(0).chain(breaks).collect()
    }

    /// Get a specific source line (1-indexed), without its terminator
    pub fn line_at(&self, line: usize) -> Option<&str> {
        let start = *self.line_starts.get(line.checked_sub(1)?)?;
        let end = self
            .line_starts
            .get(line)
            .copied()
            .unwrap_or(self.content.len());
        self.content
            .get(start..end)
            .map(|text| text.trim_end_matches(['\n', '\r']))
    }
}

impl fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("len", &self.content.len())
            .field("lines", &self.line_starts.len())
            .finish()
    }
}
