//! Diagnostic module - Error reporting infrastructure.
//!
//! Diagnostics are plain values. A [`Handler`] collects them in emission
//! order; callers decide afterwards whether the presence of errors is fatal.
//!
//! # Examples
//!
//! ```
//! use dfalex_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use dfalex_util::Span;
//!
//! let handler = Handler::new();
//! let diag = DiagnosticBuilder::error("unterminated string literal")
//!     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
//!     .span(Span::new(4, 9, 1, 5))
//!     .help("close the literal with `\"` before the end of the line")
//!     .build();
//! handler.emit_diagnostic(diag);
//!
//! assert!(handler.has_errors());
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use dfalex_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    /// A problem the caller should treat as a failure
    Error,
    /// A suggestion for fixing an issue
    Help,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Attach a source snippet
    pub fn with_snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Render the diagnostic as multi-line text
    ///
    /// `origin` names the file the span refers to; when present a
    /// `--> origin:line:col` line follows the header.
    ///
    /// # Examples
    ///
    /// ```
    /// use dfalex_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, SourceSnippet};
    /// use dfalex_util::Span;
    ///
    /// let diag = DiagnosticBuilder::error("illegal character `#`")
    ///     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
    ///     .span(Span::new(1, 2, 1, 2))
    ///     .build()
    ///     .with_snippet(SourceSnippet::new("a#b", 1, 2, 3, None::<String>));
    ///
    /// let text = diag.render(Some("A.java"));
    /// assert!(text.starts_with("error[E1001]: illegal character `#`\n  --> A.java:1:2\n"));
    /// assert!(text.ends_with("  1 | a#b\n    |  ^"));
    /// ```
    pub fn render(&self, origin: Option<&str>) -> String {
        let mut out = match self.code {
            Some(code) => format!("{}[{}]: {}", self.level, code, self.message),
            None => format!("{}: {}", self.level, self.message),
        };
        if let Some(origin) = origin {
            out.push_str(&format!("\n  --> {}:{}", origin, self.span));
        }
        for snippet in &self.snippets {
            out.push('\n');
            out.push_str(&snippet.format());
        }
        for help in &self.helps {
            out.push_str(&format!("\n    = {}: {}", Level::Help, help));
        }
        out
    }
}

/// Collects diagnostics during a run
///
/// The handler is single-threaded; parallel callers give each run its own.
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Drain all diagnostics, leaving the handler empty
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error(message: &str, span: Span) -> Diagnostic {
        DiagnosticBuilder::error(message).span(span).build()
    }

    #[test]
    fn test_level_display() {
        assert_eq!(Level::Error.to_string(), "error");
        assert_eq!(Level::Help.to_string(), "help");
    }

    #[test]
    fn test_render_without_origin_or_code() {
        let diag = DiagnosticBuilder::error("careful")
            .span(Span::new(0, 1, 2, 3))
            .help("look")
            .build();
        assert_eq!(diag.render(None), "error: careful\n    = help: look");
    }

    #[test]
    fn test_render_with_origin() {
        let diag = error("bad", Span::new(0, 1, 2, 3));
        assert_eq!(diag.render(Some("X.java")), "error: bad\n  --> X.java:2:3");
    }

    #[test]
    fn test_render_places_snippets_before_help() {
        let diag = DiagnosticBuilder::error("bad")
            .help("fix it")
            .build()
            .with_snippet(SourceSnippet::new("x", 1, 1, 2, None::<String>));
        assert_eq!(diag.render(None), "error: bad\n  1 | x\n    | ^\n    = help: fix it");
    }

    #[test]
    fn test_handler_counts() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        handler.emit_diagnostic(error("e1", Span::default()));
        handler.emit_diagnostic(error("e2", Span::default()));
        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 2);
    }

    #[test]
    fn test_handler_take_drains_in_order() {
        let handler = Handler::new();
        handler.emit_diagnostic(error("first", Span::default()));
        handler.emit_diagnostic(error("second", Span::default()));
        let taken = handler.take();
        assert_eq!(taken[0].message, "first");
        assert_eq!(taken[1].message, "second");
        assert!(!handler.has_errors());
        assert!(handler.take().is_empty());
    }
}
