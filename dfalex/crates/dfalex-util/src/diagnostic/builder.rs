//! Diagnostic builder for fluent diagnostic construction.

use super::{Diagnostic, DiagnosticCode, Level};
use crate::Span;

/// A source line with a caret underline, shown beneath a diagnostic
///
/// # Examples
///
/// ```
/// use dfalex_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("int x = 08;", 1, 9, 11, Some("not octal"));
/// assert_eq!(
///     snippet.format(),
///     "  1 | int x = 08;\n    |         ^^ not octal"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column just past the issue (1-based, exclusive)
    pub end_column: usize,
    /// Optional label to display under the highlighted range
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Create a new source snippet
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
        label: Option<impl Into<String>>,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: label.map(Into::into),
        }
    }

    /// Format the snippet for display
    ///
    /// The underline is at least one caret wide, even for a point snippet.
    pub fn format(&self) -> String {
        let width = self.line_number.to_string().len().max(3);
        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);

        let mut result = format!("{:>width$} | {}\n", self.line_number, self.line);
        result.push_str(&format!("{:>width$} | ", ""));
        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));
        if let Some(label) = &self.label {
            result.push(' ');
            result.push_str(label);
        }
        result
    }
}

/// Builder for constructing error diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use dfalex_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
/// use dfalex_util::Span;
///
/// let diag = DiagnosticBuilder::error("illegal character `#`")
///     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
///     .span(Span::new(1, 2, 1, 2))
///     .help("remove it")
///     .build();
/// assert_eq!(diag.level, Level::Error);
/// assert_eq!(diag.helps, vec!["remove it".to_string()]);
/// ```
#[derive(Debug)]
pub struct DiagnosticBuilder {
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Start an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span: Span::default(),
            code: None,
            helps: Vec::new(),
        }
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source location
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a help suggestion
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Finish building
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: Level::Error,
            message: self.message,
            span: self.span,
            code: self.code,
            helps: self.helps,
            snippets: Vec::new(),
        }
    }
}
