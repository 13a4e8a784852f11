//! dfalex-util - Foundation types shared by the dfalex crates
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! The lexer itself deals only in characters and tokens. Everything that
//! turns a token stream into something a human can act on lives here:
//!
//! - [`span`]: byte ranges with 1-based line/column positions, plus
//!   [`SourceFile`] for looking up the text of a line.
//! - [`diagnostic`]: stable diagnostic codes, a fluent builder,
//!   caret-annotated source snippets and a collecting [`Handler`].
//!
//! # Example
//!
//! ```
//! use dfalex_util::{DiagnosticBuilder, DiagnosticCode, Handler, SourceFile, SourceSnippet, Span};
//!
//! let file = SourceFile::new("demo.java", "int x = 08;");
//! let snippet = SourceSnippet::new(file.line_at(1).unwrap_or(""), 1, 9, 11, Some("here"));
//!
//! let handler = Handler::new();
//! let diag = DiagnosticBuilder::error("invalid numeric literal")
//!     .code(DiagnosticCode::E_LEXER_INVALID_NUMBER)
//!     .span(Span::new(8, 10, 1, 9))
//!     .build()
//!     .with_snippet(snippet);
//! handler.emit_diagnostic(diag);
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use span::{SourceFile, Span};
