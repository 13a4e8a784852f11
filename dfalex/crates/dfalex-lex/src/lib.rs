//! dfalex-lex - DFA lexer for a Java-flavoured C-family language
//!
//! This crate turns source text into an ordered sequence of classified
//! tokens. It is the front end for tools such as parsers, formatters and
//! highlighters; it does not parse.
//!
//! # Overview
//!
//! Lexing is driven by a deterministic finite automaton that consumes one
//! character at a time. Each step is a pure function of the current state
//! and the character; the run loop appends the character to a buffer,
//! applies the step, and cuts tokens off the front of the buffer when a
//! lexeme closes. A character that ends a lexeme without belonging to it is
//! replayed against the fresh state.
//!
//! Lexemes grow by maximal munch: `<=` is one operator, `>>>` is one
//! operator, `...` is one separator.
//!
//! # Example Usage
//!
//! ```
//! use dfalex_lex::{tokenize, TokenKind};
//!
//! let tokens = tokenize("int x = 0x1F; // mask");
//! let significant: Vec<_> = tokens
//!     .iter()
//!     .filter(|t| !t.is_trivia())
//!     .map(|t| (t.kind(), t.text()))
//!     .collect();
//!
//! assert_eq!(
//!     significant,
//!     [
//!         (TokenKind::Keyword, "int"),
//!         (TokenKind::Identifier, "x"),
//!         (TokenKind::Operator, "="),
//!         (TokenKind::IntLiteral, "0x1F"),
//!         (TokenKind::Separator, ";"),
//!     ]
//! );
//!
//! // the token texts always rebuild the input
//! let rebuilt: String = tokens.iter().map(|t| t.text()).collect();
//! assert_eq!(rebuilt, "int x = 0x1F; // mask");
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token kind
//! - [`classify`] - Character and word classification
//! - [`engine`] - The automaton, the run loop and the token stream
//! - [`source`] - Fallible character sources
//! - [`locate`] - Spans for a token sequence
//! - [`diagnose`] - Diagnostics for error tokens
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! The 50 reserved words of the language, from `abstract` to `while`.
//! `true`, `false` and `null` are literals, not keywords.
//!
//! ## Literals
//!
//! - **Integer**: `42`, `07`, `0x1F`, `0b1010`, `0x7FFF_FFFFL`
//! - **Float**: `3.14`, `.5`, `1f`, `2.5d`
//! - **Character**: `'a'`, `'\n'`
//! - **String**: `"hello\t"`
//!
//! ## Operators
//!
//! - **Arithmetic**: `+ - * / % ++ --`
//! - **Comparison**: `== != < > <= >= <>`
//! - **Logical and bitwise**: `&& || ! & | ^ ~ << >> >>>`
//! - **Assignment**: `= += -= *= /= %= &= |= ^=`
//! - **Other**: `? :`
//!
//! ## Separators
//!
//! `( ) { } [ ] ; ,`, the dot forms `.` and `...`, and `::`.
//!
//! ## Trivia
//!
//! Every whitespace character is its own token. Comments run from `//` to
//! the line break or from `/*` to `*/`.
//!
//! ## Errors
//!
//! Malformed input never stops the lexer. It becomes an `Error` token and
//! scanning resumes right after it; [`diagnose`] explains each one.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod diagnose;
pub mod engine;
pub mod error;
pub mod locate;
pub mod source;
pub mod token;

mod edge_cases;

pub use diagnose::{diagnose, report_errors, report_errors_in, ErrorCause};
pub use engine::{Engine, TokenStream};
pub use error::{SourceError, SourceResult};
pub use locate::{locate, SpannedToken};
pub use source::{CharSource, ReaderSource};
pub use token::{Token, TokenKind};

/// Tokenize a string
///
/// Shorthand for `Engine::new().tokenize_chars(source.chars())`.
pub fn tokenize(source: &str) -> Vec<Token> {
    Engine::new().tokenize_chars(source.chars())
}
