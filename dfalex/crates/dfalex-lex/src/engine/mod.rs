//! The lexing automaton.
//!
//! - [`state`]: the closed set of automaton states
//! - [`transition`](mod@transition): the pure `(state, char)` step function and
//!   the end-of-input table
//! - [`run`]: the per-run state and the replay loop
//! - [`stream`]: a lazy iterator over tokens

pub mod run;
pub mod state;
pub mod stream;
pub mod transition;

pub use run::{Run, MAX_DISPATCHES};
pub use state::EngineState;
pub use stream::TokenStream;
pub use transition::{end_of_input, transition, EmitAs, Emission, Transition};

use tracing::debug;

use crate::error::SourceResult;
use crate::source::CharSource;
use crate::token::Token;

/// Entry point for tokenizing
///
/// `Engine` holds no state between calls; each call starts a fresh
/// [`Run`]. One engine may be shared freely across threads.
///
/// # Example
///
/// ```
/// use dfalex_lex::{Engine, TokenKind};
///
/// let tokens = Engine::new().tokenize_chars("x <= 1".chars());
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Identifier,
///         TokenKind::Whitespace,
///         TokenKind::Operator,
///         TokenKind::Whitespace,
///         TokenKind::IntLiteral,
///     ]
/// );
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Engine;

impl Engine {
    /// Create an engine
    pub const fn new() -> Self {
        Engine
    }

    /// Tokenize an in-memory character sequence
    pub fn tokenize_chars(&self, chars: impl IntoIterator<Item = char>) -> Vec<Token> {
        let mut run = Run::new();
        let mut consumed = 0usize;
        for c in chars {
            run.feed(c);
            consumed += 1;
        }
        let tokens = run.finish();
        debug!(chars = consumed, tokens = tokens.len(), "tokenized");
        tokens
    }

    /// Tokenize a source that may fail while being read
    ///
    /// A source failure aborts the run; tokens lexed before it are dropped.
    pub fn tokenize_source(&self, mut source: impl CharSource) -> SourceResult<Vec<Token>> {
        let mut run = Run::new();
        let mut consumed = 0usize;
        while let Some(c) = source.next_char()? {
            run.feed(c);
            consumed += 1;
        }
        let tokens = run.finish();
        debug!(chars = consumed, tokens = tokens.len(), "tokenized source");
        Ok(tokens)
    }

    /// Lazily tokenize a character iterator
    pub fn stream<I: Iterator<Item = char>>(&self, chars: I) -> TokenStream<I> {
        TokenStream::new(chars)
    }
}
