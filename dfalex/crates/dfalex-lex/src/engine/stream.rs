//! Lazy token iteration.

use std::collections::VecDeque;

use super::run::Run;
use crate::token::Token;

/// Iterator that lexes its input on demand
///
/// Characters are pulled only as far as needed to complete the next
/// token, so a caller can stop early without scanning the rest.
///
/// # Example
///
/// ```
/// use dfalex_lex::{TokenKind, TokenStream};
///
/// let mut stream = TokenStream::new("int x;".chars());
/// assert_eq!(stream.next().map(|t| t.kind()), Some(TokenKind::Keyword));
/// assert_eq!(stream.count(), 4);
/// ```
#[derive(Debug)]
pub struct TokenStream<I> {
    chars: I,
    run: Run,
    ready: VecDeque<Token>,
    finished: bool,
}

impl<I: Iterator<Item = char>> TokenStream<I> {
    /// Wrap a character iterator
    pub fn new(chars: I) -> Self {
        Self {
            chars,
            run: Run::new(),
            ready: VecDeque::new(),
            finished: false,
        }
    }
}

impl<I: Iterator<Item = char>> Iterator for TokenStream<I> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while self.ready.is_empty() && !self.finished {
            match self.chars.next() {
                Some(c) => self.run.feed(c),
                None => {
                    self.run.close();
                    self.finished = true;
                }
            }
            self.ready.extend(self.run.drain_tokens());
        }
        self.ready.pop_front()
    }
}

impl<I: Iterator<Item = char>> std::iter::FusedIterator for TokenStream<I> {}
