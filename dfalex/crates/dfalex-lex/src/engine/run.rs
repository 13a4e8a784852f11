//! One tokenization run.
//!
//! A [`Run`] owns everything that changes while a source is scanned: the
//! current state, the text of the pending lexeme and the tokens emitted so
//! far. Nothing here outlives the run or is shared with another one.

use tracing::{trace, warn};

use super::state::EngineState;
use super::transition::{end_of_input, transition, EmitAs, Emission};
use crate::classify::classify_word;
use crate::token::{Token, TokenKind};

/// Upper bound on dispatches of a single character
///
/// The longest chain is `..x`: split the first dot off, close the second,
/// then scan `x` from `Initial`.
pub const MAX_DISPATCHES: usize = 3;

/// Mutable state of one tokenization
#[derive(Debug)]
pub struct Run {
    state: EngineState,
    buffer: String,
    output: Vec<Token>,
}

impl Default for Run {
    fn default() -> Self {
        Self::new()
    }
}

impl Run {
    /// A fresh run in the `Initial` state
    pub fn new() -> Self {
        Self {
            state: EngineState::Initial,
            buffer: String::new(),
            output: Vec::new(),
        }
    }

    /// Current automaton state
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Text of the lexeme being built
    pub fn pending(&self) -> &str {
        &self.buffer
    }

    /// Tokens emitted so far
    pub fn tokens(&self) -> &[Token] {
        &self.output
    }

    /// Move the emitted tokens out, leaving the run ready for more input
    pub fn drain_tokens(&mut self) -> std::vec::Drain<'_, Token> {
        self.output.drain(..)
    }

    /// Consume one character
    ///
    /// The character is buffered once, then dispatched; while a transition
    /// asks for a replay it is dispatched again to the new state. The
    /// character stays in the buffer across replays, so it is never
    /// counted twice.
    pub fn feed(&mut self, c: char) {
        self.buffer.push(c);

        for round in 1..=MAX_DISPATCHES {
            let from = self.state;
            let step = transition(from, c);
            if let Some(emission) = step.emit {
                self.cut(emission);
            }
            self.state = step.next;

            if !step.replay {
                return;
            }
            debug_assert_ne!(from, step.next, "replay of {c:?} from {from} without moving");
            trace!(?from, to = ?step.next, ?c, round, "replay");
        }

        // Unreachable with the shipped table; never loop or drop text.
        warn!(state = ?self.state, ?c, "replay bound exceeded, flushing as error");
        self.flush(TokenKind::Error);
    }

    /// Close the pending lexeme at end of input and return all tokens
    pub fn finish(mut self) -> Vec<Token> {
        self.close();
        self.output
    }

    /// Close the pending lexeme at end of input, keeping the run usable
    pub fn close(&mut self) {
        for _ in 0..MAX_DISPATCHES {
            if self.state == EngineState::Initial {
                break;
            }
            let step = end_of_input(self.state);
            if let Some(emission) = step.emit {
                self.cut(emission);
            }
            self.state = step.next;
        }
        if !self.buffer.is_empty() {
            warn!(state = ?self.state, "pending text left after end of input");
            self.flush(TokenKind::Error);
        }
    }

    /// Emit the buffer minus its last `keep` characters
    fn cut(&mut self, emission: Emission) {
        let split = match emission.keep {
            0 => self.buffer.len(),
            keep => self
                .buffer
                .char_indices()
                .rev()
                .nth(keep - 1)
                .map_or(0, |(i, _)| i),
        };
        if split == 0 {
            return;
        }
        let rest = self.buffer.split_off(split);
        let text = std::mem::replace(&mut self.buffer, rest);
        let kind = match emission.kind {
            EmitAs::Kind(kind) => kind,
            EmitAs::Word => classify_word(&text),
        };
        if kind == TokenKind::Error {
            trace!(text = %text, "error token");
        }
        self.output.push(Token::new(kind, text));
    }

    fn flush(&mut self, kind: TokenKind) {
        if !self.buffer.is_empty() {
            let text = std::mem::take(&mut self.buffer);
            self.output.push(Token::new(kind, text));
        }
        self.state = EngineState::Initial;
    }
}
