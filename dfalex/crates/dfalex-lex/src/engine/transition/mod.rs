//! The transition function.
//!
//! [`transition`] maps `(state, character)` to a [`Transition`] and nothing
//! else: it reads no buffer and touches no run state. The run loop applies
//! the result. Each lexeme family lives in its own submodule; this module
//! owns the dispatch, the `Initial` state and the end-of-input table.
//!
//! A transition may:
//! - stay in the current state, accumulating the character;
//! - move to another state, still accumulating;
//! - cut a token from the buffer, keeping the last `keep` characters for
//!   the next lexeme, and return to `Initial` (or the state it names);
//! - ask for the current character to be replayed against the new state.

mod comment;
mod identifier;
mod number;
mod operator;
mod string;

use crate::classify::{is_ident_start, is_illegal, is_separator};
use crate::token::TokenKind;

use super::state::EngineState;

/// How to classify an emitted token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmitAs {
    /// A fixed kind
    Kind(TokenKind),
    /// Decide by the text: null, boolean, keyword or identifier
    Word,
}

/// A token cut from the front of the buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Emission {
    /// Classification of the emitted text
    pub kind: EmitAs,
    /// Trailing characters left in the buffer after the cut
    pub keep: usize,
}

/// Outcome of feeding one character to one state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// State after the step
    pub next: EngineState,
    /// Token to cut before moving on, if any
    pub emit: Option<Emission>,
    /// Feed the same character again, to `next`
    pub replay: bool,
}

impl Transition {
    /// Keep accumulating in `state`
    #[inline]
    pub const fn stay(state: EngineState) -> Self {
        Self::goto(state)
    }

    /// Accumulate and move to `next`
    #[inline]
    pub const fn goto(next: EngineState) -> Self {
        Self {
            next,
            emit: None,
            replay: false,
        }
    }

    /// The buffer, including this character, is one complete token
    #[inline]
    pub const fn emit(kind: TokenKind) -> Self {
        Self {
            next: EngineState::Initial,
            emit: Some(Emission {
                kind: EmitAs::Kind(kind),
                keep: 0,
            }),
            replay: false,
        }
    }

    /// Everything before this character is a token; rescan the character
    #[inline]
    pub const fn emit_before(kind: TokenKind) -> Self {
        Self::cut_before(EmitAs::Kind(kind))
    }

    /// Like [`emit_before`](Self::emit_before), classifying the text as a word
    #[inline]
    pub const fn word_before() -> Self {
        Self::cut_before(EmitAs::Word)
    }

    const fn cut_before(kind: EmitAs) -> Self {
        Self {
            next: EngineState::Initial,
            emit: Some(Emission { kind, keep: 1 }),
            replay: true,
        }
    }

    /// The buffer can no longer form a valid lexeme
    #[inline]
    pub const fn invalid() -> Self {
        Self::goto(EngineState::Invalid)
    }
}

/// Feed one character to one state
///
/// # Example
///
/// ```
/// use dfalex_lex::engine::{transition, EngineState, Transition};
/// use dfalex_lex::TokenKind;
///
/// assert_eq!(
///     transition(EngineState::Less, '='),
///     Transition::emit(TokenKind::Operator)
/// );
/// assert_eq!(
///     transition(EngineState::Less, 'x'),
///     Transition::emit_before(TokenKind::Operator)
/// );
/// ```
pub fn transition(state: EngineState, c: char) -> Transition {
    if state.rejects_illegal() && is_illegal(c) {
        return Transition::emit_before(TokenKind::Error);
    }

    use EngineState::*;
    match state {
        Initial => initial(c),
        Invalid => Transition::emit_before(TokenKind::Error),

        IdentifierPart => identifier::identifier_part(c),

        ZeroFirst => number::zero_first(c),
        NonZeroDigit => number::non_zero_digit(c),
        OctalDigits => number::octal_digits(c),
        BinaryDigits => number::binary_digits(c),
        HexDigits => number::hex_digits(c),
        PointInDigit => number::point_in_digit(c),
        IntegerSuffix => number::suffix(c, TokenKind::IntLiteral),
        FloatSuffix => number::suffix(c, TokenKind::FloatLiteral),

        CharLiteral => string::char_literal(c),
        EscapeInChar => string::escape_in_char(c),
        ExpectCharClose => string::expect_char_close(c),
        StringLiteral => string::string_literal(c),
        EscapeInString => string::escape_in_string(c),

        Slash => comment::slash(c),
        SingleLineComment => comment::single_line(c),
        MultiLineComment => comment::multi_line(c),
        StarInComment => comment::star_in_comment(c),

        Dot => operator::dot(c),
        DoubleDot => operator::double_dot(c),
        Greater => operator::greater(c),
        DoubleGreater => operator::double_greater(c),
        Less => operator::less(c),
        Ampersand => operator::ampersand(c),
        SingleOperator => operator::single_operator(c),
        Colon => operator::colon(c),
        Plus => operator::plus_or_minus(c, '+'),
        Minus => operator::plus_or_minus(c, '-'),
        Pipe => operator::pipe(c),
        OperatorThenEqual => operator::operator_then_equal(c),
    }
}

fn initial(c: char) -> Transition {
    use EngineState::*;
    match c {
        '/' => Transition::goto(Slash),
        c if c.is_whitespace() => Transition::emit(TokenKind::Whitespace),
        c if is_ident_start(c) => Transition::goto(IdentifierPart),
        '0' => Transition::goto(ZeroFirst),
        '1'..='9' => Transition::goto(NonZeroDigit),
        '\'' => Transition::goto(CharLiteral),
        '"' => Transition::goto(StringLiteral),
        '.' => Transition::goto(Dot),
        c if is_separator(c) => Transition::emit(TokenKind::Separator),
        '>' => Transition::goto(Greater),
        '<' => Transition::goto(Less),
        '&' => Transition::goto(Ampersand),
        '^' | '!' | '*' | '=' | '%' => Transition::goto(SingleOperator),
        ':' => Transition::goto(Colon),
        '+' => Transition::goto(Plus),
        '-' => Transition::goto(Minus),
        '|' => Transition::goto(Pipe),
        '?' | '~' => Transition::emit(TokenKind::Operator),
        // illegal characters, and digits from other scripts
        _ => Transition::goto(Invalid),
    }
}

/// Close whatever is pending when the source runs dry
///
/// Applied repeatedly until the state is `Initial`; only `DoubleDot` needs
/// two rounds.
///
/// # Example
///
/// ```
/// use dfalex_lex::engine::{end_of_input, EngineState, Transition};
/// use dfalex_lex::TokenKind;
///
/// assert_eq!(
///     end_of_input(EngineState::StringLiteral),
///     Transition::emit(TokenKind::Error)
/// );
/// ```
pub fn end_of_input(state: EngineState) -> Transition {
    use EngineState::*;
    let kind = match state {
        Initial => return Transition::goto(Initial),
        IdentifierPart => {
            return Transition {
                next: Initial,
                emit: Some(Emission {
                    kind: EmitAs::Word,
                    keep: 0,
                }),
                replay: false,
            }
        }
        DoubleDot => {
            return Transition {
                next: Dot,
                emit: Some(Emission {
                    kind: EmitAs::Kind(TokenKind::Separator),
                    keep: 1,
                }),
                replay: false,
            }
        }
        Slash | Greater | DoubleGreater | Less | Ampersand | SingleOperator | Colon | Plus
        | Minus | Pipe | OperatorThenEqual => TokenKind::Operator,
        ZeroFirst | NonZeroDigit | OctalDigits | BinaryDigits | HexDigits | IntegerSuffix => {
            TokenKind::IntLiteral
        }
        PointInDigit | FloatSuffix => TokenKind::FloatLiteral,
        Dot => TokenKind::Separator,
        SingleLineComment => TokenKind::Comment,
        CharLiteral | EscapeInChar | ExpectCharClose | StringLiteral | EscapeInString
        | MultiLineComment | StarInComment | Invalid => TokenKind::Error,
    };
    Transition::emit(kind)
}
