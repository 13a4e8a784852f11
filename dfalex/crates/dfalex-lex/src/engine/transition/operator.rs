//! Operators and the dot family.
//!
//! Compound operators grow one character at a time. Once an operator can
//! grow no further, another operator character glued to it has no valid
//! reading and poisons the run (`=>`, `<=>`, `+*`).

use super::{EmitAs, Emission, Transition};
use crate::classify::{is_decimal_digit, is_operator_char};
use crate::engine::state::EngineState;
use crate::token::TokenKind;

/// No extension matched: poison on an operator character, else close
fn operator_end(c: char) -> Transition {
    if is_operator_char(c) {
        Transition::invalid()
    } else {
        Transition::emit_before(TokenKind::Operator)
    }
}

/// `>=` and `>>`
pub(super) fn greater(c: char) -> Transition {
    match c {
        '=' => Transition::emit(TokenKind::Operator),
        '>' => Transition::goto(EngineState::DoubleGreater),
        c => operator_end(c),
    }
}

/// `>>>`
pub(super) fn double_greater(c: char) -> Transition {
    match c {
        '>' => Transition::emit(TokenKind::Operator),
        c => operator_end(c),
    }
}

/// `<=`, `<>` and `<<`
pub(super) fn less(c: char) -> Transition {
    match c {
        '=' | '>' | '<' => Transition::emit(TokenKind::Operator),
        c => operator_end(c),
    }
}

/// `&&` and `&=`
pub(super) fn ampersand(c: char) -> Transition {
    match c {
        '&' => Transition::emit(TokenKind::Operator),
        '=' => Transition::goto(EngineState::OperatorThenEqual),
        c => operator_end(c),
    }
}

/// `||` and `|=`
pub(super) fn pipe(c: char) -> Transition {
    match c {
        '|' => Transition::emit(TokenKind::Operator),
        '=' => Transition::goto(EngineState::OperatorThenEqual),
        c => operator_end(c),
    }
}

/// `^= != *= == %=`, and the tail of `++`/`--`
pub(super) fn single_operator(c: char) -> Transition {
    match c {
        '=' => Transition::goto(EngineState::OperatorThenEqual),
        c => operator_end(c),
    }
}

/// `++`/`+=` or `--`/`-=`, with `twin` the character already seen
pub(super) fn plus_or_minus(c: char, twin: char) -> Transition {
    match c {
        c if c == twin => Transition::goto(EngineState::SingleOperator),
        '=' => Transition::goto(EngineState::OperatorThenEqual),
        c => operator_end(c),
    }
}

/// `::` is a separator; a lone `:` is an operator
pub(super) fn colon(c: char) -> Transition {
    match c {
        ':' => Transition::emit(TokenKind::Separator),
        c => operator_end(c),
    }
}

pub(super) fn operator_then_equal(c: char) -> Transition {
    operator_end(c)
}

/// A `.` followed by a digit starts a fraction
pub(super) fn dot(c: char) -> Transition {
    match c {
        c if is_decimal_digit(c) => Transition::goto(EngineState::PointInDigit),
        '.' => Transition::goto(EngineState::DoubleDot),
        _ => Transition::emit_before(TokenKind::Separator),
    }
}

/// `...` is one separator; `..` followed by anything else is two
pub(super) fn double_dot(c: char) -> Transition {
    match c {
        '.' => Transition::emit(TokenKind::Separator),
        // emit the first dot, rescan `.c` as a fresh dot
        _ => Transition {
            next: EngineState::Dot,
            emit: Some(Emission {
                kind: EmitAs::Kind(TokenKind::Separator),
                keep: 2,
            }),
            replay: true,
        },
    }
}
