//! Character and string literals.

use super::Transition;
use crate::classify::{is_escape_char, is_line_terminator};
use crate::engine::state::EngineState;
use crate::token::TokenKind;

/// Right after the opening `'`
pub(super) fn char_literal(c: char) -> Transition {
    match c {
        '\\' => Transition::goto(EngineState::EscapeInChar),
        // a raw line break ends the broken literal before the break
        c if is_line_terminator(c) => Transition::emit_before(TokenKind::Error),
        // `''` has no content
        '\'' => Transition::invalid(),
        _ => Transition::goto(EngineState::ExpectCharClose),
    }
}

pub(super) fn escape_in_char(c: char) -> Transition {
    match c {
        c if is_escape_char(c) => Transition::goto(EngineState::ExpectCharClose),
        c => broken(c),
    }
}

pub(super) fn expect_char_close(c: char) -> Transition {
    match c {
        '\'' => Transition::emit(TokenKind::CharLiteral),
        c => broken(c),
    }
}

pub(super) fn string_literal(c: char) -> Transition {
    match c {
        '\\' => Transition::goto(EngineState::EscapeInString),
        '"' => Transition::emit(TokenKind::StringLiteral),
        c if is_line_terminator(c) => Transition::emit_before(TokenKind::Error),
        _ => Transition::stay(EngineState::StringLiteral),
    }
}

pub(super) fn escape_in_string(c: char) -> Transition {
    match c {
        c if is_escape_char(c) => Transition::goto(EngineState::StringLiteral),
        c => broken(c),
    }
}

/// A literal that can no longer close; a line break is left for the next
/// lexeme, anything else joins the error
fn broken(c: char) -> Transition {
    if is_line_terminator(c) {
        Transition::emit_before(TokenKind::Error)
    } else {
        Transition::invalid()
    }
}
