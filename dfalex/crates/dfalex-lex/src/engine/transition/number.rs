//! Integer and floating-point literals.
//!
//! Digit runs grow greedily. A letter or digit that the current run cannot
//! take poisons the whole literal (`123abc`, `08`, `0b12`), which then
//! surfaces as one error token.

use super::Transition;
use crate::classify::{
    is_binary_digit, is_decimal_digit, is_hex_digit, is_ident_continue, is_integer_suffix,
    is_numeric_suffix_float, is_octal_digit,
};
use crate::engine::state::EngineState;
use crate::token::TokenKind;

/// Shared tail of every integer state: a suffix, a poisoning character, or
/// the end of the literal
fn integer_tail(c: char) -> Transition {
    if is_integer_suffix(c) {
        Transition::goto(EngineState::IntegerSuffix)
    } else if is_ident_continue(c) {
        Transition::invalid()
    } else {
        Transition::emit_before(TokenKind::IntLiteral)
    }
}

pub(super) fn zero_first(c: char) -> Transition {
    match c {
        c if is_octal_digit(c) => Transition::goto(EngineState::OctalDigits),
        'b' | 'B' => Transition::goto(EngineState::BinaryDigits),
        'x' | 'X' => Transition::goto(EngineState::HexDigits),
        '.' => Transition::goto(EngineState::PointInDigit),
        c => integer_tail(c),
    }
}

pub(super) fn non_zero_digit(c: char) -> Transition {
    match c {
        c if is_decimal_digit(c) => Transition::stay(EngineState::NonZeroDigit),
        '.' => Transition::goto(EngineState::PointInDigit),
        c if is_numeric_suffix_float(c) => Transition::goto(EngineState::FloatSuffix),
        c => integer_tail(c),
    }
}

pub(super) fn octal_digits(c: char) -> Transition {
    match c {
        c if is_octal_digit(c) || c == '_' => Transition::stay(EngineState::OctalDigits),
        'f' | 'F' => Transition::goto(EngineState::FloatSuffix),
        c => integer_tail(c),
    }
}

pub(super) fn binary_digits(c: char) -> Transition {
    if is_binary_digit(c) || c == '_' {
        Transition::stay(EngineState::BinaryDigits)
    } else {
        integer_tail(c)
    }
}

pub(super) fn hex_digits(c: char) -> Transition {
    if is_hex_digit(c) || c == '_' {
        Transition::stay(EngineState::HexDigits)
    } else {
        integer_tail(c)
    }
}

/// Digits after the decimal point
pub(super) fn point_in_digit(c: char) -> Transition {
    match c {
        c if is_decimal_digit(c) => Transition::stay(EngineState::PointInDigit),
        c if is_numeric_suffix_float(c) => Transition::goto(EngineState::FloatSuffix),
        c if is_ident_continue(c) || c == '.' => Transition::invalid(),
        _ => Transition::emit_before(TokenKind::FloatLiteral),
    }
}

/// After a suffix nothing word-like may follow
pub(super) fn suffix(c: char, kind: TokenKind) -> Transition {
    if is_ident_continue(c) {
        Transition::invalid()
    } else {
        Transition::emit_before(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use EngineState::*;

    #[test]
    fn test_zero_first_branches() {
        assert_eq!(zero_first('7'), Transition::goto(OctalDigits));
        assert_eq!(zero_first('B'), Transition::goto(BinaryDigits));
        assert_eq!(zero_first('x'), Transition::goto(HexDigits));
        assert_eq!(zero_first('.'), Transition::goto(PointInDigit));
        assert_eq!(zero_first('L'), Transition::goto(IntegerSuffix));
        assert_eq!(zero_first('8'), Transition::invalid());
        assert_eq!(zero_first('_'), Transition::invalid());
        assert_eq!(zero_first(';'), Transition::emit_before(TokenKind::IntLiteral));
    }

    #[test]
    fn test_decimal_suffixes() {
        assert_eq!(non_zero_digit('f'), Transition::goto(FloatSuffix));
        assert_eq!(non_zero_digit('D'), Transition::goto(FloatSuffix));
        assert_eq!(non_zero_digit('l'), Transition::goto(IntegerSuffix));
        assert_eq!(non_zero_digit('a'), Transition::invalid());
        assert_eq!(non_zero_digit('_'), Transition::invalid());
    }

    #[test]
    fn test_underscore_only_in_prefixed_runs() {
        assert_eq!(octal_digits('_'), Transition::stay(OctalDigits));
        assert_eq!(binary_digits('_'), Transition::stay(BinaryDigits));
        assert_eq!(hex_digits('_'), Transition::stay(HexDigits));
    }

    #[test]
    fn test_runs_reject_foreign_digits() {
        assert_eq!(octal_digits('8'), Transition::invalid());
        assert_eq!(binary_digits('2'), Transition::invalid());
        assert_eq!(hex_digits('g'), Transition::invalid());
    }

    #[test]
    fn test_hex_f_is_a_digit() {
        assert_eq!(hex_digits('f'), Transition::stay(HexDigits));
    }

    #[test]
    fn test_fraction() {
        assert_eq!(point_in_digit('5'), Transition::stay(PointInDigit));
        assert_eq!(point_in_digit('d'), Transition::goto(FloatSuffix));
        assert_eq!(point_in_digit('.'), Transition::invalid());
        assert_eq!(point_in_digit('e'), Transition::invalid());
        assert_eq!(point_in_digit(')'), Transition::emit_before(TokenKind::FloatLiteral));
    }

    #[test]
    fn test_suffix_must_end_literal() {
        assert_eq!(suffix('L', TokenKind::IntLiteral), Transition::invalid());
        assert_eq!(
            suffix(' ', TokenKind::FloatLiteral),
            Transition::emit_before(TokenKind::FloatLiteral)
        );
    }
}
