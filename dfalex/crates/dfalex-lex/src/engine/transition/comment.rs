//! `/`, `/=` and both comment forms.

use super::Transition;
use crate::classify::{is_line_terminator, is_operator_char};
use crate::engine::state::EngineState;
use crate::token::TokenKind;

pub(super) fn slash(c: char) -> Transition {
    match c {
        '/' => Transition::goto(EngineState::SingleLineComment),
        '*' => Transition::goto(EngineState::MultiLineComment),
        '=' => Transition::goto(EngineState::OperatorThenEqual),
        c if is_operator_char(c) => Transition::invalid(),
        _ => Transition::emit_before(TokenKind::Operator),
    }
}

/// The terminator is not part of the comment
pub(super) fn single_line(c: char) -> Transition {
    if is_line_terminator(c) {
        Transition::emit_before(TokenKind::Comment)
    } else {
        Transition::stay(EngineState::SingleLineComment)
    }
}

pub(super) fn multi_line(c: char) -> Transition {
    if c == '*' {
        Transition::goto(EngineState::StarInComment)
    } else {
        Transition::stay(EngineState::MultiLineComment)
    }
}

/// `*` runs may precede the closing `/`, as in `/** doc **/`
pub(super) fn star_in_comment(c: char) -> Transition {
    match c {
        '/' => Transition::emit(TokenKind::Comment),
        '*' => Transition::stay(EngineState::StarInComment),
        _ => Transition::goto(EngineState::MultiLineComment),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use EngineState::*;

    #[test]
    fn test_slash_openers() {
        assert_eq!(slash('/'), Transition::goto(SingleLineComment));
        assert_eq!(slash('*'), Transition::goto(MultiLineComment));
        assert_eq!(slash('='), Transition::goto(OperatorThenEqual));
        assert_eq!(slash('+'), Transition::invalid());
        assert_eq!(slash('x'), Transition::emit_before(TokenKind::Operator));
    }

    #[test]
    fn test_single_line_stops_before_terminator() {
        assert_eq!(single_line('x'), Transition::stay(SingleLineComment));
        assert_eq!(single_line('\t'), Transition::stay(SingleLineComment));
        assert_eq!(single_line('\n'), Transition::emit_before(TokenKind::Comment));
        assert_eq!(single_line('\r'), Transition::emit_before(TokenKind::Comment));
    }

    #[test]
    fn test_lone_star_returns_to_body() {
        assert_eq!(multi_line('*'), Transition::goto(StarInComment));
        assert_eq!(star_in_comment('x'), Transition::goto(MultiLineComment));
        assert_eq!(star_in_comment('*'), Transition::stay(StarInComment));
        assert_eq!(star_in_comment('/'), Transition::emit(TokenKind::Comment));
    }
}
