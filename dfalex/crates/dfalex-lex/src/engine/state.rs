//! Automaton states.

use std::fmt;

/// A state of the lexing automaton
///
/// Every state except [`Initial`](EngineState::Initial) means "a lexeme is
/// being built"; the buffer then holds its text so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EngineState {
    /// Between lexemes; the buffer is empty
    Initial,
    /// After `/`: division, `/=`, or a comment opener
    Slash,
    /// Inside an identifier, keyword or word literal
    IdentifierPart,
    /// After a leading `0`
    ZeroFirst,
    /// Decimal digits not starting with `0`
    NonZeroDigit,
    /// After an opening `'`
    CharLiteral,
    /// Inside `"..."`
    StringLiteral,
    /// After a lone `.`
    Dot,
    /// After `..`
    DoubleDot,
    /// After `>`
    Greater,
    /// After `>>`
    DoubleGreater,
    /// After `<`
    Less,
    /// After `&`
    Ampersand,
    /// After one of `^ ! * = %`, or a doubled `++`/`--`
    SingleOperator,
    /// After `:`
    Colon,
    /// After `+`
    Plus,
    /// After `-`
    Minus,
    /// After `|`
    Pipe,
    /// Inside `// ...`
    SingleLineComment,
    /// Inside `/* ...`
    MultiLineComment,
    /// Inside a block comment, right after `*`
    StarInComment,
    /// Octal digits after a leading `0`
    OctalDigits,
    /// Binary digits after `0b`
    BinaryDigits,
    /// Hex digits after `0x`
    HexDigits,
    /// After an `l`/`L` suffix
    IntegerSuffix,
    /// After an `f`/`F`/`d`/`D` suffix
    FloatSuffix,
    /// Fraction digits after `.`
    PointInDigit,
    /// Inside a string literal, right after `\`
    EscapeInString,
    /// Inside a char literal, right after `\`
    EscapeInChar,
    /// A char literal's content is complete; only `'` may follow
    ExpectCharClose,
    /// An operator already ends in `=`
    OperatorThenEqual,
    /// The buffer can no longer become a valid lexeme
    Invalid,
}

impl EngineState {
    /// Every state, in declaration order
    pub const ALL: [EngineState; 32] = [
        EngineState::Initial,
        EngineState::Slash,
        EngineState::IdentifierPart,
        EngineState::ZeroFirst,
        EngineState::NonZeroDigit,
        EngineState::CharLiteral,
        EngineState::StringLiteral,
        EngineState::Dot,
        EngineState::DoubleDot,
        EngineState::Greater,
        EngineState::DoubleGreater,
        EngineState::Less,
        EngineState::Ampersand,
        EngineState::SingleOperator,
        EngineState::Colon,
        EngineState::Plus,
        EngineState::Minus,
        EngineState::Pipe,
        EngineState::SingleLineComment,
        EngineState::MultiLineComment,
        EngineState::StarInComment,
        EngineState::OctalDigits,
        EngineState::BinaryDigits,
        EngineState::HexDigits,
        EngineState::IntegerSuffix,
        EngineState::FloatSuffix,
        EngineState::PointInDigit,
        EngineState::EscapeInString,
        EngineState::EscapeInChar,
        EngineState::ExpectCharClose,
        EngineState::OperatorThenEqual,
        EngineState::Invalid,
    ];

    /// States whose lexeme is cut short by an illegal character
    ///
    /// Literal and comment bodies accept any character, and `Initial` and
    /// `Invalid` have their own handling.
    pub const fn rejects_illegal(self) -> bool {
        !matches!(
            self,
            EngineState::Initial
                | EngineState::Invalid
                | EngineState::CharLiteral
                | EngineState::StringLiteral
                | EngineState::SingleLineComment
                | EngineState::MultiLineComment
                | EngineState::StarInComment
        )
    }

    /// States that can only close as an operator
    pub const fn is_operator(self) -> bool {
        matches!(
            self,
            EngineState::Slash
                | EngineState::Greater
                | EngineState::DoubleGreater
                | EngineState::Less
                | EngineState::Ampersand
                | EngineState::SingleOperator
                | EngineState::Colon
                | EngineState::Plus
                | EngineState::Minus
                | EngineState::Pipe
                | EngineState::OperatorThenEqual
        )
    }
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
