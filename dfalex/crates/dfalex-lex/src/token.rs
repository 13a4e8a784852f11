//! Token values produced by the engine.

use std::fmt;

/// Lexical category of a token
///
/// # Example
///
/// ```
/// use dfalex_lex::TokenKind;
///
/// assert_eq!(TokenKind::IntLiteral.as_str(), "INT_LITERAL");
/// assert!(TokenKind::Comment.is_trivia());
/// assert!(!TokenKind::Keyword.is_trivia());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum TokenKind {
    /// `// ...` up to the line terminator, or `/* ... */`
    Comment,
    /// One whitespace character
    Whitespace,
    /// A name that is not reserved
    Identifier,
    /// Arithmetic, comparison, logical, bitwise or assignment operator
    Operator,
    /// `( ) { } [ ] ; , . ...` and `::`
    Separator,
    /// Decimal, octal, hex or binary integer, with optional `l`/`L`
    IntLiteral,
    /// Number with a fraction or a float suffix
    FloatLiteral,
    /// `'c'` or `'\n'`
    CharLiteral,
    /// `"..."`
    StringLiteral,
    /// `true` or `false`
    BooleanLiteral,
    /// `null`
    NullLiteral,
    /// Reserved word
    Keyword,
    /// Text that forms no valid lexeme
    Error,
}

impl TokenKind {
    /// Every kind, in declaration order
    pub const ALL: [TokenKind; 13] = [
        TokenKind::Comment,
        TokenKind::Whitespace,
        TokenKind::Identifier,
        TokenKind::Operator,
        TokenKind::Separator,
        TokenKind::IntLiteral,
        TokenKind::FloatLiteral,
        TokenKind::CharLiteral,
        TokenKind::StringLiteral,
        TokenKind::BooleanLiteral,
        TokenKind::NullLiteral,
        TokenKind::Keyword,
        TokenKind::Error,
    ];

    /// Upper-case name used in textual output
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Comment => "COMMENT",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Separator => "SEPARATOR",
            TokenKind::IntLiteral => "INT_LITERAL",
            TokenKind::FloatLiteral => "FLOAT_LITERAL",
            TokenKind::CharLiteral => "CHAR_LITERAL",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::BooleanLiteral => "BOOLEAN_LITERAL",
            TokenKind::NullLiteral => "NULL_LITERAL",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Error => "ERROR",
        }
    }

    /// Whitespace and comments carry no meaning for a parser
    pub const fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }

    /// Any of the literal kinds
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::IntLiteral
                | TokenKind::FloatLiteral
                | TokenKind::CharLiteral
                | TokenKind::StringLiteral
                | TokenKind::BooleanLiteral
                | TokenKind::NullLiteral
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified slice of source text
///
/// `text` is exactly the characters consumed for the lexeme, so
/// concatenating the texts of a token sequence gives back the input.
/// Tokens carry no position; equality compares kind and text only.
///
/// # Example
///
/// ```
/// use dfalex_lex::{Token, TokenKind};
///
/// let token = Token::new(TokenKind::Operator, ">>>");
/// assert_eq!(token.kind(), TokenKind::Operator);
/// assert_eq!(token.text(), ">>>");
/// assert_eq!(token.to_string(), "OPERATOR \">>>\"");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "TokenParts"))]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    /// Create a token
    ///
    /// The engine never produces an empty token; `debug_assert` guards
    /// direct construction in debug builds.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        let text = text.into();
        debug_assert!(!text.is_empty(), "token text must not be empty");
        Self { kind, text }
    }

    /// The token's category
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The exact source text of the lexeme
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the token, returning its text
    pub fn into_text(self) -> String {
        self.text
    }

    /// Shorthand for `kind() == TokenKind::Error`
    #[inline]
    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }

    /// Shorthand for `kind().is_trivia()`
    #[inline]
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }
}

/// Unchecked fields of a deserialized token
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct TokenParts {
    kind: TokenKind,
    text: String,
}

#[cfg(feature = "serde")]
impl TryFrom<TokenParts> for Token {
    type Error = &'static str;

    fn try_from(parts: TokenParts) -> Result<Self, Self::Error> {
        if parts.text.is_empty() {
            return Err("token text must not be empty");
        }
        Ok(Token::new(parts.kind, parts.text))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.text)
    }
}
