//! Character and lexeme classification.
//!
//! Every function here is pure and total: it answers for any input,
//! including the empty string, and never panics. The engine asks these
//! questions; it never inspects characters directly.

use std::sync::OnceLock;

use rustc_hash::FxHashSet;

use crate::token::TokenKind;

/// Reserved words of the language
pub const KEYWORDS: [&str; 50] = [
    "abstract",
    "continue",
    "for",
    "new",
    "switch",
    "assert",
    "default",
    "goto",
    "package",
    "synchronized",
    "boolean",
    "do",
    "if",
    "private",
    "this",
    "break",
    "double",
    "implements",
    "protected",
    "throw",
    "byte",
    "else",
    "import",
    "public",
    "throws",
    "case",
    "enum",
    "instanceof",
    "return",
    "transient",
    "catch",
    "extends",
    "int",
    "short",
    "try",
    "char",
    "final",
    "interface",
    "static",
    "void",
    "class",
    "finally",
    "long",
    "strictfp",
    "volatile",
    "const",
    "float",
    "native",
    "super",
    "while",
];

fn keyword_table() -> &'static FxHashSet<&'static str> {
    static TABLE: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    TABLE.get_or_init(|| KEYWORDS.iter().copied().collect())
}

/// Checks if a character is a separator: `( ) { } [ ] ; ,`
///
/// # Example
///
/// ```
/// use dfalex_lex::classify::is_separator;
///
/// assert!(is_separator(';'));
/// assert!(!is_separator('.'));
/// ```
#[inline]
pub fn is_separator(c: char) -> bool {
    matches!(c, '(' | ')' | '{' | '}' | '[' | ']' | ';' | ',')
}

/// Checks if a character can appear in an operator
///
/// # Example
///
/// ```
/// use dfalex_lex::classify::is_operator_char;
///
/// assert!(is_operator_char('>'));
/// assert!(is_operator_char(':'));
/// assert!(!is_operator_char('.'));
/// ```
#[inline]
pub fn is_operator_char(c: char) -> bool {
    matches!(
        c,
        '=' | '>' | '<' | '!' | '~' | ':' | '?' | '&' | '|' | '+' | '-' | '*' | '/' | '^' | '%'
    )
}

/// Checks if `text` is exactly one of the two-character escapes
/// `\b \t \n \\ \' \" \r \f`
///
/// # Example
///
/// ```
/// use dfalex_lex::classify::is_escape_special;
///
/// assert!(is_escape_special("\\n"));
/// assert!(is_escape_special("\\'"));
/// assert!(!is_escape_special("\\q"));
/// assert!(!is_escape_special("\\n\\n"));
/// assert!(!is_escape_special(""));
/// ```
pub fn is_escape_special(text: &str) -> bool {
    let mut chars = text.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some('\\'), Some(c), None) => is_escape_char(c),
        _ => false,
    }
}

/// Checks if a character may follow a backslash in a literal
#[inline]
pub fn is_escape_char(c: char) -> bool {
    matches!(c, 'b' | 't' | 'n' | '\\' | '\'' | '"' | 'r' | 'f')
}

/// `0` through `7`
#[inline]
pub fn is_octal_digit(c: char) -> bool {
    matches!(c, '0'..='7')
}

/// `0` or `1`
#[inline]
pub fn is_binary_digit(c: char) -> bool {
    matches!(c, '0' | '1')
}

/// ASCII digit or `a-f`/`A-F`
#[inline]
pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// ASCII decimal digit
#[inline]
pub fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Float or double suffix: `f F d D`
#[inline]
pub fn is_numeric_suffix_float(c: char) -> bool {
    matches!(c, 'f' | 'F' | 'd' | 'D')
}

/// Long suffix: `l L`
#[inline]
pub fn is_integer_suffix(c: char) -> bool {
    matches!(c, 'l' | 'L')
}

/// `true` or `false`
///
/// # Example
///
/// ```
/// use dfalex_lex::classify::is_boolean_literal;
///
/// assert!(is_boolean_literal("true"));
/// assert!(!is_boolean_literal("True"));
/// ```
#[inline]
pub fn is_boolean_literal(text: &str) -> bool {
    matches!(text, "true" | "false")
}

/// `null`
#[inline]
pub fn is_null_literal(text: &str) -> bool {
    text == "null"
}

/// Membership in the reserved-word table
///
/// # Example
///
/// ```
/// use dfalex_lex::classify::is_keyword;
///
/// assert!(is_keyword("synchronized"));
/// assert!(!is_keyword("null"));
/// assert!(!is_keyword("Int"));
/// ```
pub fn is_keyword(text: &str) -> bool {
    keyword_table().contains(text)
}

/// Checks if a character can start an identifier
///
/// Letters in any script, `_` and `$`.
///
/// # Example
///
/// ```
/// use dfalex_lex::classify::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('$'));
/// assert!(is_ident_start('λ'));
/// assert!(!is_ident_start('1'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c == '$' || c.is_alphabetic()
}

/// Checks if a character can continue an identifier
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || c.is_alphanumeric()
}

/// `\n` or `\r`
#[inline]
pub fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r')
}

/// Checks if a character can begin no lexeme at all
///
/// These are the characters that force the lexeme being built into an
/// error, e.g. `#`, `@`, a backtick or a stray backslash.
///
/// # Example
///
/// ```
/// use dfalex_lex::classify::is_illegal;
///
/// assert!(is_illegal('#'));
/// assert!(is_illegal('\\'));
/// assert!(!is_illegal(' '));
/// assert!(!is_illegal('"'));
/// ```
pub fn is_illegal(c: char) -> bool {
    !(c.is_whitespace()
        || is_ident_continue(c)
        || is_separator(c)
        || is_operator_char(c)
        || matches!(c, '.' | '\'' | '"'))
}

/// Classify a complete word: null, then boolean, then keyword, else identifier
///
/// # Example
///
/// ```
/// use dfalex_lex::{classify::classify_word, TokenKind};
///
/// assert_eq!(classify_word("null"), TokenKind::NullLiteral);
/// assert_eq!(classify_word("false"), TokenKind::BooleanLiteral);
/// assert_eq!(classify_word("int"), TokenKind::Keyword);
/// assert_eq!(classify_word("int2"), TokenKind::Identifier);
/// ```
pub fn classify_word(text: &str) -> TokenKind {
    if is_null_literal(text) {
        TokenKind::NullLiteral
    } else if is_boolean_literal(text) {
        TokenKind::BooleanLiteral
    } else if is_keyword(text) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    }
}
