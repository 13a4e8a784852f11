//! Stable diagnostic codes.
//!
//! Every lexical problem class has its own code so tools can filter or
//! suppress them without matching on message text. Codes print as a prefix
//! followed by a zero-padded number.
//!
//! | Code  | Meaning                          |
//! |-------|----------------------------------|
//! | E1001 | character that starts no token   |
//! | E1002 | string literal cut by a newline  |
//! | E1003 | malformed numeric literal        |
//! | E1004 | operator or token that is not valid |
//! | E1005 | invalid escape sequence          |
//! | E1006 | block comment never closed       |
//! | E1007 | malformed character literal      |

use std::fmt;

/// A diagnostic code such as `E1001`
///
/// # Examples
///
/// ```
/// use dfalex_util::diagnostic::DiagnosticCode;
///
/// let code = DiagnosticCode::new("E", 1001);
/// assert_eq!(code.as_str(), "E1001");
/// assert_eq!(code, DiagnosticCode::E_LEXER_UNEXPECTED_CHAR);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the full code string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    /// E1001: Character that cannot start any token
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
    /// E1002: String literal interrupted by a line terminator or end of input
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self::new("E", 1002);
    /// E1003: Malformed integer or floating-point literal
    pub const E_LEXER_INVALID_NUMBER: Self = Self::new("E", 1003);
    /// E1004: Token that matches no lexical rule
    pub const E_LEXER_UNKNOWN_TOKEN: Self = Self::new("E", 1004);
    /// E1005: Backslash followed by a character with no escape meaning
    pub const E_LEXER_INVALID_ESCAPE: Self = Self::new("E", 1005);
    /// E1006: Block comment still open at end of input
    pub const E_LEXER_UNTERMINATED_COMMENT: Self = Self::new("E", 1006);
    /// E1007: Empty, overlong or unterminated character literal
    pub const E_LEXER_MALFORMED_CHAR: Self = Self::new("E", 1007);
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_formatting_pads_to_four_digits() {
        assert_eq!(DiagnosticCode::new("W", 7).as_str(), "W0007");
        assert_eq!(DiagnosticCode::E_LEXER_MALFORMED_CHAR.to_string(), "E1007");
    }

    #[test]
    fn test_code_debug() {
        assert_eq!(
            format!("{:?}", DiagnosticCode::E_LEXER_INVALID_ESCAPE),
            "DiagnosticCode(E1005)"
        );
    }

    #[test]
    fn test_lexer_codes_are_distinct() {
        let codes = [
            DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            DiagnosticCode::E_LEXER_INVALID_NUMBER,
            DiagnosticCode::E_LEXER_UNKNOWN_TOKEN,
            DiagnosticCode::E_LEXER_INVALID_ESCAPE,
            DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT,
            DiagnosticCode::E_LEXER_MALFORMED_CHAR,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
