//! Turning `Error` tokens into diagnostics.
//!
//! The engine records only that some text formed no valid lexeme. This
//! module looks at that text again to say what most likely went wrong, and
//! reports it through a [`Handler`].

use std::fmt;

use dfalex_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, SourceFile, SourceSnippet};

use crate::classify::{is_decimal_digit, is_escape_char, is_illegal};
use crate::locate::SpannedToken;

/// Likely reason an `Error` token was produced
///
/// # Example
///
/// ```
/// use dfalex_lex::ErrorCause;
///
/// assert_eq!(ErrorCause::of("#"), ErrorCause::UnexpectedChar);
/// assert_eq!(ErrorCause::of("\"open"), ErrorCause::UnterminatedString);
/// assert_eq!(ErrorCause::of("08"), ErrorCause::InvalidNumber);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCause {
    /// A character that can start no token
    UnexpectedChar,
    /// A string literal cut by a line break or the end of input
    UnterminatedString,
    /// A character literal that is empty, too long or never closed
    UnterminatedChar,
    /// A backslash followed by a character with no escape meaning
    InvalidEscape,
    /// Digits followed by something no numeric literal allows
    InvalidNumber,
    /// A block comment still open at the end of input
    UnterminatedComment,
    /// Anything else, such as `=>` or a word cut short by an illegal character
    MalformedToken,
}

impl ErrorCause {
    /// Classify the text of an `Error` token
    pub fn of(text: &str) -> Self {
        let mut chars = text.chars();
        let Some(first) = chars.next() else {
            return ErrorCause::MalformedToken;
        };
        let second = chars.next();

        match first {
            '"' | '\'' if has_bad_escape(text) => ErrorCause::InvalidEscape,
            '"' => ErrorCause::UnterminatedString,
            '\'' => ErrorCause::UnterminatedChar,
            '/' if second == Some('*') => ErrorCause::UnterminatedComment,
            c if is_decimal_digit(c) => ErrorCause::InvalidNumber,
            '.' if second.is_some_and(is_decimal_digit) => ErrorCause::InvalidNumber,
            c if second.is_none() && (is_illegal(c) || c.is_numeric()) => {
                ErrorCause::UnexpectedChar
            }
            _ => ErrorCause::MalformedToken,
        }
    }

    /// The stable code reported for this cause
    pub const fn code(self) -> DiagnosticCode {
        match self {
            ErrorCause::UnexpectedChar => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            ErrorCause::UnterminatedString => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            ErrorCause::InvalidNumber => DiagnosticCode::E_LEXER_INVALID_NUMBER,
            ErrorCause::MalformedToken => DiagnosticCode::E_LEXER_UNKNOWN_TOKEN,
            ErrorCause::InvalidEscape => DiagnosticCode::E_LEXER_INVALID_ESCAPE,
            ErrorCause::UnterminatedComment => DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT,
            ErrorCause::UnterminatedChar => DiagnosticCode::E_LEXER_MALFORMED_CHAR,
        }
    }

    /// Short label shown under the offending text
    pub const fn label(self) -> &'static str {
        match self {
            ErrorCause::UnexpectedChar => "unexpected character",
            ErrorCause::UnterminatedString => "unterminated string literal",
            ErrorCause::UnterminatedChar => "malformed character literal",
            ErrorCause::InvalidEscape => "invalid escape sequence",
            ErrorCause::InvalidNumber => "invalid numeric literal",
            ErrorCause::UnterminatedComment => "unterminated block comment",
            ErrorCause::MalformedToken => "malformed token",
        }
    }

    /// Suggested fix
    pub const fn help(self) -> &'static str {
        match self {
            ErrorCause::UnexpectedChar => "remove the character or move it into a string",
            ErrorCause::UnterminatedString => "close the string with `\"` before the line ends",
            ErrorCause::UnterminatedChar => {
                "a character literal holds exactly one character or escape, as in 'a' or '\\n'"
            }
            ErrorCause::InvalidEscape => {
                "valid escapes are \\b \\t \\n \\f \\r \\\" \\' and \\\\"
            }
            ErrorCause::InvalidNumber => {
                "check the digits against the literal's base and its suffix"
            }
            ErrorCause::UnterminatedComment => "close the comment with `*/`",
            ErrorCause::MalformedToken => "separate the pieces with whitespace",
        }
    }
}

impl fmt::Display for ErrorCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A backslash inside a quoted lexeme followed by a non-escape character
fn has_bad_escape(text: &str) -> bool {
    let mut chars = text.chars().skip(1);
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(escaped) if !is_escape_char(escaped) => return true,
                Some(_) => {}
                None => return false,
            }
        }
    }
    false
}

/// Build the diagnostic for one token, if it is an `Error` token
pub fn diagnose(spanned: &SpannedToken) -> Option<Diagnostic> {
    if !spanned.token.is_error() {
        return None;
    }
    let text = spanned.token.text();
    let cause = ErrorCause::of(text);
    Some(
        DiagnosticBuilder::error(format!("{}: `{}`", cause, text.escape_debug()))
            .span(spanned.span)
            .code(cause.code())
            .help(cause.help())
            .build(),
    )
}

/// Emit one diagnostic per `Error` token, returning how many were emitted
///
/// # Example
///
/// ```
/// use dfalex_lex::{locate, report_errors, tokenize};
/// use dfalex_util::Handler;
///
/// let handler = Handler::new();
/// let found = report_errors(&locate(&tokenize("int a# = 1;")), &handler);
/// assert_eq!(found, 2);
/// assert_eq!(handler.error_count(), 2);
/// ```
pub fn report_errors(tokens: &[SpannedToken], handler: &Handler) -> usize {
    let mut count = 0;
    for diagnostic in tokens.iter().filter_map(diagnose) {
        handler.emit_diagnostic(diagnostic);
        count += 1;
    }
    count
}

/// Like [`report_errors`], attaching a snippet of the offending line
pub fn report_errors_in(file: &SourceFile, tokens: &[SpannedToken], handler: &Handler) -> usize {
    let mut count = 0;
    for spanned in tokens {
        let Some(mut diagnostic) = diagnose(spanned) else {
            continue;
        };
        if let Some(snippet) = snippet_for(file, spanned) {
            diagnostic = diagnostic.with_snippet(snippet);
        }
        handler.emit_diagnostic(diagnostic);
        count += 1;
    }
    count
}

/// Underline the token on its first line; multi-line text stops at the line end
fn snippet_for(file: &SourceFile, spanned: &SpannedToken) -> Option<SourceSnippet> {
    let line_number = spanned.span.line as usize;
    let line = file.line_at(line_number)?;
    let start = spanned.span.column as usize;
    let line_width = line.chars().count();
    let token_width = spanned
        .token
        .text()
        .chars()
        .take_while(|&c| c != '\n' && c != '\r')
        .count();
    let end = (start + token_width).min(line_width + 1);
    let label = ErrorCause::of(spanned.token.text()).label();
    Some(SourceSnippet::new(line, line_number, start, end, Some(label)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{locate, tokenize};

    fn causes(source: &str) -> Vec<ErrorCause> {
        tokenize(source)
            .iter()
            .filter(|t| t.is_error())
            .map(|t| ErrorCause::of(t.text()))
            .collect()
    }

    #[test]
    fn test_cause_of_lexed_errors() {
        assert_eq!(causes("@"), vec![ErrorCause::UnexpectedChar]);
        assert_eq!(causes("\"abc\n"), vec![ErrorCause::UnterminatedString]);
        assert_eq!(causes("\"a\\q"), vec![ErrorCause::InvalidEscape]);
        assert_eq!(causes("'ab'"), vec![ErrorCause::UnterminatedChar, ErrorCause::UnterminatedChar]);
        assert_eq!(causes("123abc"), vec![ErrorCause::InvalidNumber]);
        assert_eq!(causes("/* open"), vec![ErrorCause::UnterminatedComment]);
        assert_eq!(causes("a => b"), vec![ErrorCause::MalformedToken]);
    }

    #[test]
    fn test_escaped_backslash_is_not_bad_escape() {
        assert!(!has_bad_escape("\"a\\\\q"));
        assert!(has_bad_escape("'\\z"));
        assert!(!has_bad_escape("\"trailing\\"));
    }

    #[test]
    fn test_every_cause_has_distinct_code() {
        let all = [
            ErrorCause::UnexpectedChar,
            ErrorCause::UnterminatedString,
            ErrorCause::UnterminatedChar,
            ErrorCause::InvalidEscape,
            ErrorCause::InvalidNumber,
            ErrorCause::UnterminatedComment,
            ErrorCause::MalformedToken,
        ];
        let mut codes: Vec<_> = all.iter().map(|c| c.code().number).collect();
        codes.sort_unstable();
        assert_eq!(codes, vec![1001, 1002, 1003, 1004, 1005, 1006, 1007]);
    }

    #[test]
    fn test_valid_source_reports_nothing() {
        let handler = Handler::new();
        let tokens = locate(&tokenize("class A { int x = 0x1F; }"));
        assert_eq!(report_errors(&tokens, &handler), 0);
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_report_with_snippet() {
        let source = "int x = 08;\n";
        let file = SourceFile::new("A.java", source);
        let handler = Handler::new();
        let found = report_errors_in(&file, &locate(&tokenize(source)), &handler);
        assert_eq!(found, 1);

        let diagnostics = handler.take();
        let diag = &diagnostics[0];
        assert_eq!(diag.code, Some(DiagnosticCode::E_LEXER_INVALID_NUMBER));
        assert_eq!((diag.span.line, diag.span.column), (1, 9));
        assert_eq!(
            diag.snippets[0].format(),
            "  1 | int x = 08;\n    |         ^^ invalid numeric literal"
        );
    }

    #[test]
    fn test_report_with_cr_line_endings() {
        let source = "int a;\r// note\rint b = 08;\r";
        let file = SourceFile::new("A.java", source);
        let handler = Handler::new();
        report_errors_in(&file, &locate(&tokenize(source)), &handler);

        let diagnostics = handler.take();
        let rendered = diagnostics[0].render(Some("A.java"));
        assert!(rendered.contains("--> A.java:3:9"), "{rendered}");
        assert!(rendered.contains("  3 | int b = 08;\n"), "{rendered}");
        assert!(!rendered.contains('\r'));
    }

    #[test]
    fn test_snippet_of_multiline_error_stops_at_line_end() {
        let source = "x /* never\nclosed";
        let file = SourceFile::new("B.java", source);
        let handler = Handler::new();
        report_errors_in(&file, &locate(&tokenize(source)), &handler);
        let diagnostics = handler.take();
        let snippet = &diagnostics[0].snippets[0];
        assert_eq!((snippet.start_column, snippet.end_column), (3, 11));
    }
}
