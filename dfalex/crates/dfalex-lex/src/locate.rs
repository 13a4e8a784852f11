//! Source positions for a token sequence.
//!
//! Tokens carry only their text. Because the texts concatenate back to the
//! input, positions can be recovered afterwards by walking the sequence.

use dfalex_util::Span;

use crate::token::Token;

/// A token paired with where it starts and ends in the source
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpannedToken {
    /// The token
    pub token: Token,
    /// Byte range, with the 1-based line and column of its first character
    pub span: Span,
}

/// Assign a span to every token
///
/// Columns count characters. `\n`, `\r` and `\r\n` each end one line,
/// matching the terminators that close comments and literals.
///
/// # Example
///
/// ```
/// use dfalex_lex::{locate, tokenize};
///
/// let located = locate(&tokenize("a\n  b"));
/// let b = &located[4];
/// assert_eq!(b.token.text(), "b");
/// assert_eq!((b.span.start, b.span.line, b.span.column), (4, 2, 3));
/// ```
pub fn locate(tokens: &[Token]) -> Vec<SpannedToken> {
    let mut offset = 0usize;
    let mut line = 1u32;
    let mut column = 1u32;
    let mut after_cr = false;

    tokens
        .iter()
        .map(|token| {
            let start = offset;
            let (start_line, start_column) = (line, column);
            for c in token.text().chars() {
                match c {
                    // second half of \r\n, possibly in the next token
                    '\n' if after_cr => {}
                    '\n' | '\r' => {
                        line += 1;
                        column = 1;
                    }
                    _ => column += 1,
                }
                after_cr = c == '\r';
            }
            offset += token.text().len();
            SpannedToken {
                token: token.clone(),
                span: Span::new(start, offset, start_line, start_column),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{tokenize, TokenKind};

    #[test]
    fn test_locate_empty() {
        assert!(locate(&[]).is_empty());
    }

    #[test]
    fn test_spans_cover_input_contiguously() {
        let source = "int x = 1; // one\nx++;";
        let located = locate(&tokenize(source));
        let mut expected_start = 0;
        for spanned in &located {
            assert_eq!(spanned.span.start, expected_start);
            assert_eq!(&source[spanned.span.start..spanned.span.end], spanned.token.text());
            expected_start = spanned.span.end;
        }
        assert_eq!(expected_start, source.len());
    }

    #[test]
    fn test_multiline_comment_advances_lines() {
        let located = locate(&tokenize("/* a\n b */x"));
        let x = located.last().map(|t| t.span);
        assert_eq!(x.map(|s| (s.line, s.column)), Some((2, 6)));
    }

    #[test]
    fn test_cr_only_line_endings() {
        let located = locate(&tokenize("int a;\r// note\rint b = 08;\r"));
        let error = located.iter().find(|t| t.token.is_error()).map(|t| t.span);
        assert_eq!(error.map(|s| (s.line, s.column)), Some((3, 9)));
    }

    #[test]
    fn test_crlf_counts_as_one_line() {
        let located = locate(&tokenize("a\r\nb\n\rc"));
        let positions: Vec<_> = located
            .iter()
            .filter(|t| t.token.kind() == TokenKind::Identifier)
            .map(|t| (t.span.line, t.span.column))
            .collect();
        assert_eq!(positions, vec![(1, 1), (2, 1), (4, 1)]);
    }

    #[test]
    fn test_columns_count_characters() {
        let located = locate(&tokenize("é = 1"));
        assert_eq!(located[1].span.start, 2);
        assert_eq!(located[1].span.column, 2);
    }
}
