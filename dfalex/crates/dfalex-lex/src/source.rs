//! Pull-based character sources.
//!
//! The engine only ever asks for "the next character, or the end". A
//! [`CharSource`] answers that question, and may fail when the characters
//! come from somewhere that can fail, such as a file.

use std::io::{BufRead, ErrorKind};

use crate::error::{SourceError, SourceResult};

/// Something the engine can pull characters from, one at a time
pub trait CharSource {
    /// The next character, `Ok(None)` at end of input
    fn next_char(&mut self) -> SourceResult<Option<char>>;
}

impl CharSource for std::str::Chars<'_> {
    #[inline]
    fn next_char(&mut self) -> SourceResult<Option<char>> {
        Ok(self.next())
    }
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    #[inline]
    fn next_char(&mut self) -> SourceResult<Option<char>> {
        (**self).next_char()
    }
}

/// Decodes UTF-8 from any buffered reader, one character at a time
///
/// Only the bytes of the current character are held; the reader is never
/// read ahead of what has been decoded.
///
/// # Example
///
/// ```
/// use dfalex_lex::source::{CharSource, ReaderSource};
///
/// let mut source = ReaderSource::new("é=1".as_bytes());
/// assert_eq!(source.next_char().unwrap(), Some('é'));
/// assert_eq!(source.offset(), 2);
/// assert_eq!(source.next_char().unwrap(), Some('='));
/// ```
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    /// Bytes decoded so far
    offset: usize,
}

impl<R: BufRead> ReaderSource<R> {
    /// Wrap a reader
    pub fn new(reader: R) -> Self {
        Self { reader, offset: 0 }
    }

    /// Number of bytes consumed so far
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Give back the reader
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn next_byte(&mut self) -> SourceResult<Option<u8>> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => {
                    let byte = buf.first().copied();
                    if byte.is_some() {
                        self.reader.consume(1);
                    }
                    return Ok(byte);
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// Length of the UTF-8 sequence announced by a leading byte
fn sequence_len(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

impl<R: BufRead> CharSource for ReaderSource<R> {
    fn next_char(&mut self) -> SourceResult<Option<char>> {
        let start = self.offset;
        let Some(lead) = self.next_byte()? else {
            return Ok(None);
        };
        let invalid = || SourceError::InvalidUtf8 { offset: start };
        let len = sequence_len(lead).ok_or_else(invalid)?;

        let mut bytes = [lead, 0, 0, 0];
        for slot in bytes.iter_mut().take(len).skip(1) {
            *slot = self.next_byte()?.ok_or_else(invalid)?;
        }

        let c = std::str::from_utf8(&bytes[..len])
            .ok()
            .and_then(|s| s.chars().next())
            .ok_or_else(invalid)?;
        self.offset += len;
        Ok(Some(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor, Read};

    fn drain(mut source: impl CharSource) -> SourceResult<String> {
        let mut out = String::new();
        while let Some(c) = source.next_char()? {
            out.push(c);
        }
        Ok(out)
    }

    #[test]
    fn test_chars_source() {
        assert_eq!(drain("a\u{1F600}b".chars()).unwrap(), "a\u{1F600}b");
    }

    #[test]
    fn test_reader_decodes_all_widths() {
        let text = "a\u{e9}\u{20ac}\u{1F600}";
        let source = ReaderSource::new(text.as_bytes());
        assert_eq!(drain(source).unwrap(), text);
    }

    #[test]
    fn test_reader_across_tiny_buffer() {
        let text = "int \u{20ac} = 1;";
        let reader = BufReader::with_capacity(1, text.as_bytes());
        assert_eq!(drain(ReaderSource::new(reader)).unwrap(), text);
    }

    #[test]
    fn test_reader_rejects_bad_lead_byte() {
        let mut source = ReaderSource::new(&[b'a', 0xFF, b'b'][..]);
        assert_eq!(source.next_char().unwrap(), Some('a'));
        let err = source.next_char().unwrap_err();
        assert!(matches!(err, SourceError::InvalidUtf8 { offset: 1 }));
    }

    #[test]
    fn test_reader_rejects_truncated_sequence() {
        let mut source = ReaderSource::new(&[0xE2, 0x82][..]);
        assert!(matches!(
            source.next_char(),
            Err(SourceError::InvalidUtf8 { offset: 0 })
        ));
    }

    #[test]
    fn test_reader_rejects_surrogate_encoding() {
        let mut source = ReaderSource::new(&[0xED, 0xA0, 0x80][..]);
        assert!(source.next_char().is_err());
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(ErrorKind::PermissionDenied, "nope"))
        }
    }

    #[test]
    fn test_reader_propagates_io_errors() {
        let mut source = ReaderSource::new(BufReader::new(FailingReader));
        assert!(matches!(source.next_char(), Err(SourceError::Io(_))));
    }

    #[test]
    fn test_mut_ref_source() {
        let mut source = ReaderSource::new(Cursor::new("xy"));
        assert_eq!(drain(&mut source).unwrap(), "xy");
        assert_eq!(source.offset(), 2);
    }
}
