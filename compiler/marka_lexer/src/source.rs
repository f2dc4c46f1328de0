//! Character sources the [`Cursor`](crate::Cursor) reads from.
//!
//! A source hands out one decoded character at a time and can rewind to its
//! beginning. Encoding is the source's concern: the cursor and scanner only
//! ever see `char`s.

use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom};
use std::str::Chars;

use crate::LexError;

/// Sequential, rewindable supply of characters.
pub trait CharSource {
    /// Returns the next character, or `Ok(None)` once the source is exhausted.
    fn next_char(&mut self) -> Result<Option<char>, LexError>;

    /// Returns to the first character of the source.
    fn rewind(&mut self) -> Result<(), LexError>;
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    fn next_char(&mut self) -> Result<Option<char>, LexError> {
        (**self).next_char()
    }

    fn rewind(&mut self) -> Result<(), LexError> {
        (**self).rewind()
    }
}

/// In-memory source over a string slice. Never fails.
#[derive(Clone, Debug)]
pub struct StrSource<'a> {
    text: &'a str,
    chars: Chars<'a>,
}

impl<'a> StrSource<'a> {
    pub fn new(text: &'a str) -> Self {
        StrSource {
            text,
            chars: text.chars(),
        }
    }

    /// The full text, independent of how far the source has been read.
    pub fn text(&self) -> &'a str {
        self.text
    }
}

impl CharSource for StrSource<'_> {
    #[inline]
    fn next_char(&mut self) -> Result<Option<char>, LexError> {
        Ok(self.chars.next())
    }

    fn rewind(&mut self) -> Result<(), LexError> {
        self.chars = self.text.chars();
        Ok(())
    }
}

/// Source over a UTF-8 byte stream, decoded incrementally.
///
/// Rewinding seeks the stream back to byte 0, so the reader should start at
/// the beginning of the document.
pub struct ReaderSource<R> {
    reader: BufReader<R>,
    /// Characters decoded so far; used to locate read errors.
    decoded: usize,
}

impl<R: Read + Seek> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        ReaderSource {
            reader: BufReader::new(reader),
            decoded: 0,
        }
    }

    /// Consumes the source, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader.into_inner()
    }

    fn next_byte(&mut self) -> Result<Option<u8>, LexError> {
        loop {
            let byte = match self.reader.fill_buf() {
                Ok(buf) => buf.first().copied(),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(LexError::Read {
                        offset: self.decoded,
                        source,
                    })
                }
            };
            if byte.is_some() {
                self.reader.consume(1);
            }
            return Ok(byte);
        }
    }
}

impl<R: Read + Seek> CharSource for ReaderSource<R> {
    fn next_char(&mut self) -> Result<Option<char>, LexError> {
        let Some(lead) = self.next_byte()? else {
            return Ok(None);
        };
        let offset = self.decoded;

        let width = utf8_char_width(lead);
        if width == 0 {
            return Err(LexError::InvalidUtf8 { offset });
        }

        let mut bytes = [lead, 0, 0, 0];
        for slot in &mut bytes[1..width] {
            match self.next_byte()? {
                Some(byte) => *slot = byte,
                None => return Err(LexError::InvalidUtf8 { offset }),
            }
        }

        let c = std::str::from_utf8(&bytes[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .ok_or(LexError::InvalidUtf8 { offset })?;
        self.decoded += 1;
        Ok(Some(c))
    }

    fn rewind(&mut self) -> Result<(), LexError> {
        self.reader
            .seek(SeekFrom::Start(0))
            .map_err(|source| LexError::Rewind { source })?;
        self.decoded = 0;
        Ok(())
    }
}

/// Number of bytes in the UTF-8 sequence introduced by `lead`.
///
/// Returns 0 for bytes that cannot start a sequence: continuation bytes,
/// overlong leads (`0xC0`, `0xC1`) and leads past U+10FFFF (`0xF5..`).
#[inline]
fn utf8_char_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}
