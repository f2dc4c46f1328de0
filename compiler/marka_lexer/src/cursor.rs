//! One-character lookahead over a [`CharSource`].
//!
//! The cursor keeps a single slot that holds either the character returned
//! by the last [`peek()`](Cursor::peek) or the character handed back by
//! [`unread()`](Cursor::unread). [`advance()`](Cursor::advance) drains the
//! slot before touching the source, so a consumed character can always be
//! undone exactly once.
//!
//! # Offsets
//!
//! [`offset()`](Cursor::offset) counts consumed characters, net of pushback.
//! Rows and columns are the scanner's business; the cursor never sees them.

use crate::{CharSource, LexError};

pub struct Cursor<S> {
    source: S,
    /// Peeked or pushed-back character, re-presented by the next read.
    pending: Option<char>,
    /// Characters consumed so far.
    offset: usize,
}

impl<S: CharSource> Cursor<S> {
    pub fn new(source: S) -> Self {
        Cursor {
            source,
            pending: None,
            offset: 0,
        }
    }

    /// Returns the next character without consuming it.
    ///
    /// Repeated peeks with no consume in between return the same character
    /// and read the source at most once.
    pub fn peek(&mut self) -> Result<Option<char>, LexError> {
        if let Some(c) = self.pending {
            return Ok(Some(c));
        }
        let next = self.source.next_char()?;
        self.pending = next;
        Ok(next)
    }

    /// Consumes and returns the next character; `Ok(None)` at end of input.
    pub fn advance(&mut self) -> Result<Option<char>, LexError> {
        let next = match self.pending.take() {
            Some(c) => Some(c),
            None => self.source.next_char()?,
        };
        if next.is_some() {
            self.offset += 1;
        }
        Ok(next)
    }

    /// Hands `c`, the last consumed character, back to the cursor.
    ///
    /// Fails with [`LexError::Pushback`] when the slot is already occupied
    /// (a pending peek or an earlier unread) or nothing has been consumed.
    pub fn unread(&mut self, c: char) -> Result<(), LexError> {
        if self.pending.is_some() || self.offset == 0 {
            return Err(LexError::Pushback {
                offset: self.offset,
                ch: c,
            });
        }
        self.pending = Some(c);
        self.offset -= 1;
        Ok(())
    }

    /// Consumes characters matching `pred` into `buf`, stopping after `limit`
    /// characters when one is given.
    ///
    /// The first non-matching character is read and then handed back, so it
    /// is still the next character afterwards. Returns the number of
    /// characters consumed.
    pub fn eat_while(
        &mut self,
        pred: impl Fn(char) -> bool,
        limit: Option<usize>,
        buf: &mut String,
    ) -> Result<usize, LexError> {
        let mut count = 0;
        while limit.is_none_or(|max| count < max) {
            match self.advance()? {
                Some(c) if pred(c) => {
                    buf.push(c);
                    count += 1;
                }
                Some(c) => {
                    self.unread(c)?;
                    break;
                }
                None => break,
            }
        }
        Ok(count)
    }

    /// Rewinds the source and forgets all consumed and pending characters.
    pub fn reset(&mut self) -> Result<(), LexError> {
        self.source.rewind()?;
        self.pending = None;
        self.offset = 0;
        Ok(())
    }

    /// Characters consumed so far.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns `true` if the cursor holds a peeked or pushed-back character.
    #[inline]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Consumes the cursor, returning the source.
    pub fn into_source(self) -> S {
        self.source
    }
}
