//! Token state machine.
//!
//! Each call to [`Scanner::next_token`] peeks one character, dispatches on its
//! [`CharacterRole`], lets the matching routine consume a run through the
//! [`Cursor`], and then advances the [`Position`] by the characters consumed.
//! Beyond the position and the cursor there is no state: a call is a function
//! of where the source currently stands.
//!
//! # Marker runs are capped
//!
//! `#` runs stop at 6 characters, `*` and `_` runs at 3. Longer runs come out
//! as several consecutive tokens: `########` is `Heading(6)` then `Heading(2)`.
//! Deciding that seven hashes are not a heading needs document context, so it
//! is left to the parser.
//!
//! # Whitespace never spans lines
//!
//! Whitespace runs exclude `\n`. A blank line with indentation scans as
//! `Whitespace`, `Newline`, `Whitespace`, and `Newline` is the only token that
//! moves to a new row.

use std::io::{Read, Seek};
use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::role::{self, CharacterRole};
use crate::{
    CharSource, Cursor, LexError, Position, ReaderSource, StrSource, Token, TokenKind, TokenRecord,
};

/// A marker character together with the kind produced for each run length.
///
/// The table length is the cap: a run of `n` yields `kinds[n - 1]`.
struct MarkerRun {
    marker: char,
    kinds: &'static [TokenKind],
}

const EMPHASIS_KINDS: [TokenKind; 3] = [TokenKind::Italic, TokenKind::Bold, TokenKind::BoldItalic];

const HEADING_RUN: MarkerRun = MarkerRun {
    marker: '#',
    kinds: &[
        TokenKind::Heading { level: 1 },
        TokenKind::Heading { level: 2 },
        TokenKind::Heading { level: 3 },
        TokenKind::Heading { level: 4 },
        TokenKind::Heading { level: 5 },
        TokenKind::Heading { level: 6 },
    ],
};

const ASTERISK_RUN: MarkerRun = MarkerRun {
    marker: '*',
    kinds: &EMPHASIS_KINDS,
};

const UNDERSCORE_RUN: MarkerRun = MarkerRun {
    marker: '_',
    kinds: &EMPHASIS_KINDS,
};

/// Output of a scan routine before position bookkeeping.
struct Scanned {
    kind: TokenKind,
    literal: String,
    raw: String,
    span: usize,
}

impl Scanned {
    /// A token whose literal is exactly its source text.
    fn verbatim(kind: TokenKind, raw: String, span: usize) -> Self {
        Scanned {
            kind,
            literal: raw.clone(),
            raw,
            span,
        }
    }
}

/// Lazily scans a [`CharSource`] into [`TokenRecord`]s.
pub struct Scanner<S> {
    cursor: Cursor<S>,
    position: Position,
    /// Set once the iterator has yielded end of input or an error.
    done: bool,
}

impl<'a> Scanner<StrSource<'a>> {
    /// Scanner over an in-memory string.
    pub fn from_text(text: &'a str) -> Self {
        Self::new(StrSource::new(text))
    }
}

impl<R: Read + Seek> Scanner<ReaderSource<R>> {
    /// Scanner over a UTF-8 byte stream such as a [`File`](std::fs::File).
    pub fn from_reader(reader: R) -> Self {
        Self::new(ReaderSource::new(reader))
    }
}

impl<S: CharSource> Scanner<S> {
    pub fn new(source: S) -> Self {
        Scanner {
            cursor: Cursor::new(source),
            position: Position::START,
            done: false,
        }
    }

    /// Position of the next token to be scanned.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Scans the next token.
    ///
    /// Returns `Ok(None)` at end of input. Every token consumes at least one
    /// character. On error nothing is emitted and the scanner should be
    /// dropped or reset.
    pub fn next_token(&mut self) -> Result<Option<TokenRecord>, LexError> {
        let Some(first) = self.cursor.peek()? else {
            debug!(offset = self.position.offset, "end of input");
            return Ok(None);
        };

        let scanned = match role::role_of(first) {
            CharacterRole::Hash => self.marker_run(&HEADING_RUN)?,
            CharacterRole::Asterisk => self.marker_run(&ASTERISK_RUN)?,
            CharacterRole::Underscore => self.marker_run(&UNDERSCORE_RUN)?,
            CharacterRole::Dash => self.dash_run()?,
            CharacterRole::Newline => self.newline()?,
            CharacterRole::Whitespace => self.whitespace()?,
            CharacterRole::Digit => self.number()?,
            CharacterRole::Escape => self.escape()?,
            CharacterRole::Other => self.plain_text()?,
        };

        let record = TokenRecord {
            token: Token::new(scanned.kind, scanned.literal),
            position: self.position,
            span: scanned.span,
            raw: scanned.raw,
        };
        self.advance_position(record.kind(), record.span);
        debug_assert_eq!(self.position.offset, self.cursor.offset());

        trace!(
            kind = %record.token.kind,
            span = record.span,
            offset = record.position.offset,
            "token"
        );
        Ok(Some(record))
    }

    /// Rewinds the source and the position so the same input can be scanned
    /// again.
    pub fn reset(&mut self) -> Result<(), LexError> {
        self.cursor.reset()?;
        self.position = Position::START;
        self.done = false;
        debug!("scanner reset");
        Ok(())
    }

    /// Resets, then scans the whole source.
    ///
    /// Any error discards the tokens scanned so far.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn tokenize(&mut self) -> Result<Vec<TokenRecord>, LexError> {
        self.reset()?;
        let records = self.by_ref().collect::<Result<Vec<_>, _>>()?;
        debug!(count = records.len(), "tokenized");
        Ok(records)
    }

    fn advance_position(&mut self, kind: TokenKind, span: usize) {
        self.position.offset += span;
        if kind == TokenKind::Newline {
            self.position.row += 1;
            self.position.column = 0;
        } else {
            self.position.column += span;
        }
    }

    // ─── Routines ───────────────────────────────────────────────

    fn marker_run(&mut self, run: &MarkerRun) -> Result<Scanned, LexError> {
        let mut raw = String::new();
        let len = self
            .cursor
            .eat_while(|c| c == run.marker, Some(run.kinds.len()), &mut raw)?;
        // Dispatch already peeked one marker, so `len >= 1`.
        Ok(Scanned::verbatim(run.kinds[len - 1], raw, len))
    }

    fn dash_run(&mut self) -> Result<Scanned, LexError> {
        let mut raw = String::new();
        let len = self.cursor.eat_while(|c| c == '-', None, &mut raw)?;
        let kind = match len {
            1 => TokenKind::ListDash,
            2 => TokenKind::PlainText,
            _ => TokenKind::ThematicBreak,
        };
        Ok(Scanned::verbatim(kind, raw, len))
    }

    fn newline(&mut self) -> Result<Scanned, LexError> {
        self.cursor.advance()?;
        Ok(Scanned::verbatim(TokenKind::Newline, "\n".to_string(), 1))
    }

    fn whitespace(&mut self) -> Result<Scanned, LexError> {
        let mut raw = String::new();
        let len = self.cursor.eat_while(role::is_whitespace_run, None, &mut raw)?;
        Ok(Scanned::verbatim(TokenKind::Whitespace, raw, len))
    }

    fn number(&mut self) -> Result<Scanned, LexError> {
        let mut raw = String::new();
        let digits = self
            .cursor
            .eat_while(|c| role::role_of(c) == CharacterRole::Digit, None, &mut raw)?;

        if self.cursor.peek()? == Some('.') {
            self.cursor.advance()?;
            let literal = raw.clone();
            raw.push('.');
            return Ok(Scanned {
                kind: TokenKind::OrderedListMarker,
                literal,
                raw,
                span: digits + 1,
            });
        }
        Ok(Scanned::verbatim(TokenKind::Number, raw, digits))
    }

    /// `\` followed by a marker is that marker as text. Before a newline or
    /// at end of input the backslash stands alone; otherwise both characters
    /// are kept.
    fn escape(&mut self) -> Result<Scanned, LexError> {
        self.cursor.advance()?;
        let mut raw = String::from('\\');

        let Some(next) = self.cursor.advance()? else {
            return Ok(Scanned::verbatim(TokenKind::PlainText, raw, 1));
        };

        match role::role_of(next) {
            marker if marker.is_escapable() => {
                raw.push(next);
                Ok(Scanned {
                    kind: TokenKind::PlainText,
                    literal: next.to_string(),
                    raw,
                    span: 2,
                })
            }
            CharacterRole::Newline => {
                self.cursor.unread(next)?;
                Ok(Scanned::verbatim(TokenKind::PlainText, raw, 1))
            }
            _ => {
                raw.push(next);
                Ok(Scanned::verbatim(TokenKind::PlainText, raw, 2))
            }
        }
    }

    fn plain_text(&mut self) -> Result<Scanned, LexError> {
        let mut raw = String::new();
        let len = self.cursor.eat_while(role::is_plain_text, None, &mut raw)?;
        Ok(Scanned::verbatim(TokenKind::PlainText, raw, len))
    }
}

impl<S: CharSource> Iterator for Scanner<S> {
    type Item = Result<TokenRecord, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_token() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<S: CharSource> FusedIterator for Scanner<S> {}

/// Scans `text` into its full token sequence.
pub fn tokenize(text: &str) -> Result<Vec<TokenRecord>, LexError> {
    Scanner::from_text(text).tokenize()
}

#[cfg(test)]
mod tests;
