//! Token types.
//!
//! A [`TokenRecord`] is what the scanner hands out: the classified
//! [`Token`], where it started, how many source characters it consumed and
//! the verbatim source text. `literal` and `raw` only differ for escapes.

use std::fmt;

use serde::Serialize;

/// Kind of a scanned token.
///
/// Headings carry their level instead of having one tag per level, so
/// matching on "any heading" is a single arm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Run of whitespace other than `\n`.
    Whitespace,
    /// A single `\n`.
    Newline,
    /// Ordinary text, `--`, and escaped markers.
    PlainText,
    /// Run of digits not followed by `.`.
    Number,
    /// Run of 1 to 6 `#`.
    Heading { level: u8 },
    /// A single `-`.
    ListDash,
    /// Three or more `-`.
    ThematicBreak,
    /// `*` or `_`.
    Italic,
    /// `**` or `__`.
    Bold,
    /// `***` or `___`.
    BoldItalic,
    /// Digits followed by `.`, as in `12.`.
    OrderedListMarker,
}

impl TokenKind {
    /// Upper-case name used in debug dumps.
    pub const fn debug_name(self) -> &'static str {
        match self {
            Self::Whitespace => "WHITESPACE",
            Self::Newline => "NEWLINE",
            Self::PlainText => "STRING",
            Self::Number => "NUMBER",
            Self::Heading { .. } => "HEADING",
            Self::ListDash => "DASH",
            Self::ThematicBreak => "SPACER",
            Self::Italic => "ITALIC",
            Self::Bold => "BOLD",
            Self::BoldItalic => "BOLD_ITALIC",
            Self::OrderedListMarker => "NUMBERING",
        }
    }

    /// Returns `true` for whitespace and newlines.
    pub const fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::Newline)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heading { level } => write!(f, "{}({level})", self.debug_name()),
            _ => f.write_str(self.debug_name()),
        }
    }
}

/// A classified token and its meaningful text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Escapes keep only the escaped marker here.
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Token {
            kind,
            literal: literal.into(),
        }
    }
}

/// Location in the source, counted in characters from zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub column: usize,
    pub row: usize,
    /// Characters before this position across all rows.
    pub offset: usize,
}

impl Position {
    pub const START: Position = Position {
        column: 0,
        row: 0,
        offset: 0,
    };
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}

/// One scanned token with its source metadata.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TokenRecord {
    pub token: Token,
    /// Position of the token's first character.
    pub position: Position,
    /// Source characters consumed, including any escape backslash.
    pub span: usize,
    /// Source text consumed, verbatim.
    pub raw: String,
}

impl TokenRecord {
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.token.kind
    }

    #[inline]
    pub fn literal(&self) -> &str {
        &self.token.literal
    }
}
