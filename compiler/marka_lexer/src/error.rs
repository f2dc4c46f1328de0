//! Scanner errors.
//!
//! End of input is not an error: lookahead reports it as `Ok(None)` so scan
//! routines can react to it without confusing it with a failing source.
//! Everything here is fatal and aborts tokenization without emitting a
//! partial token.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexError {
    /// The underlying byte stream failed.
    #[error("failed to read source at character {offset}")]
    Read {
        offset: usize,
        #[source]
        source: io::Error,
    },

    /// The byte stream is not valid UTF-8.
    #[error("invalid UTF-8 in source at character {offset}")]
    InvalidUtf8 { offset: usize },

    /// A character was handed back while another was still pending.
    ///
    /// Only one character of pushback exists. Hitting this means a scan
    /// routine broke the cursor contract.
    #[error("cannot push back {ch:?} at character {offset}: pushback slot is occupied")]
    Pushback { offset: usize, ch: char },

    /// The source could not be rewound for a reset.
    #[error("failed to rewind source")]
    Rewind {
        #[source]
        source: io::Error,
    },
}

impl LexError {
    /// Character offset the error refers to, when there is one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::Read { offset, .. }
            | Self::InvalidUtf8 { offset }
            | Self::Pushback { offset, .. } => Some(*offset),
            Self::Rewind { .. } => None,
        }
    }
}
