//! Character-level scanner for the Marka markup language.
//!
//! Turns a stream of characters into classified tokens: headings, emphasis
//! markers, list markers, thematic breaks, numbers, whitespace, newlines and
//! plain text. The scanner classifies runs of characters only. Nesting, block
//! structure and document validity belong to whatever parser consumes the
//! token stream.
//!
//! # Layers
//!
//! ```text
//! CharSource ──► Cursor (peek / advance / unread) ──► Scanner ──► TokenRecord
//! ```
//!
//! - [`role`]: stateless character classification.
//! - [`CharSource`]: where characters come from (`&str` or any `Read + Seek`).
//! - [`Cursor`]: one character of lookahead and one of pushback.
//! - [`Scanner`]: the token state machine, lazy via [`Scanner::next_token`]
//!   or the [`Iterator`] impl, eager via [`Scanner::tokenize`].
//!
//! # Example
//!
//! ```text
//! let records = marka_lexer::tokenize("## Title\n")?;
//! assert_eq!(records[0].token.kind, TokenKind::Heading { level: 2 });
//! ```
//!
//! # Tracing
//!
//! Each emitted token is logged at `trace` level under the
//! `marka_lexer::scanner` target; resets and end of input at `debug`.

mod cursor;
mod error;
pub mod role;
mod scanner;
mod source;
mod token;

pub use cursor::Cursor;
pub use error::LexError;
pub use role::{role_of, CharacterRole};
pub use scanner::{tokenize, Scanner};
pub use source::{CharSource, ReaderSource, StrSource};
pub use token::{Position, Token, TokenKind, TokenRecord};
