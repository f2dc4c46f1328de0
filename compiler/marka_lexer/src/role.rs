//! Character classification.
//!
//! Every character maps to exactly one [`CharacterRole`]. Roles are computed
//! on demand and never stored on tokens. Priority order, highest first:
//!
//! 1. `\` is [`Escape`](CharacterRole::Escape)
//! 2. `#`, `-`, `*`, `_` are their marker roles
//! 3. `\n` is [`Newline`](CharacterRole::Newline)
//! 4. any other Unicode whitespace is [`Whitespace`](CharacterRole::Whitespace)
//! 5. ASCII decimal digits are [`Digit`](CharacterRole::Digit)
//! 6. everything else is [`Other`](CharacterRole::Other)

/// Syntactic role of a single character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharacterRole {
    Whitespace,
    Newline,
    Digit,
    /// Letters, punctuation without markup meaning, and everything else.
    Other,

    /// `#`
    Hash,
    /// `-`
    Dash,
    /// `*`
    Asterisk,
    /// `_`
    Underscore,
    /// `\`
    Escape,
}

impl CharacterRole {
    /// Returns `true` for the roles with meaning in the markup syntax.
    #[inline]
    pub const fn is_structural(self) -> bool {
        matches!(
            self,
            Self::Hash | Self::Dash | Self::Asterisk | Self::Underscore | Self::Escape
        )
    }

    /// Returns `true` for markers a backslash turns into literal text.
    ///
    /// The backslash itself is structural but not escapable: `\\` keeps both
    /// characters.
    #[inline]
    pub const fn is_escapable(self) -> bool {
        matches!(
            self,
            Self::Hash | Self::Dash | Self::Asterisk | Self::Underscore
        )
    }

    /// The marker character for structural roles.
    pub const fn marker(self) -> Option<char> {
        match self {
            Self::Hash => Some('#'),
            Self::Dash => Some('-'),
            Self::Asterisk => Some('*'),
            Self::Underscore => Some('_'),
            Self::Escape => Some('\\'),
            Self::Whitespace | Self::Newline | Self::Digit | Self::Other => None,
        }
    }

    /// Upper-case name used in diagnostics and debug dumps.
    pub const fn debug_name(self) -> &'static str {
        match self {
            Self::Whitespace => "WHITESPACE",
            Self::Newline => "NEWLINE",
            Self::Digit => "DIGIT",
            Self::Other => "OTHER",
            Self::Hash => "HASH",
            Self::Dash => "DASH",
            Self::Asterisk => "ASTERISK",
            Self::Underscore => "UNDERSCORE",
            Self::Escape => "ESCAPE",
        }
    }
}

/// Classify a single character.
#[inline]
pub fn role_of(c: char) -> CharacterRole {
    match c {
        '\\' => CharacterRole::Escape,
        '#' => CharacterRole::Hash,
        '-' => CharacterRole::Dash,
        '*' => CharacterRole::Asterisk,
        '_' => CharacterRole::Underscore,
        '\n' => CharacterRole::Newline,
        c if c.is_whitespace() => CharacterRole::Whitespace,
        c if c.is_ascii_digit() => CharacterRole::Digit,
        _ => CharacterRole::Other,
    }
}

/// Returns `true` if `c` has meaning in the markup syntax.
#[inline]
pub fn is_structural(c: char) -> bool {
    role_of(c).is_structural()
}

/// Predicate for whitespace runs.
///
/// Whitespace excluding `\n`: a blank line always splits into separate
/// whitespace and newline tokens, so rows and columns stay exact.
#[inline]
pub fn is_whitespace_run(c: char) -> bool {
    role_of(c) == CharacterRole::Whitespace
}

/// Predicate for plain text runs: whitespace and ordinary characters.
#[inline]
pub fn is_plain_text(c: char) -> bool {
    matches!(role_of(c), CharacterRole::Whitespace | CharacterRole::Other)
}
