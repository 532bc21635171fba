//! Delimiter-aware placeholder scanner for the restamp template engine.
//!
//! This crate splits a template string into an ordered sequence of
//! [`Segment`]s: literal text and placeholder markers. A placeholder is the
//! fixed keyword `value` wrapped in a configurable open/close delimiter pair,
//! with optional whitespace around the keyword:
//!
//! ```text
//! See the *( value )* brown fox?
//!         ^^^^^^^^^^^
//! ```
//!
//! Placeholders are positional, not named: every occurrence is
//! interchangeable and supplies exactly one substitution slot, filled in
//! left-to-right order by whoever renders the segments.
//!
//! # Example
//!
//! ```rust
//! use restamp_scanner::{scan, DelimiterPair, Segment};
//!
//! let delims = DelimiterPair::default();
//! let segments = scan("See the *( value )* brown fox?", &delims);
//!
//! assert_eq!(
//!     segments,
//!     vec![
//!         Segment::Literal("See the ".to_string()),
//!         Segment::Placeholder,
//!         Segment::Literal(" brown fox?".to_string()),
//!     ]
//! );
//! ```
//!
//! # Matching rules
//!
//! Matching is all-or-nothing per occurrence. An open delimiter with no
//! matching close, a misspelled keyword, or anything else that only
//! resembles a placeholder passes through untouched as literal text:
//!
//! ```rust
//! use restamp_scanner::{scan, DelimiterPair, Segment};
//!
//! let delims = DelimiterPair::default();
//! let segments = scan("See the *( value brown fox?", &delims);
//!
//! assert_eq!(
//!     segments,
//!     vec![Segment::Literal("See the *( value brown fox?".to_string())]
//! );
//! ```
//!
//! Delimiter strings are matched as literal text; the scanner never builds a
//! pattern, so no character in a delimiter needs escaping.

use std::fmt;

use thiserror::Error;

/// The fixed keyword recognized inside a placeholder.
///
/// Placeholders carry this literal keyword rather than an arbitrary name;
/// substitution slots are bound by position, never by name.
pub const KEYWORD: &str = "value";

/// Which side of a delimiter pair an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterSide {
    Open,
    Close,
}

impl fmt::Display for DelimiterSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DelimiterSide::Open => write!(f, "open"),
            DelimiterSide::Close => write!(f, "close"),
        }
    }
}

/// Errors from resolving a delimiter pair.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DelimiterError {
    /// A delimiter string was empty after trimming surrounding whitespace.
    ///
    /// An empty delimiter makes placeholder detection unbounded, so it is
    /// rejected up front.
    #[error("{side} delimiter is empty")]
    Empty { side: DelimiterSide },
}

/// An open/close delimiter pair bounding a placeholder.
///
/// The pair is resolved once and immutable afterwards. Surrounding
/// whitespace is trimmed from each glyph at construction; the whitespace
/// tolerance inside a placeholder applies only to the keyword body, never to
/// the delimiters themselves.
///
/// # Example
///
/// ```rust
/// use restamp_scanner::DelimiterPair;
///
/// let custom = DelimiterPair::new("<<!", "!>>").unwrap();
/// assert_eq!(custom.open(), "<<!");
/// assert_eq!(custom.close(), "!>>");
///
/// let default = DelimiterPair::default();
/// assert_eq!(default.open(), "*(");
/// assert_eq!(default.close(), ")*");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterPair {
    open: String,
    close: String,
}

impl DelimiterPair {
    /// Default opening delimiter.
    pub const DEFAULT_OPEN: &'static str = "*(";

    /// Default closing delimiter.
    pub const DEFAULT_CLOSE: &'static str = ")*";

    /// Builds a delimiter pair from user-supplied glyphs.
    ///
    /// Surrounding whitespace is trimmed. Fails with [`DelimiterError::Empty`]
    /// if either side trims down to the empty string.
    pub fn new(open: &str, close: &str) -> Result<Self, DelimiterError> {
        let open = open.trim();
        let close = close.trim();

        if open.is_empty() {
            return Err(DelimiterError::Empty {
                side: DelimiterSide::Open,
            });
        }
        if close.is_empty() {
            return Err(DelimiterError::Empty {
                side: DelimiterSide::Close,
            });
        }

        Ok(Self {
            open: open.to_string(),
            close: close.to_string(),
        })
    }

    /// The opening delimiter glyph.
    pub fn open(&self) -> &str {
        &self.open
    }

    /// The closing delimiter glyph.
    pub fn close(&self) -> &str {
        &self.close
    }
}

impl Default for DelimiterPair {
    fn default() -> Self {
        Self {
            open: Self::DEFAULT_OPEN.to_string(),
            close: Self::DEFAULT_CLOSE.to_string(),
        }
    }
}

/// One unit of a tokenized template, in render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, preserved verbatim.
    Literal(String),
    /// One substitution slot. Carries no payload: placeholders are
    /// positionally interchangeable.
    Placeholder,
}

/// Scans `template` into segments using the given delimiter pair.
///
/// Convenience wrapper that collects a [`Scanner`].
pub fn scan(template: &str, delims: &DelimiterPair) -> Vec<Segment> {
    Scanner::new(template, delims).collect()
}

/// Left-to-right scanner over a template string.
///
/// Yields each non-overlapping full placeholder occurrence as
/// [`Segment::Placeholder`] and everything between occurrences (including
/// before the first and after the last) as [`Segment::Literal`]. An empty
/// template yields no segments.
pub struct Scanner<'a> {
    input: &'a str,
    delims: &'a DelimiterPair,
    pos: usize,
    // End offset of a placeholder already located while emitting the
    // literal that precedes it.
    pending_end: Option<usize>,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str, delims: &'a DelimiterPair) -> Self {
        Self {
            input,
            delims,
            pos: 0,
            pending_end: None,
        }
    }

    /// Attempts to match a full placeholder starting at byte offset `start`.
    ///
    /// The form is: open delimiter, zero or more whitespace, the keyword,
    /// zero or more whitespace, close delimiter. Returns the end offset of
    /// the match, or `None` if any part is absent. There is no partial
    /// match: a failure here means `start` is ordinary literal text.
    fn match_placeholder(&self, start: usize) -> Option<usize> {
        let open = self.delims.open();
        if !self.input[start..].starts_with(open) {
            return None;
        }
        let mut cursor = start + open.len();

        cursor += leading_whitespace(&self.input[cursor..]);
        if !self.input[cursor..].starts_with(KEYWORD) {
            return None;
        }
        cursor += KEYWORD.len();

        cursor += leading_whitespace(&self.input[cursor..]);
        let close = self.delims.close();
        if !self.input[cursor..].starts_with(close) {
            return None;
        }

        Some(cursor + close.len())
    }
}

impl Iterator for Scanner<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(end) = self.pending_end.take() {
            self.pos = end;
            return Some(Segment::Placeholder);
        }

        if self.pos >= self.input.len() {
            return None;
        }

        let open = self.delims.open();
        let mut search = self.pos;

        while let Some(offset) = self.input[search..].find(open) {
            let at = search + offset;

            if let Some(end) = self.match_placeholder(at) {
                if at == self.pos {
                    self.pos = end;
                    return Some(Segment::Placeholder);
                }

                // Emit the text before the placeholder now and the
                // placeholder itself on the next call.
                let literal = self.input[self.pos..at].to_string();
                self.pos = at;
                self.pending_end = Some(end);
                return Some(Segment::Literal(literal));
            }

            // Placeholder-like text that doesn't match the full form stays
            // literal; resume the search one character further on so
            // overlapping open glyphs are still considered.
            let step = open
                .chars()
                .next()
                .map(char::len_utf8)
                .unwrap_or(1);
            search = at + step;
        }

        let literal = self.input[self.pos..].to_string();
        self.pos = self.input.len();
        Some(Segment::Literal(literal))
    }
}

/// Byte length of the leading whitespace run in `s`.
fn leading_whitespace(s: &str) -> usize {
    s.char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
