//! Scanner: cursor over the script bytes plus the statement accumulation
//! buffer.
//!
//! What it does
//! - Decodes one UTF‑8 scalar at a time from the borrowed input via
//!   [`bstr::decode_utf8`], replacing invalid sequences with U+FFFD, while
//!   maintaining `offset/line/column`.
//! - Offers two ways to advance: `consume()` (advance and capture into the
//!   buffer) and `skip()` (advance only). Comment handling is expressed purely
//!   as a choice between the two.
//! - Tracks the span of *significant* (non‑blank) captured characters so the
//!   emitted statement knows where it starts and ends without a rescan.
//!
//! Scope
//! - The scanner has no notion of quotes, comments or terminators. The
//!   splitter decides what to consume and when to `emit()`.
//!
//! Invariants
//! - `offset` only grows and always sits on a decode boundary of `src`.
//! - `span.is_some()` exactly when the buffer holds a significant character,
//!   so `emit()` never returns blank text.
//! - Lookahead is byte based (`rest()`); all markers the splitter matches on
//!   are ASCII, so byte prefixes and char prefixes agree.

use alloc::string::String;

use crate::statement::Position;

/// Returns whether `ch` is removed when trimming a statement.
///
/// Everything up to and including U+0020 counts as blank (space and the ASCII
/// control characters). With `unicode` set, any Unicode whitespace does too.
#[inline]
pub(crate) fn is_blank(ch: char, unicode: bool) -> bool {
    ch <= ' ' || (unicode && ch.is_whitespace())
}

/// Trimmed text of one statement and the span of its significant characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Capture {
    pub text: String,
    pub start: Position,
    pub end: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    start: Position,
    end: Position,
}

pub(crate) struct Scanner<'src> {
    src: &'src [u8],
    offset: usize,
    line: usize,
    column: usize,

    // Statement-local state
    scratch: String,
    span: Option<Span>,
    unicode_whitespace: bool,
}

impl<'src> Scanner<'src> {
    pub fn new(src: &'src [u8], unicode_whitespace: bool) -> Self {
        Self {
            src,
            offset: 0,
            line: 1,
            column: 1,
            scratch: String::new(),
            span: None,
            unicode_whitespace,
        }
    }

    /// Current cursor position.
    #[inline]
    pub fn position(&self) -> Position {
        Position {
            offset: self.offset,
            line: self.line,
            column: self.column,
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.offset >= self.src.len()
    }

    /// Unread input, for fixed-prefix lookahead.
    #[inline]
    pub fn rest(&self) -> &'src [u8] {
        &self.src[self.offset..]
    }

    #[inline]
    pub fn at(&self, marker: &str) -> bool {
        self.rest().starts_with(marker.as_bytes())
    }

    /// Decodes but does not consume the next character.
    pub fn peek(&self) -> Option<char> {
        self.decode().map(|(ch, _)| ch)
    }

    /// Consumes one character and records it into the buffer.
    pub fn consume(&mut self) -> Option<char> {
        let start = self.position();
        let ch = self.step()?;
        self.scratch.push(ch);
        if !is_blank(ch, self.unicode_whitespace) {
            let end = self.position();
            self.span = Some(match self.span {
                Some(span) => Span { end, ..span },
                None => Span { start, end },
            });
        }
        Some(ch)
    }

    /// Skips one character without recording it.
    #[inline]
    pub fn skip(&mut self) -> Option<char> {
        self.step()
    }

    /// Takes the buffered statement, trimmed, and clears the buffer for the
    /// next one. Returns `None` when nothing significant was captured.
    pub fn emit(&mut self) -> Option<Capture> {
        let capture = self.span.take().map(|span| {
            let unicode = self.unicode_whitespace;
            Capture {
                text: String::from(self.scratch.trim_matches(|c| is_blank(c, unicode))),
                start: span.start,
                end: span.end,
            }
        });
        self.scratch.clear();
        capture
    }

    #[inline]
    fn step(&mut self) -> Option<char> {
        let (ch, len) = self.decode()?;
        self.offset += len;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    // Decode first UTF-8 scalar at the cursor
    fn decode(&self) -> Option<(char, usize)> {
        if self.is_eof() {
            return None;
        }
        let (ch, len) = bstr::decode_utf8(self.rest());
        if len == 0 {
            return None;
        }
        let ch = ch.unwrap_or('\u{FFFD}'); // replace invalid
        Some((ch, len))
    }
}

// Test-only inspection helpers.
#[cfg(test)]
impl Scanner<'_> {
    pub fn test_scratch(&self) -> &str {
        &self.scratch
    }

    pub fn test_has_span(&self) -> bool {
        self.span.is_some()
    }
}
