//! The statement splitter: a single pass over the script that dispatches on
//! a fixed-priority lookahead at every position.
//!
//! Priority, first match wins:
//!
//! 1. `;` ends the current statement.
//! 2. `'`, `"` or `` ` `` opens a quoted region, copied verbatim up to the
//!    next occurrence of the same character.
//! 3. `--`, `#` or `//` starts a line comment, dropped up to (not including)
//!    the next line feed or carriage return.
//! 4. `/*+` starts a hint, copied verbatim through `*/`.
//! 5. `/*` starts a block comment, dropped through `*/`.
//! 6. Anything else is copied.
//!
//! Regions left open at end of input extend to the end. The splitter records
//! the first such region so [`try_split`](crate::try_split) can report it.

use core::iter::FusedIterator;

use crate::{
    error::{ErrorKind, SplitError},
    options::SplitterOptions,
    scanner::Scanner,
    statement::{Position, Statement},
};

const BLOCK_OPEN: &str = "/*";
const BLOCK_CLOSE: &str = "*/";

/// What the input at the cursor starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lookahead {
    Terminator,
    Quote(char),
    LineComment,
    Hint,
    BlockComment,
    Other,
}

impl Lookahead {
    // Arm order is the dispatch priority: `/*+` must precede `/*`.
    fn classify(rest: &[u8]) -> Self {
        match rest {
            [b';', ..] => Lookahead::Terminator,
            [q @ (b'\'' | b'"' | b'`'), ..] => Lookahead::Quote(char::from(*q)),
            [b'-', b'-', ..] | [b'#', ..] | [b'/', b'/', ..] => Lookahead::LineComment,
            [b'/', b'*', b'+', ..] => Lookahead::Hint,
            [b'/', b'*', ..] => Lookahead::BlockComment,
            _ => Lookahead::Other,
        }
    }
}

/// Splits an in-memory SQL script into [`Statement`]s.
///
/// The splitter is an iterator: each call to `next` scans just far enough to
/// produce the next statement. It never fails; once iteration is over,
/// [`unterminated`](Self::unterminated) tells whether a quoted region,
/// block comment or hint ran to end of input.
///
/// # Examples
///
/// ```rust
/// use sqlsplit::Splitter;
///
/// let mut splitter = Splitter::new("insert into t values ('a;b'); select 1 /* ; */;");
/// assert_eq!(splitter.next().unwrap().text, "insert into t values ('a;b')");
/// assert_eq!(splitter.next().unwrap().text, "select 1");
/// assert!(splitter.next().is_none());
/// assert!(splitter.unterminated().is_none());
/// ```
pub struct Splitter<'src> {
    scanner: Scanner<'src>,
    options: SplitterOptions,
    emitted: usize,
    unterminated: Option<SplitError>,
}

impl<'src> Splitter<'src> {
    /// Creates a splitter over `script` with default options.
    #[must_use]
    pub fn new(script: &'src str) -> Self {
        Self::with_options(script, SplitterOptions::default())
    }

    /// Creates a splitter over `script`.
    #[must_use]
    pub fn with_options(script: &'src str, options: SplitterOptions) -> Self {
        Self::from_bytes(script.as_bytes(), options)
    }

    /// Creates a splitter over raw script bytes.
    ///
    /// Invalid UTF-8 sequences are decoded as U+FFFD. They never match a
    /// delimiter, so they are copied like any other character.
    #[must_use]
    pub fn from_bytes(script: &'src [u8], options: SplitterOptions) -> Self {
        Self {
            scanner: Scanner::new(script, options.allow_unicode_whitespace),
            options,
            emitted: 0,
            unterminated: None,
        }
    }

    /// The options this splitter was created with.
    #[must_use]
    pub fn options(&self) -> SplitterOptions {
        self.options
    }

    /// Current scan position.
    #[must_use]
    pub fn position(&self) -> Position {
        self.scanner.position()
    }

    /// The first region found open at end of input, if any.
    ///
    /// Only meaningful once the splitter has been exhausted.
    #[must_use]
    pub fn unterminated(&self) -> Option<&SplitError> {
        self.unterminated.as_ref()
    }

    /// Consumes the splitter, returning the first region found open at end
    /// of input, if any.
    #[must_use]
    pub fn into_error(self) -> Option<SplitError> {
        self.unterminated
    }

    fn quoted(&mut self, quote: char) {
        let opened_at = self.scanner.position();
        self.scanner.consume();
        while let Some(ch) = self.scanner.consume() {
            if ch == quote {
                return;
            }
        }
        self.truncated(ErrorKind::UnterminatedQuote(quote), opened_at);
    }

    fn line_comment(&mut self) {
        let keep = self.options.keep_comments;
        while let Some(ch) = self.scanner.peek() {
            if ch == '\n' || ch == '\r' {
                return;
            }
            self.advance(keep, 1);
        }
    }

    /// Hints and block comments share their shape; only whether the text is
    /// kept differs. The `+` of a hint is ordinary content here.
    fn delimited_comment(&mut self, keep: bool, kind: ErrorKind) {
        let opened_at = self.scanner.position();
        self.advance(keep, BLOCK_OPEN.len());
        while !self.scanner.is_eof() {
            if self.scanner.at(BLOCK_CLOSE) {
                self.advance(keep, BLOCK_CLOSE.len());
                return;
            }
            self.advance(keep, 1);
        }
        self.truncated(kind, opened_at);
    }

    #[inline]
    fn advance(&mut self, keep: bool, n: usize) {
        for _ in 0..n {
            if keep {
                self.scanner.consume();
            } else {
                self.scanner.skip();
            }
        }
    }

    fn truncated(&mut self, kind: ErrorKind, opened_at: Position) {
        log::debug!("{kind} at {opened_at} runs to end of input");
        if self.unterminated.is_none() {
            self.unterminated = Some(SplitError::new(kind, opened_at));
        }
    }

    fn emit(&mut self) -> Option<Statement> {
        let capture = self.scanner.emit()?;
        let statement = Statement {
            index: self.emitted,
            text: capture.text,
            start: capture.start,
            end: capture.end,
        };
        self.emitted += 1;
        log::trace!(
            "statement #{} at {}: {}",
            statement.index,
            statement.start,
            statement.text
        );
        Some(statement)
    }
}

impl Iterator for Splitter<'_> {
    type Item = Statement;

    fn next(&mut self) -> Option<Statement> {
        while !self.scanner.is_eof() {
            match Lookahead::classify(self.scanner.rest()) {
                Lookahead::Terminator => {
                    let statement = self.emit();
                    self.scanner.skip();
                    if statement.is_some() {
                        return statement;
                    }
                }
                Lookahead::Quote(quote) => self.quoted(quote),
                Lookahead::LineComment => self.line_comment(),
                Lookahead::Hint if !self.options.strip_hints => {
                    self.delimited_comment(true, ErrorKind::UnterminatedHint);
                }
                Lookahead::Hint => self.delimited_comment(false, ErrorKind::UnterminatedHint),
                Lookahead::BlockComment => self.delimited_comment(
                    self.options.keep_comments,
                    ErrorKind::UnterminatedBlockComment,
                ),
                Lookahead::Other => {
                    self.scanner.consume();
                }
            }
        }
        // Statement without a trailing terminator. Once emitted the buffer is
        // empty, so later calls return `None`.
        self.emit()
    }
}

impl FusedIterator for Splitter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_follows_priority() {
        assert_eq!(Lookahead::classify(b";"), Lookahead::Terminator);
        assert_eq!(Lookahead::classify(b"'x"), Lookahead::Quote('\''));
        assert_eq!(Lookahead::classify(b"\""), Lookahead::Quote('"'));
        assert_eq!(Lookahead::classify(b"`"), Lookahead::Quote('`'));
        assert_eq!(Lookahead::classify(b"--"), Lookahead::LineComment);
        assert_eq!(Lookahead::classify(b"#"), Lookahead::LineComment);
        assert_eq!(Lookahead::classify(b"//*"), Lookahead::LineComment);
        assert_eq!(Lookahead::classify(b"/*+"), Lookahead::Hint);
        assert_eq!(Lookahead::classify(b"/*"), Lookahead::BlockComment);
        assert_eq!(Lookahead::classify(b"/* +"), Lookahead::BlockComment);
        assert_eq!(Lookahead::classify(b"-"), Lookahead::Other);
        assert_eq!(Lookahead::classify(b"/"), Lookahead::Other);
        assert_eq!(Lookahead::classify(b""), Lookahead::Other);
    }

    #[test]
    fn iterator_is_fused_after_trailing_statement() {
        let mut splitter = Splitter::new("select 1");
        assert_eq!(splitter.next().map(Statement::into_string).as_deref(), Some("select 1"));
        assert!(splitter.next().is_none());
        assert!(splitter.next().is_none());
    }

    #[test]
    fn indices_count_emitted_statements_only() {
        let stmts: alloc::vec::Vec<_> = Splitter::new(";; a ;;; b").collect();
        assert_eq!(stmts.len(), 2);
        assert_eq!(stmts[0].index, 0);
        assert_eq!(stmts[1].index, 1);
    }

    #[test]
    fn position_reaches_end_of_input() {
        let mut splitter = Splitter::new("a;\nb");
        for _ in splitter.by_ref() {}
        assert_eq!(
            splitter.position(),
            Position {
                offset: 4,
                line: 2,
                column: 2
            }
        );
    }
}
