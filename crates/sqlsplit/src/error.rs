use thiserror::Error;

use crate::statement::Position;

/// A delimited region that was still open at end of input.
///
/// Only reported by [`try_split`](crate::try_split); the lenient API treats the
/// region as running to end of input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at {line}:{column}")]
pub struct SplitError {
    /// What was left open.
    pub kind: ErrorKind,
    /// Line of the opening delimiter.
    pub line: usize,
    /// Column of the opening delimiter.
    pub column: usize,
    /// Byte offset of the opening delimiter.
    pub offset: usize,
}

impl SplitError {
    pub(crate) fn new(kind: ErrorKind, at: Position) -> Self {
        Self {
            kind,
            line: at.line,
            column: at.column,
            offset: at.offset,
        }
    }

    /// Position of the opening delimiter.
    #[must_use]
    pub fn position(&self) -> Position {
        Position {
            offset: self.offset,
            line: self.line,
            column: self.column,
        }
    }
}

/// The kind of region a [`SplitError`] refers to.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A `'`, `"` or `` ` `` quoted region with no closing delimiter.
    #[error("unterminated quoted region starting with {0}")]
    UnterminatedQuote(char),
    /// A `/*` block comment with no closing `*/`.
    #[error("unterminated block comment")]
    UnterminatedBlockComment,
    /// A `/*+` hint with no closing `*/`.
    #[error("unterminated hint")]
    UnterminatedHint,
}
