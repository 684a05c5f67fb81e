//! Statements produced by the splitter and the positions attached to them.

use alloc::string::String;
use core::fmt;

/// A location in the input script.
///
/// `offset` is a byte offset; `line` and `column` are 1-based, with `column`
/// counted in characters. A line feed starts a new line.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Byte offset from the start of the script.
    pub offset: usize,
    /// Line number, starting at 1.
    pub line: usize,
    /// Column number in characters, starting at 1.
    pub column: usize,
}

impl Position {
    /// The position of the first character of a script.
    pub const START: Self = Self {
        offset: 0,
        line: 1,
        column: 1,
    };
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// One statement split out of a script.
///
/// `text` is trimmed and never empty. It excludes the terminating `;` and any
/// discarded comments. `start` points at its first character in the script
/// and `end` just past its last one.
///
/// # Examples
///
/// ```rust
/// use sqlsplit::{SplitterOptions, split_statements};
///
/// let stmts = split_statements("select 1;\n  select 2", SplitterOptions::default());
/// assert_eq!(stmts[1].text, "select 2");
/// assert_eq!(stmts[1].index, 1);
/// assert_eq!((stmts[1].start.line, stmts[1].start.column), (2, 3));
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Statement {
    /// Ordinal of this statement among the statements of the script.
    pub index: usize,
    /// The statement text.
    pub text: String,
    /// Position of the first character of `text`.
    pub start: Position,
    /// Position just past the last character of `text`.
    pub end: Position,
}

impl Statement {
    /// Borrows the statement text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consumes the statement, returning its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl AsRef<str> for Statement {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<Statement> for String {
    fn from(statement: Statement) -> Self {
        statement.text
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.text.fmt(f)
    }
}
