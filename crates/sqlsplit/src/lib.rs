//! Split SQL scripts into individual statements.
//!
//! A naive split on `;` breaks as soon as a semicolon shows up in a string
//! literal or a comment. This crate scans the script once, character by
//! character, and only splits on terminators outside quoted regions and
//! comments:
//!
//! - `'...'`, `"..."` and `` `...` `` regions are copied verbatim, `;`
//!   included.
//! - Line comments (`--`, `#`, `//`) and block comments (`/* ... */`) are
//!   dropped, along with any `;` inside them.
//! - Optimizer hints (`/*+ ... */`) are kept.
//!
//! Statements are trimmed and empty ones are dropped. The scanner does not
//! parse SQL and never fails: an unterminated quote or comment simply runs to
//! the end of the script. Use [`try_split`] to have that reported instead.
//!
//! ```rust
//! let stmts = sqlsplit::split("select * from t1 where a='1;'; select * from t2;");
//! assert_eq!(stmts, ["select * from t1 where a='1;'", "select * from t2"]);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod options;
mod scanner;
mod splitter;
mod statement;

#[cfg(test)]
mod tests;

use alloc::{string::String, vec::Vec};

pub use error::{ErrorKind, SplitError};
pub use options::SplitterOptions;
pub use splitter::Splitter;
pub use statement::{Position, Statement};

/// Splits `script` into trimmed, non-empty statements.
///
/// Accepts a `&str` or an `Option<&str>`; an absent or empty script yields no
/// statements.
///
/// ```rust
/// use sqlsplit::split;
///
/// assert_eq!(split("select 1; -- one;\nselect 2"), ["select 1", "select 2"]);
/// assert!(split("").is_empty());
/// assert!(split(None::<&str>).is_empty());
/// ```
#[must_use]
pub fn split<'a>(script: impl Into<Option<&'a str>>) -> Vec<String> {
    match script.into() {
        Some(script) => Splitter::new(script).map(Statement::into_string).collect(),
        None => Vec::new(),
    }
}

/// Splits a script given as raw bytes.
///
/// Invalid UTF-8 is replaced with U+FFFD in the output.
#[must_use]
pub fn split_bytes(script: &[u8]) -> Vec<String> {
    Splitter::from_bytes(script, SplitterOptions::default())
        .map(Statement::into_string)
        .collect()
}

/// Splits `script` into statements carrying their index and position.
#[must_use]
pub fn split_statements(script: &str, options: SplitterOptions) -> Vec<Statement> {
    Splitter::with_options(script, options).collect()
}

/// Splits `script` like [`split_statements`], but fails if a quoted region,
/// block comment or hint is still open at end of input.
///
/// A line comment without a trailing line break is not an error.
///
/// # Errors
///
/// Returns a [`SplitError`] pointing at the opening delimiter of the
/// unterminated region.
///
/// ```rust
/// use sqlsplit::{ErrorKind, SplitterOptions, try_split};
///
/// let err = try_split("select 1;\nselect 'oops", SplitterOptions::default()).unwrap_err();
/// assert_eq!(err.kind, ErrorKind::UnterminatedQuote('\''));
/// assert_eq!((err.line, err.column), (2, 8));
/// ```
pub fn try_split(script: &str, options: SplitterOptions) -> Result<Vec<Statement>, SplitError> {
    let mut splitter = Splitter::with_options(script, options);
    let statements: Vec<Statement> = splitter.by_ref().collect();
    match splitter.into_error() {
        Some(err) => Err(err),
        None => Ok(statements),
    }
}
