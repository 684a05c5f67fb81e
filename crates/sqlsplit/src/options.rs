/// Configuration options for the SQL script splitter.
///
/// These options control how statements are trimmed and whether comments and
/// optimizer hints end up in the statement text. None of them changes where a
/// script is split: a `;` inside a quoted region or a comment never ends a
/// statement.
///
/// # Examples
///
/// ```rust
/// use sqlsplit::{SplitterOptions, split_statements};
///
/// let options = SplitterOptions {
///     keep_comments: true,
///     ..Default::default()
/// };
/// let stmts = split_statements("select 1 -- one; two\n;", options);
/// assert_eq!(stmts[0].text, "select 1 -- one; two");
/// ```
///
/// # Default
///
/// All options default to `false`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct SplitterOptions {
    /// Whether to trim any Unicode whitespace from statements.
    ///
    /// By default only characters up to and including U+0020 are trimmed:
    /// space, tab, line feed, carriage return and the other ASCII control
    /// characters. Enabling this also trims characters such as U+00A0 or
    /// U+3000 from both ends of a statement.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_unicode_whitespace: bool,

    /// Whether to keep comments in the statement text.
    ///
    /// When `false`, line comments (`--`, `#`, `//`) and block comments
    /// (`/* ... */`) are dropped from the output. When `true`, they are
    /// copied verbatim into the statement they appear in. Either way their
    /// content never splits a statement.
    ///
    /// # Default
    ///
    /// `false`
    pub keep_comments: bool,

    /// Whether to drop optimizer hints (`/*+ ... */`).
    ///
    /// Hints are kept by default because they change how a statement
    /// executes. When `true`, they are dropped like block comments, even if
    /// `keep_comments` is set.
    ///
    /// # Default
    ///
    /// `false`
    pub strip_hints: bool,
}
