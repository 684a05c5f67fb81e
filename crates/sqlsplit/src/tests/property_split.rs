use alloc::{
    boxed::Box,
    string::{String, ToString},
    vec::Vec,
};

use quickcheck::{Arbitrary, Gen, QuickCheck};
use quickcheck_macros::quickcheck;

use crate::{SplitterOptions, scanner::is_blank, split, split_bytes, split_statements};

fn test_count() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}

/// Statements made only of characters that never start a quote, comment or
/// terminator.
#[derive(Debug, Clone)]
struct PlainStatements(Vec<String>);

impl Arbitrary for PlainStatements {
    fn arbitrary(g: &mut Gen) -> Self {
        const ALPHABET: &[char] = &[
            's', 'e', 'l', 'c', 't', 'x', '1', '2', '*', '(', ')', '=', ',', '.', ' ', '\n', '\t',
        ];
        let count = usize::arbitrary(g) % 8;
        let statements = (0..count)
            .map(|_| {
                let len = usize::arbitrary(g) % 16;
                (0..len)
                    .map(|_| g.choose(ALPHABET).copied().unwrap_or(' '))
                    .collect()
            })
            .collect();
        PlainStatements(statements)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(PlainStatements))
    }
}

/// Re-joining split output with `;` and splitting again is a fixed point, and
/// the first split equals the trimmed non-empty pieces.
#[test]
fn plain_statements_resplit_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(input: PlainStatements) -> bool {
        let script = input.0.join(";");
        let first = split(script.as_str());

        let expected: Vec<String> = input
            .0
            .iter()
            .map(|s| s.trim_matches(|c| is_blank(c, false)))
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
            .collect();
        if first != expected {
            return false;
        }

        let rejoined = first.join(";");
        split(rejoined.as_str()) == first
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(PlainStatements) -> bool);
}

/// Every statement is non-empty, already trimmed, and never carries a
/// terminator outside of what the source text allowed.
#[test]
fn output_is_trimmed_and_non_empty_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(script: String, unicode: bool) -> bool {
        let options = SplitterOptions {
            allow_unicode_whitespace: unicode,
            ..Default::default()
        };
        split_statements(&script, options).iter().all(|s| {
            !s.text.is_empty()
                && s.text.trim_matches(|c| is_blank(c, unicode)) == s.text
                && s.start.offset < s.end.offset
                && s.end.offset <= script.len()
        })
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(String, bool) -> bool);
}

/// With comments kept, nothing but top-level terminators is dropped, so each
/// statement is exactly the source text between its positions.
#[test]
fn kept_comments_make_statements_source_slices_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(script: String) -> bool {
        let options = SplitterOptions {
            keep_comments: true,
            ..Default::default()
        };
        let stmts = split_statements(&script, options);
        let ordered = stmts
            .windows(2)
            .all(|w| w[0].end.offset < w[1].start.offset);
        ordered
            && stmts
                .iter()
                .all(|s| script.get(s.start.offset..s.end.offset) == Some(s.text.as_str()))
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(String) -> bool);
}

#[quickcheck]
fn split_bytes_agrees_with_lossy_decoding(bytes: Vec<u8>) -> bool {
    let lossy = String::from_utf8_lossy(&bytes);
    split_bytes(&bytes) == split(&*lossy)
}
