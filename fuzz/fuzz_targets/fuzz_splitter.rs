#![no_main]
use std::cell::RefCell;

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng; // faster than StdRng
use rand::{Rng, RngCore, SeedableRng};
use sqlsplit::{Splitter, SplitterOptions};

const HEADER: usize = 1; // option flags

thread_local! {
    // One SmallRng per thread, seeded once from the host OS
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

/// Helper: borrow the thread-local RNG and run a closure with it.
fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

/// One piece of a generated script. Rendering a sequence of these hits every
/// dispatch rule far more often than raw byte mutation does.
#[derive(Debug, Arbitrary)]
enum Fragment {
    Word(String),
    Space,
    Newline,
    Terminator,
    Quote { quote: Quote, body: String, closed: bool },
    LineComment { marker: LineMarker, body: String },
    Block { hint: bool, body: String, closed: bool },
}

#[derive(Debug, Arbitrary)]
enum Quote {
    Single,
    Double,
    Backtick,
}

#[derive(Debug, Arbitrary)]
enum LineMarker {
    Dashes,
    Hash,
    Slashes,
}

impl Fragment {
    fn render(&self, out: &mut Vec<u8>) {
        match self {
            Fragment::Word(w) => out.extend_from_slice(w.as_bytes()),
            Fragment::Space => out.push(b' '),
            Fragment::Newline => out.push(b'\n'),
            Fragment::Terminator => out.push(b';'),
            Fragment::Quote {
                quote,
                body,
                closed,
            } => {
                let q = match quote {
                    Quote::Single => b'\'',
                    Quote::Double => b'"',
                    Quote::Backtick => b'`',
                };
                out.push(q);
                out.extend_from_slice(body.as_bytes());
                if *closed {
                    out.push(q);
                }
            }
            Fragment::LineComment { marker, body } => {
                let m: &[u8] = match marker {
                    LineMarker::Dashes => b"--",
                    LineMarker::Hash => b"#",
                    LineMarker::Slashes => b"//",
                };
                out.extend_from_slice(m);
                out.extend_from_slice(body.as_bytes());
                out.push(b'\n');
            }
            Fragment::Block { hint, body, closed } => {
                let open: &[u8] = if *hint { b"/*+" } else { b"/*" };
                out.extend_from_slice(open);
                out.extend_from_slice(body.as_bytes());
                if *closed {
                    out.extend_from_slice(b"*/");
                }
            }
        }
    }
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        data[0] = with_rng(|rng| rng.next_u32() as u8 & 0x07); // 3 bits

        let mut prefix = HEADER;
        while prefix < size.max(HEADER + 1) && prefix < max_size {
            let written = append_fragments(&mut data[prefix..], size);
            if written == 0 {
                break;
            }
            prefix += written;
        }
        prefix
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

fn append_fragments(buf: &mut [u8], size: usize) -> usize {
    let limit = buf.len();
    let fragments = loop {
        let s = with_rng(|rng| rng.random_range(1..=size.max(2) * 2));
        let bytes: Vec<u8> = with_rng(|rng| (0..s).map(|_| rng.random::<u8>()).collect());
        if let Ok(fragments) = Vec::<Fragment>::arbitrary(&mut Unstructured::new(&bytes)) {
            break fragments;
        }
    };

    let mut rendered = Vec::new();
    for fragment in &fragments {
        fragment.render(&mut rendered);
    }

    let len = rendered.len().min(limit);
    buf[..len].copy_from_slice(&rendered[..len]);
    len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

fn splitter(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }

    let flags = data[0];
    let script = &data[HEADER..];
    let options = SplitterOptions {
        allow_unicode_whitespace: flags & 1 != 0,
        keep_comments: flags & 2 != 0,
        strip_hints: flags & 4 != 0,
    };

    let mut splitter = Splitter::from_bytes(script, options);
    let mut last_end = 0;
    for (i, stmt) in splitter.by_ref().enumerate() {
        assert_eq!(stmt.index, i);
        assert!(!stmt.text.is_empty());
        assert!(stmt.start.offset >= last_end);
        assert!(stmt.start.offset < stmt.end.offset);
        assert!(stmt.end.offset <= script.len());
        last_end = stmt.end.offset;

        // With comments kept, a statement from valid UTF-8 is its source slice.
        if options.keep_comments && !options.strip_hints {
            if let Ok(src) = std::str::from_utf8(script) {
                assert_eq!(&src[stmt.start.offset..stmt.end.offset], stmt.text);
            }
        }
    }
    if let Some(err) = splitter.unterminated() {
        assert!(err.offset < script.len());
    }
}

fuzz_target!(|data: &[u8]| splitter(data));
