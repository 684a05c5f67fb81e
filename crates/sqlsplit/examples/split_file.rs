//! Splits a SQL script file and prints one statement per block.
//!
//! Run with
//!
//! ```bash
//! cargo run -p sqlsplit --example split_file -- path/to/script.sql
//! ```
//!
//! Pass `--strict` to fail on an unterminated quote, comment or hint instead
//! of letting it run to the end of the file.
#![allow(missing_docs)]

use std::{env, fs, process::ExitCode};

use sqlsplit::{Splitter, SplitterOptions};

fn main() -> ExitCode {
    let mut strict = false;
    let mut path = None;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--strict" => strict = true,
            _ => path = Some(arg),
        }
    }
    let Some(path) = path else {
        eprintln!("usage: split_file [--strict] <script.sql>");
        return ExitCode::FAILURE;
    };

    let bytes = match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("{path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut splitter = Splitter::from_bytes(&bytes, SplitterOptions::default());
    for stmt in splitter.by_ref() {
        println!("-- #{} at {}:{}", stmt.index, path, stmt.start);
        println!("{stmt};");
        println!();
    }

    match splitter.into_error() {
        Some(err) if strict => {
            eprintln!("{path}: {err}");
            ExitCode::FAILURE
        }
        _ => ExitCode::SUCCESS,
    }
}
