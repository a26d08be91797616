// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Demonstration programs for the `idclip` containers.
//!
//! Each demo lives here as a module of pure functions that read from a
//! [`BufRead`](std::io::BufRead) source and render a report `String`, so
//! the logic is testable without a terminal. The matching binaries under
//! `src/bin/` only pick input files and print. Sample inputs ship in
//! `data/`, and `tests/` pins the reports those samples produce.

pub mod console;
pub mod fa;
pub mod ndfa;
pub mod reachable;
pub mod runoff;
pub mod shortest;
pub mod wordgen;

use idclip::LinkedSet;
use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
};

/// Splits `line` on `sep`, trimming whitespace and dropping empty pieces.
pub fn split(line: &str, sep: &str) -> Vec<String> {
    line.split(sep)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Path of a bundled sample data file.
pub fn sample_path(name: &str) -> PathBuf {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data")).join(name)
}

/// Opens the file named by `arg` when one was given, otherwise prompts for
/// a file name with the bundled `sample` as the default.
pub fn open_input(
    arg: Option<&String>,
    prompt: &str,
    sample: &str,
) -> io::Result<File> {
    match arg {
        Some(path) => File::open(path).map_err(|error| {
            io::Error::new(error.kind(), format!("{path}: {error}"))
        }),
        None => console::safe_open(prompt, &sample_path(sample)),
    }
}

/// Renders a set with its elements sorted, in the container's `set[...]`
/// shape, so reports do not depend on hash or insertion order.
pub(crate) fn sorted_set_display(set: &LinkedSet<String>) -> String {
    let mut elements: Vec<&str> = set.iter().map(String::as_str).collect();
    elements.sort_unstable();
    format!("set[{}]", elements.join(","))
}
