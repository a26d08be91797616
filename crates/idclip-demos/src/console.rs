// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Line-oriented prompts for the demo binaries.

use std::{
    fs::File,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

/// Prints `prompt` and reads one trimmed line from stdin.
///
/// # Errors
///
/// Fails on stdin/stdout errors, including end of input.
pub fn prompt_string(prompt: &str) -> io::Result<String> {
    let mut out = io::stdout().lock();
    write!(out, "{prompt}: ")?;
    out.flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(line.trim().to_owned())
}

/// Prompts until the answer parses as an integer. An empty answer takes
/// `default` when one is given.
pub fn prompt_i64(prompt: &str, default: Option<i64>) -> io::Result<i64> {
    let shown = match default {
        Some(value) => format!("{prompt} [{value}]"),
        None => prompt.to_owned(),
    };
    loop {
        let answer = prompt_string(&shown)?;
        if answer.is_empty() {
            if let Some(value) = default {
                return Ok(value);
            }
            continue;
        }
        match answer.parse() {
            Ok(value) => return Ok(value),
            Err(_) => println!("  not an integer: {answer}"),
        }
    }
}

/// Prompts for a file name until one opens. An empty answer takes
/// `default`.
pub fn safe_open(prompt: &str, default: &Path) -> io::Result<File> {
    let shown = format!("{prompt} [{}]", default.display());
    loop {
        let answer = prompt_string(&shown)?;
        let path = if answer.is_empty() {
            default.to_owned()
        } else {
            PathBuf::from(answer)
        };
        match File::open(&path) {
            Ok(file) => return Ok(file),
            Err(error) => println!("  could not open {}: {error}", path.display()),
        }
    }
}
