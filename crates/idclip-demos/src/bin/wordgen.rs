// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Indexes a text file by word windows and generates random text from it.
//!
//! Usage: `wordgen [text-file] [window-size] [word-count] [seed]`. Window
//! size and word count are prompted for when not given; the generated
//! text starts from the first window in word order.

use idclip_demos::{console, open_input, wordgen};
use std::{env, error::Error, io::BufReader, process::ExitCode};

const DEFAULT_SEED: u64 = 1993;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let text = open_input(args.first(), "Enter a text file name", "wginput1.txt")?;
    let order = match args.get(1) {
        Some(raw) => raw.parse()?,
        None => console::prompt_i64("Enter a window size", Some(2))?,
    };
    if order < 1 {
        return Err("window size must be at least 1".into());
    }
    let count = match args.get(2) {
        Some(raw) => raw.parse()?,
        None => console::prompt_i64("Enter the number of words to generate", Some(8))?,
    };
    let seed = match args.get(3) {
        Some(raw) => raw.parse()?,
        None => DEFAULT_SEED,
    };

    let corpus = wordgen::read_corpus(order as usize, BufReader::new(text))?;
    let Some(start) = wordgen::default_start(&corpus) else {
        println!("{}", wordgen::describe(&corpus));
        return Ok(());
    };
    print!(
        "{}",
        wordgen::report(&corpus, &start, count.max(0) as usize, seed)
    );
    Ok(())
}
