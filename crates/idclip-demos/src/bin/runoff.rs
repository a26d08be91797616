// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Runs an instant-runoff election over a file of ranked ballots.
//!
//! Usage: `runoff [ballots-file]`.

use idclip_demos::{open_input, runoff};
use std::{env, error::Error, io::BufReader, process::ExitCode};

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
    let ballots =
        open_input(args.first(), "Enter a voter preferences file name", "votepref1.txt")?;
    let preferences = runoff::read_preferences(BufReader::new(ballots))?;
    print!("{}", runoff::describe(&preferences));
    print!("{}", runoff::run_election(&preferences));
    Ok(())
}
