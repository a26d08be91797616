// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Simulates a deterministic finite automaton over scripted inputs.
//!
//! Usage: `fa [automaton-file] [inputs-file]`. Missing files are prompted
//! for, with bundled samples as defaults.

use idclip_demos::{fa, open_input};
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
    let machine = open_input(
        args.first(),
        "Enter a finite automaton file name",
        "faparity.txt",
    )?;
    let automaton = fa::read_automaton(BufReader::new(machine))?;
    print!("{}", fa::describe(&automaton));

    let inputs = open_input(
        args.get(1),
        "Enter a start-state and inputs file name",
        "fainputparity.txt",
    )?;
    print!("{}", fa::simulate_all(&automaton, BufReader::new(inputs))?);
    Ok(())
}
