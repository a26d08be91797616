// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Loads a weighted graph and reports the cheapest path to every node.
//!
//! Usage: `dijkstra [graph-file] [start-node]`. The start defaults to the
//! alphabetically first node.

use idclip_demos::{open_input, shortest};
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
    let edges =
        open_input(args.first(), "Enter a graph file name", "flightcost.txt")?;
    let graph = shortest::read_graph(BufReader::new(edges))?;
    let Some(start) = args.get(1).cloned().or_else(|| shortest::default_start(&graph))
    else {
        println!("{graph}");
        return Ok(());
    };
    print!("{}", shortest::report(&graph, &start));
    Ok(())
}
