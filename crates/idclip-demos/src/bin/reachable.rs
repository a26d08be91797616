// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reports which graph nodes are reachable from which starting nodes.
//!
//! Usage: `reachable [graph-file] [start-node]...`. With no start nodes,
//! every source node in the graph is reported.

use idclip_demos::{open_input, reachable};
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
    let edges = open_input(args.first(), "Enter a graph file name", "graph1.txt")?;
    let graph = reachable::read_graph(BufReader::new(edges))?;
    let starts = args.get(1..).unwrap_or_default();
    print!("{}", reachable::describe(&graph));
    print!("{}", reachable::report(&graph, starts));
    Ok(())
}
