// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cheapest paths, end to end: load a weighted graph, run Dijkstra from a
//! start node, recover the path to every node.

use idclip::{
    errors::LoadError,
    graph::{extended_dijkstra, recover_path, PathInfo},
    Entry, HashGraph, HeapQueue,
};
use std::{
    fmt::Write as _,
    io::BufRead,
};

/// Loads a `from;to;cost` edge list into a graph.
pub fn read_graph<R: BufRead>(reader: R) -> Result<HashGraph<i64>, LoadError> {
    let mut graph = HashGraph::new();
    graph.load(reader, ";")?;
    Ok(graph)
}

/// The alphabetically first node, the start used when none is given.
pub fn default_start(graph: &HashGraph<i64>) -> Option<String> {
    graph.all_nodes().min().cloned()
}

fn node_order(
    a: &Entry<String, PathInfo<i64>>,
    b: &Entry<String, PathInfo<i64>>,
) -> bool {
    a.key < b.key
}

/// Runs Dijkstra from `start` and renders the graph, the cost summary, and
/// the recovered path for every node, alphabetically.
pub fn report(graph: &HashGraph<i64>, start: &str) -> String {
    let answer = extended_dijkstra(graph, start);
    let mut ordered = Vec::with_capacity(answer.len());
    let mut by_node =
        HeapQueue::from_elements_by(answer.iter().cloned(), node_order);
    while let Ok(entry) = by_node.dequeue() {
        ordered.push(entry.value);
    }

    let mut report = format!("{graph}\n\nShortest paths from {start}:\n");
    for info in &ordered {
        let _ = writeln!(report, "  {info}");
    }
    let _ = writeln!(report);
    for info in &ordered {
        match info.cost {
            Some(cost) => {
                let path = recover_path(&answer, &info.node);
                let _ = writeln!(
                    report,
                    "To {}: cost is {cost}; path is {path}",
                    info.node
                );
            }
            None => {
                let _ = writeln!(report, "To {}: no path exists", info.node);
            }
        }
    }
    report
}
