// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reachability over a directed graph of named nodes.

use crate::{sorted_set_display, split};
use idclip::{hashers, Entry, HashMap, HeapQueue, LinkedQueue, LinkedSet};
use std::{
    fmt::Write as _,
    io::{self, BufRead},
};

/// Source nodes to their destination sets.
pub type Graph = HashMap<String, LinkedSet<String>>;

/// Reads an edge list, one `from;to` line per edge. Lines with any other
/// shape are skipped.
pub fn read_graph<R: BufRead>(reader: R) -> io::Result<Graph> {
    let mut graph = Graph::hashed_by(hashers::str_hash);
    for line in reader.lines() {
        let words = split(&line?, ";");
        if let [from, to] = words.as_slice() {
            graph.get_or_default(from.clone()).insert(to.clone());
        }
    }
    Ok(graph)
}

fn source_order(
    a: &Entry<String, LinkedSet<String>>,
    b: &Entry<String, LinkedSet<String>>,
) -> bool {
    a.key < b.key
}

/// Renders the graph, sources alphabetically, destinations sorted.
pub fn describe(graph: &Graph) -> String {
    let mut report =
        String::from("\nGraph: source node -> set[destination nodes]\n");
    let mut by_source =
        HeapQueue::from_elements_by(graph.iter().cloned(), source_order);
    while let Ok(entry) = by_source.dequeue() {
        let _ = writeln!(
            report,
            "  {} -> {}",
            entry.key,
            sorted_set_display(&entry.value)
        );
    }
    report
}

/// Collects every node reachable from `start` by walking edges outward,
/// `start` included.
pub fn reachable(graph: &Graph, start: &str) -> LinkedSet<String> {
    let mut reached = LinkedSet::new();
    let mut explore = LinkedQueue::new();
    explore.enqueue(start.to_owned());
    while let Ok(node) = explore.dequeue() {
        reached.insert(node.clone());
        if let Some(destinations) = graph.get(&node) {
            for destination in destinations.iter() {
                if !reached.contains(destination) {
                    explore.enqueue(destination.clone());
                }
            }
        }
    }
    reached
}

/// Reports the reachable set from each of `starts`, or from every source
/// node when `starts` is empty.
pub fn report(graph: &Graph, starts: &[String]) -> String {
    let chosen: Vec<String> = if starts.is_empty() {
        let mut sources: Vec<String> =
            graph.iter().map(|entry| entry.key.clone()).collect();
        sources.sort_unstable();
        sources
    } else {
        starts.to_vec()
    };
    let mut report = String::from("\n");
    for start in &chosen {
        if graph.contains_key(start) {
            let _ = writeln!(
                report,
                "From {start} the reachable nodes are {}",
                sorted_set_display(&reachable(graph, start))
            );
        } else {
            let _ = writeln!(report, "  {start} is not a source node name in the graph");
        }
    }
    report
}
