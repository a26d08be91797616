// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    graph::HashGraph,
    hash_map::HashMap,
    hashers,
    heap_queue::HeapQueue,
    linked_queue::LinkedQueue,
};
use core::{fmt, ops::Add};

/// Where one node stands in a shortest-path computation: the cheapest known
/// cost to reach it from the start node, and the node it is reached from.
///
/// A `None` cost is the unreachable sentinel. A reachable node with a `None`
/// `from` is the start node itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathInfo<W> {
    /// The node this entry describes.
    pub node: String,
    /// Total cost of the cheapest path from the start, or `None` when no
    /// path exists.
    pub cost: Option<W>,
    /// The node before this one on that cheapest path.
    pub from: Option<String>,
}

impl<W> PathInfo<W> {
    /// An entry for a node no path reaches.
    pub fn unreachable(node: impl Into<String>) -> Self {
        PathInfo { node: node.into(), cost: None, from: None }
    }
}

impl<W: fmt::Display> fmt::Display for PathInfo<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "info[{}", self.node)?;
        match &self.cost {
            Some(cost) => write!(f, ",cost={cost}")?,
            None => f.write_str(",unreachable")?,
        }
        if let Some(from) = &self.from {
            write!(f, ",from={from}")?;
        }
        f.write_str("]")
    }
}

/// Priority function over [`PathInfo`]: a cheaper cost outranks a costlier
/// one, and any cost outranks the unreachable sentinel.
pub fn by_cost<W: Ord>(a: &PathInfo<W>, b: &PathInfo<W>) -> bool {
    match (&a.cost, &b.cost) {
        (Some(x), Some(y)) => x < y,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

/// Runs Dijkstra's algorithm from `start` and returns a [`PathInfo`] for
/// every node in the graph.
///
/// Settled nodes carry their cheapest cost (`W::default()` for `start`
/// itself) and the back-pointer that [`recover_path`] follows. Nodes the
/// start cannot reach, including every node when `start` is not in the
/// graph, carry the `None` sentinel.
///
/// The pending queue holds one entry per cost improvement rather than one
/// per node; entries for already-settled nodes are skipped when dequeued.
///
/// ```
/// use idclip::graph::extended_dijkstra;
/// use idclip::HashGraph;
///
/// let mut g = HashGraph::new();
/// g.add_edge("a", "b", 1);
/// g.add_edge("b", "c", 1);
/// g.add_edge("a", "c", 5);
/// g.add_node("d");
///
/// let answer = extended_dijkstra(&g, "a");
/// assert_eq!(answer.get(&"c".to_owned()).unwrap().cost, Some(2));
/// assert_eq!(answer.get(&"d".to_owned()).unwrap().cost, None);
/// ```
pub fn extended_dijkstra<W>(
    graph: &HashGraph<W>,
    start: &str,
) -> HashMap<String, PathInfo<W>>
where
    W: Copy + Ord + Add<Output = W> + Default,
{
    let mut answered = HashMap::hashed_by(hashers::str_hash);
    let mut best: HashMap<String, PathInfo<W>> =
        HashMap::hashed_by(hashers::str_hash);
    let mut pending = HeapQueue::prioritized_by(by_cost::<W>);

    if graph.has_node(start) {
        let seed = PathInfo {
            node: start.to_owned(),
            cost: Some(W::default()),
            from: None,
        };
        best.put(start.to_owned(), seed.clone());
        pending.enqueue(seed);
    }

    while let Ok(info) = pending.dequeue() {
        if answered.contains_key(&info.node) {
            // A later improvement already settled this node.
            continue;
        }
        let node = info.node.clone();
        let cost = info.cost.expect("only reached nodes are enqueued");
        answered.put(node.clone(), info);

        let outs =
            graph.out_nodes(&node).expect("settled nodes come from the graph");
        for next in outs.iter() {
            if answered.contains_key(next) {
                continue;
            }
            let weight = *graph
                .edge_value(&node, next)
                .expect("out neighbors always have an edge");
            let through = cost + weight;
            let improved = match best.get(next).and_then(|known| known.cost) {
                Some(existing) => through < existing,
                None => true,
            };
            if improved {
                let info = PathInfo {
                    node: next.clone(),
                    cost: Some(through),
                    from: Some(node.clone()),
                };
                best.put(next.clone(), info.clone());
                pending.enqueue(info);
            }
        }
    }

    for name in graph.all_nodes() {
        if !answered.contains_key(name) {
            answered.put(name.clone(), PathInfo::unreachable(name.clone()));
        }
    }
    answered
}

/// Replays the path that [`extended_dijkstra`]'s answer map records for
/// `end`, as a queue from the start node to `end`.
///
/// Returns an empty queue when `end` is not in the answer map or carries
/// the unreachable sentinel. The answer map's back-pointers are trusted to
/// terminate, which any map built by `extended_dijkstra` does.
pub fn recover_path<W>(
    answer: &HashMap<String, PathInfo<W>>,
    end: &str,
) -> LinkedQueue<String> {
    let mut path = LinkedQueue::new();
    let Some(mut info) = answer.get(&end.to_owned()) else {
        return path;
    };
    if info.cost.is_none() {
        return path;
    }
    let mut trail = vec![info.node.clone()];
    while let Some(from) = &info.from {
        trail.push(from.clone());
        match answer.get(from) {
            Some(previous) => info = previous,
            None => break,
        }
    }
    for node in trail.into_iter().rev() {
        path.enqueue(node);
    }
    path
}
