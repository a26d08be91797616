// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    errors::LoadError,
    hash_map::HashMap,
    hash_set::HashSet,
    hashers,
    internal::ValidationError,
};
use std::{
    fmt,
    io::{self, BufRead, Write},
    str::FromStr,
};

pub(crate) const NAME: &str = "HashGraph";

/// Adjacency bookkeeping for one node: who it points at, who points at it.
///
/// Edge weights live only in the graph's edge map; these sets are the
/// neighbor index that makes degree queries and traversal cheap.
#[derive(Clone, Debug)]
struct Adjacency {
    out_nodes: HashSet<String>,
    in_nodes: HashSet<String>,
}

impl Adjacency {
    fn new() -> Self {
        Adjacency {
            out_nodes: HashSet::hashed_by(hashers::str_hash),
            in_nodes: HashSet::hashed_by(hashers::str_hash),
        }
    }
}

/// A directed graph with `String` node names and one weight of type `W` per
/// edge.
///
/// Built from the crate's own containers: a node map from name to in/out
/// neighbor sets, and an edge map from `(from, to)` pairs to weights. Both
/// use the stock string hashers, so construction never fails. Commands keep
/// the two maps consistent; `add_edge` creates missing endpoints and
/// `remove_node` drops every incident edge.
///
/// Lookups take `&str` and build an owned `String` key internally; the
/// backing maps hash whole keys only.
///
/// ```
/// use idclip::HashGraph;
///
/// let mut g = HashGraph::new();
/// g.add_edge("a", "b", 3);
/// g.add_edge("a", "c", 7);
/// assert_eq!(g.out_degree("a"), Some(2));
/// assert_eq!(g.edge_value("a", "b"), Some(&3));
/// ```
#[derive(Clone, Debug)]
pub struct HashGraph<W> {
    nodes: HashMap<String, Adjacency>,
    edges: HashMap<(String, String), W>,
}

impl<W> HashGraph<W> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        HashGraph {
            nodes: HashMap::hashed_by(hashers::str_hash),
            edges: HashMap::hashed_by(hashers::pair_hash),
        }
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no nodes (and therefore no edges).
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` if `name` is a node.
    pub fn has_node(&self, name: &str) -> bool {
        self.nodes.contains_key(&name.to_owned())
    }

    /// Returns `true` if the edge `from -> to` is present.
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.edges.contains_key(&(from.to_owned(), to.to_owned()))
    }

    /// Returns the weight of the edge `from -> to`, if present.
    pub fn edge_value(&self, from: &str, to: &str) -> Option<&W> {
        self.edges.get(&(from.to_owned(), to.to_owned()))
    }

    /// Returns how many edges point at `name`, or `None` if it is not a
    /// node.
    pub fn in_degree(&self, name: &str) -> Option<usize> {
        self.adjacency(name).map(|adj| adj.in_nodes.len())
    }

    /// Returns how many edges leave `name`, or `None` if it is not a node.
    pub fn out_degree(&self, name: &str) -> Option<usize> {
        self.adjacency(name).map(|adj| adj.out_nodes.len())
    }

    /// Returns the in-degree plus the out-degree, or `None` if `name` is
    /// not a node. A self-loop counts twice.
    pub fn degree(&self, name: &str) -> Option<usize> {
        self.adjacency(name)
            .map(|adj| adj.in_nodes.len() + adj.out_nodes.len())
    }

    /// Iterates over all node names, in no particular order.
    pub fn all_nodes(&self) -> impl Iterator<Item = &String> + '_ {
        self.nodes.iter().map(|entry| &entry.key)
    }

    /// Returns the set of nodes that `name` has an edge to, or `None` if
    /// `name` is not a node.
    pub fn out_nodes(&self, name: &str) -> Option<&HashSet<String>> {
        self.adjacency(name).map(|adj| &adj.out_nodes)
    }

    /// Returns the set of nodes with an edge to `name`, or `None` if `name`
    /// is not a node.
    pub fn in_nodes(&self, name: &str) -> Option<&HashSet<String>> {
        self.adjacency(name).map(|adj| &adj.in_nodes)
    }

    /// Adds a node with no edges. Returns `false` (and changes nothing) if
    /// it was already present.
    pub fn add_node(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.nodes.contains_key(&name) {
            return false;
        }
        self.nodes.put(name, Adjacency::new());
        true
    }

    /// Adds the edge `from -> to` with `weight`, creating either endpoint
    /// if it is not yet a node. Returns the previous weight when the edge
    /// already existed.
    pub fn add_edge(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        weight: W,
    ) -> Option<W> {
        let from = from.into();
        let to = to.into();
        self.add_node(from.clone());
        self.add_node(to.clone());
        self.nodes
            .get_mut(&from)
            .expect("edge endpoints were just added")
            .out_nodes
            .insert(to.clone());
        self.nodes
            .get_mut(&to)
            .expect("edge endpoints were just added")
            .in_nodes
            .insert(from.clone());
        self.edges.put((from, to), weight)
    }

    /// Removes a node and every edge into or out of it. Returns `false`
    /// (and changes nothing) if `name` is not a node.
    pub fn remove_node(&mut self, name: &str) -> bool {
        let name = name.to_owned();
        let Ok(adj) = self.nodes.erase(name.clone()) else {
            return false;
        };
        for to in adj.out_nodes.iter() {
            let _ = self.edges.erase((name.clone(), to.clone()));
            // A self-loop's other endpoint is the node just erased.
            if let Some(neighbor) = self.nodes.get_mut(to) {
                neighbor.in_nodes.erase(&name);
            }
        }
        for from in adj.in_nodes.iter() {
            let _ = self.edges.erase((from.clone(), name.clone()));
            if let Some(neighbor) = self.nodes.get_mut(from) {
                neighbor.out_nodes.erase(&name);
            }
        }
        true
    }

    /// Removes the edge `from -> to` and returns its weight, or `None` if
    /// it was not present. The endpoints stay in the graph.
    pub fn remove_edge(&mut self, from: &str, to: &str) -> Option<W> {
        let from = from.to_owned();
        let to = to.to_owned();
        let Ok(weight) = self.edges.erase((from.clone(), to.clone())) else {
            return None;
        };
        self.nodes
            .get_mut(&from)
            .expect("edge endpoints are always nodes")
            .out_nodes
            .erase(&to);
        self.nodes
            .get_mut(&to)
            .expect("edge endpoints are always nodes")
            .in_nodes
            .erase(&from);
        Some(weight)
    }

    /// Removes every node and edge.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    /// Loads nodes and edges from a text form and adds them to the current
    /// content. Each non-blank line is either a bare node name or
    /// `from<sep>to<sep>weight`; edges create their endpoints the way
    /// [`add_edge`](Self::add_edge) does. Returns the number of lines
    /// applied.
    ///
    /// A line with any other number of fields, or a weight that fails to
    /// parse, aborts with [`LoadError::Malformed`]; lines before it stay
    /// applied.
    pub fn load<R: BufRead>(
        &mut self,
        reader: R,
        sep: &str,
    ) -> Result<usize, LoadError>
    where
        W: FromStr,
    {
        let mut applied = 0;
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let fields: Vec<&str> = trimmed.split(sep).collect();
            match fields.as_slice() {
                [node] => {
                    self.add_node(*node);
                }
                [from, to, raw] => {
                    let Ok(weight) = raw.parse::<W>() else {
                        return Err(LoadError::Malformed {
                            line: index + 1,
                            content: line.clone(),
                        });
                    };
                    self.add_edge(*from, *to, weight);
                }
                _ => {
                    return Err(LoadError::Malformed {
                        line: index + 1,
                        content: line.clone(),
                    });
                }
            }
            applied += 1;
        }
        Ok(applied)
    }

    /// Writes the graph in the text form [`load`](Self::load) reads: every
    /// node name on its own line (sorted), then every edge as
    /// `from<sep>to<sep>weight` (sorted by endpoints).
    pub fn store<Out: Write>(&self, out: &mut Out, sep: &str) -> io::Result<()>
    where
        W: fmt::Display,
    {
        for name in self.sorted_nodes() {
            writeln!(out, "{name}")?;
        }
        for (key, weight) in self.sorted_edges() {
            let (from, to) = key;
            writeln!(out, "{from}{sep}{to}{sep}{weight}")?;
        }
        Ok(())
    }

    /// Checks that the node map and the edge map describe the same graph.
    #[doc(hidden)]
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.nodes.validate().map_err(|err| err.relabel(NAME))?;
        self.edges.validate().map_err(|err| err.relabel(NAME))?;
        for entry in self.edges.iter() {
            let (from, to) = &entry.key;
            let origin = self.adjacency(from).ok_or_else(|| {
                ValidationError::new(
                    NAME,
                    format!("edge ({from}, {to}) has no origin node"),
                )
            })?;
            if !origin.out_nodes.contains(to) {
                return Err(ValidationError::new(
                    NAME,
                    format!("edge ({from}, {to}) missing from {from}'s out set"),
                ));
            }
            let target = self.adjacency(to).ok_or_else(|| {
                ValidationError::new(
                    NAME,
                    format!("edge ({from}, {to}) has no destination node"),
                )
            })?;
            if !target.in_nodes.contains(from) {
                return Err(ValidationError::new(
                    NAME,
                    format!("edge ({from}, {to}) missing from {to}'s in set"),
                ));
            }
        }
        for entry in self.nodes.iter() {
            let name = &entry.key;
            for to in entry.value.out_nodes.iter() {
                if !self.has_edge(name, to) {
                    return Err(ValidationError::new(
                        NAME,
                        format!("out neighbor {to} of {name} has no edge"),
                    ));
                }
            }
            for from in entry.value.in_nodes.iter() {
                if !self.has_edge(from, name) {
                    return Err(ValidationError::new(
                        NAME,
                        format!("in neighbor {from} of {name} has no edge"),
                    ));
                }
            }
        }
        Ok(())
    }

    fn adjacency(&self, name: &str) -> Option<&Adjacency> {
        self.nodes.get(&name.to_owned())
    }

    fn sorted_nodes(&self) -> Vec<&String> {
        let mut names: Vec<&String> = self.all_nodes().collect();
        names.sort();
        names
    }

    fn sorted_edges(&self) -> Vec<(&(String, String), &W)> {
        let mut edges: Vec<_> = self
            .edges
            .iter()
            .map(|entry| (&entry.key, &entry.value))
            .collect();
        edges.sort_by(|a, b| a.0.cmp(b.0));
        edges
    }
}

impl<W> Default for HashGraph<W> {
    fn default() -> Self {
        HashGraph::new()
    }
}

/// Same node names and same edge weights; adjacency sets are derived data
/// and do not need their own comparison.
impl<W: PartialEq> PartialEq for HashGraph<W> {
    fn eq(&self, other: &Self) -> bool {
        if self.nodes.len() != other.nodes.len() {
            return false;
        }
        self.all_nodes().all(|name| other.nodes.contains_key(name))
            && self.edges == other.edges
    }
}

impl<W: Eq> Eq for HashGraph<W> {}

/// One line of counts, then one line per node (sorted) with its weighted
/// out- and in-neighbors (sorted).
impl<W: fmt::Display> fmt::Display for HashGraph<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "graph[nodes={}, edges={}]",
            self.node_count(),
            self.edge_count()
        )?;
        for name in self.sorted_nodes() {
            let adj =
                self.adjacency(name).expect("sorted_nodes lists stored nodes");

            let mut outs: Vec<&String> = adj.out_nodes.iter().collect();
            outs.sort();
            write!(f, "\n  {name}: out=[")?;
            for (i, to) in outs.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                let weight = self
                    .edge_value(name, to)
                    .expect("adjacency sets match the edge map");
                write!(f, "{to}({weight})")?;
            }

            let mut ins: Vec<&String> = adj.in_nodes.iter().collect();
            ins.sort();
            f.write_str("] in=[")?;
            for (i, from) in ins.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                let weight = self
                    .edge_value(from, name)
                    .expect("adjacency sets match the edge map");
                write!(f, "{from}({weight})")?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}
