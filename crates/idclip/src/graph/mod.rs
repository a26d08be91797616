// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A directed weighted graph composed from [`HashMap`](crate::HashMap) and
//! [`HashSet`](crate::HashSet), plus Dijkstra's shortest-path algorithm over
//! it.
//!
//! Nodes are `String` names; each edge carries one weight of type `W`. The
//! graph keeps a name-to-adjacency map and an edge-to-weight map and keeps
//! the two consistent through every command. [`extended_dijkstra`] computes
//! the full shortest-cost map from a start node and [`recover_path`] replays
//! one shortest path out of it.

mod dijkstra;
mod imp;

pub use dijkstra::{by_cost, extended_dijkstra, recover_path, PathInfo};
pub use imp::HashGraph;
