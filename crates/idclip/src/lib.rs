// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Containers whose hash, order, and priority functions are values, with
//! detached fail-fast cursors.
//!
//! # Motivation
//!
//! The standard collections bind their key behavior at the type level: a
//! `std::collections::HashMap` hashes through the `Hash` impl of its key
//! type, a `BinaryHeap` orders through `Ord`. One type, one behavior. This
//! crate makes those decisions constructor data instead. A hash function, a
//! less-than function, or a priority function is passed in (or declared once
//! on a key type through a source trait), and two containers over the same
//! element type can disagree about it:
//!
//! ```
//! use idclip::{hashers, HashMap};
//!
//! fn by_length(k: &String) -> i64 {
//!     k.len() as i64
//! }
//!
//! let mut by_content = HashMap::hashed_by(hashers::str_hash);
//! let mut by_len: HashMap<String, u32> = HashMap::hashed_by(by_length);
//!
//! by_content.put("carol".to_owned(), 1);
//! by_len.put("carol".to_owned(), 1);
//! assert_eq!(by_content, by_len); // equality is content-only
//! ```
//!
//! A container never falls back to a default silently: constructing one
//! whose element type declares no strategy and whose constructor supplies
//! none fails with [`errors::StrategyError`], as does supplying a function
//! different from the declared one.
//!
//! # The containers
//!
//! - [`HashMap`] / [`HashSet`]: chained-bin hash tables that double their
//!   bin array past a load threshold.
//! - [`BstMap`]: an unbalanced binary search tree ordered by an injected
//!   less-than function.
//! - [`HeapQueue`]: an array-backed binary heap ordered by an injected
//!   priority function.
//! - [`LinkedQueue`] / [`LinkedSet`] / [`LinkedPriorityQueue`]: singly
//!   linked containers; the queue is FIFO, the set iterates in insertion
//!   order, the priority queue keeps its chain sorted.
//! - [`HashGraph`]: a directed weighted graph composed from the hash
//!   containers, with [`graph::extended_dijkstra`] on top.
//!
//! # Cursors
//!
//! Every container mints cursors that borrow nothing; each cursor operation
//! takes the container as an argument and fails with a
//! [`errors::CursorError`] instead of misbehaving when the container was
//! mutated behind it, when it is read mid-removal or past the end, or when
//! it is handed a container that did not mint it. Removal through a cursor
//! is sanctioned: the cursor coasts over the gap and keeps going.
//!
//! ```
//! use idclip::{hashers, HashSet};
//!
//! let mut level = HashSet::hashed_by(hashers::int_hash);
//! level.insert_all([1, 2, 3, 4, 5, 6]);
//!
//! let mut cur = level.cursor();
//! while !cur.is_exhausted() {
//!     if cur.get(&level)? % 2 == 0 {
//!         cur.remove(&mut level)?;
//!     }
//!     cur.step(&level)?;
//! }
//! assert_eq!(level.len(), 3);
//! # Ok::<(), idclip::errors::CursorError>(())
//! ```
//!
//! The hash containers' cursors walk the live table. [`BstMap`] and
//! [`HeapQueue`] cursors instead snapshot their traversal when minted, so
//! reading one borrows the cursor; the staleness contract against the live
//! container is the same.

#![warn(missing_docs)]

pub mod bst_map;
mod entry;
pub mod errors;
pub mod graph;
pub mod hash_map;
pub mod hash_set;
pub mod hashers;
pub mod heap_queue;
#[doc(hidden)]
pub mod internal;
pub mod linked_priority_queue;
pub mod linked_queue;
pub mod linked_set;
mod strategy;
mod support;

pub use bst_map::BstMap;
pub use entry::Entry;
pub use graph::HashGraph;
pub use hash_map::HashMap;
pub use hash_set::HashSet;
pub use heap_queue::HeapQueue;
pub use linked_priority_queue::LinkedPriorityQueue;
pub use linked_queue::LinkedQueue;
pub use linked_set::LinkedSet;
pub use strategy::{
    HashFn, HashSource, HigherPriority, LessThan, OrderSource,
    PrioritySource, Unspecified,
};
pub use support::chain_table::TableConfig;
