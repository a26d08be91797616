// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The chained-hash engine shared by `HashMap` and `HashSet`.
//!
//! Storage is a bin array of chain heads over a slotmap arena; chains are
//! singly linked through `next` keys, with `None` terminating a chain.
//! Growth doubles the bin count and relinks the existing nodes in place;
//! the arena entries themselves survive every rehash, which is what makes
//! slotmap keys usable as stable cursor positions.

use crate::{
    errors::CursorError,
    internal::ValidationError,
    strategy::HashFn,
    support::origin::OriginId,
};
use core::fmt;
use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Stable handle for a chain node.
    pub(crate) struct NodeKey;
}

/// Projects the lookup key out of a stored element.
///
/// `HashMap` stores `Entry<K, V>` and projects the key field; `HashSet`
/// stores the element itself.
pub(crate) trait Keyed {
    type Key: Eq;

    fn key(&self) -> &Self::Key;
}

#[derive(Clone, Debug)]
pub(crate) struct ChainNode<E> {
    pub(crate) element: E,
    pub(crate) next: Option<NodeKey>,
}

/// Bin-array configuration for [`HashMap`](crate::HashMap) and
/// [`HashSet`](crate::HashSet).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TableConfig {
    /// Number of bins the table starts with. Clamped to at least 1.
    pub initial_bins: usize,
    /// Load factor (elements per bin) above which the bin array doubles.
    /// Non-positive values fall back to the default of 1.0.
    pub load_threshold: f64,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig { initial_bins: 1, load_threshold: 1.0 }
    }
}

/// Reduces a hash to a bin index.
pub(crate) fn compress_to(hash: i64, bins: usize) -> usize {
    (hash.unsigned_abs() % bins as u64) as usize
}

pub(crate) struct ChainTable<E: Keyed> {
    bins: Vec<Option<NodeKey>>,
    nodes: SlotMap<NodeKey, ChainNode<E>>,
    hash: HashFn<E::Key>,
    load_threshold: f64,
    mod_count: u64,
    origin: OriginId,
}

impl<E: Keyed> ChainTable<E> {
    pub(crate) fn with_config(hash: HashFn<E::Key>, config: TableConfig) -> Self {
        let bins = config.initial_bins.max(1);
        let load_threshold = if config.load_threshold > 0.0 {
            config.load_threshold
        } else {
            1.0
        };
        ChainTable {
            bins: vec![None; bins],
            nodes: SlotMap::with_key(),
            hash,
            load_threshold,
            mod_count: 0,
            origin: OriginId::mint(),
        }
    }

    /// An empty table with the same hash function, bin count and threshold,
    /// under a fresh identity.
    pub(crate) fn fresh_like(&self) -> Self {
        ChainTable {
            bins: vec![None; self.bins.len()],
            nodes: SlotMap::with_key(),
            hash: self.hash,
            load_threshold: self.load_threshold,
            mod_count: 0,
            origin: OriginId::mint(),
        }
    }

    /// Rebuilds under a different hash function. Every element is
    /// re-inserted individually; nothing is bulk-copied.
    pub(crate) fn rebuilt_with(&self, hash: HashFn<E::Key>) -> Self
    where
        E: Clone,
    {
        let mut next = ChainTable {
            bins: vec![None; self.bins.len()],
            nodes: SlotMap::with_key(),
            hash,
            load_threshold: self.load_threshold,
            mod_count: 0,
            origin: OriginId::mint(),
        };
        for node in self.nodes.values() {
            next.insert_new(node.element.clone());
        }
        next
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn bins_len(&self) -> usize {
        self.bins.len()
    }

    pub(crate) fn load_threshold(&self) -> f64 {
        self.load_threshold
    }

    pub(crate) fn hash_fn(&self) -> HashFn<E::Key> {
        self.hash
    }

    pub(crate) fn mod_count(&self) -> u64 {
        self.mod_count
    }

    pub(crate) fn origin(&self) -> OriginId {
        self.origin
    }

    /// Records a structural mutation (or an operation specified to count as
    /// one, such as an overwriting `put`).
    pub(crate) fn touch(&mut self) {
        self.mod_count = self.mod_count.wrapping_add(1);
    }

    fn compress(&self, key: &E::Key) -> usize {
        compress_to(self.hash.apply(key), self.bins.len())
    }

    pub(crate) fn find(&self, key: &E::Key) -> Option<NodeKey> {
        let mut cursor = self.bins[self.compress(key)];
        while let Some(nk) = cursor {
            let node = &self.nodes[nk];
            if node.element.key() == key {
                return Some(nk);
            }
            cursor = node.next;
        }
        None
    }

    pub(crate) fn element(&self, nk: NodeKey) -> &E {
        &self.nodes[nk].element
    }

    pub(crate) fn element_mut(&mut self, nk: NodeKey) -> &mut E {
        &mut self.nodes[nk].element
    }

    /// Inserts an element whose key is known to be absent.
    pub(crate) fn insert_new(&mut self, element: E) -> NodeKey {
        self.grow_to_fit(self.nodes.len() + 1);
        let bin = self.compress(element.key());
        let head = self.bins[bin];
        let nk = self.nodes.insert(ChainNode { element, next: head });
        self.bins[bin] = Some(nk);
        nk
    }

    /// Doubles the bin array until `new_len` elements fit under the load
    /// threshold, then relinks every node under the recomputed compression.
    fn grow_to_fit(&mut self, new_len: usize) {
        let mut bins = self.bins.len();
        while new_len as f64 / bins as f64 > self.load_threshold {
            bins *= 2;
        }
        if bins == self.bins.len() {
            return;
        }
        self.bins = vec![None; bins];
        let keys: Vec<NodeKey> = self.nodes.keys().collect();
        for nk in keys {
            let bin = self.compress(self.nodes[nk].element.key());
            let head = self.bins[bin];
            let node = &mut self.nodes[nk];
            node.next = head;
            self.bins[bin] = Some(nk);
        }
    }

    /// Unlinks and removes the node holding `key`.
    pub(crate) fn remove_key(&mut self, key: &E::Key) -> Option<E> {
        let bin = self.compress(key);
        let mut prev: Option<NodeKey> = None;
        let mut cursor = self.bins[bin];
        while let Some(nk) = cursor {
            if self.nodes[nk].element.key() == key {
                self.unlink(bin, prev, nk);
                let node = self
                    .nodes
                    .remove(nk)
                    .expect("node was just found on its chain");
                return Some(node.element);
            }
            prev = Some(nk);
            cursor = self.nodes[nk].next;
        }
        None
    }

    /// Unlinks and removes a specific node. `bin` must be the bin the node
    /// is chained under.
    pub(crate) fn remove_node(&mut self, bin: usize, target: NodeKey) -> E {
        let mut prev: Option<NodeKey> = None;
        let mut cursor = self.bins[bin];
        while let Some(nk) = cursor {
            if nk == target {
                self.unlink(bin, prev, nk);
                let node = self
                    .nodes
                    .remove(nk)
                    .expect("node was just found on its chain");
                return node.element;
            }
            prev = Some(nk);
            cursor = self.nodes[nk].next;
        }
        panic!("remove_node: node is not on its bin's chain");
    }

    fn unlink(&mut self, bin: usize, prev: Option<NodeKey>, target: NodeKey) {
        let next = self.nodes[target].next;
        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.bins[bin] = next,
        }
    }

    /// Drops every node but keeps the bin array at its current length.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.bins.fill(None);
    }

    /// Position of the first element: the head of the first non-empty bin.
    pub(crate) fn first_position(&self) -> Option<(usize, NodeKey)> {
        self.chain_from(0)
    }

    /// Head of the first non-empty bin at or after `bin`.
    fn chain_from(&self, bin: usize) -> Option<(usize, NodeKey)> {
        (bin..self.bins.len()).find_map(|b| self.bins[b].map(|nk| (b, nk)))
    }

    /// Position following `(bin, nk)`: the next node on the chain, else the
    /// head of the next non-empty bin.
    pub(crate) fn position_after(
        &self,
        bin: usize,
        nk: NodeKey,
    ) -> Option<(usize, NodeKey)> {
        match self.nodes[nk].next {
            Some(next) => Some((bin, next)),
            None => self.chain_from(bin + 1),
        }
    }

    pub(crate) fn raw_iter(&self) -> RawIter<'_, E> {
        RawIter {
            table: self,
            position: self.first_position(),
            remaining: self.len(),
        }
    }

    pub(crate) fn nodes_values_mut(
        &mut self,
    ) -> slotmap::basic::ValuesMut<'_, NodeKey, ChainNode<E>> {
        self.nodes.values_mut()
    }

    pub(crate) fn into_nodes(
        self,
    ) -> slotmap::basic::IntoIter<NodeKey, ChainNode<E>> {
        self.nodes.into_iter()
    }

    /// The internals dump backing the containers' `Debug` impls.
    pub(crate) fn fmt_debug(
        &self,
        name: &str,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result
    where
        E: fmt::Debug,
    {
        write!(f, "{name}{{bins=[")?;
        for bin in 0..self.bins.len() {
            if bin > 0 {
                f.write_str(", ")?;
            }
            f.write_str("[")?;
            let mut cursor = self.bins[bin];
            let mut first = true;
            while let Some(nk) = cursor {
                if !first {
                    f.write_str(" -> ")?;
                }
                write!(f, "{:?}", self.nodes[nk].element)?;
                first = false;
                cursor = self.nodes[nk].next;
            }
            f.write_str("]")?;
        }
        write!(f, "], len={}, mod_count={}}}", self.len(), self.mod_count)
    }

    /// Checks the structural invariants; test hook.
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        let err = |msg: String| ValidationError::new("chain table", msg);
        let mut reachable = 0usize;
        for (bin, head) in self.bins.iter().enumerate() {
            let mut cursor = *head;
            while let Some(nk) = cursor {
                let node = self.nodes.get(nk).ok_or_else(|| {
                    err(format!("bin {bin}: chain references a freed node"))
                })?;
                let home = compress_to(
                    self.hash.apply(node.element.key()),
                    self.bins.len(),
                );
                if home != bin {
                    return Err(err(format!(
                        "bin {bin}: element compresses to bin {home}"
                    )));
                }
                reachable += 1;
                if reachable > self.nodes.len() {
                    return Err(err("chain cycle detected".to_owned()));
                }
                cursor = node.next;
            }
        }
        if reachable != self.nodes.len() {
            return Err(err(format!(
                "{} nodes reachable through chains, {} allocated",
                reachable,
                self.nodes.len()
            )));
        }
        let keys: Vec<&E::Key> =
            self.nodes.values().map(|n| n.element.key()).collect();
        for (i, a) in keys.iter().enumerate() {
            if keys[i + 1..].iter().any(|b| a == b) {
                return Err(err("duplicate keys".to_owned()));
            }
        }
        if self.nodes.len() as f64 / self.bins.len() as f64
            > self.load_threshold
        {
            return Err(err(format!(
                "load invariant violated: {} elements in {} bins exceeds \
                 threshold {}",
                self.nodes.len(),
                self.bins.len(),
                self.load_threshold
            )));
        }
        Ok(())
    }
}

impl<E: Keyed + Clone> Clone for ChainTable<E> {
    fn clone(&self) -> Self {
        ChainTable {
            bins: self.bins.clone(),
            // slotmap clones preserve keys, so the copied bins and chain
            // links remain valid in the copied arena.
            nodes: self.nodes.clone(),
            hash: self.hash,
            load_threshold: self.load_threshold,
            mod_count: 0,
            origin: OriginId::mint(),
        }
    }
}

/// Borrowing iterator over a chain table, in bin-then-chain order.
pub(crate) struct RawIter<'a, E: Keyed> {
    table: &'a ChainTable<E>,
    position: Option<(usize, NodeKey)>,
    remaining: usize,
}

impl<E: Keyed> Clone for RawIter<'_, E> {
    fn clone(&self) -> Self {
        RawIter {
            table: self.table,
            position: self.position,
            remaining: self.remaining,
        }
    }
}

impl<'a, E: Keyed> Iterator for RawIter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<&'a E> {
        let (bin, nk) = self.position?;
        self.position = self.table.position_after(bin, nk);
        self.remaining -= 1;
        Some(self.table.element(nk))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<E: Keyed> ExactSizeIterator for RawIter<'_, E> {}
impl<E: Keyed> core::iter::FusedIterator for RawIter<'_, E> {}

/// Fail-fast cursor over a chain table.
///
/// Detached: holds no borrow of the table. Every operation takes the table
/// as an argument and revalidates, in order: identity, then staleness, then
/// position.
pub(crate) struct RawCursor {
    container: &'static str,
    origin: OriginId,
    expected_mod_count: u64,
    position: Option<(usize, NodeKey)>,
    can_erase: bool,
}

impl RawCursor {
    pub(crate) fn at_begin<E: Keyed>(
        table: &ChainTable<E>,
        container: &'static str,
    ) -> Self {
        RawCursor {
            container,
            origin: table.origin(),
            expected_mod_count: table.mod_count(),
            position: table.first_position(),
            can_erase: true,
        }
    }

    pub(crate) fn at_end<E: Keyed>(
        table: &ChainTable<E>,
        container: &'static str,
    ) -> Self {
        RawCursor {
            container,
            origin: table.origin(),
            expected_mod_count: table.mod_count(),
            position: None,
            can_erase: true,
        }
    }

    fn check<E: Keyed>(
        &self,
        table: &ChainTable<E>,
        operation: &'static str,
    ) -> Result<(), CursorError> {
        if self.origin != table.origin() {
            return Err(CursorError::ForeignContainer {
                container: self.container,
                operation,
            });
        }
        if self.expected_mod_count != table.mod_count() {
            return Err(CursorError::Stale {
                container: self.container,
                operation,
                expected: self.expected_mod_count,
                actual: table.mod_count(),
            });
        }
        Ok(())
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.position.is_none()
    }

    /// Advances, or re-arms after a removal without moving: after `remove`,
    /// the cursor already points at the element past the gap, and the first
    /// `step` only flips `can_erase` back on.
    pub(crate) fn step<E: Keyed>(
        &mut self,
        table: &ChainTable<E>,
    ) -> Result<(), CursorError> {
        self.check(table, "step")?;
        let Some((bin, nk)) = self.position else {
            // Exhausted cursors stay exhausted; stepping is a no-op.
            return Ok(());
        };
        if self.can_erase {
            self.position = table.position_after(bin, nk);
        } else {
            self.can_erase = true;
        }
        Ok(())
    }

    pub(crate) fn get<'a, E: Keyed>(
        &self,
        table: &'a ChainTable<E>,
        operation: &'static str,
    ) -> Result<&'a E, CursorError> {
        self.check(table, operation)?;
        if !self.can_erase {
            return Err(CursorError::Consumed {
                container: self.container,
                operation,
            });
        }
        match self.position {
            Some((_, nk)) => Ok(table.element(nk)),
            None => Err(CursorError::Exhausted {
                container: self.container,
                operation,
            }),
        }
    }

    /// Removes the current element. The cursor slides to the following
    /// element first, then the node is unlinked; until the next `step`, the
    /// cursor cannot be read or asked to remove again.
    pub(crate) fn remove<E: Keyed>(
        &mut self,
        table: &mut ChainTable<E>,
    ) -> Result<E, CursorError> {
        self.check(table, "remove")?;
        if !self.can_erase {
            return Err(CursorError::Consumed {
                container: self.container,
                operation: "remove",
            });
        }
        let Some((bin, nk)) = self.position else {
            return Err(CursorError::Exhausted {
                container: self.container,
                operation: "remove",
            });
        };
        self.position = table.position_after(bin, nk);
        self.can_erase = false;
        let element = table.remove_node(bin, nk);
        table.touch();
        self.expected_mod_count = table.mod_count();
        Ok(element)
    }

    /// Whether two cursors sit on the same element of `table`.
    pub(crate) fn same_position<E: Keyed>(
        &self,
        other: &Self,
        table: &ChainTable<E>,
    ) -> Result<bool, CursorError> {
        if self.origin != table.origin() || other.origin != table.origin() {
            return Err(CursorError::ForeignContainer {
                container: self.container,
                operation: "same_position",
            });
        }
        self.check(table, "same_position")?;
        Ok(match (self.position, other.position) {
            (Some((_, a)), Some((_, b))) => a == b,
            (None, None) => true,
            _ => false,
        })
    }
}
