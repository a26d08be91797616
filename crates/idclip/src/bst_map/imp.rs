// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    bst_map::{BstCursor, Iter},
    entry::Entry,
    errors::{KeyError, StrategyError},
    internal::ValidationError,
    linked_queue::LinkedQueue,
    strategy::{self, LessThan, OrderSource, Unspecified},
    support::origin::OriginId,
};
use core::{fmt, marker::PhantomData, mem};

pub(crate) const NAME: &str = "BstMap";

#[derive(Clone)]
pub(crate) struct TreeNode<K, V> {
    pub(crate) entry: Entry<K, V>,
    pub(crate) left: Option<Box<TreeNode<K, V>>>,
    pub(crate) right: Option<Box<TreeNode<K, V>>>,
}

/// A map over an unbalanced binary search tree with a caller-supplied
/// ordering and detached, fail-fast cursors.
///
/// Keys need no [`Ord`]: ordering is a plain `fn(&K, &K) -> bool` strict
/// less-than, fixed at construction through the same two channels as
/// [`HashMap`](crate::HashMap)'s hash function (marker type `S`, see
/// [`OrderSource`], or constructor argument). Two keys neither of which
/// orders below the other are the same key.
///
/// The tree is not rebalanced; insertion order dictates its shape, and a
/// sorted insertion sequence degenerates to a chain. [`iter`](Self::iter)
/// walks lazily in key order; [`cursor`](Self::cursor) instead snapshots
/// the tree pre-order, the shape-preserving order in which re-inserting the
/// snapshot would rebuild the same tree.
///
/// # Examples
///
/// ```
/// use idclip::BstMap;
///
/// fn ascending(a: &i64, b: &i64) -> bool {
///     a < b
/// }
///
/// let mut m = BstMap::ordered_by(ascending);
/// m.put(5, "five");
/// m.put(3, "three");
/// m.put(8, "eight");
/// let keys: Vec<i64> = m.iter().map(|entry| entry.key).collect();
/// assert_eq!(keys, [3, 5, 8]);
/// ```
pub struct BstMap<K, V, S = Unspecified> {
    root: Option<Box<TreeNode<K, V>>>,
    len: usize,
    less: LessThan<K>,
    mod_count: u64,
    origin: OriginId,
    _strategy: PhantomData<fn() -> S>,
}

impl<K, V, S: OrderSource<K>> BstMap<K, V, S> {
    /// Creates an empty map from the marker type's ordering function.
    ///
    /// # Errors
    ///
    /// Fails with [`StrategyError`] if `S` supplies no ordering function.
    pub fn new() -> Result<Self, StrategyError> {
        Self::build("new", None)
    }

    /// Creates an empty map, resolving the marker type's ordering function
    /// against the supplied one.
    pub fn with_comparator(
        less: fn(&K, &K) -> bool,
    ) -> Result<Self, StrategyError> {
        Self::build("with_comparator", Some(LessThan(less)))
    }

    /// Creates a map holding `entries`, inserted in order.
    pub fn from_entries<I>(entries: I) -> Result<Self, StrategyError>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = Self::build("from_entries", None)?;
        map.put_all(entries);
        Ok(map)
    }

    fn build(
        constructor: &'static str,
        supplied: Option<LessThan<K>>,
    ) -> Result<Self, StrategyError> {
        let less =
            strategy::resolve(NAME, constructor, S::LESS_THAN, supplied)?;
        Ok(BstMap {
            root: None,
            len: 0,
            less,
            mod_count: 0,
            origin: OriginId::mint(),
            _strategy: PhantomData,
        })
    }
}

impl<K, V> BstMap<K, V, Unspecified> {
    /// Creates an empty map from an ordering function alone; infallible
    /// because the [`Unspecified`] marker has no function to disagree with.
    pub fn ordered_by(less: fn(&K, &K) -> bool) -> Self {
        BstMap {
            root: None,
            len: 0,
            less: LessThan(less),
            mod_count: 0,
            origin: OriginId::mint(),
            _strategy: PhantomData,
        }
    }
}

impl<K, V, S> BstMap<K, V, S> {
    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the resolved ordering function.
    pub fn order_fn(&self) -> LessThan<K> {
        self.less
    }

    /// Returns true if `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.node(key).is_some()
    }

    /// Returns true if any entry holds `value`. Recursive scan of the whole
    /// tree.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        Self::subtree_contains_value(self.root.as_deref(), value)
    }

    /// Returns the value under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.node(key).map(|node| &node.entry.value)
    }

    /// Returns the value under `key`, mutably.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let less = self.less;
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            if less.apply(key, &node.entry.key) {
                current = node.left.as_deref_mut();
            } else if less.apply(&node.entry.key, key) {
                current = node.right.as_deref_mut();
            } else {
                return Some(&mut node.entry.value);
            }
        }
        None
    }

    /// Inserts `value` under `key`, returning the previous value if the key
    /// was already present.
    ///
    /// Descends recursively; a fresh key becomes a leaf at the point the
    /// descent falls off the tree. Every `put` counts as a structural
    /// mutation, overwrite or not: outstanding cursors go stale either way.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        self.touch();
        let less = self.less;
        let old = Self::put_at(&mut self.root, Entry::new(key, value), less);
        if old.is_none() {
            self.len += 1;
        }
        old
    }

    /// Puts every pair in `entries`; returns how many were processed.
    pub fn put_all<I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut count = 0;
        for (key, value) in entries {
            self.put(key, value);
            count += 1;
        }
        count
    }

    /// Removes `key`, returning its value.
    ///
    /// A node with two children swaps in its in-order predecessor (the
    /// rightmost entry of the left subtree) and the predecessor's old node
    /// is unlinked instead, so both subtrees keep their order.
    ///
    /// The key is consumed; if it is not present, it comes back inside the
    /// [`KeyError`].
    pub fn erase(&mut self, key: K) -> Result<V, KeyError<K>> {
        let less = self.less;
        match Self::erase_at(&mut self.root, &key, less) {
            Some(entry) => {
                self.len -= 1;
                self.touch();
                Ok(entry.value)
            }
            None => Err(KeyError::new(NAME, "erase", key)),
        }
    }

    /// Returns the value under `key`, first inserting `V::default()` if the
    /// key is absent.
    pub fn get_or_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        let less = self.less;
        let root = &mut self.root;
        let len = &mut self.len;
        let mod_count = &mut self.mod_count;
        let mut inserted = false;
        let value = Self::vivify_at(root, key, less, &mut inserted);
        if inserted {
            *len += 1;
            *mod_count = mod_count.wrapping_add(1);
        }
        value
    }

    /// Drops every entry. Iterative, like [`Drop`].
    pub fn clear(&mut self) {
        self.touch();
        self.len = 0;
        Self::teardown(&mut self.root);
    }

    /// A cursor over an eager pre-order snapshot of the current tree. See
    /// [`BstCursor`].
    pub fn cursor(&self) -> BstCursor<K, V>
    where
        K: Clone,
        V: Clone,
    {
        BstCursor::at_begin(self)
    }

    /// An exhausted cursor, usable as the far end for
    /// [`BstCursor::same_position`] loops.
    pub fn cursor_at_end(&self) -> BstCursor<K, V> {
        BstCursor::at_end(self)
    }

    /// Iterates over entries lazily, in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Checks internal invariants; meant for tests.
    #[doc(hidden)]
    pub fn validate(&self) -> Result<(), ValidationError> {
        let counted =
            Self::validate_subtree(self.root.as_deref(), None, None, self.less)?;
        if counted != self.len {
            return Err(ValidationError::new(
                NAME,
                format!("{} nodes in the tree, len says {}", counted, self.len),
            ));
        }
        Ok(())
    }

    pub(crate) fn mod_count(&self) -> u64 {
        self.mod_count
    }

    pub(crate) fn origin(&self) -> OriginId {
        self.origin
    }

    /// Pre-order snapshot of the entries: each node before its subtrees,
    /// left subtree before right.
    pub(crate) fn preorder_entries(&self) -> LinkedQueue<Entry<K, V>>
    where
        K: Clone,
        V: Clone,
    {
        let mut queue = LinkedQueue::new();
        Self::preorder_at(self.root.as_deref(), &mut queue);
        queue
    }

    fn touch(&mut self) {
        self.mod_count = self.mod_count.wrapping_add(1);
    }

    fn node(&self, key: &K) -> Option<&TreeNode<K, V>> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if self.less.apply(key, &node.entry.key) {
                current = node.left.as_deref();
            } else if self.less.apply(&node.entry.key, key) {
                current = node.right.as_deref();
            } else {
                return Some(node);
            }
        }
        None
    }

    fn put_at(
        slot: &mut Option<Box<TreeNode<K, V>>>,
        entry: Entry<K, V>,
        less: LessThan<K>,
    ) -> Option<V> {
        match slot {
            None => {
                *slot = Some(Box::new(TreeNode {
                    entry,
                    left: None,
                    right: None,
                }));
                None
            }
            Some(node) => {
                if less.apply(&entry.key, &node.entry.key) {
                    Self::put_at(&mut node.left, entry, less)
                } else if less.apply(&node.entry.key, &entry.key) {
                    Self::put_at(&mut node.right, entry, less)
                } else {
                    Some(mem::replace(&mut node.entry.value, entry.value))
                }
            }
        }
    }

    fn erase_at(
        slot: &mut Option<Box<TreeNode<K, V>>>,
        key: &K,
        less: LessThan<K>,
    ) -> Option<Entry<K, V>> {
        let node = slot.as_deref_mut()?;
        if less.apply(key, &node.entry.key) {
            Self::erase_at(&mut node.left, key, less)
        } else if less.apply(&node.entry.key, key) {
            Self::erase_at(&mut node.right, key, less)
        } else if node.left.is_some() && node.right.is_some() {
            let predecessor = Self::detach_rightmost(&mut node.left);
            Some(mem::replace(&mut node.entry, predecessor))
        } else {
            let mut node = slot.take().expect("slot was just matched");
            *slot = node.left.take().or_else(|| node.right.take());
            Some(node.entry)
        }
    }

    /// Unlinks and returns the rightmost entry of a non-empty subtree; the
    /// detached node's left child takes its place.
    fn detach_rightmost(
        slot: &mut Option<Box<TreeNode<K, V>>>,
    ) -> Entry<K, V> {
        let node =
            slot.as_deref_mut().expect("caller passes a non-empty subtree");
        if node.right.is_some() {
            Self::detach_rightmost(&mut node.right)
        } else {
            let mut node = slot.take().expect("slot was just inspected");
            *slot = node.left.take();
            node.entry
        }
    }

    fn vivify_at<'a>(
        slot: &'a mut Option<Box<TreeNode<K, V>>>,
        key: K,
        less: LessThan<K>,
        inserted: &mut bool,
    ) -> &'a mut V
    where
        V: Default,
    {
        match slot {
            None => {
                *inserted = true;
                let node = slot.insert(Box::new(TreeNode {
                    entry: Entry::new(key, V::default()),
                    left: None,
                    right: None,
                }));
                &mut node.entry.value
            }
            Some(node) => {
                if less.apply(&key, &node.entry.key) {
                    Self::vivify_at(&mut node.left, key, less, inserted)
                } else if less.apply(&node.entry.key, &key) {
                    Self::vivify_at(&mut node.right, key, less, inserted)
                } else {
                    &mut node.entry.value
                }
            }
        }
    }

    fn subtree_contains_value(node: Option<&TreeNode<K, V>>, value: &V) -> bool
    where
        V: PartialEq,
    {
        match node {
            None => false,
            Some(node) => {
                node.entry.value == *value
                    || Self::subtree_contains_value(node.left.as_deref(), value)
                    || Self::subtree_contains_value(node.right.as_deref(), value)
            }
        }
    }

    fn preorder_at(
        node: Option<&TreeNode<K, V>>,
        queue: &mut LinkedQueue<Entry<K, V>>,
    ) where
        K: Clone,
        V: Clone,
    {
        if let Some(node) = node {
            queue.enqueue(node.entry.clone());
            Self::preorder_at(node.left.as_deref(), queue);
            Self::preorder_at(node.right.as_deref(), queue);
        }
    }

    fn validate_subtree(
        node: Option<&TreeNode<K, V>>,
        lower: Option<&K>,
        upper: Option<&K>,
        less: LessThan<K>,
    ) -> Result<usize, ValidationError> {
        let Some(node) = node else {
            return Ok(0);
        };
        let key = &node.entry.key;
        if lower.is_some_and(|lo| !less.apply(lo, key))
            || upper.is_some_and(|hi| !less.apply(key, hi))
        {
            return Err(ValidationError::new(
                NAME,
                "a node is outside its subtree's key range".to_owned(),
            ));
        }
        let left =
            Self::validate_subtree(node.left.as_deref(), lower, Some(key), less)?;
        let right =
            Self::validate_subtree(node.right.as_deref(), Some(key), upper, less)?;
        Ok(left + right + 1)
    }

    fn teardown(root: &mut Option<Box<TreeNode<K, V>>>) {
        let mut stack = Vec::new();
        stack.extend(root.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }

    pub(crate) fn take_root(&mut self) -> Option<Box<TreeNode<K, V>>> {
        self.root.take()
    }
}

impl<K: Clone, V: Clone, S: OrderSource<K>> BstMap<K, V, S> {
    /// Copies the map under a possibly different ordering function; when
    /// the resolved function differs from the source's, entries are
    /// re-inserted one by one in key order, which also reshapes the tree.
    ///
    /// # Errors
    ///
    /// Fails with [`StrategyError`] if `S` supplies a function different
    /// from `less`.
    pub fn clone_with_comparator(
        &self,
        less: fn(&K, &K) -> bool,
    ) -> Result<Self, StrategyError> {
        let less = strategy::resolve(
            NAME,
            "clone_with_comparator",
            S::LESS_THAN,
            Some(LessThan(less)),
        )?;
        if less == self.less {
            return Ok(self.clone());
        }
        let mut next = BstMap {
            root: None,
            len: 0,
            less,
            mod_count: 0,
            origin: OriginId::mint(),
            _strategy: PhantomData,
        };
        for entry in self.iter() {
            next.put(entry.key.clone(), entry.value.clone());
        }
        Ok(next)
    }
}

impl<K: Clone, V: Clone, S> Clone for BstMap<K, V, S> {
    /// Deep copy under a fresh identity; cursors onto the source do not
    /// follow the copy.
    fn clone(&self) -> Self {
        BstMap {
            root: self.root.clone(),
            len: self.len,
            less: self.less,
            mod_count: 0,
            origin: OriginId::mint(),
            _strategy: PhantomData,
        }
    }
}

impl<K, V, S> Drop for BstMap<K, V, S> {
    /// Iterative teardown; `Box`'s own drop glue would recurse to the
    /// tree's height.
    fn drop(&mut self) {
        Self::teardown(&mut self.root);
    }
}

impl<K, V, S: OrderSource<K>> FromIterator<(K, V)> for BstMap<K, V, S> {
    /// # Panics
    ///
    /// `FromIterator` cannot report a [`StrategyError`], so this panics if
    /// `S` supplies no ordering function. Use
    /// [`from_entries`](BstMap::from_entries) to handle that case.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map =
            Self::build("from_iter", None).unwrap_or_else(|err| panic!("{err}"));
        map.put_all(iter);
        map
    }
}

impl<K, V, S> Extend<(K, V)> for BstMap<K, V, S> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.put_all(iter);
    }
}

impl<K, V: PartialEq, S1, S2> PartialEq<BstMap<K, V, S2>> for BstMap<K, V, S1> {
    /// Content equality: same keys mapped to equal values. Tree shape and
    /// ordering identity do not participate; keys are matched through
    /// `other`'s ordering.
    fn eq(&self, other: &BstMap<K, V, S2>) -> bool {
        self.len() == other.len()
            && self.iter().all(|entry| other.get(&entry.key) == Some(&entry.value))
    }
}

impl<K, V: Eq, S> Eq for BstMap<K, V, S> {}

impl<K, V, S> fmt::Display for BstMap<K, V, S>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("map[")?;
        for (i, entry) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{entry}")?;
        }
        f.write_str("]")
    }
}

impl<K, V, S> fmt::Debug for BstMap<K, V, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    /// The internals dump: the tree rotated on its side (rightmost entry on
    /// the first line, deeper nodes indented further), plus counters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}{{len={}, mod_count={}", NAME, self.len, self.mod_count)?;
        Self::fmt_subtree(self.root.as_deref(), 0, f)?;
        write!(f, "}}")
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> BstMap<K, V, S> {
    fn fmt_subtree(
        node: Option<&TreeNode<K, V>>,
        depth: usize,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        if let Some(node) = node {
            Self::fmt_subtree(node.right.as_deref(), depth + 1, f)?;
            writeln!(f, "{:width$}{:?}", "", node.entry, width = depth * 2)?;
            Self::fmt_subtree(node.left.as_deref(), depth + 1, f)?;
        }
        Ok(())
    }
}

impl<K, V, S> core::ops::Index<&K> for BstMap<K, V, S>
where
    K: fmt::Debug,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if `key` is not present.
    fn index(&self, key: &K) -> &V {
        self.get(key).unwrap_or_else(|| {
            panic!("{}", KeyError::new(NAME, "index", key))
        })
    }
}
