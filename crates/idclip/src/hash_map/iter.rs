use crate::{
    entry::Entry,
    hash_map::HashMap,
    support::chain_table::{ChainNode, ChainTable, NodeKey, RawIter},
};
use core::iter::FusedIterator;

/// Borrowing iterator over a [`HashMap`], in bin-then-chain order.
///
/// Created by [`HashMap::iter`].
pub struct Iter<'a, K: Eq, V> {
    inner: RawIter<'a, Entry<K, V>>,
}

impl<'a, K: Eq, V> Iter<'a, K, V> {
    pub(super) fn new(table: &'a ChainTable<Entry<K, V>>) -> Self {
        Iter { inner: table.raw_iter() }
    }
}

impl<K: Eq, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter { inner: self.inner.clone() }
    }
}

impl<'a, K: Eq, V> Iterator for Iter<'a, K, V> {
    type Item = &'a Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K: Eq, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K: Eq, V> FusedIterator for Iter<'_, K, V> {}

/// Mutable iterator over a [`HashMap`], yielding `(&key, &mut value)`.
///
/// Runs in arena order, not chain order; keys stay shared so the table's
/// placement invariants cannot be broken through it. Created by
/// [`HashMap::iter_mut`].
pub struct IterMut<'a, K: Eq, V> {
    inner: slotmap::basic::ValuesMut<'a, NodeKey, ChainNode<Entry<K, V>>>,
}

impl<'a, K: Eq, V> IterMut<'a, K, V> {
    pub(super) fn new(table: &'a mut ChainTable<Entry<K, V>>) -> Self {
        IterMut { inner: table.nodes_values_mut() }
    }
}

impl<'a, K: Eq, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.inner.next()?;
        let Entry { key, value } = &mut node.element;
        Some((&*key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K: Eq, V> ExactSizeIterator for IterMut<'_, K, V> {}
impl<K: Eq, V> FusedIterator for IterMut<'_, K, V> {}

/// Owned iterator over a [`HashMap`], in arena order.
pub struct IntoIter<K: Eq, V> {
    inner: slotmap::basic::IntoIter<NodeKey, ChainNode<Entry<K, V>>>,
}

impl<K: Eq, V> Iterator for IntoIter<K, V> {
    type Item = Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, node)| node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K: Eq, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K: Eq, V> FusedIterator for IntoIter<K, V> {}

impl<'a, K: Eq, V, S> IntoIterator for &'a HashMap<K, V, S> {
    type Item = &'a Entry<K, V>;
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K: Eq, V, S> IntoIterator for &'a mut HashMap<K, V, S> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K: Eq, V, S> IntoIterator for HashMap<K, V, S> {
    type Item = Entry<K, V>;
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.into_table().into_nodes() }
    }
}
