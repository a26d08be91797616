use crate::{
    hash_set::imp::Member,
    hash_set::HashSet,
    support::chain_table::{ChainNode, ChainTable, NodeKey, RawIter},
};
use core::iter::FusedIterator;

/// Borrowing iterator over a [`HashSet`], in bin-then-chain order.
///
/// Created by [`HashSet::iter`].
pub struct Iter<'a, T: Eq> {
    inner: RawIter<'a, Member<T>>,
}

impl<'a, T: Eq> Iter<'a, T> {
    pub(super) fn new(table: &'a ChainTable<Member<T>>) -> Self {
        Iter { inner: table.raw_iter() }
    }
}

impl<T: Eq> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { inner: self.inner.clone() }
    }
}

impl<'a, T: Eq> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|member| &member.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: Eq> ExactSizeIterator for Iter<'_, T> {}
impl<T: Eq> FusedIterator for Iter<'_, T> {}

/// Owned iterator over a [`HashSet`], in arena order.
pub struct IntoIter<T: Eq> {
    inner: slotmap::basic::IntoIter<NodeKey, ChainNode<Member<T>>>,
}

impl<T: Eq> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, node)| node.element.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: Eq> ExactSizeIterator for IntoIter<T> {}
impl<T: Eq> FusedIterator for IntoIter<T> {}

impl<'a, T: Eq, S> IntoIterator for &'a HashSet<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Eq, S> IntoIterator for HashSet<T, S> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.into_table().into_nodes() }
    }
}
