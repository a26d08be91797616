use crate::{
    linked_priority_queue::LinkedPriorityQueue,
    support::link_list::{LinkList, RawLinkIntoIter, RawLinkIter},
};
use core::iter::FusedIterator;

/// Borrowing iterator over a [`LinkedPriorityQueue`], from highest priority
/// to lowest.
///
/// Created by [`LinkedPriorityQueue::iter`].
pub struct Iter<'a, T> {
    inner: RawLinkIter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(list: &'a LinkList<T>) -> Self {
        Iter { inner: list.raw_iter() }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { inner: self.inner.clone() }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owned iterator over a [`LinkedPriorityQueue`], from highest priority to
/// lowest.
pub struct IntoIter<T> {
    inner: RawLinkIntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T, S> IntoIterator for &'a LinkedPriorityQueue<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, S> IntoIterator for LinkedPriorityQueue<T, S> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: RawLinkIntoIter { list: self.into_list() } }
    }
}
