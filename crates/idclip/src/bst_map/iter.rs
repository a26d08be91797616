use crate::{
    bst_map::imp::TreeNode,
    bst_map::BstMap,
    entry::Entry,
};
use core::iter::FusedIterator;

/// Borrowing iterator over a [`BstMap`], in ascending key order.
///
/// Lazy: holds the spine of not-yet-visited ancestors instead of a
/// snapshot. Created by [`BstMap::iter`].
pub struct Iter<'a, K, V> {
    spine: Vec<&'a TreeNode<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(super) fn new(root: Option<&'a TreeNode<K, V>>, len: usize) -> Self {
        let mut iter = Iter { spine: Vec::new(), remaining: len };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a TreeNode<K, V>>) {
        while let Some(n) = node {
            self.spine.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter { spine: self.spine.clone(), remaining: self.remaining }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.spine.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Owned iterator over a [`BstMap`], in ascending key order.
pub struct IntoIter<K, V> {
    spine: Vec<Box<TreeNode<K, V>>>,
    remaining: usize,
}

impl<K, V> IntoIter<K, V> {
    fn push_left_spine(&mut self, mut node: Option<Box<TreeNode<K, V>>>) {
        while let Some(mut n) = node {
            node = n.left.take();
            self.spine.push(n);
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.spine.pop()?;
        self.push_left_spine(node.right.take());
        self.remaining -= 1;
        Some(node.entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<'a, K, V, S> IntoIterator for &'a BstMap<K, V, S> {
    type Item = &'a Entry<K, V>;
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, S> IntoIterator for BstMap<K, V, S> {
    type Item = Entry<K, V>;
    type IntoIter = IntoIter<K, V>;

    fn into_iter(mut self) -> Self::IntoIter {
        let root = self.take_root();
        let mut iter = IntoIter { spine: Vec::new(), remaining: self.len() };
        iter.push_left_spine(root);
        iter
    }
}
