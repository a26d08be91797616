use crate::heap_queue::{imp::RawHeap, HeapQueue};
use core::iter::FusedIterator;

/// Owned iterator over a [`HeapQueue`], draining it in priority order.
///
/// There is no borrowing counterpart: in-place iteration would expose the
/// heap's array layout, which is not part of the queue's surface.
pub struct IntoIter<T> {
    raw: RawHeap<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.raw.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.raw.len(), Some(self.raw.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T, S> IntoIterator for HeapQueue<T, S> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { raw: self.into_raw() }
    }
}
