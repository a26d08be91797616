// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    errors::EmptyError,
    internal::ValidationError,
    linked_queue::{Iter, QueueCursor},
    support::link_list::LinkList,
};
use core::{
    fmt,
    hash::{Hash, Hasher},
};

pub(crate) const NAME: &str = "LinkedQueue";

/// A first-in-first-out queue, singly linked through an arena.
///
/// Enqueues at the rear, dequeues at the front, both O(1). The queue is
/// strategy-free, so unlike the keyed containers its constructors never
/// fail and it implements [`Default`].
///
/// # Examples
///
/// ```
/// use idclip::LinkedQueue;
///
/// let mut q = LinkedQueue::new();
/// q.enqueue("first");
/// q.enqueue("second");
/// assert_eq!(q.dequeue().unwrap(), "first");
/// assert_eq!(q.peek().unwrap(), &"second");
/// ```
pub struct LinkedQueue<T> {
    list: LinkList<T>,
}

impl<T> LinkedQueue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        LinkedQueue { list: LinkList::new() }
    }

    /// Creates a queue holding `elements` in iteration order, front first.
    pub fn from_elements<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut queue = Self::new();
        queue.enqueue_all(elements);
        queue
    }

    /// Returns the number of queued elements.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Adds `element` at the rear.
    pub fn enqueue(&mut self, element: T) {
        self.list.touch();
        self.list.push_rear(element);
    }

    /// Adds every item at the rear, in iteration order.
    pub fn enqueue_all<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        for element in elements {
            self.enqueue(element);
        }
    }

    /// Removes and returns the front element.
    ///
    /// # Errors
    ///
    /// [`EmptyError`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T, EmptyError> {
        match self.list.pop_front() {
            Some(element) => {
                self.list.touch();
                Ok(element)
            }
            None => Err(EmptyError::new(NAME, "dequeue")),
        }
    }

    /// Returns the front element without removing it.
    ///
    /// # Errors
    ///
    /// [`EmptyError`] if the queue is empty.
    pub fn peek(&self) -> Result<&T, EmptyError> {
        self.list.front().ok_or_else(|| EmptyError::new(NAME, "peek"))
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        self.list.touch();
        self.list.clear();
    }

    /// A cursor positioned at the front element, or already exhausted if
    /// the queue is empty. See [`QueueCursor`].
    pub fn cursor(&self) -> QueueCursor<T> {
        QueueCursor::at_begin(self)
    }

    /// An exhausted cursor, usable as the far end for
    /// [`QueueCursor::same_position`] loops.
    pub fn cursor_at_end(&self) -> QueueCursor<T> {
        QueueCursor::at_end(self)
    }

    /// Iterates front to rear.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.list)
    }

    /// Checks internal invariants; meant for tests.
    #[doc(hidden)]
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.list.validate().map_err(|err| err.relabel(NAME))
    }

    pub(crate) fn list(&self) -> &LinkList<T> {
        &self.list
    }

    pub(crate) fn list_mut(&mut self) -> &mut LinkList<T> {
        &mut self.list
    }

    pub(crate) fn into_list(self) -> LinkList<T> {
        self.list
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedQueue<T> {
    /// Deep copy under a fresh identity; cursors onto the source do not
    /// follow the copy.
    fn clone(&self) -> Self {
        LinkedQueue { list: self.list.clone() }
    }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_elements(iter)
    }
}

impl<T> Extend<T> for LinkedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.enqueue_all(iter);
    }
}

impl<T: PartialEq> PartialEq for LinkedQueue<T> {
    /// Sequence equality, front to rear.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for LinkedQueue<T> {}

impl<T: Hash> Hash for LinkedQueue<T> {
    /// Hashes the front-to-rear sequence, so equal queues hash alike and a
    /// queue can key a hash map.
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for element in self.iter() {
            element.hash(state);
        }
    }
}

impl<T: fmt::Display> fmt::Display for LinkedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("queue[")?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedQueue<T> {
    /// The internals dump: the chain plus counters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.list.fmt_debug(NAME, f)
    }
}
