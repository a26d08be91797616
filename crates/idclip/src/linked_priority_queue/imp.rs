// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    errors::{EmptyError, StrategyError},
    internal::ValidationError,
    linked_priority_queue::{Iter, LinkedPriorityCursor},
    strategy::{self, HigherPriority, PrioritySource, Unspecified},
    support::link_list::LinkList,
};
use core::{fmt, marker::PhantomData};

pub(crate) const NAME: &str = "LinkedPriorityQueue";

/// A priority queue over a sorted singly-linked chain.
///
/// The chain runs highest priority first. A new element is inserted after
/// every strictly-higher entry, so among equal priorities the newest sits
/// frontmost. Enqueue is O(n), dequeue and peek O(1).
///
/// The priority function is injected the same way as
/// [`HeapQueue`](crate::HeapQueue)'s: by marker type, constructor argument,
/// or both in agreement.
///
/// # Examples
///
/// ```
/// use idclip::LinkedPriorityQueue;
///
/// fn max_first(a: &i64, b: &i64) -> bool {
///     a > b
/// }
///
/// let mut pq = LinkedPriorityQueue::prioritized_by(max_first);
/// pq.enqueue_all([3, 9, 6]);
/// assert_eq!(pq.dequeue().unwrap(), 9);
/// assert_eq!(pq.peek().unwrap(), &6);
/// ```
pub struct LinkedPriorityQueue<T, S = Unspecified> {
    list: LinkList<T>,
    higher: HigherPriority<T>,
    _strategy: PhantomData<fn() -> S>,
}

impl<T, S: PrioritySource<T>> LinkedPriorityQueue<T, S> {
    /// Creates an empty queue from the marker type's priority function.
    ///
    /// # Errors
    ///
    /// Fails with [`StrategyError`] if `S` supplies no priority function.
    pub fn new() -> Result<Self, StrategyError> {
        Self::build("new", None)
    }

    /// Creates an empty queue, resolving the marker type's priority
    /// function against the supplied one.
    pub fn with_priority(
        higher: fn(&T, &T) -> bool,
    ) -> Result<Self, StrategyError> {
        Self::build("with_priority", Some(HigherPriority(higher)))
    }

    /// Creates a queue holding `elements`, enqueued in order.
    pub fn from_elements<I>(elements: I) -> Result<Self, StrategyError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut queue = Self::build("from_elements", None)?;
        queue.enqueue_all(elements);
        Ok(queue)
    }

    fn build(
        constructor: &'static str,
        supplied: Option<HigherPriority<T>>,
    ) -> Result<Self, StrategyError> {
        let higher = strategy::resolve(
            NAME,
            constructor,
            S::HIGHER_PRIORITY,
            supplied,
        )?;
        Ok(LinkedPriorityQueue {
            list: LinkList::new(),
            higher,
            _strategy: PhantomData,
        })
    }
}

impl<T> LinkedPriorityQueue<T, Unspecified> {
    /// Creates an empty queue from a priority function alone; infallible
    /// because the [`Unspecified`] marker has no function to disagree with.
    pub fn prioritized_by(higher: fn(&T, &T) -> bool) -> Self {
        LinkedPriorityQueue {
            list: LinkList::new(),
            higher: HigherPriority(higher),
            _strategy: PhantomData,
        }
    }

    /// Creates a queue holding `elements` under the supplied priority
    /// function.
    pub fn from_elements_by<I>(elements: I, higher: fn(&T, &T) -> bool) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut queue = Self::prioritized_by(higher);
        queue.enqueue_all(elements);
        queue
    }
}

impl<T, S> LinkedPriorityQueue<T, S> {
    /// Returns the number of queued elements.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the resolved priority function.
    pub fn priority_fn(&self) -> HigherPriority<T> {
        self.higher
    }

    /// Inserts `element` after every strictly-higher-priority entry.
    pub fn enqueue(&mut self, element: T) {
        self.list.touch();
        let mut prev = None;
        let mut cursor = self.list.front_key();
        while let Some(key) = cursor {
            if !self.higher.apply(self.list.element(key), &element) {
                break;
            }
            prev = Some(key);
            cursor = self.list.next_of(key);
        }
        self.list.insert_after(prev, element);
    }

    /// Enqueues every item, in iteration order.
    pub fn enqueue_all<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        for element in elements {
            self.enqueue(element);
        }
    }

    /// Removes and returns the highest-priority element.
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

    /// Returns the highest-priority element without removing it.
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

    /// A cursor positioned at the highest-priority element, or already
    /// exhausted if the queue is empty. See [`LinkedPriorityCursor`].
    pub fn cursor(&self) -> LinkedPriorityCursor<T> {
        LinkedPriorityCursor::at_begin(self)
    }

    /// An exhausted cursor, usable as the far end for
    /// [`LinkedPriorityCursor::same_position`] loops.
    pub fn cursor_at_end(&self) -> LinkedPriorityCursor<T> {
        LinkedPriorityCursor::at_end(self)
    }

    /// Iterates from highest priority to lowest.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.list)
    }

    /// Checks internal invariants; meant for tests.
    #[doc(hidden)]
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.list.validate().map_err(|err| err.relabel(NAME))?;
        let mut elements = self.list.raw_iter();
        if let Some(mut previous) = elements.next() {
            for element in elements {
                if self.higher.apply(element, previous) {
                    return Err(ValidationError::new(
                        NAME,
                        "chain is not in priority order".to_owned(),
                    ));
                }
                previous = element;
            }
        }
        Ok(())
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

impl<T: Clone, S: PrioritySource<T>> LinkedPriorityQueue<T, S> {
    /// Copies the queue under a possibly different priority function; when
    /// the resolved function differs from the source's, elements are
    /// re-enqueued one by one under the new order.
    ///
    /// # Errors
    ///
    /// Fails with [`StrategyError`] if `S` supplies a function different
    /// from `higher`.
    pub fn clone_with_priority(
        &self,
        higher: fn(&T, &T) -> bool,
    ) -> Result<Self, StrategyError> {
        let higher = strategy::resolve(
            NAME,
            "clone_with_priority",
            S::HIGHER_PRIORITY,
            Some(HigherPriority(higher)),
        )?;
        if higher == self.higher {
            return Ok(LinkedPriorityQueue {
                list: self.list.clone(),
                higher,
                _strategy: PhantomData,
            });
        }
        let mut next = LinkedPriorityQueue {
            list: LinkList::new(),
            higher,
            _strategy: PhantomData,
        };
        for element in self.iter() {
            next.enqueue(element.clone());
        }
        Ok(next)
    }
}

impl<T: Clone, S> Clone for LinkedPriorityQueue<T, S> {
    /// Deep copy under a fresh identity; cursors onto the source do not
    /// follow the copy.
    fn clone(&self) -> Self {
        LinkedPriorityQueue {
            list: self.list.clone(),
            higher: self.higher,
            _strategy: PhantomData,
        }
    }
}

impl<T, S: PrioritySource<T>> FromIterator<T> for LinkedPriorityQueue<T, S> {
    /// # Panics
    ///
    /// `FromIterator` cannot report a [`StrategyError`], so this panics if
    /// `S` supplies no priority function. Use
    /// [`from_elements`](LinkedPriorityQueue::from_elements) to handle that
    /// case.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue =
            Self::build("from_iter", None).unwrap_or_else(|err| panic!("{err}"));
        queue.enqueue_all(iter);
        queue
    }
}

impl<T, S> Extend<T> for LinkedPriorityQueue<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.enqueue_all(iter);
    }
}

impl<T: PartialEq, S1, S2> PartialEq<LinkedPriorityQueue<T, S2>>
    for LinkedPriorityQueue<T, S1>
{
    /// Equal when both queues use the same priority function (by identity)
    /// and drain the same sequence.
    fn eq(&self, other: &LinkedPriorityQueue<T, S2>) -> bool {
        self.higher == other.higher
            && self.len() == other.len()
            && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq, S> Eq for LinkedPriorityQueue<T, S> {}

impl<T: fmt::Display, S> fmt::Display for LinkedPriorityQueue<T, S> {
    /// `priority_queue[low,...,high]:highest`, matching
    /// [`HeapQueue`](crate::HeapQueue)'s format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ordered: Vec<&T> = self.iter().collect();
        f.write_str("priority_queue[")?;
        for (i, element) in ordered.iter().rev().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str("]")?;
        match ordered.first() {
            Some(highest) => write!(f, ":{highest}"),
            None => Ok(()),
        }
    }
}

impl<T: fmt::Debug, S> fmt::Debug for LinkedPriorityQueue<T, S> {
    /// The internals dump: the chain plus counters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.list.fmt_debug(NAME, f)
    }
}
