// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    errors::{EmptyError, StrategyError},
    heap_queue::HeapCursor,
    internal::ValidationError,
    strategy::{self, HigherPriority, PrioritySource, Unspecified},
    support::origin::OriginId,
};
use core::{fmt, marker::PhantomData};

pub(crate) const NAME: &str = "HeapQueue";

/// The bare binary heap: element array plus priority function. Shared
/// between [`HeapQueue`] and the snapshots its cursors drain.
#[derive(Clone)]
pub(crate) struct RawHeap<T> {
    elements: Vec<T>,
    higher: HigherPriority<T>,
}

impl<T> RawHeap<T> {
    pub(crate) fn new(higher: HigherPriority<T>) -> Self {
        RawHeap { elements: Vec::new(), higher }
    }

    pub(crate) fn from_elements(
        elements: Vec<T>,
        higher: HigherPriority<T>,
    ) -> Self {
        let mut heap = RawHeap { elements, higher };
        heap.heapify();
        heap
    }

    pub(crate) fn len(&self) -> usize {
        self.elements.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub(crate) fn higher(&self) -> HigherPriority<T> {
        self.higher
    }

    pub(crate) fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    pub(crate) fn push(&mut self, element: T) {
        self.elements.push(element);
        self.percolate_up(self.elements.len() - 1);
    }

    pub(crate) fn pop(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }
        let last = self.elements.len() - 1;
        self.elements.swap(0, last);
        let element = self.elements.pop();
        if !self.elements.is_empty() {
            self.percolate_down(0);
        }
        element
    }

    /// Removes one element equal to `target`, repairing the heap around the
    /// hole; returns false if no element matches.
    pub(crate) fn remove_one(&mut self, target: &T) -> bool
    where
        T: PartialEq,
    {
        let Some(index) = self.elements.iter().position(|e| e == target)
        else {
            return false;
        };
        let last = self.elements.len() - 1;
        self.elements.swap(index, last);
        self.elements.pop();
        if index < self.elements.len() {
            // The swapped-in element may beat its new parent or lose to a
            // child; only one of these passes will actually move it.
            self.percolate_up(index);
            self.percolate_down(index);
        }
        true
    }

    pub(crate) fn clear(&mut self) {
        self.elements.clear();
    }

    /// Restores the heap property over an arbitrary array, percolating each
    /// internal node down, last parent first.
    fn heapify(&mut self) {
        for index in (0..self.elements.len() / 2).rev() {
            self.percolate_down(index);
        }
    }

    fn percolate_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.higher.apply(&self.elements[index], &self.elements[parent])
            {
                self.elements.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn percolate_down(&mut self, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            if left >= self.elements.len() {
                break;
            }
            let right = left + 1;
            // The left child is followed only when it strictly outranks the
            // right one; ties descend right.
            let child = if right < self.elements.len()
                && !self.higher.apply(&self.elements[left], &self.elements[right])
            {
                right
            } else {
                left
            };
            if self.higher.apply(&self.elements[child], &self.elements[index]) {
                self.elements.swap(child, index);
                index = child;
            } else {
                break;
            }
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        for index in 1..self.elements.len() {
            let parent = (index - 1) / 2;
            if self.higher.apply(&self.elements[index], &self.elements[parent])
            {
                return Err(ValidationError::new(
                    "binary heap",
                    format!(
                        "element {index} outranks its parent {parent}"
                    ),
                ));
            }
        }
        Ok(())
    }

    fn fmt_debug(
        &self,
        name: &str,
        len: usize,
        mod_count: u64,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result
    where
        T: fmt::Debug,
    {
        write!(
            f,
            "{name}{{elements={:?}, len={len}, mod_count={mod_count}}}",
            self.elements
        )
    }
}

/// A priority queue over an array-backed binary heap with a caller-supplied
/// priority relation and detached, fail-fast cursors.
///
/// `higher(a, b)` must mean "a strictly outranks b". The element at the
/// root outranks its children; [`dequeue`](Self::dequeue) always hands back
/// a highest-priority element. Elements need no [`Ord`].
///
/// The heap's array order is an implementation detail, so there is no
/// borrowing iterator: [`cursor`](Self::cursor) drains a snapshot in
/// priority order, and so does the owning [`IntoIterator`].
///
/// # Examples
///
/// ```
/// use idclip::HeapQueue;
///
/// fn max_first(a: &i64, b: &i64) -> bool {
///     a > b
/// }
///
/// let mut pq = HeapQueue::prioritized_by(max_first);
/// pq.enqueue_all([3, 9, 1, 6]);
/// assert_eq!(pq.dequeue().unwrap(), 9);
/// assert_eq!(pq.peek().unwrap(), &6);
/// ```
pub struct HeapQueue<T, S = Unspecified> {
    raw: RawHeap<T>,
    mod_count: u64,
    origin: OriginId,
    _strategy: PhantomData<fn() -> S>,
}

impl<T, S: PrioritySource<T>> HeapQueue<T, S> {
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

    /// Creates a queue holding `elements`, heapified in one pass rather
    /// than enqueued one by one.
    pub fn from_elements<I>(elements: I) -> Result<Self, StrategyError>
    where
        I: IntoIterator<Item = T>,
    {
        let higher = strategy::resolve(
            NAME,
            "from_elements",
            S::HIGHER_PRIORITY,
            None,
        )?;
        Ok(HeapQueue {
            raw: RawHeap::from_elements(elements.into_iter().collect(), higher),
            mod_count: 0,
            origin: OriginId::mint(),
            _strategy: PhantomData,
        })
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
        Ok(HeapQueue {
            raw: RawHeap::new(higher),
            mod_count: 0,
            origin: OriginId::mint(),
            _strategy: PhantomData,
        })
    }
}

impl<T> HeapQueue<T, Unspecified> {
    /// Creates an empty queue from a priority function alone; infallible
    /// because the [`Unspecified`] marker has no function to disagree with.
    pub fn prioritized_by(higher: fn(&T, &T) -> bool) -> Self {
        HeapQueue {
            raw: RawHeap::new(HigherPriority(higher)),
            mod_count: 0,
            origin: OriginId::mint(),
            _strategy: PhantomData,
        }
    }

    /// Creates a queue holding `elements` under the supplied priority
    /// function, heapified in one pass.
    pub fn from_elements_by<I>(elements: I, higher: fn(&T, &T) -> bool) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        HeapQueue {
            raw: RawHeap::from_elements(
                elements.into_iter().collect(),
                HigherPriority(higher),
            ),
            mod_count: 0,
            origin: OriginId::mint(),
            _strategy: PhantomData,
        }
    }
}

impl<T, S> HeapQueue<T, S> {
    /// Returns the number of queued elements.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns true if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the resolved priority function.
    pub fn priority_fn(&self) -> HigherPriority<T> {
        self.raw.higher()
    }

    /// Adds `element`, percolating it up to its rank.
    pub fn enqueue(&mut self, element: T) {
        self.touch();
        self.raw.push(element);
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

    /// Removes and returns a highest-priority element.
    ///
    /// # Errors
    ///
    /// [`EmptyError`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T, EmptyError> {
        match self.raw.pop() {
            Some(element) => {
                self.touch();
                Ok(element)
            }
            None => Err(EmptyError::new(NAME, "dequeue")),
        }
    }

    /// Returns a highest-priority element without removing it.
    ///
    /// # Errors
    ///
    /// [`EmptyError`] if the queue is empty.
    pub fn peek(&self) -> Result<&T, EmptyError> {
        self.raw.peek().ok_or_else(|| EmptyError::new(NAME, "peek"))
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        self.touch();
        self.raw.clear();
    }

    /// A cursor over a snapshot of the heap, serving elements in priority
    /// order. See [`HeapCursor`].
    pub fn cursor(&self) -> HeapCursor<T>
    where
        T: Clone,
    {
        HeapCursor::at_begin(self)
    }

    /// An exhausted cursor, usable as the far end for
    /// [`HeapCursor::same_position`] loops.
    pub fn cursor_at_end(&self) -> HeapCursor<T> {
        HeapCursor::at_end(self)
    }

    /// Checks internal invariants; meant for tests.
    #[doc(hidden)]
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.raw.validate().map_err(|err| err.relabel(NAME))
    }

    pub(crate) fn raw(&self) -> &RawHeap<T> {
        &self.raw
    }

    pub(crate) fn into_raw(self) -> RawHeap<T> {
        self.raw
    }

    pub(crate) fn mod_count(&self) -> u64 {
        self.mod_count
    }

    pub(crate) fn origin(&self) -> OriginId {
        self.origin
    }

    /// Removes one element equal to `target`; counts as a structural
    /// mutation only when something was removed.
    pub(crate) fn remove_equal(&mut self, target: &T) -> bool
    where
        T: PartialEq,
    {
        if self.raw.remove_one(target) {
            self.touch();
            true
        } else {
            false
        }
    }

    fn touch(&mut self) {
        self.mod_count = self.mod_count.wrapping_add(1);
    }
}

impl<T: Clone, S: PrioritySource<T>> HeapQueue<T, S> {
    /// Copies the queue under a possibly different priority function; when
    /// the resolved function differs from the source's, the copied elements
    /// are re-heapified under the new relation.
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
        let raw = if higher == self.raw.higher() {
            self.raw.clone()
        } else {
            RawHeap::from_elements(self.raw.elements.clone(), higher)
        };
        Ok(HeapQueue {
            raw,
            mod_count: 0,
            origin: OriginId::mint(),
            _strategy: PhantomData,
        })
    }
}

impl<T: Clone, S> Clone for HeapQueue<T, S> {
    /// Deep copy under a fresh identity; cursors onto the source do not
    /// follow the copy.
    fn clone(&self) -> Self {
        HeapQueue {
            raw: self.raw.clone(),
            mod_count: 0,
            origin: OriginId::mint(),
            _strategy: PhantomData,
        }
    }
}

impl<T, S: PrioritySource<T>> FromIterator<T> for HeapQueue<T, S> {
    /// # Panics
    ///
    /// `FromIterator` cannot report a [`StrategyError`], so this panics if
    /// `S` supplies no priority function. Use
    /// [`from_elements`](HeapQueue::from_elements) to handle that case.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_elements(iter).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<T, S> Extend<T> for HeapQueue<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.enqueue_all(iter);
    }
}

impl<T, S1, S2> PartialEq<HeapQueue<T, S2>> for HeapQueue<T, S1>
where
    T: Clone + PartialEq,
{
    /// Equal when both queues use the same priority function (by identity)
    /// and drain the same sequence. Array layout does not participate, so
    /// the comparison drains snapshot copies — hence the `T: Clone` bound.
    fn eq(&self, other: &HeapQueue<T, S2>) -> bool {
        if self.raw.higher() != other.raw.higher()
            || self.len() != other.len()
        {
            return false;
        }
        let mut a = self.raw.clone();
        let mut b = other.raw.clone();
        while let (Some(x), Some(y)) = (a.pop(), b.pop()) {
            if x != y {
                return false;
            }
        }
        true
    }
}

impl<T: Clone + Eq, S> Eq for HeapQueue<T, S> {}

impl<T, S> fmt::Display for HeapQueue<T, S>
where
    T: Clone + fmt::Display,
{
    /// `priority_queue[low,...,high]:highest`. Produced by draining a
    /// snapshot, so the array layout stays unobservable.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut snapshot = self.raw.clone();
        let mut drained = Vec::with_capacity(snapshot.len());
        while let Some(element) = snapshot.pop() {
            drained.push(element);
        }
        f.write_str("priority_queue[")?;
        for (i, element) in drained.iter().rev().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str("]")?;
        match drained.first() {
            Some(highest) => write!(f, ":{highest}"),
            None => Ok(()),
        }
    }
}

impl<T: fmt::Debug, S> fmt::Debug for HeapQueue<T, S> {
    /// The internals dump: the heap array in layout order, plus counters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.raw.fmt_debug(NAME, self.len(), self.mod_count, f)
    }
}
