// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    errors::CursorError, linked_priority_queue::imp,
    linked_priority_queue::LinkedPriorityQueue,
    support::link_list::RawLinkCursor,
};
use core::marker::PhantomData;

/// A detached, fail-fast cursor over a [`LinkedPriorityQueue`], from
/// highest priority to lowest.
///
/// Same contract as [`MapCursor`](crate::MapCursor): the cursor borrows
/// nothing, every operation takes the queue as an argument and revalidates
/// identity then modification count, and [`remove`](Self::remove) slides
/// past the doomed element before unlinking it.
pub struct LinkedPriorityCursor<T> {
    raw: RawLinkCursor,
    _marker: PhantomData<fn() -> T>,
}

impl<T> LinkedPriorityCursor<T> {
    pub(super) fn at_begin<S>(queue: &LinkedPriorityQueue<T, S>) -> Self {
        LinkedPriorityCursor {
            raw: RawLinkCursor::at_begin(queue.list(), imp::NAME),
            _marker: PhantomData,
        }
    }

    pub(super) fn at_end<S>(queue: &LinkedPriorityQueue<T, S>) -> Self {
        LinkedPriorityCursor {
            raw: RawLinkCursor::at_end(queue.list(), imp::NAME),
            _marker: PhantomData,
        }
    }

    /// Returns true once the cursor has moved past the lowest-priority
    /// element.
    pub fn is_exhausted(&self) -> bool {
        self.raw.is_exhausted()
    }

    /// Advances down the priority order, or re-arms after a
    /// [`remove`](Self::remove) without moving. Stepping an exhausted
    /// cursor is a no-op.
    ///
    /// # Errors
    ///
    /// [`CursorError::ForeignContainer`] if `queue` did not mint this
    /// cursor; [`CursorError::Stale`] if the queue was modified behind the
    /// cursor.
    pub fn step<S>(
        &mut self,
        queue: &LinkedPriorityQueue<T, S>,
    ) -> Result<(), CursorError> {
        self.raw.step(queue.list())
    }

    /// Returns the element under the cursor.
    ///
    /// # Errors
    ///
    /// The revalidation errors of [`step`](Self::step), plus
    /// [`CursorError::Consumed`] right after a `remove` and
    /// [`CursorError::Exhausted`] past the end.
    pub fn get<'a, S>(
        &self,
        queue: &'a LinkedPriorityQueue<T, S>,
    ) -> Result<&'a T, CursorError> {
        self.raw.get(queue.list(), "get")
    }

    /// Removes and returns the element under the cursor.
    ///
    /// The cursor ends up disarmed on the element after the gap; `step`
    /// once to re-arm it before reading again.
    ///
    /// # Errors
    ///
    /// Same set as [`get`](Self::get).
    pub fn remove<S>(
        &mut self,
        queue: &mut LinkedPriorityQueue<T, S>,
    ) -> Result<T, CursorError> {
        self.raw.remove(queue.list_mut())
    }

    /// Returns true if `self` and `other` sit on the same element of
    /// `queue`.
    ///
    /// # Errors
    ///
    /// [`CursorError::ForeignContainer`] if either cursor was not minted by
    /// `queue`; [`CursorError::Stale`] if `self` is out of date.
    pub fn same_position<S>(
        &self,
        other: &Self,
        queue: &LinkedPriorityQueue<T, S>,
    ) -> Result<bool, CursorError> {
        self.raw.same_position(&other.raw, queue.list())
    }
}
