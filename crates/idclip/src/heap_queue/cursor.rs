// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    errors::CursorError,
    heap_queue::imp::{self, RawHeap},
    heap_queue::HeapQueue,
    support::origin::OriginId,
};

/// A detached, fail-fast cursor over a [`HeapQueue`], in priority order.
///
/// Creating the cursor snapshots the whole heap; elements are then served
/// by draining the snapshot, so reads borrow the cursor rather than the
/// queue. Every operation still takes the queue and revalidates identity
/// and modification count first, so a queue mutated behind the cursor's
/// back fails fast instead of serving the old snapshot.
///
/// [`remove`](Self::remove) takes the snapshot's front element out of the
/// live heap too (one element equal to it), then disarms the cursor until
/// the next [`step`](Self::step), exactly like
/// [`MapCursor::remove`](crate::MapCursor::remove).
pub struct HeapCursor<T> {
    snapshot: RawHeap<T>,
    origin: OriginId,
    expected_mod_count: u64,
    can_erase: bool,
}

impl<T> HeapCursor<T> {
    pub(super) fn at_begin<S>(queue: &HeapQueue<T, S>) -> Self
    where
        T: Clone,
    {
        HeapCursor {
            snapshot: queue.raw().clone(),
            origin: queue.origin(),
            expected_mod_count: queue.mod_count(),
            can_erase: true,
        }
    }

    pub(super) fn at_end<S>(queue: &HeapQueue<T, S>) -> Self {
        HeapCursor {
            snapshot: RawHeap::new(queue.priority_fn()),
            origin: queue.origin(),
            expected_mod_count: queue.mod_count(),
            can_erase: true,
        }
    }

    fn check<S>(
        &self,
        queue: &HeapQueue<T, S>,
        operation: &'static str,
    ) -> Result<(), CursorError> {
        if self.origin != queue.origin() {
            return Err(CursorError::ForeignContainer {
                container: imp::NAME,
                operation,
            });
        }
        if self.expected_mod_count != queue.mod_count() {
            return Err(CursorError::Stale {
                container: imp::NAME,
                operation,
                expected: self.expected_mod_count,
                actual: queue.mod_count(),
            });
        }
        Ok(())
    }

    /// Returns true once the snapshot is used up.
    pub fn is_exhausted(&self) -> bool {
        self.snapshot.is_empty()
    }

    /// Advances to the next element down the priority order, or re-arms
    /// after a [`remove`](Self::remove) without moving. Stepping an
    /// exhausted cursor is a no-op.
    ///
    /// # Errors
    ///
    /// [`CursorError::ForeignContainer`] if `queue` did not mint this
    /// cursor; [`CursorError::Stale`] if the queue was modified behind the
    /// cursor.
    pub fn step<S>(
        &mut self,
        queue: &HeapQueue<T, S>,
    ) -> Result<(), CursorError> {
        self.check(queue, "step")?;
        if self.snapshot.is_empty() {
            // Exhausted cursors stay exhausted; stepping is a no-op.
            return Ok(());
        }
        if self.can_erase {
            let _ = self.snapshot.pop();
        } else {
            self.can_erase = true;
        }
        Ok(())
    }

    /// Returns the element under the cursor. The borrow comes out of the
    /// snapshot, so it lives as long as the cursor, not the queue.
    ///
    /// # Errors
    ///
    /// The revalidation errors of [`step`](Self::step), plus
    /// [`CursorError::Consumed`] right after a `remove` and
    /// [`CursorError::Exhausted`] past the end.
    pub fn get<'a, S>(
        &'a self,
        queue: &HeapQueue<T, S>,
    ) -> Result<&'a T, CursorError> {
        self.check(queue, "get")?;
        if !self.can_erase {
            return Err(CursorError::Consumed {
                container: imp::NAME,
                operation: "get",
            });
        }
        self.snapshot.peek().ok_or(CursorError::Exhausted {
            container: imp::NAME,
            operation: "get",
        })
    }

    /// Removes the element under the cursor from the live heap (one
    /// element equal to it) and returns it.
    ///
    /// The cursor ends up disarmed on the element after the gap; `step`
    /// once to re-arm it before reading again.
    ///
    /// # Errors
    ///
    /// Same set as [`get`](Self::get).
    pub fn remove<S>(
        &mut self,
        queue: &mut HeapQueue<T, S>,
    ) -> Result<T, CursorError>
    where
        T: PartialEq,
    {
        self.check(queue, "remove")?;
        if !self.can_erase {
            return Err(CursorError::Consumed {
                container: imp::NAME,
                operation: "remove",
            });
        }
        let Some(element) = self.snapshot.pop() else {
            return Err(CursorError::Exhausted {
                container: imp::NAME,
                operation: "remove",
            });
        };
        if !queue.remove_equal(&element) {
            panic!("snapshot element missing from a fresh heap");
        }
        self.expected_mod_count = queue.mod_count();
        self.can_erase = false;
        Ok(element)
    }

    /// Returns true if `self` and `other` have the same number of snapshot
    /// elements left — position, for snapshot cursors, is how far along
    /// they are.
    ///
    /// # Errors
    ///
    /// [`CursorError::ForeignContainer`] if either cursor was not minted by
    /// `queue`; [`CursorError::Stale`] if `self` is out of date.
    pub fn same_position<S>(
        &self,
        other: &Self,
        queue: &HeapQueue<T, S>,
    ) -> Result<bool, CursorError> {
        if self.origin != queue.origin() || other.origin != queue.origin() {
            return Err(CursorError::ForeignContainer {
                container: imp::NAME,
                operation: "same_position",
            });
        }
        self.check(queue, "same_position")?;
        Ok(self.snapshot.len() == other.snapshot.len())
    }
}
