// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    bst_map::{imp, BstMap},
    entry::Entry,
    errors::CursorError,
    linked_queue::LinkedQueue,
    support::origin::OriginId,
};

/// A detached, fail-fast cursor over a [`BstMap`].
///
/// Unlike the hash containers' cursors, a tree cursor does not walk the
/// live structure: creating one snapshots every entry, pre-order, into an
/// owned queue. Entries are served from the snapshot, so reads borrow the
/// cursor rather than the map — but every operation still takes the map
/// and revalidates identity and modification count first, so a map mutated
/// behind the cursor's back fails fast instead of serving the old snapshot.
///
/// [`remove`](Self::remove) consumes the front snapshot entry and erases
/// that key from the live tree, then disarms the cursor until the next
/// [`step`](Self::step), exactly like
/// [`MapCursor::remove`](crate::MapCursor::remove).
pub struct BstCursor<K, V> {
    snapshot: LinkedQueue<Entry<K, V>>,
    origin: OriginId,
    expected_mod_count: u64,
    can_erase: bool,
}

impl<K, V> BstCursor<K, V> {
    pub(super) fn at_begin<S>(map: &BstMap<K, V, S>) -> Self
    where
        K: Clone,
        V: Clone,
    {
        BstCursor {
            snapshot: map.preorder_entries(),
            origin: map.origin(),
            expected_mod_count: map.mod_count(),
            can_erase: true,
        }
    }

    pub(super) fn at_end<S>(map: &BstMap<K, V, S>) -> Self {
        BstCursor {
            snapshot: LinkedQueue::new(),
            origin: map.origin(),
            expected_mod_count: map.mod_count(),
            can_erase: true,
        }
    }

    fn check<S>(
        &self,
        map: &BstMap<K, V, S>,
        operation: &'static str,
    ) -> Result<(), CursorError> {
        if self.origin != map.origin() {
            return Err(CursorError::ForeignContainer {
                container: imp::NAME,
                operation,
            });
        }
        if self.expected_mod_count != map.mod_count() {
            return Err(CursorError::Stale {
                container: imp::NAME,
                operation,
                expected: self.expected_mod_count,
                actual: map.mod_count(),
            });
        }
        Ok(())
    }

    /// Returns true once the snapshot is used up.
    pub fn is_exhausted(&self) -> bool {
        self.snapshot.is_empty()
    }

    /// Advances to the next snapshot entry, or re-arms after a
    /// [`remove`](Self::remove) without moving. Stepping an exhausted
    /// cursor is a no-op.
    ///
    /// # Errors
    ///
    /// [`CursorError::ForeignContainer`] if `map` did not mint this cursor;
    /// [`CursorError::Stale`] if the map was modified behind the cursor.
    pub fn step<S>(&mut self, map: &BstMap<K, V, S>) -> Result<(), CursorError> {
        self.check(map, "step")?;
        if self.snapshot.is_empty() {
            // Exhausted cursors stay exhausted; stepping is a no-op.
            return Ok(());
        }
        if self.can_erase {
            let _ = self.snapshot.dequeue();
        } else {
            self.can_erase = true;
        }
        Ok(())
    }

    /// Returns the entry under the cursor. The borrow comes out of the
    /// snapshot, so it lives as long as the cursor, not the map.
    ///
    /// # Errors
    ///
    /// The revalidation errors of [`step`](Self::step), plus
    /// [`CursorError::Consumed`] right after a `remove` and
    /// [`CursorError::Exhausted`] past the end.
    pub fn get<'a, S>(
        &'a self,
        map: &BstMap<K, V, S>,
    ) -> Result<&'a Entry<K, V>, CursorError> {
        self.check(map, "get")?;
        if !self.can_erase {
            return Err(CursorError::Consumed {
                container: imp::NAME,
                operation: "get",
            });
        }
        self.snapshot.peek().map_err(|_| CursorError::Exhausted {
            container: imp::NAME,
            operation: "get",
        })
    }

    /// Removes the entry under the cursor from the live tree and returns
    /// it.
    ///
    /// The cursor ends up disarmed on the entry after the gap; `step` once
    /// to re-arm it before reading again.
    ///
    /// # Errors
    ///
    /// Same set as [`get`](Self::get).
    pub fn remove<S>(
        &mut self,
        map: &mut BstMap<K, V, S>,
    ) -> Result<Entry<K, V>, CursorError>
    where
        K: Clone + core::fmt::Debug,
    {
        self.check(map, "remove")?;
        if !self.can_erase {
            return Err(CursorError::Consumed {
                container: imp::NAME,
                operation: "remove",
            });
        }
        let Ok(entry) = self.snapshot.dequeue() else {
            return Err(CursorError::Exhausted {
                container: imp::NAME,
                operation: "remove",
            });
        };
        let value = map
            .erase(entry.key.clone())
            .expect("snapshot keys stay present while the cursor is fresh");
        self.expected_mod_count = map.mod_count();
        self.can_erase = false;
        Ok(Entry::new(entry.key, value))
    }

    /// Returns true if `self` and `other` have the same number of snapshot
    /// entries left — position, for snapshot cursors, is how far along they
    /// are.
    ///
    /// # Errors
    ///
    /// [`CursorError::ForeignContainer`] if either cursor was not minted by
    /// `map`; [`CursorError::Stale`] if `self` is out of date.
    pub fn same_position<S>(
        &self,
        other: &Self,
        map: &BstMap<K, V, S>,
    ) -> Result<bool, CursorError> {
        if self.origin != map.origin() || other.origin != map.origin() {
            return Err(CursorError::ForeignContainer {
                container: imp::NAME,
                operation: "same_position",
            });
        }
        self.check(map, "same_position")?;
        Ok(self.snapshot.len() == other.snapshot.len())
    }
}
