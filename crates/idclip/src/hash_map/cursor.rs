// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    entry::Entry, errors::CursorError, hash_map::imp, hash_map::HashMap,
    support::chain_table::RawCursor,
};
use core::marker::PhantomData;

/// A detached, fail-fast cursor over a [`HashMap`].
///
/// A cursor borrows nothing: every operation takes the map as an explicit
/// argument and revalidates before acting — identity first (was the cursor
/// minted by this map?), then the modification count (has the map changed
/// since the cursor last synchronized?). Any direct mutation of the map,
/// including an overwriting `put` or a removal through a sibling cursor,
/// leaves the cursor permanently stale.
///
/// [`remove`](Self::remove) is the sanctioned way to erase while
/// traversing. It slides the cursor past the doomed element before
/// unlinking it, resynchronizes, and disarms the cursor; the next
/// [`step`](Self::step) re-arms without moving, so traversal continues at
/// the element after the gap.
///
/// # Examples
///
/// ```
/// use idclip::{hashers, HashMap};
///
/// let mut m = HashMap::hashed_by(hashers::int_hash);
/// m.put(1, "one");
/// m.put(2, "two");
/// m.put(3, "three");
///
/// // Drop the odd keys mid-traversal.
/// let mut cur = m.cursor();
/// while !cur.is_exhausted() {
///     if cur.get(&m).unwrap().key % 2 == 1 {
///         cur.remove(&mut m).unwrap();
///     }
///     cur.step(&m).unwrap();
/// }
/// assert_eq!(m.len(), 1);
/// assert!(m.contains_key(&2));
/// ```
pub struct MapCursor<K, V> {
    raw: RawCursor,
    _marker: PhantomData<fn() -> (K, V)>,
}

impl<K: Eq, V> MapCursor<K, V> {
    pub(super) fn at_begin<S>(map: &HashMap<K, V, S>) -> Self {
        MapCursor {
            raw: RawCursor::at_begin(map.table(), imp::NAME),
            _marker: PhantomData,
        }
    }

    pub(super) fn at_end<S>(map: &HashMap<K, V, S>) -> Self {
        MapCursor {
            raw: RawCursor::at_end(map.table(), imp::NAME),
            _marker: PhantomData,
        }
    }

    /// Returns true once the cursor has moved past the last element.
    pub fn is_exhausted(&self) -> bool {
        self.raw.is_exhausted()
    }

    /// Advances to the next element, or re-arms after a
    /// [`remove`](Self::remove) without moving. Stepping an exhausted
    /// cursor is a no-op.
    ///
    /// # Errors
    ///
    /// [`CursorError::ForeignContainer`] if `map` did not mint this cursor;
    /// [`CursorError::Stale`] if the map was modified behind the cursor.
    pub fn step<S>(&mut self, map: &HashMap<K, V, S>) -> Result<(), CursorError> {
        self.raw.step(map.table())
    }

    /// Returns the entry under the cursor.
    ///
    /// # Errors
    ///
    /// The revalidation errors of [`step`](Self::step), plus
    /// [`CursorError::Consumed`] right after a `remove` and
    /// [`CursorError::Exhausted`] past the end.
    pub fn get<'a, S>(
        &self,
        map: &'a HashMap<K, V, S>,
    ) -> Result<&'a Entry<K, V>, CursorError> {
        self.raw.get(map.table(), "get")
    }

    /// Removes and returns the entry under the cursor.
    ///
    /// The cursor ends up disarmed on the element after the gap; `step`
    /// once to re-arm it before reading again.
    ///
    /// # Errors
    ///
    /// Same set as [`get`](Self::get).
    pub fn remove<S>(
        &mut self,
        map: &mut HashMap<K, V, S>,
    ) -> Result<Entry<K, V>, CursorError> {
        self.raw.remove(map.table_mut())
    }

    /// Returns true if `self` and `other` sit on the same element of `map`.
    ///
    /// # Errors
    ///
    /// [`CursorError::ForeignContainer`] if either cursor was not minted by
    /// `map`; [`CursorError::Stale`] if `self` is out of date.
    pub fn same_position<S>(
        &self,
        other: &Self,
        map: &HashMap<K, V, S>,
    ) -> Result<bool, CursorError> {
        self.raw.same_position(&other.raw, map.table())
    }
}
