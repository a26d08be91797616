// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    errors::CursorError, hash_set::imp, hash_set::HashSet,
    support::chain_table::RawCursor,
};
use core::marker::PhantomData;

/// A detached, fail-fast cursor over a [`HashSet`].
///
/// Same contract as [`MapCursor`](crate::MapCursor): the cursor borrows
/// nothing, every operation takes the set as an argument and revalidates
/// identity then modification count, and [`remove`](Self::remove) slides
/// past the doomed element before unlinking so the following
/// [`step`](Self::step) re-arms without skipping anything.
///
/// # Examples
///
/// ```
/// use idclip::{hashers, HashSet};
///
/// let mut s = HashSet::hashed_by(hashers::int_hash);
/// s.insert_all([3, 14, 15, 92]);
///
/// let mut cur = s.cursor();
/// while !cur.is_exhausted() {
///     if *cur.get(&s).unwrap() > 10 {
///         cur.remove(&mut s).unwrap();
///     }
///     cur.step(&s).unwrap();
/// }
/// assert_eq!(s.len(), 1);
/// assert!(s.contains(&3));
/// ```
pub struct SetCursor<T> {
    raw: RawCursor,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Eq> SetCursor<T> {
    pub(super) fn at_begin<S>(set: &HashSet<T, S>) -> Self {
        SetCursor {
            raw: RawCursor::at_begin(set.table(), imp::NAME),
            _marker: PhantomData,
        }
    }

    pub(super) fn at_end<S>(set: &HashSet<T, S>) -> Self {
        SetCursor {
            raw: RawCursor::at_end(set.table(), imp::NAME),
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
    /// [`CursorError::ForeignContainer`] if `set` did not mint this cursor;
    /// [`CursorError::Stale`] if the set was modified behind the cursor.
    pub fn step<S>(&mut self, set: &HashSet<T, S>) -> Result<(), CursorError> {
        self.raw.step(set.table())
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
        set: &'a HashSet<T, S>,
    ) -> Result<&'a T, CursorError> {
        self.raw.get(set.table(), "get").map(|member| &member.0)
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
        set: &mut HashSet<T, S>,
    ) -> Result<T, CursorError> {
        self.raw.remove(set.table_mut()).map(|member| member.0)
    }

    /// Returns true if `self` and `other` sit on the same element of `set`.
    ///
    /// # Errors
    ///
    /// [`CursorError::ForeignContainer`] if either cursor was not minted by
    /// `set`; [`CursorError::Stale`] if `self` is out of date.
    pub fn same_position<S>(
        &self,
        other: &Self,
        set: &HashSet<T, S>,
    ) -> Result<bool, CursorError> {
        self.raw.same_position(&other.raw, set.table())
    }
}
