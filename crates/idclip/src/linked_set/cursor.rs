// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    errors::CursorError, linked_set::imp, linked_set::LinkedSet,
    support::link_list::RawLinkCursor,
};
use core::marker::PhantomData;

/// A detached, fail-fast cursor over a [`LinkedSet`], in insertion order.
///
/// Same contract as [`MapCursor`](crate::MapCursor): the cursor borrows
/// nothing, every operation takes the set as an argument and revalidates
/// identity then modification count, and [`remove`](Self::remove) slides
/// past the doomed element before unlinking it.
pub struct LinkedSetCursor<T> {
    raw: RawLinkCursor,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Eq> LinkedSetCursor<T> {
    pub(super) fn at_begin(set: &LinkedSet<T>) -> Self {
        LinkedSetCursor {
            raw: RawLinkCursor::at_begin(set.list(), imp::NAME),
            _marker: PhantomData,
        }
    }

    pub(super) fn at_end(set: &LinkedSet<T>) -> Self {
        LinkedSetCursor {
            raw: RawLinkCursor::at_end(set.list(), imp::NAME),
            _marker: PhantomData,
        }
    }

    /// Returns true once the cursor has moved past the newest element.
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
    pub fn step(&mut self, set: &LinkedSet<T>) -> Result<(), CursorError> {
        self.raw.step(set.list())
    }

    /// Returns the element under the cursor.
    ///
    /// # Errors
    ///
    /// The revalidation errors of [`step`](Self::step), plus
    /// [`CursorError::Consumed`] right after a `remove` and
    /// [`CursorError::Exhausted`] past the end.
    pub fn get<'a>(
        &self,
        set: &'a LinkedSet<T>,
    ) -> Result<&'a T, CursorError> {
        self.raw.get(set.list(), "get")
    }

    /// Removes and returns the element under the cursor.
    ///
    /// The cursor ends up disarmed on the element after the gap; `step`
    /// once to re-arm it before reading again.
    ///
    /// # Errors
    ///
    /// Same set as [`get`](Self::get).
    pub fn remove(
        &mut self,
        set: &mut LinkedSet<T>,
    ) -> Result<T, CursorError> {
        self.raw.remove(set.list_mut())
    }

    /// Returns true if `self` and `other` sit on the same element of `set`.
    ///
    /// # Errors
    ///
    /// [`CursorError::ForeignContainer`] if either cursor was not minted by
    /// `set`; [`CursorError::Stale`] if `self` is out of date.
    pub fn same_position(
        &self,
        other: &Self,
        set: &LinkedSet<T>,
    ) -> Result<bool, CursorError> {
        self.raw.same_position(&other.raw, set.list())
    }
}
