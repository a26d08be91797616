// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    internal::ValidationError,
    linked_set::{Iter, LinkedSetCursor},
    support::link_list::LinkList,
};
use core::{borrow::Borrow, fmt};

pub(crate) const NAME: &str = "LinkedSet";

/// A set backed by a singly-linked chain, with linear membership tests.
///
/// Insertion order is preserved; iteration runs oldest to newest. Because
/// no hash function is injected, the set is strategy-free: constructors
/// never fail, and [`Default`] makes it usable as an auto-vivified map
/// value via `get_or_default`.
///
/// # Examples
///
/// ```
/// use idclip::{hashers, HashMap, LinkedSet};
///
/// let mut index: HashMap<String, LinkedSet<i64>> =
///     HashMap::hashed_by(hashers::str_hash);
/// index.get_or_default("evens".to_owned()).insert_all([2, 4, 6]);
/// assert_eq!(index[&"evens".to_owned()].len(), 3);
/// ```
pub struct LinkedSet<T: Eq> {
    list: LinkList<T>,
}

impl<T: Eq> LinkedSet<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        LinkedSet { list: LinkList::new() }
    }

    /// Creates a set holding `elements`, inserted in order.
    pub fn from_elements<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = Self::new();
        set.insert_all(elements);
        set
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true if the set holds no elements.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns true if `element` is a member. Linear scan.
    pub fn contains(&self, element: &T) -> bool {
        self.list.raw_iter().any(|e| e == element)
    }

    /// Returns true if every item of `elements` is a member.
    pub fn contains_all<I, Q>(&self, elements: I) -> bool
    where
        I: IntoIterator<Item = Q>,
        Q: Borrow<T>,
    {
        elements.into_iter().all(|q| self.contains(q.borrow()))
    }

    /// Inserts `element` at the rear; returns false if it was already a
    /// member.
    ///
    /// Counts as a structural mutation either way, like the hash set's
    /// `insert`.
    pub fn insert(&mut self, element: T) -> bool {
        self.list.touch();
        if self.contains(&element) {
            return false;
        }
        self.list.push_rear(element);
        true
    }

    /// Inserts every item; returns how many were newly added.
    pub fn insert_all<I>(&mut self, elements: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let mut added = 0;
        for element in elements {
            if self.insert(element) {
                added += 1;
            }
        }
        added
    }

    /// Removes `element`; returns false if it was not a member.
    pub fn erase(&mut self, element: &T) -> bool {
        let mut prev = None;
        let mut cursor = self.list.front_key();
        while let Some(key) = cursor {
            if self.list.element(key) == element {
                self.list.unlink(prev, key);
                self.list.touch();
                return true;
            }
            prev = Some(key);
            cursor = self.list.next_of(key);
        }
        false
    }

    /// Removes every item of `elements`; returns how many were present.
    pub fn erase_all<I, Q>(&mut self, elements: I) -> usize
    where
        I: IntoIterator<Item = Q>,
        Q: Borrow<T>,
    {
        elements.into_iter().filter(|q| self.erase(q.borrow())).count()
    }

    /// Keeps only members that also occur in `elements`; returns how many
    /// were erased.
    pub fn retain_all<I, Q>(&mut self, elements: I) -> usize
    where
        I: IntoIterator<Item = Q>,
        Q: Borrow<T>,
        T: Clone,
    {
        let keep: LinkedSet<T> =
            LinkedSet::from_elements(elements.into_iter().map(|q| q.borrow().clone()));
        let mut erased = 0;
        let mut cur = LinkedSetCursor::at_begin(self);
        while !cur.is_exhausted() {
            let is_kept = {
                let element =
                    cur.get(self).expect("cursor stays fresh in retain_all");
                keep.contains(element)
            };
            if !is_kept {
                cur.remove(self).expect("cursor stays fresh in retain_all");
                erased += 1;
            }
            cur.step(self).expect("cursor stays fresh in retain_all");
        }
        erased
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        self.list.touch();
        self.list.clear();
    }

    /// Returns true if every member of `self` is a member of `other`.
    pub fn is_subset(&self, other: &LinkedSet<T>) -> bool {
        self.len() <= other.len() && self.iter().all(|e| other.contains(e))
    }

    /// Returns true if `self` is a subset of `other` and strictly smaller.
    pub fn is_proper_subset(&self, other: &LinkedSet<T>) -> bool {
        self.len() < other.len() && self.iter().all(|e| other.contains(e))
    }

    /// Returns true if every member of `other` is a member of `self`.
    pub fn is_superset(&self, other: &LinkedSet<T>) -> bool {
        other.is_subset(self)
    }

    /// Returns true if `other` is a subset of `self` and strictly smaller.
    pub fn is_proper_superset(&self, other: &LinkedSet<T>) -> bool {
        other.is_proper_subset(self)
    }

    /// A cursor positioned at the oldest element, or already exhausted if
    /// the set is empty. See [`LinkedSetCursor`].
    pub fn cursor(&self) -> LinkedSetCursor<T> {
        LinkedSetCursor::at_begin(self)
    }

    /// An exhausted cursor, usable as the far end for
    /// [`LinkedSetCursor::same_position`] loops.
    pub fn cursor_at_end(&self) -> LinkedSetCursor<T> {
        LinkedSetCursor::at_end(self)
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.list)
    }

    /// Checks internal invariants; meant for tests.
    #[doc(hidden)]
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.list.validate().map_err(|err| err.relabel(NAME))?;
        let elements: Vec<&T> = self.list.raw_iter().collect();
        for (i, a) in elements.iter().enumerate() {
            if elements[i + 1..].iter().any(|b| a == b) {
                return Err(ValidationError::new(
                    NAME,
                    "duplicate elements".to_owned(),
                ));
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

impl<T: Eq> Default for LinkedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Clone> Clone for LinkedSet<T> {
    /// Deep copy under a fresh identity; cursors onto the source do not
    /// follow the copy.
    fn clone(&self) -> Self {
        LinkedSet { list: self.list.clone() }
    }
}

impl<T: Eq> FromIterator<T> for LinkedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_elements(iter)
    }
}

impl<T: Eq> Extend<T> for LinkedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<T: Eq> PartialEq for LinkedSet<T> {
    /// Content equality; insertion order does not participate.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|e| other.contains(e))
    }
}

impl<T: Eq> Eq for LinkedSet<T> {}

impl<T: Eq + fmt::Display> fmt::Display for LinkedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("set[")?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str("]")
    }
}

impl<T: Eq + fmt::Debug> fmt::Debug for LinkedSet<T> {
    /// The internals dump: the chain plus counters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.list.fmt_debug(NAME, f)
    }
}
