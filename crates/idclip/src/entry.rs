// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::support::chain_table::Keyed;
use core::fmt;

/// A key/value pair: the element type of [`HashMap`](crate::HashMap) and
/// [`BstMap`](crate::BstMap).
///
/// Both fields are public. The maps only ever hand out shared references to
/// whole entries; mutable access to a value goes through `get_mut`,
/// `get_or_default` or `iter_mut`, so an indexed key can never be rewritten
/// in place.
#[derive(Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    /// The lookup key.
    pub key: K,
    /// The value stored under the key.
    pub value: V,
}

impl<K, V> Entry<K, V> {
    /// Creates an entry.
    pub fn new(key: K, value: V) -> Self {
        Entry { key, value }
    }

    /// Converts the entry into a `(key, value)` tuple.
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Entry<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Entry { key, value }
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Entry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.key, self.value)
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Entry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}->{:?}", self.key, self.value)
    }
}

impl<K: Eq, V> Keyed for Entry<K, V> {
    type Key = K;

    fn key(&self) -> &K {
        &self.key
    }
}
