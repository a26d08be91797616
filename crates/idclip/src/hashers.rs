// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Stock hash functions for common key types.
//!
//! All of them run foldhash with a fixed seed. A strategy function must be a
//! stable identity — the same key has to land in the same bin before and
//! after a rehash, and in any container built from the same function — so
//! per-instance random state is not an option here.

use core::hash::{BuildHasher, Hash};
use foldhash::fast::FixedState;

/// Hashes any [`Hash`] value.
///
/// This is the building block for the concrete functions below; use it to
/// define a strategy function for your own key type:
///
/// ```
/// use idclip::{hashers, HashMap};
///
/// fn point_hash(p: &(i64, i64)) -> i64 {
///     hashers::fold_hash(p)
/// }
///
/// let mut m = HashMap::hashed_by(point_hash);
/// m.put((3, 4), "corner");
/// assert_eq!(m.get(&(3, 4)), Some(&"corner"));
/// ```
pub fn fold_hash<T: Hash>(value: &T) -> i64 {
    FixedState::default().hash_one(value) as i64
}

/// Hash function for `String` keys.
pub fn str_hash(key: &String) -> i64 {
    fold_hash(key)
}

/// Hash function for `i64` keys.
pub fn int_hash(key: &i64) -> i64 {
    fold_hash(key)
}

/// Hash function for `(String, String)` keys, as used by graph edges.
pub fn pair_hash(key: &(String, String)) -> i64 {
    fold_hash(key)
}
