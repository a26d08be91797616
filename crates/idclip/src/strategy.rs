// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Strategy injection: hash and ordering functions supplied by callers.
//!
//! Containers in this crate do not require [`core::hash::Hash`] or [`Ord`]
//! on their element types. Each container instead stores a plain function
//! pointer — a hash function for the tables, a less-than function for the
//! BST, a higher-priority function for the priority queues — fixed at
//! construction time.
//!
//! A strategy function can arrive through two channels:
//!
//! 1. the marker type parameter, via [`HashSource`], [`OrderSource`] or
//!    [`PrioritySource`] (the default marker, [`Unspecified`], supplies
//!    nothing), or
//! 2. a constructor argument.
//!
//! Construction resolves the two channels: if neither supplies a function
//! the container cannot operate and construction fails; if both supply one
//! and they disagree, construction also fails rather than silently picking
//! a side. The `clone_with_*` constructors follow the same rule, with the
//! source container standing in for the missing channel.
//!
//! Strategy values compare by function address. That is identity, not
//! behavioral, equality; it exists so that the "both channels disagree"
//! check is expressible, and it is not observable through any container
//! operation after construction.

use crate::errors::{StrategyError, StrategyErrorKind};
use core::fmt;

/// A key-hashing function, `fn(&K) -> i64`.
///
/// The table reduces the result to a bin with
/// `hash(key).unsigned_abs() % bins`, so "negative" hashes are fine. See
/// [`hashers`](crate::hashers) for stock implementations.
pub struct HashFn<K>(pub fn(&K) -> i64);

/// A strict-weak-order "less than" function, `fn(&K, &K) -> bool`.
///
/// Drives [`BstMap`](crate::BstMap).
pub struct LessThan<K>(pub fn(&K, &K) -> bool);

/// A strict "higher priority" function, `fn(&T, &T) -> bool`.
///
/// Drives [`HeapQueue`](crate::HeapQueue) and
/// [`LinkedPriorityQueue`](crate::LinkedPriorityQueue).
pub struct HigherPriority<T>(pub fn(&T, &T) -> bool);

impl<K> HashFn<K> {
    /// Applies the function to a key.
    #[inline]
    pub fn apply(&self, key: &K) -> i64 {
        (self.0)(key)
    }
}

impl<K> LessThan<K> {
    /// Returns true if `a` orders strictly before `b`.
    #[inline]
    pub fn apply(&self, a: &K, b: &K) -> bool {
        (self.0)(a, b)
    }
}

impl<T> HigherPriority<T> {
    /// Returns true if `a` has strictly higher priority than `b`.
    #[inline]
    pub fn apply(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

macro_rules! strategy_newtype_impls {
    ($name:ident) => {
        impl<T> $name<T> {
            fn addr(&self) -> *const () {
                self.0 as *const ()
            }
        }

        impl<T> Clone for $name<T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T> Copy for $name<T> {}

        impl<T> PartialEq for $name<T> {
            fn eq(&self, other: &Self) -> bool {
                // Identity, not behavioral, equality.
                self.addr() == other.addr()
            }
        }

        impl<T> Eq for $name<T> {}

        impl<T> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({:p})"), self.addr())
            }
        }
    };
}

strategy_newtype_impls!(HashFn);
strategy_newtype_impls!(LessThan);
strategy_newtype_impls!(HigherPriority);

/// Supplies an optional type-level hash function for keys of type `K`.
///
/// Implement this on a marker type and name it as the strategy parameter of
/// [`HashMap`](crate::HashMap) or [`HashSet`](crate::HashSet) to bake the
/// hash function into the container type:
///
/// ```
/// use idclip::{hashers, HashFn, HashMap, HashSource};
///
/// struct ByContent;
/// impl HashSource<String> for ByContent {
///     const HASH_FN: Option<HashFn<String>> = Some(HashFn(hashers::str_hash));
/// }
///
/// let mut m: HashMap<String, u32, ByContent> = HashMap::new().unwrap();
/// m.put("doom".to_owned(), 1993);
/// ```
pub trait HashSource<K> {
    /// The hash function this source supplies, if any.
    const HASH_FN: Option<HashFn<K>>;
}

/// Supplies an optional type-level ordering function for keys of type `K`.
pub trait OrderSource<K> {
    /// The less-than function this source supplies, if any.
    const LESS_THAN: Option<LessThan<K>>;
}

/// Supplies an optional type-level priority function for elements of type
/// `T`.
pub trait PrioritySource<T> {
    /// The higher-priority function this source supplies, if any.
    const HIGHER_PRIORITY: Option<HigherPriority<T>>;
}

/// The default strategy marker: no type-level function.
///
/// Containers whose strategy parameter is `Unspecified` must receive their
/// function through a constructor argument.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Unspecified;

impl<K> HashSource<K> for Unspecified {
    const HASH_FN: Option<HashFn<K>> = None;
}

impl<K> OrderSource<K> for Unspecified {
    const LESS_THAN: Option<LessThan<K>> = None;
}

impl<T> PrioritySource<T> for Unspecified {
    const HIGHER_PRIORITY: Option<HigherPriority<T>> = None;
}

/// Resolves the two strategy channels into the function a container will
/// store.
pub(crate) fn resolve<F: Copy + Eq>(
    container: &'static str,
    constructor: &'static str,
    type_level: Option<F>,
    supplied: Option<F>,
) -> Result<F, StrategyError> {
    match (type_level, supplied) {
        (None, None) => Err(StrategyError::new(
            container,
            constructor,
            StrategyErrorKind::NeitherSpecified,
        )),
        (Some(t), Some(s)) if t != s => Err(StrategyError::new(
            container,
            constructor,
            StrategyErrorKind::BothDifferent,
        )),
        (Some(t), _) => Ok(t),
        (None, Some(s)) => Ok(s),
    }
}
