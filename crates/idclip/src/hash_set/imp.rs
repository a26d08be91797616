// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    errors::StrategyError,
    hash_set::{Iter, SetCursor},
    internal::ValidationError,
    strategy::{self, HashFn, HashSource, Unspecified},
    support::chain_table::{ChainTable, Keyed, TableConfig},
};
use core::{borrow::Borrow, fmt, marker::PhantomData};

pub(crate) const NAME: &str = "HashSet";

/// Internal wrapper giving set elements the key projection the shared
/// table engine expects: a set element is its own key.
pub(crate) struct Member<T>(pub(crate) T);

impl<T: Clone> Clone for Member<T> {
    fn clone(&self) -> Self {
        Member(self.0.clone())
    }
}

impl<T: fmt::Debug> fmt::Debug for Member<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: Eq> Keyed for Member<T> {
    type Key = T;

    fn key(&self) -> &T {
        &self.0
    }
}

/// A hash set over the same chained-bin engine as
/// [`HashMap`](crate::HashMap), with the same strategy resolution, growth
/// rule and cursor contract.
///
/// Elements need [`Eq`] but not [`core::hash::Hash`]; the hash function is
/// a plain `fn(&T) -> i64` fixed at construction.
///
/// # Examples
///
/// ```
/// use idclip::{hashers, HashSet};
///
/// let mut cheats: HashSet<String> = HashSet::hashed_by(hashers::str_hash);
/// assert!(cheats.insert("idkfa".to_owned()));
/// assert!(cheats.insert("idclip".to_owned()));
/// assert!(!cheats.insert("idkfa".to_owned()));
/// assert_eq!(cheats.len(), 2);
/// ```
pub struct HashSet<T: Eq, S = Unspecified> {
    table: ChainTable<Member<T>>,
    _strategy: PhantomData<fn() -> S>,
}

impl<T: Eq, S: HashSource<T>> HashSet<T, S> {
    /// Creates an empty set from the marker type's hash function.
    ///
    /// # Errors
    ///
    /// Fails with [`StrategyError`] if `S` supplies no hash function.
    pub fn new() -> Result<Self, StrategyError> {
        Self::build("new", None, TableConfig::default())
    }

    /// Creates an empty set, resolving the marker type's hash function
    /// against the supplied one.
    pub fn with_hasher(hash: fn(&T) -> i64) -> Result<Self, StrategyError> {
        Self::build("with_hasher", Some(HashFn(hash)), TableConfig::default())
    }

    /// Creates an empty set with an explicit bin configuration.
    pub fn with_config(config: TableConfig) -> Result<Self, StrategyError> {
        Self::build("with_config", None, config)
    }

    /// Creates an empty set with an explicit bin configuration and a
    /// supplied hash function.
    pub fn with_config_and_hasher(
        config: TableConfig,
        hash: fn(&T) -> i64,
    ) -> Result<Self, StrategyError> {
        Self::build("with_config_and_hasher", Some(HashFn(hash)), config)
    }

    /// Creates a set holding `elements`, inserted in order.
    pub fn from_elements<I>(elements: I) -> Result<Self, StrategyError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut set =
            Self::build("from_elements", None, TableConfig::default())?;
        set.insert_all(elements);
        Ok(set)
    }

    fn build(
        constructor: &'static str,
        supplied: Option<HashFn<T>>,
        config: TableConfig,
    ) -> Result<Self, StrategyError> {
        let hash = strategy::resolve(NAME, constructor, S::HASH_FN, supplied)?;
        Ok(HashSet {
            table: ChainTable::with_config(hash, config),
            _strategy: PhantomData,
        })
    }
}

impl<T: Eq> HashSet<T, Unspecified> {
    /// Creates an empty set from a hash function alone; infallible because
    /// the [`Unspecified`] marker has no function to disagree with.
    pub fn hashed_by(hash: fn(&T) -> i64) -> Self {
        Self::hashed_by_with_config(hash, TableConfig::default())
    }

    /// [`hashed_by`](Self::hashed_by) with an explicit bin configuration.
    pub fn hashed_by_with_config(
        hash: fn(&T) -> i64,
        config: TableConfig,
    ) -> Self {
        HashSet {
            table: ChainTable::with_config(HashFn(hash), config),
            _strategy: PhantomData,
        }
    }
}

impl<T: Eq, S> HashSet<T, S> {
    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if the set holds no elements.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the number of bins currently allocated.
    pub fn bins(&self) -> usize {
        self.table.bins_len()
    }

    /// Returns the load factor above which the bin array doubles.
    pub fn load_threshold(&self) -> f64 {
        self.table.load_threshold()
    }

    /// Returns the resolved hash function.
    pub fn hash_fn(&self) -> HashFn<T> {
        self.table.hash_fn()
    }

    /// Returns true if `element` is a member.
    pub fn contains(&self, element: &T) -> bool {
        self.table.find(element).is_some()
    }

    /// Returns true if every item of `elements` is a member.
    pub fn contains_all<I, Q>(&self, elements: I) -> bool
    where
        I: IntoIterator<Item = Q>,
        Q: Borrow<T>,
    {
        elements.into_iter().all(|q| self.contains(q.borrow()))
    }

    /// Inserts `element`; returns false if it was already a member.
    ///
    /// Counts as a structural mutation either way, like the map's `put`.
    pub fn insert(&mut self, element: T) -> bool {
        self.table.touch();
        if self.table.find(&element).is_some() {
            return false;
        }
        self.table.insert_new(Member(element));
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
    ///
    /// Unlike the map's `erase`, an absent element is not an error.
    pub fn erase(&mut self, element: &T) -> bool {
        match self.table.remove_key(element) {
            Some(_) => {
                self.table.touch();
                true
            }
            None => false,
        }
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
        let mut keep = self.table.fresh_like();
        for q in elements {
            let element = q.borrow();
            if keep.find(element).is_none() {
                keep.insert_new(Member(element.clone()));
            }
        }
        let mut erased = 0;
        let mut cur = SetCursor::at_begin(self);
        while !cur.is_exhausted() {
            let is_kept = {
                let element =
                    cur.get(self).expect("cursor stays fresh in retain_all");
                keep.find(element).is_some()
            };
            if !is_kept {
                cur.remove(self).expect("cursor stays fresh in retain_all");
                erased += 1;
            }
            cur.step(self).expect("cursor stays fresh in retain_all");
        }
        erased
    }

    /// Drops every element. The bin array keeps its current length.
    pub fn clear(&mut self) {
        self.table.touch();
        self.table.clear();
    }

    /// Returns true if every member of `self` is a member of `other`.
    pub fn is_subset<S2>(&self, other: &HashSet<T, S2>) -> bool {
        self.len() <= other.len() && self.iter().all(|e| other.contains(e))
    }

    /// Returns true if `self` is a subset of `other` and strictly smaller.
    pub fn is_proper_subset<S2>(&self, other: &HashSet<T, S2>) -> bool {
        self.len() < other.len() && self.iter().all(|e| other.contains(e))
    }

    /// Returns true if every member of `other` is a member of `self`.
    pub fn is_superset<S2>(&self, other: &HashSet<T, S2>) -> bool {
        other.is_subset(self)
    }

    /// Returns true if `other` is a subset of `self` and strictly smaller.
    pub fn is_proper_superset<S2>(&self, other: &HashSet<T, S2>) -> bool {
        other.is_proper_subset(self)
    }

    /// A cursor positioned at the first element, or already exhausted if
    /// the set is empty. See [`SetCursor`].
    pub fn cursor(&self) -> SetCursor<T> {
        SetCursor::at_begin(self)
    }

    /// An exhausted cursor, usable as the far end for
    /// [`SetCursor::same_position`] loops.
    pub fn cursor_at_end(&self) -> SetCursor<T> {
        SetCursor::at_end(self)
    }

    /// Iterates over elements in bin-then-chain order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.table)
    }

    /// Checks internal invariants; meant for tests.
    #[doc(hidden)]
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.table.validate().map_err(|err| err.relabel(NAME))
    }

    pub(crate) fn table(&self) -> &ChainTable<Member<T>> {
        &self.table
    }

    pub(crate) fn table_mut(&mut self) -> &mut ChainTable<Member<T>> {
        &mut self.table
    }

    pub(crate) fn into_table(self) -> ChainTable<Member<T>> {
        self.table
    }
}

impl<T: Eq + Clone, S: HashSource<T>> HashSet<T, S> {
    /// Copies the set under a possibly different hash function; when the
    /// resolved function differs from the source's, elements are re-hashed
    /// and re-inserted one by one.
    ///
    /// # Errors
    ///
    /// Fails with [`StrategyError`] if `S` supplies a function different
    /// from `hash`.
    pub fn clone_with_hasher(
        &self,
        hash: fn(&T) -> i64,
    ) -> Result<Self, StrategyError> {
        let hash = strategy::resolve(
            NAME,
            "clone_with_hasher",
            S::HASH_FN,
            Some(HashFn(hash)),
        )?;
        let table = if hash == self.table.hash_fn() {
            self.table.clone()
        } else {
            self.table.rebuilt_with(hash)
        };
        Ok(HashSet { table, _strategy: PhantomData })
    }
}

impl<T: Eq + Clone, S> Clone for HashSet<T, S> {
    /// Deep copy under a fresh identity; cursors onto the source do not
    /// follow the copy.
    fn clone(&self) -> Self {
        HashSet { table: self.table.clone(), _strategy: PhantomData }
    }
}

impl<T: Eq, S: HashSource<T>> FromIterator<T> for HashSet<T, S> {
    /// # Panics
    ///
    /// `FromIterator` cannot report a [`StrategyError`], so this panics if
    /// `S` supplies no hash function. Use
    /// [`from_elements`](HashSet::from_elements) to handle that case.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::build("from_iter", None, TableConfig::default())
            .unwrap_or_else(|err| panic!("{err}"));
        set.insert_all(iter);
        set
    }
}

impl<T: Eq, S> Extend<T> for HashSet<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<T: Eq, S1, S2> PartialEq<HashSet<T, S2>> for HashSet<T, S1> {
    /// Content equality; bin layout and hash identity do not participate.
    fn eq(&self, other: &HashSet<T, S2>) -> bool {
        self.len() == other.len() && self.iter().all(|e| other.contains(e))
    }
}

impl<T: Eq, S> Eq for HashSet<T, S> {}

impl<T: Eq + fmt::Display, S> fmt::Display for HashSet<T, S> {
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

impl<T: Eq + fmt::Debug, S> fmt::Debug for HashSet<T, S> {
    /// The internals dump: per-bin chains plus counters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.table.fmt_debug(NAME, f)
    }
}
