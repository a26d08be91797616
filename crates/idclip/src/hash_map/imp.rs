// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    entry::Entry,
    errors::{KeyError, StrategyError},
    hash_map::{Iter, IterMut, MapCursor},
    internal::ValidationError,
    strategy::{self, HashFn, HashSource, Unspecified},
    support::chain_table::{ChainTable, TableConfig},
};
use core::{fmt, marker::PhantomData, mem};

pub(crate) const NAME: &str = "HashMap";

/// A hash map of separately-chained bins with caller-supplied hashing and
/// detached, fail-fast cursors.
///
/// Keys need [`Eq`] but not [`core::hash::Hash`]: hashing is a plain
/// `fn(&K) -> i64`, fixed at construction. The function can come from the
/// strategy marker parameter `S` (see [`HashSource`]) or from a constructor
/// argument; construction fails if neither channel supplies one, or if both
/// do and they disagree. The bin array starts at one bin and doubles
/// whenever an insert would push the element-per-bin ratio over the load
/// threshold; existing nodes are relinked under the wider compression, not
/// reallocated.
///
/// Every structural mutation — and every [`put`](Self::put), even an
/// overwrite — increments an internal modification count. Outstanding
/// [`MapCursor`]s compare their own count against it on every operation and
/// fail rather than walk a table that shifted underneath them; see
/// [`MapCursor`] for the one sanctioned way to erase mid-iteration.
///
/// # Examples
///
/// ```
/// use idclip::{hashers, HashMap};
///
/// let mut scores: HashMap<String, u32> = HashMap::hashed_by(hashers::str_hash);
/// scores.put("doom".to_owned(), 100);
/// scores.put("quake".to_owned(), 95);
/// assert_eq!(scores.get(&"doom".to_owned()), Some(&100));
///
/// // Overwrites hand back the previous value.
/// assert_eq!(scores.put("doom".to_owned(), 110), Some(100));
/// assert_eq!(scores.len(), 2);
/// ```
pub struct HashMap<K: Eq, V, S = Unspecified> {
    table: ChainTable<Entry<K, V>>,
    _strategy: PhantomData<fn() -> S>,
}

impl<K: Eq, V, S: HashSource<K>> HashMap<K, V, S> {
    /// Creates an empty map from the marker type's hash function.
    ///
    /// # Errors
    ///
    /// Fails with [`StrategyError`] if `S` supplies no hash function.
    pub fn new() -> Result<Self, StrategyError> {
        Self::build("new", None, TableConfig::default())
    }

    /// Creates an empty map, resolving the marker type's hash function
    /// against the supplied one.
    ///
    /// # Errors
    ///
    /// Fails with [`StrategyError`] if `S` supplies a different function.
    pub fn with_hasher(hash: fn(&K) -> i64) -> Result<Self, StrategyError> {
        Self::build("with_hasher", Some(HashFn(hash)), TableConfig::default())
    }

    /// Creates an empty map with an explicit bin configuration.
    pub fn with_config(config: TableConfig) -> Result<Self, StrategyError> {
        Self::build("with_config", None, config)
    }

    /// Creates an empty map with an explicit bin configuration and a
    /// supplied hash function.
    pub fn with_config_and_hasher(
        config: TableConfig,
        hash: fn(&K) -> i64,
    ) -> Result<Self, StrategyError> {
        Self::build("with_config_and_hasher", Some(HashFn(hash)), config)
    }

    /// Creates a map holding `entries`, inserted in order.
    pub fn from_entries<I>(entries: I) -> Result<Self, StrategyError>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = Self::build("from_entries", None, TableConfig::default())?;
        map.put_all(entries);
        Ok(map)
    }

    fn build(
        constructor: &'static str,
        supplied: Option<HashFn<K>>,
        config: TableConfig,
    ) -> Result<Self, StrategyError> {
        let hash = strategy::resolve(NAME, constructor, S::HASH_FN, supplied)?;
        Ok(HashMap {
            table: ChainTable::with_config(hash, config),
            _strategy: PhantomData,
        })
    }
}

impl<K: Eq, V> HashMap<K, V, Unspecified> {
    /// Creates an empty map from a hash function alone.
    ///
    /// Only available with the [`Unspecified`] marker, which makes it
    /// infallible: there is no type-level function to disagree with.
    pub fn hashed_by(hash: fn(&K) -> i64) -> Self {
        Self::hashed_by_with_config(hash, TableConfig::default())
    }

    /// [`hashed_by`](Self::hashed_by) with an explicit bin configuration.
    pub fn hashed_by_with_config(
        hash: fn(&K) -> i64,
        config: TableConfig,
    ) -> Self {
        HashMap {
            table: ChainTable::with_config(HashFn(hash), config),
            _strategy: PhantomData,
        }
    }
}

impl<K: Eq, V, S> HashMap<K, V, S> {
    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if the map holds no entries.
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
    pub fn hash_fn(&self) -> HashFn<K> {
        self.table.hash_fn()
    }

    /// Returns true if `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.table.find(key).is_some()
    }

    /// Returns true if any entry holds `value`. Linear scan.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.table.raw_iter().any(|entry| entry.value == *value)
    }

    /// Returns the value under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.table.find(key).map(|nk| &self.table.element(nk).value)
    }

    /// Returns the value under `key`, mutably.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let nk = self.table.find(key)?;
        Some(&mut self.table.element_mut(nk).value)
    }

    /// Inserts `value` under `key`, returning the previous value if the key
    /// was already present.
    ///
    /// Every `put` counts as a structural mutation, overwrite or not:
    /// outstanding cursors go stale either way.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        self.table.touch();
        match self.table.find(&key) {
            Some(nk) => {
                let slot = &mut self.table.element_mut(nk).value;
                Some(mem::replace(slot, value))
            }
            None => {
                self.table.insert_new(Entry::new(key, value));
                None
            }
        }
    }

    /// Puts every pair in `entries`; returns how many were processed.
    pub fn put_all<I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut count = 0;
        for (key, value) in entries {
            self.put(key, value);
            count += 1;
        }
        count
    }

    /// Removes `key`, returning its value.
    ///
    /// The key is consumed; if it is not present, it comes back inside the
    /// [`KeyError`].
    pub fn erase(&mut self, key: K) -> Result<V, KeyError<K>> {
        match self.table.remove_key(&key) {
            Some(entry) => {
                self.table.touch();
                Ok(entry.value)
            }
            None => Err(KeyError::new(NAME, "erase", key)),
        }
    }

    /// Returns the value under `key`, first inserting `V::default()` if the
    /// key is absent.
    pub fn get_or_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        let nk = match self.table.find(&key) {
            Some(nk) => nk,
            None => {
                self.table.touch();
                self.table.insert_new(Entry::new(key, V::default()))
            }
        };
        &mut self.table.element_mut(nk).value
    }

    /// Drops every entry. The bin array keeps its current length.
    pub fn clear(&mut self) {
        self.table.touch();
        self.table.clear();
    }

    /// A cursor positioned at the first element, or already exhausted if
    /// the map is empty.
    pub fn cursor(&self) -> MapCursor<K, V> {
        MapCursor::at_begin(self)
    }

    /// An exhausted cursor, usable as the far end for
    /// [`MapCursor::same_position`] loops.
    pub fn cursor_at_end(&self) -> MapCursor<K, V> {
        MapCursor::at_end(self)
    }

    /// Iterates over entries in bin-then-chain order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.table)
    }

    /// Iterates over `(&key, &mut value)` pairs, in arena order.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut::new(&mut self.table)
    }

    /// Checks internal invariants; meant for tests.
    #[doc(hidden)]
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.table.validate().map_err(|err| err.relabel(NAME))
    }

    pub(crate) fn table(&self) -> &ChainTable<Entry<K, V>> {
        &self.table
    }

    pub(crate) fn table_mut(&mut self) -> &mut ChainTable<Entry<K, V>> {
        &mut self.table
    }

    pub(crate) fn into_table(self) -> ChainTable<Entry<K, V>> {
        self.table
    }
}

impl<K: Eq + Clone, V: Clone, S: HashSource<K>> HashMap<K, V, S> {
    /// Copies the map under a possibly different hash function.
    ///
    /// The marker type's function is resolved against `hash`; when the
    /// winner differs from the source map's function, entries are re-hashed
    /// and re-inserted one by one rather than bulk-copied.
    ///
    /// # Errors
    ///
    /// Fails with [`StrategyError`] if `S` supplies a function different
    /// from `hash`.
    pub fn clone_with_hasher(
        &self,
        hash: fn(&K) -> i64,
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
        Ok(HashMap { table, _strategy: PhantomData })
    }
}

impl<K: Eq + Clone, V: Clone, S> Clone for HashMap<K, V, S> {
    /// Deep copy under a fresh identity; cursors onto the source do not
    /// follow the copy.
    fn clone(&self) -> Self {
        HashMap { table: self.table.clone(), _strategy: PhantomData }
    }
}

impl<K: Eq, V, S: HashSource<K>> FromIterator<(K, V)> for HashMap<K, V, S> {
    /// # Panics
    ///
    /// `FromIterator` cannot report a [`StrategyError`], so this panics if
    /// `S` supplies no hash function. Use
    /// [`from_entries`](HashMap::from_entries) to handle that case.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::build("from_iter", None, TableConfig::default())
            .unwrap_or_else(|err| panic!("{err}"));
        map.put_all(iter);
        map
    }
}

impl<K: Eq, V, S> Extend<(K, V)> for HashMap<K, V, S> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.put_all(iter);
    }
}

impl<K, V, S1, S2> PartialEq<HashMap<K, V, S2>> for HashMap<K, V, S1>
where
    K: Eq,
    V: PartialEq,
{
    /// Content equality: same keys mapped to equal values. Bin layout, load
    /// threshold and hash identity do not participate.
    fn eq(&self, other: &HashMap<K, V, S2>) -> bool {
        self.len() == other.len()
            && self.iter().all(|entry| other.get(&entry.key) == Some(&entry.value))
    }
}

impl<K: Eq, V: Eq, S> Eq for HashMap<K, V, S> {}

impl<K, V, S> fmt::Display for HashMap<K, V, S>
where
    K: Eq + fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("map[")?;
        for (i, entry) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{entry}")?;
        }
        f.write_str("]")
    }
}

impl<K, V, S> fmt::Debug for HashMap<K, V, S>
where
    K: Eq + fmt::Debug,
    V: fmt::Debug,
{
    /// The internals dump: per-bin chains plus counters, unlike the
    /// element-oriented `Display`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.table.fmt_debug(NAME, f)
    }
}

impl<K, V, S> core::ops::Index<&K> for HashMap<K, V, S>
where
    K: Eq + fmt::Debug,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if `key` is not present.
    fn index(&self, key: &K) -> &V {
        self.get(key).unwrap_or_else(|| {
            panic!("{}", KeyError::new(NAME, "index", key))
        })
    }
}
