use std::mem;

/// A naive, inefficient map that acts as an oracle for property-based tests.
///
/// Stored as a vector of pairs with linear scans. No hashing, no ordering,
/// no growth policy: nothing here can share a bug with the containers under
/// test.
#[derive(Clone, Debug)]
pub struct NaiveMap<K, V> {
    pairs: Vec<(K, V)>,
}

impl<K: PartialEq, V> NaiveMap<K, V> {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => Some(mem::replace(v, value)),
            None => {
                self.pairs.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.pairs.iter().position(|(k, _)| k == key)?;
        Some(self.pairs.remove(index).1)
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.pairs.iter().map(|(k, v)| (k, v))
    }

    /// The map's content as `(key, value)` pairs sorted by key, for
    /// comparing against containers with arbitrary iteration order.
    pub fn sorted_pairs(&self) -> Vec<(K, V)>
    where
        K: Ord + Clone,
        V: Clone,
    {
        let mut pairs = self.pairs.clone();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        pairs
    }
}

impl<K: PartialEq, V> Default for NaiveMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// The set counterpart of [`NaiveMap`]: a duplicate-free vector.
#[derive(Clone, Debug)]
pub struct NaiveSet<T> {
    elements: Vec<T>,
}

impl<T: PartialEq> NaiveSet<T> {
    pub fn new() -> Self {
        Self { elements: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn insert(&mut self, element: T) -> bool {
        if self.contains(&element) {
            return false;
        }
        self.elements.push(element);
        true
    }

    pub fn contains(&self, element: &T) -> bool {
        self.elements.contains(element)
    }

    pub fn remove(&mut self, element: &T) -> bool {
        match self.elements.iter().position(|e| e == element) {
            Some(index) => {
                self.elements.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.elements.iter()
    }

    pub fn sorted(&self) -> Vec<T>
    where
        T: Ord + Clone,
    {
        let mut elements = self.elements.clone();
        elements.sort();
        elements
    }
}

impl<T: PartialEq> Default for NaiveSet<T> {
    fn default() -> Self {
        Self::new()
    }
}
