//! Map construction helpers.

use std::collections::HashMap;
use std::hash::Hash;

/// Builds a `HashMap` from a fixed list of entries. Later duplicates win.
#[must_use]
pub fn of<K: Eq + Hash, V, const N: usize>(entries: [(K, V); N]) -> HashMap<K, V> {
    HashMap::from(entries)
}

/// Incremental builder for a `HashMap`.
#[derive(Debug, Clone)]
pub struct MapBuilder<K, V> {
    map: HashMap<K, V>,
}

impl<K: Eq + Hash, V> MapBuilder<K, V> {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self { map: HashMap::new() }
    }

    /// Adds an entry, replacing any previous value for `key`.
    #[must_use]
    pub fn entry(mut self, key: impl Into<K>, value: impl Into<V>) -> Self {
        self.map.insert(key.into(), value.into());
        self
    }

    /// Adds every entry from `entries`.
    #[must_use]
    pub fn extend<I: IntoIterator<Item = (K, V)>>(mut self, entries: I) -> Self {
        self.map.extend(entries);
        self
    }

    /// Finishes the map.
    #[must_use]
    pub fn build(self) -> HashMap<K, V> {
        self.map
    }
}

impl<K: Eq + Hash, V> Default for MapBuilder<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
