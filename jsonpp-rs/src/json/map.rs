//! Insertion-ordered associative container.
//!
//! Keys and values live in two index-aligned vectors. Lookups are linear
//! scans comparing keys by equality; nothing is hashed or sorted.
//!
//! `insert` always appends, so a map may hold the same key more than once.
//! Every lookup resolves to the first matching slot.

use std::borrow::Borrow;

/// A map that preserves insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<K, V> {
    keys: Vec<K>,
    values: Vec<V>,
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> OrderedMap<K, V> {
    /// Create an empty map.
    pub const fn new() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Number of slots (shadowed duplicates included).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the map has no slots.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Append a slot at the end. Existing slots with an equal key are kept.
    pub fn insert(&mut self, key: K, value: V) {
        self.keys.push(key);
        self.values.push(value);
    }

    /// Remove and return the last slot.
    pub fn pop(&mut self) -> Option<(K, V)> {
        match (self.keys.pop(), self.values.pop()) {
            (Some(k), Some(v)) => Some((k, v)),
            _ => None,
        }
    }

    /// Get the slot at `index` in insertion order.
    pub fn get_index(&self, index: usize) -> Option<(&K, &V)> {
        Some((self.keys.get(index)?, self.values.get(index)?))
    }

    /// Get the value at `index` mutably.
    pub fn get_index_mut(&mut self, index: usize) -> Option<&mut V> {
        self.values.get_mut(index)
    }

    /// Position of the first slot whose key equals `key`.
    pub fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.keys.iter().position(|k| k.borrow() == key)
    }

    /// Returns true if any slot has this key.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.position(key).is_some()
    }

    /// Returns true if any slot holds a value equal to `value`.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values.iter().any(|v| v == value)
    }

    /// Value of the first slot with this key.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.position(key).and_then(|i| self.values.get(i))
    }

    /// Mutable value of the first slot with this key.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let index = self.position(key)?;
        self.values.get_mut(index)
    }

    /// Value of the first slot with this key, appending a default slot when
    /// the key is missing.
    pub fn get_or_insert<Q>(&mut self, key: &Q) -> &mut V
    where
        K: Borrow<Q>,
        Q: PartialEq + ToOwned<Owned = K> + ?Sized,
        V: Default,
    {
        let index = match self.position(key) {
            Some(index) => index,
            None => {
                self.insert(key.to_owned(), V::default());
                self.values.len() - 1
            }
        };
        &mut self.values[index]
    }

    /// Iterate over slots in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.keys.iter().zip(self.values.iter())
    }

    /// Iterate over slots with mutable values.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&K, &mut V)> {
        self.keys.iter().zip(self.values.iter_mut())
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.keys.iter()
    }

    /// Values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.values.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<K, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = std::iter::Zip<std::vec::IntoIter<K>, std::vec::IntoIter<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter().zip(self.values)
    }
}
