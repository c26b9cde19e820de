//! An association structure that remembers first-insertion order.
//!
//! The aggregate mappings promise a deterministic iteration order, and ties
//! in value-sorted output keep the order in which keys were first seen. A
//! plain `HashMap` cannot give that, so entries live in a `Vec` with a hash
//! index on the side.

use std::collections::HashMap;
use std::hash::Hash;

pub struct OrderedMap<K, V> {
    index: HashMap<K, usize>,
    entries: Vec<(K, V)>,
}

impl<K: Eq + Hash + Clone, V> OrderedMap<K, V> {
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Insert a value for a key. A new key goes to the end; an existing key
    /// keeps its position.
    pub fn insert(&mut self, key: K, value: V) {
        match self.index.get(&key).copied() {
            Some(i) => self.entries[i].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.index.get(key).map(|&i| &mut self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries, in the order their keys were first inserted.
    pub fn into_pairs(self) -> Vec<(K, V)> {
        self.entries
    }
}

impl<K: Eq + Hash + Clone, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_insertion_order() {
        let mut m = OrderedMap::new();
        m.insert("b", 1);
        m.insert("a", 2);
        m.insert("c", 3);
        m.insert("a", 4);
        assert_eq!(m.len(), 3);
        assert_eq!(m.into_pairs(), vec![("b", 1), ("a", 4), ("c", 3)]);
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut m = OrderedMap::new();
        m.insert("x", 1);
        assert!(m.contains(&"x"));
        assert!(!m.contains(&"y"));
        *m.get_mut(&"x").unwrap() += 10;
        assert!(m.get_mut(&"y").is_none());
        assert_eq!(m.into_pairs(), vec![("x", 11)]);
    }

    #[test]
    fn empty() {
        let m: OrderedMap<String, u64> = OrderedMap::new();
        assert!(m.is_empty());
        assert!(m.into_pairs().is_empty());
    }
}
