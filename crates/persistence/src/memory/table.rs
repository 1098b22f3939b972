//! Append-only keyed table.

use std::collections::HashMap;
use std::hash::Hash;

/// Rows in insertion order with a key index.
///
/// Removal tombstones the slot so existing indices stay valid.
#[derive(Debug)]
pub struct Table<K, V> {
    rows: Vec<Option<V>>,
    index: HashMap<K, usize>,
}

impl<K, V> Default for Table<K, V> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, V> Table<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row. Returns `false` and leaves the table unchanged if the key exists.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key, self.rows.len());
        self.rows.push(Some(value));
        true
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.index.get(key).and_then(|&i| self.rows[i].as_ref())
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let i = *self.index.get(key)?;
        self.rows[i].as_mut()
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let i = self.index.remove(key)?;
        self.rows[i].take()
    }

    /// Live rows in insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &V> {
        self.rows.iter().filter_map(Option::as_ref)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
