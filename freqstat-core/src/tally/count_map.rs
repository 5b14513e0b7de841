use ahash::RandomState;
use std::collections::{BTreeMap, HashMap};

/// Hashed key -> count table. Iteration order is unspecified.
#[derive(Debug, Clone, Default)]
pub struct CountMap {
    counts: HashMap<String, u64, RandomState>,
}

impl CountMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, key: &str) {
        self.add(key, 1);
    }

    /// Adds `value` to the accumulator for `key`, creating it at zero first.
    ///
    /// Saturates at `u64::MAX` instead of wrapping.
    pub fn add(&mut self, key: &str, value: u64) {
        // Avoid allocating the key for entries that already exist.
        if let Some(count) = self.counts.get_mut(key) {
            *count = count.saturating_add(value);
        } else {
            self.counts.insert(key.to_owned(), value);
        }
    }

    pub fn get(&self, key: &str) -> Option<u64> {
        self.counts.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Key -> count table iterated in ascending key order.
#[derive(Debug, Clone, Default)]
pub struct OrderedCountMap {
    counts: BTreeMap<String, u64>,
}

impl OrderedCountMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, key: &str) {
        self.add(key, 1);
    }

    pub fn add(&mut self, key: &str, value: u64) {
        if let Some(count) = self.counts.get_mut(key) {
            *count = count.saturating_add(value);
        } else {
            self.counts.insert(key.to_owned(), value);
        }
    }

    pub fn get(&self, key: &str) -> Option<u64> {
        self.counts.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
