//! Key/weight tables consumed by the weighted selector.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Relative spawn weight. Negative values are representable so they can be rejected at draw time.
pub type Weight = i32;

/// Insertion-ordered mapping from a caller-defined key to an integer weight.
///
/// Construction never validates weights; negative weights are reported by
/// [`WeightTable::total_weight`] and therefore by every draw. Inserting a key that
/// compares equal to an existing one replaces its weight in place, so the entry keeps
/// its first-seen position.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightTable<K> {
    entries: Vec<(K, Weight)>,
}

impl<K> Default for WeightTable<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K> WeightTable<K> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with room for `cap` entries.
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            entries: Vec::with_capacity(cap),
        }
    }

    /// Build from pairs whose keys are already known to be distinct, in O(n).
    ///
    /// Keys are not compared, so duplicates stay as separate entries. Prefer this over
    /// collecting when keys are unique by construction (indices, ids).
    pub fn from_distinct(entries: Vec<(K, Weight)>) -> Self {
        Self { entries }
    }

    /// All `(key, weight)` pairs in insertion order.
    pub fn entries(&self) -> &[(K, Weight)] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, Weight)> {
        self.entries.iter().map(|(k, w)| (k, *w))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all weights in insertion order.
    ///
    /// Returns [`Error::InvalidArgument`] if any weight is negative.
    pub fn total_weight(&self) -> Result<u64> {
        let mut sum = 0u64;
        for (index, &(_, weight)) in self.entries.iter().enumerate() {
            if weight < 0 {
                return Err(Error::InvalidArgument(format!(
                    "negative weight {weight} at entry {index}"
                )));
            }
            sum += weight as u64;
        }
        Ok(sum)
    }

    /// Borrowed entries stably sorted by ascending weight. Equal weights keep insertion order.
    pub fn sorted_ascending(&self) -> Vec<(&K, Weight)> {
        let mut sorted: Vec<(&K, Weight)> = self.iter().collect();
        sorted.sort_by_key(|&(_, weight)| weight);
        sorted
    }
}

impl<K: PartialEq> WeightTable<K> {
    /// Insert or replace the weight for `key`, returning the previous weight if any.
    ///
    /// Linear in the table length, so collecting `n` pairs is O(n²). Use
    /// [`WeightTable::from_distinct`] for large tables with unique keys.
    pub fn insert(&mut self, key: K, weight: Weight) -> Option<Weight> {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, weight)),
            None => {
                self.entries.push((key, weight));
                None
            }
        }
    }

    /// Builder form of [`WeightTable::insert`].
    pub fn with_entry(mut self, key: K, weight: Weight) -> Self {
        self.insert(key, weight);
        self
    }

    pub fn weight(&self, key: &K) -> Option<Weight> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|&(_, weight)| weight)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.weight(key).is_some()
    }
}

impl<K: PartialEq> FromIterator<(K, Weight)> for WeightTable<K> {
    fn from_iter<I: IntoIterator<Item = (K, Weight)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<K: PartialEq> Extend<(K, Weight)> for WeightTable<K> {
    fn extend<I: IntoIterator<Item = (K, Weight)>>(&mut self, iter: I) {
        for (key, weight) in iter {
            self.insert(key, weight);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_keys_replace_weight_in_place() {
        let mut table = WeightTable::new().with_entry("a", 1).with_entry("b", 2);
        assert_eq!(table.insert("a", 7), Some(1));
        assert_eq!(table.entries(), &[("a", 7), ("b", 2)]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn total_weight_is_independent_of_entry_order() {
        let forward: WeightTable<&str> = [("x", 5), ("y", 2), ("z", 9)].into_iter().collect();
        let reversed: WeightTable<&str> = [("z", 9), ("y", 2), ("x", 5)].into_iter().collect();
        assert_eq!(forward.total_weight().unwrap(), 16);
        assert_eq!(reversed.total_weight().unwrap(), 16);
    }

    #[test]
    fn total_weight_rejects_negative_entries() {
        let table: WeightTable<&str> = [("a", -1), ("b", 2)].into_iter().collect();
        let err = table.total_weight().unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(ref msg) if msg.contains("-1")));
    }

    #[test]
    fn empty_table_sums_to_zero() {
        let table: WeightTable<u8> = WeightTable::new();
        assert!(table.is_empty());
        assert_eq!(table.total_weight().unwrap(), 0);
    }

    #[test]
    fn sorted_ascending_keeps_insertion_order_on_ties() {
        let table: WeightTable<&str> = [("p", 3), ("q", 1), ("r", 3), ("s", 1)]
            .into_iter()
            .collect();
        let order: Vec<&str> = table.sorted_ascending().into_iter().map(|(k, _)| *k).collect();
        assert_eq!(order, vec!["q", "s", "p", "r"]);
        // Sorting works on a copy.
        assert_eq!(table.entries()[0], ("p", 3));
    }

    #[test]
    fn from_distinct_keeps_pairs_verbatim() {
        let pairs: Vec<(usize, Weight)> = (0..4096).map(|i| (i, (i % 7) as Weight)).collect();
        let table = WeightTable::from_distinct(pairs.clone());
        assert_eq!(table.entries(), pairs.as_slice());
        assert_eq!(table, pairs.into_iter().collect::<WeightTable<usize>>());
    }

    #[test]
    fn lookup_by_key() {
        let table = WeightTable::new().with_entry(10u32, 4);
        assert_eq!(table.weight(&10), Some(4));
        assert!(!table.contains_key(&11));
    }
}
