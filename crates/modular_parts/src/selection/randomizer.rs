//! The weighted "take one" draw.
//!
//! A draw copies the table into a list stably sorted by ascending weight, rolls a
//! uniform integer in `[0, sum)`, and walks the list subtracting each weight from the
//! roll until the roll falls inside an entry. The highest-weight entry (last after
//! sorting) is the fallback, and is returned without rolling when every weight is zero.
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::selection::source::UniformSource;
use crate::selection::table::WeightTable;

/// Fluent wrapper around a borrowed [`WeightTable`].
///
/// ```
/// use modular_parts::selection::{WeightTable, WeightedRandomizer};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let weights = WeightTable::new().with_entry("common", 9).with_entry("rare", 1);
/// let mut rng = StdRng::seed_from_u64(7);
/// let picked = WeightedRandomizer::new(&weights).take_one(&mut rng).unwrap();
/// assert!(*picked == "common" || *picked == "rare");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WeightedRandomizer<'a, K> {
    weights: &'a WeightTable<K>,
}

impl<'a, K> WeightedRandomizer<'a, K> {
    pub fn new(weights: &'a WeightTable<K>) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &'a WeightTable<K> {
        self.weights
    }

    /// Draw one key. See [`take_one`].
    pub fn take_one<S: UniformSource + ?Sized>(&self, source: &mut S) -> Result<&'a K> {
        take_one(self.weights, source)
    }
}

impl<'a, K> From<&'a WeightTable<K>> for WeightedRandomizer<'a, K> {
    fn from(weights: &'a WeightTable<K>) -> Self {
        Self::new(weights)
    }
}

/// Draw one key from `weights` with probability `weight / sum`.
///
/// Errors with [`Error::InvalidArgument`] for an empty table or any negative weight;
/// in both cases `source` is not consulted. A table whose weights are all zero yields
/// its last entry after sorting (ties keep insertion order) without consulting `source`.
pub fn take_one<'a, K, S>(weights: &'a WeightTable<K>, source: &mut S) -> Result<&'a K>
where
    S: UniformSource + ?Sized,
{
    let sum = weights.total_weight()?;
    let sorted = weights.sorted_ascending();
    let Some(&(fallback, _)) = sorted.last() else {
        return Err(Error::InvalidArgument(
            "cannot take one from an empty weight table".into(),
        ));
    };

    if sum == 0 {
        warn!(
            "All {} weights are zero; returning the last sorted entry.",
            sorted.len()
        );
        return Ok(fallback);
    }

    let mut roll = source.below(sum);
    debug!(entries = sorted.len(), sum, roll, "Weighted draw.");

    let mut selected = fallback;
    for &(key, weight) in &sorted {
        let weight = weight as u64;
        if roll < weight {
            selected = key;
            break;
        }
        roll -= weight;
    }

    Ok(selected)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::selection::source::FnSource;

    fn table(entries: &[(&'static str, i32)]) -> WeightTable<&'static str> {
        entries.iter().copied().collect()
    }

    #[test]
    fn single_entry_is_always_returned() {
        for weight in [0, 1, 5, 1_000_000] {
            let weights = table(&[("only", weight)]);
            let mut rng = StdRng::seed_from_u64(weight as u64);
            for _ in 0..32 {
                assert_eq!(*take_one(&weights, &mut rng).unwrap(), "only");
            }
        }
    }

    #[test]
    fn distribution_follows_weights() {
        let weights = table(&[("a", 1), ("b", 3)]);
        let mut rng = StdRng::seed_from_u64(0xC0FFEE);
        let trials = 100_000;
        let hits_b = (0..trials)
            .filter(|_| *take_one(&weights, &mut rng).unwrap() == "b")
            .count();
        let freq_b = hits_b as f64 / trials as f64;
        assert!((freq_b - 0.75).abs() < 0.01, "frequency of b was {freq_b}");
    }

    #[test]
    fn roll_is_resolved_over_ascending_weights() {
        // Sorted order is z(2), x(5), y(9); sum is 16.
        let weights = table(&[("x", 5), ("y", 9), ("z", 2)]);
        let expected = [
            (0, "z"),
            (1, "z"),
            (2, "x"),
            (6, "x"),
            (7, "y"),
            (15, "y"),
        ];
        for (roll, key) in expected {
            let mut source = FnSource::new(|upper| {
                assert_eq!(upper, 16);
                roll
            });
            assert_eq!(*take_one(&weights, &mut source).unwrap(), key);
        }
    }

    #[test]
    fn zero_weight_is_never_selected_under_positive_sum() {
        let weights = table(&[("a", 0), ("b", 5)]);
        for roll in 0..5 {
            let mut source = FnSource::new(|_| roll);
            assert_eq!(*take_one(&weights, &mut source).unwrap(), "b");
        }
    }

    #[test]
    fn all_zero_weights_return_last_sorted_entry_without_rolling() {
        let weights = table(&[("a", 0), ("b", 0)]);
        let calls = Cell::new(0);
        let mut source = FnSource::new(|_| {
            calls.set(calls.get() + 1);
            0
        });
        for _ in 0..10 {
            assert_eq!(*take_one(&weights, &mut source).unwrap(), "b");
        }
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn empty_table_is_invalid() {
        let weights: WeightTable<&str> = WeightTable::new();
        let mut rng = StdRng::seed_from_u64(1);
        let err = take_one(&weights, &mut rng).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn negative_weight_is_rejected_before_drawing() {
        let weights = table(&[("a", -1), ("b", 2)]);
        let calls = Cell::new(0);
        let mut source = FnSource::new(|_| {
            calls.set(calls.get() + 1);
            0
        });
        let err = take_one(&weights, &mut source).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn randomizer_wrapper_matches_free_function() {
        let weights = table(&[("a", 2), ("b", 2), ("c", 4)]);
        let randomizer = WeightedRandomizer::from(&weights);
        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);
        for _ in 0..64 {
            assert_eq!(
                randomizer.take_one(&mut rng_a).unwrap(),
                take_one(&weights, &mut rng_b).unwrap()
            );
        }
    }

    #[test]
    fn draw_does_not_reorder_the_table() {
        let weights = table(&[("heavy", 9), ("light", 1)]);
        let mut rng = StdRng::seed_from_u64(3);
        take_one(&weights, &mut rng).unwrap();
        assert_eq!(weights.entries(), &[("heavy", 9), ("light", 1)]);
    }
}
