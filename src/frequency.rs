//! Remaining-occurrence table used while encoding.

use std::collections::BTreeMap;

use crate::run::Run;

/// Ascending map from each distinct value to the number of its occurrences
/// not yet covered by an emitted token.
///
/// Entries are removed as soon as their count reaches zero, so encoding is
/// finished exactly when the table is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<i64, u64>,
}

impl FrequencyTable {
    /// Counts the occurrences of every value.
    pub fn from_values(values: &[i64]) -> Self {
        let mut counts = BTreeMap::new();
        for &value in values {
            *counts.entry(value).or_insert(0u64) += 1;
        }
        Self { counts }
    }

    /// Returns `true` when every occurrence has been consumed.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct values still present.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Remaining count for `value` (zero when absent).
    pub fn count(&self, value: i64) -> u64 {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// Ascending snapshot of the distinct values still present.
    pub fn keys(&self) -> Vec<i64> {
        self.counts.keys().copied().collect()
    }

    /// Smallest remaining count among the values of `run`.
    ///
    /// Values missing from the table count as zero.
    pub fn min_count(&self, run: &Run) -> u64 {
        run.values().map(|value| self.count(value)).min().unwrap_or(0)
    }

    /// Subtracts `amount` from every value of `run`, dropping the entries
    /// that reach zero.
    pub fn consume(&mut self, run: &Run, amount: u64) {
        for value in run.values() {
            if let Some(count) = self.counts.get_mut(&value) {
                *count = count.saturating_sub(amount);
                if *count == 0 {
                    self.counts.remove(&value);
                }
            }
        }
    }
}
