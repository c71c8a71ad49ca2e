//! Runs of consecutive integers.
//!
//! A `Run` is never empty and its values always increase by exactly one,
//! so it is fully described by its first and last value.

use std::ops::RangeInclusive;

/// A non-empty run of strictly consecutive integers, `start..=end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    start: i64,
    end: i64,
}

impl Run {
    /// Starts a run containing only `start`.
    pub fn new(start: i64) -> Self {
        Self { start, end: start }
    }

    /// Appends `value` if it is exactly one greater than the current end.
    ///
    /// Returns `false` (leaving the run untouched) for any other value,
    /// including when the end is `i64::MAX`.
    pub fn try_extend(&mut self, value: i64) -> bool {
        if self.end.checked_add(1) == Some(value) {
            self.end = value;
            true
        } else {
            false
        }
    }

    /// First value of the run.
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Last value of the run.
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Number of values in the run.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> u128 {
        u128::from(self.end.abs_diff(self.start)) + 1
    }

    /// All values of the run in ascending order.
    pub fn values(&self) -> RangeInclusive<i64> {
        self.start..=self.end
    }
}
