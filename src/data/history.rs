//! Rolling sample history backing the bar chart.

use std::collections::VecDeque;

use super::sample::Sample;

/// Number of samples retained; comfortably wider than any terminal.
pub const HISTORY_CAPACITY: usize = 400;

/// Fixed-capacity ring of samples, newest first.
///
/// Created full of [`Sample::Unknown`] placeholders so the length is
/// always exactly the capacity; pushing a sample at the front evicts
/// the oldest at the back. Consumers only read.
#[derive(Debug, Clone)]
pub struct History {
    samples: VecDeque<Sample>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Create a history pre-filled with placeholders.
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    /// Create a history with a custom capacity (mainly for tests).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: std::iter::repeat(Sample::Unknown).take(capacity).collect(),
            capacity,
        }
    }

    /// Insert the newest sample, evicting the oldest.
    pub fn push(&mut self, sample: Sample) {
        self.samples.push_front(sample);
        self.samples.truncate(self.capacity);
    }

    /// Fixed slot count; always equal to [`History::len`].
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of slots held (always the capacity).
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Histories are born full of placeholders, so this is never true
    /// for a non-zero capacity.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// All samples, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    /// The rendered window: skip the single newest sample, then take up
    /// to `n`. The offset keeps the newest reading off the chart's
    /// right border.
    pub fn window(&self, n: usize) -> impl Iterator<Item = &Sample> {
        self.samples.iter().skip(1).take(n)
    }
}
