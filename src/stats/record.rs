//! Per-character delay records

use std::collections::btree_map::{self, BTreeMap};

/// Accumulated delay for a single character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayRecord {
    /// Number of times the character was read
    pub count: u64,
    /// Sum of the waits before each read, in milliseconds
    pub total_delay_ms: u64,
}

impl DelayRecord {
    /// Create a record for the first occurrence of a character
    pub fn new(delay_ms: u64) -> Self {
        Self {
            count: 1,
            total_delay_ms: delay_ms,
        }
    }

    /// Add another occurrence
    pub fn add_sample(&mut self, delay_ms: u64) {
        self.count += 1;
        self.total_delay_ms += delay_ms;
    }

    /// Average delay in milliseconds
    pub fn average_ms(&self) -> f64 {
        self.total_delay_ms as f64 / self.count as f64
    }
}

/// Delay records keyed by character.
///
/// Iteration is ascending by character, so every traversal of the same
/// table visits records in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DelayTable {
    records: BTreeMap<char, DelayRecord>,
}

impl DelayTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `symbol` read after `delay_ms`
    pub fn record(&mut self, symbol: char, delay_ms: u64) {
        self.records
            .entry(symbol)
            .and_modify(|r| r.add_sample(delay_ms))
            .or_insert_with(|| DelayRecord::new(delay_ms));
    }

    pub fn get(&self, symbol: char) -> Option<&DelayRecord> {
        self.records.get(&symbol)
    }

    /// Number of distinct characters
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total number of characters recorded across all records
    pub fn total_count(&self) -> u64 {
        self.records.values().map(|r| r.count).sum()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, char, DelayRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a DelayTable {
    type Item = (&'a char, &'a DelayRecord);
    type IntoIter = btree_map::Iter<'a, char, DelayRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
