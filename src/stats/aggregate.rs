//! Averaging and ranking of a finished delay table

use super::DelayTable;

/// Characters ordered by ascending average delay.
///
/// `labels[i]` is the character whose average delay is `average_delays[i]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedSeries {
    pub average_delays: Vec<f64>,
    pub labels: Vec<String>,
}

impl RankedSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate over `(label, average)` pairs in ranked order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.average_delays.iter().copied())
    }
}

/// Average delay per character, in the table's traversal order
pub fn average_delays(table: &DelayTable) -> Vec<f64> {
    table.iter().map(|(_, record)| record.average_ms()).collect()
}

/// Rank characters by ascending average delay.
///
/// The sort is stable, so characters with equal averages keep the table's
/// ascending character order.
pub fn rank_delays(table: &DelayTable) -> RankedSeries {
    let mut pairs: Vec<(f64, char)> = table
        .iter()
        .map(|(symbol, record)| (record.average_ms(), *symbol))
        .collect();

    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

    let (average_delays, labels): (Vec<f64>, Vec<String>) = pairs
        .into_iter()
        .map(|(avg, symbol)| (avg, symbol.to_string()))
        .unzip();

    RankedSeries {
        average_delays,
        labels,
    }
}
