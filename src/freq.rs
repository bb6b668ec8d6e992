//! Frequency accumulation over the valid alphabet.

use std::collections::HashMap;

use log::debug;

/// Owned symbol-frequency accumulator.
///
/// Built incrementally by the input collaborator; symbols handed to
/// [`FreqTable::record`] must already be lowercased and filtered to the
/// valid set (see [`crate::alphabet::normalize`]) — the table itself does
/// no validation.
#[derive(Debug, Default, Clone)]
pub struct FreqTable {
    counts: HashMap<char, u64>,
    total: u64,
}

impl FreqTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence of `symbol` and bumps the running total.
    pub fn record(&mut self, symbol: char) {
        *self.counts.entry(symbol).or_insert(0) += 1;
        self.total += 1;
    }

    pub fn count(&self, symbol: char) -> u64 {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    /// Total number of observations across all symbols.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct symbols observed.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// (symbol, count) pairs in unspecified order.
    pub fn entries(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }

    /// Shannon entropy of the observed distribution in bits per symbol.
    ///
    /// Returns 0.0 for an empty table.
    pub fn entropy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let total = self.total as f64;

        let entropy: f64 = self
            .counts
            .values()
            .map(|&count| {
                let p = count as f64 / total;
                -p * p.log2()
            })
            .sum();

        debug!(
            "calculated entropy: {:.4} bits/symbol (total samples: {})",
            entropy, self.total
        );
        entropy
    }
}
