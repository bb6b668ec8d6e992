//! Ordering of the frequency and code tables for reporting.
//!
//! Both rankings are pure: they copy out of the underlying table and sort
//! the copy. Ties break by symbol ascending so repeated runs agree.

use crate::freq::FreqTable;
use crate::huffman::CodeTable;

/// (symbol, count) pairs ordered by count descending.
pub fn rank_by_frequency(frequencies: &FreqTable) -> Vec<(char, u64)> {
    let mut ranked: Vec<(char, u64)> = frequencies.entries().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked
}

/// (symbol, code) pairs ordered by code length descending.
pub fn rank_by_code_length(codes: &CodeTable) -> Vec<(char, String)> {
    let mut ranked: Vec<(char, String)> = codes
        .iter()
        .map(|(&symbol, code)| (symbol, code.clone()))
        .collect();
    ranked.sort_by(|a, b| b.1.len().cmp(&a.1.len()).then(a.0.cmp(&b.0)));
    ranked
}
