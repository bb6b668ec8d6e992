//! Huffman tree construction and code assignment.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use log::{debug, trace};
use thiserror::Error;

use crate::freq::FreqTable;

pub type CodeTable = HashMap<char, String>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HuffmanError {
    /// No symbols with a non-zero count, so there is nothing to merge.
    #[error("empty frequency table: cannot build a tree")]
    EmptyFrequencyTable,
}

#[derive(Debug, Eq, PartialEq)]
pub enum Node {
    Leaf {
        symbol: char,
        freq: u64,
    },
    Internal {
        freq: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }
}

pub type HuffmanTree = Node;

#[derive(Eq, PartialEq)]
struct HeapNode {
    freq: u64,
    seq: u64,
    node: Box<Node>,
}

impl Ord for HeapNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior in BinaryHeap (which is
        // max-heap by default). Equal frequencies pop in insertion order
        // (FIFO via seq) so the assignment is reproducible.
        other.freq.cmp(&self.freq).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Builds the Huffman tree by greedy bottom-up merging.
///
/// Leaves are seeded in ascending symbol order; the two lowest-frequency
/// nodes are repeatedly merged, first-removed becoming the left child.
/// With a single distinct symbol no merge happens and the lone leaf is
/// the root. An empty table is a [`HuffmanError::EmptyFrequencyTable`].
pub fn build_huffman_tree(frequencies: &FreqTable) -> Result<Box<HuffmanTree>, HuffmanError> {
    if frequencies.is_empty() {
        return Err(HuffmanError::EmptyFrequencyTable);
    }

    debug!(
        "building huffman tree from {} unique symbols",
        frequencies.len()
    );

    let mut entries: Vec<(char, u64)> = frequencies.entries().collect();
    entries.sort_by_key(|&(symbol, _)| symbol);

    let mut heap = BinaryHeap::with_capacity(entries.len());
    let mut seq = 0u64;
    for (symbol, freq) in entries {
        heap.push(HeapNode {
            freq,
            seq,
            node: Box::new(Node::Leaf { symbol, freq }),
        });
        seq += 1;
    }
    debug!("initial heap size: {}", heap.len());

    while heap.len() > 1 {
        let (first, second) = match (heap.pop(), heap.pop()) {
            (Some(a), Some(b)) => (a, b),
            _ => return Err(HuffmanError::EmptyFrequencyTable),
        };

        let freq = first.freq + second.freq;
        let new_node = Node::Internal {
            freq,
            left: first.node,
            right: second.node,
        };
        heap.push(HeapNode {
            freq,
            seq,
            node: Box::new(new_node),
        });
        seq += 1;
    }

    debug!("tree construction complete");
    heap.pop()
        .map(|n| n.node)
        .ok_or(HuffmanError::EmptyFrequencyTable)
}

/// Walks the tree depth-first and returns the code table together with
/// the sum of code lengths across distinct symbols.
///
/// Left edges append `'0'`, right edges `'1'`. A lone-leaf tree yields
/// the empty string as that symbol's code and a total of zero. The total
/// counts each code length once, not weighted by occurrence count; see
/// [`weighted_bits`] for the true encoded size.
pub fn build_code_table(root: &Node) -> (CodeTable, u64) {
    let mut table = CodeTable::new();
    let mut path = String::new();
    let mut total_bits = 0u64;
    assign_codes(root, &mut path, &mut table, &mut total_bits);
    (table, total_bits)
}

fn assign_codes(node: &Node, path: &mut String, table: &mut CodeTable, total_bits: &mut u64) {
    match node {
        Node::Leaf { symbol, .. } => {
            trace!("assigning code to '{}': '{}'", symbol, path);
            *total_bits += path.len() as u64;
            table.insert(*symbol, path.clone());
        }
        Node::Internal { left, right, .. } => {
            path.push('0');
            assign_codes(left, path, table, total_bits);
            path.pop();
            path.push('1');
            assign_codes(right, path, table, total_bits);
            path.pop();
        }
    }
}

/// Frequency-weighted bit cost: the size of the input if every symbol
/// were replaced by its code.
pub fn weighted_bits(frequencies: &FreqTable, codes: &CodeTable) -> u64 {
    frequencies
        .entries()
        .map(|(symbol, count)| {
            count * codes.get(&symbol).map_or(0, |code| code.len() as u64)
        })
        .sum()
}
