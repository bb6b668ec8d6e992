//! Symbol frequency analysis and Huffman code reporting over a fixed
//! alphabet (lowercase letters `a`-`t` and the decimal digits).
//!
//! The pipeline is a single linear pass: accumulate a [`freq::FreqTable`],
//! build the Huffman tree with [`huffman::build_huffman_tree`], walk it into
//! a code table with [`huffman::build_code_table`], order both tables with
//! [`rank`] and hand the results to [`report`]. Input filtering and file I/O
//! live in the binary; the library performs no I/O of its own.

pub mod alphabet;
pub mod freq;
pub mod huffman;
pub mod rank;
pub mod report;

pub use freq::FreqTable;
pub use huffman::{CodeTable, HuffmanError, Node, build_code_table, build_huffman_tree};
