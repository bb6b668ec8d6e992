//! End-to-end tests for the analysis pipeline: raw text -> frequency
//! table -> Huffman tree -> code table -> rankings -> written report.

use huffman_report::alphabet;
use huffman_report::freq::FreqTable;
use huffman_report::huffman::{HuffmanError, build_code_table, build_huffman_tree};
use huffman_report::rank::{rank_by_code_length, rank_by_frequency};
use huffman_report::report;

fn table_from_text(text: &str) -> FreqTable {
    let mut freq = FreqTable::new();
    for ch in text.chars() {
        if let Some(symbol) = alphabet::normalize(ch) {
            freq.record(symbol);
        }
    }
    freq
}

#[test]
fn test_full_pipeline() {
    // 'u', 'z' and '!' fall outside the alphabet; spaces are skipped;
    // uppercase folds into lowercase.
    let freq = table_from_text("aA bba uz! 0c0");

    assert_eq!(freq.total(), 8);
    assert_eq!(freq.count('a'), 3);
    assert_eq!(freq.count('b'), 2);
    assert_eq!(freq.count('0'), 2);
    assert_eq!(freq.count('c'), 1);
    assert_eq!(freq.count('u'), 0);

    let tree = build_huffman_tree(&freq).expect("tree build failed");
    let (codes, total_bits) = build_code_table(&tree);

    // Every distinct symbol receives exactly one code, and codes are
    // prefix-free.
    assert_eq!(codes.len(), freq.len());
    for (s1, c1) in &codes {
        for (s2, c2) in &codes {
            if s1 != s2 {
                assert!(!c2.starts_with(c1.as_str()));
            }
        }
    }

    let ranked_freq = rank_by_frequency(&freq);
    assert_eq!(ranked_freq[0], ('a', 3));
    for pair in ranked_freq.windows(2) {
        assert!(pair[0].1 >= pair[1].1);
    }

    let ranked_codes = rank_by_code_length(&codes);
    for pair in ranked_codes.windows(2) {
        assert!(pair[0].1.len() >= pair[1].1.len());
    }

    let sum_of_lengths: u64 = codes.values().map(|code| code.len() as u64).sum();
    assert_eq!(total_bits, sum_of_lengths);
}

#[test]
fn test_skipped_only_input_is_empty() {
    let freq = table_from_text("   UVWXYZ .,;!?  ");
    assert!(freq.is_empty());
    assert_eq!(
        build_huffman_tree(&freq).unwrap_err(),
        HuffmanError::EmptyFrequencyTable
    );
}

#[test]
fn test_single_symbol_pipeline() {
    let freq = table_from_text("ttttt");
    let tree = build_huffman_tree(&freq).expect("tree build failed");
    let (codes, total_bits) = build_code_table(&tree);

    assert_eq!(codes[&'t'], "");
    assert_eq!(total_bits, 0);
}

#[test]
fn test_report_written_to_file() {
    let freq = table_from_text("aab");
    let tree = build_huffman_tree(&freq).expect("tree build failed");
    let (codes, total_bits) = build_code_table(&tree);

    let ranked_freq = rank_by_frequency(&freq);
    let ranked_codes = rank_by_code_length(&codes);

    let path = std::env::temp_dir().join("huffreport_pipeline_test.dat");
    let path_str = path.to_str().expect("temp path is not utf-8");

    report::write_report(path_str, &ranked_freq, freq.total(), &ranked_codes, total_bits)
        .expect("report write failed");

    let written = std::fs::read_to_string(&path).expect("report read failed");
    std::fs::remove_file(&path).ok();

    assert!(written.starts_with("Symbol\tFrequency\n"));
    assert!(written.contains("a\t\t66.67%\n"));
    assert!(written.contains("b\t\t33.33%\n"));
    assert!(written.contains("Symbol\tHuffman Codes\n"));
    // Two leaves means two one-bit codes; b(1) pops first and takes '0'.
    assert!(written.contains("b\t\t0\n"));
    assert!(written.contains("a\t\t1\n"));
    assert!(written.ends_with("Total Bits: 2\n"));
}
