use std::env;
use std::fs;
use std::process;

use log::{debug, error, info};

use huffman_report::alphabet;
use huffman_report::freq::FreqTable;
use huffman_report::huffman::{build_code_table, build_huffman_tree, weighted_bits};
use huffman_report::rank::{rank_by_code_length, rank_by_frequency};
use huffman_report::report;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        error!("Usage: {} <input_file> <output_file>", args[0]);
        eprintln!("  📂 <input_file>:  path to the text to analyze.");
        eprintln!("  💾 <output_file>: path to write the report.");
        process::exit(1);
    }

    let input_filepath = &args[1];
    let output_filepath = &args[2];

    info!("--- Start Analysis ---");

    let text = match fs::read_to_string(input_filepath) {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read input file {}: {}", input_filepath, e);
            process::exit(1);
        }
    };

    let mut freq = FreqTable::new();
    for ch in text.chars() {
        if let Some(symbol) = alphabet::normalize(ch) {
            freq.record(symbol);
        }
    }
    debug!(
        "counted {} symbols ({} distinct) out of {} input characters",
        freq.total(),
        freq.len(),
        text.chars().count()
    );

    let tree = match build_huffman_tree(&freq) {
        Ok(tree) => tree,
        Err(e) => {
            error!("Could not build Huffman tree: {}", e);
            eprintln!("No countable characters in {} (alphabet is a-t and 0-9).", input_filepath);
            process::exit(1);
        }
    };

    let (codes, total_bits) = build_code_table(&tree);
    debug!("code table built ({} entries)", codes.len());

    let ranked_freq = rank_by_frequency(&freq);
    let ranked_codes = rank_by_code_length(&codes);

    if let Err(e) = report::write_report(
        output_filepath,
        &ranked_freq,
        freq.total(),
        &ranked_codes,
        total_bits,
    ) {
        error!("Could not write report: {}", e);
        process::exit(1);
    }

    let file_entropy = freq.entropy();

    println!(
        "\r\n✅ Report written.\n\
         📂 input file:    {} ({} symbols, {} distinct)\n\
         💾 output file:   {}\n\
         ℹ️ entropy:       {:.4} bits/symbol\n\
         🗜️ total bits:    {} (frequency-weighted: {})",
        input_filepath,
        freq.total(),
        freq.len(),
        output_filepath,
        file_entropy,
        total_bits,
        weighted_bits(&freq, &codes)
    );

    info!("--- End ---");
}
