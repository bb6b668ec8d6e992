//! The report collaborator: renders the ranked tables as a two-section
//! tab-delimited text report and writes it to a file.

use std::fs::File;
use std::io::{self, Write};

use log::{debug, info};

/// `count` as a percentage of `total`.
pub fn percentage(count: u64, total: u64) -> f64 {
    (count as f64 / total as f64) * 100.0
}

/// Renders the report text.
///
/// Section one lists symbols by descending frequency with their share of
/// the total to two decimal places; section two lists symbols by
/// descending code length; a trailing line carries the total-bits figure.
pub fn render_report(
    ranked_freq: &[(char, u64)],
    total: u64,
    ranked_codes: &[(char, String)],
    total_bits: u64,
) -> String {
    let mut out = String::new();

    out.push_str("Symbol\tFrequency\n");
    for &(symbol, count) in ranked_freq {
        out.push_str(&format!(
            "{}\t\t{:.2}%\n",
            symbol,
            percentage(count, total)
        ));
    }

    out.push('\n');
    out.push_str("Symbol\tHuffman Codes\n");
    for (symbol, code) in ranked_codes {
        out.push_str(&format!("{}\t\t{}\n", symbol, code));
    }

    out.push_str(&format!("\nTotal Bits: {}\n", total_bits));
    out
}

/// Writes the rendered report to `path`.
pub fn write_report(
    path: &str,
    ranked_freq: &[(char, u64)],
    total: u64,
    ranked_codes: &[(char, String)],
    total_bits: u64,
) -> io::Result<()> {
    info!("writing report to {}", path);
    let text = render_report(ranked_freq, total, ranked_codes, total_bits);
    debug!("report size: {} bytes", text.len());

    let mut file = File::create(path)?;
    file.write_all(text.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(1, 4), 25.0);
        assert_eq!(percentage(2, 3), 200.0 / 3.0);
    }

    #[test]
    fn test_render_layout() {
        let ranked_freq = vec![('a', 2), ('b', 1)];
        let ranked_codes = vec![('b', "0".to_string()), ('a', "1".to_string())];

        let text = render_report(&ranked_freq, 3, &ranked_codes, 2);
        let expected = "Symbol\tFrequency\n\
                        a\t\t66.67%\n\
                        b\t\t33.33%\n\
                        \n\
                        Symbol\tHuffman Codes\n\
                        b\t\t0\n\
                        a\t\t1\n\
                        \n\
                        Total Bits: 2\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_percentages_sum_to_about_100() {
        let ranked_freq = vec![('a', 5), ('b', 2), ('c', 1)];
        let total = 8;
        let sum: f64 = ranked_freq
            .iter()
            .map(|&(_, count)| percentage(count, total))
            .sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }
}
