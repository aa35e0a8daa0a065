//! Per-symbol code statistics.
//!
//! For every symbol with a leaf in the tree: its printable form, its
//! occurrence count, its code length, and the total bits it contributes
//! to the packed output. Formatting matches the classic compressor
//! diagnostic, one line per symbol:
//!
//! ```text
//! a: 5 x 2 bits = 10
//! 012: 1 x 9 bits = 9
//! ```
//!
//! Non-printable bytes and the end-of-stream sentinel render as 3-digit
//! octal escapes.

use std::fmt;

use crate::freq::{FrequencyTable, ALPHABET_SIZE};
use crate::tree::HuffmanTree;

/// Code statistics for one coded symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolReport {
    /// The symbol value (0–255 byte values, 256 the sentinel).
    pub symbol: u16,
    /// Occurrences tallied in the input.
    pub count: u64,
    /// Assigned code length in bits.
    pub bits: usize,
    /// `count * bits`: this symbol's contribution to the packed size.
    pub total_bits: u64,
}

impl fmt::Display for SymbolReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Printable means the ASCII range 0x20..=0x7e, space included.
        if (0x20..=0x7e).contains(&self.symbol) {
            write!(f, "{}", self.symbol as u8 as char)?;
        } else {
            write!(f, "{:03o}", self.symbol)?;
        }
        write!(f, ": {} x {} bits = {}", self.count, self.bits, self.total_bits)
    }
}

/// Statistics for every coded symbol, in ascending symbol order. The
/// sentinel always appears, with whatever count the table records for it.
pub fn report(freqs: &FrequencyTable, tree: &HuffmanTree) -> Vec<SymbolReport> {
    (0..ALPHABET_SIZE as u16)
        .filter_map(|symbol| {
            let bits = tree.code_len(symbol)?;
            let count = freqs.get(symbol);
            Some(SymbolReport {
                symbol,
                count,
                bits,
                total_bits: count * bits as u64,
            })
        })
        .collect()
}

/// Total packed payload size in bits implied by a report. Equals the
/// tree's weighted path length; the one terminator emission at end of
/// stream is the packer's to add.
pub fn total_payload_bits(lines: &[SymbolReport]) -> u64 {
    lines.iter().map(|l| l.total_bits).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::EOS_SYMBOL;

    #[test]
    fn test_report_covers_present_symbols_and_sentinel() {
        let freqs = FrequencyTable::count_bytes(b"aab");
        let tree = HuffmanTree::from_frequencies(&freqs);
        let lines = report(&freqs, &tree);
        let symbols: Vec<u16> = lines.iter().map(|l| l.symbol).collect();
        assert_eq!(symbols, vec![b'a' as u16, b'b' as u16, EOS_SYMBOL]);
    }

    #[test]
    fn test_line_totals() {
        let freqs = FrequencyTable::count_bytes(b"abracadabra");
        let tree = HuffmanTree::from_frequencies(&freqs);
        for line in report(&freqs, &tree) {
            assert_eq!(line.total_bits, line.count * line.bits as u64);
            assert_eq!(tree.code_len(line.symbol), Some(line.bits));
        }
    }

    #[test]
    fn test_display_printable() {
        let line = SymbolReport {
            symbol: b'a' as u16,
            count: 5,
            bits: 2,
            total_bits: 10,
        };
        assert_eq!(line.to_string(), "a: 5 x 2 bits = 10");
    }

    #[test]
    fn test_display_octal_escape() {
        let newline = SymbolReport {
            symbol: b'\n' as u16,
            count: 3,
            bits: 4,
            total_bits: 12,
        };
        assert_eq!(newline.to_string(), "012: 3 x 4 bits = 12");

        let eos = SymbolReport {
            symbol: EOS_SYMBOL,
            count: 0,
            bits: 9,
            total_bits: 0,
        };
        assert_eq!(eos.to_string(), "400: 0 x 9 bits = 0");
    }

    #[test]
    fn test_payload_matches_weighted_path_length() {
        let freqs = FrequencyTable::count_bytes(b"mississippi");
        let tree = HuffmanTree::from_frequencies(&freqs);
        let lines = report(&freqs, &tree);
        assert_eq!(total_payload_bits(&lines), tree.weighted_path_length());
    }
}
