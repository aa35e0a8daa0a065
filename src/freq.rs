//! Symbol alphabet and frequency tallying.
//!
//! The alphabet has 257 symbols: the 256 byte values plus one reserved
//! end-of-stream sentinel. The sentinel always participates in tree
//! construction, even at zero observed frequency, so every encoded stream
//! has a terminator code.
//!
//! The surrounding compressor makes two passes over its input: one to
//! populate a [`FrequencyTable`], one to emit packed bits. This module
//! covers the first pass only; the table must be complete before tree
//! construction begins.

use std::io::Read;
use std::ops::Index;

use crate::error::Result;

/// Number of symbols in the coding alphabet: 256 byte values plus the
/// end-of-stream sentinel.
pub const ALPHABET_SIZE: usize = 257;

/// The reserved end-of-stream sentinel symbol.
pub const EOS_SYMBOL: u16 = 256;

/// Occurrence counts for every symbol in the alphabet.
///
/// Indexed by symbol value: `0..=255` are byte values, `256` is the
/// sentinel. Counts are non-negative by construction.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    counts: [u64; ALPHABET_SIZE],
}

impl FrequencyTable {
    /// Create a table with every count zero.
    pub fn new() -> Self {
        Self {
            counts: [0; ALPHABET_SIZE],
        }
    }

    /// Record one occurrence of `byte`.
    pub fn tally(&mut self, byte: u8) {
        self.counts[byte as usize] += 1;
    }

    /// Tally every byte of `bytes`.
    pub fn count_bytes(bytes: &[u8]) -> Self {
        let mut table = Self::new();
        for &b in bytes {
            table.tally(b);
        }
        table
    }

    /// Tally an entire input stream.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut table = Self::new();
        for byte in reader.bytes() {
            table.tally(byte?);
        }
        Ok(table)
    }

    /// The count recorded for `symbol`.
    ///
    /// # Panics
    ///
    /// Panics if `symbol` is outside the 257-symbol alphabet.
    pub fn get(&self, symbol: u16) -> u64 {
        self.counts[symbol as usize]
    }

    /// Overwrite the count for `symbol`.
    ///
    /// # Panics
    ///
    /// Panics if `symbol` is outside the 257-symbol alphabet.
    pub fn set(&mut self, symbol: u16, count: u64) {
        self.counts[symbol as usize] = count;
    }

    /// Iterate over `(symbol, count)` pairs with nonzero counts, in
    /// ascending symbol order. The sentinel appears only if its count was
    /// explicitly set nonzero; tree construction includes it regardless.
    pub fn present(&self) -> impl Iterator<Item = (u16, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &c)| c > 0)
            .map(|(s, &c)| (s as u16, c))
    }

    /// Total number of tallied occurrences, sentinel included.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<u16> for FrequencyTable {
    type Output = u64;

    fn index(&self, symbol: u16) -> &u64 {
        &self.counts[symbol as usize]
    }
}
