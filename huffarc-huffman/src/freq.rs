//! Symbol frequency analysis.
//!
//! A [`FrequencyTable`] maps byte symbols to occurrence counts. It can be
//! derived from a raw buffer (the compressor path) or from caller-supplied
//! symbol/frequency pairs (the visualizer path); both feed the same tree
//! construction, so visualized trees match real compression behavior.

use huffarc_core::error::{HuffArcError, Result};

/// Occurrence counts for the 256 byte symbols.
///
/// Symbols with count zero are treated as absent from the alphabet.
/// Invariant: the sum of counts equals the length of the source buffer.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    counts: [u64; 256],
    total: u64,
}

impl FrequencyTable {
    /// Count symbol occurrences in a byte buffer.
    ///
    /// An empty buffer yields an empty table.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut counts = [0u64; 256];
        for &byte in data {
            counts[byte as usize] += 1;
        }
        Self {
            counts,
            total: data.len() as u64,
        }
    }

    /// Build a table from explicit symbol/frequency pairs.
    ///
    /// Zero-count pairs are omitted, matching the absence of unseen
    /// symbols in a byte-derived table. A symbol appearing twice is a
    /// caller input error, not a summing request.
    pub fn from_pairs(pairs: &[(u8, u64)]) -> Result<Self> {
        let mut counts = [0u64; 256];
        let mut seen = [false; 256];
        let mut total = 0u64;

        for &(symbol, count) in pairs {
            if seen[symbol as usize] {
                return Err(HuffArcError::DuplicateSymbol { symbol });
            }
            seen[symbol as usize] = true;
            counts[symbol as usize] = count;
            total += count;
        }

        Ok(Self { counts, total })
    }

    /// Occurrence count of `symbol`.
    pub fn count(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Total number of counted symbols (source buffer length).
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Whether no symbol has a non-zero count.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct symbols in the alphabet.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Non-zero `(symbol, count)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(s, &c)| (s as u8, c))
    }
}
