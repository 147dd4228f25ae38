//! Symbol-to-code mapping derived from a Huffman tree.
//!
//! Codes are the root-to-leaf paths: 0 for a left edge, 1 for a right
//! edge. The inverse mapping (bits to symbol) is not materialized -
//! decoding walks the tree directly, which is both the simplest and the
//! only structure that handles arbitrary code lengths.

use crate::tree::{HuffmanNode, HuffmanTree};
use huffarc_core::error::{HuffArcError, Result};
use std::fmt;

/// A single prefix code: up to 128 path bits plus the path length.
///
/// 128 bits is unreachable in practice: a code of length `d` requires a
/// total symbol count growing like the Fibonacci sequence in `d`, which
/// exceeds `u64::MAX` well before `d` reaches 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Code {
    /// Path bits, right-aligned (the first edge is the highest bit).
    pub bits: u128,
    /// Number of meaningful bits.
    pub len: u8,
}

impl Code {
    /// Whether `self` is a strict prefix of `other`.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        self.len < other.len && (other.bits >> (other.len - self.len)) == self.bits
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..self.len).rev() {
            f.write_str(if (self.bits >> i) & 1 != 0 { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Symbol-to-code lookup table for encoding.
#[derive(Debug, Clone)]
pub struct CodeBook {
    codes: [Option<Code>; 256],
}

impl CodeBook {
    /// Derive the codebook by traversing `tree`.
    pub fn from_tree(tree: &HuffmanTree) -> Result<Self> {
        fn walk(
            node: &HuffmanNode,
            bits: u128,
            len: u8,
            codes: &mut [Option<Code>; 256],
        ) -> Result<()> {
            match node {
                HuffmanNode::Leaf { symbol, .. } => {
                    if len == 0 {
                        return Err(HuffArcError::invalid_tree(
                            "leaf at root would yield a zero-length code",
                        ));
                    }
                    codes[*symbol as usize] = Some(Code { bits, len });
                    Ok(())
                }
                HuffmanNode::Internal { left, right, .. } => {
                    if len == u8::MAX {
                        return Err(HuffArcError::invalid_tree("code length overflow"));
                    }
                    walk(left, bits << 1, len + 1, codes)?;
                    walk(right, (bits << 1) | 1, len + 1, codes)
                }
            }
        }

        let mut codes = [None; 256];
        walk(tree.root(), 0, 0, &mut codes)?;
        Ok(Self { codes })
    }

    /// The code assigned to `symbol`, if it is in the alphabet.
    pub fn code(&self, symbol: u8) -> Option<&Code> {
        self.codes[symbol as usize].as_ref()
    }

    /// All `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(s, c)| c.as_ref().map(|c| (s as u8, c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::FrequencyTable;

    fn codebook_for(data: &[u8]) -> CodeBook {
        let tree = HuffmanTree::from_frequencies(&FrequencyTable::from_bytes(data)).unwrap();
        CodeBook::from_tree(&tree).unwrap()
    }

    #[test]
    fn test_skewed_code_lengths() {
        // Tie-break contract: a=8 gets "1", b gets "00", c gets "01"
        let book = codebook_for(b"aaaaaaaabc");
        assert_eq!(book.code(b'a').unwrap().to_string(), "1");
        assert_eq!(book.code(b'b').unwrap().to_string(), "00");
        assert_eq!(book.code(b'c').unwrap().to_string(), "01");
        assert!(book.code(b'z').is_none());
    }

    #[test]
    fn test_single_symbol_one_bit() {
        let book = codebook_for(b"xxxx");
        let code = book.code(b'x').unwrap();
        assert_eq!(code.len, 1);
        assert_eq!(code.to_string(), "0");
    }

    #[test]
    fn test_prefix_property() {
        let book = codebook_for(b"this buffer exercises a moderately wide alphabet: 0123456789");
        let codes: Vec<(u8, Code)> = book.iter().map(|(s, c)| (s, *c)).collect();
        for (i, (_, a)) in codes.iter().enumerate() {
            for (j, (_, b)) in codes.iter().enumerate() {
                if i != j {
                    assert!(
                        !a.is_prefix_of(b),
                        "code {} is a prefix of {}",
                        a,
                        b
                    );
                }
            }
        }
    }

    #[test]
    fn test_all_256_symbols() {
        let data: Vec<u8> = (0u8..=255).collect();
        let book = codebook_for(&data);
        assert_eq!(book.iter().count(), 256);
        // uniform frequencies: every code is exactly 8 bits
        for (_, code) in book.iter() {
            assert_eq!(code.len, 8);
        }
    }

    #[test]
    fn test_code_display() {
        let code = Code { bits: 0b101, len: 3 };
        assert_eq!(code.to_string(), "101");
        let padded = Code { bits: 0b01, len: 2 };
        assert_eq!(padded.to_string(), "01");
    }
}
