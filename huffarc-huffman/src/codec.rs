//! Per-file encode/decode orchestration.
//!
//! Encoding: frequency table, tree, codebook, then each input byte's
//! code pushed onto an MSB-first bit writer. Decoding walks the tree
//! bit-by-bit from the root, emitting a symbol at each leaf, and stops
//! after exactly `original_len` symbols so trailing pad bits are never
//! misread as data.

use crate::codebook::CodeBook;
use crate::freq::FrequencyTable;
use crate::tree::{HuffmanNode, HuffmanTree};
use huffarc_core::bitstream::{BitReader, BitWriter};
use huffarc_core::error::{HuffArcError, Result};

/// Bit-packed encoded data plus its exact meaningful bit length.
///
/// The final byte may be partially filled; `bit_len` disambiguates the
/// padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPayload {
    /// Packed bits, MSB-first.
    pub data: Vec<u8>,
    /// Number of meaningful bits in `data`.
    pub bit_len: u64,
}

impl EncodedPayload {
    /// An empty payload (for empty input files).
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            bit_len: 0,
        }
    }
}

/// Encode a byte buffer.
///
/// Returns the packed payload and the tree needed to decode it. Empty
/// input produces an empty payload and no tree.
pub fn encode(input: &[u8]) -> Result<(EncodedPayload, Option<HuffmanTree>)> {
    if input.is_empty() {
        return Ok((EncodedPayload::empty(), None));
    }

    let table = FrequencyTable::from_bytes(input);
    let tree = HuffmanTree::from_frequencies(&table)?;
    let book = CodeBook::from_tree(&tree)?;

    let mut writer = BitWriter::with_capacity(input.len());
    for &byte in input {
        let code = book
            .code(byte)
            .expect("every input byte is in the derived alphabet");
        // u128-wide codes go out in MSB-first chunks of up to 32 bits
        let mut remaining = code.len;
        while remaining > 0 {
            let chunk = remaining.min(32);
            let shift = remaining - chunk;
            writer.write_bits((code.bits >> shift) as u32, chunk);
            remaining -= chunk;
        }
    }

    let (data, bit_len) = writer.finish();
    Ok((EncodedPayload { data, bit_len }, Some(tree)))
}

/// Decode `original_len` symbols from a payload using `tree`.
///
/// Fails with [`HuffArcError::TruncatedPayload`] if the bit stream runs
/// out before `original_len` symbols have been produced, and with
/// [`HuffArcError::InvalidHeader`] if meaningful bits remain after the
/// last symbol. `original_len` comes from untrusted archive metadata,
/// so it is checked against the payload before any allocation.
pub fn decode(payload: &EncodedPayload, tree: &HuffmanTree, original_len: u64) -> Result<Vec<u8>> {
    // Every symbol consumes at least one bit
    if original_len > payload.bit_len {
        return Err(HuffArcError::truncated_payload(original_len, 0));
    }

    let mut output = Vec::with_capacity(original_len as usize);
    let mut reader = BitReader::new(&payload.data, payload.bit_len);

    while (output.len() as u64) < original_len {
        let mut node = tree.root();
        loop {
            match node {
                HuffmanNode::Leaf { symbol, .. } => {
                    output.push(*symbol);
                    break;
                }
                HuffmanNode::Internal { left, right, .. } => {
                    let bit = reader.read_bit().map_err(|_| {
                        HuffArcError::truncated_payload(original_len, output.len() as u64)
                    })?;
                    node = if bit { right } else { left };
                }
            }
        }
    }

    if !reader.is_exhausted() {
        return Err(HuffArcError::invalid_header(
            "payload bits remain after the declared symbol count",
        ));
    }

    Ok(output)
}
