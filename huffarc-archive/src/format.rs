//! On-disk layout of the `.hfa` container.
//!
//! ```text
//! +-------+---------+-------------------+-------------------+-----
//! | magic | version | entry 0           | entry 1           | ...
//! | HFAR  | 0x01    |                   |                   |
//! +-------+---------+-------------------+-------------------+-----
//! ```
//!
//! Every entry is self-delimiting:
//!
//! ```text
//! name_len     varint    byte length of the UTF-8 name
//! name         bytes
//! original_len varint    uncompressed size in bytes
//! tree_bits    varint    bit length of the tree shape (0 for empty files)
//! tree         bytes     ceil(tree_bits / 8) bytes, zero-padded
//! payload_bits varint    exact bit length of the encoded payload
//! payload      bytes     ceil(payload_bits / 8) bytes, zero-padded
//! ```
//!
//! Entries follow each other until the buffer is exhausted, so the
//! container needs no central directory and no entry count field.
//! All multi-byte lengths are unsigned LEB128 varints.

use huffarc_core::error::{HuffArcError, Result};
use huffarc_core::varint::{read_varint, write_varint};

/// Magic bytes identifying a HuffArc archive.
pub const MAGIC: [u8; 4] = *b"HFAR";

/// Current format version.
pub const VERSION: u8 = 0x01;

/// Number of bytes needed to hold `bits` bits.
pub(crate) fn byte_len(bits: u64) -> usize {
    bits.div_ceil(8) as usize
}

/// One entry as read off the wire, with compressed fields still encoded.
#[derive(Debug)]
pub(crate) struct RawEntry<'a> {
    pub name: String,
    pub original_len: u64,
    pub tree_bits: u64,
    pub tree_data: &'a [u8],
    pub payload_bits: u64,
    pub payload_data: &'a [u8],
}

impl RawEntry<'_> {
    /// Total serialized size of this entry in bytes.
    pub fn stored_len(&self) -> u64 {
        use huffarc_core::varint::varint_len;
        (varint_len(self.name.len() as u64)
            + self.name.len()
            + varint_len(self.original_len)
            + varint_len(self.tree_bits)
            + self.tree_data.len()
            + varint_len(self.payload_bits)
            + self.payload_data.len()) as u64
    }
}

/// Write the archive header.
pub(crate) fn write_header(out: &mut Vec<u8>) {
    out.extend_from_slice(&MAGIC);
    out.push(VERSION);
}

/// Validate the header and return the offset of the first entry.
pub(crate) fn read_header(data: &[u8]) -> Result<usize> {
    if data.len() < MAGIC.len() {
        return Err(HuffArcError::invalid_magic(MAGIC, data));
    }
    if data[..MAGIC.len()] != MAGIC {
        return Err(HuffArcError::invalid_magic(MAGIC, &data[..MAGIC.len()]));
    }
    let Some(&version) = data.get(MAGIC.len()) else {
        return Err(HuffArcError::unexpected_eof(8));
    };
    if version != VERSION {
        return Err(HuffArcError::UnsupportedVersion { version });
    }
    Ok(MAGIC.len() + 1)
}

/// Serialize one entry from its already-encoded fields.
pub(crate) fn write_entry(
    out: &mut Vec<u8>,
    name: &str,
    original_len: u64,
    tree_bits: u64,
    tree_data: &[u8],
    payload_bits: u64,
    payload_data: &[u8],
) {
    write_varint(name.len() as u64, out);
    out.extend_from_slice(name.as_bytes());
    write_varint(original_len, out);
    write_varint(tree_bits, out);
    out.extend_from_slice(tree_data);
    write_varint(payload_bits, out);
    out.extend_from_slice(payload_data);
}

/// Read a varint-prefixed byte field, bounds-checked against the buffer.
fn read_sized(data: &[u8], pos: usize, len: usize) -> Result<&[u8]> {
    let end = pos
        .checked_add(len)
        .ok_or_else(|| HuffArcError::invalid_header("field length overflows the buffer"))?;
    if end > data.len() {
        return Err(HuffArcError::unexpected_eof(
            8 * (end - data.len()) as u64,
        ));
    }
    Ok(&data[pos..end])
}

/// Parse one entry starting at `pos`, without decoding the payload.
///
/// Returns the parsed entry and the offset just past it.
pub(crate) fn read_entry(data: &[u8], pos: usize) -> Result<(RawEntry<'_>, usize)> {
    let mut pos = pos;

    let (name_len, consumed) = read_varint(&data[pos..])?;
    pos += consumed;
    let name_bytes = read_sized(data, pos, name_len as usize)?;
    pos += name_bytes.len();
    let name = std::str::from_utf8(name_bytes)
        .map_err(|_| HuffArcError::invalid_header("entry name is not valid UTF-8"))?
        .to_string();
    if name.is_empty() {
        return Err(HuffArcError::invalid_header("entry name is empty"));
    }

    let (original_len, consumed) = read_varint(&data[pos..])?;
    pos += consumed;

    let (tree_bits, consumed) = read_varint(&data[pos..])?;
    pos += consumed;
    let tree_data = read_sized(data, pos, byte_len(tree_bits))?;
    pos += tree_data.len();

    let (payload_bits, consumed) = read_varint(&data[pos..])?;
    pos += consumed;
    let payload_data = read_sized(data, pos, byte_len(payload_bits))?;
    pos += payload_data.len();

    if original_len == 0 && (tree_bits != 0 || payload_bits != 0) {
        return Err(HuffArcError::invalid_header(
            "empty entry carries tree or payload bits",
        ));
    }
    if original_len != 0 && tree_bits == 0 {
        return Err(HuffArcError::invalid_header(
            "non-empty entry is missing its tree",
        ));
    }

    let entry = RawEntry {
        name,
        original_len,
        tree_bits,
        tree_data,
        payload_bits,
        payload_data,
    };
    Ok((entry, pos))
}
