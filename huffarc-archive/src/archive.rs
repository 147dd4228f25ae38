//! Archive assembly and disassembly.
//!
//! Each entry is compressed independently with its own Huffman tree,
//! so entries can be encoded in any order (or in parallel) and listed
//! without decoding their payloads.

use huffarc_core::error::{HuffArcError, Result};
use huffarc_huffman::codec;
use huffarc_huffman::tree::HuffmanTree;

use crate::format;

/// One file going into, or coming out of, an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveFile {
    /// Entry name, typically a relative path.
    pub name: String,
    /// Uncompressed contents.
    pub data: Vec<u8>,
}

impl ArchiveFile {
    /// Create an archive file from a name and its contents.
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }
}

/// Per-entry metadata, available without decoding payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    /// Entry name.
    pub name: String,
    /// Uncompressed size in bytes.
    pub original_size: u64,
    /// Bit length of the serialized tree shape.
    pub tree_bits: u64,
    /// Exact bit length of the encoded payload.
    pub payload_bits: u64,
    /// Total bytes this entry occupies in the archive.
    pub stored_size: u64,
}

impl EntryInfo {
    /// Compression ratio as a percentage of the original size.
    ///
    /// An empty file reports 0.0.
    pub fn compression_ratio(&self) -> f64 {
        if self.original_size == 0 {
            return 0.0;
        }
        (self.stored_size as f64 / self.original_size as f64) * 100.0
    }
}

/// Encode one named file into its serialized entry bytes.
fn encode_entry(index: usize, file: &ArchiveFile) -> Result<Vec<u8>> {
    if file.name.is_empty() {
        return Err(HuffArcError::EmptyEntryName { index });
    }

    let (payload, tree) = codec::encode(&file.data)
        .map_err(|e| e.in_entry(index, &file.name))?;
    let (tree_data, tree_bits) = match &tree {
        Some(tree) => tree.to_bits(),
        None => (Vec::new(), 0),
    };

    let mut out = Vec::new();
    format::write_entry(
        &mut out,
        &file.name,
        file.data.len() as u64,
        tree_bits,
        &tree_data,
        payload.bit_len,
        &payload.data,
    );
    Ok(out)
}

/// Encode a set of files into a complete archive.
///
/// An empty file list produces a valid archive containing only the
/// header. Entry order is preserved.
pub fn encode_archive(files: &[ArchiveFile]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    format::write_header(&mut out);
    for (index, file) in files.iter().enumerate() {
        out.extend_from_slice(&encode_entry(index, file)?);
    }
    Ok(out)
}

/// Encode a set of files into an archive, compressing entries in
/// parallel across worker threads.
///
/// Produces byte-identical output to [`encode_archive`].
#[cfg(feature = "parallel")]
pub fn encode_archive_parallel(files: &[ArchiveFile]) -> Result<Vec<u8>> {
    use rayon::prelude::*;

    let entries: Vec<Vec<u8>> = files
        .par_iter()
        .enumerate()
        .map(|(index, file)| encode_entry(index, file))
        .collect::<Result<_>>()?;

    let mut out = Vec::new();
    format::write_header(&mut out);
    for entry in &entries {
        out.extend_from_slice(entry);
    }
    Ok(out)
}

/// Decode a complete archive back into its files.
///
/// Each entry decodes with its own tree; a failure carries the entry
/// index and name of the file at fault.
pub fn decode_archive(data: &[u8]) -> Result<Vec<ArchiveFile>> {
    let mut pos = format::read_header(data)?;
    let mut files = Vec::new();
    let mut index = 0;

    while pos < data.len() {
        let (raw, next) = format::read_entry(data, pos)
            .map_err(|e| e.in_entry(index, "<unreadable>"))?;
        let contents = decode_entry(&raw).map_err(|e| e.in_entry(index, &raw.name))?;
        files.push(ArchiveFile {
            name: raw.name,
            data: contents,
        });
        pos = next;
        index += 1;
    }
    Ok(files)
}

/// Decode one parsed entry's payload.
fn decode_entry(raw: &format::RawEntry<'_>) -> Result<Vec<u8>> {
    if raw.original_len == 0 {
        return Ok(Vec::new());
    }
    let tree = HuffmanTree::from_bits(raw.tree_data, raw.tree_bits)?;
    let payload = huffarc_huffman::EncodedPayload {
        data: raw.payload_data.to_vec(),
        bit_len: raw.payload_bits,
    };
    codec::decode(&payload, &tree, raw.original_len)
}

/// List the entries of an archive without decoding any payloads.
pub fn scan_entries(data: &[u8]) -> Result<Vec<EntryInfo>> {
    let mut pos = format::read_header(data)?;
    let mut entries = Vec::new();
    let mut index = 0;

    while pos < data.len() {
        let (raw, next) = format::read_entry(data, pos)
            .map_err(|e| e.in_entry(index, "<unreadable>"))?;
        let stored_size = raw.stored_len();
        entries.push(EntryInfo {
            name: raw.name,
            original_size: raw.original_len,
            tree_bits: raw.tree_bits,
            payload_bits: raw.payload_bits,
            stored_size,
        });
        pos = next;
        index += 1;
    }
    Ok(entries)
}
