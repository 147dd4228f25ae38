//! # HuffArc-Archive: the `.hfa` container format
//!
//! A minimal self-describing container for Huffman-compressed files:
//!
//! - [`format`]: wire layout, header validation, entry framing
//! - [`archive`]: whole-archive encode, decode, and metadata listing
//!
//! Each entry carries its own serialized Huffman tree, so any entry
//! can be decoded in isolation and the archive holds no global state
//! beyond the five header bytes.
//!
//! ## Example
//!
//! ```rust
//! use huffarc_archive::{ArchiveFile, decode_archive, encode_archive};
//!
//! let files = vec![
//!     ArchiveFile::new("a.txt", b"hello".as_slice()),
//!     ArchiveFile::new("b.txt", b"world".as_slice()),
//! ];
//! let archive = encode_archive(&files).unwrap();
//! assert_eq!(decode_archive(&archive).unwrap(), files);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod archive;
pub mod format;

pub use archive::{ArchiveFile, EntryInfo, decode_archive, encode_archive, scan_entries};
#[cfg(feature = "parallel")]
pub use archive::encode_archive_parallel;
pub use format::{MAGIC, VERSION};
