//! # HuffArc Core
//!
//! Core components for the HuffArc archive library.
//!
//! This crate provides the fundamental building blocks shared by the
//! codec and container layers:
//!
//! - [`bitstream`]: MSB-first bit-level I/O with exact bit-length accounting
//! - [`varint`]: LEB128 length prefixes for the container format
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! HuffArc is a layered stack:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ L3: CLI shell (huffarc-cli)                 │
//! ├─────────────────────────────────────────────┤
//! │ L2: Container (huffarc-archive)             │
//! │     .hfa format, entry framing              │
//! ├─────────────────────────────────────────────┤
//! │ L1: Codec (huffarc-huffman)                 │
//! │     frequency → tree → codebook → payload   │
//! ├─────────────────────────────────────────────┤
//! │ L0: BitStream + varint (this crate)         │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use huffarc_core::bitstream::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bits(0b1011, 4);
//! let (data, bit_len) = writer.finish();
//!
//! let mut reader = BitReader::new(&data, bit_len);
//! assert_eq!(reader.read_bits(4).unwrap(), 0b1011);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod error;
pub mod varint;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter};
pub use error::{HuffArcError, Result};
pub use varint::{read_varint, varint_len, write_varint};
