//! # HuffArc-Huffman: Pure Rust static Huffman codec
//!
//! Static per-symbol Huffman coding over byte alphabets (0-255):
//!
//! - [`freq`]: frequency analysis over raw buffers or explicit pairs
//! - [`tree`]: prefix-code tree construction with a deterministic
//!   tie-break, and compact pre-order shape serialization
//! - [`codebook`]: symbol-to-bit-string code derivation
//! - [`codec`]: per-file encode/decode orchestration
//! - [`describe`]: serializable tree descriptions for rendering
//!
//! The codec is a pure, synchronous computation over in-memory buffers:
//! no I/O, no shared state. Input is read fully into memory before
//! encoding (adaptive/streaming coding is a non-goal).
//!
//! ## Example
//!
//! ```rust
//! use huffarc_huffman::codec::{decode, encode};
//!
//! let original = b"abracadabra";
//! let (payload, tree) = encode(original).unwrap();
//! let tree = tree.unwrap();
//!
//! let decoded = decode(&payload, &tree, original.len() as u64).unwrap();
//! assert_eq!(decoded, original);
//! assert!(payload.bit_len < 8 * original.len() as u64);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod codebook;
pub mod codec;
pub mod describe;
pub mod freq;
pub mod tree;

pub use codebook::{Code, CodeBook};
pub use codec::{EncodedPayload, decode, encode};
pub use describe::{SymbolCode, TreeDescription, build_tree};
pub use freq::FrequencyTable;
pub use tree::{HuffmanNode, HuffmanTree};
