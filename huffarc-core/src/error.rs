//! Error types for HuffArc operations.
//!
//! One error enum covers the whole stack: container format validation,
//! Huffman tree structure errors, payload truncation, and caller input
//! validation. Archive-level failures carry the entry index and name so
//! the calling shell can report which file was at fault.

use std::io;
use thiserror::Error;

/// The main error type for HuffArc operations.
#[derive(Debug, Error)]
pub enum HuffArcError {
    /// I/O error from the calling shell.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid magic number in the archive header.
    #[error("Invalid magic number: expected {expected:02x?}, found {found:02x?}")]
    InvalidMagic {
        /// Expected magic bytes.
        expected: Vec<u8>,
        /// Actual magic bytes found.
        found: Vec<u8>,
    },

    /// Archive format version not understood by this build.
    #[error("Unsupported format version: {version}")]
    UnsupportedVersion {
        /// The version byte found in the archive.
        version: u8,
    },

    /// Invalid header field or inconsistent entry metadata.
    #[error("Invalid header: {message}")]
    InvalidHeader {
        /// Description of the header error.
        message: String,
    },

    /// Malformed serialized Huffman tree.
    #[error("Invalid Huffman tree: {message}")]
    InvalidTree {
        /// Description of the structural problem.
        message: String,
    },

    /// Ran out of input before the declared amount of data.
    #[error("Unexpected end of data: expected {expected} more bits")]
    UnexpectedEof {
        /// Number of bits that were expected but not available.
        expected: u64,
    },

    /// Payload bit stream ended before the declared symbol count.
    #[error("Truncated payload: decoded {decoded} of {expected} symbols")]
    TruncatedPayload {
        /// Number of symbols the entry declared.
        expected: u64,
        /// Number of symbols actually decoded.
        decoded: u64,
    },

    /// An archive entry was submitted without a name.
    #[error("Entry {index} has an empty name")]
    EmptyEntryName {
        /// Zero-based index of the offending entry.
        index: usize,
    },

    /// The same symbol appeared twice in caller-supplied frequency pairs.
    #[error("Duplicate symbol in frequency pairs: {symbol:#04x}")]
    DuplicateSymbol {
        /// The repeated symbol.
        symbol: u8,
    },

    /// No symbols with a non-zero count were supplied.
    #[error("Empty alphabet: no symbols with non-zero frequency")]
    EmptyAlphabet,

    /// A failure while processing one archive entry, with its identity.
    #[error("Entry {index} ({name}): {source}")]
    Entry {
        /// Zero-based index of the entry within the archive.
        index: usize,
        /// Entry name, if it was parsed before the failure.
        name: String,
        /// The underlying error.
        source: Box<HuffArcError>,
    },
}

/// Result type alias for HuffArc operations.
pub type Result<T> = std::result::Result<T, HuffArcError>;

impl HuffArcError {
    /// Create an invalid magic error.
    pub fn invalid_magic(expected: impl Into<Vec<u8>>, found: impl Into<Vec<u8>>) -> Self {
        Self::InvalidMagic {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create an invalid header error.
    pub fn invalid_header(message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            message: message.into(),
        }
    }

    /// Create an invalid tree error.
    pub fn invalid_tree(message: impl Into<String>) -> Self {
        Self::InvalidTree {
            message: message.into(),
        }
    }

    /// Create an unexpected EOF error.
    pub fn unexpected_eof(expected: u64) -> Self {
        Self::UnexpectedEof { expected }
    }

    /// Create a truncated payload error.
    pub fn truncated_payload(expected: u64, decoded: u64) -> Self {
        Self::TruncatedPayload { expected, decoded }
    }

    /// Wrap an error with the identity of the archive entry it occurred in.
    pub fn in_entry(self, index: usize, name: impl Into<String>) -> Self {
        Self::Entry {
            index,
            name: name.into(),
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HuffArcError::invalid_magic(vec![0x48, 0x46], vec![0x50, 0x4B]);
        assert!(err.to_string().contains("Invalid magic"));

        let err = HuffArcError::truncated_payload(100, 42);
        assert!(err.to_string().contains("42 of 100"));

        let err = HuffArcError::EmptyEntryName { index: 3 };
        assert!(err.to_string().contains("Entry 3"));
    }

    #[test]
    fn test_entry_context() {
        let err = HuffArcError::unexpected_eof(8).in_entry(1, "b.txt");
        let msg = err.to_string();
        assert!(msg.contains("Entry 1 (b.txt)"));
        assert!(msg.contains("Unexpected end of data"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: HuffArcError = io_err.into();
        assert!(matches!(err, HuffArcError::Io(_)));
    }
}
