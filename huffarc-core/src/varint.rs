//! LEB128 variable-length integers for the container's length prefixes.
//!
//! Each byte carries 7 value bits, least-significant group first; the
//! high bit marks continuation. Small lengths (the common case for
//! filenames and tree descriptions) take a single byte.

use crate::error::{HuffArcError, Result};

/// Maximum encoded length of a `u64` varint (ceil(64 / 7) bytes).
pub const MAX_VARINT_LEN: usize = 10;

/// How many bytes are needed to encode `value`?
pub const fn varint_len(value: u64) -> usize {
    if value == 0 {
        1
    } else {
        (64 - value.leading_zeros() as usize).div_ceil(7)
    }
}

/// Append `value` to `out` as a LEB128 varint.
pub fn write_varint(value: u64, out: &mut Vec<u8>) {
    let mut v = value;
    loop {
        let byte = (v & 0x7F) as u8;
        v >>= 7;
        if v == 0 {
            out.push(byte);
            return;
        }
        out.push(byte | 0x80);
    }
}

/// Decode a LEB128 varint from the front of `buf`.
///
/// Returns `(value, bytes_consumed)` on success.
pub fn read_varint(buf: &[u8]) -> Result<(u64, usize)> {
    let mut value = 0u64;
    let mut shift = 0u32;

    for (i, &byte) in buf.iter().enumerate() {
        if i >= MAX_VARINT_LEN {
            break;
        }
        let group = u64::from(byte & 0x7F);
        // The tenth byte may only contribute the single remaining bit
        if shift == 63 && group > 1 {
            return Err(HuffArcError::invalid_header("varint overflows u64"));
        }
        value |= group << shift;
        if byte & 0x80 == 0 {
            return Ok((value, i + 1));
        }
        shift += 7;
    }

    if buf.len() >= MAX_VARINT_LEN {
        Err(HuffArcError::invalid_header("varint too long"))
    } else {
        Err(HuffArcError::unexpected_eof(8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(value: u64) -> usize {
        let mut buf = Vec::new();
        write_varint(value, &mut buf);
        assert_eq!(buf.len(), varint_len(value));
        let (decoded, consumed) = read_varint(&buf).unwrap();
        assert_eq!(decoded, value);
        assert_eq!(consumed, buf.len());
        consumed
    }

    #[test]
    fn test_single_byte() {
        for v in [0u64, 1, 63, 127] {
            assert_eq!(roundtrip(v), 1);
        }
    }

    #[test]
    fn test_multi_byte() {
        assert_eq!(roundtrip(128), 2);
        assert_eq!(roundtrip(16383), 2);
        assert_eq!(roundtrip(16384), 3);
        assert_eq!(roundtrip(u32::MAX as u64), 5);
        assert_eq!(roundtrip(u64::MAX), 10);
    }

    #[test]
    fn test_truncated_input() {
        assert!(read_varint(&[]).is_err());
        // continuation bit set but nothing follows
        assert!(read_varint(&[0x80]).is_err());
        assert!(read_varint(&[0xFF, 0xFF]).is_err());
    }

    #[test]
    fn test_overflow_rejected() {
        // 11 continuation bytes can never be a valid u64
        let buf = [0xFFu8; 11];
        assert!(read_varint(&buf).is_err());
        // 10 bytes whose last group exceeds the remaining bit
        let buf = [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F];
        assert!(read_varint(&buf).is_err());
    }

    #[test]
    fn test_extra_trailing_bytes_ignored() {
        let mut buf = Vec::new();
        write_varint(300, &mut buf);
        buf.extend_from_slice(&[0xAB, 0xCD]);
        let (value, consumed) = read_varint(&buf).unwrap();
        assert_eq!(value, 300);
        assert_eq!(consumed, 2);
    }
}
