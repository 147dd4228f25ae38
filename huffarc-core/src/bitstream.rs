//! MSB-first bit-level I/O over in-memory buffers.
//!
//! Huffman codes are variable-length bit strings, so both the serialized
//! tree shape and the encoded payload are written bit-by-bit. HuffArc
//! packs bits MSB-first within each byte: the first bit written lands in
//! bit 7 of the first output byte.
//!
//! The writer reports the exact number of bits written (excluding the
//! zero padding of the final byte), and the reader is constructed with
//! that count and refuses to read past it. This is what keeps trailing
//! pad bits from being misread as extra symbols.
//!
//! # Example
//!
//! ```
//! use huffarc_core::bitstream::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bits(0b101, 3);
//! writer.write_bit(true);
//! let (data, bit_len) = writer.finish();
//! assert_eq!(bit_len, 4);
//!
//! let mut reader = BitReader::new(&data, bit_len);
//! assert_eq!(reader.read_bits(3).unwrap(), 0b101);
//! assert!(reader.read_bit().unwrap());
//! assert!(reader.read_bit().is_err()); // past the declared bit count
//! ```

use crate::error::{HuffArcError, Result};

/// MSB-first bit writer backed by a `Vec<u8>`.
#[derive(Debug, Default)]
pub struct BitWriter {
    /// Output buffer.
    output: Vec<u8>,
    /// Bit buffer (MSB-first).
    buffer: u32,
    /// Number of bits in the buffer.
    bits_in_buffer: u8,
    /// Total bits written, excluding final-byte padding.
    total_bits: u64,
}

impl BitWriter {
    /// Create a new empty bit writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with room for roughly `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            output: Vec::with_capacity(bits.div_ceil(8)),
            ..Self::default()
        }
    }

    /// Write a single bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) {
        self.buffer = (self.buffer << 1) | (bit as u32);
        self.bits_in_buffer += 1;
        self.total_bits += 1;

        if self.bits_in_buffer == 8 {
            self.output.push(self.buffer as u8);
            self.buffer = 0;
            self.bits_in_buffer = 0;
        }
    }

    /// Write up to 32 bits, MSB-first.
    ///
    /// The top `32 - count` bits of `value` are ignored.
    pub fn write_bits(&mut self, value: u32, count: u8) {
        debug_assert!(count <= 32, "Cannot write more than 32 bits at once");
        for i in (0..count).rev() {
            self.write_bit((value >> i) & 1 != 0);
        }
    }

    /// Total bits written so far (padding excluded).
    pub fn bits_written(&self) -> u64 {
        self.total_bits
    }

    /// Pad the final byte with zero bits and return `(bytes, bit_count)`.
    ///
    /// `bit_count` is the number of meaningful bits; the last byte may
    /// carry up to 7 padding zeros beyond it.
    pub fn finish(mut self) -> (Vec<u8>, u64) {
        if self.bits_in_buffer > 0 {
            let pad = 8 - self.bits_in_buffer;
            self.output.push((self.buffer << pad) as u8);
        }
        (self.output, self.total_bits)
    }
}

/// MSB-first bit reader over a borrowed byte slice.
///
/// The reader is bounded by a declared bit count: reads beyond it fail
/// with [`HuffArcError::UnexpectedEof`] even if the underlying slice has
/// more (padding) bytes.
#[derive(Debug)]
pub struct BitReader<'a> {
    /// Input data.
    data: &'a [u8],
    /// Declared number of meaningful bits.
    bit_len: u64,
    /// Bits consumed so far.
    position: u64,
}

impl<'a> BitReader<'a> {
    /// Create a reader over `data` with `bit_len` meaningful bits.
    pub fn new(data: &'a [u8], bit_len: u64) -> Self {
        Self {
            data,
            bit_len,
            position: 0,
        }
    }

    /// Read a single bit.
    #[inline]
    pub fn read_bit(&mut self) -> Result<bool> {
        if self.position >= self.bit_len {
            return Err(HuffArcError::unexpected_eof(1));
        }

        let byte_idx = (self.position / 8) as usize;
        // bit_len may overstate the buffer; treat that as truncation too
        let byte = *self
            .data
            .get(byte_idx)
            .ok_or_else(|| HuffArcError::unexpected_eof(self.bit_len - self.position))?;

        let shift = 7 - (self.position % 8) as u8;
        self.position += 1;
        Ok((byte >> shift) & 1 != 0)
    }

    /// Read up to 32 bits, MSB-first.
    pub fn read_bits(&mut self, count: u8) -> Result<u32> {
        debug_assert!(count <= 32, "Cannot read more than 32 bits at once");
        let mut value = 0u32;
        for _ in 0..count {
            value = (value << 1) | (self.read_bit()? as u32);
        }
        Ok(value)
    }

    /// Bits consumed so far.
    pub fn bits_read(&self) -> u64 {
        self.position
    }

    /// Bits remaining before the declared limit.
    pub fn bits_remaining(&self) -> u64 {
        self.bit_len - self.position.min(self.bit_len)
    }

    /// Whether the declared bit count has been fully consumed.
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.bit_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_msb_order() {
        let mut writer = BitWriter::new();
        // 0b10110101 bit by bit, first bit lands in bit 7
        for bit in [true, false, true, true, false, true, false, true] {
            writer.write_bit(bit);
        }
        let (data, bits) = writer.finish();
        assert_eq!(data, vec![0xB5]);
        assert_eq!(bits, 8);
    }

    #[test]
    fn test_writer_pads_final_byte() {
        let mut writer = BitWriter::new();
        writer.write_bits(0b101, 3);
        let (data, bits) = writer.finish();
        assert_eq!(bits, 3);
        // 101 followed by five zero pad bits
        assert_eq!(data, vec![0b1010_0000]);
    }

    #[test]
    fn test_roundtrip_across_byte_boundary() {
        let mut writer = BitWriter::new();
        writer.write_bits(0b101, 3);
        writer.write_bits(0b1111, 4);
        writer.write_bits(0b10, 2);
        writer.write_bits(0b110011, 6);
        let (data, bits) = writer.finish();
        assert_eq!(bits, 15);

        let mut reader = BitReader::new(&data, bits);
        assert_eq!(reader.read_bits(3).unwrap(), 0b101);
        assert_eq!(reader.read_bits(4).unwrap(), 0b1111);
        assert_eq!(reader.read_bits(2).unwrap(), 0b10);
        assert_eq!(reader.read_bits(6).unwrap(), 0b110011);
        assert!(reader.is_exhausted());
    }

    #[test]
    fn test_reader_respects_bit_limit() {
        // A full byte of data but only 3 declared bits
        let data = vec![0xFF];
        let mut reader = BitReader::new(&data, 3);
        assert!(reader.read_bit().unwrap());
        assert!(reader.read_bit().unwrap());
        assert!(reader.read_bit().unwrap());
        assert!(matches!(
            reader.read_bit(),
            Err(HuffArcError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_reader_declared_longer_than_buffer() {
        let data = vec![0xAA];
        let mut reader = BitReader::new(&data, 16);
        assert_eq!(reader.read_bits(8).unwrap(), 0xAA);
        assert!(reader.read_bit().is_err());
    }

    #[test]
    fn test_empty() {
        let (data, bits) = BitWriter::new().finish();
        assert!(data.is_empty());
        assert_eq!(bits, 0);

        let mut reader = BitReader::new(&data, bits);
        assert!(reader.is_exhausted());
        assert!(reader.read_bit().is_err());
    }
}
