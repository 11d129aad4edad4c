//! Bit-level reader with bounded operations.

use crate::error::{BitError, BitResult};

/// A bit-level reader for decoding packed binary data.
///
/// Bits are consumed most-significant first within each byte. All read
/// operations are bounds-checked and return errors on failure; the reader
/// never panics on malformed input.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    bit_pos: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a new `BitReader` from a byte slice.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, bit_pos: 0 }
    }

    /// Creates a reader positioned at the start of byte `offset`.
    pub fn at_byte(data: &'a [u8], offset: usize) -> BitResult<Self> {
        let mut reader = Self::new(data);
        reader.seek(offset * 8)?;
        Ok(reader)
    }

    /// Returns the total length of the underlying buffer in bits.
    #[must_use]
    pub const fn bit_len(&self) -> usize {
        self.data.len().saturating_mul(8)
    }

    /// Returns the number of bits remaining to read.
    #[must_use]
    pub const fn bits_remaining(&self) -> usize {
        self.bit_len().saturating_sub(self.bit_pos)
    }

    /// Returns `true` if there are no more bits to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bits_remaining() == 0
    }

    /// Returns the current bit position.
    #[must_use]
    pub const fn bit_position(&self) -> usize {
        self.bit_pos
    }

    /// Moves the cursor to an absolute bit position.
    ///
    /// Seeking to exactly the end of the buffer is allowed.
    pub fn seek(&mut self, bit_pos: usize) -> BitResult<()> {
        if bit_pos > self.bit_len() {
            return Err(BitError::SeekOutOfBounds {
                position: bit_pos,
                len: self.bit_len(),
            });
        }
        self.bit_pos = bit_pos;
        Ok(())
    }

    /// Skips `bits` bits without reading them.
    pub fn skip(&mut self, bits: usize) -> BitResult<()> {
        self.ensure_bits(bits)?;
        self.bit_pos += bits;
        Ok(())
    }

    /// Reads a single bit as a boolean.
    pub fn read_bit(&mut self) -> BitResult<bool> {
        self.ensure_bits(1)?;
        let byte_idx = self.bit_pos / 8;
        let bit_idx = self.bit_pos % 8;
        let bit = (self.data[byte_idx] >> (7 - bit_idx)) & 1;
        self.bit_pos += 1;
        Ok(bit == 1)
    }

    /// Reads up to 64 bits as an unsigned integer, MSB first.
    pub fn read_bits(&mut self, bits: u8) -> BitResult<u64> {
        if bits > 64 {
            return Err(BitError::InvalidBitCount { bits, max_bits: 64 });
        }
        if bits == 0 {
            return Ok(0);
        }
        self.ensure_bits(bits as usize)?;

        let mut value = 0u64;
        for _ in 0..bits {
            value = (value << 1) | u64::from(self.read_bit()?);
        }
        Ok(value)
    }

    /// Reads a byte-wide field that may start at any bit offset.
    pub fn read_u8(&mut self) -> BitResult<u8> {
        // Eight bits always fit.
        Ok(self.read_bits(8)? as u8)
    }

    /// Aligns to the next byte boundary.
    pub fn align_to_byte(&mut self) -> BitResult<()> {
        let rem = self.bit_pos % 8;
        if rem == 0 {
            return Ok(());
        }
        self.skip(8 - rem)
    }

    fn ensure_bits(&self, bits: usize) -> BitResult<()> {
        let available = self.bits_remaining();
        if bits > available {
            return Err(BitError::UnexpectedEof {
                requested: bits,
                available,
            });
        }
        Ok(())
    }
}
