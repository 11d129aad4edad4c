//! Bit-level writer over a fixed, caller-provided buffer.

use crate::error::{BitError, BitResult};

/// A bit-level writer for encoding packed binary data.
///
/// Bits are written most-significant first. The writer never grows the
/// buffer: it addresses an existing fixed-size layout, and every write
/// overwrites exactly the addressed bits, leaving neighbouring bits intact.
/// This lets fields that share a byte (nibble overlaps) be written in any
/// order.
#[derive(Debug)]
pub struct BitWriter<'a> {
    buf: &'a mut [u8],
    bit_pos: usize,
    /// High-water mark in bits.
    touched: usize,
}

impl<'a> BitWriter<'a> {
    /// Creates a writer positioned at the start of `buf`.
    #[must_use]
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self {
            buf,
            bit_pos: 0,
            touched: 0,
        }
    }

    /// Creates a writer positioned at the start of byte `offset`.
    pub fn at_byte(buf: &'a mut [u8], offset: usize) -> BitResult<Self> {
        let mut writer = Self::new(buf);
        writer.seek(offset * 8)?;
        Ok(writer)
    }

    /// Returns the total length of the underlying buffer in bits.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.buf.len().saturating_mul(8)
    }

    /// Returns the number of bits that can still be written.
    #[must_use]
    pub fn bits_remaining(&self) -> usize {
        self.bit_len().saturating_sub(self.bit_pos)
    }

    /// Returns the current bit position.
    #[must_use]
    pub const fn bit_position(&self) -> usize {
        self.bit_pos
    }

    /// Moves the cursor to an absolute bit position.
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

    /// Skips `bits` bits, leaving them unchanged.
    pub fn skip(&mut self, bits: usize) -> BitResult<()> {
        self.ensure_bits(bits)?;
        self.bit_pos += bits;
        Ok(())
    }

    /// Writes a single bit.
    pub fn write_bit(&mut self, value: bool) -> BitResult<()> {
        self.ensure_bits(1)?;
        let byte_idx = self.bit_pos / 8;
        let mask = 0x80u8 >> (self.bit_pos % 8);
        if value {
            self.buf[byte_idx] |= mask;
        } else {
            self.buf[byte_idx] &= !mask;
        }
        self.bit_pos += 1;
        self.touched = self.touched.max(self.bit_pos);
        Ok(())
    }

    /// Writes the low `bits` bits of `value`, MSB first.
    ///
    /// # Errors
    ///
    /// Returns [`BitError::InvalidBitCount`] if `bits > 64`,
    /// [`BitError::ValueOutOfRange`] if `value` doesn't fit in `bits`, and
    /// [`BitError::UnexpectedEof`] if the buffer is too short. Nothing is
    /// written when an error is returned.
    pub fn write_bits(&mut self, value: u64, bits: u8) -> BitResult<()> {
        if bits > 64 {
            return Err(BitError::InvalidBitCount { bits, max_bits: 64 });
        }
        if bits == 0 {
            return Ok(());
        }
        if bits < 64 && value >= (1u64 << bits) {
            return Err(BitError::ValueOutOfRange { value, bits });
        }
        self.ensure_bits(bits as usize)?;

        for i in (0..bits).rev() {
            self.write_bit((value >> i) & 1 == 1)?;
        }
        Ok(())
    }

    /// Writes a full byte at the current (possibly unaligned) position.
    pub fn write_u8(&mut self, value: u8) -> BitResult<()> {
        self.write_bits(u64::from(value), 8)
    }

    /// Aligns to the next byte boundary without touching the skipped bits.
    pub fn align_to_byte(&mut self) -> BitResult<()> {
        let rem = self.bit_pos % 8;
        if rem == 0 {
            return Ok(());
        }
        self.skip(8 - rem)
    }

    /// Finishes writing and returns the number of bytes written to.
    #[must_use]
    pub fn finish(self) -> usize {
        self.touched.div_ceil(8)
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
