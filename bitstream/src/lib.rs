//! Bit-cursor primitives for the transfer password codec.
//!
//! This crate provides [`BitWriter`] and [`BitReader`]: a cursor holding a bit
//! offset into a byte buffer, with `read_bits(n)` / `write_bits(value, n)`
//! helpers. Every non-byte-aligned field in a password layout goes through
//! these two types, so off-by-one bit errors can only live here.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - All reads/writes are bounds-checked.
//! - **Fixed buffers** - Writers address a caller-owned layout; they never grow it.
//! - **No domain knowledge** - This crate knows nothing about characters, items, or passwords.
//!
//! # Example
//!
//! ```
//! use bitstream::{BitReader, BitWriter};
//!
//! let mut buf = [0u8; 2];
//! let mut writer = BitWriter::new(&mut buf);
//! writer.write_bit(true).unwrap();
//! writer.write_bits(300, 9).unwrap();
//! let used = writer.finish();
//!
//! let mut reader = BitReader::new(&buf[..used]);
//! assert!(reader.read_bit().unwrap());
//! assert_eq!(reader.read_bits(9).unwrap(), 300);
//! ```

mod error;
mod reader;
mod writer;

pub use error::{BitError, BitResult};
pub use reader::BitReader;
pub use writer::BitWriter;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_roundtrip() {
        let mut buf = [0u8; 0];
        let writer = BitWriter::new(&mut buf);
        assert_eq!(writer.finish(), 0);

        let reader = BitReader::new(&buf);
        assert!(reader.is_empty());
    }

    #[test]
    fn odd_widths_roundtrip() {
        // The widths that appear in password layouts.
        let fields = [(99u64, 7u8), (1999, 11), (999, 10), (0x1FF, 9), (31, 5), (63, 6)];
        let mut buf = [0u8; 8];
        let mut writer = BitWriter::new(&mut buf);
        for (value, bits) in fields {
            writer.write_bits(value, bits).unwrap();
        }
        let used = writer.finish();
        assert_eq!(used, 6);

        let mut reader = BitReader::new(&buf);
        for (value, bits) in fields {
            assert_eq!(reader.read_bits(bits).unwrap(), value, "{bits}-bit field");
        }
    }

    #[test]
    fn mixed_roundtrip() {
        let mut buf = [0u8; 4];
        let mut writer = BitWriter::new(&mut buf);
        writer.write_bit(true).unwrap();
        writer.write_bits(0b1010, 4).unwrap();
        writer.write_bit(false).unwrap();
        writer.align_to_byte().unwrap();
        writer.write_u8(0xFF).unwrap();
        writer.write_bits(42, 7).unwrap();
        let _ = writer.finish();

        let mut reader = BitReader::new(&buf);
        assert!(reader.read_bit().unwrap());
        assert_eq!(reader.read_bits(4).unwrap(), 0b1010);
        assert!(!reader.read_bit().unwrap());
        reader.align_to_byte().unwrap();
        assert_eq!(reader.read_u8().unwrap(), 0xFF);
        assert_eq!(reader.read_bits(7).unwrap(), 42);
    }
}
