//! CRC-16 with a subtraction-based reduction step.
//!
//! This is *not* CRC-16/CCITT: when the top bit is set the running value is
//! shifted and the polynomial is subtracted, not XORed. Passwords produced by
//! the games only verify with this variant.

/// Polynomial constant.
pub const CRC_POLYNOMIAL: u16 = 0x1021;

/// Initial running value.
pub const CRC_INIT: u16 = 0xFFFF;

/// Size of the stored CRC in bytes.
pub const CRC_LEN: usize = 2;

/// Computes the password CRC over `data`.
#[must_use]
pub fn crc16(data: &[u8]) -> u16 {
    let mut crc = CRC_INIT;
    for &byte in data {
        crc ^= u16::from(byte) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1).wrapping_sub(CRC_POLYNOMIAL)
            } else {
                crc << 1
            };
        }
    }
    !crc
}
