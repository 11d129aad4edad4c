//! Bit-scramble transform between framed bytes and symbol indices.
//!
//! Forward direction:
//! 1. every byte but the last is XOR-keyed with the last byte;
//! 2. the bytes are regrouped MSB-first into 6-bit values, the final partial
//!    group zero-padded;
//! 3. after every nine values a check value (their sum mod 64) is inserted;
//! 4. each value is offset by its position in the output, mod 64.
//!
//! The reverse direction undoes the offset, verifies every complete group of
//! ten, drops the check values and repacks exactly `total_bytes` bytes.

use std::fmt;

use bitstream::BitWriter;

use crate::alphabet::symbol_to_index;
use crate::error::{WireError, WireResult};
use crate::size::char_count_for_bytes;

/// Bits carried by one password symbol.
pub const BITS_PER_SYMBOL: u8 = 6;

/// Data symbols covered by one check symbol.
pub const CHECK_INTERVAL: usize = 9;

/// Data symbols plus their check symbol.
pub const GROUP_LEN: usize = CHECK_INTERVAL + 1;

/// Rows shown per page when a password is displayed.
pub const ROWS_PER_PAGE: usize = 5;

const SYMBOL_MASK: u8 = 0x3F;

/// A 10-character checksum group, identified by its zero-based index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChecksumGroup(usize);

impl ChecksumGroup {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// 1-based page on which the group is displayed.
    #[must_use]
    pub const fn page(self) -> usize {
        self.0 / ROWS_PER_PAGE + 1
    }

    /// 1-based row within the page.
    #[must_use]
    pub const fn row(self) -> usize {
        self.0 % ROWS_PER_PAGE + 1
    }
}

impl fmt::Display for ChecksumGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page {}, row {}", self.page(), self.row())
    }
}

/// Scrambles framed bytes (data plus CRC) into symbol indices.
#[must_use]
pub fn scramble(bytes: &[u8]) -> Vec<u8> {
    let Some((&key, body)) = bytes.split_last() else {
        return Vec::new();
    };

    let mut groups = Vec::with_capacity(bytes.len() * 8 / usize::from(BITS_PER_SYMBOL) + 1);
    let mut acc: u32 = 0;
    let mut acc_bits: u8 = 0;
    for byte in body.iter().map(|b| b ^ key).chain(std::iter::once(key)) {
        acc = (acc << 8) | u32::from(byte);
        acc_bits += 8;
        while acc_bits >= BITS_PER_SYMBOL {
            acc_bits -= BITS_PER_SYMBOL;
            groups.push(((acc >> acc_bits) as u8) & SYMBOL_MASK);
        }
        acc &= (1 << acc_bits) - 1;
    }
    if acc_bits > 0 {
        groups.push(((acc << (BITS_PER_SYMBOL - acc_bits)) as u8) & SYMBOL_MASK);
    }

    let mut out = Vec::with_capacity(char_count_for_bytes(bytes.len()));
    for chunk in groups.chunks(CHECK_INTERVAL) {
        out.extend_from_slice(chunk);
        if chunk.len() == CHECK_INTERVAL {
            out.push(group_sum(chunk));
        }
    }
    for (i, value) in out.iter_mut().enumerate() {
        *value = offset(*value, i);
    }
    out
}

/// Reverses [`scramble`], producing exactly `total_bytes` framed bytes.
///
/// The index count must match `total_bytes`; every failing check group is
/// reported together.
pub fn unscramble(indices: &[u8], total_bytes: usize) -> WireResult<Vec<u8>> {
    let expected = char_count_for_bytes(total_bytes);
    if indices.len() != expected {
        return Err(WireError::LengthMismatch {
            found: indices.len(),
            expected: Some(expected),
        });
    }

    let values = remove_offset(indices);
    let groups = failing_groups(&values);
    if !groups.is_empty() {
        return Err(WireError::ChecksumMismatch { groups });
    }

    let mut bytes = vec![0u8; total_bytes];
    let mut writer = BitWriter::new(&mut bytes);
    let data = values
        .iter()
        .enumerate()
        .filter(|(i, _)| i % GROUP_LEN != CHECK_INTERVAL)
        .map(|(_, &v)| v);
    for value in data {
        let room = writer.bits_remaining();
        if room == 0 {
            break;
        }
        if room < usize::from(BITS_PER_SYMBOL) {
            // Trailing padding bits fall off the end of the frame.
            let keep = room as u8;
            writer.write_bits(u64::from(value >> (BITS_PER_SYMBOL - keep)), keep)?;
        } else {
            writer.write_bits(u64::from(value), BITS_PER_SYMBOL)?;
        }
    }

    if let Some((&mut key, body)) = bytes.split_last_mut() {
        for byte in body {
            *byte ^= key;
        }
    }
    Ok(bytes)
}

/// Complete groups of ten whose check value disagrees with their data.
///
/// `values` must already have the position offset removed. A trailing
/// partial group carries no check value and is never reported.
#[must_use]
pub fn failing_groups(values: &[u8]) -> Vec<ChecksumGroup> {
    values
        .chunks_exact(GROUP_LEN)
        .enumerate()
        .filter(|(_, chunk)| group_sum(&chunk[..CHECK_INTERVAL]) != chunk[CHECK_INTERVAL])
        .map(|(i, _)| ChecksumGroup::new(i))
        .collect()
}

/// Checks a possibly incomplete password as it is typed.
///
/// Characters outside the alphabet are skipped, and only complete groups of
/// ten are verified.
#[must_use]
pub fn validate_checksums(password: &str) -> Vec<ChecksumGroup> {
    let indices: Vec<u8> = password.chars().filter_map(symbol_to_index).collect();
    failing_groups(&remove_offset(&indices))
}

fn remove_offset(indices: &[u8]) -> Vec<u8> {
    indices
        .iter()
        .enumerate()
        .map(|(i, &v)| v.wrapping_sub(i as u8) & SYMBOL_MASK)
        .collect()
}

fn offset(value: u8, position: usize) -> u8 {
    value.wrapping_add(position as u8) & SYMBOL_MASK
}

fn group_sum(values: &[u8]) -> u8 {
    values.iter().fold(0u8, |sum, &v| sum.wrapping_add(v)) & SYMBOL_MASK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::indices_from_str;

    const EMPTY_BRONZE: &str = "xu5?3k977$recgvh";

    #[test]
    fn group_page_and_row() {
        assert_eq!((ChecksumGroup::new(0).page(), ChecksumGroup::new(0).row()), (1, 1));
        assert_eq!((ChecksumGroup::new(4).page(), ChecksumGroup::new(4).row()), (1, 5));
        assert_eq!((ChecksumGroup::new(5).page(), ChecksumGroup::new(5).row()), (2, 1));
        assert_eq!(ChecksumGroup::new(25).to_string(), "page 6, row 1");
    }

    #[test]
    fn single_byte_frame() {
        // 0xAB -> 101010 11(0000): groups 42, 48; offsets 0, 1.
        assert_eq!(scramble(&[0xAB]), vec![42, 49]);
    }

    #[test]
    fn xor_keys_with_last_byte() {
        // [0x0F, 0xF0] -> [0xFF, 0xF0] -> 111111 111111 0000(00)
        assert_eq!(scramble(&[0x0F, 0xF0]), vec![63, 0, 2]);
    }

    #[test]
    fn unscramble_removes_xor_key() {
        assert_eq!(unscramble(&[63, 0, 2], 2).unwrap(), vec![0x0F, 0xF0]);
        assert_eq!(unscramble(&[42, 49], 1).unwrap(), vec![0xAB]);
    }

    #[test]
    fn check_value_inserted_after_nine() {
        let out = scramble(&[0u8; 9]);
        // 72 bits -> 12 groups -> one check after the first nine.
        assert_eq!(out.len(), 13);
        let values = remove_offset(&out);
        assert!(values.iter().all(|&v| v == 0));
    }

    #[test]
    fn empty_input() {
        assert!(scramble(&[]).is_empty());
        assert_eq!(unscramble(&[], 0).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn bronze_vector_unscrambles_to_valid_frame() {
        let indices = indices_from_str(EMPTY_BRONZE).unwrap();
        let bytes = unscramble(&indices, 11).unwrap();
        assert_eq!(scramble(&bytes), indices);
        assert!(crate::frame::open(&bytes).is_ok());
    }

    #[test]
    fn wrong_length_is_rejected_first() {
        let indices = indices_from_str(EMPTY_BRONZE).unwrap();
        assert_eq!(
            unscramble(&indices[..15], 11),
            Err(WireError::LengthMismatch {
                found: 15,
                expected: Some(16)
            })
        );
    }

    #[test]
    fn corrupted_symbol_is_localized() {
        let mut indices = indices_from_str(EMPTY_BRONZE).unwrap();
        indices[3] = (indices[3] + 1) & 0x3F;
        let err = unscramble(&indices, 11).unwrap_err();
        assert_eq!(err.failing_groups(), &[ChecksumGroup::new(0)]);
    }

    #[test]
    fn trailing_partial_group_is_unchecked() {
        let mut indices = indices_from_str(EMPTY_BRONZE).unwrap();
        indices[12] = (indices[12] + 5) & 0x3F;
        assert!(failing_groups(&remove_offset(&indices)).is_empty());
        // The frame CRC catches it instead.
        let bytes = unscramble(&indices, 11).unwrap();
        assert!(crate::frame::open(&bytes).is_err());
    }

    #[test]
    fn live_validation_skips_junk_and_partial_groups() {
        assert!(validate_checksums("").is_empty());
        assert!(validate_checksums("xu5?3").is_empty());
        assert!(validate_checksums("xu5?3 k977$\nrecgvh").is_empty());
        assert_eq!(validate_checksums("xu5?3k977A"), vec![ChecksumGroup::new(0)]);
    }
}
