//! CRC framing: data bytes followed by a big-endian CRC-16.

use crate::crc::{crc16, CRC_LEN};
use crate::error::{WireError, WireResult};

/// Appends the big-endian CRC of `data`.
#[must_use]
pub fn seal(data: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(data.len() + CRC_LEN);
    frame.extend_from_slice(data);
    frame.extend_from_slice(&crc16(data).to_be_bytes());
    frame
}

/// Verifies the trailing CRC and returns the data bytes in front of it.
pub fn open(frame: &[u8]) -> WireResult<&[u8]> {
    if frame.len() < CRC_LEN {
        return Err(WireError::FrameTooSmall {
            actual: frame.len(),
            required: CRC_LEN,
        });
    }
    let (data, tail) = frame.split_at(frame.len() - CRC_LEN);
    let stored = u16::from_be_bytes([tail[0], tail[1]]);
    let computed = crc16(data);
    if stored != computed {
        return Err(WireError::IntegrityMismatch { stored, computed });
    }
    Ok(data)
}
