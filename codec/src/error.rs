//! Error types for codec operations.

use std::fmt;

use wire::{ChecksumGroup, PasswordSize, WireError};

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while encoding or decoding a password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Wire format error: alphabet, length, check symbols or CRC.
    Wire(WireError),

    /// Bitstream error while packing or unpacking fields.
    Bitstream(bitstream::BitError),

    /// Data handed to the field layout has the wrong length for its size.
    DataLength {
        size: PasswordSize,
        expected: usize,
        actual: usize,
    },
}

/// Coarse classification of a [`CodecError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorKind {
    /// A character outside the password alphabet.
    InvalidCharacter,
    /// The character count matches no size, or not the requested one.
    WrongLength,
    /// One or more check symbols disagree with their group.
    ChecksumMismatch,
    /// The CRC-16 over the data does not match.
    IntegrityMismatch,
    /// Layout inconsistency; never caused by user input.
    Internal,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidCharacter => "invalid_character",
            Self::WrongLength => "wrong_length",
            Self::ChecksumMismatch => "checksum_mismatch",
            Self::IntegrityMismatch => "integrity_mismatch",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl CodecError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Wire(WireError::InvalidCharacter { .. }) => ErrorKind::InvalidCharacter,
            Self::Wire(WireError::LengthMismatch { .. }) => ErrorKind::WrongLength,
            Self::Wire(WireError::ChecksumMismatch { .. }) => ErrorKind::ChecksumMismatch,
            Self::Wire(WireError::IntegrityMismatch { .. }) => ErrorKind::IntegrityMismatch,
            _ => ErrorKind::Internal,
        }
    }

    /// Failing checksum groups, empty unless this is a checksum mismatch.
    #[must_use]
    pub fn failing_groups(&self) -> &[ChecksumGroup] {
        match self {
            Self::Wire(err) => err.failing_groups(),
            _ => &[],
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wire(err) => write!(f, "{err}"),
            Self::Bitstream(err) => write!(f, "bitstream error: {err}"),
            Self::DataLength {
                size,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{size} layout expects {expected} data bytes, got {actual}"
                )
            }
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Wire(err) => Some(err),
            Self::Bitstream(err) => Some(err),
            Self::DataLength { .. } => None,
        }
    }
}

impl From<WireError> for CodecError {
    fn from(err: WireError) -> Self {
        Self::Wire(err)
    }
}

impl From<bitstream::BitError> for CodecError {
    fn from(err: bitstream::BitError) -> Self {
        Self::Bitstream(err)
    }
}
