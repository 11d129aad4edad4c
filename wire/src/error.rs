//! Error types for password wire operations.

use std::fmt;

use crate::scramble::ChecksumGroup;

/// Result type for wire operations.
pub type WireResult<T> = Result<T, WireError>;

/// Errors raised while turning a password string back into framed bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WireError {
    /// A symbol outside the 64-symbol alphabet.
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// Index of the character in the cleaned input.
        position: usize,
    },

    /// Character count does not belong to any (or the requested) password size.
    LengthMismatch {
        /// Number of characters found.
        found: usize,
        /// Expected count when a size was requested explicitly.
        expected: Option<usize>,
    },

    /// One or more 10-character groups failed their embedded check digit.
    ChecksumMismatch {
        /// Every failing group, in ascending order.
        groups: Vec<ChecksumGroup>,
    },

    /// Check digits passed but the trailing CRC-16 does not match.
    IntegrityMismatch { stored: u16, computed: u16 },

    /// Frame is too small to hold the CRC.
    FrameTooSmall { actual: usize, required: usize },

    /// Bitstream error.
    Bitstream(bitstream::BitError),
}

impl WireError {
    /// Failing checksum groups, if this is a checksum mismatch.
    #[must_use]
    pub fn failing_groups(&self) -> &[ChecksumGroup] {
        match self {
            Self::ChecksumMismatch { groups } => groups,
            _ => &[],
        }
    }
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { ch, position } => {
                write!(
                    f,
                    "invalid password character \"{ch}\" found at position {position}"
                )
            }
            Self::LengthMismatch {
                found,
                expected: None,
            } => {
                write!(
                    f,
                    "password has an incorrect number of characters ({found})"
                )
            }
            Self::LengthMismatch {
                found,
                expected: Some(expected),
            } => {
                write!(
                    f,
                    "password has {found} characters, expected {expected}"
                )
            }
            Self::ChecksumMismatch { groups } => {
                write!(f, "at least one wrong character in: ")?;
                for (i, group) in groups.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{group}")?;
                }
                Ok(())
            }
            // CRC failure cannot be localized; keep the message generic.
            Self::IntegrityMismatch { .. } => write!(f, "password is invalid"),
            Self::FrameTooSmall { actual, required } => {
                write!(
                    f,
                    "frame too small: {actual} bytes, need at least {required}"
                )
            }
            Self::Bitstream(err) => write!(f, "bitstream error: {err}"),
        }
    }
}

impl std::error::Error for WireError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bitstream(err) => Some(err),
            _ => None,
        }
    }
}

impl From<bitstream::BitError> for WireError {
    fn from(err: bitstream::BitError) -> Self {
        Self::Bitstream(err)
    }
}
