//! Password sizes and their fixed byte/character counts.

use std::fmt;
use std::str::FromStr;

use crate::crc::CRC_LEN;
use crate::scramble::{BITS_PER_SYMBOL, CHECK_INTERVAL, GROUP_LEN};

/// The three password sizes.
///
/// Gold is the large password (stats, items and coins), Silver the medium one
/// (stats only) and Bronze the small one (header only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PasswordSize {
    Gold,
    Silver,
    Bronze,
}

impl PasswordSize {
    /// All sizes, largest first.
    pub const ALL: [Self; 3] = [Self::Gold, Self::Silver, Self::Bronze];

    /// Raw data bytes carried by the password, excluding the CRC.
    #[must_use]
    pub const fn data_bytes(self) -> usize {
        match self {
            Self::Gold => 173,
            Self::Silver => 39,
            Self::Bronze => 9,
        }
    }

    /// Total framed bytes, including the trailing CRC-16.
    #[must_use]
    pub const fn total_bytes(self) -> usize {
        self.data_bytes() + CRC_LEN
    }

    /// Number of alphabet characters in a password of this size.
    #[must_use]
    pub const fn char_count(self) -> usize {
        match self {
            Self::Gold => 260,
            Self::Silver => 61,
            Self::Bronze => 16,
        }
    }

    /// Looks up the size whose password has exactly `count` characters.
    #[must_use]
    pub const fn from_char_count(count: usize) -> Option<Self> {
        match count {
            260 => Some(Self::Gold),
            61 => Some(Self::Silver),
            16 => Some(Self::Bronze),
            _ => None,
        }
    }

    /// Lowercase name of the size.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Silver => "silver",
            Self::Bronze => "bronze",
        }
    }
}

/// Character count produced by scrambling `total_bytes` framed bytes.
///
/// One 6-bit symbol per started group of six bits, plus one check symbol for
/// every nine data symbols.
#[must_use]
pub const fn char_count_for_bytes(total_bytes: usize) -> usize {
    let bits = total_bytes * 8;
    let data_symbols = (bits + BITS_PER_SYMBOL as usize - 1) / BITS_PER_SYMBOL as usize;
    data_symbols + data_symbols / CHECK_INTERVAL
}

/// Framed byte count recovered from `chars` password characters.
#[must_use]
pub const fn byte_count_for_chars(chars: usize) -> usize {
    let data_symbols = chars - chars / GROUP_LEN;
    data_symbols * BITS_PER_SYMBOL as usize / 8
}

impl fmt::Display for PasswordSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown size name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSizeError(String);

impl fmt::Display for ParseSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown password size \"{}\" (expected gold, silver or bronze)",
            self.0
        )
    }
}

impl std::error::Error for ParseSizeError {}

impl FromStr for PasswordSize {
    type Err = ParseSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gold" | "large" => Ok(Self::Gold),
            "silver" | "medium" => Ok(Self::Silver),
            "bronze" | "small" => Ok(Self::Bronze),
            _ => Err(ParseSizeError(s.to_string())),
        }
    }
}
