//! Password encode/decode facade.

use wire::{
    indices_from_str, open, scramble, seal, string_from_indices, unscramble, PasswordSize,
    WireError,
};

use crate::error::CodecResult;
use crate::layout;
use crate::tables::CodecTables;
use crate::types::Snapshot;

/// A successfully decoded password.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decoded {
    pub snapshot: Snapshot,
    pub size: PasswordSize,
}

/// Encodes snapshots to passwords and back with a fixed set of tables.
///
/// A `Codec` holds no per-call state and can be shared across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Codec {
    tables: CodecTables,
}

impl Codec {
    #[must_use]
    pub const fn new(tables: CodecTables) -> Self {
        Self { tables }
    }

    /// Encodes `snapshot` as a `size` password.
    ///
    /// Out-of-range values are clamped, so the result has exactly
    /// `size.char_count()` characters. Errors only signal an internal layout
    /// inconsistency.
    pub fn encode(&self, snapshot: &Snapshot, size: PasswordSize) -> CodecResult<String> {
        let data = layout::pack(snapshot, size, &self.tables)?;
        let frame = seal(&data);
        Ok(string_from_indices(&scramble(&frame)))
    }

    /// Decodes a password, ignoring any whitespace in `input`.
    ///
    /// When `size` is `None` it is inferred from the character count.
    pub fn decode(&self, input: &str, size: Option<PasswordSize>) -> CodecResult<Decoded> {
        let cleaned: String = input.chars().filter(|ch| !ch.is_whitespace()).collect();
        let indices = indices_from_str(&cleaned)?;

        let found = indices.len();
        let size = match size {
            Some(size) if size.char_count() == found => size,
            Some(size) => {
                return Err(WireError::LengthMismatch {
                    found,
                    expected: Some(size.char_count()),
                }
                .into())
            }
            None => PasswordSize::from_char_count(found).ok_or(WireError::LengthMismatch {
                found,
                expected: None,
            })?,
        };

        let frame = unscramble(&indices, size.total_bytes())?;
        let data = open(&frame)?;
        let snapshot = layout::unpack(data, size, &self.tables)?;
        Ok(Decoded { snapshot, size })
    }

    /// The part of `snapshot` a `size` password carries.
    ///
    /// Decoding the password from [`Codec::encode`] yields exactly this.
    #[must_use]
    pub fn retained(&self, snapshot: &Snapshot, size: PasswordSize) -> Snapshot {
        layout::retain(snapshot, size, &self.tables)
    }
}

/// Encodes with the default tables.
pub fn encode(snapshot: &Snapshot, size: PasswordSize) -> CodecResult<String> {
    Codec::default().encode(snapshot, size)
}

/// Decodes with the default tables.
pub fn decode(input: &str, size: Option<PasswordSize>) -> CodecResult<Decoded> {
    Codec::default().decode(input, size)
}
