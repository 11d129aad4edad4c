//! Transfer password codec.
//!
//! Ties together bitstream and wire to turn a [`Snapshot`] of party progress
//! into a Gold, Silver or Bronze password and back.
//!
//! # Features
//!
//! - Encoding with silent clamping of out-of-range values
//! - Decoding with size auto-detection and whitespace tolerance
//! - Per-row localization of mistyped characters
//! - Size-aware projection of a snapshot ([`Codec::retained`])
//!
//! # Design Principles
//!
//! - **Bit-exact** - Passwords match the ones the games produce.
//! - **Pure** - No shared state; every call is an independent transform.
//! - **Deterministic** - Same inputs produce same outputs.
//!
//! # Example
//!
//! ```
//! use codec::{Codec, PasswordSize, Snapshot};
//!
//! let codec = Codec::default();
//! let mut snapshot = Snapshot::new();
//! snapshot.characters[0].level = 42;
//!
//! let password = codec.encode(&snapshot, PasswordSize::Silver).unwrap();
//! assert_eq!(password.len(), 61);
//!
//! let decoded = codec.decode(&password, None).unwrap();
//! assert_eq!(decoded.size, PasswordSize::Silver);
//! assert_eq!(decoded.snapshot.characters[0].level, 42);
//! ```

mod codec;
mod error;
mod layout;
mod tables;
mod types;

pub use codec::{decode, encode, Codec, Decoded};
pub use error::{CodecError, CodecResult, ErrorKind};
pub use tables::{
    CodecTables, StatDefinition, MAX_COINS, QUANTITY_ITEM_COUNT, SPECIAL_ITEM_COUNT,
};
pub use types::{
    CharacterStats, Element, ItemSlot, Snapshot, Stat, CHARACTER_COUNT, DJINN_MASK,
    DJINN_PER_ELEMENT, FLAGS_MASK, ITEM_SLOTS,
};
pub use wire::{ChecksumGroup, PasswordSize};
