//! Wire format of transfer passwords.
//!
//! A password is a fixed-length string over a 64-symbol alphabet. Underneath
//! it is a byte frame (data followed by a big-endian CRC-16) pushed through a
//! reversible bit-scramble that adds one check symbol per nine data symbols.
//! This crate owns that outer layer; it knows nothing about what the data
//! bytes mean.
//!
//! # Design Principles
//!
//! - **Closed sizes** - Only the three [`PasswordSize`]s exist; counts are looked up, never guessed.
//! - **Localized errors** - Checksum failures name every bad group, not just the first.
//! - **No domain knowledge** - Characters, items and coins live in the codec crate.
//!
//! # Example
//!
//! ```
//! use wire::{indices_from_str, open, scramble, string_from_indices, unscramble, PasswordSize};
//!
//! let indices = indices_from_str("xu5?3k977$recgvh").unwrap();
//! let frame = unscramble(&indices, PasswordSize::Bronze.total_bytes()).unwrap();
//! let data = open(&frame).unwrap();
//! assert_eq!(data.len(), PasswordSize::Bronze.data_bytes());
//! assert_eq!(string_from_indices(&scramble(&frame)), "xu5?3k977$recgvh");
//! ```

mod alphabet;
mod crc;
mod error;
mod frame;
mod scramble;
mod size;
mod url;

pub use alphabet::{
    index_to_symbol, indices_from_str, string_from_indices, symbol_to_index, ALPHABET,
    INVALID_INDEX,
};
pub use crc::{crc16, CRC_INIT, CRC_LEN, CRC_POLYNOMIAL};
pub use error::{WireError, WireResult};
pub use frame::{open, seal};
pub use scramble::{
    failing_groups, scramble, unscramble, validate_checksums, ChecksumGroup, BITS_PER_SYMBOL,
    CHECK_INTERVAL, GROUP_LEN, ROWS_PER_PAGE,
};
pub use size::{byte_count_for_chars, char_count_for_bytes, ParseSizeError, PasswordSize};
pub use url::{password_to_url, url_to_password};
