//! The 64-symbol password alphabet.
//!
//! Visually ambiguous characters (`0 O 1 I l o`) are left out, so every
//! symbol maps to a unique 6-bit value.

use crate::error::{WireError, WireResult};

/// Password symbols in index order.
pub const ALPHABET: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ23456789abcdefghijkmnpqrstuvwxyz!?#&$%+=";

/// Raw sentinel for "not an alphabet symbol", for callers working with index tables.
pub const INVALID_INDEX: u8 = 99;

const SYMBOLS: &[u8; 64] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789abcdefghijkmnpqrstuvwxyz!?#&$%+=";

const REVERSE: [u8; 128] = build_reverse();

const fn build_reverse() -> [u8; 128] {
    let mut table = [INVALID_INDEX; 128];
    let mut i = 0;
    while i < SYMBOLS.len() {
        table[SYMBOLS[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Maps a password symbol to its 6-bit value, or `None` for anything else.
#[must_use]
pub fn symbol_to_index(ch: char) -> Option<u8> {
    if !ch.is_ascii() {
        return None;
    }
    let index = REVERSE[ch as usize];
    (index != INVALID_INDEX).then_some(index)
}

/// Maps a 6-bit value to its symbol. Only the low six bits are used.
#[must_use]
pub fn index_to_symbol(index: u8) -> char {
    char::from(SYMBOLS[usize::from(index & 0x3F)])
}

/// Converts a cleaned password into symbol indices.
///
/// Fails on the first character outside the alphabet.
pub fn indices_from_str(password: &str) -> WireResult<Vec<u8>> {
    password
        .chars()
        .enumerate()
        .map(|(position, ch)| {
            symbol_to_index(ch).ok_or(WireError::InvalidCharacter { ch, position })
        })
        .collect()
}

/// Converts symbol indices back into a password string.
#[must_use]
pub fn string_from_indices(indices: &[u8]) -> String {
    indices.iter().copied().map(index_to_symbol).collect()
}
