//! Inspection tools for transfer passwords.
//!
//! This crate turns decoded passwords into something a person can read:
//!
//! - Print a password in the rows and pages it is shown in-game
//! - Describe a decoded snapshot with character, djinn and event names
//! - Report which rows of a mistyped password fail their check symbol
//!
//! # Design Principles
//!
//! - **Presentation only** - All decoding goes through the codec facade.
//! - **Human-readable output** - Make it easy to see what a password holds.

use std::fmt::Write as _;

use codec::{CodecError, Decoded, Element, PasswordSize, Snapshot, ITEM_SLOTS};
use serde::{Deserialize, Serialize};
use wire::{ChecksumGroup, GROUP_LEN, ROWS_PER_PAGE};

pub const CHARACTER_NAMES: [&str; 4] = ["Isaac", "Garet", "Ivan", "Mia"];

pub const DJINN_NAMES: [[&str; 7]; 4] = [
    ["Flint", "Granite", "Quartz", "Vine", "Sap", "Ground", "Bane"],
    ["Fizz", "Sleet", "Mist", "Spritz", "Hail", "Tonic", "Dew"],
    ["Forge", "Fever", "Corona", "Scorch", "Ember", "Flash", "Torch"],
    ["Gust", "Breeze", "Zephyr", "Smog", "Kite", "Squall", "Luff"],
];

pub const EVENT_FLAG_NAMES: [&str; 6] = [
    "Save Hammet",
    "Beat Colosso",
    "Hsu Died",
    "Beat Deadbeard",
    "Return to Vale",
    "Return to Vault",
];

/// Characters per half-row when a password is printed.
const HALF_ROW: usize = GROUP_LEN / 2;

/// A failing checksum row, as shown to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowReport {
    pub page: usize,
    pub row: usize,
}

impl From<ChecksumGroup> for RowReport {
    fn from(group: ChecksumGroup) -> Self {
        Self {
            page: group.page(),
            row: group.row(),
        }
    }
}

/// Machine-readable form of a decode failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub kind: String,
    pub detail: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failing_rows: Vec<RowReport>,
}

impl From<&CodecError> for ErrorReport {
    fn from(err: &CodecError) -> Self {
        Self {
            kind: err.kind().as_str().to_string(),
            detail: err.to_string(),
            failing_rows: err
                .failing_groups()
                .iter()
                .copied()
                .map(RowReport::from)
                .collect(),
        }
    }
}

/// Lays a password out in rows of ten, split into halves, with a blank line
/// between pages.
#[must_use]
pub fn format_password(password: &str) -> String {
    let chars: Vec<char> = password.chars().collect();
    let mut out = String::new();
    for (i, row) in chars.chunks(GROUP_LEN).enumerate() {
        if i > 0 {
            out.push('\n');
            if i % ROWS_PER_PAGE == 0 {
                out.push('\n');
            }
        }
        for (j, half) in row.chunks(HALF_ROW).enumerate() {
            if j > 0 {
                out.push(' ');
            }
            out.extend(half);
        }
    }
    out
}

/// Names of the djinn collected for `element`, in bit order.
#[must_use]
pub fn collected_djinn(snapshot: &Snapshot, element: Element) -> Vec<&'static str> {
    DJINN_NAMES[element.index()]
        .iter()
        .enumerate()
        .filter(|(i, _)| snapshot.has_djinn(element, *i as u8))
        .map(|(_, name)| *name)
        .collect()
}

/// Names of the event flags set in `snapshot`.
#[must_use]
pub fn set_event_flags(snapshot: &Snapshot) -> Vec<&'static str> {
    EVENT_FLAG_NAMES
        .iter()
        .enumerate()
        .filter(|(i, _)| snapshot.flags & (1 << i) != 0)
        .map(|(_, name)| *name)
        .collect()
}

/// Human-readable description of a decoded password.
#[must_use]
pub fn format_decoded_pretty(password: &str, decoded: &Decoded) -> String {
    let snapshot = &decoded.snapshot;
    let size = decoded.size;
    let mut out = String::new();

    let rule = "=".repeat(60);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "  Password size: {} ({} characters)",
        size.name(),
        size.char_count()
    );
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "\n{}", format_password(password));

    let _ = writeln!(out, "\n--- Characters ---");
    for (name, character) in CHARACTER_NAMES.iter().zip(&snapshot.characters) {
        let _ = writeln!(out, "  {name} (Level {})", character.level);
        if size != PasswordSize::Bronze {
            let _ = writeln!(
                out,
                "    HP: {}  PP: {}",
                character.hp_max, character.pp_max
            );
            let _ = writeln!(
                out,
                "    Attack: {}  Defense: {}  Agility: {}  Luck: {}",
                character.attack, character.defense, character.agility, character.luck
            );
        }
    }

    let _ = writeln!(out, "\n--- Djinn ---");
    for element in Element::ALL {
        let collected = collected_djinn(snapshot, element);
        let list = if collected.is_empty() {
            "none".to_string()
        } else {
            collected.join(", ")
        };
        let _ = writeln!(out, "  {element} ({}/7): {list}", collected.len());
    }

    let _ = writeln!(out, "\n--- Events ---");
    let flags = set_event_flags(snapshot);
    if flags.is_empty() {
        let _ = writeln!(out, "  none");
    }
    for flag in flags {
        let _ = writeln!(out, "  {flag}");
    }

    let _ = writeln!(out, "\n--- Items ---");
    for (name, inventory) in CHARACTER_NAMES.iter().zip(&snapshot.items) {
        let held: Vec<String> = inventory
            .iter()
            .filter(|slot| !slot.is_empty())
            .map(|slot| {
                if slot.quantity > 1 {
                    format!("0x{:03x} x{}", slot.item_id, slot.quantity)
                } else {
                    format!("0x{:03x}", slot.item_id)
                }
            })
            .collect();
        if held.is_empty() {
            continue;
        }
        let _ = writeln!(out, "  {name} ({}/{ITEM_SLOTS}): {}", held.len(), held.join(", "));
    }

    if size == PasswordSize::Gold {
        let _ = writeln!(out, "\n--- Coins ---");
        let _ = writeln!(out, "  {}", snapshot.coins);
    }
    out
}

/// One line per failing row, or a single line saying every row is valid.
#[must_use]
pub fn format_check_report(groups: &[ChecksumGroup], complete_rows: usize) -> String {
    if groups.is_empty() {
        return format!("all {complete_rows} checksum rows valid");
    }
    let mut out = format!(
        "{} of {complete_rows} checksum rows failed:",
        groups.len()
    );
    for group in groups {
        let _ = write!(out, "\n  {group}");
    }
    out
}
