//! Field layout of password data bytes.
//!
//! | Bytes        | Gold                       | Silver          | Bronze          |
//! |--------------|----------------------------|-----------------|-----------------|
//! | 0..=3        | levels (4 x 7 bits)        | same            | same            |
//! | 3..=6        | djinn (4 x 7 bits)         | same            | same            |
//! | 7            | event flags                | same            | same            |
//! | 8            | stats start                | special items   | special items   |
//! | 8..=37       | stats (4 x 60 bits)        | 9..=38          |                 |
//! | 39..=107     | item ids (60 x 9 bits)     |                 |                 |
//! | 107..=164    | quantities (92 x 5 bits)   |                 |                 |
//! | 165..=167    | coins (24 bits BE)         |                 |                 |
//!
//! Levels and djinn are each folded into a 28-bit value (`Σ v_j << 7j`) and
//! stored little-endian, sharing byte 3 by nibble. Each character's stats are
//! two 32-bit words; the low nibble of the second word is always zero and is
//! not stored, so two characters fill exactly 15 bytes.

use bitstream::{BitReader, BitWriter};
use wire::PasswordSize;

use crate::error::{CodecError, CodecResult};
use crate::tables::CodecTables;
use crate::types::{
    CharacterStats, ItemSlot, Snapshot, Stat, CHARACTER_COUNT, DJINN_MASK, FLAGS_MASK,
    ITEM_SLOTS,
};

const GOLD_STATS_BYTE: usize = 8;
const SILVER_STATS_BYTE: usize = 9;
const ITEM_IDS_BYTE: usize = 39;
const COINS_BYTE: usize = 165;

const FOLD_BITS: u32 = 7;
const ITEM_ID_BITS: u8 = 9;
const ITEM_ID_MASK: u16 = 0x1FF;
/// A padding bit follows every run of seven item ids.
const ITEM_IDS_PER_RUN: usize = 7;
const QUANTITY_BITS: u8 = 5;
const MAX_QUANTITY: u8 = 32;
const COIN_BITS: u8 = 24;
const COIN_MASK: u32 = 0x00FF_FFFF;

const STAT_WORD_BITS: u8 = 32;
/// The second stat word drops its (always zero) low nibble.
const STAT_WORD1_SHIFT: u8 = 4;

/// Where each stat sits inside a character's two words: (stat, word, shift, bits).
const STAT_FIELDS: [(Stat, usize, u32, u32); 6] = [
    (Stat::Attack, 0, 0, 10),
    (Stat::PpMax, 0, 10, 11),
    (Stat::HpMax, 0, 21, 11),
    (Stat::Luck, 1, 4, 7),
    (Stat::Agility, 1, 12, 10),
    (Stat::Defense, 1, 22, 10),
];

/// Packs `snapshot` into the data bytes of a `size` password.
///
/// Works on clamped copies; out-of-range values saturate instead of failing.
pub(crate) fn pack(
    snapshot: &Snapshot,
    size: PasswordSize,
    tables: &CodecTables,
) -> CodecResult<Vec<u8>> {
    let mut data = vec![0u8; size.data_bytes()];
    let mut writer = BitWriter::new(&mut data);

    let stats = snapshot
        .characters
        .map(|character| tables.clamp_stats(&character));
    write_header(&mut writer, snapshot, &stats)?;

    match size {
        PasswordSize::Gold => {
            write_stats(&mut writer, GOLD_STATS_BYTE, &stats)?;
            write_items(&mut writer, snapshot, tables)?;
            writer.seek(COINS_BYTE * 8)?;
            let coins = snapshot.coins.min(tables.max_coins) & COIN_MASK;
            writer.write_bits(u64::from(coins), COIN_BITS)?;
        }
        PasswordSize::Silver => {
            writer.write_u8(snapshot.special_items)?;
            write_stats(&mut writer, SILVER_STATS_BYTE, &stats)?;
        }
        PasswordSize::Bronze => {
            writer.write_u8(snapshot.special_items)?;
        }
    }

    Ok(data)
}

/// Unpacks the data bytes of a `size` password.
pub(crate) fn unpack(
    data: &[u8],
    size: PasswordSize,
    tables: &CodecTables,
) -> CodecResult<Snapshot> {
    if data.len() != size.data_bytes() {
        return Err(CodecError::DataLength {
            size,
            expected: size.data_bytes(),
            actual: data.len(),
        });
    }

    let mut snapshot = Snapshot::new();
    let mut reader = BitReader::new(data);
    read_header(&mut reader, &mut snapshot)?;

    match size {
        PasswordSize::Gold => {
            read_stats(&mut reader, GOLD_STATS_BYTE, &mut snapshot)?;
            read_items(&mut reader, &mut snapshot, tables)?;
            reader.seek(COINS_BYTE * 8)?;
            snapshot.coins = reader.read_bits(COIN_BITS)? as u32;
        }
        PasswordSize::Silver => {
            snapshot.special_items = reader.read_u8()?;
            read_stats(&mut reader, SILVER_STATS_BYTE, &mut snapshot)?;
            expand_special_items(&mut snapshot, tables);
        }
        PasswordSize::Bronze => {
            snapshot.special_items = reader.read_u8()?;
            expand_special_items(&mut snapshot, tables);
        }
    }

    Ok(snapshot)
}

/// What a `size` password preserves of `snapshot`.
///
/// Equal to decoding the password `snapshot` encodes to: values clamped and
/// masked, quantities normalized, and fields the size does not carry reset.
pub(crate) fn retain(snapshot: &Snapshot, size: PasswordSize, tables: &CodecTables) -> Snapshot {
    let mut out = Snapshot::new();
    for (dst, src) in out.characters.iter_mut().zip(&snapshot.characters) {
        let clamped = tables.clamp_stats(src);
        *dst = match size {
            PasswordSize::Bronze => CharacterStats {
                level: clamped.level,
                ..ZERO_STATS
            },
            PasswordSize::Gold | PasswordSize::Silver => clamped,
        };
    }
    out.djinn = snapshot.djinn.map(|set| set & DJINN_MASK);
    out.flags = snapshot.flags & FLAGS_MASK;

    match size {
        PasswordSize::Gold => {
            for (dst, src) in out.items.iter_mut().zip(&snapshot.items) {
                *dst = retained_inventory(src, tables);
            }
            out.coins = snapshot.coins.min(tables.max_coins) & COIN_MASK;
        }
        PasswordSize::Silver | PasswordSize::Bronze => {
            out.special_items = snapshot.special_items;
            expand_special_items(&mut out, tables);
        }
    }
    out
}

const ZERO_STATS: CharacterStats = CharacterStats {
    level: 0,
    hp_max: 0,
    pp_max: 0,
    attack: 0,
    defense: 0,
    agility: 0,
    luck: 0,
};

fn fold(values: [u32; CHARACTER_COUNT]) -> u32 {
    values
        .iter()
        .enumerate()
        .fold(0, |acc, (j, &v)| acc | ((v & 0x7F) << (FOLD_BITS * j as u32)))
}

fn unfold(folded: u32) -> [u8; CHARACTER_COUNT] {
    std::array::from_fn(|j| ((folded >> (FOLD_BITS * j as u32)) & 0x7F) as u8)
}

fn non_negative(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}

fn write_header(
    writer: &mut BitWriter<'_>,
    snapshot: &Snapshot,
    stats: &[CharacterStats; CHARACTER_COUNT],
) -> CodecResult<()> {
    let levels = fold(stats.map(|s| non_negative(s.level)));
    let djinn = fold(snapshot.djinn.map(u32::from));

    writer.write_bits(u64::from(levels & 0xFF), 8)?;
    writer.write_bits(u64::from((levels >> 8) & 0xFF), 8)?;
    writer.write_bits(u64::from((levels >> 16) & 0xFF), 8)?;
    writer.write_bits(u64::from((levels >> 24) & 0x0F), 4)?;
    writer.write_bits(u64::from(djinn & 0x0F), 4)?;
    writer.write_bits(u64::from((djinn >> 4) & 0xFF), 8)?;
    writer.write_bits(u64::from((djinn >> 12) & 0xFF), 8)?;
    writer.write_bits(u64::from((djinn >> 20) & 0xFF), 8)?;
    writer.write_u8(snapshot.flags & FLAGS_MASK)?;
    Ok(())
}

fn read_header(reader: &mut BitReader<'_>, snapshot: &mut Snapshot) -> CodecResult<()> {
    let mut levels = reader.read_bits(8)? as u32;
    levels |= (reader.read_bits(8)? as u32) << 8;
    levels |= (reader.read_bits(8)? as u32) << 16;
    levels |= (reader.read_bits(4)? as u32) << 24;
    let mut djinn = reader.read_bits(4)? as u32;
    djinn |= (reader.read_bits(8)? as u32) << 4;
    djinn |= (reader.read_bits(8)? as u32) << 12;
    djinn |= (reader.read_bits(8)? as u32) << 20;

    for (character, level) in snapshot.characters.iter_mut().zip(unfold(levels)) {
        character.level = i32::from(level);
    }
    snapshot.djinn = unfold(djinn);
    snapshot.flags = reader.read_u8()? & FLAGS_MASK;
    Ok(())
}

fn stat_words(stats: &CharacterStats) -> [u32; 2] {
    let mut words = [0u32; 2];
    for (stat, word, shift, bits) in STAT_FIELDS {
        let mask = (1u32 << bits) - 1;
        words[word] |= (non_negative(stats.get(stat)) & mask) << shift;
    }
    words
}

fn write_stats(
    writer: &mut BitWriter<'_>,
    byte: usize,
    stats: &[CharacterStats; CHARACTER_COUNT],
) -> CodecResult<()> {
    writer.seek(byte * 8)?;
    for character in stats {
        let [w0, w1] = stat_words(character);
        writer.write_bits(u64::from(w0), STAT_WORD_BITS)?;
        writer.write_bits(
            u64::from(w1 >> STAT_WORD1_SHIFT),
            STAT_WORD_BITS - STAT_WORD1_SHIFT,
        )?;
    }
    Ok(())
}

fn read_stats(
    reader: &mut BitReader<'_>,
    byte: usize,
    snapshot: &mut Snapshot,
) -> CodecResult<()> {
    reader.seek(byte * 8)?;
    for character in &mut snapshot.characters {
        let w0 = reader.read_bits(STAT_WORD_BITS)? as u32;
        let w1 = (reader.read_bits(STAT_WORD_BITS - STAT_WORD1_SHIFT)? as u32) << STAT_WORD1_SHIFT;
        let words = [w0, w1];
        for (stat, word, shift, bits) in STAT_FIELDS {
            let mask = (1u32 << bits) - 1;
            character.set(stat, ((words[word] >> shift) & mask) as i32);
        }
    }
    Ok(())
}

/// Slot holding the stack of `item_id`: the last one with that id.
fn stack_slot(inventory: &[ItemSlot; ITEM_SLOTS], item_id: u16) -> Option<usize> {
    inventory
        .iter()
        .rposition(|slot| slot.item_id & ITEM_ID_MASK == item_id)
}

fn write_items(
    writer: &mut BitWriter<'_>,
    snapshot: &Snapshot,
    tables: &CodecTables,
) -> CodecResult<()> {
    writer.seek(ITEM_IDS_BYTE * 8)?;
    for (i, slot) in snapshot.items.iter().flatten().enumerate() {
        writer.write_bits(u64::from(slot.item_id & ITEM_ID_MASK), ITEM_ID_BITS)?;
        if i % ITEM_IDS_PER_RUN == ITEM_IDS_PER_RUN - 1 {
            writer.skip(1)?;
        }
    }

    for inventory in &snapshot.items {
        for &item_id in &tables.quantity_item_ids {
            let stored = stack_slot(inventory, item_id)
                .map_or(0, |s| inventory[s].quantity.clamp(1, MAX_QUANTITY) - 1);
            writer.write_bits(u64::from(stored), QUANTITY_BITS)?;
        }
    }
    Ok(())
}

fn read_items(
    reader: &mut BitReader<'_>,
    snapshot: &mut Snapshot,
    tables: &CodecTables,
) -> CodecResult<()> {
    reader.seek(ITEM_IDS_BYTE * 8)?;
    let mut i = 0;
    for inventory in &mut snapshot.items {
        for slot in inventory.iter_mut() {
            let item_id = reader.read_bits(ITEM_ID_BITS)? as u16;
            *slot = ItemSlot::new(item_id, u8::from(item_id != 0));
            if i % ITEM_IDS_PER_RUN == ITEM_IDS_PER_RUN - 1 {
                reader.skip(1)?;
            }
            i += 1;
        }
    }

    for inventory in &mut snapshot.items {
        for &item_id in &tables.quantity_item_ids {
            let stored = reader.read_bits(QUANTITY_BITS)? as u8;
            if let Some(s) = stack_slot(inventory, item_id) {
                inventory[s].quantity = stored + 1;
            }
        }
    }
    Ok(())
}

fn retained_inventory(
    inventory: &[ItemSlot; ITEM_SLOTS],
    tables: &CodecTables,
) -> [ItemSlot; ITEM_SLOTS] {
    let mut out = inventory.map(|slot| {
        let item_id = slot.item_id & ITEM_ID_MASK;
        ItemSlot::new(item_id, u8::from(item_id != 0))
    });
    for s in 0..ITEM_SLOTS {
        let item_id = out[s].item_id;
        if tables.is_quantity_tracked(item_id) && stack_slot(&out, item_id) == Some(s) {
            out[s].quantity = inventory[s].quantity.clamp(1, MAX_QUANTITY);
        }
    }
    out
}

/// Lists the special items of the bitmask in the first character's inventory.
fn expand_special_items(snapshot: &mut Snapshot, tables: &CodecTables) {
    let mask = snapshot.special_items;
    let owned = tables
        .special_item_ids
        .iter()
        .enumerate()
        .filter(|(bit, _)| mask & (1 << bit) != 0)
        .map(|(_, &item_id)| ItemSlot::new(item_id, 1));
    for (slot, item) in snapshot.items[0].iter_mut().zip(owned) {
        *slot = item;
    }
}
