//! Static tables the codec is configured with.

use crate::types::{CharacterStats, Stat};

/// Number of quantity-tracked item ids.
pub const QUANTITY_ITEM_COUNT: usize = 23;

/// Number of special items in the Silver/Bronze bitmask.
pub const SPECIAL_ITEM_COUNT: usize = 8;

/// Largest coin count a password can carry.
pub const MAX_COINS: u32 = 999_999;

/// Bit width and valid range of one stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatDefinition {
    pub stat: Stat,
    pub bits: u8,
    pub min: i32,
    pub max: i32,
}

impl StatDefinition {
    #[must_use]
    pub const fn new(stat: Stat, bits: u8, min: i32, max: i32) -> Self {
        Self {
            stat,
            bits,
            min,
            max,
        }
    }

    /// Saturates `value` into `min..=max`.
    #[must_use]
    pub const fn clamp(&self, value: i32) -> i32 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

/// Tables owned by a [`Codec`](crate::Codec).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecTables {
    /// One definition per stat, in [`Stat::ALL`] order.
    pub stats: [StatDefinition; 7],
    /// Item id for each bit of the special-item bitmask, bit 0 first.
    pub special_item_ids: [u16; SPECIAL_ITEM_COUNT],
    /// Items whose stack size is stored in Gold passwords, in storage order.
    /// Ids are non-zero, since a zero id marks an empty slot.
    pub quantity_item_ids: [u16; QUANTITY_ITEM_COUNT],
    pub max_coins: u32,
}

impl Default for CodecTables {
    fn default() -> Self {
        Self {
            stats: [
                StatDefinition::new(Stat::Level, 7, 1, 99),
                StatDefinition::new(Stat::HpMax, 11, 0, 1999),
                StatDefinition::new(Stat::PpMax, 11, 0, 1999),
                StatDefinition::new(Stat::Attack, 10, 0, 999),
                StatDefinition::new(Stat::Defense, 10, 0, 999),
                StatDefinition::new(Stat::Agility, 10, 0, 999),
                StatDefinition::new(Stat::Luck, 7, 0, 99),
            ],
            special_item_ids: [0xC8, 0xC9, 0xCA, 0xCB, 0xCC, 0xCD, 0xCE, 0xCF],
            quantity_item_ids: [
                0xB4, 0xB5, 0xB6, 0xB7, 0xBA, 0xBB, 0xBC, 0xBD, 0xBF, 0xC0, 0xC1, 0xC2, 0xC3,
                0xC4, 0xE2, 0xE3, 0xE4, 0xE5, 0xEC, 0xEE, 0xEF, 0xF0, 0xF1,
            ],
            max_coins: MAX_COINS,
        }
    }
}

impl CodecTables {
    #[must_use]
    pub const fn stat(&self, stat: Stat) -> &StatDefinition {
        &self.stats[stat.index()]
    }

    #[must_use]
    pub fn is_quantity_tracked(&self, item_id: u16) -> bool {
        self.quantity_item_ids.contains(&item_id)
    }

    /// Copy of `stats` with every value clamped to its definition.
    #[must_use]
    pub fn clamp_stats(&self, stats: &CharacterStats) -> CharacterStats {
        let mut clamped = *stats;
        for stat in Stat::ALL {
            clamped.set(stat, self.stat(stat).clamp(stats.get(stat)));
        }
        clamped
    }
}
