//! Core types for the codec.

use std::fmt;

/// Number of party characters carried by a password.
pub const CHARACTER_COUNT: usize = 4;

/// Inventory slots per character.
pub const ITEM_SLOTS: usize = 15;

/// Djinn per element.
pub const DJINN_PER_ELEMENT: u8 = 7;

/// Mask of the meaningful bits in a per-element djinn set.
pub const DJINN_MASK: u8 = 0x7F;

/// Mask of the meaningful bits in the event flag set.
pub const FLAGS_MASK: u8 = 0x3F;

/// A character statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Stat {
    Level,
    HpMax,
    PpMax,
    Attack,
    Defense,
    Agility,
    Luck,
}

impl Stat {
    /// Every stat, in table order.
    pub const ALL: [Self; 7] = [
        Self::Level,
        Self::HpMax,
        Self::PpMax,
        Self::Attack,
        Self::Defense,
        Self::Agility,
        Self::Luck,
    ];

    /// Position of the stat in [`Stat::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Level => "level",
            Self::HpMax => "hp_max",
            Self::PpMax => "pp_max",
            Self::Attack => "attack",
            Self::Defense => "defense",
            Self::Agility => "agility",
            Self::Luck => "luck",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stats of one character.
///
/// Values are plain integers so an editor can hold out-of-range input; the
/// encoder clamps them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterStats {
    pub level: i32,
    pub hp_max: i32,
    pub pp_max: i32,
    pub attack: i32,
    pub defense: i32,
    pub agility: i32,
    pub luck: i32,
}

impl CharacterStats {
    /// A fresh character: level 1, everything else zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            level: 1,
            hp_max: 0,
            pp_max: 0,
            attack: 0,
            defense: 0,
            agility: 0,
            luck: 0,
        }
    }

    #[must_use]
    pub const fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Level => self.level,
            Stat::HpMax => self.hp_max,
            Stat::PpMax => self.pp_max,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::Agility => self.agility,
            Stat::Luck => self.luck,
        }
    }

    pub fn set(&mut self, stat: Stat, value: i32) {
        let slot = match stat {
            Stat::Level => &mut self.level,
            Stat::HpMax => &mut self.hp_max,
            Stat::PpMax => &mut self.pp_max,
            Stat::Attack => &mut self.attack,
            Stat::Defense => &mut self.defense,
            Stat::Agility => &mut self.agility,
            Stat::Luck => &mut self.luck,
        };
        *slot = value;
    }
}

impl Default for CharacterStats {
    fn default() -> Self {
        Self::new()
    }
}

/// One inventory slot. Item id 0 is an empty slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSlot {
    pub item_id: u16,
    pub quantity: u8,
}

impl ItemSlot {
    pub const EMPTY: Self = Self {
        item_id: 0,
        quantity: 0,
    };

    #[must_use]
    pub const fn new(item_id: u16, quantity: u8) -> Self {
        Self { item_id, quantity }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.item_id == 0
    }
}

/// The four elements, used to index djinn sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Element {
    Venus,
    Mercury,
    Mars,
    Jupiter,
}

impl Element {
    pub const ALL: [Self; 4] = [Self::Venus, Self::Mercury, Self::Mars, Self::Jupiter];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Venus => "Venus",
            Self::Mercury => "Mercury",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Game state carried by a password.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub characters: [CharacterStats; CHARACTER_COUNT],
    /// Inventory, character-major.
    pub items: [[ItemSlot; ITEM_SLOTS]; CHARACTER_COUNT],
    /// One bitmask per [`Element`], low seven bits meaningful.
    pub djinn: [u8; 4],
    /// Event flags, low six bits meaningful.
    pub flags: u8,
    /// Special-item bitmask carried by Silver and Bronze passwords.
    pub special_items: u8,
    pub coins: u32,
}

impl Snapshot {
    /// An empty snapshot: every character at level 1, everything else zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            characters: [CharacterStats::new(); CHARACTER_COUNT],
            items: [[ItemSlot::EMPTY; ITEM_SLOTS]; CHARACTER_COUNT],
            djinn: [0; 4],
            flags: 0,
            special_items: 0,
            coins: 0,
        }
    }

    /// Returns whether djinn `index` (0..7) of `element` is set.
    #[must_use]
    pub const fn has_djinn(&self, element: Element, index: u8) -> bool {
        index < DJINN_PER_ELEMENT && self.djinn[element.index()] & (1 << index) != 0
    }

    /// Sets or clears djinn `index` of `element`. Indices past 6 are ignored.
    pub fn set_djinn(&mut self, element: Element, index: u8, present: bool) {
        if index >= DJINN_PER_ELEMENT {
            return;
        }
        let set = &mut self.djinn[element.index()];
        if present {
            *set |= 1 << index;
        } else {
            *set &= !(1 << index);
        }
    }

    /// Number of djinn collected for `element`.
    #[must_use]
    pub const fn djinn_count(&self, element: Element) -> u32 {
        (self.djinn[element.index()] & DJINN_MASK).count_ones()
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new()
    }
}
