//! Static content types: rarity and mutation tables, species, equipment and
//! consumable specs, locations, weather, and world events.

use serde::{Deserialize, Serialize};

/// Rarity tiers for fish, from most to least common.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Epic = 3,
    Legendary = 4,
    Mythic = 5,
    Secret = 6,
    Mysterious = 7,
    Anonymous = 8,
    Dev = 9,
    Executors = 10,
}

/// Base spawn weight per tier, indexed by `Rarity as usize`.
const SPAWN_WEIGHTS: [f64; 11] = [
    42.0, 24.0, 14.0, 10.0, 5.0, 3.0, 1.5, 0.4, 0.08, 0.015, 0.005,
];

/// Minimum composed luck for a tier to be eligible.
/// Secret sits at zero alongside Common and is reachable from the start.
const MINIMUM_LUCK: [f64; 11] = [
    0.0, 15.0, 150.0, 700.0, 2000.0, 30000.0, 0.0, 100000.0, 200000.0, 500000.0, 1000000.0,
];

/// Sale-value multiplier per tier.
const VALUE_MULTIPLIERS: [f64; 11] = [
    1.0, 1.8, 3.0, 6.0, 12.0, 30.0, 60.0, 120.0, 300.0, 600.0, 1200.0,
];

impl Rarity {
    pub const ALL: [Rarity; 11] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Mythic,
        Rarity::Secret,
        Rarity::Mysterious,
        Rarity::Anonymous,
        Rarity::Dev,
        Rarity::Executors,
    ];

    /// Position in the tier order; also the fish strength rank while reeling.
    pub fn rank(self) -> usize {
        self as usize
    }

    pub fn base_weight(self) -> f64 {
        SPAWN_WEIGHTS[self.rank()]
    }

    pub fn minimum_luck(self) -> f64 {
        MINIMUM_LUCK[self.rank()]
    }

    pub fn value_multiplier(self) -> f64 {
        VALUE_MULTIPLIERS[self.rank()]
    }

    /// Tiers that ignore luck gating entirely.
    pub fn is_always_available(self) -> bool {
        self.minimum_luck() == 0.0
    }

    pub fn name(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Mythic => "Mythic",
            Rarity::Secret => "Secret",
            Rarity::Mysterious => "Mysterious",
            Rarity::Anonymous => "Anonymous",
            Rarity::Dev => "Dev",
            Rarity::Executors => "Executors",
        }
    }
}

/// Value-multiplying tag rolled independently for each catch.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Mutation {
    Corrupt,
    Galaxy,
    Gemstone,
    Ghost,
    Lightning,
    FairyDust,
    Midnight,
    Radioactive,
    Stone,
    Festive,
    Frozen,
}

impl Mutation {
    /// Roll order. The first mutation whose draw succeeds wins, so earlier
    /// entries shadow later ones; this order is part of game balance.
    pub const ROLL_ORDER: [Mutation; 11] = [
        Mutation::Corrupt,
        Mutation::Galaxy,
        Mutation::Gemstone,
        Mutation::Ghost,
        Mutation::Lightning,
        Mutation::FairyDust,
        Mutation::Midnight,
        Mutation::Radioactive,
        Mutation::Stone,
        Mutation::Festive,
        Mutation::Frozen,
    ];

    /// Base chance in percent.
    pub fn base_chance(self) -> f64 {
        match self {
            Mutation::Corrupt => 0.5,
            Mutation::Galaxy => 0.1,
            Mutation::Gemstone => 0.3,
            Mutation::Ghost => 1.0,
            Mutation::Lightning => 0.4,
            Mutation::FairyDust => 1.5,
            Mutation::Midnight => 0.3,
            Mutation::Radioactive => 0.5,
            Mutation::Stone => 5.0,
            Mutation::Festive => 0.2,
            Mutation::Frozen => 2.0,
        }
    }

    pub fn value_multiplier(self) -> f64 {
        match self {
            Mutation::Corrupt => 3.0,
            Mutation::Galaxy => 5.5,
            Mutation::Gemstone => 3.8,
            Mutation::Ghost => 2.5,
            Mutation::Lightning => 3.2,
            Mutation::FairyDust => 2.8,
            Mutation::Midnight => 3.8,
            Mutation::Radioactive => 3.0,
            Mutation::Stone => 1.2,
            Mutation::Festive => 2.6,
            Mutation::Frozen => 2.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mutation::Corrupt => "corrupt",
            Mutation::Galaxy => "galaxy",
            Mutation::Gemstone => "gemstone",
            Mutation::Ghost => "ghost",
            Mutation::Lightning => "lightning",
            Mutation::FairyDust => "fairy-dust",
            Mutation::Midnight => "midnight",
            Mutation::Radioactive => "radioactive",
            Mutation::Stone => "stone",
            Mutation::Festive => "festive",
            Mutation::Frozen => "frozen",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FishSpecies {
    pub id: &'static str,
    pub name: &'static str,
    pub rarity: Rarity,
    pub base_value: f64,
    pub xp: u64,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RodSpec {
    pub id: &'static str,
    pub name: &'static str,
    /// `None` for rods that can only be unlocked.
    pub price: Option<u64>,
    pub unlock: Option<&'static str>,
    pub luck: f64,
    /// Maximum fish weight in kg; also gates which locations are reachable.
    pub weight: f64,
    pub speed: f64,
    pub endurance: f64,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaitEffect {
    pub attraction: f64,
    /// Multiplies composed luck for rarity selection.
    pub rare_chance: f64,
    /// Multiplies the per-frame bite chance.
    pub bite_speed: f64,
    /// Casts before the bait is used up.
    pub durability: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaitSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub base_price: u64,
    pub price_increase: f64,
    pub icon: &'static str,
    pub effect: BaitEffect,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PotionSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub base_price: u64,
    pub price_increase: f64,
    /// Flat luck added while active.
    pub potency: f64,
    pub duration_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnchantmentTier {
    Regular,
    Exalted,
    Cosmic,
}

impl EnchantmentTier {
    /// Cosmic enchantments go in the cosmic slot, everything else in the
    /// regular slot.
    pub fn slot(self) -> EnchantSlot {
        match self {
            EnchantmentTier::Cosmic => EnchantSlot::Cosmic,
            EnchantmentTier::Regular | EnchantmentTier::Exalted => EnchantSlot::Regular,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnchantSlot {
    Regular,
    Cosmic,
}

/// Stat bonuses an enchantment grants. Percent-style fields are additive,
/// `xp_boost` is multiplicative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnchantStats {
    pub luck: f64,
    pub speed: f64,
    pub resilience: f64,
    pub xp_boost: f64,
    pub progress_speed: f64,
    pub mutation_chance: f64,
    pub size_increase: f64,
    pub control: f64,
    pub max_kg: f64,
}

pub const NO_STATS: EnchantStats = EnchantStats {
    luck: 0.0,
    speed: 0.0,
    resilience: 0.0,
    xp_boost: 1.0,
    progress_speed: 0.0,
    mutation_chance: 0.0,
    size_increase: 0.0,
    control: 0.0,
    max_kg: 0.0,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enchantment {
    pub id: &'static str,
    pub name: &'static str,
    pub tier: EnchantmentTier,
    pub description: &'static str,
    pub stats: EnchantStats,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub id: &'static str,
    pub name: &'static str,
    pub difficulty: u32,
    /// Action locations open a screen instead of being travelled to.
    pub is_action: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    Sunny,
    Rainy,
    Stormy,
}

impl Default for Weather {
    fn default() -> Self {
        Weather::Sunny
    }
}

impl Weather {
    pub fn luck_multiplier(self) -> f64 {
        match self {
            Weather::Sunny => 1.0,
            Weather::Rainy => 1.15,
            Weather::Stormy => 1.3,
        }
    }

    /// Spawn-weight multiplier this weather gives a tier (1.0 when unlisted).
    pub fn rarity_bonus(self, rarity: Rarity) -> f64 {
        match (self, rarity) {
            (Weather::Sunny, Rarity::Common) => 1.1,
            (Weather::Rainy, Rarity::Rare) => 1.2,
            (Weather::Rainy, Rarity::Epic) => 1.1,
            (Weather::Stormy, Rarity::Legendary) => 1.5,
            (Weather::Stormy, Rarity::Mythic) => 1.2,
            _ => 1.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Weather::Sunny => "Sunny",
            Weather::Rainy => "Rainy",
            Weather::Stormy => "Stormy",
        }
    }
}

/// When during the day/night cycle an event may start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventWindow {
    Day,
    Night,
    All,
}

impl EventWindow {
    pub fn allows(self, is_day: bool) -> bool {
        match self {
            EventWindow::All => true,
            EventWindow::Day => is_day,
            EventWindow::Night => !is_day,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventEffects {
    /// Percent bonus to composed luck.
    pub luck: Option<f64>,
    /// Percent bonus to sale value.
    pub value: Option<f64>,
    pub spawn_rate: &'static [(Rarity, f64)],
}

impl EventEffects {
    /// Spawn-weight multiplier for a tier (1.0 when unlisted).
    pub fn spawn_bonus(&self, rarity: Rarity) -> f64 {
        self.spawn_rate
            .iter()
            .find(|(r, _)| *r == rarity)
            .map(|(_, m)| *m)
            .unwrap_or(1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldEventSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub duration_secs: u64,
    pub window: EventWindow,
    pub effects: EventEffects,
}

/// Weight-size bucket: fish up to `max_kg` with relative `chance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightBucket {
    pub max_kg: f64,
    pub chance: f64,
}

/// What kind of stackable item an id refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Bait,
    Potion,
    Material,
}
