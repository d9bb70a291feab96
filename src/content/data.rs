//! Built-in content tables.

use super::types::*;

pub static SPECIES: &[FishSpecies] = &[
    fish("skitterfin-fish", "Skitterfin Fish", Rarity::Common, 10.0, 5, "🐟"),
    fish("pebbletooth-fish", "Pebbletooth Fish", Rarity::Common, 8.0, 4, "🐟"),
    fish("mudskipper-grump-fish", "Mudskipper Grump Fish", Rarity::Common, 12.0, 6, "🐟"),
    fish("lukerjaw-fish", "Lukerjaw Fish", Rarity::Common, 15.0, 7, "🐟"),
    fish("finny-pout-fish", "Finny Pout Fish", Rarity::Common, 7.0, 3, "🐟"),
    fish("pomfret", "Pomfret", Rarity::Uncommon, 25.0, 12, "🐠"),
    fish("grouper", "Grouper", Rarity::Uncommon, 30.0, 15, "🐠"),
    fish("tuna", "Tuna", Rarity::Uncommon, 35.0, 18, "🐠"),
    fish("mackerel-tuna", "Mackerel Tuna", Rarity::Uncommon, 28.0, 14, "🐠"),
    fish("snapper", "Snapper", Rarity::Uncommon, 32.0, 16, "🐠"),
    fish("shark", "Shark", Rarity::Rare, 50.0, 25, "🦈"),
    fish("stingray", "Stingray", Rarity::Rare, 45.0, 22, "🐠"),
    fish("salmon", "Salmon", Rarity::Rare, 60.0, 30, "🐠"),
    fish("barracuda", "Barracuda", Rarity::Rare, 65.0, 32, "🦈"),
    fish("whale", "Whale", Rarity::Epic, 100.0, 50, "🐋"),
    fish("mermaid", "Mermaid", Rarity::Epic, 200.0, 100, "🧜"),
    fish("anglerfish", "Anglerfish", Rarity::Epic, 150.0, 75, "🐡"),
    fish("phoenix-fish", "Phoenix Fish", Rarity::Legendary, 500.0, 250, "🔥"),
    fish("kraken-fish", "Kraken Fish", Rarity::Legendary, 600.0, 300, "🐙"),
    fish("aurora-fish", "Aurora Fish", Rarity::Legendary, 550.0, 275, "✨"),
    fish("chimera-fish", "Chimera Fish", Rarity::Mythic, 2000.0, 1000, "🐲"),
    fish("pegasus-fish", "Pegasus Fish", Rarity::Mythic, 2200.0, 1100, "🦄"),
    fish("nebula-fish", "Nebula Fish", Rarity::Mythic, 2100.0, 1050, "🌌"),
    fish("secret-shark", "Secret Shark", Rarity::Secret, 5250.0, 2625, "🦈"),
    fish("elder-fish", "Elder Fish", Rarity::Mysterious, 15000.0, 7500, "👴"),
    fish("ancient-fish", "Ancient Fish", Rarity::Mysterious, 20000.0, 10000, "🏺"),
    fish("unknown-fish", "Unknown Fish", Rarity::Anonymous, 100000.0, 50000, "❓"),
    fish("nameless-fish", "Nameless Fish", Rarity::Anonymous, 150000.0, 75000, "🚫"),
    fish("developer-fish", "Developer Fish", Rarity::Dev, 1000000.0, 500000, "👨‍💻"),
    fish("programmer-fish", "Programmer Fish", Rarity::Dev, 1500000.0, 750000, "💻"),
    fish("executor-fish", "Executor Fish", Rarity::Executors, 10000000.0, 5000000, "⚡"),
    fish("admin-fish", "Admin Fish", Rarity::Executors, 15000000.0, 75000, "👑"),
];

const fn fish(
    id: &'static str,
    name: &'static str,
    rarity: Rarity,
    base_value: f64,
    xp: u64,
    icon: &'static str,
) -> FishSpecies {
    FishSpecies {
        id,
        name,
        rarity,
        base_value,
        xp,
        icon,
    }
}

pub const STARTER_ROD_ID: &str = "starter-rod";

pub static RODS: &[RodSpec] = &[
    rod("starter-rod", "Starter Rod", Some(0), 1.0, 10.0, 1.0, 5.0, "A basic rod to get started."),
    rod("toy-rod", "Toy Rod", Some(0), 35.0, 5.0, 5.0, 2.0, "Looks like a toy, but is surprisingly lucky."),
    rod("luck-rod", "Luck Rod", Some(250), 60.0, 25.0, 10.0, 10.0, "Made for anglers who believe in luck."),
    rod("grass-rod", "Grass Rod", Some(1_500), 40.0, 250.0, 25.0, 15.0, "Sturdy and woven from flexible grass."),
    rod("demascus-rod", "Demascus Rod", Some(3_000), 70.0, 500.0, 15.0, 12.0, "Forged from a rare metal."),
    rod("lucky-rod", "Lucky Rod", Some(10_000), 150.0, 800.0, 18.0, 15.0, "Fortune is on your side."),
    rod("midnight-rod", "Midnight Rod", Some(50_000), 120.0, 10_000.0, 45.0, 20.0, "Shrouded in the mystery of night."),
    rod("steampunk-rod", "Steampunk Rod", Some(215_000), 180.0, 60_000.0, 15.0, 18.0, "A marvel of gears and luck."),
    rod("chrome-rod", "Chrome Rod", Some(437_000), 230.0, 200_000.0, 30.0, 25.0, "Shiny, sleek and very strong."),
    rod("astral-rod", "Astral Rod", Some(1_000_000), 350.0, 500_000.0, 43.0, 30.0, "A fragment of the cosmos."),
    rod("celestial-rod", "Celestial Rod", Some(100_000), 60.0, 350_000.0, 50.0, 25.0, "Glows faintly under starlight."),
    rod("ethereal-prism-rod", "Ethereal Prism Rod", Some(15_000_000), 195.0, f64::INFINITY, 95.0, 40.0, "Splits light into every colour."),
    RodSpec {
        unlock: Some("Reach level 500"),
        ..rod("no-life-rod", "No-Life Rod", None, 105.0, f64::INFINITY, 90.0, 10.0, "For those who never log off.")
    },
    rod("heavens-rod", "Heaven's Rod", Some(1_750_000), 225.0, f64::INFINITY, 30.0, 30.0, "Blessed by the heavens."),
    rod("rod-of-the-depths", "Rod of the Depths", Some(750_000), 130.0, 30_000.0, 65.0, 10.0, "Pulled from the ocean floor."),
    rod("kraken-rod", "Kraken Rod", Some(1_333_333), 185.0, 115_000.0, 60.0, 15.0, "Eight arms worth of grip."),
    rod("zeus-rod", "Zeus Rod", Some(2_700_000), 90.0, 65_000.0, 70.0, 20.0, "Crackles with stored lightning."),
    rod("poseidon-rod", "Poseidon Rod", Some(1_555_555), 165.0, 100_000.0, 50.0, 40.0, "Commands the tides."),
    RodSpec {
        unlock: Some("Hand in 10 witch's ingredients"),
        ..rod("spooky-rod", "Spooky Rod", None, 66.0, 150_000.0, 75.0, -10.0, "Cold to the touch.")
    },
    rod("abyssal-rod", "Abyssal Rod", Some(500_000), 140.0, 200_000.0, 45.0, 35.0, "Tempered in the abyss."),
    rod("infernal-rod", "Infernal Rod", Some(850_000), 110.0, 80_000.0, 55.0, 20.0, "Never stops smouldering."),
    rod("crystal-rod", "Crystal Rod", Some(250_000), 85.0, 120_000.0, 65.0, 30.0, "Clear as still water."),
    rod("ancient-rod", "Ancient Rod", Some(1_000_000), 175.0, 500_000.0, 40.0, 45.0, "Older than the isles."),
    rod("thunder-rod", "Thunder Rod", Some(450_000), 95.0, 90_000.0, 70.0, 25.0, "Hums before a storm."),
    rod("galactic-rod", "Galactic Rod", Some(2_000_000), 155.0, 750_000.0, 85.0, 35.0, "Casts beyond the sky."),
    RodSpec {
        unlock: Some("Reach level 1000"),
        ..rod("seraphic-rod", "Seraphic Rod", None, 150.0, f64::INFINITY, 95.0, 20.0, "A beam of pure light.")
    },
];

#[allow(clippy::too_many_arguments)]
const fn rod(
    id: &'static str,
    name: &'static str,
    price: Option<u64>,
    luck: f64,
    weight: f64,
    speed: f64,
    endurance: f64,
    description: &'static str,
) -> RodSpec {
    RodSpec {
        id,
        name,
        price,
        unlock: None,
        luck,
        weight,
        speed,
        endurance,
        description,
    }
}

pub static BAITS: &[BaitSpec] = &[
    bait("worm-bait", "Worm Bait", 5, 1.1, "🪱", 1.2, 0.8, 1.1, 3),
    bait("shrimp-bait", "Shrimp Bait", 15, 1.15, "🦐", 1.5, 1.2, 1.0, 2),
    bait("caterpillar-bait", "Caterpillar Bait", 8, 1.12, "🐛", 1.3, 0.9, 1.3, 4),
    bait("cheese-bait", "Cheese Bait", 12, 1.18, "🧀", 1.1, 1.5, 0.8, 5),
    bait("bread-bait", "Bread Bait", 3, 1.05, "🍞", 1.0, 0.7, 1.0, 6),
    bait("meat-bait", "Meat Bait", 25, 1.25, "🥩", 1.8, 1.3, 1.2, 2),
    bait("artificial-lure", "Artificial Lure", 20, 1.2, "🎣", 1.4, 1.1, 1.1, 8),
    bait("golden-bait", "Golden Bait", 50, 1.4, "🌟", 2.0, 2.0, 1.5, 1),
    bait("mixed-bait", "Mixed Bait", 30, 1.3, "🍲", 1.6, 1.4, 1.2, 3),
];

#[allow(clippy::too_many_arguments)]
const fn bait(
    id: &'static str,
    name: &'static str,
    base_price: u64,
    price_increase: f64,
    icon: &'static str,
    attraction: f64,
    rare_chance: f64,
    bite_speed: f64,
    durability: u32,
) -> BaitSpec {
    BaitSpec {
        id,
        name,
        base_price,
        price_increase,
        icon,
        effect: BaitEffect {
            attraction,
            rare_chance,
            bite_speed,
            durability,
        },
    }
}

pub const LUCK_POTION_ID: &str = "luck-potion";

pub static POTIONS: &[PotionSpec] = &[PotionSpec {
    id: LUCK_POTION_ID,
    name: "Luck Potion",
    base_price: 30,
    price_increase: 1.25,
    potency: 40.0,
    duration_secs: 240,
}];

pub static MATERIALS: &[MaterialSpec] = &[MaterialSpec {
    id: crate::core::constants::RELIC_ITEM_ID,
    name: "Stonehenge Relic",
    icon: "💎",
}];

pub static REGULAR_ENCHANTMENTS: &[Enchantment] = &[
    regular("insight", "Insight", "1.5x XP and +20% lure speed.", EnchantStats { xp_boost: 1.5, speed: 20.0, ..NO_STATS }),
    regular("clever", "Clever", "2.25x XP from every catch.", EnchantStats { xp_boost: 2.25, ..NO_STATS }),
    regular("sea-king", "Sea King", "+35% fish size.", EnchantStats { size_increase: 35.0, ..NO_STATS }),
    regular("blessed", "Blessed", "+5% progress speed.", EnchantStats { progress_speed: 5.0, ..NO_STATS }),
    regular("mutated", "Mutated", "+90% mutation chance.", EnchantStats { mutation_chance: 90.0, ..NO_STATS }),
    regular("noir", "Noir", "+10% fish size.", EnchantStats { size_increase: 10.0, ..NO_STATS }),
    regular("ghastly", "Ghastly", "Every fish turns translucent.", NO_STATS),
    regular("abyssal-enchant", "Abyssal", "Touched by the deep.", NO_STATS),
    regular("quality", "Quality", "+15% lure speed, +15% luck, +5% resilience, +5% progress speed.", EnchantStats { speed: 15.0, luck: 15.0, resilience: 5.0, progress_speed: 5.0, ..NO_STATS }),
    regular("swift", "Swift", "+30% lure speed and +5% progress speed.", EnchantStats { speed: 30.0, progress_speed: 5.0, ..NO_STATS }),
    regular("hasty", "Hasty", "+55% lure speed.", EnchantStats { speed: 55.0, ..NO_STATS }),
    regular("lucky", "Lucky", "+20% luck, +15% lure speed, +40% mutation chance.", EnchantStats { luck: 20.0, speed: 15.0, mutation_chance: 40.0, ..NO_STATS }),
    regular("divine", "Divine", "+45% luck, +20% resilience, +20% lure speed.", EnchantStats { luck: 45.0, resilience: 20.0, speed: 20.0, ..NO_STATS }),
    regular("breezed", "Breezed", "+65% luck, +10% lure speed, +20% progress speed.", EnchantStats { luck: 65.0, speed: 10.0, progress_speed: 20.0, ..NO_STATS }),
    regular("storming", "Storming", "+95% luck and +45% lure speed.", EnchantStats { luck: 95.0, speed: 45.0, ..NO_STATS }),
    regular("controlled", "Controlled", "+0.15 control.", EnchantStats { control: 0.15, ..NO_STATS }),
    regular("resilient", "Resilient", "+35% resilience.", EnchantStats { resilience: 35.0, ..NO_STATS }),
    regular("unbreakable", "Unbreakable", "+10,000 max kg and +0.1 control.", EnchantStats { max_kg: 10_000.0, control: 0.1, ..NO_STATS }),
    regular("steady", "Steady", "+20% progress speed.", EnchantStats { progress_speed: 20.0, ..NO_STATS }),
    regular("long", "Long", "+20% resilience and +5% progress speed.", EnchantStats { resilience: 20.0, progress_speed: 5.0, ..NO_STATS }),
    regular("scrapper", "Scrapper", "Sometimes saves bait.", NO_STATS),
    regular("wormhole", "Wormhole", "Fish arrive from strange places.", NO_STATS),
    regular("scavenger", "Scavenger", "Keeps an eye out for relics.", NO_STATS),
    regular("chaotic", "Chaotic", "Unpredictable.", NO_STATS),
    regular("flashline", "Flashline", "Bursts of reeling speed.", NO_STATS),
    regular("momentum", "Momentum", "Rewards streaks of clean catches.", NO_STATS),
    regular("chronos", "Chronos", "Time bends around the line.", NO_STATS),
    regular("blood-reckoning", "Blood Reckoning", "High risk, high reward.", NO_STATS),
];

pub static EXALTED_ENCHANTMENTS: &[Enchantment] = &[
    exalted("immortal", "Immortal", "+75% luck and +30% progress speed.", EnchantStats { luck: 75.0, progress_speed: 30.0, ..NO_STATS }),
    exalted("mystical", "Mystical", "+25% luck, +45% resilience, +15% lure speed, +10% progress speed.", EnchantStats { luck: 25.0, resilience: 45.0, speed: 15.0, progress_speed: 10.0, ..NO_STATS }),
    exalted("sea-overlord", "Sea Overlord", "+50% fish size.", EnchantStats { size_increase: 50.0, ..NO_STATS }),
    exalted("anomalous", "Anomalous", "Echoes of another catch.", NO_STATS),
    exalted("quantum", "Quantum", "Fish slip between states.", NO_STATS),
    exalted("piercing", "Piercing", "+15% progress speed.", EnchantStats { progress_speed: 15.0, ..NO_STATS }),
    exalted("invincible", "Invincible", "Unlimited max kg.", EnchantStats { max_kg: f64::INFINITY, ..NO_STATS }),
    exalted("herculean", "Herculean", "+25,000 max kg, +0.2 control, +10% progress speed.", EnchantStats { max_kg: 25_000.0, control: 0.2, progress_speed: 10.0, ..NO_STATS }),
];

pub static COSMIC_ENCHANTMENTS: &[Enchantment] = &[
    cosmic("wise", "Wise", "1.2x XP from every catch.", EnchantStats { xp_boost: 1.2, ..NO_STATS }),
    cosmic("sea-prince", "Sea Prince", "+15% fish size.", EnchantStats { size_increase: 15.0, ..NO_STATS }),
    cosmic("overclocked", "Overclocked", "+5% progress speed.", EnchantStats { progress_speed: 5.0, ..NO_STATS }),
    cosmic("tenacity", "Tenacity", "Grows stronger from snapped lines.", NO_STATS),
    cosmic("tryhard", "Tryhard", "+20% progress speed, -0.1 control.", EnchantStats { progress_speed: 20.0, control: -0.1, ..NO_STATS }),
    cosmic("cryogenic", "Cryogenic", "Small chance to freeze fish.", NO_STATS),
    cosmic("glittered", "Glittered", "Fish sparkle a little more.", NO_STATS),
];

const fn regular(id: &'static str, name: &'static str, description: &'static str, stats: EnchantStats) -> Enchantment {
    enchantment(id, name, EnchantmentTier::Regular, description, stats)
}

const fn exalted(id: &'static str, name: &'static str, description: &'static str, stats: EnchantStats) -> Enchantment {
    enchantment(id, name, EnchantmentTier::Exalted, description, stats)
}

const fn cosmic(id: &'static str, name: &'static str, description: &'static str, stats: EnchantStats) -> Enchantment {
    enchantment(id, name, EnchantmentTier::Cosmic, description, stats)
}

const fn enchantment(
    id: &'static str,
    name: &'static str,
    tier: EnchantmentTier,
    description: &'static str,
    stats: EnchantStats,
) -> Enchantment {
    Enchantment {
        id,
        name,
        tier,
        description,
        stats,
    }
}

pub const STARTING_LOCATION_ID: &str = "calm-lake";
pub const ALTAR_LOCATION_ID: &str = "enchanting-altar";

pub static LOCATIONS: &[Location] = &[
    Location { id: STARTING_LOCATION_ID, name: "Calm Lake", difficulty: 1, is_action: false },
    Location { id: "rushing-river", name: "Rushing River", difficulty: 2, is_action: false },
    Location { id: "deep-sea", name: "Deep Sea", difficulty: 3, is_action: false },
    Location { id: crate::core::constants::RELIC_LOCATION_ID, name: "Relics Stone Isle", difficulty: 3, is_action: false },
    Location { id: "mysterious-ocean", name: "Mysterious Ocean", difficulty: 4, is_action: false },
    Location { id: ALTAR_LOCATION_ID, name: "Enchanting Altar", difficulty: 999, is_action: true },
];

pub static WORLD_EVENTS: &[WorldEventSpec] = &[
    WorldEventSpec {
        id: "golden-hour",
        name: "Golden Hour",
        description: "Golden sunlight makes every fish worth more.",
        duration_secs: 10 * 60,
        window: EventWindow::Day,
        effects: EventEffects { luck: None, value: Some(25.0), spawn_rate: &[] },
    },
    WorldEventSpec {
        id: "meteor-shower",
        name: "Meteor Shower",
        description: "Falling stars bring luck from the cosmos.",
        duration_secs: 15 * 60,
        window: EventWindow::Night,
        effects: EventEffects { luck: Some(50.0), value: None, spawn_rate: &[(Rarity::Mythic, 1.5)] },
    },
    WorldEventSpec {
        id: "fish-frenzy",
        name: "Fish Frenzy",
        description: "The fish are unusually active.",
        duration_secs: 5 * 60,
        window: EventWindow::All,
        effects: EventEffects {
            luck: None,
            value: None,
            spawn_rate: &[(Rarity::Common, 1.5), (Rarity::Uncommon, 1.2)],
        },
    },
    WorldEventSpec {
        id: "deep-slumber",
        name: "Deep Slumber",
        description: "Rare fish stir from their sleep.",
        duration_secs: 20 * 60,
        window: EventWindow::Night,
        effects: EventEffects {
            luck: None,
            value: None,
            spawn_rate: &[(Rarity::Legendary, 1.2), (Rarity::Mysterious, 1.5)],
        },
    },
];

pub static WEIGHT_BUCKETS: &[WeightBucket] = &[
    WeightBucket { max_kg: 1.0, chance: 60.0 },
    WeightBucket { max_kg: 100.0, chance: 25.0 },
    WeightBucket { max_kg: 500.0, chance: 10.0 },
    WeightBucket { max_kg: 1_000.0, chance: 3.0 },
    WeightBucket { max_kg: 100_000.0, chance: 1.5 },
    WeightBucket { max_kg: 1_000_000.0, chance: 0.4 },
    WeightBucket { max_kg: 5_000_000.0, chance: 0.1 },
];

/// Items handed to a brand-new player.
pub static STARTER_KIT: &[(&str, u32)] = &[("worm-bait", 3), ("bread-bait", 2), (LUCK_POTION_ID, 1)];

pub static AVATARS: &[&str] = &["👤", "🧑‍🚀", "🕵️", "🥷", "🧑‍🎤", "🧑‍🎨", "🧑‍💻", "🤖", "🦊", "🐸"];
