// Session timing (milliseconds)
pub const CAST_DELAY_MS: u64 = 600;
pub const FISH_FRAME_MS: u64 = 16; // ~60 FPS wander simulation
pub const BITE_COUNTDOWN_TICK_MS: u64 = 100;
pub const REEL_TICK_MS: u64 = 100;
pub const RESOLVE_TO_IDLE_MS: u64 = 1000;

// Bite window
pub const BITE_WINDOW_BASE_MS: f64 = 2500.0;
pub const BITE_WINDOW_MIN_MS: f64 = 1000.0;
pub const BITE_WINDOW_MAX_MS: f64 = 5000.0;
pub const BITE_WINDOW_ENDURANCE_DIVISOR: f64 = 50.0;
pub const BITE_WINDOW_SPEED_DIVISOR: f64 = 120.0;
pub const BITE_WINDOW_LUCK_DIVISOR: f64 = 1500.0;

// Fish wander simulation (percent-of-pond coordinates)
pub const HOOK_POSITION: (f64, f64) = (50.0, 75.0);
pub const BITE_RADIUS: f64 = 8.0;
pub const TARGET_REACHED_RADIUS: f64 = 5.0;
pub const FISH_BASE_SPEED: f64 = 0.5;
pub const BASE_BITE_CHANCE: f64 = 0.05;

// Reeling
pub const REEL_START_PROGRESS: f64 = 30.0;
pub const REEL_BASE_GAIN: f64 = 5.0;
pub const REEL_MIN_DEPLETION: f64 = 0.5;

// Auto-play
pub const AUTOPLAY_MIN_LEVEL: u32 = 5;
pub const AUTOPLAY_CAST_DELAY_MS: u64 = 2000;
pub const AUTOPLAY_BITE_DELAY_MS: u64 = 500;
pub const AUTOPLAY_REEL_DELAY_MS: u64 = 300;

// Luck
pub const SKILL_LUCK_PER_LEVEL: f64 = 10.0;
pub const NIGHT_LUCK_MULTIPLIER: f64 = 1.1;
pub const RARITY_LUCK_EXPONENT: f64 = 1.2;
pub const PASSIVE_LUCK_GAIN: f64 = 0.2;
pub const STARTING_BASE_LUCK: f64 = 1.0;

// Weight and mutation rolls
pub const WEIGHT_LUCK_DIVISOR: f64 = 500.0;
pub const SMALLEST_BUCKET_MIN_KG: f64 = 0.1;
pub const MUTATION_LUCK_DIVISOR: f64 = 100.0;
pub const NIGHT_MUTATION_MULTIPLIER: f64 = 1.2;

// XP and leveling
pub const XP_CURVE_BASE: f64 = 100.0;
pub const XP_CURVE_EXPONENT: f64 = 1.5;
pub const LEVEL_UP_COIN_REWARD_PER_LEVEL: u64 = 50;

// Economy
pub const STARTING_MONEY: u64 = 100;
pub const SALE_WEIGHT_EXPONENT: f64 = 1.05;
pub const SALE_RANDOM_SPREAD: f64 = 0.2; // ±10%
pub const PRICE_DECAY_INTERVAL_MS: u64 = 20_000;
pub const PRICE_DECAY_STEP: u64 = 1;

// Enchanting
pub const MAX_ENCHANT_ROLLS_PER_DAY: u32 = 8;
pub const EXALTED_ROLL_PERCENT: f64 = 5.0;
pub const COSMIC_ROLL_PERCENT: f64 = 15.0;

// Rare material drop
pub const RELIC_ITEM_ID: &str = "stonehenge-relic";
pub const RELIC_LOCATION_ID: &str = "relics-stone-isle";
pub const RELIC_DROP_CHANCE: f64 = 0.0023;
pub const LOCATION_WEIGHT_PER_DIFFICULTY: f64 = 10.0;

// World clock
pub const DAY_CYCLE_MS: u64 = 12 * 60 * 60 * 1000;
pub const GAME_MINUTES_PER_CYCLE: u64 = 24 * 60;
pub const DAY_NIGHT_CHECK_MS: u64 = 1000;
pub const WEATHER_CHANGE_MS: u64 = 15 * 60 * 1000;
pub const EVENT_ROLL_MS: u64 = 5 * 60 * 1000;
pub const EVENT_START_CHANCE: f64 = 0.1;
pub const EXPIRY_SWEEP_MS: u64 = 1000;
pub const PASSIVE_LUCK_MS: u64 = 60_000;
