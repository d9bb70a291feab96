//! Luck composition and equipped-rod derived stats.

use crate::content::{Enchantment, RodSpec, Weather, WorldEventSpec};
use crate::core::constants::{NIGHT_LUCK_MULTIPLIER, SKILL_LUCK_PER_LEVEL};

/// Stats of the equipped rod after folding in both enchantment slots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RodStats {
    pub luck: f64,
    pub speed: f64,
    pub endurance: f64,
    /// Heaviest fish the rod can land, in kg.
    pub max_weight: f64,
    pub size_increase: f64,
    pub mutation_chance: f64,
    pub xp_boost: f64,
}

impl RodStats {
    pub fn derive(rod: &RodSpec, regular: Option<&Enchantment>, cosmic: Option<&Enchantment>) -> Self {
        let slots: Vec<&Enchantment> = regular.into_iter().chain(cosmic).collect();
        let sum = |f: fn(&Enchantment) -> f64| slots.iter().map(|e| f(e)).sum::<f64>();

        Self {
            luck: rod.luck + sum(|e| e.stats.luck),
            speed: rod.speed + sum(|e| e.stats.speed),
            endurance: rod.endurance + sum(|e| e.stats.resilience),
            max_weight: slots
                .iter()
                .map(|e| e.stats.max_kg)
                .fold(rod.weight, f64::max),
            size_increase: sum(|e| e.stats.size_increase),
            mutation_chance: sum(|e| e.stats.mutation_chance),
            xp_boost: slots.iter().map(|e| e.stats.xp_boost).product(),
        }
    }
}

/// Everything that feeds the composed luck scalar.
#[derive(Debug, Clone, Copy)]
pub struct LuckFactors<'a> {
    pub base_luck: f64,
    /// Rod luck including both enchantment slots.
    pub rod_luck: f64,
    /// Flat bonus from an active luck potion, zero otherwise.
    pub potion_luck: f64,
    pub skill_luck_level: u32,
    pub weather: Weather,
    pub is_day: bool,
    pub event: Option<&'a WorldEventSpec>,
}

/// Combines additive luck sources, then applies weather, night and event
/// multipliers. Unbounded above.
pub fn compose_luck(f: &LuckFactors) -> f64 {
    let mut luck = f.base_luck
        + f.rod_luck
        + f.potion_luck
        + f.skill_luck_level as f64 * SKILL_LUCK_PER_LEVEL;

    luck *= f.weather.luck_multiplier();
    if !f.is_day {
        luck *= NIGHT_LUCK_MULTIPLIER;
    }
    if let Some(bonus) = f.event.and_then(|e| e.effects.luck) {
        luck *= 1.0 + bonus / 100.0;
    }
    luck
}
