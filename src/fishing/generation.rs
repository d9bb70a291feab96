//! Catch generation: rarity and species selection, weight and mutation rolls.

use super::luck::RodStats;
use crate::content::{BaitEffect, Catalog, FishSpecies, Mutation, Rarity, Weather, WorldEventSpec};
use crate::core::constants::{
    MUTATION_LUCK_DIVISOR, NIGHT_MUTATION_MULTIPLIER, RARITY_LUCK_EXPONENT, SMALLEST_BUCKET_MIN_KG,
    WEIGHT_LUCK_DIVISOR,
};
use crate::utils::{pick_uniform, pick_weighted};
use rand::Rng;

/// Luck used for rarity gating: composed luck scaled by the bait's rare-chance.
pub fn effective_luck(luck: f64, bait: Option<&BaitEffect>) -> f64 {
    luck * bait.map(|b| b.rare_chance).unwrap_or(1.0)
}

/// Tiers whose minimum-luck threshold is met. Never empty.
pub fn eligible_rarities(effective_luck: f64) -> Vec<Rarity> {
    let eligible: Vec<Rarity> = Rarity::ALL
        .iter()
        .copied()
        .filter(|r| effective_luck >= r.minimum_luck())
        .collect();
    if eligible.is_empty() {
        vec![Rarity::Common]
    } else {
        eligible
    }
}

/// Spawn weight of one eligible tier. Grows superlinearly with the luck
/// surplus over the tier's threshold.
pub fn rarity_weight(
    rarity: Rarity,
    effective_luck: f64,
    weather: Weather,
    event: Option<&WorldEventSpec>,
) -> f64 {
    let surplus = (effective_luck - rarity.minimum_luck()).max(1.0);
    rarity.base_weight()
        * surplus.powf(RARITY_LUCK_EXPONENT)
        * weather.rarity_bonus(rarity)
        * event.map(|e| e.effects.spawn_bonus(rarity)).unwrap_or(1.0)
}

/// Draws a rarity tier for the given composed luck.
pub fn roll_rarity(
    luck: f64,
    bait: Option<&BaitEffect>,
    weather: Weather,
    event: Option<&WorldEventSpec>,
    rng: &mut impl Rng,
) -> Rarity {
    let luck = effective_luck(luck, bait);
    let weighted: Vec<(Rarity, f64)> = eligible_rarities(luck)
        .into_iter()
        .map(|r| (r, rarity_weight(r, luck, weather, event)))
        .collect();
    pick_weighted(&weighted, Rarity::Common, rng)
}

/// Draws a tier, then a species uniformly within it. Falls back to the first
/// catalog species when the tier is empty; `None` only for an empty catalog.
pub fn pick_species(
    catalog: &Catalog,
    luck: f64,
    bait: Option<&BaitEffect>,
    weather: Weather,
    event: Option<&WorldEventSpec>,
    rng: &mut impl Rng,
) -> Option<&'static FishSpecies> {
    let rarity = roll_rarity(luck, bait, weather, event, rng);
    let candidates = catalog.species_of(rarity);
    let species: &'static [FishSpecies] = catalog.species;
    pick_uniform(&candidates, rng)
        .copied()
        .or_else(|| species.first())
}

/// Picks a weight bucket index. Luck inflates heavier buckets by
/// `(1 + luck/500)^(index/2)`; the result is renormalized to 100.
pub fn roll_weight_bucket(catalog: &Catalog, luck: f64, rng: &mut impl Rng) -> usize {
    let shift = 1.0 + luck / WEIGHT_LUCK_DIVISOR;
    let adjusted: Vec<f64> = catalog
        .weight_buckets
        .iter()
        .enumerate()
        .map(|(i, b)| b.chance * shift.powf(i as f64 / 2.0))
        .collect();
    let total: f64 = adjusted.iter().sum();
    let normalized: Vec<(usize, f64)> = adjusted
        .into_iter()
        .enumerate()
        .map(|(i, c)| (i, c / total * 100.0))
        .collect();
    pick_weighted(&normalized, 0, rng)
}

/// Inclusive kg range of a bucket: from a tenth of the previous maximum (or
/// 0.1 kg for the smallest) up to its own maximum.
pub fn bucket_range(catalog: &Catalog, index: usize) -> (f64, f64) {
    let max = catalog.weight_buckets[index].max_kg;
    let min = if index == 0 {
        SMALLEST_BUCKET_MIN_KG
    } else {
        max / 10.0
    };
    (min, max)
}

/// Samples a fish weight in kg, rounded to 3 decimals.
pub fn generate_weight(catalog: &Catalog, luck: f64, rod: &RodStats, rng: &mut impl Rng) -> f64 {
    if catalog.weight_buckets.is_empty() {
        return 1.0;
    }
    let index = roll_weight_bucket(catalog, luck, rng);
    let (min, max) = bucket_range(catalog, index);
    let base = rng.gen_range(min..max);
    let sized = base * (1.0 + rod.size_increase / 100.0);
    round_kg(sized)
}

pub fn round_kg(kg: f64) -> f64 {
    (kg * 1000.0).round() / 1000.0
}

/// Mutation chance multiplier for the current luck, rod and time of day.
pub fn mutation_multiplier(luck: f64, rod: &RodStats, is_day: bool) -> f64 {
    let multiplier = 1.0 + luck / MUTATION_LUCK_DIVISOR + rod.mutation_chance / 100.0;
    if is_day {
        multiplier
    } else {
        multiplier * NIGHT_MUTATION_MULTIPLIER
    }
}

/// Rolls each mutation in order with its own draw; the first success wins.
pub fn check_mutation(luck: f64, rod: &RodStats, is_day: bool, rng: &mut impl Rng) -> Option<Mutation> {
    let multiplier = mutation_multiplier(luck, rod, is_day);
    Mutation::ROLL_ORDER
        .iter()
        .copied()
        .find(|m| rng.gen_range(0.0..100.0) < m.base_chance() * multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn bare_rod() -> RodStats {
        RodStats {
            luck: 0.0,
            speed: 0.0,
            endurance: 0.0,
            max_weight: 10.0,
            size_increase: 0.0,
            mutation_chance: 0.0,
            xp_boost: 1.0,
        }
    }

    #[test]
    fn test_zero_luck_only_zero_threshold_tiers() {
        let catalog = Catalog::standard();
        let mut rng = create_test_rng();
        for _ in 0..100_000 {
            let fish = pick_species(&catalog, 0.0, None, Weather::Sunny, None, &mut rng).unwrap();
            assert!(
                fish.rarity.is_always_available(),
                "{} has rarity {:?}",
                fish.id,
                fish.rarity
            );
        }
    }

    #[test]
    fn test_eligibility_at_storm_luck() {
        let eligible = eligible_rarities(456.3);
        assert_eq!(
            eligible,
            vec![Rarity::Common, Rarity::Uncommon, Rarity::Rare, Rarity::Secret]
        );
        assert!(!eligible.contains(&Rarity::Legendary));
    }

    #[test]
    fn test_negative_luck_still_has_common() {
        assert_eq!(eligible_rarities(-5.0), vec![Rarity::Common]);
    }

    #[test]
    fn test_rarity_weight_formula() {
        // surplus 101 over uncommon threshold 15
        let w = rarity_weight(Rarity::Uncommon, 116.0, Weather::Sunny, None);
        let expected = 24.0 * 101f64.powf(1.2);
        assert!((w - expected).abs() < 1e-9);

        // surplus floors at 1
        let w = rarity_weight(Rarity::Rare, 150.5, Weather::Rainy, None);
        assert!((w - 14.0 * 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_bait_scales_effective_luck() {
        let catalog = Catalog::standard();
        let cheese = catalog.bait("cheese-bait").unwrap();
        assert_eq!(effective_luck(100.0, Some(&cheese.effect)), 150.0);
        assert_eq!(effective_luck(100.0, None), 100.0);
    }

    #[test]
    fn test_high_luck_reaches_rare_tiers() {
        let catalog = Catalog::standard();
        let mut rng = create_test_rng();
        let mut saw_epic_or_better = false;
        for _ in 0..2_000 {
            let fish =
                pick_species(&catalog, 5_000.0, None, Weather::Stormy, None, &mut rng).unwrap();
            if fish.rarity >= Rarity::Epic && fish.rarity != Rarity::Secret {
                saw_epic_or_better = true;
            }
            assert!(fish.rarity.minimum_luck() <= 5_000.0);
        }
        assert!(saw_epic_or_better);
    }

    #[test]
    fn test_weight_within_bucket_and_rounded() {
        let catalog = Catalog::standard();
        let mut rng = create_test_rng();
        let rod = bare_rod();
        let (overall_min, _) = bucket_range(&catalog, 0);
        let (_, overall_max) = bucket_range(&catalog, catalog.weight_buckets.len() - 1);
        for _ in 0..5_000 {
            let w = generate_weight(&catalog, 250.0, &rod, &mut rng);
            assert!(w >= overall_min && w <= overall_max, "weight {} out of range", w);
            assert!(w > 0.0);
            assert!(((w * 1000.0).round() - w * 1000.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_luck_shifts_toward_heavier_buckets() {
        let catalog = Catalog::standard();
        let mut rng = create_test_rng();
        let trials = 20_000;
        let heavy = |luck: f64, rng: &mut ChaCha8Rng| {
            (0..trials)
                .filter(|_| roll_weight_bucket(&catalog, luck, rng) > 0)
                .count()
        };
        let low = heavy(0.0, &mut rng);
        let high = heavy(5_000.0, &mut rng);
        assert!(high > low, "high luck {} vs low luck {}", high, low);
    }

    #[test]
    fn test_size_increase_scales_weight() {
        let catalog = Catalog::standard();
        let mut plain_rng = create_test_rng();
        let mut sized_rng = create_test_rng();
        let plain = generate_weight(&catalog, 0.0, &bare_rod(), &mut plain_rng);
        let sized_rod = RodStats {
            size_increase: 50.0,
            ..bare_rod()
        };
        let sized = generate_weight(&catalog, 0.0, &sized_rod, &mut sized_rng);
        assert!((sized - round_kg(plain * 1.5)).abs() <= 0.002);
    }

    #[test]
    fn test_mutation_multiplier() {
        let rod = RodStats {
            mutation_chance: 90.0,
            ..bare_rod()
        };
        assert!((mutation_multiplier(100.0, &rod, true) - 2.9).abs() < 1e-9);
        assert!((mutation_multiplier(100.0, &rod, false) - 2.9 * 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_huge_luck_always_mutates_first_kind() {
        let mut rng = create_test_rng();
        for _ in 0..100 {
            // corrupt: 0.5% x 1001 > 100%
            assert_eq!(
                check_mutation(100_000.0, &bare_rod(), true, &mut rng),
                Some(Mutation::Corrupt)
            );
        }
    }

    #[test]
    fn test_mutation_rate_low_luck() {
        let mut rng = create_test_rng();
        let trials = 20_000;
        let mutated = (0..trials)
            .filter(|_| check_mutation(0.0, &bare_rod(), true, &mut rng).is_some())
            .count();
        // Independent draws: 1 - Π(1 - p_i) with p summing to 11.8% → ~11.2%
        let rate = mutated as f64 / trials as f64;
        assert!((0.09..=0.135).contains(&rate), "rate {}", rate);
    }
}
