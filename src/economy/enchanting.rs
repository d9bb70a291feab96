//! Enchanting altar: relic-paid rolls, capped per calendar day, applied to
//! the equipped rod only on request.

use crate::character::{Inventory, RodCollection};
use crate::content::{Catalog, Enchantment, EnchantmentTier};
use crate::core::constants::{
    COSMIC_ROLL_PERCENT, EXALTED_ROLL_PERCENT, MAX_ENCHANT_ROLLS_PER_DAY, RELIC_ITEM_ID,
};
use crate::core::error::{GameError, Result};
use crate::utils::pick_uniform;
use chrono::{NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Current UTC calendar date.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Rolls spent on the date stored in `date` (`YYYY-MM-DD`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnchantRollCounter {
    pub date: String,
    pub rolls: u32,
}

impl EnchantRollCounter {
    /// Starts a fresh count when `today` differs from the stored date.
    /// Returns true if the counter was reset.
    pub fn refresh(&mut self, today: NaiveDate) -> bool {
        let key = date_key(today);
        if self.date == key {
            return false;
        }
        self.date = key;
        self.rolls = 0;
        true
    }

    pub fn remaining(&self) -> u32 {
        MAX_ENCHANT_ROLLS_PER_DAY.saturating_sub(self.rolls)
    }
}

/// Picks the pool for a roll: exalted 5%, cosmic 15%, regular otherwise.
pub fn roll_tier(rng: &mut impl Rng) -> EnchantmentTier {
    let r = rng.gen_range(0.0..100.0);
    if r < EXALTED_ROLL_PERCENT {
        EnchantmentTier::Exalted
    } else if r < EXALTED_ROLL_PERCENT + COSMIC_ROLL_PERCENT {
        EnchantmentTier::Cosmic
    } else {
        EnchantmentTier::Regular
    }
}

/// Draws a tier, then an enchantment uniformly from that tier's pool.
pub fn draw_enchantment(catalog: &Catalog, rng: &mut impl Rng) -> Option<&'static Enchantment> {
    let tier = roll_tier(rng);
    pick_uniform(catalog.enchantment_pool(tier), rng)
}

/// Altar state for one player: the persisted daily counter and the rolled
/// enchantment waiting to be applied.
#[derive(Debug, Clone, Default)]
pub struct Altar {
    pub counter: EnchantRollCounter,
    pending: Option<&'static Enchantment>,
}

impl Altar {
    pub fn new(counter: EnchantRollCounter) -> Self {
        Self {
            counter,
            pending: None,
        }
    }

    pub fn pending(&self) -> Option<&'static Enchantment> {
        self.pending
    }

    /// Opening the altar discards any unapplied roll and resets the daily
    /// count on a new date.
    pub fn open(&mut self, today: NaiveDate) {
        self.pending = None;
        self.counter.refresh(today);
    }

    /// Spends one relic on a roll. The result replaces any pending roll.
    pub fn roll(
        &mut self,
        catalog: &Catalog,
        inventory: &mut Inventory,
        today: NaiveDate,
        rng: &mut impl Rng,
    ) -> Result<&'static Enchantment> {
        if inventory.relic_count() < 1 {
            return Err(GameError::InsufficientRelics);
        }
        self.counter.refresh(today);
        if self.counter.rolls >= MAX_ENCHANT_ROLLS_PER_DAY {
            return Err(GameError::DailyRollCapReached {
                limit: MAX_ENCHANT_ROLLS_PER_DAY,
            });
        }
        let enchantment = draw_enchantment(catalog, rng)
            .ok_or_else(|| GameError::UnknownItem(String::from("enchantment")))?;

        inventory.remove_item(RELIC_ITEM_ID, 1)?;
        self.counter.rolls += 1;
        self.pending = Some(enchantment);
        info!(
            enchantment = enchantment.id,
            tier = ?enchantment.tier,
            rolls_today = self.counter.rolls,
            "Enchantment rolled"
        );
        Ok(enchantment)
    }

    /// Puts the pending enchantment on the equipped rod, in the slot its
    /// tier belongs to. Returns the rod id and the applied enchantment.
    pub fn apply(&mut self, rods: &mut RodCollection) -> Result<(String, &'static Enchantment)> {
        let enchantment = self.pending.ok_or(GameError::NoPendingEnchantment)?;
        let rod_id = rods.apply_enchantment(enchantment)?;
        self.pending = None;
        Ok((rod_id, enchantment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ItemKind;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    fn inventory_with_relics(count: u32) -> Inventory {
        let mut inv = Inventory::default();
        inv.add_item(RELIC_ITEM_ID, ItemKind::Material, count);
        inv
    }

    #[test]
    fn test_tier_distribution() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut counts = [0u32; 3];
        for _ in 0..20_000 {
            match roll_tier(&mut rng) {
                EnchantmentTier::Exalted => counts[0] += 1,
                EnchantmentTier::Cosmic => counts[1] += 1,
                EnchantmentTier::Regular => counts[2] += 1,
            }
        }
        let pct = |n: u32| n as f64 / 200.0;
        assert!((pct(counts[0]) - 5.0).abs() < 1.0);
        assert!((pct(counts[1]) - 15.0).abs() < 1.5);
        assert!((pct(counts[2]) - 80.0).abs() < 2.0);
    }

    #[test]
    fn test_roll_needs_relic() {
        let catalog = Catalog::standard();
        let mut altar = Altar::default();
        let mut inv = Inventory::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(matches!(
            altar.roll(&catalog, &mut inv, day(1), &mut rng),
            Err(GameError::InsufficientRelics)
        ));
        assert_eq!(altar.counter.rolls, 0);
    }

    #[test]
    fn test_daily_cap_and_reset() {
        let catalog = Catalog::standard();
        let mut altar = Altar::default();
        let mut inv = inventory_with_relics(20);
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        for _ in 0..MAX_ENCHANT_ROLLS_PER_DAY {
            altar.roll(&catalog, &mut inv, day(1), &mut rng).unwrap();
        }
        assert_eq!(inv.relic_count(), 12);
        assert!(matches!(
            altar.roll(&catalog, &mut inv, day(1), &mut rng),
            Err(GameError::DailyRollCapReached { limit: 8 })
        ));
        assert_eq!(inv.relic_count(), 12);

        altar.open(day(2));
        assert_eq!(altar.counter.remaining(), MAX_ENCHANT_ROLLS_PER_DAY);
        altar.roll(&catalog, &mut inv, day(2), &mut rng).unwrap();
        assert_eq!(altar.counter.rolls, 1);
        assert_eq!(altar.counter.date, "2026-03-02");
    }

    #[test]
    fn test_roll_is_not_applied_until_requested() {
        let catalog = Catalog::standard();
        let mut altar = Altar::default();
        let mut inv = inventory_with_relics(1);
        let mut rods = RodCollection::default();
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        let rolled = altar.roll(&catalog, &mut inv, day(5), &mut rng).unwrap();
        let rod = rods.equipped().unwrap();
        assert!(rod.enchantment.is_none() && rod.cosmic_enchantment.is_none());

        let (_, applied) = altar.apply(&mut rods).unwrap();
        assert_eq!(applied.id, rolled.id);
        let rod = rods.equipped().unwrap();
        let slot = match rolled.tier {
            EnchantmentTier::Cosmic => &rod.cosmic_enchantment,
            _ => &rod.enchantment,
        };
        assert_eq!(slot.as_deref(), Some(rolled.id));
        assert!(matches!(
            altar.apply(&mut rods),
            Err(GameError::NoPendingEnchantment)
        ));
    }

    #[test]
    fn test_open_discards_pending() {
        let catalog = Catalog::standard();
        let mut altar = Altar::default();
        let mut inv = inventory_with_relics(1);
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        altar.roll(&catalog, &mut inv, day(3), &mut rng).unwrap();
        altar.open(day(3));
        assert!(altar.pending().is_none());
        assert_eq!(altar.counter.rolls, 1);
    }
}
