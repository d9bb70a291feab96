//! Fish sale value and the three ways of selling.

use crate::character::Inventory;
use crate::content::{Catalog, Rarity, WorldEventSpec};
use crate::core::constants::{SALE_RANDOM_SPREAD, SALE_WEIGHT_EXPONENT};
use crate::core::error::{GameError, Result};
use crate::fishing::CaughtFish;
use rand::Rng;

/// Multipliers that apply to every fish in a sale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaleModifiers {
    pub knowledge_effect: f64,
    /// Percent bonus from an active world event.
    pub event_value_bonus: f64,
}

impl SaleModifiers {
    pub fn new(knowledge_effect: f64, event: Option<&WorldEventSpec>) -> Self {
        Self {
            knowledge_effect,
            event_value_bonus: event.and_then(|e| e.effects.value).unwrap_or(0.0),
        }
    }
}

/// Value of one fish before the random spread is applied.
pub fn base_fish_value(catalog: &Catalog, fish: &CaughtFish, mods: &SaleModifiers) -> f64 {
    let Some(species) = catalog.species(&fish.species_id) else {
        return 0.0;
    };
    let mutation = fish.mutation.map(|m| m.value_multiplier()).unwrap_or(1.0);
    species.base_value
        * fish.weight.powf(SALE_WEIGHT_EXPONENT)
        * species.rarity.value_multiplier()
        * mutation
        * mods.knowledge_effect
        * (1.0 + mods.event_value_bonus / 100.0)
}

/// Coins one fish sells for: base value with up to ±10% random spread, rounded.
pub fn fish_value(
    catalog: &Catalog,
    fish: &CaughtFish,
    mods: &SaleModifiers,
    rng: &mut impl Rng,
) -> u64 {
    let spread = 1.0 + (rng.gen::<f64>() - 0.5) * SALE_RANDOM_SPREAD;
    (base_fish_value(catalog, fish, mods) * spread).round().max(0.0) as u64
}

/// Fish removed by a sale and the coins they fetched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaleReceipt {
    pub sold: Vec<CaughtFish>,
    pub coins: u64,
}

/// Sells one fish by instance id.
pub fn sell_fish(
    inventory: &mut Inventory,
    catalog: &Catalog,
    id: &str,
    mods: &SaleModifiers,
    rng: &mut impl Rng,
) -> Result<SaleReceipt> {
    let fish = inventory
        .remove_fish(id)
        .ok_or_else(|| GameError::UnknownItem(id.to_string()))?;
    let coins = fish_value(catalog, &fish, mods, rng);
    Ok(SaleReceipt {
        sold: vec![fish],
        coins,
    })
}

/// Sells every listed fish still in the inventory, valuing each one on its
/// own. Ids that are gone are skipped.
pub fn sell_selected(
    inventory: &mut Inventory,
    catalog: &Catalog,
    ids: &[String],
    mods: &SaleModifiers,
    rng: &mut impl Rng,
) -> Result<SaleReceipt> {
    let mut receipt = SaleReceipt::default();
    for id in ids {
        if let Some(fish) = inventory.remove_fish(id) {
            receipt.coins += fish_value(catalog, &fish, mods, rng);
            receipt.sold.push(fish);
        }
    }
    if receipt.sold.is_empty() {
        return Err(GameError::NothingToSell(String::from("selected")));
    }
    Ok(receipt)
}

/// Sells every fish of one rarity tier.
pub fn sell_rarity(
    inventory: &mut Inventory,
    catalog: &Catalog,
    rarity: Rarity,
    mods: &SaleModifiers,
    rng: &mut impl Rng,
) -> Result<SaleReceipt> {
    let ids = inventory.fish_ids_of_rarity(catalog, rarity);
    if ids.is_empty() {
        return Err(GameError::NothingToSell(rarity.name().to_string()));
    }
    sell_selected(inventory, catalog, &ids, mods, rng)
}
