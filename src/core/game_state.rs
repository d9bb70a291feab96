//! The persisted per-player record.

use crate::character::{Inventory, Progression, RodCollection};
use crate::content::data::{STARTER_KIT, STARTING_LOCATION_ID};
use crate::content::Catalog;
use crate::core::constants::STARTING_MONEY;
use crate::economy::ShopPrices;
use crate::fishing::FishCollection;
use serde::{Deserialize, Serialize};

/// Everything saved for one player. Missing fields load as their defaults.
///
/// Active bait and potions are not part of the record; a loaded game starts
/// with none running.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameState {
    pub money: u64,
    pub total_caught: u64,
    pub inventory: Inventory,
    pub progression: Progression,
    pub collection: FishCollection,
    pub rods: RodCollection,
    pub shop_prices: ShopPrices,
    pub location: String,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            money: STARTING_MONEY,
            total_caught: 0,
            inventory: Inventory::default(),
            progression: Progression::default(),
            collection: FishCollection::default(),
            rods: RodCollection::default(),
            shop_prices: ShopPrices::default(),
            location: STARTING_LOCATION_ID.to_string(),
        }
    }
}

impl GameState {
    /// Fresh state for a player who has never saved, with the starter kit.
    pub fn new_player(catalog: &Catalog) -> Self {
        let mut state = Self::default();
        for (id, count) in STARTER_KIT {
            if let Some(kind) = catalog.item_kind(id) {
                state.inventory.add_item(id, kind, *count);
            }
        }
        state
    }

    /// Repairs a loaded record so every invariant holds again.
    pub fn normalize(&mut self, catalog: &Catalog) {
        self.progression.normalize();
        self.rods.normalize(catalog);
        self.shop_prices.normalize(catalog);
        self.inventory.items.retain(|s| s.count > 0);

        let inventory = &self.inventory;
        let favorites: Vec<String> = inventory
            .favorites
            .iter()
            .filter(|id| inventory.fish(id).is_some() || inventory.item_count(id) > 0)
            .cloned()
            .collect();
        self.inventory.favorites = favorites;

        let valid_location = catalog
            .location(&self.location)
            .is_some_and(|l| !l.is_action);
        if !valid_location {
            self.location = STARTING_LOCATION_ID.to_string();
        }
    }
}
