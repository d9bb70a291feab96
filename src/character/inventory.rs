//! Player inventory: individual fish, stacked items, and favorites.

use crate::content::{Catalog, ItemKind, Rarity};
use crate::core::constants::RELIC_ITEM_ID;
use crate::core::error::{GameError, Result};
use crate::fishing::CaughtFish;
use serde::{Deserialize, Serialize};

/// A stack of baits, potions or materials. Count is always at least 1;
/// an emptied stack is removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    pub id: String,
    pub kind: ItemKind,
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Inventory {
    pub fish: Vec<CaughtFish>,
    pub items: Vec<ItemStack>,
    pub favorites: Vec<String>,
}

impl Inventory {
    pub fn add_fish(&mut self, fish: CaughtFish) {
        self.fish.push(fish);
    }

    pub fn fish(&self, id: &str) -> Option<&CaughtFish> {
        self.fish.iter().find(|f| f.id == id)
    }

    /// Removes exactly one fish entry by instance id.
    pub fn remove_fish(&mut self, id: &str) -> Option<CaughtFish> {
        let index = self.fish.iter().position(|f| f.id == id)?;
        self.favorites.retain(|fav| fav != id);
        Some(self.fish.remove(index))
    }

    /// Instance ids of every fish of the given rarity, in inventory order.
    pub fn fish_ids_of_rarity(&self, catalog: &Catalog, rarity: Rarity) -> Vec<String> {
        self.fish
            .iter()
            .filter(|f| catalog.species(&f.species_id).map(|s| s.rarity) == Some(rarity))
            .map(|f| f.id.clone())
            .collect()
    }

    /// Adds to an existing stack or creates one. Zero counts are ignored.
    pub fn add_item(&mut self, id: &str, kind: ItemKind, count: u32) {
        if count == 0 {
            return;
        }
        match self.items.iter_mut().find(|s| s.id == id) {
            Some(stack) => stack.count = stack.count.saturating_add(count),
            None => self.items.push(ItemStack {
                id: id.to_string(),
                kind,
                count,
            }),
        }
    }

    /// Removes `count` from a stack, dropping the stack when it empties.
    pub fn remove_item(&mut self, id: &str, count: u32) -> Result<()> {
        let index = self
            .items
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| GameError::UnknownItem(id.to_string()))?;
        let stack = &mut self.items[index];
        if stack.count <= count {
            self.items.remove(index);
        } else {
            stack.count -= count;
        }
        Ok(())
    }

    pub fn item_count(&self, id: &str) -> u32 {
        self.items
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.count)
            .unwrap_or(0)
    }

    pub fn relic_count(&self) -> u32 {
        self.item_count(RELIC_ITEM_ID)
    }

    /// Toggles a favorite on a fish instance or the relic stack. Returns
    /// whether the id is now a favorite.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool> {
        let favoritable = self.fish(id).is_some() || id == RELIC_ITEM_ID;
        if !favoritable {
            return Err(GameError::UnknownItem(id.to_string()));
        }
        if let Some(pos) = self.favorites.iter().position(|f| f == id) {
            self.favorites.remove(pos);
            Ok(false)
        } else {
            self.favorites.push(id.to_string());
            Ok(true)
        }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|f| f == id)
    }
}
