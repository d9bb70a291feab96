//! Shop: per-item price ramp with decay back to base, and rod purchases.

use crate::character::{Inventory, RodCollection};
use crate::content::{Catalog, ItemKind};
use crate::core::constants::PRICE_DECAY_STEP;
use crate::core::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Next price after one purchase, rounded down.
pub fn ramp_price(price: u64, rate: f64) -> u64 {
    (price as f64 * rate).floor() as u64
}

/// Current prices of shop items that have moved off their base price.
/// Items without an entry sell at base.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShopPrices {
    current: BTreeMap<String, u64>,
}

impl ShopPrices {
    /// Current price of a shop item, or `None` if the shop does not sell it.
    pub fn price(&self, catalog: &Catalog, id: &str) -> Option<u64> {
        let (base, _) = catalog.shop_pricing(id)?;
        Some(self.current.get(id).copied().unwrap_or(base).max(base))
    }

    /// Applies the purchase ramp. Returns the new price.
    pub fn record_purchase(&mut self, catalog: &Catalog, id: &str) -> Option<u64> {
        let (base, rate) = catalog.shop_pricing(id)?;
        let next = ramp_price(self.price(catalog, id)?, rate).max(base);
        if next > base {
            self.current.insert(id.to_string(), next);
        } else {
            self.current.remove(id);
        }
        Some(next)
    }

    /// One decay step: every raised price moves one coin toward its base.
    /// Returns how many prices changed.
    pub fn decay(&mut self, catalog: &Catalog) -> usize {
        let mut changed = 0;
        self.current.retain(|id, price| {
            let Some((base, _)) = catalog.shop_pricing(id) else {
                return false;
            };
            if *price > base {
                *price = price.saturating_sub(PRICE_DECAY_STEP).max(base);
                changed += 1;
            }
            *price > base
        });
        changed
    }

    /// Drops entries for unknown items and prices at or below base.
    pub fn normalize(&mut self, catalog: &Catalog) {
        self.current.retain(|id, price| {
            catalog
                .shop_pricing(id)
                .is_some_and(|(base, _)| *price > base)
        });
    }
}

/// Result of a shop purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Purchase {
    pub id: String,
    pub kind: ItemKind,
    pub paid: u64,
    pub next_price: u64,
}

/// Buys one bait or potion at its current price.
pub fn buy_item(
    catalog: &Catalog,
    prices: &mut ShopPrices,
    money: &mut u64,
    inventory: &mut Inventory,
    id: &str,
) -> Result<Purchase> {
    let price = prices
        .price(catalog, id)
        .ok_or_else(|| GameError::UnknownItem(id.to_string()))?;
    let kind = catalog
        .item_kind(id)
        .ok_or_else(|| GameError::UnknownItem(id.to_string()))?;
    if *money < price {
        return Err(GameError::InsufficientFunds {
            required: price,
            available: *money,
        });
    }

    *money -= price;
    inventory.add_item(id, kind, 1);
    let next_price = prices.record_purchase(catalog, id).unwrap_or(price);
    Ok(Purchase {
        id: id.to_string(),
        kind,
        paid: price,
        next_price,
    })
}

/// Buys a rod, which is owned and equipped in the same step. Returns the
/// price paid.
pub fn buy_rod(
    catalog: &Catalog,
    money: &mut u64,
    rods: &mut RodCollection,
    id: &str,
) -> Result<u64> {
    let spec = catalog
        .rod(id)
        .ok_or_else(|| GameError::UnknownItem(id.to_string()))?;
    let Some(price) = spec.price else {
        return Err(GameError::RodNotForSale {
            name: spec.name.to_string(),
            unlock: spec.unlock.unwrap_or("unavailable").to_string(),
        });
    };
    if rods.owns(id) {
        return Err(GameError::RodAlreadyOwned(spec.name.to_string()));
    }
    if *money < price {
        return Err(GameError::InsufficientFunds {
            required: price,
            available: *money,
        });
    }

    rods.add_and_equip(id)?;
    *money -= price;
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::data::LUCK_POTION_ID;

    #[test]
    fn test_ramp_rounds_down_each_step() {
        let catalog = Catalog::standard();
        let mut prices = ShopPrices::default();
        // 30 -> 37 -> 46 -> 57
        assert_eq!(prices.record_purchase(&catalog, LUCK_POTION_ID), Some(37));
        assert_eq!(prices.record_purchase(&catalog, LUCK_POTION_ID), Some(46));
        assert_eq!(prices.record_purchase(&catalog, LUCK_POTION_ID), Some(57));
        assert_eq!(prices.price(&catalog, LUCK_POTION_ID), Some(57));
    }

    #[test]
    fn test_small_prices_can_stay_flat() {
        let catalog = Catalog::standard();
        let mut prices = ShopPrices::default();
        assert_eq!(prices.record_purchase(&catalog, "worm-bait"), Some(5));
        assert_eq!(prices.price(&catalog, "worm-bait"), Some(5));
    }

    #[test]
    fn test_decay_stops_at_base() {
        let catalog = Catalog::standard();
        let mut prices = ShopPrices::default();
        prices.record_purchase(&catalog, LUCK_POTION_ID);
        assert_eq!(prices.price(&catalog, LUCK_POTION_ID), Some(37));

        for _ in 0..3 {
            assert_eq!(prices.decay(&catalog), 1);
        }
        assert_eq!(prices.price(&catalog, LUCK_POTION_ID), Some(34));
        for _ in 0..10 {
            prices.decay(&catalog);
        }
        assert_eq!(prices.price(&catalog, LUCK_POTION_ID), Some(30));
        assert_eq!(prices.decay(&catalog), 0);
    }

    #[test]
    fn test_buy_item_charges_and_stacks() {
        let catalog = Catalog::standard();
        let mut prices = ShopPrices::default();
        let mut money = 100;
        let mut inv = Inventory::default();

        let purchase = buy_item(&catalog, &mut prices, &mut money, &mut inv, "shrimp-bait").unwrap();
        assert_eq!(purchase.paid, 15);
        assert_eq!(purchase.next_price, 17);
        assert_eq!(money, 85);
        buy_item(&catalog, &mut prices, &mut money, &mut inv, "shrimp-bait").unwrap();
        assert_eq!(money, 68);
        assert_eq!(inv.item_count("shrimp-bait"), 2);
    }

    #[test]
    fn test_buy_item_rejects_without_side_effects() {
        let catalog = Catalog::standard();
        let mut prices = ShopPrices::default();
        let mut money = 10;
        let mut inv = Inventory::default();

        let err = buy_item(&catalog, &mut prices, &mut money, &mut inv, "golden-bait").unwrap_err();
        assert!(matches!(
            err,
            GameError::InsufficientFunds {
                required: 50,
                available: 10
            }
        ));
        assert_eq!(money, 10);
        assert!(inv.items.is_empty());
        assert_eq!(prices.price(&catalog, "golden-bait"), Some(50));

        assert!(buy_item(&catalog, &mut prices, &mut money, &mut inv, "tuna").is_err());
    }

    #[test]
    fn test_buy_rod_owns_and_equips() {
        let catalog = Catalog::standard();
        let mut rods = RodCollection::default();
        let mut money = 300;

        assert_eq!(buy_rod(&catalog, &mut money, &mut rods, "luck-rod").unwrap(), 250);
        assert_eq!(money, 50);
        assert_eq!(rods.equipped().unwrap().id, "luck-rod");
        assert_eq!(rods.equipped_count(), 1);

        assert!(matches!(
            buy_rod(&catalog, &mut money, &mut rods, "luck-rod"),
            Err(GameError::RodAlreadyOwned(_))
        ));
        assert!(matches!(
            buy_rod(&catalog, &mut money, &mut rods, "grass-rod"),
            Err(GameError::InsufficientFunds { .. })
        ));
        assert!(matches!(
            buy_rod(&catalog, &mut money, &mut rods, "spooky-rod"),
            Err(GameError::RodNotForSale { .. })
        ));
        assert_eq!(money, 50);
    }
}
