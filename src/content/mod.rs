//! Static content: the catalog every game system reads by reference.

pub mod data;
pub mod types;

pub use types::*;

/// Read-only view of all static content tables.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    pub species: &'static [FishSpecies],
    pub rods: &'static [RodSpec],
    pub baits: &'static [BaitSpec],
    pub potions: &'static [PotionSpec],
    pub materials: &'static [MaterialSpec],
    pub regular_enchantments: &'static [Enchantment],
    pub exalted_enchantments: &'static [Enchantment],
    pub cosmic_enchantments: &'static [Enchantment],
    pub locations: &'static [Location],
    pub events: &'static [WorldEventSpec],
    pub weight_buckets: &'static [WeightBucket],
}

impl Catalog {
    /// The built-in game content.
    pub fn standard() -> Self {
        Self {
            species: data::SPECIES,
            rods: data::RODS,
            baits: data::BAITS,
            potions: data::POTIONS,
            materials: data::MATERIALS,
            regular_enchantments: data::REGULAR_ENCHANTMENTS,
            exalted_enchantments: data::EXALTED_ENCHANTMENTS,
            cosmic_enchantments: data::COSMIC_ENCHANTMENTS,
            locations: data::LOCATIONS,
            events: data::WORLD_EVENTS,
            weight_buckets: data::WEIGHT_BUCKETS,
        }
    }

    pub fn species(&self, id: &str) -> Option<&'static FishSpecies> {
        self.species.iter().find(|s| s.id == id)
    }

    /// Species of one tier, in catalog order.
    pub fn species_of(&self, rarity: Rarity) -> Vec<&'static FishSpecies> {
        self.species.iter().filter(|s| s.rarity == rarity).collect()
    }

    pub fn rod(&self, id: &str) -> Option<&'static RodSpec> {
        self.rods.iter().find(|r| r.id == id)
    }

    pub fn bait(&self, id: &str) -> Option<&'static BaitSpec> {
        self.baits.iter().find(|b| b.id == id)
    }

    pub fn potion(&self, id: &str) -> Option<&'static PotionSpec> {
        self.potions.iter().find(|p| p.id == id)
    }

    pub fn material(&self, id: &str) -> Option<&'static MaterialSpec> {
        self.materials.iter().find(|m| m.id == id)
    }

    /// Looks an enchantment up across all three pools.
    pub fn enchantment(&self, id: &str) -> Option<&'static Enchantment> {
        self.regular_enchantments
            .iter()
            .chain(self.exalted_enchantments)
            .chain(self.cosmic_enchantments)
            .find(|e| e.id == id)
    }

    pub fn enchantment_pool(&self, tier: EnchantmentTier) -> &'static [Enchantment] {
        match tier {
            EnchantmentTier::Regular => self.regular_enchantments,
            EnchantmentTier::Exalted => self.exalted_enchantments,
            EnchantmentTier::Cosmic => self.cosmic_enchantments,
        }
    }

    pub fn location(&self, id: &str) -> Option<&'static Location> {
        self.locations.iter().find(|l| l.id == id)
    }

    pub fn event(&self, id: &str) -> Option<&'static WorldEventSpec> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Classifies a stackable item id.
    pub fn item_kind(&self, id: &str) -> Option<ItemKind> {
        if self.bait(id).is_some() {
            Some(ItemKind::Bait)
        } else if self.potion(id).is_some() {
            Some(ItemKind::Potion)
        } else if self.material(id).is_some() {
            Some(ItemKind::Material)
        } else {
            None
        }
    }

    /// Display name for any stackable item id, falling back to the id itself.
    pub fn item_name<'a>(&self, id: &'a str) -> &'a str {
        self.bait(id)
            .map(|b| b.name)
            .or_else(|| self.potion(id).map(|p| p.name))
            .or_else(|| self.material(id).map(|m| m.name))
            .unwrap_or(id)
    }

    /// Base price and per-purchase increase rate for shop items.
    pub fn shop_pricing(&self, id: &str) -> Option<(u64, f64)> {
        self.bait(id)
            .map(|b| (b.base_price, b.price_increase))
            .or_else(|| self.potion(id).map(|p| (p.base_price, p.price_increase)))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{RELIC_ITEM_ID, RELIC_LOCATION_ID};
    use std::collections::HashSet;

    #[test]
    fn test_species_ids_unique() {
        let catalog = Catalog::standard();
        let ids: HashSet<&str> = catalog.species.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), catalog.species.len());
    }

    #[test]
    fn test_every_tier_has_species() {
        let catalog = Catalog::standard();
        for rarity in Rarity::ALL {
            assert!(
                !catalog.species_of(rarity).is_empty(),
                "no species for {:?}",
                rarity
            );
        }
    }

    #[test]
    fn test_starter_rod_is_free() {
        let catalog = Catalog::standard();
        let rod = catalog.rod(data::STARTER_ROD_ID).unwrap();
        assert_eq!(rod.price, Some(0));
    }

    #[test]
    fn test_unlock_rods_have_descriptions() {
        let catalog = Catalog::standard();
        for rod in catalog.rods {
            assert_eq!(rod.price.is_none(), rod.unlock.is_some(), "{}", rod.id);
        }
    }

    #[test]
    fn test_enchantment_pools_match_tiers() {
        let catalog = Catalog::standard();
        for tier in [
            EnchantmentTier::Regular,
            EnchantmentTier::Exalted,
            EnchantmentTier::Cosmic,
        ] {
            assert!(catalog.enchantment_pool(tier).iter().all(|e| e.tier == tier));
        }
        assert_eq!(catalog.regular_enchantments.len(), 28);
        assert_eq!(catalog.exalted_enchantments.len(), 8);
        assert_eq!(catalog.cosmic_enchantments.len(), 7);
    }

    #[test]
    fn test_item_kinds() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.item_kind("worm-bait"), Some(ItemKind::Bait));
        assert_eq!(catalog.item_kind(data::LUCK_POTION_ID), Some(ItemKind::Potion));
        assert_eq!(catalog.item_kind(RELIC_ITEM_ID), Some(ItemKind::Material));
        assert_eq!(catalog.item_kind("skitterfin-fish"), None);
        assert_eq!(catalog.item_name("worm-bait"), "Worm Bait");
        assert_eq!(catalog.item_name("mystery"), "mystery");
    }

    #[test]
    fn test_relic_location_exists() {
        let catalog = Catalog::standard();
        let isle = catalog.location(RELIC_LOCATION_ID).unwrap();
        assert_eq!(isle.difficulty, 3);
        assert!(catalog.location(data::ALTAR_LOCATION_ID).unwrap().is_action);
    }

    #[test]
    fn test_shop_pricing() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.shop_pricing("worm-bait"), Some((5, 1.1)));
        assert_eq!(catalog.shop_pricing(data::LUCK_POTION_ID), Some((30, 1.25)));
        assert_eq!(catalog.shop_pricing(RELIC_ITEM_ID), None);
    }
}
