//! Owned rod collection with a single equipped rod and per-rod enchantments.

use crate::content::data::STARTER_ROD_ID;
use crate::content::{Catalog, EnchantSlot, Enchantment};
use crate::core::error::{GameError, Result};
use crate::fishing::RodStats;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedRod {
    pub id: String,
    #[serde(default)]
    pub equipped: bool,
    /// Regular or exalted enchantment id.
    #[serde(default)]
    pub enchantment: Option<String>,
    #[serde(default)]
    pub cosmic_enchantment: Option<String>,
}

impl OwnedRod {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            equipped: false,
            enchantment: None,
            cosmic_enchantment: None,
        }
    }
}

/// Invariant: exactly one rod has `equipped = true`. Every mutation that
/// touches the flag rewrites all of them in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RodCollection {
    rods: Vec<OwnedRod>,
}

impl Default for RodCollection {
    fn default() -> Self {
        Self {
            rods: vec![OwnedRod {
                equipped: true,
                ..OwnedRod::new(STARTER_ROD_ID)
            }],
        }
    }
}

impl RodCollection {
    pub fn rods(&self) -> &[OwnedRod] {
        &self.rods
    }

    pub fn owns(&self, id: &str) -> bool {
        self.rods.iter().any(|r| r.id == id)
    }

    pub fn equipped(&self) -> Option<&OwnedRod> {
        self.rods.iter().find(|r| r.equipped)
    }

    pub fn equipped_count(&self) -> usize {
        self.rods.iter().filter(|r| r.equipped).count()
    }

    /// Equips an owned rod, clearing the flag everywhere else.
    pub fn equip(&mut self, id: &str) -> Result<()> {
        if !self.owns(id) {
            return Err(GameError::RodNotOwned(id.to_string()));
        }
        self.set_equipped(id);
        Ok(())
    }

    /// Adds a newly bought rod and equips it in the same step.
    pub fn add_and_equip(&mut self, id: &str) -> Result<()> {
        if self.owns(id) {
            return Err(GameError::RodAlreadyOwned(id.to_string()));
        }
        self.rods.push(OwnedRod::new(id));
        self.set_equipped(id);
        Ok(())
    }

    fn set_equipped(&mut self, id: &str) {
        for rod in &mut self.rods {
            rod.equipped = rod.id == id;
        }
    }

    /// Puts an enchantment in the slot its tier belongs to on the equipped
    /// rod, replacing whatever was there. Returns the rod id.
    pub fn apply_enchantment(&mut self, enchantment: &Enchantment) -> Result<String> {
        let rod = self
            .rods
            .iter_mut()
            .find(|r| r.equipped)
            .ok_or_else(|| GameError::RodNotOwned(String::from("equipped rod")))?;
        let slot = match enchantment.tier.slot() {
            EnchantSlot::Regular => &mut rod.enchantment,
            EnchantSlot::Cosmic => &mut rod.cosmic_enchantment,
        };
        *slot = Some(enchantment.id.to_string());
        Ok(rod.id.clone())
    }

    /// Derived stats of the equipped rod. Unknown ids contribute nothing.
    pub fn equipped_stats(&self, catalog: &Catalog) -> RodStats {
        let spec = self
            .equipped()
            .and_then(|r| catalog.rod(&r.id))
            .or_else(|| catalog.rod(STARTER_ROD_ID));
        let Some(spec) = spec else {
            return RodStats {
                luck: 0.0,
                speed: 0.0,
                endurance: 0.0,
                max_weight: 0.0,
                size_increase: 0.0,
                mutation_chance: 0.0,
                xp_boost: 1.0,
            };
        };
        let rod = self.equipped();
        let lookup = |id: Option<&String>| id.and_then(|id| catalog.enchantment(id));
        RodStats::derive(
            spec,
            lookup(rod.and_then(|r| r.enchantment.as_ref())),
            lookup(rod.and_then(|r| r.cosmic_enchantment.as_ref())),
        )
    }

    /// Repairs a loaded collection: drops rods missing from the catalog,
    /// guarantees the starter rod, and leaves exactly one rod equipped.
    pub fn normalize(&mut self, catalog: &Catalog) {
        self.rods.retain(|r| catalog.rod(&r.id).is_some());
        let mut seen = Vec::new();
        self.rods.retain(|r| {
            if seen.contains(&r.id) {
                false
            } else {
                seen.push(r.id.clone());
                true
            }
        });
        if !self.owns(STARTER_ROD_ID) {
            self.rods.insert(0, OwnedRod::new(STARTER_ROD_ID));
        }
        let target = self
            .equipped()
            .map(|r| r.id.clone())
            .unwrap_or_else(|| STARTER_ROD_ID.to_string());
        self.set_equipped(&target);
    }
}
