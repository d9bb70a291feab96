//! Active bait and active potion effects.

use crate::content::{BaitEffect, BaitSpec, Catalog, PotionSpec};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveBait {
    pub id: String,
    pub remaining_uses: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivePotion {
    pub id: String,
    pub expires_at_ms: u64,
}

/// At most one active bait, and at most one active entry per potion id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Consumables {
    pub bait: Option<ActiveBait>,
    pub potions: Vec<ActivePotion>,
}

impl Consumables {
    /// Makes `bait` the active bait at full durability, replacing any other.
    pub fn equip_bait(&mut self, bait: &BaitSpec) {
        self.bait = Some(ActiveBait {
            id: bait.id.to_string(),
            remaining_uses: bait.effect.durability,
        });
    }

    pub fn has_bait(&self) -> bool {
        self.bait.is_some()
    }

    pub fn bait_effect(&self, catalog: &Catalog) -> Option<BaitEffect> {
        self.bait
            .as_ref()
            .and_then(|b| catalog.bait(&b.id))
            .map(|b| b.effect)
    }

    /// Uses up one cast of the active bait. Returns the bait id if that was
    /// its last use.
    pub fn consume_bait_use(&mut self) -> Option<String> {
        let bait = self.bait.as_mut()?;
        bait.remaining_uses = bait.remaining_uses.saturating_sub(1);
        if bait.remaining_uses == 0 {
            self.bait.take().map(|b| b.id)
        } else {
            None
        }
    }

    /// Starts a potion or extends a running one by its full duration from
    /// whichever is later, now or the current expiry. Returns the new expiry.
    pub fn apply_potion(&mut self, potion: &PotionSpec, now_ms: u64) -> u64 {
        let duration_ms = potion.duration_secs * 1000;
        match self.potions.iter_mut().find(|p| p.id == potion.id) {
            Some(active) => {
                active.expires_at_ms = active.expires_at_ms.max(now_ms) + duration_ms;
                active.expires_at_ms
            }
            None => {
                let expires_at_ms = now_ms + duration_ms;
                self.potions.push(ActivePotion {
                    id: potion.id.to_string(),
                    expires_at_ms,
                });
                expires_at_ms
            }
        }
    }

    /// Flat luck from potions still running at `now_ms`.
    pub fn potion_luck(&self, catalog: &Catalog, now_ms: u64) -> f64 {
        self.potions
            .iter()
            .filter(|p| p.expires_at_ms > now_ms)
            .filter_map(|p| catalog.potion(&p.id))
            .map(|p| p.potency)
            .sum()
    }

    /// Drops expired potions, returning their ids.
    pub fn sweep_expired(&mut self, now_ms: u64) -> Vec<String> {
        let (expired, active): (Vec<ActivePotion>, Vec<ActivePotion>) = self
            .potions
            .drain(..)
            .partition(|p| p.expires_at_ms <= now_ms);
        self.potions = active;
        expired.into_iter().map(|p| p.id).collect()
    }
}
