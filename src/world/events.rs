//! Timed world events.

use crate::content::{Catalog, WorldEventSpec};
use crate::core::constants::EVENT_START_CHANCE;
use crate::utils::pick_uniform;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveEvent {
    pub spec: &'static WorldEventSpec,
    pub expires_at_ms: u64,
}

impl ActiveEvent {
    pub fn is_running(&self, now_ms: u64) -> bool {
        self.expires_at_ms > now_ms
    }
}

/// Events allowed at the current time of day, in catalog order.
pub fn applicable_events(catalog: &Catalog, is_day: bool) -> Vec<&'static WorldEventSpec> {
    catalog
        .events
        .iter()
        .filter(|e| e.window.allows(is_day))
        .collect()
}

/// One event roll: a 10% chance to start an event chosen uniformly among
/// the applicable ones.
pub fn roll_event(
    catalog: &Catalog,
    is_day: bool,
    now_ms: u64,
    rng: &mut impl Rng,
) -> Option<ActiveEvent> {
    if !rng.gen_bool(EVENT_START_CHANCE) {
        return None;
    }
    let candidates = applicable_events(catalog, is_day);
    let spec = *pick_uniform(&candidates, rng)?;
    Some(ActiveEvent {
        spec,
        expires_at_ms: now_ms + spec.duration_secs * 1000,
    })
}
