//! Location travel gated by the equipped rod's weight capacity.

use crate::content::{Catalog, Location};
use crate::core::constants::LOCATION_WEIGHT_PER_DIFFICULTY;
use crate::core::error::{GameError, Result};
use crate::fishing::RodStats;

/// Where a location click leads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Destination {
    /// A fishing spot the player now stands at.
    Fishing(&'static Location),
    /// A location that opens a screen instead, such as the enchanting altar.
    Action(&'static Location),
}

/// True when the rod can handle the location's difficulty.
pub fn can_access(location: &Location, rod: &RodStats) -> bool {
    rod.max_weight >= location.difficulty as f64 * LOCATION_WEIGHT_PER_DIFFICULTY
}

/// Resolves a travel request. Action locations are always reachable.
pub fn plan_travel(catalog: &Catalog, rod: &RodStats, id: &str) -> Result<Destination> {
    let location = catalog
        .location(id)
        .ok_or_else(|| GameError::UnknownItem(id.to_string()))?;
    if location.is_action {
        return Ok(Destination::Action(location));
    }
    if !can_access(location, rod) {
        return Err(GameError::LocationLocked(location.name.to_string()));
    }
    Ok(Destination::Fishing(location))
}
