//! Shared environment: weather, time of day, and the active world event.

use super::clock::{clock_string, is_day};
use super::events::{roll_event, ActiveEvent};
use super::weather::next_weather;
use crate::content::{Catalog, Weather, WorldEventSpec};
use rand::Rng;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
pub struct WorldState {
    pub weather: Weather,
    pub is_day: bool,
    pub clock: String,
    pub event: Option<ActiveEvent>,
}

impl WorldState {
    pub fn new(now_ms: u64) -> Self {
        Self {
            weather: Weather::default(),
            is_day: is_day(now_ms),
            clock: clock_string(now_ms),
            event: None,
        }
    }

    /// The event in effect at `now_ms`, if any.
    pub fn active_event(&self, now_ms: u64) -> Option<&'static WorldEventSpec> {
        self.event
            .filter(|e| e.is_running(now_ms))
            .map(|e| e.spec)
    }

    /// Recomputes day/night and the clock string. Returns the new day flag
    /// when it flipped.
    pub fn update_clock(&mut self, now_ms: u64) -> Option<bool> {
        self.clock = clock_string(now_ms);
        let day = is_day(now_ms);
        if day == self.is_day {
            return None;
        }
        self.is_day = day;
        info!(is_day = day, clock = %self.clock, "Time of day changed");
        Some(day)
    }

    /// Advances the weather chain. Returns the new weather when it changed.
    pub fn change_weather(&mut self, rng: &mut impl Rng) -> Option<Weather> {
        let next = next_weather(self.weather, rng);
        if next == self.weather {
            return None;
        }
        info!(from = ?self.weather, to = ?next, "Weather changed");
        self.weather = next;
        Some(next)
    }

    /// Rolls for a new event unless one is already active.
    pub fn try_start_event(
        &mut self,
        catalog: &Catalog,
        now_ms: u64,
        rng: &mut impl Rng,
    ) -> Option<&'static WorldEventSpec> {
        if self.event.is_some() {
            return None;
        }
        let event = roll_event(catalog, self.is_day, now_ms, rng)?;
        info!(event = event.spec.id, expires_at_ms = event.expires_at_ms, "World event started");
        self.event = Some(event);
        Some(event.spec)
    }

    /// Clears the event once it has run out, returning it.
    pub fn sweep_event(&mut self, now_ms: u64) -> Option<&'static WorldEventSpec> {
        let event = self.event?;
        if event.is_running(now_ms) {
            return None;
        }
        self.event = None;
        info!(event = event.spec.id, "World event ended");
        Some(event.spec)
    }

    pub fn view(&self, now_ms: u64) -> WorldView {
        WorldView {
            weather: self.weather,
            is_day: self.is_day,
            clock: self.clock.clone(),
            event: self.active_event(now_ms).map(|e| e.name.to_string()),
            event_remaining_secs: self
                .event
                .filter(|e| e.is_running(now_ms))
                .map(|e| (e.expires_at_ms - now_ms) / 1000),
        }
    }
}

/// Read-only snapshot for presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorldView {
    pub weather: Weather,
    pub is_day: bool,
    pub clock: String,
    pub event: Option<String>,
    pub event_remaining_secs: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_world_starts_sunny() {
        let world = WorldState::new(0);
        assert_eq!(world.weather, Weather::Sunny);
        assert!(world.is_day);
        assert_eq!(world.clock, "00:00");
        assert!(world.active_event(0).is_none());
    }

    #[test]
    fn test_clock_reports_flip_once() {
        let mut world = WorldState::new(0);
        let dusk = crate::core::constants::DAY_CYCLE_MS / 2;
        assert_eq!(world.update_clock(dusk - 1), None);
        assert_eq!(world.update_clock(dusk), Some(false));
        assert_eq!(world.update_clock(dusk + 1_000), None);
        assert_eq!(world.clock, "12:00");
    }

    #[test]
    fn test_only_one_event_at_a_time() {
        let catalog = Catalog::standard();
        let mut world = WorldState::new(0);
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let mut started = None;
        for _ in 0..200 {
            if let Some(spec) = world.try_start_event(&catalog, 0, &mut rng) {
                started = Some(spec);
                break;
            }
        }
        let spec = started.expect("an event should start within 200 rolls");
        for _ in 0..200 {
            assert!(world.try_start_event(&catalog, 0, &mut rng).is_none());
        }

        let expiry = spec.duration_secs * 1000;
        assert_eq!(world.active_event(expiry - 1).map(|e| e.id), Some(spec.id));
        assert!(world.sweep_event(expiry - 1).is_none());
        assert_eq!(world.sweep_event(expiry).map(|e| e.id), Some(spec.id));
        assert!(world.event.is_none());
    }
}
