//! Day/night cycle on a fixed real-time period.

use crate::core::constants::{DAY_CYCLE_MS, GAME_MINUTES_PER_CYCLE};

/// The first half of every cycle is day.
pub fn is_day(epoch_ms: u64) -> bool {
    epoch_ms % DAY_CYCLE_MS < DAY_CYCLE_MS / 2
}

/// In-game minute of the day, mapping one cycle onto 24 game hours.
pub fn game_minute(epoch_ms: u64) -> u64 {
    let into_cycle = epoch_ms % DAY_CYCLE_MS;
    into_cycle * GAME_MINUTES_PER_CYCLE / DAY_CYCLE_MS
}

/// `HH:MM` in-game clock string.
pub fn clock_string(epoch_ms: u64) -> String {
    let minute = game_minute(epoch_ms);
    format!("{:02}:{:02}", minute / 60, minute % 60)
}
