//! Notifications the game emits for presentation to drain.

use crate::content::{Mutation, Rarity, Weather};
use crate::fishing::FishingPhase;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    PhaseChanged {
        phase: FishingPhase,
    },
    FishCaught {
        fish_id: String,
        species: String,
        rarity: Rarity,
        weight: f64,
        mutation: Option<Mutation>,
        xp: u64,
    },
    FishEscaped,
    LevelUp {
        level: u32,
        coins: u64,
    },
    RelicFound,
    BaitDepleted {
        bait: String,
    },
    AutoplayStopped,
    PotionExpired {
        potion: String,
    },
    WorldEventStarted {
        name: String,
    },
    WorldEventEnded {
        name: String,
    },
    WeatherChanged {
        weather: Weather,
    },
    TimeOfDayChanged {
        is_day: bool,
    },
    /// Free-form message, including rejected operations.
    Notice {
        message: String,
    },
}

impl GameEvent {
    pub fn notice(message: impl Into<String>) -> Self {
        GameEvent::Notice {
            message: message.into(),
        }
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::PhaseChanged { phase } => write!(f, "{}", phase.default_status()),
            GameEvent::FishCaught {
                species,
                weight,
                mutation,
                xp,
                ..
            } => {
                write!(f, "Caught {} ({}kg)", species, weight)?;
                if let Some(m) = mutation {
                    write!(f, " (Mutation: {})", m.name())?;
                }
                write!(f, "! +{} XP", xp)
            }
            GameEvent::FishEscaped => write!(f, "The fish got away!"),
            GameEvent::LevelUp { level, coins } => {
                write!(f, "Level up! You reached level {} (+{} coins)", level, coins)
            }
            GameEvent::RelicFound => write!(f, "You found a rare Stonehenge Relic!"),
            GameEvent::BaitDepleted { bait } => write!(f, "{} is used up", bait),
            GameEvent::AutoplayStopped => write!(f, "Auto-fishing stopped: out of bait"),
            GameEvent::PotionExpired { potion } => write!(f, "{} has worn off", potion),
            GameEvent::WorldEventStarted { name } => write!(f, "Event started: {}!", name),
            GameEvent::WorldEventEnded { name } => write!(f, "{} has ended", name),
            GameEvent::WeatherChanged { weather } => write!(f, "The weather is now {}", weather.name()),
            GameEvent::TimeOfDayChanged { is_day: true } => write!(f, "The sun rises"),
            GameEvent::TimeOfDayChanged { is_day: false } => write!(f, "Night falls"),
            GameEvent::Notice { message } => write!(f, "{}", message),
        }
    }
}
