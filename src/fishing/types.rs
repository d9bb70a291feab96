//! Fishing data structures: session phases, caught fish, discovery ledger.

use crate::content::{FishSpecies, Mutation};
use crate::core::scheduler::Scheduler;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Lifecycle of a single cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FishingPhase {
    Idle,
    Casting,
    Waiting,
    Biting,
    Reeling,
    Caught,
    Escaped,
}

impl FishingPhase {
    pub fn is_resolved(self) -> bool {
        matches!(self, FishingPhase::Caught | FishingPhase::Escaped)
    }

    pub fn default_status(self) -> &'static str {
        match self {
            FishingPhase::Idle => "Ready to cast",
            FishingPhase::Casting => "Casting...",
            FishingPhase::Waiting => "Waiting for a fish...",
            FishingPhase::Biting => "A bite! Reel it in!",
            FishingPhase::Reeling => "Keep reeling!",
            FishingPhase::Caught => "Caught!",
            FishingPhase::Escaped => "The fish got away!",
        }
    }
}

/// Timers a session may have armed. Every one of them belongs to exactly one
/// phase and is torn down when that phase is left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionTimer {
    CastComplete,
    FishFrame,
    BiteCountdown,
    BiteExpired,
    ReelTick,
    ResolveToIdle,
    AutoPlay,
}

/// Position in percent-of-pond coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FishPosition {
    pub x: f64,
    pub y: f64,
}

impl FishPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: FishPosition) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A single caught fish. Fish never stack: each catch is its own entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaughtFish {
    /// `{species}-{timestamp}-{ordinal}`, unique per catch.
    pub id: String,
    pub species_id: String,
    /// Kilograms, rounded to 3 decimals.
    pub weight: f64,
    #[serde(default)]
    pub mutation: Option<Mutation>,
    #[serde(default)]
    pub caught_at_ms: u64,
}

/// Per-species discovery record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionEntry {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub heaviest: f64,
    /// Every mutation ever seen on this species. Stored as a list.
    #[serde(default, with = "mutation_list")]
    pub mutations: BTreeSet<Mutation>,
}

/// Discovery ledger keyed by species id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FishCollection {
    pub entries: BTreeMap<String, CollectionEntry>,
}

impl FishCollection {
    /// Records a catch: bumps the count, keeps the heaviest weight and adds
    /// the mutation (if any) to the seen set.
    pub fn record(&mut self, species_id: &str, weight: f64, mutation: Option<Mutation>) {
        let entry = self.entries.entry(species_id.to_string()).or_default();
        entry.count += 1;
        entry.heaviest = entry.heaviest.max(weight);
        if let Some(m) = mutation {
            entry.mutations.insert(m);
        }
    }

    pub fn get(&self, species_id: &str) -> Option<&CollectionEntry> {
        self.entries.get(species_id)
    }

    pub fn discovered_count(&self) -> usize {
        self.entries.len()
    }
}

/// Serializes a mutation set as an ordered list and reads it back into a set,
/// treating `null` or a missing field as empty.
mod mutation_list {
    use crate::content::Mutation;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::BTreeSet;

    pub fn serialize<S: Serializer>(set: &BTreeSet<Mutation>, s: S) -> Result<S::Ok, S::Error> {
        let list: Vec<Mutation> = set.iter().copied().collect();
        list.serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<BTreeSet<Mutation>, D::Error> {
        let list: Option<Vec<Mutation>> = Option::deserialize(d)?;
        Ok(list.unwrap_or_default().into_iter().collect())
    }
}

/// Ephemeral state of the current cast plus every timer it owns.
#[derive(Debug, Clone)]
pub struct FishingSession {
    pub(crate) phase: FishingPhase,
    pub(crate) status: String,
    pub(crate) hooked: Option<&'static FishSpecies>,
    pub(crate) bite_window_ms: f64,
    /// Displayed bite window, 100 down to 0.
    pub(crate) bite_remaining: f64,
    /// Reel meter, always within [0, 100].
    pub(crate) reel_progress: f64,
    pub(crate) fish_position: Option<FishPosition>,
    pub(crate) fish_target: Option<FishPosition>,
    pub(crate) autoplay: bool,
    pub(crate) timers: Scheduler<SessionTimer>,
}

/// What a session step asks its owner to do.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionSignal {
    PhaseChanged(FishingPhase),
    /// The fish was landed; the owner applies catch side effects.
    Caught(&'static FishSpecies),
    /// The fish got away; the owner consumes a bait use.
    Escaped,
    /// Auto-play wants a new cast.
    AutoCast,
}

/// Read-only snapshot for presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionView {
    pub phase: FishingPhase,
    pub status: String,
    pub bite_window_percent: f64,
    pub reel_progress_percent: f64,
    pub fish_position: Option<FishPosition>,
    pub hooked: Option<String>,
    pub autoplay: bool,
}
