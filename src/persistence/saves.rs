//! Save blobs and enchant-roll counters on top of a [`BlobStore`].

use super::blobs::BlobStore;
use crate::content::Catalog;
use crate::core::error::Result;
use crate::core::game_state::GameState;
use crate::economy::EnchantRollCounter;
use tracing::{info, warn};

fn save_key(username: &str) -> String {
    format!("save-{}", username)
}

fn roll_counter_key(username: &str) -> String {
    format!("enchant-rolls-{}", username)
}

/// How a loaded state came about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Read from an existing save.
    Saved,
    /// No save existed; a new player with the starter kit.
    NewPlayer,
    /// The save could not be read; a fresh default state.
    Recovered,
}

#[derive(Debug, Clone)]
pub struct LoadedGame {
    pub state: GameState,
    pub source: LoadSource,
}

/// Loads a player's state. Never fails: unreadable data falls back to a
/// fresh state with a warning.
pub fn load_game(store: &impl BlobStore, catalog: &Catalog, username: &str) -> LoadedGame {
    let blob = match store.read(&save_key(username)) {
        Ok(Some(blob)) => blob,
        Ok(None) => {
            info!(username, "No save found, starting a new player");
            return LoadedGame {
                state: GameState::new_player(catalog),
                source: LoadSource::NewPlayer,
            };
        }
        Err(e) => {
            warn!(username, error = %e, "Failed to read save, starting fresh");
            return recovered();
        }
    };

    match serde_json::from_str::<GameState>(&blob) {
        Ok(mut state) => {
            state.normalize(catalog);
            LoadedGame {
                state,
                source: LoadSource::Saved,
            }
        }
        Err(e) => {
            warn!(username, error = %e, "Corrupted save, starting fresh");
            recovered()
        }
    }
}

fn recovered() -> LoadedGame {
    LoadedGame {
        state: GameState::default(),
        source: LoadSource::Recovered,
    }
}

pub fn save_game(store: &mut impl BlobStore, username: &str, state: &GameState) -> Result<()> {
    let json = serde_json::to_string(state)?;
    store.write(&save_key(username), &json)?;
    info!(username, money = state.money, "Game saved");
    Ok(())
}

/// Loads the daily roll counter, defaulting to an empty one.
pub fn load_roll_counter(store: &impl BlobStore, username: &str) -> EnchantRollCounter {
    match store.read(&roll_counter_key(username)) {
        Ok(Some(blob)) => serde_json::from_str(&blob).unwrap_or_else(|e| {
            warn!(username, error = %e, "Corrupted roll counter, resetting");
            EnchantRollCounter::default()
        }),
        Ok(None) => EnchantRollCounter::default(),
        Err(e) => {
            warn!(username, error = %e, "Failed to read roll counter, resetting");
            EnchantRollCounter::default()
        }
    }
}

pub fn save_roll_counter(
    store: &mut impl BlobStore,
    username: &str,
    counter: &EnchantRollCounter,
) -> Result<()> {
    let json = serde_json::to_string(counter)?;
    store.write(&roll_counter_key(username), &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Mutation;
    use crate::persistence::MemoryBlobStore;

    #[test]
    fn test_missing_save_is_new_player() {
        let catalog = Catalog::standard();
        let store = MemoryBlobStore::default();
        let loaded = load_game(&store, &catalog, "alice");
        assert_eq!(loaded.source, LoadSource::NewPlayer);
        assert_eq!(loaded.state.inventory.item_count("worm-bait"), 3);
    }

    #[test]
    fn test_corrupted_save_recovers_without_kit() {
        let catalog = Catalog::standard();
        let mut store = MemoryBlobStore::default();
        store.write("save-alice", "{not json").unwrap();
        let loaded = load_game(&store, &catalog, "alice");
        assert_eq!(loaded.source, LoadSource::Recovered);
        assert_eq!(loaded.state, GameState::default());
    }

    #[test]
    fn test_save_and_load_preserves_ledger_sets() {
        let catalog = Catalog::standard();
        let mut store = MemoryBlobStore::default();
        let mut state = GameState::new_player(&catalog);
        state.money = 999;
        state.collection.record("tuna", 2.5, Some(Mutation::Frozen));
        state.collection.record("tuna", 1.0, Some(Mutation::Ghost));
        save_game(&mut store, "alice", &state).unwrap();

        let raw = store.read("save-alice").unwrap().unwrap();
        assert!(raw.contains(r#""mutations":["ghost","frozen"]"#));

        let loaded = load_game(&store, &catalog, "alice");
        assert_eq!(loaded.source, LoadSource::Saved);
        assert_eq!(loaded.state, state);
    }

    #[test]
    fn test_roll_counter_round_trip() {
        let mut store = MemoryBlobStore::default();
        assert_eq!(load_roll_counter(&store, "alice"), EnchantRollCounter::default());
        let counter = EnchantRollCounter {
            date: String::from("2026-10-16"),
            rolls: 3,
        };
        save_roll_counter(&mut store, "alice", &counter).unwrap();
        assert_eq!(load_roll_counter(&store, "alice"), counter);
        assert_eq!(load_roll_counter(&store, "bob"), EnchantRollCounter::default());
    }
}
