//! Tidecaster - Incremental Fishing Game Library
//!
//! The rules and state of the game: fishing sessions, catch generation,
//! progression, the shop and altar, the world clock, and persistence. A front
//! end drives a [`core::Game`] and renders its views and events.

pub mod character;
pub mod content;
pub mod core;
pub mod economy;
pub mod fishing;
pub mod persistence;
pub mod utils;
pub mod world;

pub use crate::core::{Game, GameError, GameEvent, GameState, Result};
