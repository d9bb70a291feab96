//! Core game state, timeline and orchestration.

pub mod constants;
pub mod error;
pub mod events;
pub mod game;
pub mod game_state;
pub mod scheduler;

pub use constants::*;
pub use error::*;
pub use events::*;
pub use game::*;
pub use game_state::*;
pub use scheduler::*;
