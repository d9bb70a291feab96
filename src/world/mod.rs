//! World environment: day/night clock, weather and timed events.

pub mod clock;
pub mod events;
pub mod state;
pub mod weather;

pub use clock::*;
pub use events::*;
pub use state::*;
pub use weather::*;
