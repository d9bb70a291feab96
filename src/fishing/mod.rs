//! Fishing system: luck, catch generation, and the per-cast session.

pub mod generation;
pub mod logic;
pub mod luck;
pub mod types;

pub use generation::*;
pub use logic::*;
pub use luck::*;
pub use types::*;
