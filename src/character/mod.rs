//! Player-owned state: progression, inventory, rods, and active consumables.

pub mod consumables;
pub mod inventory;
pub mod progression;
pub mod rods;

pub use consumables::*;
pub use inventory::*;
pub use progression::*;
pub use rods::*;
