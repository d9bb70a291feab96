//! Selling, the shop, the enchanting altar and location travel.

pub mod enchanting;
pub mod shop;
pub mod travel;
pub mod value;

pub use enchanting::*;
pub use shop::*;
pub use travel::*;
pub use value::*;
