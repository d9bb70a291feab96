//! Storage collaborators: accounts, save blobs and roll counters.

pub mod accounts;
pub mod blobs;
pub mod saves;

pub use accounts::*;
pub use blobs::*;
pub use saves::*;
