//! Shared helpers: weighted selection and JSON persistence.

pub mod persistence;
pub mod weighted;

pub use weighted::{pick_uniform, pick_weighted};
