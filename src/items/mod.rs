//! Item system: types, name pools, generation, and the inventory.

pub mod generation;
pub mod inventory;
pub mod names;
pub mod types;

pub use generation::*;
pub use inventory::*;
pub use types::*;
