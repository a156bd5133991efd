//! Hugoland - idle quiz RPG game core.
//!
//! Owns the player profile and every rule that changes it: quiz-driven
//! combat, loot chests, gear upgrades, research and persistence. A front
//! end drives a `ProfileStore` and renders its state.

pub mod character;
pub mod combat;
pub mod core;
pub mod economy;
pub mod items;
pub mod simulator;
pub mod store;

pub use crate::core::error::{ActionError, ActionResult};
pub use crate::core::game_state::GameState;
pub use crate::store::{FileStore, KeyValueStore, MemoryStore, ProfileStore};
