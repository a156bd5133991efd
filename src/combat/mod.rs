//! Combat: enemies, turn resolution, and the timed-answer clock.

pub mod logic;
pub mod turn_clock;
pub mod types;

pub use logic::*;
pub use turn_clock::*;
pub use types::*;
