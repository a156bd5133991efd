//! Core profile state, balancing constants and error types.

#![allow(unused_imports)]

pub mod constants;
pub mod error;
pub mod game_state;

pub use constants::*;
pub use error::*;
pub use game_state::*;
