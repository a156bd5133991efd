//! Monte Carlo balance simulator.
//!
//! Each run plays a fresh in-memory profile through the same `ProfileStore`
//! the game uses, with a scripted player deciding hits and spending. The
//! report answers how far a typical player gets and how the economy paces.

mod config;
mod policy;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
