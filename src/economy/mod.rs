//! Currency-gated profile changes: chests, gear upgrades and sales, research.

pub mod chest;
pub mod ledger;

pub use chest::*;
pub use ledger::*;
