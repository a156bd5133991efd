//! Derived player stats and research progression.

#![allow(unused_imports)]

pub mod derived_stats;
pub mod research;

pub use derived_stats::*;
pub use research::*;
