//! Profile ownership and persistence.

pub mod backend;
pub mod profile;
pub mod snapshot;

pub use backend::*;
pub use profile::*;
pub use snapshot::*;
