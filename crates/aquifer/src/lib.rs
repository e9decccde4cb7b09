//! Aquifer: metadata-driven hydration of typed entity graphs from flat,
//! join-aliased row projections.
//!
//! This crate is the facade; the engine lives in `aquifer-core` and is
//! re-exported here as [`core`].

pub use aquifer_core as core;

pub use aquifer_core::{Error, hydrate, hydrate_dyn};

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use aquifer_core::prelude::*;
}
