//! Blockfall (workspace facade crate).
//!
//! Re-exports the member crates as `blockfall::{types,core,engine}` so
//! integration tests and binaries depend on a single package.

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_types as types;
