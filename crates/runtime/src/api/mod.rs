//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! the manager can stay focused on orchestration and persistence.

pub mod access;
pub mod errors;
pub mod reports;

pub use access::{Capability, Role};
pub use errors::{Result, RuntimeError};
pub use reports::{BattleReport, TournamentReport};
