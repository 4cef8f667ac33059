//! Combatant definitions and roster loaders.
//!
//! This crate holds the data side of the arena:
//! - Serializable combatant definitions with validation
//! - Roster loaders for RON and TOML files
//! - The bundled starter roster
//!
//! Definitions are the stored form of a combatant. The runtime persists them
//! and turns them into `arena_core::Combatant` values when a battle starts.

pub mod definition;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use definition::{CombatantDefinition, DefinitionError, SkillSpec};

#[cfg(feature = "loaders")]
pub use loaders::{LoadResult, RosterLoader, starter_roster};
