//! Roster loaders for reading combatant definitions from files.
//!
//! RON files hold a bare list of definitions; TOML files hold the same list
//! under repeated `[[combatant]]` tables.

pub mod roster;

pub use roster::{RosterLoader, starter_roster};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
