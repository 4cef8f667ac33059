//! File-based repository implementations.
//!
//! ```text
//! data_dir/
//! ├── combatants.json        ← every definition, keyed by name
//! ├── admin.log              ← one narration line per entry
//! └── results/
//!     ├── battle_1.json
//!     └── tournament_1.json
//! ```
//!
//! JSON files are written to a temp file first and renamed into place.

mod admin;
mod combatants;
mod results;

pub use admin::FileAdminLog;
pub use combatants::FileCombatantStore;
pub use results::FileResultStore;

use std::fs;
use std::path::Path;

use crate::repository::Result;

/// Write `json` to `path` through a sibling temp file.
pub(crate) fn write_atomic(path: &Path, json: &str) -> Result<()> {
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, json)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}
