//! File-based CombatantStore implementation.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use arena_content::CombatantDefinition;

use crate::repository::file::write_atomic;
use crate::repository::{CombatantStore, RepositoryError, Result};

/// All definitions in a single JSON object keyed by name.
///
/// Every save rewrites the whole file; rosters are small.
pub struct FileCombatantStore {
    path: PathBuf,
    writer: Mutex<()>,
}

impl FileCombatantStore {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self {
            path,
            writer: Mutex::new(()),
        })
    }

    fn load_all(&self) -> Result<BTreeMap<String, CombatantDefinition>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let json = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

impl CombatantStore for FileCombatantStore {
    fn fetch(&self, name: &str) -> Result<Option<CombatantDefinition>> {
        Ok(self.load_all()?.remove(name))
    }

    fn save(&self, definition: &CombatantDefinition) -> Result<()> {
        let _guard = self.writer.lock().map_err(|_| RepositoryError::LockPoisoned)?;

        let mut definitions = self.load_all()?;
        definitions.insert(definition.name.clone(), definition.clone());

        let json = serde_json::to_string_pretty(&definitions)?;
        write_atomic(&self.path, &json)?;

        tracing::debug!("Saved combatant {} to {}", definition.name, self.path.display());
        Ok(())
    }

    fn names(&self) -> Result<Vec<String>> {
        Ok(self.load_all()?.into_keys().collect())
    }
}
