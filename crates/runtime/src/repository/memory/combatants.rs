//! In-memory combatant store.

use std::collections::BTreeMap;
use std::sync::RwLock;

use arena_content::CombatantDefinition;

use crate::repository::{CombatantStore, RepositoryError, Result};

/// Thread-safe but not persistent across process restarts.
#[derive(Default)]
pub struct InMemoryCombatantStore {
    definitions: RwLock<BTreeMap<String, CombatantDefinition>>,
}

impl InMemoryCombatantStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with `definitions`; later names win.
    pub fn with_definitions(definitions: impl IntoIterator<Item = CombatantDefinition>) -> Self {
        let definitions = definitions
            .into_iter()
            .map(|definition| (definition.name.clone(), definition))
            .collect();
        Self {
            definitions: RwLock::new(definitions),
        }
    }
}

impl CombatantStore for InMemoryCombatantStore {
    fn fetch(&self, name: &str) -> Result<Option<CombatantDefinition>> {
        let definitions = self
            .definitions
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        Ok(definitions.get(name).cloned())
    }

    fn save(&self, definition: &CombatantDefinition) -> Result<()> {
        let mut definitions = self
            .definitions
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        definitions.insert(definition.name.clone(), definition.clone());
        Ok(())
    }

    fn names(&self) -> Result<Vec<String>> {
        let definitions = self
            .definitions
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        Ok(definitions.keys().cloned().collect())
    }
}
