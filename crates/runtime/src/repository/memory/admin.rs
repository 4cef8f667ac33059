//! In-memory admin log.

use std::sync::RwLock;

use crate::repository::{AdminLog, RepositoryError, Result};

#[derive(Default)]
pub struct InMemoryAdminLog {
    entries: RwLock<Vec<String>>,
}

impl InMemoryAdminLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdminLog for InMemoryAdminLog {
    fn append(&self, message: &str) -> Result<()> {
        self.entries
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?
            .push(message.to_owned());
        Ok(())
    }

    fn entries(&self) -> Result<Vec<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        Ok(entries.clone())
    }
}
