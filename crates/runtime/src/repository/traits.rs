//! Repository contracts for combatants, results and the admin log.

use arena_content::CombatantDefinition;

use super::error::{RepositoryError, Result};
use super::types::{RecordKind, ResultRecord};

/// Store of combatant definitions keyed by name.
pub trait CombatantStore: Send + Sync {
    /// Fetch a definition by name
    fn fetch(&self, name: &str) -> Result<Option<CombatantDefinition>>;

    /// Insert or replace a definition
    fn save(&self, definition: &CombatantDefinition) -> Result<()>;

    /// List every stored name in ascending order
    fn names(&self) -> Result<Vec<String>>;
}

/// Store of finished battle and tournament records.
///
/// Keys are unique per [`RecordKind`]; `insert` never overwrites.
pub trait ResultStore: Send + Sync {
    /// Insert a new record, failing with [`RepositoryError::DuplicateKey`]
    /// when the key is taken
    fn insert(&self, record: &ResultRecord) -> Result<()>;

    /// Replace an existing record. Returns `false` when there was none.
    fn update(&self, record: &ResultRecord) -> Result<bool>;

    /// Load a record by kind and key
    fn get(&self, kind: RecordKind, key: u64) -> Result<Option<ResultRecord>>;

    /// Number of stored records of one kind
    fn count(&self, kind: RecordKind) -> Result<u64>;

    /// Every record of one kind in ascending key order
    fn list(&self, kind: RecordKind) -> Result<Vec<ResultRecord>>;

    /// Update in place if the key exists, insert otherwise.
    ///
    /// An insert that loses a race to another writer is not an error: the
    /// conflict goes to the admin log and the record is written as an update.
    fn upsert(&self, record: &ResultRecord, admin: &dyn AdminLog) -> Result<()> {
        if self.update(record)? {
            return Ok(());
        }

        match self.insert(record) {
            Err(RepositoryError::DuplicateKey { kind, key }) => {
                tracing::warn!(%kind, key, "insert raced another writer, updating instead");
                admin.append(&format!(
                    "Duplicate key error: a {kind} record with id {key} already exists."
                ))?;
                self.update(record).map(|_| ())
            }
            other => other,
        }
    }
}

/// Append-only sink for operational narration.
pub trait AdminLog: Send + Sync {
    fn append(&self, message: &str) -> Result<()>;

    /// Every entry in append order
    fn entries(&self) -> Result<Vec<String>>;
}

/// Hands out battle and tournament ids.
pub trait IdCounter: Send + Sync {
    /// Reserve `count` consecutive ids of one kind and return the first.
    ///
    /// A tournament numbers its battles itself, so it takes the whole block
    /// up front; later requests start after the block.
    fn reserve(&self, kind: RecordKind, count: u64) -> Result<u64>;

    /// Next unused id of one kind
    fn next_id(&self, kind: RecordKind) -> Result<u64> {
        self.reserve(kind, 1)
    }

    /// Report that `id` was consumed outside this counter, e.g. a record
    /// written by another process into a shared store.
    fn observe(&self, kind: RecordKind, id: u64) -> Result<()>;
}
