//! File-based ResultStore implementation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::repository::file::write_atomic;
use crate::repository::{RecordKind, RepositoryError, Result, ResultRecord, ResultStore};

/// One pretty-printed JSON file per record, named `{kind}_{key}.json`.
pub struct FileResultStore {
    base_dir: PathBuf,
}

impl FileResultStore {
    /// Create a store rooted at `base_dir`, creating the directory if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn record_path(&self, kind: RecordKind, key: u64) -> PathBuf {
        self.base_dir.join(format!("{kind}_{key}.json"))
    }

    fn write(&self, record: &ResultRecord) -> Result<()> {
        let path = self.record_path(record.kind(), record.key());
        let json = serde_json::to_string_pretty(record)?;
        write_atomic(&path, &json)?;

        tracing::debug!("Saved {} record: {}", record.kind(), path.display());
        Ok(())
    }

    /// Keys of every stored record of `kind`, ascending.
    fn keys(&self, kind: RecordKind) -> Result<Vec<u64>> {
        let prefix = format!("{kind}_");
        let mut keys = Vec::new();

        for entry in fs::read_dir(&self.base_dir)? {
            let path = entry?.path();

            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(key) = filename
                    .strip_prefix(&prefix)
                    .and_then(|s| s.strip_suffix(".json"))
                    .and_then(|s| s.parse::<u64>().ok())
            {
                keys.push(key);
            }
        }

        keys.sort_unstable();
        Ok(keys)
    }
}

impl ResultStore for FileResultStore {
    fn insert(&self, record: &ResultRecord) -> Result<()> {
        if self.record_path(record.kind(), record.key()).exists() {
            return Err(RepositoryError::DuplicateKey {
                kind: record.kind(),
                key: record.key(),
            });
        }
        self.write(record)
    }

    fn update(&self, record: &ResultRecord) -> Result<bool> {
        if !self.record_path(record.kind(), record.key()).exists() {
            return Ok(false);
        }
        self.write(record)?;
        Ok(true)
    }

    fn get(&self, kind: RecordKind, key: u64) -> Result<Option<ResultRecord>> {
        let path = self.record_path(kind, key);

        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&path)?;
        let record: ResultRecord = serde_json::from_str(&json)?;
        Ok(Some(record))
    }

    fn count(&self, kind: RecordKind) -> Result<u64> {
        Ok(self.keys(kind)?.len() as u64)
    }

    fn list(&self, kind: RecordKind) -> Result<Vec<ResultRecord>> {
        let mut records = Vec::new();
        for key in self.keys(kind)? {
            if let Some(record) = self.get(kind, key)? {
                records.push(record);
            }
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use arena_core::BattleRecord;

    use super::*;

    fn battle(id: u64) -> ResultRecord {
        ResultRecord::Battle(BattleRecord {
            battle_id: id,
            events: vec!["Welcome to the thunderdome!".to_owned()],
            participant_a: "Geodude".to_owned(),
            participant_b: "Lapras".to_owned(),
            seed: Some(11),
        })
    }

    #[test]
    fn test_records_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = FileResultStore::new(dir.path()).unwrap();
            store.insert(&battle(2)).unwrap();
            store.insert(&battle(10)).unwrap();
        }

        let store = FileResultStore::new(dir.path()).unwrap();
        assert_eq!(store.count(RecordKind::Battle).unwrap(), 2);
        assert_eq!(store.count(RecordKind::Tournament).unwrap(), 0);
        assert_eq!(store.get(RecordKind::Battle, 10).unwrap(), Some(battle(10)));

        // numeric order, not lexical
        let keys: Vec<u64> = store
            .list(RecordKind::Battle)
            .unwrap()
            .iter()
            .map(ResultRecord::key)
            .collect();
        assert_eq!(keys, vec![2, 10]);
    }

    #[test]
    fn test_insert_and_update_semantics() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileResultStore::new(dir.path()).unwrap();

        assert!(!store.update(&battle(1)).unwrap());
        store.insert(&battle(1)).unwrap();
        assert!(matches!(
            store.insert(&battle(1)),
            Err(RepositoryError::DuplicateKey { key: 1, .. })
        ));
        assert!(store.update(&battle(1)).unwrap());
        assert!(!dir.path().join("battle_1.json.tmp").exists());
    }
}
