//! In-memory result store.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::repository::{RecordKind, RepositoryError, Result, ResultRecord, ResultStore};

#[derive(Default)]
pub struct InMemoryResultStore {
    records: RwLock<BTreeMap<(RecordKind, u64), ResultRecord>>,
}

impl InMemoryResultStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultStore for InMemoryResultStore {
    fn insert(&self, record: &ResultRecord) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        let slot = (record.kind(), record.key());
        if records.contains_key(&slot) {
            return Err(RepositoryError::DuplicateKey {
                kind: slot.0,
                key: slot.1,
            });
        }
        records.insert(slot, record.clone());
        Ok(())
    }

    fn update(&self, record: &ResultRecord) -> Result<bool> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        match records.get_mut(&(record.kind(), record.key())) {
            Some(existing) => {
                *existing = record.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn get(&self, kind: RecordKind, key: u64) -> Result<Option<ResultRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        Ok(records.get(&(kind, key)).cloned())
    }

    fn count(&self, kind: RecordKind) -> Result<u64> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        Ok(records.keys().filter(|(k, _)| *k == kind).count() as u64)
    }

    fn list(&self, kind: RecordKind) -> Result<Vec<ResultRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        Ok(records
            .range((kind, 0)..=(kind, u64::MAX))
            .map(|(_, record)| record.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use arena_core::{BattleRecord, TournamentRecord};

    use super::*;
    use crate::repository::{AdminLog, InMemoryAdminLog};

    fn battle(id: u64, events: &[&str]) -> ResultRecord {
        ResultRecord::Battle(BattleRecord {
            battle_id: id,
            events: events.iter().map(|e| e.to_string()).collect(),
            participant_a: "Mew".to_owned(),
            participant_b: "Abra".to_owned(),
            seed: None,
        })
    }

    #[test]
    fn test_insert_rejects_duplicates() {
        let store = InMemoryResultStore::new();
        store.insert(&battle(1, &[])).unwrap();

        let err = store.insert(&battle(1, &["again"])).unwrap_err();
        assert!(matches!(
            err,
            RepositoryError::DuplicateKey {
                kind: RecordKind::Battle,
                key: 1
            }
        ));
    }

    #[test]
    fn test_kinds_do_not_collide() {
        let store = InMemoryResultStore::new();
        store.insert(&battle(1, &[])).unwrap();
        store
            .insert(&ResultRecord::Tournament(TournamentRecord {
                tournament_id: 1,
                participants: Vec::new(),
                events: Vec::new(),
                winner: "Mew".to_owned(),
            }))
            .unwrap();

        assert_eq!(store.count(RecordKind::Battle).unwrap(), 1);
        assert_eq!(store.count(RecordKind::Tournament).unwrap(), 1);
    }

    #[test]
    fn test_list_is_sorted_by_key() {
        let store = InMemoryResultStore::new();
        for id in [5, 2, 9] {
            store.insert(&battle(id, &[])).unwrap();
        }
        let keys: Vec<u64> = store
            .list(RecordKind::Battle)
            .unwrap()
            .iter()
            .map(ResultRecord::key)
            .collect();
        assert_eq!(keys, vec![2, 5, 9]);
    }

    #[test]
    fn test_upsert_updates_existing() {
        let store = InMemoryResultStore::new();
        let admin = InMemoryAdminLog::new();

        store.upsert(&battle(4, &["first"]), &admin).unwrap();
        store.upsert(&battle(4, &["second"]), &admin).unwrap();

        let stored = store.get(RecordKind::Battle, 4).unwrap().unwrap();
        assert_eq!(stored, battle(4, &["second"]));
        assert!(admin.entries().unwrap().is_empty());
    }
}
