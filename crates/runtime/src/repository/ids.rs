//! Id counter implementations.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use super::error::Result;
use super::traits::{IdCounter, ResultStore};
use super::types::RecordKind;

/// Derives the next id from the number of stored records.
///
/// Two requests that read the count before either writes receive the same
/// id, and a reserved block is not held: anything created before the block
/// is stored reuses its ids. Only correct with a single writer running one
/// request at a time.
pub struct StoreCountIds {
    results: Arc<dyn ResultStore>,
}

impl StoreCountIds {
    pub fn new(results: Arc<dyn ResultStore>) -> Self {
        Self { results }
    }
}

impl IdCounter for StoreCountIds {
    fn reserve(&self, kind: RecordKind, _count: u64) -> Result<u64> {
        Ok(self.results.count(kind)? + 1)
    }

    fn observe(&self, _kind: RecordKind, _id: u64) -> Result<()> {
        Ok(())
    }
}

/// Per-kind atomic counters. Every reservation takes a fresh block, so no
/// two requests share an id; ids taken by requests that never store a
/// record leave gaps.
#[derive(Debug)]
pub struct AtomicIds {
    battle: AtomicU64,
    tournament: AtomicU64,
}

impl AtomicIds {
    /// Counters starting at 1 for both kinds.
    pub fn new() -> Self {
        Self {
            battle: AtomicU64::new(1),
            tournament: AtomicU64::new(1),
        }
    }

    /// Counters resuming after the highest id already in `results`.
    pub fn primed(results: &dyn ResultStore) -> Result<Self> {
        let ids = Self::new();
        for kind in RecordKind::ALL {
            let highest = results
                .list(kind)?
                .iter()
                .map(|record| record.key())
                .max()
                .unwrap_or(0);
            let count = results.count(kind)?;
            ids.counter(kind).store(highest.max(count) + 1, Ordering::SeqCst);
        }
        Ok(ids)
    }

    fn counter(&self, kind: RecordKind) -> &AtomicU64 {
        match kind {
            RecordKind::Battle => &self.battle,
            RecordKind::Tournament => &self.tournament,
        }
    }
}

impl Default for AtomicIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdCounter for AtomicIds {
    fn reserve(&self, kind: RecordKind, count: u64) -> Result<u64> {
        Ok(self.counter(kind).fetch_add(count.max(1), Ordering::SeqCst))
    }

    fn observe(&self, kind: RecordKind, id: u64) -> Result<()> {
        self.counter(kind)
            .fetch_max(id.saturating_add(1), Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use arena_core::BattleRecord;

    use super::*;
    use crate::repository::{InMemoryResultStore, ResultRecord};

    fn battle(id: u64) -> ResultRecord {
        ResultRecord::Battle(BattleRecord {
            battle_id: id,
            events: Vec::new(),
            participant_a: "A".to_owned(),
            participant_b: "B".to_owned(),
            seed: Some(id),
        })
    }

    #[test]
    fn test_count_ids_follow_store() {
        let store = Arc::new(InMemoryResultStore::new());
        let ids = StoreCountIds::new(store.clone());

        assert_eq!(ids.next_id(RecordKind::Battle).unwrap(), 1);
        // nothing stored yet, so the same id comes back
        assert_eq!(ids.next_id(RecordKind::Battle).unwrap(), 1);

        store.insert(&battle(1)).unwrap();
        assert_eq!(ids.next_id(RecordKind::Battle).unwrap(), 2);
        assert_eq!(ids.next_id(RecordKind::Tournament).unwrap(), 1);
    }

    #[test]
    fn test_atomic_ids_never_repeat() {
        let ids = AtomicIds::new();
        assert_eq!(ids.next_id(RecordKind::Battle).unwrap(), 1);
        assert_eq!(ids.next_id(RecordKind::Battle).unwrap(), 2);
        assert_eq!(ids.next_id(RecordKind::Tournament).unwrap(), 1);

        ids.observe(RecordKind::Battle, 9).unwrap();
        assert_eq!(ids.next_id(RecordKind::Battle).unwrap(), 10);

        // observing an older id does not move the counter back
        ids.observe(RecordKind::Battle, 4).unwrap();
        assert_eq!(ids.next_id(RecordKind::Battle).unwrap(), 11);
    }

    #[test]
    fn test_atomic_reserve_holds_whole_block() {
        let ids = AtomicIds::new();
        assert_eq!(ids.reserve(RecordKind::Battle, 4).unwrap(), 1);
        assert_eq!(ids.next_id(RecordKind::Battle).unwrap(), 5);

        // an empty block still hands out one id
        assert_eq!(ids.reserve(RecordKind::Battle, 0).unwrap(), 6);
        assert_eq!(ids.next_id(RecordKind::Battle).unwrap(), 7);

        // observing ids inside an earlier block changes nothing
        ids.observe(RecordKind::Battle, 3).unwrap();
        assert_eq!(ids.next_id(RecordKind::Battle).unwrap(), 8);
    }

    #[test]
    fn test_atomic_ids_primed_from_store() {
        let store = InMemoryResultStore::new();
        store.insert(&battle(1)).unwrap();
        store.insert(&battle(7)).unwrap();

        let ids = AtomicIds::primed(&store).unwrap();
        assert_eq!(ids.next_id(RecordKind::Battle).unwrap(), 8);
        assert_eq!(ids.next_id(RecordKind::Tournament).unwrap(), 1);
    }

    #[test]
    fn test_atomic_ids_across_threads() {
        let ids = Arc::new(AtomicIds::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let ids = ids.clone();
                std::thread::spawn(move || {
                    (0..25)
                        .map(|_| ids.next_id(RecordKind::Battle).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut all: Vec<u64> = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect();
        all.sort_unstable();
        assert_eq!(all, (1..=100).collect::<Vec<_>>());
    }
}
