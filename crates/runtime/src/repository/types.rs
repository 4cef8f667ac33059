//! Shared types for the repository layer.

use std::fmt;

use arena_core::{BattleRecord, TournamentRecord};
use serde::{Deserialize, Serialize};

/// Which collection a stored result belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Battle,
    Tournament,
}

impl RecordKind {
    pub const ALL: [RecordKind; 2] = [RecordKind::Battle, RecordKind::Tournament];

    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Battle => "battle",
            RecordKind::Tournament => "tournament",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A finished battle or tournament, keyed by its id within its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultRecord {
    Battle(BattleRecord),
    Tournament(TournamentRecord),
}

impl ResultRecord {
    pub fn kind(&self) -> RecordKind {
        match self {
            ResultRecord::Battle(_) => RecordKind::Battle,
            ResultRecord::Tournament(_) => RecordKind::Tournament,
        }
    }

    pub fn key(&self) -> u64 {
        match self {
            ResultRecord::Battle(record) => record.battle_id,
            ResultRecord::Tournament(record) => record.tournament_id,
        }
    }

    pub fn into_battle(self) -> Option<BattleRecord> {
        match self {
            ResultRecord::Battle(record) => Some(record),
            ResultRecord::Tournament(_) => None,
        }
    }

    pub fn into_tournament(self) -> Option<TournamentRecord> {
        match self {
            ResultRecord::Tournament(record) => Some(record),
            ResultRecord::Battle(_) => None,
        }
    }
}

impl From<BattleRecord> for ResultRecord {
    fn from(record: BattleRecord) -> Self {
        ResultRecord::Battle(record)
    }
}

impl From<TournamentRecord> for ResultRecord {
    fn from(record: TournamentRecord) -> Self {
        ResultRecord::Tournament(record)
    }
}
