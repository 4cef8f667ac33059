//! Results handed back to callers after a run.
use arena_core::{BattleRecord, RoundRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleReport {
    pub battle_id: u64,
    pub winner: String,
    pub loser: String,
    pub events: Vec<String>,
    pub seed: Option<u64>,
}

impl BattleReport {
    pub(crate) fn new(record: BattleRecord, winner: String, loser: String) -> Self {
        Self {
            battle_id: record.battle_id,
            winner,
            loser,
            events: record.events,
            seed: record.seed,
        }
    }
}

/// Outcome of a tournament request.
///
/// A rejected field yields `winner: None` and the reason, with no rounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentReport {
    pub tournament_id: u64,
    pub winner: Option<String>,
    pub rounds: Vec<RoundRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection: Option<String>,
}

impl TournamentReport {
    pub fn terminated_early(&self) -> bool {
        self.winner.is_none()
    }
}
