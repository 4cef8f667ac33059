/// One battle inside a bracket round.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleSummary {
    pub battle_id: u64,
    pub winner: String,
    pub loser: String,
}

/// Everything that happened in one round.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundRecord {
    /// 1-based round number.
    pub round: u32,
    pub battles: Vec<BattleSummary>,
    /// Combatant that advanced without battling, on odd-sized rounds.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub bye: Option<String>,
}

/// Persisted form of a finished tournament.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TournamentRecord {
    pub tournament_id: u64,
    pub participants: Vec<String>,
    pub events: Vec<RoundRecord>,
    pub winner: String,
}

impl TournamentRecord {
    /// Battle ids referenced by the rounds, in order.
    pub fn battle_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.events
            .iter()
            .flat_map(|round| round.battles.iter().map(|battle| battle.battle_id))
    }
}
