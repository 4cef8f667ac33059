/// Persisted form of a finished battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleRecord {
    pub battle_id: u64,
    pub events: Vec<String>,
    pub participant_a: String,
    pub participant_b: String,
    /// Battle seed; `None` when the streams were entropy-seeded.
    pub seed: Option<u64>,
}
