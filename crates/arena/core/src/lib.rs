//! Deterministic combat rules shared by the runtime and offline tools.
//!
//! `arena-core` defines the canonical simulation: the skill model, combatants
//! and their stance-driven decision policy, the two-party [`Battle`] engine and
//! the single-elimination [`Tournament`] bracket. Every random decision is
//! drawn from an explicit [`PcgStream`], so a fixed seed and fixed combatant
//! definitions always reproduce the same events and outcome.
pub mod battle;
pub mod combatant;
pub mod config;
pub mod error;
pub mod rng;
pub mod skill;
pub mod tournament;

pub use battle::{Battle, BattleOutcome, BattlePhase, BattleRecord, CombatError, Side};
pub use combatant::{
    CombatRecord, Combatant, DamageReport, InvalidReason, Mitigation, Stance, apply_damage,
    mitigate,
};
pub use config::ArenaConfig;
pub use error::{ArenaError, ErrorSeverity};
pub use rng::{PcgStream, entropy_seed};
pub use skill::{Skill, SkillKind};
pub use tournament::{BattleSummary, RoundRecord, Tournament, TournamentError, TournamentRecord};
