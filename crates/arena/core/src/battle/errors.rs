//! Error types raised by the battle engine.

use crate::combatant::InvalidReason;
use crate::error::{ArenaError, ErrorSeverity};
use crate::skill::SkillKind;

/// Errors surfaced while building or running a battle.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    /// A combatant was asked for a skill of a kind it does not carry.
    #[error("{combatant} has no {kind} skills to choose from")]
    EmptySkillPool { combatant: String, kind: SkillKind },

    /// A combatant failed validation before the battle loop started.
    #[error("combatant {name} is invalid: {reason}")]
    InvalidCombatant { name: String, reason: InvalidReason },
}

impl ArenaError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            // Battles validate their pools up front, so an empty pool mid-run
            // means that check was bypassed.
            Self::EmptySkillPool { .. } => ErrorSeverity::Internal,
            Self::InvalidCombatant { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptySkillPool { .. } => "EMPTY_SKILL_POOL",
            Self::InvalidCombatant { .. } => "INVALID_COMBATANT",
        }
    }
}
