//! Error types raised by the bracket orchestrator.

use crate::battle::CombatError;
use crate::error::{ArenaError, ErrorSeverity};

/// Errors surfaced by [`Tournament::run`](super::Tournament::run).
///
/// The first three variants reject the field before any battle runs; callers
/// report them as a tournament that terminated early with no winner.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TournamentError {
    #[error("invalid tournament: needs at least {required} entrants, got {entrants}")]
    TooFewEntrants { entrants: usize, required: usize },

    #[error("invalid tournament: {name} is entered more than once")]
    DuplicateEntrant { name: String },

    #[error("invalid tournament: {0}")]
    InvalidEntrant(#[source] CombatError),

    #[error("tournament battle failed: {0}")]
    Battle(#[from] CombatError),
}

impl TournamentError {
    /// True for the variants that reject the field up front.
    pub const fn is_invalid_tournament(&self) -> bool {
        matches!(
            self,
            Self::TooFewEntrants { .. } | Self::DuplicateEntrant { .. } | Self::InvalidEntrant(_)
        )
    }
}

impl ArenaError for TournamentError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Battle(inner) => inner.severity(),
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Battle(inner) => inner.error_code(),
            _ => "INVALID_TOURNAMENT",
        }
    }
}
