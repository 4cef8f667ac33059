//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from definitions, the combat core and repositories so
//! clients can bubble them up with consistent context.
use arena_content::DefinitionError;
use arena_core::{ArenaError, CombatError, ErrorSeverity};
use thiserror::Error;

use super::access::{Capability, Role};
pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("invalid combatant definition: {0}")]
    InvalidCombatant(#[from] DefinitionError),

    #[error(transparent)]
    Combat(#[from] CombatError),

    #[error("{kind} {key} not found")]
    NotFound { kind: &'static str, key: String },

    #[error("{role} role may not {capability}")]
    Forbidden { role: Role, capability: Capability },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl RuntimeError {
    pub(crate) fn not_found(kind: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            kind,
            key: key.to_string(),
        }
    }
}

impl ArenaError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::InvalidCombatant(_)
            | RuntimeError::NotFound { .. }
            | RuntimeError::Forbidden { .. } => ErrorSeverity::Validation,
            RuntimeError::Combat(err) => err.severity(),
            RuntimeError::Repository(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::InvalidCombatant(_) => "INVALID_COMBATANT",
            RuntimeError::Combat(err) => err.error_code(),
            RuntimeError::NotFound { .. } => "NOT_FOUND",
            RuntimeError::Forbidden { .. } => "FORBIDDEN",
            RuntimeError::Repository(_) => "REPOSITORY",
        }
    }
}
