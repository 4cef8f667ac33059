//! Common error infrastructure for arena-core.
//!
//! Domain errors ([`CombatError`](crate::CombatError),
//! [`TournamentError`](crate::TournamentError)) live next to the code that
//! raises them. This module holds the classification shared by all of them.

/// Severity level of an error, used by callers to decide how to surface it.
///
/// - **Validation**: bad input, rejected before any state changes
/// - **Internal**: an invariant the core guarantees was broken
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not be retried without changes.
    ///
    /// Examples: combatant without defense skills, three-entrant bracket
    Validation,

    /// Unexpected state inconsistency. These indicate bugs.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all arena-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by whether the caller caused it, not by impact
pub trait ArenaError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a stable identifier for this error variant.
    ///
    /// Used in admin-log lines and tests; the default is the type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
