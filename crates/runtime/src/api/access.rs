//! Roles and the capability table checked at the API boundary.
//!
//! Authentication and sessions live outside this crate; callers resolve a
//! [`Role`] first and ask it for each capability they exercise.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::{Result, RuntimeError};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Operator,
    Administrator,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    RunBattles,
    RunTournaments,
    ManageCombatants,
    ManageSeed,
    ViewAdminLogs,
}

impl Role {
    pub fn capabilities(self) -> &'static [Capability] {
        use Capability::*;
        match self {
            Role::Operator => &[RunBattles, RunTournaments, ManageCombatants, ManageSeed],
            Role::Administrator => &[
                RunBattles,
                RunTournaments,
                ManageCombatants,
                ManageSeed,
                ViewAdminLogs,
            ],
        }
    }

    pub fn can(self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }

    pub fn require(self, capability: Capability) -> Result<()> {
        if self.can(capability) {
            Ok(())
        } else {
            Err(RuntimeError::Forbidden {
                role: self,
                capability,
            })
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Operator => "operator",
            Role::Administrator => "administrator",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "operator" => Ok(Role::Operator),
            "administrator" | "admin" => Ok(Role::Administrator),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Capability::RunBattles => "run battles",
            Capability::RunTournaments => "run tournaments",
            Capability::ManageCombatants => "manage combatants",
            Capability::ManageSeed => "manage the seed",
            Capability::ViewAdminLogs => "view admin logs",
        };
        write!(f, "{}", label)
    }
}
