//! Command implementations for the arena CLI
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod battle;
mod logs;
mod roster;
mod show;
mod tournament;

pub use battle::Battle;
pub use logs::Logs;
pub use roster::Roster;
pub use show::{ShowBattle, ShowTournament};
pub use tournament::Tournament;

use anyhow::Result;
use serde::Serialize;

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Summary,
    /// Full JSON output
    Json,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
