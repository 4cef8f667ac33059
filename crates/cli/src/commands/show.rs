//! Read persisted battle and tournament records.

use anyhow::Result;
use clap::Parser;

use super::{OutputFormat, print_json};
use crate::session::Session;

/// Print a persisted battle record
#[derive(Parser)]
pub struct ShowBattle {
    #[arg(value_name = "BATTLE_ID")]
    battle_id: u64,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl ShowBattle {
    pub fn execute(self, session: &Session) -> Result<()> {
        let record = session.manager.battle(self.battle_id)?;
        match self.format {
            OutputFormat::Json => print_json(&record),
            OutputFormat::Summary => {
                println!("Battle {}", record.battle_id);
                if let Some(seed) = record.seed {
                    println!("Seed: {seed}");
                }
                for event in &record.events {
                    println!("  {event}");
                }
                Ok(())
            }
        }
    }
}

/// Print a persisted tournament record
#[derive(Parser)]
pub struct ShowTournament {
    #[arg(value_name = "TOURNAMENT_ID")]
    tournament_id: u64,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

impl ShowTournament {
    pub fn execute(self, session: &Session) -> Result<()> {
        let record = session.manager.tournament(self.tournament_id)?;
        match self.format {
            OutputFormat::Json => print_json(&record),
            OutputFormat::Summary => {
                println!(
                    "Tournament {}: {} entrants, {} rounds, won by {}",
                    record.tournament_id,
                    record.participants.len(),
                    record.events.len(),
                    record.winner
                );
                Ok(())
            }
        }
    }
}
