//! Run a single-elimination tournament over stored combatants.

use anyhow::Result;
use arena_runtime::Capability;
use clap::Parser;

use super::{OutputFormat, print_json};
use crate::session::Session;

/// Run a single-elimination tournament
#[derive(Parser)]
pub struct Tournament {
    /// Entrants in bracket order (at least four)
    #[arg(value_name = "NAME", required = true)]
    entrants: Vec<String>,

    /// Seed for this tournament only
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Tournament {
    pub fn execute(self, session: &Session) -> Result<()> {
        session.role.require(Capability::RunTournaments)?;

        let tournament = session
            .manager
            .create_tournament(self.entrants.as_slice(), self.seed)?;
        let report = session.manager.start_tournament(tournament)?;

        if let OutputFormat::Json = self.format {
            return print_json(&report);
        }

        println!("Tournament {}", report.tournament_id);
        for round in &report.rounds {
            println!("Round {}", round.round);
            if let Some(bye) = &round.bye {
                println!("  bye: {bye}");
            }
            for battle in &round.battles {
                println!(
                    "  battle {}: {} defeated {}",
                    battle.battle_id, battle.winner, battle.loser
                );
            }
        }

        match (&report.winner, &report.rejection) {
            (Some(winner), _) => println!("Champion: {winner}"),
            (None, Some(reason)) => println!("Tournament rejected: {reason}"),
            (None, None) => println!("Tournament ended without a champion"),
        }
        Ok(())
    }
}
