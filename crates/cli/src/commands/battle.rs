//! Run one battle between two stored combatants.

use anyhow::Result;
use arena_runtime::Capability;
use clap::Parser;

use super::{OutputFormat, print_json};
use crate::session::Session;

/// Run a battle between two stored combatants
#[derive(Parser)]
pub struct Battle {
    /// First combatant (takes the first turn)
    #[arg(value_name = "A")]
    a: String,

    /// Second combatant
    #[arg(value_name = "B")]
    b: String,

    /// Seed for this battle only
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Battle {
    pub fn execute(self, session: &Session) -> Result<()> {
        session.role.require(Capability::RunBattles)?;

        let battle = session.manager.create_battle(&self.a, &self.b, self.seed)?;
        let report = session.manager.start_battle(battle)?;

        match self.format {
            OutputFormat::Json => print_json(&report),
            OutputFormat::Summary => {
                for event in &report.events {
                    println!("{event}");
                }
                println!();
                println!(
                    "Battle {}: {} defeated {}",
                    report.battle_id, report.winner, report.loser
                );
                Ok(())
            }
        }
    }
}
