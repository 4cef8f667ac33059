//! List stored combatants or install additional ones from a roster file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use arena_content::RosterLoader;
use arena_runtime::Capability;
use clap::Parser;

use super::{OutputFormat, print_json};
use crate::session::Session;

/// List stored combatants or install a roster file
#[derive(Parser)]
pub struct Roster {
    /// RON or TOML roster to install before listing
    #[arg(short, long, value_name = "FILE")]
    install: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Roster {
    pub fn execute(self, session: &Session) -> Result<()> {
        if let Some(path) = &self.install {
            session.role.require(Capability::ManageCombatants)?;
            let definitions = RosterLoader::load(path)
                .with_context(|| format!("Failed to load roster {}", path.display()))?;
            let installed = session.manager.install_roster(definitions)?;
            println!("Installed {installed} combatants from {}", path.display());
        }

        let combatants = session.manager.combatants()?;
        match self.format {
            OutputFormat::Json => print_json(&combatants),
            OutputFormat::Summary => {
                for definition in &combatants {
                    let record = &definition.record;
                    println!(
                        "{:<12} hp {:>3}  battles {}-{}  tournaments {}-{}",
                        definition.name,
                        definition.max_hp,
                        record.battle_wins,
                        record.battle_losses,
                        record.tournament_wins,
                        record.tournament_losses,
                    );
                }
                Ok(())
            }
        }
    }
}
