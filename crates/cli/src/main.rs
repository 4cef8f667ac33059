//! Command-line front end for the arena.
//!
//! Every invocation builds a [`BattleManager`] from the environment (plus any
//! flag overrides), installs the roster and runs one command against it.
//!
//! # Usage
//!
//! ```bash
//! arena battle Pikachu Charmander --seed 42
//! arena tournament Pikachu Charmander Squirtle Bulbasaur Snorlax --seed 7
//! arena --role admin logs
//! ```
//!
//! [`BattleManager`]: arena_runtime::BattleManager

mod commands;
mod logging;
mod session;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{Battle, Logs, Roster, ShowBattle, ShowTournament, Tournament};
use session::{Session, SessionArgs};

/// Deterministic combat arena
#[derive(Parser)]
#[command(name = "arena")]
#[command(about = "Run seeded battles and tournaments", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    session: SessionArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a battle between two stored combatants
    Battle(Battle),

    /// Run a single-elimination tournament
    Tournament(Tournament),

    /// List stored combatants or install a roster file
    Roster(Roster),

    /// Print a persisted battle record
    ShowBattle(ShowBattle),

    /// Print a persisted tournament record
    ShowTournament(ShowTournament),

    /// Print the admin log (administrators only)
    Logs(Logs),
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::setup_logging(cli.session.log_dir.as_deref())?;

    let session = Session::open(cli.session)?;

    match cli.command {
        Command::Battle(cmd) => cmd.execute(&session),
        Command::Tournament(cmd) => cmd.execute(&session),
        Command::Roster(cmd) => cmd.execute(&session),
        Command::ShowBattle(cmd) => cmd.execute(&session),
        Command::ShowTournament(cmd) => cmd.execute(&session),
        Command::Logs(cmd) => cmd.execute(&session),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_runtime::Role;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn role_flag_is_global() {
        let cli = Cli::try_parse_from(["arena", "logs", "--role", "admin"]).unwrap();
        assert_eq!(cli.session.role, Role::Administrator);
        assert!(matches!(cli.command, Command::Logs(_)));
    }

    #[test]
    fn tournament_takes_entrants_and_seed() {
        let cli = Cli::try_parse_from([
            "arena", "tournament", "Pikachu", "Charmander", "Squirtle", "Bulbasaur", "--seed", "7",
        ])
        .unwrap();
        let Command::Tournament(_) = cli.command else {
            panic!("expected tournament command");
        };
        assert!(Cli::try_parse_from(["arena", "tournament"]).is_err());
    }
}
