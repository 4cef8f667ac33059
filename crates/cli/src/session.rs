//! Per-invocation state shared by every command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use arena_content::{RosterLoader, starter_roster};
use arena_runtime::{BattleManager, Capability, IdStrategy, Role, RuntimeConfig};
use clap::Args;

/// Flags that override the `ARENA_*` environment.
#[derive(Args)]
pub struct SessionArgs {
    /// Role the command runs as (operator or administrator)
    #[arg(long, global = true, env = "ARENA_ROLE", default_value = "operator")]
    pub role: Role,

    /// Global seed for this invocation (overrides ARENA_SEED)
    #[arg(long = "global-seed", global = true, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Directory for persisted records (overrides ARENA_DATA_DIR)
    #[arg(short, long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Roster file to install on startup (overrides ARENA_ROSTER)
    #[arg(long, global = true, value_name = "FILE")]
    pub roster: Option<PathBuf>,

    /// Id allocation strategy: atomic or count (overrides ARENA_ID_STRATEGY)
    #[arg(long, global = true, value_name = "STRATEGY")]
    pub id_strategy: Option<IdStrategy>,

    /// Also write logs to DIR/arena.log
    #[arg(long, global = true, env = "ARENA_LOG_DIR", value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

pub struct Session {
    pub manager: BattleManager,
    pub role: Role,
}

impl Session {
    /// Builds the manager and installs the configured roster.
    pub fn open(args: SessionArgs) -> Result<Self> {
        let env = RuntimeConfig::from_env();
        let config = RuntimeConfig {
            seed: env.seed,
            data_dir: args.data_dir.or(env.data_dir),
            roster: args.roster.or(env.roster),
            id_strategy: args.id_strategy.unwrap_or(env.id_strategy),
        };

        let mut manager =
            BattleManager::from_config(&config).context("Failed to open arena stores")?;

        if let Some(seed) = args.seed {
            args.role.require(Capability::ManageSeed)?;
            manager.set_seed(Some(seed));
        }

        let definitions = match &config.roster {
            Some(path) => RosterLoader::load(path)?,
            None => starter_roster()?,
        };
        let installed = manager.install_roster(definitions)?;
        if installed > 0 {
            tracing::info!("Installed {} combatants", installed);
        }

        Ok(Self {
            manager,
            role: args.role,
        })
    }
}
