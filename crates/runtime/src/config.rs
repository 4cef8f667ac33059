//! Runtime configuration read from the environment.
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// How the manager hands out battle and tournament ids.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum IdStrategy {
    /// Per-kind atomic counters primed from the result store.
    #[default]
    Atomic,
    /// Stored record count plus one. Collides under concurrent writers.
    StoreCount,
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "atomic" => Ok(IdStrategy::Atomic),
            "count" | "store_count" => Ok(IdStrategy::StoreCount),
            other => Err(format!("unknown id strategy: {other}")),
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IdStrategy::Atomic => "atomic",
            IdStrategy::StoreCount => "count",
        };
        write!(f, "{}", label)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Global seed inherited by every battle and tournament.
    pub seed: Option<u64>,
    /// Directory for the file-backed stores; in-memory stores when unset.
    pub data_dir: Option<PathBuf>,
    /// Roster file installed on startup; the starter roster when unset.
    pub roster: Option<PathBuf>,
    pub id_strategy: IdStrategy,
}

impl RuntimeConfig {
    /// Construct runtime configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_SEED` - Global seed (default: none, entropy-seeded)
    /// - `ARENA_DATA_DIR` - Directory for persisted records (default: in memory)
    /// - `ARENA_ROSTER` - RON or TOML roster file (default: starter roster)
    /// - `ARENA_ID_STRATEGY` - `atomic` or `count` (default: atomic)
    ///
    /// Values that fail to parse are ignored.
    pub fn from_env() -> Self {
        Self {
            seed: read_env::<u64>("ARENA_SEED"),
            data_dir: read_env::<PathBuf>("ARENA_DATA_DIR"),
            roster: read_env::<PathBuf>("ARENA_ROSTER"),
            id_strategy: read_env::<IdStrategy>("ARENA_ID_STRATEGY").unwrap_or_default(),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    let value = env::var(key).ok()?;
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse().ok()
}
