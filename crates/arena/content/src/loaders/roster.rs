//! Combatant roster loader.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::definition::CombatantDefinition;
use crate::loaders::{LoadResult, read_file};

/// TOML roster layout: one `[[combatant]]` table per entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlRoster {
    #[serde(rename = "combatant", default)]
    pub combatants: Vec<CombatantDefinition>,
}

/// Loader for combatant rosters from RON or TOML files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load a roster, picking the format from the file extension.
    ///
    /// Every definition is validated and names must be unique.
    pub fn load(path: &Path) -> LoadResult<Vec<CombatantDefinition>> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("ron") => Self::load_ron(path),
            Some("toml") => Self::load_toml(path),
            _ => Err(anyhow::anyhow!(
                "Unsupported roster format {} (expected .ron or .toml)",
                path.display()
            )),
        }
    }

    /// Load a roster from a RON file.
    ///
    /// RON format: Vec<CombatantDefinition>
    pub fn load_ron(path: &Path) -> LoadResult<Vec<CombatantDefinition>> {
        let content = read_file(path)?;
        Self::parse_ron(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load roster {}: {}", path.display(), e))
    }

    /// Load a roster from a TOML file.
    pub fn load_toml(path: &Path) -> LoadResult<Vec<CombatantDefinition>> {
        let content = read_file(path)?;
        Self::parse_toml(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load roster {}: {}", path.display(), e))
    }

    pub fn parse_ron(content: &str) -> LoadResult<Vec<CombatantDefinition>> {
        let definitions: Vec<CombatantDefinition> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;
        check(definitions)
    }

    pub fn parse_toml(content: &str) -> LoadResult<Vec<CombatantDefinition>> {
        let roster: TomlRoster = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster TOML: {}", e))?;
        check(roster.combatants)
    }
}

fn check(definitions: Vec<CombatantDefinition>) -> LoadResult<Vec<CombatantDefinition>> {
    let mut seen = HashSet::with_capacity(definitions.len());
    for definition in &definitions {
        definition.validate()?;
        if !seen.insert(definition.name.as_str()) {
            anyhow::bail!("Duplicate combatant {} in roster", definition.name);
        }
    }
    Ok(definitions)
}

/// The twelve starter combatants bundled with the crate.
pub fn starter_roster() -> LoadResult<Vec<CombatantDefinition>> {
    let starters = include_str!("../../data/starters.ron");
    RosterLoader::parse_ron(starters)
        .map_err(|e| anyhow::anyhow!("Failed to parse starters.ron: {}", e))
}
