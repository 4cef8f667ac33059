//! Request facade over the combat core.
//!
//! [`BattleManager`] resolves combatants by name, hands out ids, applies the
//! global or per-request seed, runs battles and tournaments to completion and
//! persists what they produce. It is synchronous: each call runs to the end
//! before returning.

use std::sync::Arc;

use arena_content::CombatantDefinition;
use arena_core::{Battle, BattleRecord, Combatant, Tournament, TournamentError, TournamentRecord};

use crate::api::{BattleReport, Capability, Result, Role, RuntimeError, TournamentReport};
use crate::config::{IdStrategy, RuntimeConfig};
use crate::repository::{
    AdminLog, AtomicIds, CombatantStore, FileAdminLog, FileCombatantStore, FileResultStore,
    IdCounter, InMemoryAdminLog, InMemoryCombatantStore, InMemoryResultStore, RecordKind,
    ResultRecord, ResultStore, StoreCountIds,
};

pub struct BattleManager {
    combatants: Arc<dyn CombatantStore>,
    results: Arc<dyn ResultStore>,
    admin: Arc<dyn AdminLog>,
    ids: Arc<dyn IdCounter>,
    seed: Option<u64>,
}

impl BattleManager {
    /// Create a new manager builder
    pub fn builder() -> BattleManagerBuilder {
        BattleManagerBuilder::new()
    }

    /// Build a manager from runtime configuration.
    ///
    /// With a data directory every store is file-backed; otherwise all of
    /// them live in memory.
    pub fn from_config(config: &RuntimeConfig) -> Result<Self> {
        let mut builder = Self::builder()
            .seed(config.seed)
            .id_strategy(config.id_strategy);

        if let Some(dir) = &config.data_dir {
            builder = builder
                .combatants(Arc::new(FileCombatantStore::new(dir.join("combatants.json"))?))
                .results(Arc::new(FileResultStore::new(dir.join("results"))?))
                .admin(Arc::new(FileAdminLog::new(dir.join("admin.log"))?));
            tracing::info!("Using file stores under {}", dir.display());
        }

        builder.build()
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Set the global seed inherited by later battles and tournaments.
    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }

    pub fn remove_seed(&mut self) {
        self.seed = None;
    }

    fn effective_seed(&self, requested: Option<u64>) -> Option<u64> {
        requested.or(self.seed)
    }

    /// Reserve the next battle id.
    pub fn next_battle_id(&self) -> Result<u64> {
        Ok(self.ids.next_id(RecordKind::Battle)?)
    }

    /// Reserve the next tournament id.
    pub fn next_tournament_id(&self) -> Result<u64> {
        Ok(self.ids.next_id(RecordKind::Tournament)?)
    }

    // ------------------------------------------------------------------
    // Combatants
    // ------------------------------------------------------------------

    /// Validate and store a definition, replacing any with the same name.
    pub fn register_combatant(&self, definition: CombatantDefinition) -> Result<()> {
        if let Err(err) = definition.validate() {
            self.admin
                .append(&format!("Error registering combatant: {err}"))?;
            return Err(err.into());
        }

        self.combatants.save(&definition)?;
        self.admin
            .append(&format!("Combatant {} upserted", definition.name))?;
        tracing::info!(name = %definition.name, "combatant registered");
        Ok(())
    }

    /// Register every definition whose name is not stored yet.
    ///
    /// Stored combatants keep their counters. Returns how many were added.
    pub fn install_roster(
        &self,
        definitions: impl IntoIterator<Item = CombatantDefinition>,
    ) -> Result<usize> {
        let mut installed = 0;
        for definition in definitions {
            if self.combatants.fetch(&definition.name)?.is_none() {
                self.register_combatant(definition)?;
                installed += 1;
            }
        }
        Ok(installed)
    }

    pub fn lookup_combatant(&self, name: &str) -> Result<CombatantDefinition> {
        self.combatants
            .fetch(name)?
            .ok_or_else(|| RuntimeError::not_found("combatant", name))
    }

    /// Every stored definition, ordered by name.
    pub fn combatants(&self) -> Result<Vec<CombatantDefinition>> {
        self.combatants
            .names()?
            .iter()
            .map(|name| self.lookup_combatant(name))
            .collect()
    }

    fn load_combatant(&self, name: &str) -> Result<Combatant> {
        Ok(self.lookup_combatant(name)?.to_combatant()?)
    }

    // ------------------------------------------------------------------
    // Battles
    // ------------------------------------------------------------------

    /// Prepare a battle between two stored combatants.
    ///
    /// `seed` overrides the global seed for this battle only. `a` draws from
    /// the seed itself and `b` from the seed plus one.
    pub fn create_battle(&self, a: &str, b: &str, seed: Option<u64>) -> Result<Battle> {
        let first = self.load_combatant(a)?;
        let second = self.load_combatant(b)?;
        let battle_id = self.next_battle_id()?;

        Ok(Battle::new(
            battle_id,
            first,
            second,
            self.effective_seed(seed),
        )?)
    }

    /// Run a battle to completion and persist its record.
    ///
    /// Standalone battles leave the combatants' stored counters untouched.
    pub fn start_battle(&self, mut battle: Battle) -> Result<BattleReport> {
        let battle_id = battle.id();
        tracing::info!(battle_id, seed = ?battle.seed(), "battle started");
        self.admin.append(&format!("battle started: {battle_id}"))?;

        let outcome = battle.run()?;
        let record = battle.record();
        let winner = battle.participant(outcome.winner).name().to_owned();
        let loser = battle.participant(outcome.loser).name().to_owned();

        self.persist_battle(&record)?;
        tracing::info!(
            battle_id,
            %winner,
            %loser,
            events = record.events.len(),
            "battle finished"
        );

        Ok(BattleReport::new(record, winner, loser))
    }

    fn persist_battle(&self, record: &BattleRecord) -> Result<()> {
        self.results
            .upsert(&ResultRecord::Battle(record.clone()), self.admin.as_ref())?;
        self.ids.observe(RecordKind::Battle, record.battle_id)?;
        self.admin
            .append(&format!("Battle {} logged", record.battle_id))?;

        tracing::debug!(battle_id = record.battle_id, "battle record stored");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Tournaments
    // ------------------------------------------------------------------

    /// Prepare a bracket over stored combatants, in the given order.
    ///
    /// A field of `n` entrants always runs `n - 1` battles, so that block
    /// of battle ids is reserved here and later requests cannot reuse it.
    /// The field itself is validated when the tournament starts.
    pub fn create_tournament<S: AsRef<str>>(
        &self,
        names: &[S],
        seed: Option<u64>,
    ) -> Result<Tournament> {
        let participants = names
            .iter()
            .map(|name| self.load_combatant(name.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        let battles = participants.len().saturating_sub(1) as u64;
        let first_battle_id = self.ids.reserve(RecordKind::Battle, battles)?;
        let tournament_id = self.next_tournament_id()?;

        Ok(Tournament::new(
            tournament_id,
            participants,
            first_battle_id,
            self.effective_seed(seed),
        ))
    }

    /// Run a tournament and persist its battles, its record and every
    /// participant's updated counters.
    ///
    /// An invalid field is not an error: the report comes back with no
    /// winner and nothing is stored.
    pub fn start_tournament(&self, mut tournament: Tournament) -> Result<TournamentReport> {
        let tournament_id = tournament.id();
        tracing::info!(tournament_id, seed = ?tournament.seed(), "tournament started");
        self.admin
            .append(&format!("tournament started: {tournament_id}"))?;

        let winner = match tournament.run() {
            Ok(champion) => champion.name().to_owned(),
            Err(TournamentError::Battle(err)) => return Err(err.into()),
            Err(err) => {
                tracing::warn!(tournament_id, error = %err, "tournament rejected");
                self.admin
                    .append(&format!("Invalid tournament: {tournament_id}"))?;
                return Ok(TournamentReport {
                    tournament_id,
                    winner: None,
                    rounds: Vec::new(),
                    rejection: Some(err.to_string()),
                });
            }
        };

        for record in tournament.battle_records() {
            self.persist_battle(record)?;
        }

        if let Some(record) = tournament.record() {
            self.results
                .upsert(&ResultRecord::Tournament(record), self.admin.as_ref())?;
            self.ids.observe(RecordKind::Tournament, tournament_id)?;
            self.admin
                .append(&format!("Tournament {tournament_id} logged"))?;
        }

        let rounds = tournament.rounds().to_vec();
        for combatant in tournament.into_participants() {
            let definition = CombatantDefinition::from_combatant(&combatant);
            self.combatants.save(&definition)?;
            self.admin
                .append(&format!("Combatant {} upserted", definition.name))?;
        }

        tracing::info!(tournament_id, %winner, rounds = rounds.len(), "tournament finished");
        Ok(TournamentReport {
            tournament_id,
            winner: Some(winner),
            rounds,
            rejection: None,
        })
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn battle(&self, battle_id: u64) -> Result<BattleRecord> {
        self.results
            .get(RecordKind::Battle, battle_id)?
            .and_then(ResultRecord::into_battle)
            .ok_or_else(|| RuntimeError::not_found("battle", battle_id))
    }

    pub fn battle_events(&self, battle_id: u64) -> Result<Vec<String>> {
        Ok(self.battle(battle_id)?.events)
    }

    /// Every stored battle in ascending id order.
    pub fn all_battles(&self) -> Result<Vec<BattleRecord>> {
        Ok(self
            .results
            .list(RecordKind::Battle)?
            .into_iter()
            .filter_map(ResultRecord::into_battle)
            .collect())
    }

    pub fn tournament(&self, tournament_id: u64) -> Result<TournamentRecord> {
        self.results
            .get(RecordKind::Tournament, tournament_id)?
            .and_then(ResultRecord::into_tournament)
            .ok_or_else(|| RuntimeError::not_found("tournament", tournament_id))
    }

    pub fn admin_logs(&self, role: Role) -> Result<Vec<String>> {
        role.require(Capability::ViewAdminLogs)?;
        Ok(self.admin.entries()?)
    }
}

/// Builder for [`BattleManager`]. Unset stores default to in-memory ones.
pub struct BattleManagerBuilder {
    combatants: Option<Arc<dyn CombatantStore>>,
    results: Option<Arc<dyn ResultStore>>,
    admin: Option<Arc<dyn AdminLog>>,
    ids: Option<Arc<dyn IdCounter>>,
    id_strategy: IdStrategy,
    seed: Option<u64>,
}

impl BattleManagerBuilder {
    fn new() -> Self {
        Self {
            combatants: None,
            results: None,
            admin: None,
            ids: None,
            id_strategy: IdStrategy::default(),
            seed: None,
        }
    }

    pub fn combatants(mut self, store: Arc<dyn CombatantStore>) -> Self {
        self.combatants = Some(store);
        self
    }

    pub fn results(mut self, store: Arc<dyn ResultStore>) -> Self {
        self.results = Some(store);
        self
    }

    pub fn admin(mut self, log: Arc<dyn AdminLog>) -> Self {
        self.admin = Some(log);
        self
    }

    /// Use a custom id counter; overrides [`Self::id_strategy`].
    pub fn ids(mut self, ids: Arc<dyn IdCounter>) -> Self {
        self.ids = Some(ids);
        self
    }

    pub fn id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.id_strategy = strategy;
        self
    }

    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(self) -> Result<BattleManager> {
        let results = self
            .results
            .unwrap_or_else(|| Arc::new(InMemoryResultStore::new()));

        let ids: Arc<dyn IdCounter> = match (self.ids, self.id_strategy) {
            (Some(ids), _) => ids,
            (None, IdStrategy::Atomic) => Arc::new(AtomicIds::primed(results.as_ref())?),
            (None, IdStrategy::StoreCount) => Arc::new(StoreCountIds::new(results.clone())),
        };

        Ok(BattleManager {
            combatants: self
                .combatants
                .unwrap_or_else(|| Arc::new(InMemoryCombatantStore::new())),
            results,
            admin: self
                .admin
                .unwrap_or_else(|| Arc::new(InMemoryAdminLog::new())),
            ids,
            seed: self.seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fighter(name: &str) -> CombatantDefinition {
        CombatantDefinition::new(name, 20)
            .with_attack("Tackle", 2)
            .with_attack("Slam", 5)
            .with_defense("Block", 2)
    }

    fn manager() -> BattleManager {
        let manager = BattleManager::builder().build().unwrap();
        manager
            .install_roster(["Geodude", "Lapras"].map(fighter))
            .unwrap();
        manager
    }

    #[test]
    fn test_request_seed_overrides_global_once() {
        let mut manager = manager();
        manager.set_seed(Some(5));

        let battle = manager.create_battle("Geodude", "Lapras", Some(9)).unwrap();
        assert_eq!(battle.seed(), Some(9));

        let battle = manager.create_battle("Geodude", "Lapras", None).unwrap();
        assert_eq!(battle.seed(), Some(5));

        manager.remove_seed();
        let battle = manager.create_battle("Geodude", "Lapras", None).unwrap();
        assert_eq!(battle.seed(), None);
    }

    #[test]
    fn test_unknown_combatant_is_not_found() {
        let manager = manager();
        let err = manager.create_battle("Geodude", "Mewtwo", None).unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::NotFound { kind: "combatant", ref key } if key == "Mewtwo"
        ));
    }

    #[test]
    fn test_install_roster_keeps_existing_counters() {
        let manager = manager();
        let mut veteran = fighter("Geodude");
        veteran.record.battle_wins = 3;
        manager.register_combatant(veteran).unwrap();

        let added = manager
            .install_roster(["Geodude", "Lapras", "Abra"].map(fighter))
            .unwrap();
        assert_eq!(added, 1);
        assert_eq!(manager.lookup_combatant("Geodude").unwrap().record.battle_wins, 3);
    }

    #[test]
    fn test_invalid_definition_is_logged_and_rejected() {
        let manager = manager();
        let err = manager
            .register_combatant(CombatantDefinition::new("Ghost", 10).with_attack("Lick", 1))
            .unwrap_err();
        assert!(matches!(err, RuntimeError::InvalidCombatant(_)));

        let logs = manager.admin_logs(Role::Administrator).unwrap();
        assert_eq!(
            logs.last().map(String::as_str),
            Some("Error registering combatant: combatant Ghost has no defense skills")
        );
    }
}
