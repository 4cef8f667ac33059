//! Combatants: hit points, skill inventory, cumulative counters and the
//! stance-based decision policy.
//!
//! A combatant is mutated by exactly one owner at a time: the [`Battle`]
//! currently holding it, or the [`Tournament`] arena between battles.
//!
//! [`Battle`]: crate::Battle
//! [`Tournament`]: crate::Tournament

mod damage;
mod stance;

pub use damage::{DamageReport, Mitigation, apply_damage, mitigate};
pub use stance::Stance;

use crate::battle::CombatError;
use crate::config::ArenaConfig;
use crate::rng::PcgStream;
use crate::skill::{Skill, SkillKind};

/// Cumulative win/loss counters.
///
/// Only the bracket orchestrator increments these.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatRecord {
    pub battle_wins: u32,
    pub battle_losses: u32,
    pub tournament_wins: u32,
    pub tournament_losses: u32,
}

impl CombatRecord {
    /// Battle wins per loss, `0.0` when there are no losses.
    pub fn battle_ratio(&self) -> f64 {
        ratio(self.battle_wins, self.battle_losses)
    }

    /// Tournament wins per loss, `0.0` when there are no losses.
    pub fn tournament_ratio(&self) -> f64 {
        ratio(self.tournament_wins, self.tournament_losses)
    }
}

fn ratio(wins: u32, losses: u32) -> f64 {
    if losses == 0 {
        0.0
    } else {
        f64::from(wins) / f64::from(losses)
    }
}

/// Why a combatant cannot enter a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvalidReason {
    ZeroMaxHp,
    NoAttackSkills,
    NoDefenseSkills,
}

/// A battling entity keyed by its unique name.
#[derive(Clone, Debug)]
pub struct Combatant {
    name: String,
    image: String,
    max_hp: u32,
    current_hp: u32,
    attack_skills: Vec<Skill>,
    defense_skills: Vec<Skill>,
    active_defense: Option<Skill>,
    record: CombatRecord,
    /// Drawn from entropy on first use when no seed was set.
    rng: Option<PcgStream>,
    seed: Option<u64>,
}

impl Combatant {
    /// Creates a combatant at full health with no skills.
    ///
    /// No stream exists until the combatant is reseeded or first draws;
    /// battles always reseed it.
    pub fn new(name: impl Into<String>, max_hp: u32) -> Self {
        Self {
            name: name.into(),
            image: String::new(),
            max_hp,
            current_hp: max_hp,
            attack_skills: Vec::new(),
            defense_skills: Vec::new(),
            active_defense: None,
            record: CombatRecord::default(),
            rng: None,
            seed: None,
        }
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    #[must_use]
    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.add_skill(skill);
        self
    }

    #[must_use]
    pub fn with_skills(mut self, skills: impl IntoIterator<Item = Skill>) -> Self {
        for skill in skills {
            self.add_skill(skill);
        }
        self
    }

    #[must_use]
    pub fn with_record(mut self, record: CombatRecord) -> Self {
        self.record = record;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.reseed(seed);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    pub fn attack_skills(&self) -> &[Skill] {
        &self.attack_skills
    }

    pub fn defense_skills(&self) -> &[Skill] {
        &self.defense_skills
    }

    /// Attack skills followed by defense skills.
    pub fn all_skills(&self) -> impl Iterator<Item = &Skill> {
        self.attack_skills.iter().chain(self.defense_skills.iter())
    }

    pub fn active_defense(&self) -> Option<&Skill> {
        self.active_defense.as_ref()
    }

    pub fn record(&self) -> &CombatRecord {
        &self.record
    }

    /// Seed of the private stream, `None` when it was entropy-seeded.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn stance(&self) -> Stance {
        Stance::classify(self.current_hp, self.max_hp)
    }

    /// Checks the combatant can take part in a battle.
    pub fn validate(&self) -> Result<(), CombatError> {
        let reason = if self.max_hp == 0 {
            InvalidReason::ZeroMaxHp
        } else if self.attack_skills.is_empty() {
            InvalidReason::NoAttackSkills
        } else if self.defense_skills.is_empty() {
            InvalidReason::NoDefenseSkills
        } else {
            return Ok(());
        };
        Err(CombatError::InvalidCombatant {
            name: self.name.clone(),
            reason,
        })
    }

    /// Resets the private stream; `None` defers to a fresh entropy seed
    /// on the next draw.
    pub fn reseed(&mut self, seed: Option<u64>) {
        self.seed = seed;
        self.rng = seed.map(PcgStream::new);
    }

    fn stream(&mut self) -> &mut PcgStream {
        self.rng.get_or_insert_with(PcgStream::from_entropy)
    }

    /// Restores full health and drops any active defense.
    pub fn rest(&mut self) {
        self.current_hp = self.max_hp;
        self.active_defense = None;
    }

    /// Appends a skill to the inventory of its kind.
    pub fn add_skill(&mut self, skill: Skill) {
        match skill.kind {
            SkillKind::Attack => self.attack_skills.push(skill),
            SkillKind::Defense => self.defense_skills.push(skill),
        }
    }

    /// Removes the first skill of `kind` called `name`.
    pub fn remove_skill(&mut self, kind: SkillKind, name: &str) -> Option<Skill> {
        let pool = self.pool_mut(kind);
        let position = pool.iter().position(|skill| skill.name == name)?;
        Some(pool.remove(position))
    }

    fn pool(&self, kind: SkillKind) -> &[Skill] {
        match kind {
            SkillKind::Attack => &self.attack_skills,
            SkillKind::Defense => &self.defense_skills,
        }
    }

    fn pool_mut(&mut self, kind: SkillKind) -> &mut Vec<Skill> {
        match kind {
            SkillKind::Attack => &mut self.attack_skills,
            SkillKind::Defense => &mut self.defense_skills,
        }
    }

    /// Picks one skill with the private stream.
    ///
    /// 1. Classify the stance from the current hit points.
    /// 2. Draw `t` in `0..10`; attack when `t` is below the stance threshold.
    /// 3. Draw uniformly among the skills of the chosen kind.
    pub fn choose_skill(&mut self) -> Result<Skill, CombatError> {
        let stance = self.stance();
        let roll = self.stream().below(ArenaConfig::DECISION_SIDES);
        let kind = if roll < stance.attack_threshold() {
            SkillKind::Attack
        } else {
            SkillKind::Defense
        };
        self.random_skill(kind)
    }

    fn random_skill(&mut self, kind: SkillKind) -> Result<Skill, CombatError> {
        let len = self.pool(kind).len();
        let index = self
            .stream()
            .pick_index(len)
            .ok_or_else(|| CombatError::EmptySkillPool {
                combatant: self.name.clone(),
                kind,
            })?;
        Ok(self.pool(kind)[index].clone())
    }

    /// Raises `skill` as the active defense, replacing any earlier one.
    ///
    /// Non-defense skills only clear the current defense.
    pub fn defend(&mut self, skill: Skill) {
        self.active_defense = skill.is_defense().then_some(skill);
    }

    /// Takes an attack of `damage`, consuming the active defense if any.
    pub fn take_damage(&mut self, damage: u32) -> DamageReport {
        let defense = self.active_defense.take();
        let mitigation = mitigate(defense.as_ref(), damage);
        let (hp, taken) = apply_damage(self.current_hp, mitigation.actual);
        self.current_hp = hp;
        DamageReport {
            taken,
            reduced: mitigation.reduced,
            absorbed_by: defense.map(|skill| skill.name),
        }
    }

    pub fn record_battle_win(&mut self) {
        self.record.battle_wins += 1;
    }

    pub fn record_battle_loss(&mut self) {
        self.record.battle_losses += 1;
    }

    pub fn record_tournament_win(&mut self) {
        self.record.tournament_wins += 1;
    }

    pub fn record_tournament_loss(&mut self) {
        self.record.tournament_losses += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fighter() -> Combatant {
        Combatant::new("Pikachu", 25)
            .with_skills([
                Skill::attack("Thunder Shock", 3),
                Skill::attack("Thunder", 6),
                Skill::defense("Block", 2),
            ])
            .with_seed(Some(42))
    }

    #[test]
    fn skills_are_routed_by_kind() {
        let combatant = fighter();
        assert_eq!(combatant.attack_skills().len(), 2);
        assert_eq!(combatant.defense_skills().len(), 1);
        assert_eq!(combatant.all_skills().count(), 3);
    }

    #[test]
    fn remove_skill_matches_kind_and_name() {
        let mut combatant = fighter();
        assert_eq!(combatant.remove_skill(SkillKind::Defense, "Thunder"), None);
        let removed = combatant.remove_skill(SkillKind::Attack, "Thunder");
        assert_eq!(removed, Some(Skill::attack("Thunder", 6)));
        assert_eq!(combatant.attack_skills().len(), 1);
    }

    #[test]
    fn choose_skill_follows_pinned_draws() {
        // seed 42: decision draw 6 (< 7, attack), then 1795671209 % 2 picks index 1
        let mut combatant = fighter();
        let skill = combatant.choose_skill().unwrap();
        assert_eq!(skill, Skill::attack("Thunder", 6));
    }

    #[test]
    fn stream_is_created_lazily() {
        let mut combatant = Combatant::new("Eevee", 20)
            .with_skills([Skill::attack("Tackle", 2), Skill::defense("Block", 2)]);
        assert!(combatant.rng.is_none());

        combatant.reseed(Some(3));
        assert_eq!(combatant.rng, Some(PcgStream::new(3)));

        combatant.reseed(None);
        assert!(combatant.rng.is_none());
        assert!(combatant.choose_skill().is_ok());
        assert!(combatant.rng.is_some());
        assert_eq!(combatant.seed(), None);
    }

    #[test]
    fn empty_pool_is_reported() {
        let mut combatant = Combatant::new("Magikarp", 10)
            .with_skill(Skill::defense("Splash", 0))
            .with_seed(Some(42));
        // first draw 6 asks for an attack
        let err = combatant.choose_skill().unwrap_err();
        assert_eq!(
            err,
            CombatError::EmptySkillPool {
                combatant: "Magikarp".into(),
                kind: SkillKind::Attack,
            }
        );
    }

    #[test]
    fn defense_is_single_use() {
        let mut combatant = fighter();
        combatant.defend(Skill::defense("Protect", 5));

        let first = combatant.take_damage(3);
        assert_eq!(first.taken, 0);
        assert_eq!(first.reduced, 3);
        assert_eq!(first.absorbed_by.as_deref(), Some("Protect"));
        assert_eq!(combatant.current_hp(), 25);
        assert!(combatant.active_defense().is_none());

        let second = combatant.take_damage(3);
        assert_eq!(second.taken, 3);
        assert_eq!(second.reduced, 0);
        assert_eq!(combatant.current_hp(), 22);
    }

    #[test]
    fn new_defense_replaces_old() {
        let mut combatant = fighter();
        combatant.defend(Skill::defense("Endure", 1));
        combatant.defend(Skill::defense("Protect", 3));
        assert_eq!(combatant.active_defense().map(|s| s.level), Some(3));
    }

    #[test]
    fn hp_never_underflows_and_rest_restores() {
        let mut combatant = fighter();
        let report = combatant.take_damage(100);
        assert_eq!(report.taken, 25);
        assert_eq!(combatant.current_hp(), 0);
        assert!(combatant.is_fainted());

        combatant.defend(Skill::defense("Block", 2));
        combatant.rest();
        assert_eq!(combatant.current_hp(), combatant.max_hp());
        assert!(combatant.active_defense().is_none());
    }

    #[test]
    fn validate_reports_first_missing_piece() {
        let no_defense = Combatant::new("Onix", 30).with_skill(Skill::attack("Tackle", 2));
        assert_eq!(
            no_defense.validate(),
            Err(CombatError::InvalidCombatant {
                name: "Onix".into(),
                reason: InvalidReason::NoDefenseSkills,
            })
        );

        let no_hp = Combatant::new("Ghost", 0);
        assert!(matches!(
            no_hp.validate(),
            Err(CombatError::InvalidCombatant {
                reason: InvalidReason::ZeroMaxHp,
                ..
            })
        ));
    }

    #[test]
    fn ratios_guard_against_zero_losses() {
        let record = CombatRecord {
            battle_wins: 3,
            battle_losses: 0,
            tournament_wins: 2,
            tournament_losses: 4,
        };
        assert_eq!(record.battle_ratio(), 0.0);
        assert_eq!(record.tournament_ratio(), 0.5);
    }
}
