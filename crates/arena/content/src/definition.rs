//! Serializable combatant definitions.
//!
//! A [`CombatantDefinition`] is the stored form of a combatant: name, hit
//! points, image, skill lists and counters. It carries no runtime state (no
//! current hit points, no active defense, no stream), so converting it into a
//! [`Combatant`] always yields a fresh, fully-rested fighter.

use arena_core::{CombatRecord, Combatant, Skill, SkillKind};
use serde::{Deserialize, Serialize};

/// One skill entry in a definition; its kind comes from the list it sits in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSpec {
    pub name: String,
    pub level: u32,
}

impl SkillSpec {
    pub fn new(name: impl Into<String>, level: u32) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }

    fn to_skill(&self, kind: SkillKind) -> Skill {
        Skill::new(kind, self.name.clone(), self.level)
    }
}

impl From<&Skill> for SkillSpec {
    fn from(skill: &Skill) -> Self {
        Self::new(skill.name.clone(), skill.level)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantDefinition {
    pub name: String,
    pub max_hp: u32,
    #[serde(default)]
    pub image: String,
    pub attack_skills: Vec<SkillSpec>,
    pub defense_skills: Vec<SkillSpec>,
    #[serde(default)]
    pub record: CombatRecord,
}

/// A definition that cannot produce a battle-ready combatant.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DefinitionError {
    #[error("combatant name must not be empty")]
    EmptyName,

    #[error("combatant {name} has zero max hp")]
    ZeroMaxHp { name: String },

    #[error("combatant {name} has no attack skills")]
    NoAttackSkills { name: String },

    #[error("combatant {name} has no defense skills")]
    NoDefenseSkills { name: String },
}

impl CombatantDefinition {
    pub fn new(name: impl Into<String>, max_hp: u32) -> Self {
        Self {
            name: name.into(),
            max_hp,
            image: String::new(),
            attack_skills: Vec::new(),
            defense_skills: Vec::new(),
            record: CombatRecord::default(),
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_attack(mut self, name: impl Into<String>, level: u32) -> Self {
        self.attack_skills.push(SkillSpec::new(name, level));
        self
    }

    pub fn with_defense(mut self, name: impl Into<String>, level: u32) -> Self {
        self.defense_skills.push(SkillSpec::new(name, level));
        self
    }

    pub fn validate(&self) -> Result<(), DefinitionError> {
        if self.name.trim().is_empty() {
            return Err(DefinitionError::EmptyName);
        }
        if self.max_hp == 0 {
            return Err(DefinitionError::ZeroMaxHp {
                name: self.name.clone(),
            });
        }
        if self.attack_skills.is_empty() {
            return Err(DefinitionError::NoAttackSkills {
                name: self.name.clone(),
            });
        }
        if self.defense_skills.is_empty() {
            return Err(DefinitionError::NoDefenseSkills {
                name: self.name.clone(),
            });
        }
        Ok(())
    }

    /// Validates and builds a rested combatant with an unseeded stream.
    ///
    /// Callers that need reproducible draws reseed it (a [`Battle`] does so
    /// on construction).
    ///
    /// [`Battle`]: arena_core::Battle
    pub fn to_combatant(&self) -> Result<Combatant, DefinitionError> {
        self.validate()?;

        let attacks = self
            .attack_skills
            .iter()
            .map(|spec| spec.to_skill(SkillKind::Attack));
        let defenses = self
            .defense_skills
            .iter()
            .map(|spec| spec.to_skill(SkillKind::Defense));

        Ok(Combatant::new(self.name.clone(), self.max_hp)
            .with_image(self.image.clone())
            .with_skills(attacks)
            .with_skills(defenses)
            .with_record(self.record))
    }

    /// Captures the stored fields of `combatant`, dropping its runtime state.
    pub fn from_combatant(combatant: &Combatant) -> Self {
        Self {
            name: combatant.name().to_owned(),
            max_hp: combatant.max_hp(),
            image: combatant.image().to_owned(),
            attack_skills: combatant.attack_skills().iter().map(SkillSpec::from).collect(),
            defense_skills: combatant.defense_skills().iter().map(SkillSpec::from).collect(),
            record: *combatant.record(),
        }
    }
}
