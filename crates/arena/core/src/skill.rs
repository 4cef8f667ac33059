//! Skill model.
//!
//! A skill is an immutable value: a name, a flat level and a kind. Attack
//! skills deal their level as damage to the opponent; defense skills absorb up
//! to their level from the next attack that lands on the user.

/// Which side of the exchange a skill acts on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SkillKind {
    /// Deals flat damage to the opponent.
    Attack,
    /// Reduces the next incoming attack on the user by a flat amount.
    Defense,
}

/// A named skill with a flat damage (attack) or reduction (defense) level.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    pub kind: SkillKind,
    pub name: String,
    pub level: u32,
}

impl Skill {
    pub fn new(kind: SkillKind, name: impl Into<String>, level: u32) -> Self {
        Self {
            kind,
            name: name.into(),
            level,
        }
    }

    pub fn attack(name: impl Into<String>, level: u32) -> Self {
        Self::new(SkillKind::Attack, name, level)
    }

    pub fn defense(name: impl Into<String>, level: u32) -> Self {
        Self::new(SkillKind::Defense, name, level)
    }

    #[inline]
    pub fn is_attack(&self) -> bool {
        self.kind == SkillKind::Attack
    }

    #[inline]
    pub fn is_defense(&self) -> bool {
        self.kind == SkillKind::Defense
    }
}
