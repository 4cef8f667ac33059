use crate::config::ArenaConfig;

/// Posture derived from the current hit-point ratio.
///
/// The stance sets how likely a combatant is to attack rather than defend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stance {
    /// `ratio >= 0.7`
    Aggressive,
    /// `0.3 <= ratio < 0.7`
    Balanced,
    /// `ratio < 0.3`, or `max_hp == 0`
    Defensive,
}

impl Stance {
    /// Classifies a hit-point ratio.
    ///
    /// Compared in integer tenths (`10 * current >= 7 * max`) so the bounds
    /// are exact on every host.
    pub fn classify(current_hp: u32, max_hp: u32) -> Self {
        if max_hp == 0 {
            return Self::Defensive;
        }
        let current_tenths = u64::from(current_hp) * 10;
        let max = u64::from(max_hp);
        if current_tenths >= ArenaConfig::AGGRESSIVE_FLOOR_TENTHS * max {
            Self::Aggressive
        } else if current_tenths >= ArenaConfig::BALANCED_FLOOR_TENTHS * max {
            Self::Balanced
        } else {
            Self::Defensive
        }
    }

    /// Decision draws below this value pick an attack.
    pub const fn attack_threshold(self) -> u32 {
        match self {
            Self::Aggressive => ArenaConfig::AGGRESSIVE_ATTACK_THRESHOLD,
            Self::Balanced => ArenaConfig::BALANCED_ATTACK_THRESHOLD,
            Self::Defensive => ArenaConfig::DEFENSIVE_ATTACK_THRESHOLD,
        }
    }
}
