//! Damage mitigation and application.
//!
//! Pure functions; the combatant wires them to its own hit points and active
//! defense.

use crate::skill::Skill;

/// Result of running an incoming attack through an optional defense.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mitigation {
    /// Damage left after the defense.
    pub actual: u32,
    /// Damage the defense absorbed (`incoming - actual`).
    pub reduced: u32,
}

/// Run an attack of `incoming` damage through `defense`.
///
/// # Formula
///
/// ```text
/// actual  = max(0, incoming - defense_level)
/// reduced = incoming - actual
/// ```
///
/// Without a defense the full amount goes through.
pub fn mitigate(defense: Option<&Skill>, incoming: u32) -> Mitigation {
    match defense {
        Some(defense) => {
            let actual = incoming.saturating_sub(defense.level);
            Mitigation {
                actual,
                reduced: incoming - actual,
            }
        }
        None => Mitigation {
            actual: incoming,
            reduced: 0,
        },
    }
}

/// Apply damage to current HP.
///
/// Returns `(new_hp, taken)` where `taken = min(current_hp, damage)`, so
/// overkill is clamped for reporting and hit points never go below zero.
pub fn apply_damage(current_hp: u32, damage: u32) -> (u32, u32) {
    let taken = current_hp.min(damage);
    (current_hp - taken, taken)
}

/// What one attack did to its target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DamageReport {
    /// Hit points actually lost.
    pub taken: u32,
    /// Damage absorbed by the active defense.
    pub reduced: u32,
    /// Name of the defense consumed by this attack, if one was active.
    pub absorbed_by: Option<String>,
}
