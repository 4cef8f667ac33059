/// Simulation constants shared by every battle and bracket.
///
/// Attack thresholds are expressed out of [`ArenaConfig::DECISION_SIDES`]: a
/// combatant attacks when its decision draw is below the threshold of its
/// current stance.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArenaConfig;

impl ArenaConfig {
    // ===== bracket =====
    /// Smallest field a tournament accepts.
    pub const MIN_TOURNAMENT_ENTRANTS: usize = 4;

    // ===== decision policy =====
    /// Number of faces on the decision draw (`0..DECISION_SIDES`).
    pub const DECISION_SIDES: u32 = 10;
    pub const AGGRESSIVE_ATTACK_THRESHOLD: u32 = 7;
    pub const BALANCED_ATTACK_THRESHOLD: u32 = 5;
    pub const DEFENSIVE_ATTACK_THRESHOLD: u32 = 3;

    // ===== stance bounds (tenths of max hp) =====
    pub const AGGRESSIVE_FLOOR_TENTHS: u64 = 7;
    pub const BALANCED_FLOOR_TENTHS: u64 = 3;

    // ===== seeding =====
    /// Offset applied to the battle seed for the second participant.
    pub const SECOND_SEAT_SEED_OFFSET: u64 = 1;
}
