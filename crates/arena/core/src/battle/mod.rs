//! Two-party turn loop.
//!
//! A [`Battle`] owns both combatants for its lifetime. Each loop iteration
//! first checks for a fainted combatant; otherwise the side whose turn it is
//! chooses one skill, resolves it, and the turn flips. Because the check sits
//! at the top of the iteration, the side that lands a knockout always
//! finishes its action before the battle is flagged over.

mod errors;
mod record;

pub use errors::CombatError;
pub use record::BattleRecord;

use crate::combatant::Combatant;
use crate::config::ArenaConfig;
use crate::skill::{Skill, SkillKind};

/// Seat of a combatant in a battle. `A` always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    A,
    B,
}

impl Side {
    pub const fn opposite(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }
}

/// Battle state machine. Initial: `TurnA`; terminal: `Over`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattlePhase {
    TurnA,
    TurnB,
    Over,
}

/// Ordered result of a finished battle: winner first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleOutcome {
    pub winner: Side,
    pub loser: Side,
}

#[derive(Debug)]
pub struct Battle {
    id: u64,
    participants: [Combatant; 2],
    turn: Side,
    seed: Option<u64>,
    events: Vec<String>,
    started: bool,
    outcome: Option<BattleOutcome>,
}

impl Battle {
    /// Creates a battle and seeds both private streams.
    ///
    /// With a seed, `a` gets it verbatim and `b` gets `seed + 1` (wrapping);
    /// without one, both streams are entropy-seeded. Combatants lacking
    /// attack or defense skills are rejected here, before any turn runs.
    pub fn new(
        id: u64,
        mut a: Combatant,
        mut b: Combatant,
        seed: Option<u64>,
    ) -> Result<Self, CombatError> {
        a.validate()?;
        b.validate()?;

        a.reseed(seed);
        b.reseed(seed.map(|seed| seed.wrapping_add(ArenaConfig::SECOND_SEAT_SEED_OFFSET)));

        Ok(Self {
            id,
            participants: [a, b],
            turn: Side::A,
            seed,
            events: Vec::new(),
            started: false,
            outcome: None,
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn events(&self) -> &[String] {
        &self.events
    }

    pub fn participant(&self, side: Side) -> &Combatant {
        &self.participants[side.index()]
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        self.outcome
    }

    pub fn winner(&self) -> Option<&Combatant> {
        self.outcome.map(|outcome| self.participant(outcome.winner))
    }

    pub fn loser(&self) -> Option<&Combatant> {
        self.outcome.map(|outcome| self.participant(outcome.loser))
    }

    pub fn phase(&self) -> BattlePhase {
        match (self.outcome, self.turn) {
            (Some(_), _) => BattlePhase::Over,
            (None, Side::A) => BattlePhase::TurnA,
            (None, Side::B) => BattlePhase::TurnB,
        }
    }

    /// Runs the loop until the battle is over.
    ///
    /// Calling this on a finished battle returns the stored outcome.
    ///
    /// Terminates as long as the combatants can eventually deal net damage;
    /// two combatants whose every attack is fully absorbed by an
    /// ever-renewed defense would loop forever.
    pub fn run(&mut self) -> Result<BattleOutcome, CombatError> {
        loop {
            if let Some(outcome) = self.outcome {
                return Ok(outcome);
            }
            self.step()?;
        }
    }

    /// Runs exactly one loop iteration and returns the resulting phase.
    pub fn step(&mut self) -> Result<BattlePhase, CombatError> {
        if self.outcome.is_some() {
            return Ok(BattlePhase::Over);
        }
        if !self.started {
            self.started = true;
            self.events.push("Welcome to the thunderdome!".to_owned());
        }

        if self.participants.iter().any(Combatant::is_fainted) {
            self.conclude();
            return Ok(BattlePhase::Over);
        }

        let user = self.turn;
        let skill = self.participants[user.index()].choose_skill()?;
        self.execute(user, skill);
        self.turn = user.opposite();

        Ok(self.phase())
    }

    /// Resolves one skill. Attacks target the opponent; defenses the user.
    fn execute(&mut self, user: Side, skill: Skill) {
        let user_name = self.participant(user).name().to_owned();

        match skill.kind {
            SkillKind::Attack => {
                let target = &mut self.participants[user.opposite().index()];
                let target_name = target.name().to_owned();
                self.events.push(format!(
                    "{user_name} is attacking with {} for {} damage to {target_name}",
                    skill.name, skill.level
                ));

                let report = target.take_damage(skill.level);
                if report.reduced > 0 {
                    let defense = report.absorbed_by.as_deref().unwrap_or_default();
                    self.events.push(format!(
                        "{target_name} successfully reduced {user_name}'s damage by {} with {defense}",
                        report.reduced
                    ));
                }
                self.events.push(format!(
                    "{target_name} has received {} damage, remaining hp is {}",
                    report.taken,
                    target.current_hp()
                ));
            }
            SkillKind::Defense => {
                self.events.push(format!(
                    "{user_name} is attempting to defend with {}",
                    skill.name
                ));
                self.participants[user.index()].defend(skill);
            }
        }
    }

    /// Orders the outcome and appends the closing events.
    ///
    /// Only A's faint flag is inspected: if A is standing, A won. With one
    /// damaging action per turn both sides can never reach zero together;
    /// mechanics that hit both sides at once must revisit this.
    fn conclude(&mut self) {
        let outcome = if self.participant(Side::A).is_fainted() {
            BattleOutcome {
                winner: Side::B,
                loser: Side::A,
            }
        } else {
            BattleOutcome {
                winner: Side::A,
                loser: Side::B,
            }
        };

        let loser = self.participant(outcome.loser).name().to_owned();
        let winner = self.participant(outcome.winner).name().to_owned();
        self.events.push(format!("{loser} has lost"));
        self.events.push(format!("{winner} has won the battle"));
        self.outcome = Some(outcome);
    }

    /// Builds the persisted record for this battle.
    pub fn record(&self) -> BattleRecord {
        BattleRecord {
            battle_id: self.id,
            events: self.events.clone(),
            participant_a: self.participant(Side::A).name().to_owned(),
            participant_b: self.participant(Side::B).name().to_owned(),
            seed: self.seed,
        }
    }

    /// Releases both combatants, `[a, b]`.
    pub fn into_participants(self) -> [Combatant; 2] {
        self.participants
    }
}
