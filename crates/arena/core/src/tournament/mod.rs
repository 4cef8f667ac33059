//! Single-elimination bracket.
//!
//! Entrants live in an arena that never reorders; `remaining` is an ordered
//! list of arena indices. Each round:
//!
//! 1. On an odd count, draw one bye from `remaining` with the tournament
//!    stream and remove it in place (order of the rest is kept).
//! 2. Pair the rest positionally: `(0, 1), (2, 3), ...`.
//! 3. Run one [`Battle`] per pair with the shared seed and the next
//!    sequential battle id.
//! 4. The next round is the bye (first) followed by the winners in pairing
//!    order.
//!
//! Combatants keep their hit points and active defense between rounds.

mod errors;
mod record;

pub use errors::TournamentError;
pub use record::{BattleSummary, RoundRecord, TournamentRecord};

use std::collections::HashSet;

use crate::battle::{Battle, BattleRecord, Side};
use crate::combatant::Combatant;
use crate::config::ArenaConfig;
use crate::rng::PcgStream;

#[derive(Debug)]
pub struct Tournament {
    id: u64,
    arena: Vec<Combatant>,
    remaining: Vec<usize>,
    next_battle_id: u64,
    seed: Option<u64>,
    rng: PcgStream,
    rounds: Vec<RoundRecord>,
    victors: Vec<Vec<String>>,
    battles: Vec<BattleRecord>,
    champion: Option<usize>,
}

impl Tournament {
    /// Creates a bracket over `participants` in the given order.
    ///
    /// Battles are numbered from `first_battle_id`. The bye stream is seeded
    /// with `seed` verbatim, or from entropy when there is none. The field is
    /// validated when the tournament runs.
    pub fn new(
        id: u64,
        participants: Vec<Combatant>,
        first_battle_id: u64,
        seed: Option<u64>,
    ) -> Self {
        let remaining = (0..participants.len()).collect();
        Self {
            id,
            arena: participants,
            remaining,
            next_battle_id: first_battle_id,
            seed,
            rng: PcgStream::from_seed(seed),
            rounds: Vec::new(),
            victors: Vec::new(),
            battles: Vec::new(),
            champion: None,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// First battle id not yet used by this tournament.
    pub fn next_battle_id(&self) -> u64 {
        self.next_battle_id
    }

    /// Entrants in creation order.
    pub fn participants(&self) -> &[Combatant] {
        &self.arena
    }

    /// Combatants still in contention, in bracket order.
    pub fn remaining(&self) -> impl Iterator<Item = &Combatant> {
        self.remaining.iter().map(|&index| &self.arena[index])
    }

    pub fn rounds(&self) -> &[RoundRecord] {
        &self.rounds
    }

    /// Survivor names after each round.
    pub fn victors(&self) -> &[Vec<String>] {
        &self.victors
    }

    /// Records of every battle run so far, in battle-id order.
    pub fn battle_records(&self) -> &[BattleRecord] {
        &self.battles
    }

    pub fn champion(&self) -> Option<&Combatant> {
        self.champion.map(|index| &self.arena[index])
    }

    /// Checks the field before any battle runs.
    pub fn validate(&self) -> Result<(), TournamentError> {
        if self.arena.len() < ArenaConfig::MIN_TOURNAMENT_ENTRANTS {
            return Err(TournamentError::TooFewEntrants {
                entrants: self.arena.len(),
                required: ArenaConfig::MIN_TOURNAMENT_ENTRANTS,
            });
        }

        let mut seen = HashSet::with_capacity(self.arena.len());
        for combatant in &self.arena {
            if !seen.insert(combatant.name()) {
                return Err(TournamentError::DuplicateEntrant {
                    name: combatant.name().to_owned(),
                });
            }
            combatant
                .validate()
                .map_err(TournamentError::InvalidEntrant)?;
        }
        Ok(())
    }

    /// Runs rounds until one combatant remains and returns it.
    ///
    /// A finished tournament returns its champion again without running
    /// more battles.
    pub fn run(&mut self) -> Result<&Combatant, TournamentError> {
        if let Some(index) = self.champion {
            return Ok(&self.arena[index]);
        }
        self.validate()?;

        while self.remaining.len() > 1 {
            self.conduct_round()?;
            let survivors = self.remaining().map(|c| c.name().to_owned()).collect();
            self.victors.push(survivors);
        }

        let index = self.remaining[0];
        self.arena[index].record_tournament_win();
        self.champion = Some(index);
        Ok(&self.arena[index])
    }

    fn conduct_round(&mut self) -> Result<(), TournamentError> {
        let mut next_round = Vec::with_capacity(self.remaining.len() / 2 + 1);

        let bye = if self.remaining.len() % 2 == 1 {
            self.rng.pick_index(self.remaining.len()).map(|position| {
                let index = self.remaining.remove(position);
                next_round.push(index);
                self.arena[index].name().to_owned()
            })
        } else {
            None
        };

        let pairs: Vec<(usize, usize)> = self
            .remaining
            .chunks_exact(2)
            .map(|pair| (pair[0], pair[1]))
            .collect();

        let mut battles = Vec::with_capacity(pairs.len());
        for (a, b) in pairs {
            let (winner, summary) = self.run_pairing(a, b)?;
            next_round.push(winner);
            battles.push(summary);
        }

        self.remaining = next_round;
        self.rounds.push(RoundRecord {
            round: self.rounds.len() as u32 + 1,
            battles,
            bye,
        });
        Ok(())
    }

    /// Runs one battle between arena slots `a` and `b` and writes both
    /// combatants back. Returns the winner's slot.
    ///
    /// The loser is eliminated here, so its `tournament_losses` is bumped
    /// along with `battle_losses`. Counters stored by systems that only
    /// track tournament wins will show zero tournament losses.
    fn run_pairing(&mut self, a: usize, b: usize) -> Result<(usize, BattleSummary), TournamentError> {
        let battle_id = self.next_battle_id;
        self.next_battle_id += 1;

        let mut battle = Battle::new(
            battle_id,
            self.arena[a].clone(),
            self.arena[b].clone(),
            self.seed,
        )?;
        let outcome = battle.run()?;
        self.battles.push(battle.record());

        let [first, second] = battle.into_participants();
        self.arena[a] = first;
        self.arena[b] = second;

        let (winner, loser) = match outcome.winner {
            Side::A => (a, b),
            Side::B => (b, a),
        };
        self.arena[winner].record_battle_win();
        self.arena[loser].record_battle_loss();
        self.arena[loser].record_tournament_loss();

        Ok((
            winner,
            BattleSummary {
                battle_id,
                winner: self.arena[winner].name().to_owned(),
                loser: self.arena[loser].name().to_owned(),
            },
        ))
    }

    /// Builds the persisted record; `None` until a champion exists.
    pub fn record(&self) -> Option<TournamentRecord> {
        let champion = self.champion()?;
        Some(TournamentRecord {
            tournament_id: self.id,
            participants: self.arena.iter().map(|c| c.name().to_owned()).collect(),
            events: self.rounds.clone(),
            winner: champion.name().to_owned(),
        })
    }

    /// Releases every entrant, in creation order, with updated counters.
    pub fn into_participants(self) -> Vec<Combatant> {
        self.arena
    }
}
