mod common;

use std::collections::HashMap;

use arena_core::{ArenaError, ErrorSeverity, Tournament, TournamentError};
use common::{field, fighter};

#[test]
fn pinned_five_entrant_bracket() {
    let mut tournament = Tournament::new(1, field(), 1, Some(7));
    let champion = tournament.run().unwrap();
    assert_eq!(champion.name(), "Squirtle");

    let rounds = tournament.rounds();
    assert_eq!(rounds.len(), 3);

    assert_eq!(rounds[0].bye.as_deref(), Some("Squirtle"));
    let first: Vec<_> = rounds[0]
        .battles
        .iter()
        .map(|b| (b.battle_id, b.winner.as_str(), b.loser.as_str()))
        .collect();
    assert_eq!(
        first,
        vec![(1, "Pikachu", "Charmander"), (2, "Snorlax", "Bulbasaur")]
    );

    assert_eq!(rounds[1].bye.as_deref(), Some("Squirtle"));
    assert_eq!(rounds[1].battles.len(), 1);
    assert_eq!(rounds[1].battles[0].winner, "Pikachu");

    assert_eq!(rounds[2].bye, None);
    assert_eq!(rounds[2].battles[0].battle_id, 4);
    assert_eq!(rounds[2].battles[0].loser, "Pikachu");

    assert_eq!(
        tournament.victors(),
        [
            vec!["Squirtle", "Pikachu", "Snorlax"],
            vec!["Squirtle", "Pikachu"],
            vec!["Squirtle"],
        ]
    );
    assert_eq!(tournament.next_battle_id(), 5);
}

#[test]
fn counters_follow_round_outcomes() {
    let mut tournament = Tournament::new(1, field(), 1, Some(7));
    tournament.run().unwrap();

    let records: HashMap<_, _> = tournament
        .participants()
        .iter()
        .map(|c| (c.name(), *c.record()))
        .collect();

    assert_eq!(records["Squirtle"].battle_wins, 1);
    assert_eq!(records["Squirtle"].tournament_wins, 1);
    assert_eq!(records["Pikachu"].battle_wins, 2);
    assert_eq!(records["Pikachu"].battle_losses, 1);
    assert_eq!(records["Pikachu"].tournament_losses, 1);
    assert_eq!(records["Snorlax"].battle_wins, 1);
    assert_eq!(records["Charmander"].battle_losses, 1);
    assert_eq!(records["Bulbasaur"].tournament_wins, 0);
}

#[test]
fn only_eliminated_entrants_gain_tournament_losses() {
    let mut tournament = Tournament::new(1, field(), 1, Some(7));
    tournament.run().unwrap();

    for combatant in tournament.participants() {
        let record = combatant.record();
        if combatant.name() == "Squirtle" {
            assert_eq!(record.tournament_losses, 0);
        } else {
            assert_eq!(record.tournament_losses, 1, "{}", combatant.name());
            assert_eq!(record.battle_losses, 1, "{}", combatant.name());
        }
    }
}

#[test]
fn odd_bracket_shape() {
    for seed in 0..20 {
        let mut tournament = Tournament::new(1, field(), 1, Some(seed));
        tournament.run().unwrap();
        let rounds = tournament.rounds();

        assert!(rounds[0].bye.is_some());
        assert_eq!(rounds[0].battles.len(), 2);
        assert_eq!(tournament.victors()[0].len(), 3);
        assert!(rounds[1].bye.is_some());
        assert_eq!(rounds[1].battles.len(), 1);
        assert_eq!(rounds.len(), 3);
    }
}

#[test]
fn converges_in_ceil_log2_rounds() {
    let roster = |n: usize| -> Vec<_> {
        (0..n)
            .map(|i| fighter(&format!("F{i}"), 12 + i as u32, &[("Jab", 2), ("Cross", 4)]))
            .collect()
    };

    for n in 4..=13 {
        let mut tournament = Tournament::new(1, roster(n), 100, Some(n as u64));
        tournament.run().unwrap();

        let expected_rounds = (n as f64).log2().ceil() as usize;
        assert_eq!(tournament.rounds().len(), expected_rounds, "n = {n}");
        assert_eq!(tournament.battle_records().len(), n - 1);
        assert_eq!(tournament.next_battle_id(), 100 + (n as u64 - 1));

        // every eliminated entrant lost exactly one recorded battle
        let mut losses: HashMap<String, usize> = HashMap::new();
        for round in tournament.rounds() {
            for battle in &round.battles {
                *losses.entry(battle.loser.clone()).or_default() += 1;
            }
        }
        assert_eq!(losses.len(), n - 1);
        assert!(losses.values().all(|&count| count == 1));
        let champion = tournament.champion().unwrap().name().to_owned();
        assert!(!losses.contains_key(&champion));
    }
}

#[test]
fn battle_ids_are_sequential() {
    let mut tournament = Tournament::new(9, field(), 40, Some(3));
    tournament.run().unwrap();
    let record = tournament.record().unwrap();
    let ids: Vec<u64> = record.battle_ids().collect();
    assert_eq!(ids, vec![40, 41, 42, 43]);
    let stored: Vec<u64> = tournament
        .battle_records()
        .iter()
        .map(|b| b.battle_id)
        .collect();
    assert_eq!(ids, stored);
}

#[test]
fn seeded_tournament_is_reproducible() {
    let run = |seed| {
        let mut tournament = Tournament::new(1, field(), 1, Some(seed));
        tournament.run().unwrap();
        (
            tournament.record().unwrap(),
            tournament.battle_records().to_vec(),
        )
    };
    assert_eq!(run(2024), run(2024));
    assert_eq!(run(2024).0.winner, "Snorlax");
}

#[test]
fn three_entrants_are_rejected() {
    let mut entrants = field();
    entrants.truncate(3);
    let mut tournament = Tournament::new(1, entrants, 1, Some(1));

    let err = tournament.run().err().unwrap();
    assert_eq!(
        err,
        TournamentError::TooFewEntrants {
            entrants: 3,
            required: 4
        }
    );
    assert!(err.is_invalid_tournament());
    assert_eq!(err.severity(), ErrorSeverity::Validation);
    assert_eq!(err.error_code(), "INVALID_TOURNAMENT");
    assert!(tournament.battle_records().is_empty());
    assert!(tournament.record().is_none());
    assert_eq!(tournament.next_battle_id(), 1);
}

#[test]
fn duplicate_entrants_are_rejected() {
    let mut entrants = field();
    entrants.push(fighter("Pikachu", 25, &[("Thunder", 6)]));
    let mut tournament = Tournament::new(1, entrants, 1, None);
    assert!(matches!(
        tournament.run(),
        Err(TournamentError::DuplicateEntrant { name }) if name == "Pikachu"
    ));
}

#[test]
fn finished_tournament_does_not_rerun() {
    let mut tournament = Tournament::new(1, field(), 1, Some(7));
    let first = tournament.run().unwrap().name().to_owned();
    let battles = tournament.battle_records().len();
    let second = tournament.run().unwrap().name().to_owned();
    assert_eq!(first, second);
    assert_eq!(tournament.battle_records().len(), battles);
}
