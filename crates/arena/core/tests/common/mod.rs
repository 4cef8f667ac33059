#![allow(dead_code)]

use arena_core::{Combatant, Skill};

fn guard() -> [Skill; 3] {
    [
        Skill::defense("Endure", 1),
        Skill::defense("Block", 2),
        Skill::defense("Protect", 3),
    ]
}

pub fn fighter(name: &str, max_hp: u32, attacks: &[(&str, u32)]) -> Combatant {
    Combatant::new(name, max_hp)
        .with_skills(attacks.iter().map(|&(skill, level)| Skill::attack(skill, level)))
        .with_skills(guard())
}

/// Five entrants in bracket order.
pub fn field() -> Vec<Combatant> {
    vec![
        fighter(
            "Pikachu",
            25,
            &[("Growl", 1), ("Tail Whip", 2), ("Thunder Shock", 3), ("Thunder", 6)],
        ),
        fighter(
            "Charmander",
            25,
            &[("Attack", 1), ("Scratch", 2), ("Ember", 3), ("Flamethrower", 6)],
        ),
        fighter(
            "Squirtle",
            25,
            &[("Attack", 1), ("Tackle", 2), ("Water Gun", 3), ("Hydro Pump", 6)],
        ),
        fighter(
            "Bulbasaur",
            25,
            &[("Tackle", 1), ("Vine Whip", 2), ("Razor Leaf", 3), ("Leaf Storm", 6)],
        ),
        fighter("Snorlax", 40, &[("Rest", 0), ("Snore", 6)]),
    ]
}
