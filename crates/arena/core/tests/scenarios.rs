use arena_core::{Combatant, Skill, Stance, mitigate};

fn defender() -> Combatant {
    Combatant::new("Onix", 30)
        .with_skill(Skill::attack("Tackle", 1))
        .with_skill(Skill::defense("Harden", 5))
}

#[test]
fn defense_absorbs_weaker_attack() {
    let mut onix = defender();
    onix.defend(Skill::defense("Harden", 5));

    let report = onix.take_damage(3);
    assert_eq!(report.taken, 0);
    assert_eq!(report.reduced, 3);
    assert_eq!(report.absorbed_by.as_deref(), Some("Harden"));
    assert_eq!(onix.current_hp(), 30);
    assert!(onix.active_defense().is_none());

    // the defense is gone, so the next hit lands in full
    let report = onix.take_damage(3);
    assert_eq!(report.taken, 3);
    assert_eq!(report.reduced, 0);
    assert_eq!(onix.current_hp(), 27);
}

#[test]
fn mitigation_is_capped_by_defense_level() {
    let shield = Skill::defense("Protect", 3);
    let result = mitigate(Some(&shield), 6);
    assert_eq!((result.actual, result.reduced), (3, 3));

    let result = mitigate(None, 6);
    assert_eq!((result.actual, result.reduced), (6, 0));
}

#[test]
fn stance_follows_damage() {
    let mut onix = defender();
    assert_eq!(onix.stance(), Stance::Aggressive);
    onix.take_damage(10);
    assert_eq!(onix.stance(), Stance::Balanced);
    onix.take_damage(12);
    assert_eq!(onix.stance(), Stance::Defensive);

    onix.rest();
    assert_eq!(onix.current_hp(), 30);
    assert_eq!(onix.stance(), Stance::Aggressive);
}
