//! Combat system integration tests
//!
//! These tests check the dice rules end-to-end through the public API:
//! dice counts, tie-breaking, loss totals and the conquest transfer.

use conquest::campaign::{dice_counts, resolve_combat, Territory};
use conquest::core::{Faction, ScriptedSource, SeededSource};
use proptest::prelude::*;

fn pair(attacker_troops: u32, defender_troops: u32) -> (Territory, Territory) {
    (
        Territory::new("Alaska", Faction::Player, attacker_troops),
        Territory::new("Sibéria", Faction::Enemy2, defender_troops),
    )
}

/// Five attacking one: three dice against one, a single comparison
#[test]
fn test_five_against_one_costs_exactly_one_troop() {
    for seed in 0..200 {
        let (mut att, mut def) = pair(5, 1);
        let mut source = SeededSource::new(seed);
        let outcome = resolve_combat(&mut att, &mut def, &mut source);

        assert_eq!(outcome.roll.attacker.len(), 3);
        assert_eq!(outcome.roll.defender.len(), 1);
        assert_eq!(outcome.total_losses(), 1);
    }
}

/// Two attacking three: one die against two, a single comparison
#[test]
fn test_two_against_three_costs_exactly_one_troop() {
    for seed in 0..200 {
        let (mut att, mut def) = pair(2, 3);
        let mut source = SeededSource::new(seed);
        let outcome = resolve_combat(&mut att, &mut def, &mut source);

        assert_eq!(outcome.roll.attacker.len(), 1);
        assert_eq!(outcome.roll.defender.len(), 2);
        assert_eq!(outcome.total_losses(), 1);
        // Three defenders can't fall in one roll
        assert!(!outcome.conquered);
        assert_eq!(def.owner, Faction::Enemy2);
    }
}

#[test]
fn test_defender_wins_every_tie() {
    for face in 1..=6 {
        let (mut att, mut def) = pair(4, 2);
        // Attacker: face, face, 1 -- defender: face, face
        let mut source = ScriptedSource::new([face, face, 1, face, face]);
        let outcome = resolve_combat(&mut att, &mut def, &mut source);

        assert_eq!(outcome.attacker_losses, 2);
        assert_eq!(outcome.defender_losses, 0);
        assert_eq!(att.troops, 2);
        assert_eq!(def.troops, 2);
    }
}

#[test]
fn test_wiping_out_two_defenders_conquers() {
    let (mut att, mut def) = pair(3, 2);
    let mut source = ScriptedSource::new([6, 6, 5, 5]);
    let outcome = resolve_combat(&mut att, &mut def, &mut source);

    assert!(outcome.conquered);
    assert_eq!(def.owner, Faction::Player);
    assert_eq!(def.troops, 1);
    assert_eq!(att.troops, 2);
}

proptest! {
    #[test]
    fn prop_losses_equal_comparisons(
        attacker_troops in 2u32..20,
        defender_troops in 1u32..20,
        seed in any::<u64>(),
    ) {
        let (mut att, mut def) = pair(attacker_troops, defender_troops);
        let mut source = SeededSource::new(seed);
        let outcome = resolve_combat(&mut att, &mut def, &mut source);

        let (attacker_dice, defender_dice) = dice_counts(attacker_troops, defender_troops);
        prop_assert_eq!(outcome.roll.attacker.len() as u32, attacker_dice);
        prop_assert_eq!(outcome.roll.defender.len() as u32, defender_dice);
        prop_assert_eq!(outcome.total_losses(), attacker_dice.min(defender_dice));
        prop_assert!(outcome.roll.attacker.windows(2).all(|w| w[0] >= w[1]));
        prop_assert!(outcome.roll.defender.windows(2).all(|w| w[0] >= w[1]));
        prop_assert!(outcome.roll.attacker.iter().chain(&outcome.roll.defender).all(|d| (1..=6).contains(d)));
    }

    #[test]
    fn prop_conquest_leaves_both_sides_garrisoned(
        attacker_troops in 2u32..20,
        defender_troops in 1u32..4,
        seed in any::<u64>(),
    ) {
        let (mut att, mut def) = pair(attacker_troops, defender_troops);
        let mut source = SeededSource::new(seed);
        let outcome = resolve_combat(&mut att, &mut def, &mut source);

        if outcome.conquered {
            prop_assert_eq!(def.owner, att.owner);
            prop_assert!(def.troops >= 1);
            prop_assert!(att.troops >= 1);
            prop_assert_eq!(
                att.troops + def.troops + outcome.attacker_losses,
                attacker_troops
            );
        } else {
            prop_assert_eq!(def.owner, Faction::Enemy2);
            prop_assert!(def.troops > 0);
            prop_assert_eq!(att.troops, attacker_troops - outcome.attacker_losses);
            prop_assert_eq!(def.troops, defender_troops - outcome.defender_losses);
        }
    }
}
