//! Battle resolution for territory attacks
//!
//! One call is one round of dice: the attacker rolls up to three dice, the
//! defender up to two, highest dice are matched pairwise and each lost
//! pairing removes one troop. Ties go to the defender.

use serde::Serialize;

use super::map::Territory;
use crate::core::dice::RandomSource;
use crate::core::types::Faction;

/// Most dice the attacker may roll
pub const MAX_ATTACKER_DICE: u32 = 3;

/// Most dice the defender may roll
pub const MAX_DEFENDER_DICE: u32 = 2;

/// Most troops moved into a conquered territory
pub const MAX_TROOPS_MOVED: u32 = 1;

/// Dice rolled in one combat, each side sorted highest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombatRoll {
    pub attacker: Vec<u32>,
    pub defender: Vec<u32>,
}

impl CombatRoll {
    /// Sort both sides in descending order
    pub fn new(mut attacker: Vec<u32>, mut defender: Vec<u32>) -> Self {
        attacker.sort_unstable_by(|a, b| b.cmp(a));
        defender.sort_unstable_by(|a, b| b.cmp(a));
        Self { attacker, defender }
    }

    /// Number of matched dice pairs
    pub fn comparisons(&self) -> usize {
        self.attacker.len().min(self.defender.len())
    }

    /// Losses as `(attacker, defender)`
    pub fn losses(&self) -> (u32, u32) {
        self.attacker
            .iter()
            .zip(&self.defender)
            .fold((0, 0), |(att, def), (a, d)| {
                if a > d {
                    (att, def + 1)
                } else {
                    (att + 1, def)
                }
            })
    }
}

/// Everything a combat report needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombatOutcome {
    pub attacker_name: &'static str,
    pub defender_name: &'static str,
    pub attacker_owner: Faction,
    /// Owner of the defending territory before the combat
    pub defender_owner: Faction,
    pub roll: CombatRoll,
    pub attacker_losses: u32,
    pub defender_losses: u32,
    pub conquered: bool,
    pub troops_moved: u32,
    pub attacker_troops: u32,
    pub defender_troops: u32,
}

impl CombatOutcome {
    pub fn total_losses(&self) -> u32 {
        self.attacker_losses + self.defender_losses
    }
}

/// Dice each side rolls for the given garrisons
pub fn dice_counts(attacker_troops: u32, defender_troops: u32) -> (u32, u32) {
    (
        attacker_troops.saturating_sub(1).min(MAX_ATTACKER_DICE),
        defender_troops.min(MAX_DEFENDER_DICE),
    )
}

/// Roll `count` dice
fn roll_dice(source: &mut impl RandomSource, count: u32) -> Vec<u32> {
    (0..count).map(|_| source.roll_die()).collect()
}

/// Move troops into a defeated territory
///
/// Only runs once the defender has no troops left. At most one troop moves,
/// and only if the attacker keeps one behind; with nothing to move the
/// defender stays empty under its old owner. Returns troops moved.
pub fn settle_conquest(attacker: &mut Territory, defender: &mut Territory) -> u32 {
    if defender.troops > 0 {
        return 0;
    }

    let troops_to_move = attacker.troops.saturating_sub(1).min(MAX_TROOPS_MOVED);
    if troops_to_move > 0 {
        attacker.troops -= troops_to_move;
        defender.troops = troops_to_move;
        defender.owner = attacker.owner;
    } else {
        tracing::warn!(
            attacker = attacker.name,
            defender = defender.name,
            "Defender emptied but attacker has no troops to move in"
        );
    }
    troops_to_move
}

/// Resolve one attack between two territories
///
/// The caller guarantees the territories have different owners and the
/// attacker has at least two troops. Attacker dice are drawn before
/// defender dice.
pub fn resolve_combat(
    attacker: &mut Territory,
    defender: &mut Territory,
    source: &mut impl RandomSource,
) -> CombatOutcome {
    let (attacker_dice, defender_dice) = dice_counts(attacker.troops, defender.troops);
    let attacker_rolls = roll_dice(source, attacker_dice);
    let defender_rolls = roll_dice(source, defender_dice);
    let roll = CombatRoll::new(attacker_rolls, defender_rolls);

    let (attacker_losses, defender_losses) = roll.losses();
    attacker.troops = attacker.troops.saturating_sub(attacker_losses);
    defender.troops = defender.troops.saturating_sub(defender_losses);

    tracing::debug!(
        attacker = attacker.name,
        defender = defender.name,
        attacker_dice = ?roll.attacker,
        defender_dice = ?roll.defender,
        attacker_losses,
        defender_losses,
        "Combat resolved"
    );

    let defender_owner = defender.owner;
    let troops_moved = settle_conquest(attacker, defender);
    let conquered = troops_moved > 0;
    if conquered {
        tracing::info!(
            territory = defender.name,
            from = %defender_owner,
            to = %attacker.owner,
            "Territory conquered"
        );
    }

    CombatOutcome {
        attacker_name: attacker.name,
        defender_name: defender.name,
        attacker_owner: attacker.owner,
        defender_owner,
        roll,
        attacker_losses,
        defender_losses,
        conquered,
        troops_moved,
        attacker_troops: attacker.troops,
        defender_troops: defender.troops,
    }
}
