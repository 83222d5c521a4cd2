//! Secret missions - the player's victory condition
//!
//! Each mission is data: an optional faction to wipe out and a minimum
//! number of territories the player must hold. Mission 6 uses both.

use serde::Serialize;

use super::map::{FactionTally, TerritoryMap};
use crate::core::dice::RandomSource;
use crate::core::types::{Faction, MissionId};

/// Number of missions in the catalog
pub const MISSION_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mission {
    pub id: MissionId,
    pub description: &'static str,
    /// Faction that must hold no territories
    pub target_faction: Option<Faction>,
    /// Territories the player must hold (0 when not applicable)
    pub territory_threshold: u32,
}

/// The fixed mission catalog, ordered by id
pub static MISSIONS: [Mission; MISSION_COUNT] = [
    Mission {
        id: 1,
        description: "Completely destroy the RED army",
        target_faction: Some(Faction::Enemy1),
        territory_threshold: 0,
    },
    Mission {
        id: 2,
        description: "Completely destroy the GREEN army",
        target_faction: Some(Faction::Enemy2),
        territory_threshold: 0,
    },
    Mission {
        id: 3,
        description: "Completely destroy the YELLOW army",
        target_faction: Some(Faction::Enemy3),
        territory_threshold: 0,
    },
    Mission {
        id: 4,
        description: "Conquer at least 8 territories in total",
        target_faction: None,
        territory_threshold: 8,
    },
    Mission {
        id: 5,
        description: "Conquer at least 10 territories in total",
        target_faction: None,
        territory_threshold: 10,
    },
    Mission {
        id: 6,
        description: "Conquer at least 6 territories and destroy the RED army",
        target_faction: Some(Faction::Enemy1),
        territory_threshold: 6,
    },
];

impl Mission {
    /// Look up a mission; ids outside 1..=6 have none
    pub fn by_id(id: MissionId) -> Option<&'static Mission> {
        MISSIONS.iter().find(|m| m.id == id)
    }

    pub fn is_satisfied(&self, tally: &FactionTally) -> bool {
        let target_destroyed = self
            .target_faction
            .map_or(true, |faction| tally.count(faction) == 0);
        target_destroyed && tally.player() >= self.territory_threshold
    }
}

/// Check a mission against the current map
///
/// Unknown ids are never satisfied.
pub fn evaluate_mission(map: &TerritoryMap, mission_id: MissionId) -> bool {
    Mission::by_id(mission_id).is_some_and(|mission| mission.is_satisfied(&map.tally()))
}

/// Draw the session's mission, uniform over the catalog
pub fn select_mission(source: &mut impl RandomSource) -> MissionId {
    let id = source.next_in_range(1, MISSION_COUNT as u32);
    // Range is 1..=6, always fits
    id as MissionId
}
