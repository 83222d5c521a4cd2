//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of factions in play
pub const FACTION_COUNT: usize = 4;

/// The four sides competing for territory
///
/// The player is always `Player`; the three enemies never act on their own
/// and only change the map when the player attacks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    /// The human-controlled army (blue)
    Player,
    /// First enemy army (red)
    Enemy1,
    /// Second enemy army (green)
    Enemy2,
    /// Third enemy army (yellow)
    Enemy3,
}

impl Faction {
    /// All factions in initial-ownership order
    pub const ALL: [Faction; FACTION_COUNT] = [
        Faction::Player,
        Faction::Enemy1,
        Faction::Enemy2,
        Faction::Enemy3,
    ];

    /// Slot used for per-faction tallies
    pub fn index(self) -> usize {
        match self {
            Faction::Player => 0,
            Faction::Enemy1 => 1,
            Faction::Enemy2 => 2,
            Faction::Enemy3 => 3,
        }
    }

    /// Army colour shown to the player
    pub fn display_name(self) -> &'static str {
        match self {
            Faction::Player => "BLUE",
            Faction::Enemy1 => "RED",
            Faction::Enemy2 => "GREEN",
            Faction::Enemy3 => "YELLOW",
        }
    }

    pub fn is_player(self) -> bool {
        self == Faction::Player
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Index of a territory on the map (0-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TerritoryId(pub usize);

impl TerritoryId {
    /// Build from the 1-based number shown in the map table
    pub fn from_display(number: usize) -> Option<Self> {
        number.checked_sub(1).map(TerritoryId)
    }

    /// 1-based number shown in the map table
    pub fn display_number(self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for TerritoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.display_number())
    }
}

/// Mission identifier (1-based, matches the catalog)
pub type MissionId = u8;
