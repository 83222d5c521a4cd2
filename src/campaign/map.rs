//! Territory map - the twelve named nodes and who holds them
//!
//! The map has no adjacency: any territory may attack any territory held
//! by another faction.

use serde::Serialize;
use std::ops::RangeInclusive;

use crate::core::dice::RandomSource;
use crate::core::types::{Faction, TerritoryId, FACTION_COUNT};

/// Number of territories on the map
pub const TERRITORY_COUNT: usize = 12;

/// Territories each faction holds at the start
pub const TERRITORIES_PER_FACTION: usize = TERRITORY_COUNT / FACTION_COUNT;

/// Starting troop range used by the classic setup
pub const DEFAULT_INITIAL_TROOPS: RangeInclusive<u32> = 1..=5;

/// Territory names in map order
pub const TERRITORY_NAMES: [&str; TERRITORY_COUNT] = [
    "Amazônia",
    "Cerrado",
    "Mata Atlântica",
    "Caatinga",
    "Pampa",
    "Pantanal",
    "Alaska",
    "Groenlândia",
    "Sibéria",
    "Austrália",
    "África do Sul",
    "Antártida",
];

/// A named map node with an owner and a garrison
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Territory {
    pub name: &'static str,
    pub owner: Faction,
    pub troops: u32,
}

impl Territory {
    pub fn new(name: &'static str, owner: Faction, troops: u32) -> Self {
        Self { name, owner, troops }
    }

    /// One troop must stay behind, so attacking needs at least two
    pub fn can_attack(&self) -> bool {
        self.troops >= 2
    }
}

/// Territory counts per faction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FactionTally {
    counts: [u32; FACTION_COUNT],
}

impl FactionTally {
    pub fn count(&self, faction: Faction) -> u32 {
        self.counts[faction.index()]
    }

    pub fn player(&self) -> u32 {
        self.count(Faction::Player)
    }

    /// Factions that still hold at least one territory
    pub fn surviving(&self) -> impl Iterator<Item = Faction> + '_ {
        Faction::ALL.into_iter().filter(|f| self.count(*f) > 0)
    }
}

/// Faction that starts with the territory at `index`
pub fn initial_owner(index: usize) -> Faction {
    Faction::ALL[(index / TERRITORIES_PER_FACTION).min(FACTION_COUNT - 1)]
}

/// The full map, fixed at twelve territories
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerritoryMap {
    territories: [Territory; TERRITORY_COUNT],
}

impl TerritoryMap {
    /// Classic setup: 3-3-3-3 ownership, 1-5 troops each
    pub fn initialize(source: &mut impl RandomSource) -> Self {
        Self::initialize_with(source, DEFAULT_INITIAL_TROOPS)
    }

    /// Same layout with a custom starting troop range
    ///
    /// Draws one value per territory in map order.
    pub fn initialize_with(source: &mut impl RandomSource, troops: RangeInclusive<u32>) -> Self {
        let (low, high) = (*troops.start(), *troops.end());
        let territories = std::array::from_fn(|i| {
            Territory::new(
                TERRITORY_NAMES[i],
                initial_owner(i),
                source.next_in_range(low, high),
            )
        });

        tracing::debug!(low, high, "Initialized territory map");
        Self { territories }
    }

    /// Build a map from explicit territories
    pub fn from_territories(territories: [Territory; TERRITORY_COUNT]) -> Self {
        Self { territories }
    }

    pub fn get(&self, id: TerritoryId) -> Option<&Territory> {
        self.territories.get(id.0)
    }

    pub fn get_mut(&mut self, id: TerritoryId) -> Option<&mut Territory> {
        self.territories.get_mut(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TerritoryId, &Territory)> {
        self.territories
            .iter()
            .enumerate()
            .map(|(i, t)| (TerritoryId(i), t))
    }

    pub fn territories(&self) -> &[Territory] {
        &self.territories
    }

    pub fn contains(&self, id: TerritoryId) -> bool {
        id.0 < TERRITORY_COUNT
    }

    /// Per-faction territory counts in one pass
    pub fn tally(&self) -> FactionTally {
        let mut tally = FactionTally::default();
        for territory in &self.territories {
            tally.counts[territory.owner.index()] += 1;
        }
        tally
    }

    /// Two distinct territories, both mutable
    ///
    /// Returns `None` if either id is out of range or they are equal.
    pub fn pair_mut(
        &mut self,
        first: TerritoryId,
        second: TerritoryId,
    ) -> Option<(&mut Territory, &mut Territory)> {
        if first == second || !self.contains(first) || !self.contains(second) {
            return None;
        }

        if first.0 < second.0 {
            let (head, tail) = self.territories.split_at_mut(second.0);
            Some((&mut head[first.0], &mut tail[0]))
        } else {
            let (head, tail) = self.territories.split_at_mut(first.0);
            Some((&mut tail[0], &mut head[second.0]))
        }
    }

    /// Give a territory to a faction (scenario setup)
    pub fn set_owner(&mut self, id: TerritoryId, owner: Faction) {
        if let Some(territory) = self.get_mut(id) {
            territory.owner = owner;
        }
    }
}
