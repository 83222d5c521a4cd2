//! Game session - owns the map, the secret mission and the dice
//!
//! The session is the only way the presentation layer touches game state.
//! It rejects illegal orders before any dice are rolled and re-checks the
//! mission after every attack.

use serde::Serialize;
use std::ops::RangeInclusive;

use super::battle::{resolve_combat, CombatOutcome};
use super::map::{Territory, TerritoryMap};
use super::mission::{evaluate_mission, select_mission, Mission};
use crate::core::config::GameConfig;
use crate::core::dice::{RandomSource, SeededSource};
use crate::core::error::{ConquestError, Result};
use crate::core::types::{Faction, MissionId, TerritoryId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionStatus {
    Ongoing,
    Victory,
}

/// Serializable end-of-session report
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub seed: Option<u64>,
    pub mission: Option<Mission>,
    pub status: SessionStatus,
    pub attacks: u32,
    pub conquests: u32,
    pub territories: Vec<Territory>,
}

pub struct GameSession<S: RandomSource = SeededSource> {
    map: TerritoryMap,
    mission_id: MissionId,
    source: S,
    /// Known only for seeded sources
    seed: Option<u64>,
    attacks: u32,
    conquests: u32,
    status: SessionStatus,
}

impl GameSession<SeededSource> {
    /// Start a session from config, seeding from entropy if no seed is set
    pub fn new(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        let source = config
            .seed
            .map(SeededSource::new)
            .unwrap_or_else(SeededSource::from_entropy);
        let seed = source.seed();

        let mut session = Self::with_source(source, config.initial_troop_range());
        session.seed = Some(seed);
        tracing::info!(seed, mission = session.mission_id, "Session started");
        Ok(session)
    }
}

impl<S: RandomSource> GameSession<S> {
    /// Initialize the map, then draw the mission, from one source
    pub fn with_source(mut source: S, troops: RangeInclusive<u32>) -> Self {
        let map = TerritoryMap::initialize_with(&mut source, troops);
        let mission_id = select_mission(&mut source);
        Self::from_parts(map, mission_id, source)
    }

    /// Resume from an explicit map and mission (scenario setup)
    pub fn from_parts(map: TerritoryMap, mission_id: MissionId, source: S) -> Self {
        let mut session = Self {
            map,
            mission_id,
            source,
            seed: None,
            attacks: 0,
            conquests: 0,
            status: SessionStatus::Ongoing,
        };
        session.check_victory();
        session
    }

    pub fn map(&self) -> &TerritoryMap {
        &self.map
    }

    pub fn mission_id(&self) -> MissionId {
        self.mission_id
    }

    pub fn mission(&self) -> Option<&'static Mission> {
        Mission::by_id(self.mission_id)
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status == SessionStatus::Victory
    }

    pub fn attacks(&self) -> u32 {
        self.attacks
    }

    pub fn conquests(&self) -> u32 {
        self.conquests
    }

    /// Pure mission check against the current map
    pub fn is_victorious(&self) -> bool {
        evaluate_mission(&self.map, self.mission_id)
    }

    /// Re-evaluate the mission; victory is sticky
    pub fn check_victory(&mut self) -> SessionStatus {
        if self.status == SessionStatus::Ongoing && self.is_victorious() {
            self.status = SessionStatus::Victory;
            tracing::info!(
                mission = self.mission_id,
                attacks = self.attacks,
                "Mission accomplished"
            );
        }
        self.status
    }

    /// Check an attack order without touching the map
    ///
    /// Checks run in the order the player enters the order: origin, then
    /// destination.
    pub fn validate_attack(&self, origin: TerritoryId, destination: TerritoryId) -> Result<()> {
        let from = self
            .map
            .get(origin)
            .ok_or(ConquestError::InvalidTerritory(origin))?;

        if from.owner != Faction::Player {
            return Err(ConquestError::NotPlayerTerritory(origin));
        }

        if !from.can_attack() {
            return Err(ConquestError::InsufficientTroops {
                territory: origin,
                troops: from.troops,
            });
        }

        let to = self
            .map
            .get(destination)
            .ok_or(ConquestError::InvalidTerritory(destination))?;

        if origin == destination {
            return Err(ConquestError::SameTerritory(origin));
        }

        if to.owner == Faction::Player {
            return Err(ConquestError::OwnTerritory(destination));
        }

        Ok(())
    }

    /// Attack from a player territory into an enemy territory
    pub fn attack(&mut self, origin: TerritoryId, destination: TerritoryId) -> Result<CombatOutcome> {
        if self.is_over() {
            return Err(ConquestError::GameOver);
        }

        if let Err(e) = self.validate_attack(origin, destination) {
            tracing::warn!(%origin, %destination, error = %e, "Attack order rejected");
            return Err(e);
        }

        let (attacker, defender) = self
            .map
            .pair_mut(origin, destination)
            .ok_or(ConquestError::SameTerritory(origin))?;
        let outcome = resolve_combat(attacker, defender, &mut self.source);

        self.attacks += 1;
        if outcome.conquered {
            self.conquests += 1;
        }
        self.check_victory();

        Ok(outcome)
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            seed: self.seed,
            mission: self.mission().copied(),
            status: self.status,
            attacks: self.attacks,
            conquests: self.conquests,
            territories: self.map.territories().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dice::ScriptedSource;

    /// Troops 3,3,1 for the player, 1 everywhere else, then mission `id`
    fn scripted_session(mission: u32, dice: &[u32]) -> GameSession<ScriptedSource> {
        let mut values = vec![3, 3, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, mission];
        values.extend_from_slice(dice);
        GameSession::with_source(ScriptedSource::new(values), 1..=5)
    }

    #[test]
    fn test_new_session_from_seed() {
        let config = GameConfig {
            seed: Some(1234),
            ..GameConfig::default()
        };
        let a = GameSession::new(&config).unwrap();
        let b = GameSession::new(&config).unwrap();
        assert_eq!(a.map(), b.map());
        assert_eq!(a.mission_id(), b.mission_id());
        assert_eq!(a.seed(), Some(1234));
        assert_eq!(a.status(), SessionStatus::Ongoing);
        assert!(a.mission().is_some());
    }

    #[test]
    fn test_new_session_rejects_bad_config() {
        let config = GameConfig {
            min_initial_troops: 0,
            ..GameConfig::default()
        };
        assert!(GameSession::new(&config).is_err());
    }

    #[test]
    fn test_mission_drawn_after_map() {
        let session = scripted_session(5, &[]);
        assert_eq!(session.mission_id(), 5);
        assert_eq!(session.map().get(TerritoryId(0)).unwrap().troops, 3);
    }

    #[test]
    fn test_validation_order() {
        let session = scripted_session(4, &[]);

        assert!(matches!(
            session.validate_attack(TerritoryId(12), TerritoryId(3)),
            Err(ConquestError::InvalidTerritory(TerritoryId(12)))
        ));
        assert!(matches!(
            session.validate_attack(TerritoryId(3), TerritoryId(99)),
            Err(ConquestError::NotPlayerTerritory(_))
        ));
        assert!(matches!(
            session.validate_attack(TerritoryId(2), TerritoryId(3)),
            Err(ConquestError::InsufficientTroops { troops: 1, .. })
        ));
        assert!(matches!(
            session.validate_attack(TerritoryId(0), TerritoryId(12)),
            Err(ConquestError::InvalidTerritory(TerritoryId(12)))
        ));
        assert!(matches!(
            session.validate_attack(TerritoryId(0), TerritoryId(0)),
            Err(ConquestError::SameTerritory(_))
        ));
        assert!(matches!(
            session.validate_attack(TerritoryId(0), TerritoryId(1)),
            Err(ConquestError::OwnTerritory(_))
        ));
        assert!(session.validate_attack(TerritoryId(0), TerritoryId(11)).is_ok());
    }

    #[test]
    fn test_rejected_attack_rolls_nothing() {
        let mut session = scripted_session(4, &[6, 1]);
        let before = session.map().clone();
        let err = session.attack(TerritoryId(0), TerritoryId(1)).unwrap_err();
        assert!(err.is_rejected_order());
        assert_eq!(session.map(), &before);
        assert_eq!(session.attacks(), 0);
        assert_eq!(session.source.remaining(), 2);
    }

    #[test]
    fn test_attack_conquers_and_counts() {
        // 3 troops attack 1: attacker rolls 6, 2; defender rolls 3
        let mut session = scripted_session(4, &[6, 2, 3]);
        let outcome = session.attack(TerritoryId(0), TerritoryId(3)).unwrap();

        assert!(outcome.conquered);
        assert_eq!(session.attacks(), 1);
        assert_eq!(session.conquests(), 1);
        let conquered = session.map().get(TerritoryId(3)).unwrap();
        assert_eq!(conquered.owner, Faction::Player);
        assert_eq!(conquered.troops, 1);
        assert_eq!(session.map().tally().player(), 4);
        assert_eq!(session.status(), SessionStatus::Ongoing);
    }

    #[test]
    fn test_victory_is_terminal() {
        // Mission 1: destroy RED, which holds territories 3, 4, 5
        let mut map = scripted_session(1, &[]).map().clone();
        map.set_owner(TerritoryId(4), Faction::Player);
        map.set_owner(TerritoryId(5), Faction::Player);
        let source = ScriptedSource::new([6, 5, 1]);
        let mut session = GameSession::from_parts(map, 1, source);
        assert_eq!(session.status(), SessionStatus::Ongoing);

        let outcome = session.attack(TerritoryId(0), TerritoryId(3)).unwrap();
        assert!(outcome.conquered);
        assert!(session.is_victorious());
        assert!(session.is_over());

        let err = session.attack(TerritoryId(3), TerritoryId(6)).unwrap_err();
        assert!(matches!(err, ConquestError::GameOver));
    }

    #[test]
    fn test_summary_reflects_session() {
        let mut session = scripted_session(2, &[6, 2, 3]);
        session.attack(TerritoryId(0), TerritoryId(3)).unwrap();
        let summary = session.summary();

        assert_eq!(summary.attacks, 1);
        assert_eq!(summary.conquests, 1);
        assert_eq!(summary.mission.map(|m| m.id), Some(2));
        assert_eq!(summary.territories.len(), 12);
        assert!(summary.seed.is_none());

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"attacks\":1"));
        assert!(json.contains("Amazônia"));
    }
}
