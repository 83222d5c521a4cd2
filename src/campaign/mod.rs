//! Campaign layer - map, combat, missions and the session tying them together

pub mod battle;
pub mod map;
pub mod mission;
pub mod session;

pub use battle::{dice_counts, resolve_combat, settle_conquest, CombatOutcome, CombatRoll};
pub use map::{FactionTally, Territory, TerritoryMap, TERRITORY_COUNT, TERRITORY_NAMES};
pub use mission::{evaluate_mission, select_mission, Mission, MISSIONS};
pub use session::{GameSession, SessionStatus, SessionSummary};
