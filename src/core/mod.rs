pub mod config;
pub mod dice;
pub mod error;
pub mod types;

pub use config::GameConfig;
pub use dice::{RandomSource, ScriptedSource, SeededSource};
pub use error::{ConquestError, Result};
pub use types::{Faction, MissionId, TerritoryId};
