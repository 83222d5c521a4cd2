//! Game configuration
//!
//! Every field has a default, so an empty TOML file (or no file at all)
//! yields the classic setup: 1-5 starting troops, screen clearing on,
//! warnings-only logging.

use serde::Deserialize;
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use crate::core::error::{ConquestError, Result};

/// Default tracing filter when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "conquest=warn";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed seed for a reproducible session; drawn from entropy when unset
    pub seed: Option<u64>,

    /// Fewest troops a territory can start with
    pub min_initial_troops: u32,

    /// Most troops a territory can start with
    pub max_initial_troops: u32,

    /// Clear the terminal before redrawing the map
    pub clear_screen: bool,

    /// tracing `EnvFilter` directive
    pub log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            min_initial_troops: 1,
            max_initial_troops: 5,
            clear_screen: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        // Every territory must start with at least one defender
        if self.min_initial_troops == 0 {
            return Err(ConquestError::InvalidConfig(
                "min_initial_troops must be at least 1".into(),
            ));
        }

        if self.min_initial_troops > self.max_initial_troops {
            return Err(ConquestError::InvalidConfig(format!(
                "min_initial_troops ({}) should be <= max_initial_troops ({})",
                self.min_initial_troops, self.max_initial_troops
            )));
        }

        Ok(())
    }

    pub fn initial_troop_range(&self) -> RangeInclusive<u32> {
        self.min_initial_troops..=self.max_initial_troops
    }
}
