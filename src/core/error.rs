use thiserror::Error;

use crate::core::types::TerritoryId;

#[derive(Error, Debug)]
pub enum ConquestError {
    #[error("Invalid territory: {0}")]
    InvalidTerritory(TerritoryId),

    #[error("You can only attack from territories you control ({0})")]
    NotPlayerTerritory(TerritoryId),

    #[error("At least 2 troops are needed to attack (territory {territory} has {troops})")]
    InsufficientTroops { territory: TerritoryId, troops: u32 },

    #[error("A territory cannot attack itself ({0})")]
    SameTerritory(TerritoryId),

    #[error("You cannot attack your own territory ({0})")]
    OwnTerritory(TerritoryId),

    #[error("The game is already over")]
    GameOver,

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl ConquestError {
    /// Whether this error is a rejected attack order (the session keeps going)
    pub fn is_rejected_order(&self) -> bool {
        matches!(
            self,
            ConquestError::InvalidTerritory(_)
                | ConquestError::NotPlayerTerritory(_)
                | ConquestError::InsufficientTroops { .. }
                | ConquestError::SameTerritory(_)
                | ConquestError::OwnTerritory(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ConquestError>;
