//! Validator configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How hint-less identifiers without an authority prefix are attributed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionPolicy {
    /// Bare digits accepted by more than one jurisdiction are rejected
    /// as ambiguous
    #[default]
    RequireHint,
    /// Bare digits go to the first jurisdiction in priority order
    /// (6 digits Abu Dhabi, 8 digits Saudi Arabia, 5 digits Dubai)
    PriorityOrder,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    pub detection: DetectionPolicy,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid validator config: {0}")]
    Json(#[from] serde_json::Error),
}

impl ValidatorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
