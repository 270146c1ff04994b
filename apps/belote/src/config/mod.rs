//! Engine configuration: defaults, JSON files and `BELOTE_*` environment overrides.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::rules::RuleConfig;
use crate::domain::state::{PlayerId, Seat};

pub const ENV_SEED: &str = "BELOTE_SEED";
pub const ENV_DRAFT_START: &str = "BELOTE_DRAFT_START";
pub const ENV_CONTROLLED_PLAYER: &str = "BELOTE_CONTROLLED_PLAYER";
pub const ENV_OVERTRUMP: &str = "BELOTE_OVERTRUMP";
pub const ENV_LAST_TRICK_BONUS: &str = "BELOTE_LAST_TRICK_BONUS";
pub const ENV_MATCH_THRESHOLD: &str = "BELOTE_MATCH_THRESHOLD";

pub const DEFAULT_MATCH_THRESHOLD: u32 = 501;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: String, value: String },
    #[error("config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config io: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    fn invalid(key: &str, value: &str) -> Self {
        Self::Invalid {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

/// Settings shared by the episode driver, the match loop and the runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub rules: RuleConfig,
    /// Seat first offered the candidate.
    pub draft_start: Seat,
    /// Player whose card comes from the supplied action.
    pub controlled_player: PlayerId,
    /// Base seed; `None` draws one from the OS.
    pub seed: Option<u64>,
    pub match_threshold: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rules: RuleConfig::default(),
            draft_start: 0,
            controlled_player: 0,
            seed: None,
            match_threshold: DEFAULT_MATCH_THRESHOLD,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Defaults with any `BELOTE_*` variables from the process environment applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup` (keyed by the `BELOTE_*` names) on top of `self`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_SEED) {
            self.seed = Some(parse_var(ENV_SEED, &v)?);
        }
        if let Some(v) = lookup(ENV_DRAFT_START) {
            self.draft_start = parse_var(ENV_DRAFT_START, &v)?;
        }
        if let Some(v) = lookup(ENV_CONTROLLED_PLAYER) {
            self.controlled_player = parse_var(ENV_CONTROLLED_PLAYER, &v)?;
        }
        if let Some(v) = lookup(ENV_OVERTRUMP) {
            self.rules.overtrump = parse_bool(ENV_OVERTRUMP, &v)?;
        }
        if let Some(v) = lookup(ENV_LAST_TRICK_BONUS) {
            self.rules.last_trick_bonus = parse_var(ENV_LAST_TRICK_BONUS, &v)?;
        }
        if let Some(v) = lookup(ENV_MATCH_THRESHOLD) {
            self.match_threshold = parse_var(ENV_MATCH_THRESHOLD, &v)?;
        }
        self.validate()
    }

    /// Reject seats outside the table and a zero match threshold.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.draft_start >= crate::domain::rules::PLAYERS {
            return Err(ConfigError::invalid(
                "draft_start",
                &self.draft_start.to_string(),
            ));
        }
        if usize::from(self.controlled_player) >= crate::domain::rules::PLAYERS {
            return Err(ConfigError::invalid(
                "controlled_player",
                &self.controlled_player.to_string(),
            ));
        }
        if self.match_threshold == 0 {
            return Err(ConfigError::invalid("match_threshold", "0"));
        }
        Ok(self)
    }
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::invalid(key, value))
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::invalid(key, value)),
    }
}
