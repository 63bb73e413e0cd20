//! Startup configuration.
//!
//! Everything is optional; an absent file or env var yields [`LineupConfig::default`].

use serde::{Deserialize, Serialize};
use std::{env, fs};

use crate::error::{LineupError, Result};

pub const CONFIG_PATH_ENV: &str = "LINEUP_CONFIG_PATH";

/// What the state starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedData {
    /// The bundled team roster and three sample games.
    #[default]
    Sample,
    /// No roster and no lineups: the "no lineups" fallback until one is created.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineupConfig {
    /// Prefix of generated lineup keys.
    pub key_prefix: String,
    pub seed: SeedData,
}

impl Default for LineupConfig {
    fn default() -> Self {
        Self { key_prefix: "lineup_".to_string(), seed: SeedData::Sample }
    }
}

impl LineupConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.key_prefix.trim().is_empty() {
            return Err(LineupError::Config("key_prefix must not be blank".to_string()));
        }
        if !self.key_prefix.chars().all(|c| c.is_ascii_graphic()) {
            return Err(LineupError::Config(format!(
                "key_prefix must be printable ASCII without spaces, got '{}'",
                self.key_prefix
            )));
        }
        Ok(())
    }
}

/// Load the config named by `LINEUP_CONFIG_PATH`, or defaults when unset/blank.
pub fn config_from_env() -> Result<LineupConfig> {
    let Ok(path) = env::var(CONFIG_PATH_ENV) else {
        return Ok(LineupConfig::default());
    };

    let path = path.trim();
    if path.is_empty() {
        return Ok(LineupConfig::default());
    }

    load_config(path)
}

pub fn load_config(path: &str) -> Result<LineupConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        LineupError::Config(format!("Failed to read config file '{path}': {e}"))
    })?;

    let config = LineupConfig::from_json(&content).map_err(|e| {
        LineupError::Config(format!("Failed to parse config JSON from '{path}': {e}"))
    })?;

    config.validate()?;
    log::debug!("loaded config from {path}: {:?}", config);
    Ok(config)
}
