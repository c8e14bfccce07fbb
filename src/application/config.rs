use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{Algorithm, IterationCap, Mode};
use crate::error::ConfigError;

/// Options recognised when setting up a match.
///
/// `initial_density`, `board_extent` and `seed` only feed the random soup
/// helper; the engine itself reads `mode`, `iteration_cap` and `algorithm`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    pub mode: Mode,
    /// Steps before the match ends; -1 for no limit
    pub iteration_cap: i64,
    pub initial_density: f64,
    /// Half-width of the square filled by the random soup
    pub board_extent: i32,
    pub algorithm: Algorithm,
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            mode: Mode::SingleColor,
            iteration_cap: -1,
            initial_density: 0.3,
            board_extent: 32,
            algorithm: Algorithm::default(),
            seed: None,
        }
    }
}

impl MatchConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if IterationCap::from_config(self.iteration_cap).is_none() {
            return Err(ConfigError::Invalid(format!(
                "iteration_cap must be -1 or non-negative, got {}",
                self.iteration_cap
            )));
        }
        if !(0.0..=1.0).contains(&self.initial_density) {
            return Err(ConfigError::Invalid(format!(
                "initial_density must be within [0, 1], got {}",
                self.initial_density
            )));
        }
        if self.board_extent <= 0 {
            return Err(ConfigError::Invalid(format!(
                "board_extent must be positive, got {}",
                self.board_extent
            )));
        }
        Ok(())
    }

    /// Decoded iteration cap; out-of-range values fall back to unbounded
    pub fn cap(&self) -> IterationCap {
        IterationCap::from_config(self.iteration_cap).unwrap_or_default()
    }
}
