use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use reversi::{Behaviour, Board, BoardConfig};

use crate::error::ConfigError;
use crate::greedy::RateWeights;
use crate::{bot, BotLevel};

/// Top-level game configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub opponent: BotLevel,
    pub board: BoardConfig,
    pub greedy: RateWeights,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            opponent: BotLevel::Easy,
            board: BoardConfig::default(),
            greedy: RateWeights::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.size < 2 {
            return Err(ConfigError::Validation("board.size must be >= 2".into()));
        }
        for (name, value) in self.greedy.entries() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Validation(format!(
                    "greedy.{name} must be a finite number >= 0"
                )));
            }
        }
        Ok(())
    }

    /// Board in its starting position
    pub fn build_board(&self) -> Result<Board, ConfigError> {
        Ok(self.board.build()?)
    }

    /// Computer opponent at the configured level
    pub fn opponent_behaviour(&self) -> Box<dyn Behaviour> {
        bot(self.opponent, self.greedy)
    }
}
