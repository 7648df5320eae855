use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, UnknownStrategy};
use crate::evaluator::Weights;
use crate::{DEFAULT_SIZE, WIN_LENGTH};

/// How the move selector scores candidates once no immediate win or block exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// One heuristic call per candidate, no lookahead
    Heuristic,
    /// Full minimax, every leaf worth 0
    Minimax,
    /// Minimax with alpha-beta pruning and differential heuristic leaves
    AlphaBeta,
}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "heuristic" => Ok(Strategy::Heuristic),
            "minimax" => Ok(Strategy::Minimax),
            "alphabeta" | "alpha-beta" => Ok(Strategy::AlphaBeta),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Heuristic => "heuristic",
            Strategy::Minimax => "minimax",
            Strategy::AlphaBeta => "alphabeta",
        };
        write!(f, "{}", name)
    }
}

/// Settings for the computer opponent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub strategy: Strategy,
    /// Search depth in plies, counting the candidate move itself
    pub depth: usize,
    pub blocking: bool,
    pub weights: Weights,
}

impl AiConfig {
    /// Single-ply blocking heuristic
    pub fn heuristic() -> Self {
        AiConfig {
            strategy: Strategy::Heuristic,
            depth: 1,
            blocking: true,
            weights: Weights::SIMPLE,
        }
    }

    pub fn alpha_beta(depth: usize) -> Self {
        AiConfig {
            strategy: Strategy::AlphaBeta,
            depth,
            blocking: false,
            weights: Weights::SIMPLE,
        }
    }

    pub fn minimax(depth: usize) -> Self {
        AiConfig {
            strategy: Strategy::Minimax,
            depth,
            blocking: false,
            weights: Weights::SIMPLE,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::Validation("ai.depth must be >= 1".into()));
        }
        if !self.weights.is_finite() {
            return Err(ConfigError::Validation(
                "ai.weights must all be finite".into(),
            ));
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::alpha_beta(4)
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board_size: usize,
    pub ai: AiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            board_size: DEFAULT_SIZE,
            ai: AiConfig::default(),
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
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < WIN_LENGTH {
            return Err(ConfigError::Validation(format!(
                "board_size must be >= {}",
                WIN_LENGTH
            )));
        }
        self.ai.validate()
    }

    /// Render the default configuration as TOML.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
