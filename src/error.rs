use std::path::PathBuf;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// A strategy name that is not one of the supported search strategies.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy '{0}', expected one of: heuristic, minimax, alphabeta")]
pub struct UnknownStrategy(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("ai.depth must be >= 1".to_string());
        assert_eq!(err.to_string(), "config validation error: ai.depth must be >= 1");
    }

    #[test]
    fn test_unknown_strategy_display() {
        let err = UnknownStrategy("negamax".to_string());
        assert_eq!(
            err.to_string(),
            "unknown strategy 'negamax', expected one of: heuristic, minimax, alphabeta"
        );
    }
}
