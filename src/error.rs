use std::path::PathBuf;

/// Errors raised when a move cannot be applied to the game.
///
/// A rejected move never mutates the board or the player to move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameOver,
}

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

/// Errors a move provider can raise while producing a move.
///
/// Only the interactive provider can fail; the search and random providers
/// are infallible given a state with at least one available column.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(
            MoveError::InvalidColumn(9).to_string(),
            "column 9 is out of range"
        );
        assert_eq!(MoveError::ColumnFull(3).to_string(), "column 3 is full");
        assert_eq!(MoveError::GameOver.to_string(), "the game is already over");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("game.rows must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: game.rows must be > 0"
        );
    }

    #[test]
    fn test_agent_error_display() {
        let err = AgentError::Io(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "input stream closed",
        ));
        assert_eq!(err.to_string(), "I/O error: input stream closed");
    }
}
