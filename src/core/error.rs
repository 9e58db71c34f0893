//! Error types surfaced by the engine.
//!
//! Every fallible operation validates its inputs before touching the board,
//! so an `Err` never leaves a game half-mutated.

use super::player::PlayerId;

/// Rejected game parameters.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("exactly {expected} players are supported, got {actual}")]
    PlayerCount { expected: usize, actual: usize },

    #[error("each player needs at least one token")]
    NoTokens,

    #[error("final position {final_position} must be greater than the start position {start}")]
    FinalPosition { final_position: u32, start: u32 },

    #[error("{expected} strategies are required, got {actual}")]
    StrategyCount { expected: usize, actual: usize },

    #[error("unknown strategy label `{0}`")]
    UnknownStrategy(String),
}

/// Errors surfaced by the simulation engine.
#[derive(Debug, thiserror::Error)]
pub enum LudoError {
    #[error("invalid game configuration: {0}")]
    Configuration(#[from] ConfigError),

    #[error("seed `{input}` is not an integer")]
    InvalidSeed { input: String },

    #[error("dice value {0} is outside 1..=6")]
    InvalidDice(u8),

    #[error("scripted dice need at least one value")]
    EmptyDiceScript,

    #[error("{0} is not seated in this game")]
    UnknownPlayer(PlayerId),

    #[error("{player} has no token {token}")]
    UnknownToken { player: PlayerId, token: usize },

    #[error("{player} has a token on square {position}, off the track")]
    PositionOffBoard { player: PlayerId, position: u32 },

    #[error("{player} has {actual} tokens, expected {expected}")]
    TokenCount {
        player: PlayerId,
        expected: usize,
        actual: usize,
    },

    #[error("cannot move a token by {0}")]
    MoveOutOfRange(u8),

    #[error("move log codec failed: {0}")]
    Codec(#[from] bincode::Error),

    #[error("move record {index} does not fit a board of {players} players with {tokens} tokens")]
    MalformedLog {
        index: usize,
        players: usize,
        tokens: usize,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LudoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_converts() {
        let err: LudoError = ConfigError::NoTokens.into();
        assert!(matches!(err, LudoError::Configuration(ConfigError::NoTokens)));
        assert_eq!(
            err.to_string(),
            "invalid game configuration: each player needs at least one token"
        );
    }

    #[test]
    fn test_messages_name_the_offender() {
        let err = LudoError::UnknownToken {
            player: PlayerId::new(1),
            token: 4,
        };
        assert_eq!(err.to_string(), "Player 2 has no token 4");

        let err = LudoError::InvalidSeed {
            input: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "seed `abc` is not an integer");
    }
}
