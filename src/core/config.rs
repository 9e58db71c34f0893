//! Game configuration.
//!
//! `GameConfig` carries everything needed to set up one simulated game:
//! board length, safe squares, tokens per player, how many turns to play,
//! the dice seed and each player's token-selection strategy.
//!
//! Defaults reproduce the classic two-token, 57-square board.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::ConfigError;
use crate::selection::Strategy;

/// A square on the race track. Squares are numbered from [`START_POS`].
pub type Position = u32;

/// Square every token starts on and returns to when captured.
pub const START_POS: Position = 1;

/// Default home square.
pub const DEFAULT_FINAL_POS: Position = 57;

/// Default capture-immune squares.
pub const DEFAULT_SAFE_SQUARES: [Position; 8] = [1, 9, 14, 22, 27, 35, 40, 48];

/// The turn schedule is defined for this many players only.
pub const SUPPORTED_PLAYERS: usize = 2;

/// Default tokens per player.
pub const DEFAULT_TOKENS: usize = 2;

/// Default number of turns to simulate.
pub const DEFAULT_ROUNDS: u32 = 12;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players. Only [`SUPPORTED_PLAYERS`] is accepted.
    pub player_count: usize,

    /// Tokens per player (at least 1).
    pub tokens_per_player: usize,

    /// Home square; must lie beyond [`START_POS`].
    pub final_position: Position,

    /// Squares on which no token can be captured.
    pub safe_squares: FxHashSet<Position>,

    /// Number of turns to play. Zero yields an empty history.
    pub num_rounds: u32,

    /// Dice seed. `None` draws one from entropy.
    pub seed: Option<u64>,

    /// Token-selection strategy per player, in seat order.
    pub strategies: Vec<Strategy>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: SUPPORTED_PLAYERS,
            tokens_per_player: DEFAULT_TOKENS,
            final_position: DEFAULT_FINAL_POS,
            safe_squares: DEFAULT_SAFE_SQUARES.into_iter().collect(),
            num_rounds: DEFAULT_ROUNDS,
            seed: None,
            strategies: vec![Strategy::default(); SUPPORTED_PLAYERS],
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set tokens per player.
    #[must_use]
    pub fn with_tokens(mut self, tokens_per_player: usize) -> Self {
        self.tokens_per_player = tokens_per_player;
        self
    }

    /// Set the home square.
    #[must_use]
    pub fn with_final_position(mut self, final_position: Position) -> Self {
        self.final_position = final_position;
        self
    }

    /// Replace the safe-square set.
    #[must_use]
    pub fn with_safe_squares(mut self, squares: impl IntoIterator<Item = Position>) -> Self {
        self.safe_squares = squares.into_iter().collect();
        self
    }

    /// Set the number of turns to play.
    #[must_use]
    pub fn with_rounds(mut self, num_rounds: u32) -> Self {
        self.num_rounds = num_rounds;
        self
    }

    /// Fix the dice seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the per-player strategies (seat order).
    #[must_use]
    pub fn with_strategies(mut self, strategies: impl IntoIterator<Item = Strategy>) -> Self {
        self.strategies = strategies.into_iter().collect();
        self
    }

    /// Check the parameters before any state is built from them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_count != SUPPORTED_PLAYERS {
            return Err(ConfigError::PlayerCount {
                expected: SUPPORTED_PLAYERS,
                actual: self.player_count,
            });
        }
        if self.tokens_per_player == 0 {
            return Err(ConfigError::NoTokens);
        }
        if self.final_position <= START_POS {
            return Err(ConfigError::FinalPosition {
                final_position: self.final_position,
                start: START_POS,
            });
        }
        if self.strategies.len() != self.player_count {
            return Err(ConfigError::StrategyCount {
                expected: self.player_count,
                actual: self.strategies.len(),
            });
        }

        for &square in &self.safe_squares {
            if !(START_POS..=self.final_position).contains(&square) {
                warn!(square, final_position = self.final_position, "safe square lies off the board");
            }
        }

        Ok(())
    }
}
