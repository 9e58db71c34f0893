//! Core engine types: players, RNG, configuration, errors.
//!
//! Everything else in the crate builds on these.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{
    GameConfig, Position, DEFAULT_FINAL_POS, DEFAULT_ROUNDS, DEFAULT_SAFE_SQUARES, DEFAULT_TOKENS,
    START_POS, SUPPORTED_PLAYERS,
};
pub use error::{ConfigError, LudoError, Result};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, DIE_FACES};
