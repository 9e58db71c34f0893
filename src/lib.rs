//! # rust-ludo
//!
//! A seeded simulator for a two-player cross-and-circle race game
//! (Ludo family) that records every move for later analysis.
//!
//! ## Rules in brief
//!
//! - Every token starts on square 1 and races to the final square;
//!   overshooting simply lands on it.
//! - Each turn rolls three dice. The initiating player moves on the first
//!   and third, the opponent on the second. Initiators alternate.
//! - Landing on an opponent sends it back to the start, unless it stands on
//!   a safe square or on a stack of two or more of its owner's tokens.
//! - A six, a finish or a capture earns one bonus roll. The third six of a
//!   turn is void, and a bonus six that would be the third is dropped.
//!
//! ## Design Principles
//!
//! 1. **No globals**: a [`Game`] owns its board, dice and log, so games are
//!    independent and can run on separate threads.
//!
//! 2. **Injected randomness**: dice come from a [`DiceSource`]. A seed makes
//!    a whole history reproducible; [`ScriptedDice`] replays fixed rolls.
//!
//! 3. **Pluggable choices**: which token moves is a [`TokenSelector`],
//!    chosen per player through a [`Strategy`] label.
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration, errors
//! - `dice`: dice sources and seed parsing
//! - `board`: token positions, safety queries, move resolution
//! - `selection`: token-selection policies and strategy labels
//! - `turn`: the per-turn state machine and slot schedule
//! - `record`: move records, the move log and tabular export
//! - `game`: the game session tying it all together

pub mod board;
pub mod core;
pub mod dice;
pub mod game;
pub mod record;
pub mod selection;
pub mod turn;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameConfig, GameRng, LudoError, PlayerId, PlayerMap, Position, Result, START_POS,
};

pub use crate::dice::{parse_seed, DiceSource, ScriptedDice};

pub use crate::board::{move_token, BoardSnapshot, BoardState, MoveOutcome, TokenPositions};

pub use crate::selection::{Strategy, TokenSelector};

pub use crate::turn::{slot_owner, TurnManager, TurnPhase, TurnSummary};

pub use crate::record::{MoveLog, MoveRecord, MoveTable, SlotKind};

pub use crate::game::{create_game, Game};
