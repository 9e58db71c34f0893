//! Dice: the only source of randomness in a game.
//!
//! The engine never touches a global generator. Each game owns one
//! [`DiceSource`], either a seeded [`GameRng`](crate::core::GameRng) or a
//! [`ScriptedDice`] replaying fixed rolls for tests and analysis.

mod seed;
mod source;

pub use seed::parse_seed;
pub use source::{DiceSource, ScriptedDice};
