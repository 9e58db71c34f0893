//! The race track and the rules for moving on it.
//!
//! - `state`: [`BoardState`], token positions plus safe-square and
//!   stack-immunity queries
//! - `resolver`: [`move_token`], advancing, finishing and capturing

mod resolver;
mod state;

pub use resolver::{move_token, plan_move, MoveOutcome, MovePlan};
pub use state::{BoardSnapshot, BoardState, TokenPositions};
