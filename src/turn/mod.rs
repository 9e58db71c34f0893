//! Turn orchestration.
//!
//! - `schedule`: which player owns each dice slot, who starts each turn
//! - `manager`: [`TurnManager`], the per-turn state machine with the six
//!   and bonus rules

mod manager;
mod schedule;

pub use manager::{TurnManager, TurnPhase, TurnSummary, NULLIFYING_SIXES};
pub use schedule::{initiating_player, slot_owner, SLOTS_PER_TURN};
