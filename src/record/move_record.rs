//! One atomic move and its tabular form.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{BoardSnapshot, MoveOutcome};
use crate::core::{PlayerId, Position};

/// Which part of a turn produced a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotKind {
    /// One of the three scheduled slots (0-based).
    Scheduled { slot: u8 },
    /// The bonus move earned by the scheduled slot `after_slot`.
    Bonus { after_slot: u8 },
}

impl SlotKind {
    /// Check whether this is a bonus move.
    #[must_use]
    pub fn is_bonus(self) -> bool {
        matches!(self, SlotKind::Bonus { .. })
    }
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotKind::Scheduled { slot } => write!(f, "slot {}", slot + 1),
            SlotKind::Bonus { after_slot } => write!(f, "bonus after slot {}", after_slot + 1),
        }
    }
}

/// An immutable record of one resolved move.
///
/// Holds full board snapshots before and after the move, so the whole game
/// can be reconstructed from the log alone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Turn number (starts at 1).
    pub turn: u32,

    /// Which slot of the turn this move filled.
    pub slot: SlotKind,

    /// The acting player.
    pub player: PlayerId,

    /// The acting token (0-based).
    pub token: usize,

    /// The die as rolled.
    pub dice: u8,

    /// The value actually applied (0 when a third six was nullified).
    pub effective_dice: u8,

    /// What the move produced.
    pub outcome: MoveOutcome,

    /// Every token's position before the move.
    pub initial_positions: BoardSnapshot,

    /// Every token's position after the move.
    pub final_positions: BoardSnapshot,
}

impl MoveRecord {
    /// The acting token numbered from 1, as move tables show it.
    #[must_use]
    pub fn token_number(&self) -> usize {
        self.token + 1
    }

    /// The acting token's square before and after the move.
    #[must_use]
    pub fn acting_positions(&self) -> (Position, Position) {
        (
            self.initial_positions[self.player][self.token],
            self.final_positions[self.player][self.token],
        )
    }

    /// Whether the acting token changed square.
    #[must_use]
    pub fn moved(&self) -> bool {
        let (from, to) = self.acting_positions();
        from != to
    }

    /// Column headers matching [`MoveRecord::to_row`].
    ///
    /// Order: every final position (player-major, then token), every
    /// initial position in the same order, then `WhichPlayer` and
    /// `WhichToken`. Players and tokens are numbered from 1.
    ///
    /// ```
    /// use rust_ludo::record::MoveRecord;
    ///
    /// let columns = MoveRecord::column_names(2, 1);
    /// assert_eq!(
    ///     columns,
    ///     ["P1_T1_Final", "P2_T1_Final", "P1_T1_Init", "P2_T1_Init", "WhichPlayer", "WhichToken"]
    /// );
    /// ```
    #[must_use]
    pub fn column_names(player_count: usize, tokens_per_player: usize) -> Vec<String> {
        let position_columns = |suffix: &str| {
            PlayerId::all(player_count)
                .flat_map(move |player| {
                    (1..=tokens_per_player)
                        .map(move |token| format!("P{}_T{}_{}", player.number(), token, suffix))
                })
                .collect::<Vec<_>>()
        };

        let mut columns = position_columns("Final");
        columns.extend(position_columns("Init"));
        columns.push("WhichPlayer".to_string());
        columns.push("WhichToken".to_string());
        columns
    }

    /// This move as one table row, in [`MoveRecord::column_names`] order.
    #[must_use]
    pub fn to_row(&self) -> Vec<u32> {
        let mut row: Vec<u32> = self.final_positions.values().flatten().copied().collect();
        row.extend(self.initial_positions.values().flatten().copied());
        row.push(self.player.number() as u32);
        row.push(self.token_number() as u32);
        row
    }
}
