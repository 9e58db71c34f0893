//! The append-only move log.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::move_record::MoveRecord;
use crate::board::BoardSnapshot;
use crate::core::{LudoError, Result};

/// Chronological, append-only history of a game's moves.
///
/// Backed by `im::Vector`, so handing a copy to a caller is O(1) and later
/// appends never show up in copies already handed out. Only the turn engine
/// appends; everyone else gets read access.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLog {
    player_count: usize,
    tokens_per_player: usize,
    records: Vector<MoveRecord>,
}

impl MoveLog {
    /// Create an empty log for a board of the given shape.
    #[must_use]
    pub fn new(player_count: usize, tokens_per_player: usize) -> Self {
        Self {
            player_count,
            tokens_per_player,
            records: Vector::new(),
        }
    }

    pub(crate) fn append(&mut self, record: MoveRecord) {
        self.records.push_back(record);
    }

    /// Players on the logged board.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Tokens per player on the logged board.
    #[must_use]
    pub fn tokens_per_player(&self) -> usize {
        self.tokens_per_player
    }

    /// Number of recorded moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The `index`-th move, oldest first.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&MoveRecord> {
        self.records.get(index)
    }

    /// The most recent move.
    #[must_use]
    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    /// Iterate oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.records.iter()
    }

    /// Moves recorded during turn `turn`.
    pub fn turn(&self, turn: u32) -> impl Iterator<Item = &MoveRecord> {
        self.records.iter().filter(move |record| record.turn == turn)
    }

    /// Encode the log with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a log produced by [`MoveLog::to_bytes`].
    ///
    /// Every record must match the board shape the log declares, so the
    /// decoded log is safe to export.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let log: Self = bincode::deserialize(bytes)?;
        log.check_shape()?;
        Ok(log)
    }

    fn check_shape(&self) -> Result<()> {
        let fits = |snapshot: &BoardSnapshot| {
            snapshot.player_count() == self.player_count
                && snapshot.values().all(|tokens| tokens.len() == self.tokens_per_player)
        };

        for (index, record) in self.records.iter().enumerate() {
            if record.player.index() >= self.player_count
                || record.token >= self.tokens_per_player
                || !fits(&record.initial_positions)
                || !fits(&record.final_positions)
            {
                return Err(LudoError::MalformedLog {
                    index,
                    players: self.player_count,
                    tokens: self.tokens_per_player,
                });
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a MoveLog {
    type Item = &'a MoveRecord;
    type IntoIter = im::vector::Iter<'a, MoveRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
