//! Token positions and capture-immunity queries.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{
    ConfigError, GameConfig, LudoError, PlayerId, PlayerMap, Position, Result, START_POS,
};

/// One player's token positions, indexed by token.
///
/// SmallVec keeps the common 2-4 token case inline.
pub type TokenPositions = SmallVec<[Position; 4]>;

/// Every player's token positions at one instant.
pub type BoardSnapshot = PlayerMap<TokenPositions>;

/// The race track: where every token stands and which squares are safe.
///
/// Token order is fixed at creation; an index always names the same token.
/// Only the move resolver writes positions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    positions: BoardSnapshot,
    safe_squares: FxHashSet<Position>,
    final_position: Position,
}

impl BoardState {
    /// Create a board with every token on [`START_POS`].
    #[must_use]
    pub fn new(
        player_count: usize,
        tokens_per_player: usize,
        final_position: Position,
        safe_squares: impl IntoIterator<Item = Position>,
    ) -> Self {
        let start: TokenPositions = SmallVec::from_elem(START_POS, tokens_per_player);
        Self {
            positions: PlayerMap::with_value(player_count, start),
            safe_squares: safe_squares.into_iter().collect(),
            final_position,
        }
    }

    /// Create the starting board for a validated configuration.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.player_count,
            config.tokens_per_player,
            config.final_position,
            config.safe_squares.iter().copied(),
        )
    }

    /// Create a board from explicit positions, e.g. to set up a scenario.
    ///
    /// The final square must lie beyond [`START_POS`], every player must
    /// have the same token count and every position must lie on the track.
    pub fn from_positions(
        positions: BoardSnapshot,
        final_position: Position,
        safe_squares: impl IntoIterator<Item = Position>,
    ) -> Result<Self> {
        if final_position <= START_POS {
            return Err(ConfigError::FinalPosition {
                final_position,
                start: START_POS,
            }
            .into());
        }
        let tokens = positions.get(PlayerId::new(0)).len();

        for (player, tokens_of_player) in positions.iter() {
            if tokens_of_player.len() != tokens {
                return Err(LudoError::TokenCount {
                    player,
                    expected: tokens,
                    actual: tokens_of_player.len(),
                });
            }
            if let Some(&position) = tokens_of_player
                .iter()
                .find(|&&p| !(START_POS..=final_position).contains(&p))
            {
                return Err(LudoError::PositionOffBoard { player, position });
            }
        }

        Ok(Self {
            positions,
            safe_squares: safe_squares.into_iter().collect(),
            final_position,
        })
    }

    /// Number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.positions.player_count()
    }

    /// Tokens each player owns.
    #[must_use]
    pub fn tokens_per_player(&self) -> usize {
        self.positions.get(PlayerId::new(0)).len()
    }

    /// The home square.
    #[must_use]
    pub fn final_position(&self) -> Position {
        self.final_position
    }

    /// The configured safe squares.
    #[must_use]
    pub fn safe_squares(&self) -> &FxHashSet<Position> {
        &self.safe_squares
    }

    /// Check whether `player` is seated on this board.
    #[must_use]
    pub fn has_player(&self, player: PlayerId) -> bool {
        self.positions.contains(player)
    }

    /// A player's token positions in token order.
    #[must_use]
    pub fn positions(&self, player: PlayerId) -> &[Position] {
        &self.positions[player]
    }

    /// Position of one token, or `None` if it does not exist.
    #[must_use]
    pub fn position(&self, player: PlayerId, token: usize) -> Option<Position> {
        if !self.has_player(player) {
            return None;
        }
        self.positions[player].get(token).copied()
    }

    /// Check whether a token has reached home.
    #[must_use]
    pub fn is_finished(&self, player: PlayerId, token: usize) -> bool {
        self.position(player, token) == Some(self.final_position)
    }

    /// Count a player's tokens at home.
    #[must_use]
    pub fn finished_count(&self, player: PlayerId) -> usize {
        self.positions[player]
            .iter()
            .filter(|&&p| p == self.final_position)
            .count()
    }

    /// Check whether every token of `player` is home.
    #[must_use]
    pub fn all_finished(&self, player: PlayerId) -> bool {
        self.finished_count(player) == self.tokens_per_player()
    }

    /// Count `player`'s tokens on `position`.
    #[must_use]
    pub fn tokens_at(&self, position: Position, player: PlayerId) -> usize {
        self.positions[player]
            .iter()
            .filter(|&&p| p == position)
            .count()
    }

    /// Whether `player`'s tokens on `position` are immune to capture.
    ///
    /// True on a safe square, or when the player already stacks two or more
    /// of its own tokens there.
    #[must_use]
    pub fn is_safe(&self, position: Position, player: PlayerId) -> bool {
        self.safe_squares.contains(&position) || self.tokens_at(position, player) > 1
    }

    /// Copy every player's positions.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        self.positions.clone()
    }

    pub(crate) fn set_position(&mut self, player: PlayerId, token: usize, position: Position) {
        self.positions[player][token] = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn board_with(p1: TokenPositions, p2: TokenPositions) -> BoardState {
        let positions = PlayerMap::new(2, |p| if p.index() == 0 { p1.clone() } else { p2.clone() });
        BoardState::from_positions(positions, 57, [1, 9, 14]).unwrap()
    }

    #[test]
    fn test_new_board_starts_everyone_at_start() {
        let board = BoardState::new(2, 3, 57, [1, 9]);

        assert_eq!(board.player_count(), 2);
        assert_eq!(board.tokens_per_player(), 3);
        for player in PlayerId::all(2) {
            assert_eq!(board.positions(player), &[START_POS; 3]);
        }
    }

    #[test]
    fn test_safe_square_is_safe_for_anyone() {
        let board = BoardState::new(2, 2, 57, [9]);

        assert!(board.is_safe(9, PlayerId::new(0)));
        assert!(board.is_safe(9, PlayerId::new(1)));
        assert!(!board.is_safe(10, PlayerId::new(0)));
    }

    #[test]
    fn test_stack_of_two_is_safe() {
        let board = board_with(smallvec![10, 10], smallvec![10, 12]);

        assert!(board.is_safe(10, PlayerId::new(0)));
        // One token of player 2 there is not a stack.
        assert!(!board.is_safe(10, PlayerId::new(1)));
        assert!(!board.is_safe(12, PlayerId::new(1)));
    }

    #[test]
    fn test_finished_queries() {
        let board = board_with(smallvec![57, 20], smallvec![57, 57]);

        assert!(board.is_finished(PlayerId::new(0), 0));
        assert!(!board.is_finished(PlayerId::new(0), 1));
        assert_eq!(board.finished_count(PlayerId::new(0)), 1);
        assert!(!board.all_finished(PlayerId::new(0)));
        assert!(board.all_finished(PlayerId::new(1)));
    }

    #[test]
    fn test_position_lookup_out_of_range() {
        let board = BoardState::new(2, 2, 57, [START_POS]);

        assert_eq!(board.position(PlayerId::new(0), 1), Some(1));
        assert_eq!(board.position(PlayerId::new(0), 2), None);
        assert_eq!(board.position(PlayerId::new(5), 0), None);
    }

    #[test]
    fn test_from_positions_validates() {
        let off_board = PlayerMap::new(2, |_| -> TokenPositions { smallvec![1, 58] });
        assert!(matches!(
            BoardState::from_positions(off_board, 57, [START_POS]),
            Err(LudoError::PositionOffBoard { position: 58, .. })
        ));

        let ragged = PlayerMap::new(2, |p| -> TokenPositions {
            if p.index() == 0 {
                smallvec![1, 2]
            } else {
                smallvec![1]
            }
        });
        assert!(matches!(
            BoardState::from_positions(ragged, 57, [START_POS]),
            Err(LudoError::TokenCount { expected: 2, actual: 1, .. })
        ));
    }

    #[test]
    fn test_from_positions_rejects_track_without_length() {
        for final_position in [0, START_POS] {
            let positions = PlayerMap::new(2, |_| -> TokenPositions { smallvec![1, 1] });
            assert!(matches!(
                BoardState::from_positions(positions, final_position, [START_POS]),
                Err(LudoError::Configuration(ConfigError::FinalPosition { .. }))
            ));
        }
    }
}
