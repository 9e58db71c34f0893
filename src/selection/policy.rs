//! Token-selection policies.
//!
//! Policies are trait-based so games can plug in their own:
//! - `Greedy`: first token not yet home (the classic rule)
//! - `Aggressive`: capture if possible, otherwise push the leader
//! - `Responsible`: finish or reach safety if possible, otherwise greedy

use std::fmt::Debug;

use crate::board::{plan_move, BoardState, MovePlan};
use crate::core::PlayerId;

/// Chooses which of a player's tokens a dice value is applied to.
///
/// `dice` is the effective value the move will use (0 for a nullified
/// roll). The returned index must name one of the player's tokens; if all
/// tokens are home any index works since the move is a no-op.
pub trait TokenSelector: Debug + Send + Sync {
    /// Pick a token index for `player`.
    fn select(&self, board: &BoardState, player: PlayerId, dice: u8) -> usize;
}

/// Always moves the first token (by index) that is not home.
///
/// Falls back to token 0 when every token is home.
#[derive(Clone, Copy, Debug, Default)]
pub struct Greedy;

impl TokenSelector for Greedy {
    fn select(&self, board: &BoardState, player: PlayerId, _dice: u8) -> usize {
        first_open_token(board, player).unwrap_or(0)
    }
}

/// Prefers a move that captures; otherwise advances the leading token.
#[derive(Clone, Copy, Debug, Default)]
pub struct Aggressive;

impl TokenSelector for Aggressive {
    fn select(&self, board: &BoardState, player: PlayerId, dice: u8) -> usize {
        let plans = open_plans(board, player, dice);

        if let Some(plan) = plans.iter().find(|plan| plan.outcome.captured) {
            return plan.token;
        }

        // Ties go to the lower index so the choice stays deterministic.
        plans
            .iter()
            .max_by(|a, b| a.from.cmp(&b.from).then(b.token.cmp(&a.token)))
            .map_or(0, |plan| plan.token)
    }
}

/// Prefers finishing, then landing where the token cannot be captured.
///
/// A landing is safe on a safe square or on a square the player already
/// occupies (the move forms a stack).
#[derive(Clone, Copy, Debug, Default)]
pub struct Responsible;

impl TokenSelector for Responsible {
    fn select(&self, board: &BoardState, player: PlayerId, dice: u8) -> usize {
        let plans = open_plans(board, player, dice);

        if let Some(plan) = plans.iter().find(|plan| plan.outcome.finished) {
            return plan.token;
        }

        let lands_safely = |plan: &&MovePlan| {
            let square = plan.outcome.position;
            plan.moves()
                && (board.safe_squares().contains(&square) || board.tokens_at(square, player) > 0)
        };
        if let Some(plan) = plans.iter().find(lands_safely) {
            return plan.token;
        }

        Greedy.select(board, player, dice)
    }
}

fn first_open_token(board: &BoardState, player: PlayerId) -> Option<usize> {
    (0..board.tokens_per_player()).find(|&token| !board.is_finished(player, token))
}

/// Plans for every token of `player` that is not home, in index order.
fn open_plans(board: &BoardState, player: PlayerId, dice: u8) -> Vec<MovePlan> {
    (0..board.tokens_per_player())
        .filter(|&token| !board.is_finished(player, token))
        .filter_map(|token| plan_move(board, player, token, dice).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TokenPositions;
    use crate::core::PlayerMap;
    use smallvec::smallvec;

    const P1: PlayerId = PlayerId::new(0);

    fn board_with(p1: TokenPositions, p2: TokenPositions) -> BoardState {
        let positions = PlayerMap::new(2, |p| if p == P1 { p1.clone() } else { p2.clone() });
        BoardState::from_positions(positions, 57, [1, 9, 14, 22, 27, 35, 40, 48]).unwrap()
    }

    #[test]
    fn test_greedy_picks_first_open_token() {
        let board = board_with(smallvec![5, 3, 1], smallvec![1, 1, 1]);
        assert_eq!(Greedy.select(&board, P1, 4), 0);

        let board = board_with(smallvec![57, 3, 1], smallvec![1, 1, 1]);
        assert_eq!(Greedy.select(&board, P1, 4), 1);

        let board = board_with(smallvec![57, 57, 12], smallvec![1, 1, 1]);
        assert_eq!(Greedy.select(&board, P1, 4), 2);
    }

    #[test]
    fn test_greedy_all_home_returns_zero() {
        let board = board_with(smallvec![57, 57], smallvec![1, 1]);
        assert_eq!(Greedy.select(&board, P1, 6), 0);
    }

    #[test]
    fn test_aggressive_prefers_capture() {
        // Token 1 at 7 + 3 lands on the opponent at 10.
        let board = board_with(smallvec![20, 7], smallvec![10, 1]);
        assert_eq!(Aggressive.select(&board, P1, 3), 1);
    }

    #[test]
    fn test_aggressive_otherwise_pushes_leader() {
        let board = board_with(smallvec![5, 30, 30], smallvec![1, 1, 1]);
        assert_eq!(Aggressive.select(&board, P1, 2), 1);

        let board = board_with(smallvec![57, 57], smallvec![1, 1]);
        assert_eq!(Aggressive.select(&board, P1, 2), 0);
    }

    #[test]
    fn test_responsible_prefers_finishing() {
        let board = board_with(smallvec![5, 53], smallvec![1, 1]);
        assert_eq!(Responsible.select(&board, P1, 5), 1);
    }

    #[test]
    fn test_responsible_seeks_safety() {
        // 5 + 4 = 9 is a safe square; 11 + 4 = 15 is not.
        let board = board_with(smallvec![11, 5], smallvec![1, 1]);
        assert_eq!(Responsible.select(&board, P1, 4), 1);

        // 16 + 4 joins the token on 20, forming a stack.
        let board = board_with(smallvec![11, 16, 20], smallvec![1, 1, 1]);
        assert_eq!(Responsible.select(&board, P1, 4), 1);
    }

    #[test]
    fn test_responsible_falls_back_to_greedy() {
        let board = board_with(smallvec![11, 16], smallvec![1, 1]);
        assert_eq!(Responsible.select(&board, P1, 1), 0);
    }
}
