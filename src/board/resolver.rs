//! Applying one dice value to one token.
//!
//! A move is first planned against the unchanged board, then applied. The
//! plan is what token selectors use to look ahead, and planning is also
//! where every input is validated, so a rejected move never mutates.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::state::BoardState;
use crate::core::{LudoError, PlayerId, Position, Result, DIE_FACES, START_POS};

/// Result of resolving one move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Where the moving token ended up.
    pub position: Position,
    /// The move carried the token home.
    pub finished: bool,
    /// At least one opposing token was sent back to start.
    pub captured: bool,
}

/// A fully computed move that has not yet been applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovePlan {
    /// The moving player.
    pub player: PlayerId,
    /// The moving token.
    pub token: usize,
    /// Square before the move.
    pub from: Position,
    /// What the move will produce.
    pub outcome: MoveOutcome,
    /// Opposing tokens the move sends back to start.
    pub captures: SmallVec<[(PlayerId, usize); 4]>,
}

impl MovePlan {
    /// Whether the moving token changes square.
    #[must_use]
    pub fn moves(&self) -> bool {
        self.from != self.outcome.position
    }
}

/// Plan moving `player`'s `token` by `dice` squares without touching the
/// board.
///
/// `dice` may be 0 (a nullified roll). Rules:
/// - a token already home stays put and reports neither finish nor capture;
/// - reaching or passing the final square lands exactly on it and finishes,
///   with no capture check;
/// - otherwise every opposing token on the destination is captured unless
///   its owner is safe there. A roll of 0 keeps the token on its square but
///   still captures unguarded opponents sharing it.
pub fn plan_move(board: &BoardState, player: PlayerId, token: usize, dice: u8) -> Result<MovePlan> {
    if dice > DIE_FACES {
        return Err(LudoError::MoveOutOfRange(dice));
    }
    if !board.has_player(player) {
        return Err(LudoError::UnknownPlayer(player));
    }
    let from = board
        .position(player, token)
        .ok_or(LudoError::UnknownToken { player, token })?;
    let final_position = board.final_position();

    if from == final_position {
        return Ok(MovePlan {
            player,
            token,
            from,
            outcome: MoveOutcome {
                position: from,
                finished: false,
                captured: false,
            },
            captures: SmallVec::new(),
        });
    }

    let candidate = from.saturating_add(Position::from(dice));
    if candidate >= final_position {
        return Ok(MovePlan {
            player,
            token,
            from,
            outcome: MoveOutcome {
                position: final_position,
                finished: true,
                captured: false,
            },
            captures: SmallVec::new(),
        });
    }

    let mut captures = SmallVec::new();
    for opponent in PlayerId::all(board.player_count()).filter(|&p| p != player) {
        if board.is_safe(candidate, opponent) {
            continue;
        }
        for (index, &position) in board.positions(opponent).iter().enumerate() {
            if position == candidate {
                captures.push((opponent, index));
            }
        }
    }

    Ok(MovePlan {
        player,
        token,
        from,
        outcome: MoveOutcome {
            position: candidate,
            finished: false,
            captured: !captures.is_empty(),
        },
        captures,
    })
}

/// Move `player`'s `token` by `dice` squares, resolving captures in place.
///
/// See [`plan_move`] for the rules. Inputs are validated before the board
/// is modified.
pub fn move_token(
    board: &mut BoardState,
    player: PlayerId,
    token: usize,
    dice: u8,
) -> Result<MoveOutcome> {
    let plan = plan_move(board, player, token, dice)?;
    apply_plan(board, &plan);
    Ok(plan.outcome)
}

fn apply_plan(board: &mut BoardState, plan: &MovePlan) {
    for &(opponent, index) in &plan.captures {
        debug!(
            attacker = %plan.player,
            victim = %opponent,
            token = index,
            square = plan.outcome.position,
            "token captured"
        );
        board.set_position(opponent, index, START_POS);
    }
    board.set_position(plan.player, plan.token, plan.outcome.position);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TokenPositions;
    use crate::core::PlayerMap;
    use smallvec::smallvec;

    const P1: PlayerId = PlayerId::new(0);
    const P2: PlayerId = PlayerId::new(1);

    fn board_with(p1: TokenPositions, p2: TokenPositions) -> BoardState {
        let positions = PlayerMap::new(2, |p| if p == P1 { p1.clone() } else { p2.clone() });
        BoardState::from_positions(positions, 57, [1, 9, 14, 22, 27, 35, 40, 48]).unwrap()
    }

    #[test]
    fn test_simple_advance() {
        let mut board = BoardState::new(2, 2, 57, [1]);
        let outcome = move_token(&mut board, P1, 0, 6).unwrap();

        assert_eq!(
            outcome,
            MoveOutcome {
                position: 7,
                finished: false,
                captured: false
            }
        );
        assert_eq!(board.positions(P1), &[7, 1]);
    }

    #[test]
    fn test_zero_move_stays_put() {
        let mut board = board_with(smallvec![5, 1], smallvec![1, 1]);
        let outcome = move_token(&mut board, P1, 0, 0).unwrap();

        assert_eq!(outcome.position, 5);
        assert!(!outcome.finished && !outcome.captured);
        assert_eq!(board.positions(P1), &[5, 1]);
    }

    #[test]
    fn test_zero_move_captures_unguarded_cohabitant() {
        // P2 landed on P1's stack at 10 without capturing; P1's voided six
        // then resolves on that square.
        let mut board = board_with(smallvec![10, 10], smallvec![10, 1]);
        let outcome = move_token(&mut board, P1, 0, 0).unwrap();

        assert_eq!(outcome.position, 10);
        assert!(outcome.captured);
        assert!(!outcome.finished);
        assert_eq!(board.positions(P1), &[10, 10]);
        assert_eq!(board.positions(P2), &[START_POS, 1]);
    }

    #[test]
    fn test_zero_move_spares_cohabitant_on_safe_square() {
        let mut board = board_with(smallvec![9, 1], smallvec![9, 1]);
        let outcome = move_token(&mut board, P1, 0, 0).unwrap();

        assert!(!outcome.captured);
        assert_eq!(board.positions(P2), &[9, 1]);
    }

    #[test]
    fn test_move_near_max_square_finishes_without_overflow() {
        let positions = PlayerMap::new(2, |p| -> TokenPositions {
            if p == P1 {
                smallvec![Position::MAX - 2, 1]
            } else {
                smallvec![1, 1]
            }
        });
        let mut board = BoardState::from_positions(positions, Position::MAX, [START_POS]).unwrap();
        let outcome = move_token(&mut board, P1, 0, 6).unwrap();

        assert_eq!(outcome.position, Position::MAX);
        assert!(outcome.finished);
        assert_eq!(board.positions(P1), &[Position::MAX, 1]);
    }

    #[test]
    fn test_overshoot_clamps_to_final() {
        let mut board = board_with(smallvec![54, 1], smallvec![1, 1]);
        let outcome = move_token(&mut board, P1, 0, 6).unwrap();

        assert_eq!(outcome.position, 57);
        assert!(outcome.finished);
        assert_eq!(board.positions(P1), &[57, 1]);
    }

    #[test]
    fn test_exact_finish() {
        let mut board = board_with(smallvec![51, 1], smallvec![1, 1]);
        let outcome = move_token(&mut board, P1, 0, 6).unwrap();

        assert!(outcome.finished);
        assert_eq!(outcome.position, 57);
    }

    #[test]
    fn test_finished_token_is_noop() {
        let mut board = board_with(smallvec![57, 3], smallvec![1, 1]);
        let before = board.clone();
        let outcome = move_token(&mut board, P1, 0, 4).unwrap();

        assert_eq!(
            outcome,
            MoveOutcome {
                position: 57,
                finished: false,
                captured: false
            }
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_capture_sends_opponent_home() {
        let mut board = board_with(smallvec![5, 1], smallvec![10, 1]);
        let outcome = move_token(&mut board, P1, 0, 5).unwrap();

        assert!(outcome.captured);
        assert_eq!(board.positions(P1), &[10, 1]);
        assert_eq!(board.positions(P2), &[1, 1]);
    }

    #[test]
    fn test_no_capture_on_safe_square() {
        let mut board = board_with(smallvec![4, 1], smallvec![9, 2]);
        let outcome = move_token(&mut board, P1, 0, 5).unwrap();

        assert!(!outcome.captured);
        assert_eq!(board.positions(P2), &[9, 2]);
        assert_eq!(board.positions(P1), &[9, 1]);
    }

    #[test]
    fn test_no_capture_of_stacked_pair() {
        let mut board = board_with(smallvec![10, 10], smallvec![6, 1]);
        let outcome = move_token(&mut board, P2, 0, 4).unwrap();

        assert!(!outcome.captured);
        assert_eq!(board.positions(P1), &[10, 10]);
        assert_eq!(board.positions(P2), &[10, 1]);
    }

    #[test]
    fn test_finishing_move_never_captures() {
        let mut board = board_with(smallvec![56, 1], smallvec![53, 1]);
        let outcome = move_token(&mut board, P2, 0, 6).unwrap();

        assert!(outcome.finished);
        assert!(!outcome.captured);
        assert_eq!(board.positions(P1), &[56, 1]);
    }

    #[test]
    fn test_capture_of_every_token_when_unstacked() {
        // Three tokens, only one on the square: exactly that one goes back.
        let positions = PlayerMap::new(2, |p| -> TokenPositions {
            if p == P1 {
                smallvec![3, 1, 1]
            } else {
                smallvec![8, 8, 8]
            }
        });
        // A stack of three is protected.
        let mut board = BoardState::from_positions(positions, 57, [START_POS]).unwrap();
        assert!(!move_token(&mut board, P1, 0, 5).unwrap().captured);

        let positions = PlayerMap::new(2, |p| -> TokenPositions {
            if p == P1 {
                smallvec![3, 1, 1]
            } else {
                smallvec![8, 20, 30]
            }
        });
        let mut board = BoardState::from_positions(positions, 57, [START_POS]).unwrap();
        assert!(move_token(&mut board, P1, 0, 5).unwrap().captured);
        assert_eq!(board.positions(P2), &[1, 20, 30]);
    }

    #[test]
    fn test_invalid_inputs_leave_board_untouched() {
        let mut board = board_with(smallvec![5, 1], smallvec![1, 1]);
        let before = board.clone();

        assert!(matches!(
            move_token(&mut board, P1, 2, 3),
            Err(LudoError::UnknownToken { token: 2, .. })
        ));
        assert!(matches!(
            move_token(&mut board, PlayerId::new(4), 0, 3),
            Err(LudoError::UnknownPlayer(_))
        ));
        assert!(matches!(
            move_token(&mut board, P1, 0, 7),
            Err(LudoError::MoveOutOfRange(7))
        ));
        assert_eq!(board, before);
    }

    #[test]
    fn test_plan_does_not_mutate() {
        let board = board_with(smallvec![5, 1], smallvec![10, 1]);
        let plan = plan_move(&board, P1, 0, 5).unwrap();

        assert!(plan.moves());
        assert_eq!(plan.captures.as_slice(), &[(P2, 0)]);
        assert_eq!(board.positions(P2), &[10, 1]);
    }
}
