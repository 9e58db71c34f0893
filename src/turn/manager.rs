//! One logical turn: three scheduled slots plus any bonus moves.
//!
//! ## Turn flow
//!
//! ```text
//! AwaitingTurn -> RollingDice -> AssigningMoveSlots
//!     -> (ResolvingMove -> BonusMove?) x3 -> TurnComplete
//! ```
//!
//! ## Six rules
//!
//! A running six count covers the three scheduled dice. The slot whose six
//! brings the count to three resolves as a move of 0: the token stays put,
//! though unguarded opponents sharing its square are still captured. A scheduled six, a finish or a
//! capture earns one bonus roll while the count is below three, but a bonus
//! six that would be the third six is dropped without a move. Bonus moves
//! never earn further bonuses.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::schedule::{slot_owner, SLOTS_PER_TURN};
use crate::board::{move_token, BoardState, MoveOutcome};
use crate::core::{LudoError, PlayerId, PlayerMap, Result, DIE_FACES};
use crate::dice::DiceSource;
use crate::record::{MoveLog, MoveRecord, SlotKind};
use crate::selection::TokenSelector;

/// Sixes within one turn's scheduled dice that void the last of them.
pub const NULLIFYING_SIXES: u8 = 3;

/// Where a turn currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    AwaitingTurn,
    RollingDice,
    AssigningMoveSlots,
    ResolvingMove,
    BonusMove,
    TurnComplete,
}

/// What happened during one turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnSummary {
    /// Turn number (starts at 1).
    pub turn: u32,
    /// Player owning slots 1 and 3.
    pub initiating_player: PlayerId,
    /// The three scheduled dice as rolled.
    pub dice: [u8; SLOTS_PER_TURN],
    /// Sixes among the scheduled dice.
    pub six_count: u8,
    /// Moves appended to the log (scheduled plus bonus).
    pub moves_recorded: usize,
    /// Bonus moves played.
    pub bonuses_played: usize,
    /// Bonus rolls dropped because they would have been a third six.
    pub bonuses_skipped: usize,
}

/// Runs turns against borrowed game parts.
///
/// The manager owns nothing: the board, dice, selectors and log all belong
/// to the caller, so any number of games can run side by side.
pub struct TurnManager<'a, D: DiceSource + ?Sized> {
    board: &'a mut BoardState,
    dice: &'a mut D,
    selectors: &'a PlayerMap<Box<dyn TokenSelector>>,
    log: &'a mut MoveLog,
    phase: TurnPhase,
}

impl<'a, D: DiceSource + ?Sized> TurnManager<'a, D> {
    /// Borrow the parts of a game.
    pub fn new(
        board: &'a mut BoardState,
        dice: &'a mut D,
        selectors: &'a PlayerMap<Box<dyn TokenSelector>>,
        log: &'a mut MoveLog,
    ) -> Self {
        Self {
            board,
            dice,
            selectors,
            log,
            phase: TurnPhase::AwaitingTurn,
        }
    }

    /// The phase the last turn stopped in.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Play turn number `turn`, started by `initiating_player`.
    pub fn play(&mut self, turn: u32, initiating_player: PlayerId) -> Result<TurnSummary> {
        if !self.board.has_player(initiating_player) {
            return Err(LudoError::UnknownPlayer(initiating_player));
        }
        self.enter(TurnPhase::AwaitingTurn);

        self.enter(TurnPhase::RollingDice);
        let mut dice = [0; SLOTS_PER_TURN];
        for value in &mut dice {
            *value = self.dice.roll();
        }

        self.enter(TurnPhase::AssigningMoveSlots);
        let player_count = self.board.player_count();
        let owners: [PlayerId; SLOTS_PER_TURN] =
            std::array::from_fn(|slot| slot_owner(slot, initiating_player, player_count));
        debug!(turn, initiator = %initiating_player, ?dice, "turn started");

        let mut summary = TurnSummary {
            turn,
            initiating_player,
            dice,
            six_count: 0,
            moves_recorded: 0,
            bonuses_played: 0,
            bonuses_skipped: 0,
        };

        for (slot, (&player, &value)) in owners.iter().zip(&dice).enumerate() {
            self.enter(TurnPhase::ResolvingMove);

            if value == DIE_FACES {
                summary.six_count += 1;
            }
            let effective = if value == DIE_FACES && summary.six_count == NULLIFYING_SIXES {
                debug!(turn, player = %player, "third six nullified");
                0
            } else {
                value
            };

            let kind = SlotKind::Scheduled { slot: slot as u8 };
            let outcome = self.resolve(turn, kind, player, value, effective)?;
            summary.moves_recorded += 1;

            let earned = value == DIE_FACES || outcome.finished || outcome.captured;
            if !earned || summary.six_count >= NULLIFYING_SIXES {
                continue;
            }

            self.enter(TurnPhase::BonusMove);
            let bonus = self.dice.roll();
            if bonus == DIE_FACES && summary.six_count == NULLIFYING_SIXES - 1 {
                debug!(turn, player = %player, "bonus six would be the third six, skipped");
                summary.bonuses_skipped += 1;
                continue;
            }

            let kind = SlotKind::Bonus {
                after_slot: slot as u8,
            };
            self.resolve(turn, kind, player, bonus, bonus)?;
            summary.moves_recorded += 1;
            summary.bonuses_played += 1;
        }

        self.enter(TurnPhase::TurnComplete);
        Ok(summary)
    }

    fn enter(&mut self, phase: TurnPhase) {
        trace!(from = ?self.phase, to = ?phase, "turn phase");
        self.phase = phase;
    }

    fn resolve(
        &mut self,
        turn: u32,
        slot: SlotKind,
        player: PlayerId,
        dice: u8,
        effective_dice: u8,
    ) -> Result<MoveOutcome> {
        let token = self.selectors[player].select(self.board, player, effective_dice);
        let initial_positions = self.board.snapshot();
        let outcome = move_token(self.board, player, token, effective_dice)?;

        debug!(
            turn,
            %slot,
            player = %player,
            token,
            dice,
            effective_dice,
            position = outcome.position,
            finished = outcome.finished,
            captured = outcome.captured,
            "move resolved"
        );

        self.log.append(MoveRecord {
            turn,
            slot,
            player,
            token,
            dice,
            effective_dice,
            outcome,
            initial_positions,
            final_positions: self.board.snapshot(),
        });
        Ok(outcome)
    }
}
