//! Game construction and the round loop.

use std::fmt;

use tracing::{debug, info};

use crate::board::{BoardSnapshot, BoardState};
use crate::core::{GameConfig, GameRng, LudoError, PlayerId, PlayerMap, Result};
use crate::dice::DiceSource;
use crate::record::MoveLog;
use crate::selection::TokenSelector;
use crate::turn::{initiating_player, TurnManager, TurnSummary};

/// One simulated game and everything it owns.
pub struct Game {
    config: GameConfig,
    board: BoardState,
    dice: Box<dyn DiceSource + Send>,
    seed: Option<u64>,
    selectors: PlayerMap<Box<dyn TokenSelector>>,
    log: MoveLog,
    turns_played: u32,
}

/// Create a game from `config` with seeded dice.
///
/// Same as [`Game::new`].
pub fn create_game(config: GameConfig) -> Result<Game> {
    Game::new(config)
}

impl Game {
    /// Create a game whose dice come from `config.seed`, or from entropy if
    /// no seed is set. The seed actually used is available from
    /// [`Game::seed`] either way.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let seed = rng.seed();
        debug!(seed, seeded = config.seed.is_some(), "dice ready");

        let mut game = Self::assemble(config, Box::new(rng));
        game.seed = Some(seed);
        Ok(game)
    }

    /// Create a game that draws from `dice` instead of a seeded RNG.
    pub fn with_dice(config: GameConfig, dice: impl DiceSource + Send + 'static) -> Result<Self> {
        config.validate()?;
        Ok(Self::assemble(config, Box::new(dice)))
    }

    fn assemble(config: GameConfig, dice: Box<dyn DiceSource + Send>) -> Self {
        let strategies = &config.strategies;
        let selectors = PlayerMap::new(config.player_count, |player| {
            strategies[player.index()].selector()
        });

        Self {
            board: BoardState::from_config(&config),
            log: MoveLog::new(config.player_count, config.tokens_per_player),
            dice,
            seed: None,
            selectors,
            turns_played: 0,
            config,
        }
    }

    /// Replace one player's token selector.
    pub fn with_selector(
        mut self,
        player: PlayerId,
        selector: Box<dyn TokenSelector>,
    ) -> Result<Self> {
        if !self.selectors.contains(player) {
            return Err(LudoError::UnknownPlayer(player));
        }
        self.selectors[player] = selector;
        Ok(self)
    }

    /// The configuration this game was built from.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The RNG seed, if the dice are seeded.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// The live board.
    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Every player's token positions right now.
    #[must_use]
    pub fn current_positions(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    /// Moves recorded so far.
    #[must_use]
    pub fn history(&self) -> &MoveLog {
        &self.log
    }

    /// Turns completed so far.
    #[must_use]
    pub fn turns_played(&self) -> u32 {
        self.turns_played
    }

    /// Check whether every configured turn has been played.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.turns_played >= self.config.num_rounds
    }

    /// Players with every token home. Reaching this does not end the game.
    #[must_use]
    pub fn finished_players(&self) -> Vec<PlayerId> {
        PlayerId::all(self.board.player_count())
            .filter(|&player| self.board.all_finished(player))
            .collect()
    }

    /// Play the next turn, or return `None` once all turns are played.
    ///
    /// A turn is atomic: if it fails, the board and log are restored to how
    /// they were before it started.
    pub fn play_turn(&mut self) -> Result<Option<TurnSummary>> {
        if self.is_complete() {
            return Ok(None);
        }

        let turn = self.turns_played + 1;
        let initiator = initiating_player(turn, self.board.player_count());
        let board_before = self.board.clone();
        let log_before = self.log.clone();

        let result = TurnManager::new(&mut self.board, &mut self.dice, &self.selectors, &mut self.log)
            .play(turn, initiator);

        match result {
            Ok(summary) => {
                self.turns_played = turn;
                Ok(Some(summary))
            }
            Err(err) => {
                self.board = board_before;
                self.log = log_before;
                Err(err)
            }
        }
    }

    /// Play every remaining turn and return the full history.
    pub fn run(&mut self) -> Result<MoveLog> {
        while self.play_turn()?.is_some() {}

        info!(
            turns = self.turns_played,
            moves = self.log.len(),
            finished = ?self.finished_players(),
            "game complete"
        );
        Ok(self.log.clone())
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("config", &self.config)
            .field("seed", &self.seed)
            .field("board", &self.board)
            .field("turns_played", &self.turns_played)
            .field("moves", &self.log.len())
            .finish_non_exhaustive()
    }
}
