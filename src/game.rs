//! Game flow on top of the rules: outcome detection, a small state machine
//! and pluggable move pickers.
//!
//! # Example
//! ```
//! use chess_rules::game::{Game, GameState, PickFirst, PickRandom};
//!
//! let mut game = Game::new();
//! let mut white = PickFirst;
//! let mut black = PickRandom::seeded(7);
//! let status = game.play_to_end(&mut white, &mut black, 40).unwrap();
//! assert!(game.state() == GameState::Finished || game.state() == GameState::Running);
//! assert_eq!(status, game.board().status());
//! ```

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, GameError, Move};

/// Halfmove clock value that has to be exceeded to end the game
const FIFTY_MOVE_LIMIT: u32 = 50;

/// Outcome of a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    FiftyMoveRule,
}

impl Board {
    /// Outcome of the position for the side to move.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        let in_check = self.is_check();
        let no_moves = self.valid_moves(false).is_empty();
        if no_moves && in_check {
            GameStatus::Checkmate {
                winner: self.side_to_move().opponent(),
            }
        } else if no_moves {
            GameStatus::Stalemate
        } else if self.halfmove_clock() > FIFTY_MOVE_LIMIT {
            GameStatus::FiftyMoveRule
        } else {
            GameStatus::Ongoing
        }
    }

    /// Whether the game has ended by mate, stalemate or the fifty-move rule.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status() != GameStatus::Ongoing
    }
}

/// Lifecycle of a [`Game`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameState {
    #[default]
    Idle,
    Running,
    Finished,
}

/// Chooses one move from the valid moves of a position.
pub trait MovePicker {
    /// Short name for log output
    fn name(&self) -> &str;

    /// Pick one of `moves`, which are the valid moves of `board`.
    fn pick(&mut self, board: &Board, moves: &[Move]) -> Option<Move>;
}

/// Always plays the first valid move.
#[derive(Clone, Copy, Debug, Default)]
pub struct PickFirst;

impl MovePicker for PickFirst {
    fn name(&self) -> &str {
        "first"
    }

    fn pick(&mut self, _board: &Board, moves: &[Move]) -> Option<Move> {
        moves.first().copied()
    }
}

/// Plays a uniformly random valid move.
#[derive(Clone, Debug)]
pub struct PickRandom {
    rng: StdRng,
}

impl PickRandom {
    /// Reproducible picker
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        PickRandom {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Picker seeded from the operating system
    #[must_use]
    pub fn from_entropy() -> Self {
        PickRandom {
            rng: StdRng::from_entropy(),
        }
    }
}

impl MovePicker for PickRandom {
    fn name(&self) -> &str {
        "random"
    }

    fn pick(&mut self, _board: &Board, moves: &[Move]) -> Option<Move> {
        moves.choose(&mut self.rng).copied()
    }
}

/// Plays the move with the best material balance one ply ahead.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaterialGreedy;

impl MovePicker for MaterialGreedy {
    fn name(&self) -> &str {
        "material"
    }

    fn pick(&mut self, board: &Board, _moves: &[Move]) -> Option<Move> {
        board.best_move_one_ply()
    }
}

/// A board driven through `Idle -> Running -> Finished`.
#[derive(Clone, Debug, Default)]
pub struct Game {
    board: Board,
    state: GameState,
}

impl Game {
    /// Idle game on the standard initial position.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Idle game on an arbitrary position.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        Game {
            board,
            state: GameState::Idle,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Outcome of the current position.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    /// Move from `Idle` to `Running`, or straight to `Finished` when the
    /// position is already decided. Does nothing in any other state.
    pub fn start(&mut self) {
        if self.state != GameState::Idle {
            rules_warn!("start ignored, game is {:?}", self.state);
            return;
        }
        self.state = GameState::Running;
        self.finish_if_over();
    }

    /// Play `mv` for `color`.
    ///
    /// Accepted only while running, for the side to move, and when `mv`
    /// matches one of the valid moves (annotations are ignored).
    pub fn try_move(&mut self, color: Color, mv: Move) -> Result<(), GameError> {
        if self.state != GameState::Running {
            return Err(GameError::NotRunning);
        }
        if color != self.board.side_to_move() {
            return Err(GameError::NotYourTurn { color });
        }

        let wanted = mv.without_annotations();
        let chosen = self
            .board
            .valid_moves(false)
            .into_iter()
            .find(|candidate| candidate.without_annotations() == wanted)
            .ok_or(GameError::NotAValidMove { mv })?;

        self.board.apply_move(&chosen)?;
        self.finish_if_over();
        Ok(())
    }

    /// Let two pickers play until the game ends or `max_plies` moves were made.
    ///
    /// Starts the game when it is still idle. Returns the status of the final
    /// position.
    pub fn play_to_end(
        &mut self,
        white: &mut dyn MovePicker,
        black: &mut dyn MovePicker,
        max_plies: usize,
    ) -> Result<GameStatus, GameError> {
        if self.state == GameState::Idle {
            self.start();
        }

        let mut plies = 0;
        while self.state == GameState::Running && plies < max_plies {
            let color = self.board.side_to_move();
            let moves = self.board.valid_moves(false);
            let (picked, name) = match color {
                Color::White => (white.pick(&self.board, &moves), white.name()),
                Color::Black => (black.pick(&self.board, &moves), black.name()),
            };
            let mv = picked.ok_or(GameError::NoMovePicked { color })?;
            rules_debug!("{color} ({name}) plays {mv}");
            self.try_move(color, mv)?;
            plies += 1;
        }

        Ok(self.status())
    }

    fn finish_if_over(&mut self) {
        let status = self.board.status();
        if status != GameStatus::Ongoing {
            rules_info!("game over: {status:?} at {}", self.board.to_fen_full());
            self.state = GameState::Finished;
        }
    }
}
