use crate::config::GameConfig;
use crate::error::MoveError;

use super::{Board, Player};

/// Final result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Result of applying a single move.
///
/// `reward` is expressed from player two's perspective: +1 when player two
/// completed a winning line, -1 when player one did, 0 for a draw or any
/// non-terminal move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    pub reward: f64,
    pub terminal: bool,
}

/// The live game: board, player to move, and win condition.
///
/// Cloning produces a fully independent copy; search explores speculative
/// futures on clones without disturbing the real game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    connect_length: usize,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create a fresh game for the given configuration. Player one moves
    /// first.
    pub fn new(config: &GameConfig) -> Self {
        GameState {
            board: Board::new(config.rows, config.cols),
            current_player: Player::One,
            connect_length: config.connect_length,
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn connect_length(&self) -> usize {
        self.connect_length
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Columns that can still take a piece, in ascending order.
    ///
    /// Always derived from the board alone; empty only when the board is
    /// completely full.
    pub fn available_actions(&self) -> Vec<usize> {
        (0..self.board.cols())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// On failure the board and the player to move are left untouched.
    /// On success the win scan runs through the landed cell, a full board
    /// with no winner is a draw, and the turn passes to the other player.
    pub fn act(&mut self, column: usize) -> Result<Outcome, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mover = self.current_player;
        let row = self.board.drop_piece(column, mover.to_cell())?;

        let outcome = if self.board.check_win(row, column, self.connect_length) {
            self.outcome = Some(GameOutcome::Winner(mover));
            Outcome {
                reward: mover.win_reward(),
                terminal: true,
            }
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
            Outcome {
                reward: 0.0,
                terminal: true,
            }
        } else {
            Outcome {
                reward: 0.0,
                terminal: false,
            }
        };

        self.current_player = mover.other();
        Ok(outcome)
    }

    /// Exactly reverse the most recent successful `act()` on `column`: lift
    /// the dropped piece back out, hand the turn back, and clear any
    /// recorded outcome.
    ///
    /// Search explores futures with an act/retract pair over one scratch
    /// state instead of cloning at every node.
    pub(crate) fn retract(&mut self, column: usize) {
        self.board.lift_piece(column);
        self.current_player = self.current_player.other();
        self.outcome = None;
    }

    /// Clear the board and hand the first move back to player one. The
    /// configured dimensions and connect length survive.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = Player::One;
        self.outcome = None;
    }
}
