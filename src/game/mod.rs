//! Core Connect-N game logic: board representation, player types, and the
//! game state machine with gravity-drop moves.

mod board;
mod player;
mod state;

pub use board::{Board, Cell};
pub use player::Player;
pub use state::{GameOutcome, GameState, Outcome};
