use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::One => Cell::One,
            Player::Two => Cell::Two,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::One => "Player one",
            Player::Two => "Player two",
        }
    }

    /// Terminal reward produced when this player completes a winning line.
    ///
    /// Rewards are always expressed from player two's perspective: +1 when
    /// player two wins, -1 when player one wins.
    pub fn win_reward(self) -> f64 {
        match self {
            Player::One => -1.0,
            Player::Two => 1.0,
        }
    }
}
