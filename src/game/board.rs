use std::fmt;

use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

impl Cell {
    fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::One => 'x',
            Cell::Two => 'o',
        }
    }
}

/// A `rows x cols` grid. Row 0 is the top, row `rows - 1` the bottom.
///
/// Cells are stored row-major in a single allocation, so cloning a board
/// never shares storage with the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.cols + col] = cell;
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn(col));
        }

        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull(col));
        }

        // Find the lowest empty row in this column
        for row in (0..self.rows).rev() {
            if self.get(row, col) == Cell::Empty {
                self.set(row, col, cell);
                return Ok(row);
            }
        }

        unreachable!("column should not be full if is_column_full returned false");
    }

    /// Remove the topmost piece from `col`, undoing a drop.
    ///
    /// Panics if the column is empty; callers only ever lift a piece they
    /// just dropped.
    pub(crate) fn lift_piece(&mut self, col: usize) {
        for row in 0..self.rows {
            if self.get(row, col) != Cell::Empty {
                self.set(row, col, Cell::Empty);
                return;
            }
        }
        unreachable!("no piece to lift from column {col}");
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.is_column_full(col))
    }

    /// Clear every cell without reallocating.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Check if the piece at (row, col) completes a run of length `n`.
    ///
    /// Only the four lines through the cell are scanned, walking outward in
    /// both directions along each line.
    pub fn check_win(&self, row: usize, col: usize, n: usize) -> bool {
        let cell = self.get(row, col);
        if cell == Cell::Empty {
            return false;
        }

        // horizontal, vertical, both diagonals
        const DIRECTIONS: [(i64, i64); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];
        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| self.run_length(row, col, dr, dc, cell) >= n)
    }

    /// Length of the same-owner run through (row, col) along (dr, dc).
    fn run_length(&self, row: usize, col: usize, dr: i64, dc: i64, cell: Cell) -> usize {
        let mut count = 1; // Count the current piece

        for sign in [1i64, -1] {
            let mut r = row as i64 + sign * dr;
            let mut c = col as i64 + sign * dc;
            while r >= 0
                && r < self.rows as i64
                && c >= 0
                && c < self.cols as i64
                && self.get(r as usize, c as usize) == cell
            {
                count += 1;
                r += sign * dr;
                c += sign * dc;
            }
        }

        count
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.get(row, col).glyph())?;
            }
            writeln!(f)?;
        }
        for col in 0..self.cols {
            if col > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", col % 10)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(3, 5);
        for row in 0..3 {
            for col in 0..5 {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_drop_piece_lands_bottom_up() {
        let mut board = Board::new(3, 5);

        let row = board.drop_piece(2, Cell::One).unwrap();
        assert_eq!(row, 2); // Should land at bottom
        assert_eq!(board.get(2, 2), Cell::One);

        let row = board.drop_piece(2, Cell::Two).unwrap();
        assert_eq!(row, 1); // Should land on top of first piece
        assert_eq!(board.get(1, 2), Cell::Two);

        let row = board.drop_piece(2, Cell::One).unwrap();
        assert_eq!(row, 0);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new(3, 5);

        for _ in 0..3 {
            board.drop_piece(0, Cell::One).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(
            board.drop_piece(0, Cell::Two),
            Err(MoveError::ColumnFull(0))
        );
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new(3, 5);
        assert_eq!(
            board.drop_piece(5, Cell::One),
            Err(MoveError::InvalidColumn(5))
        );
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(3, 5);
        for col in 0..5 {
            for _ in 0..3 {
                board.drop_piece(col, Cell::One).unwrap();
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_lift_piece_reverses_drop() {
        let mut board = Board::new(3, 5);
        board.drop_piece(2, Cell::One).unwrap();
        let before = board.clone();
        board.drop_piece(2, Cell::Two).unwrap();

        board.lift_piece(2);
        assert_eq!(board, before);
        assert_eq!(board.get(2, 2), Cell::One);
    }

    #[test]
    fn test_clear_empties_board() {
        let mut board = Board::new(3, 5);
        board.drop_piece(1, Cell::One).unwrap();
        board.drop_piece(4, Cell::Two).unwrap();

        board.clear();
        assert_eq!(board, Board::new(3, 5));
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new(3, 5);
        for col in 0..3 {
            board.drop_piece(col, Cell::One).unwrap();
        }
        assert!(board.check_win(2, 1, 3)); // Check middle of the line
        assert!(!board.check_win(2, 1, 4)); // Longer requirement not met
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new(4, 4);
        for _ in 0..3 {
            board.drop_piece(2, Cell::Two).unwrap();
        }
        assert!(board.check_win(1, 2, 3)); // Check the 3rd piece
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::new(3, 5);
        // Build a / diagonal for One with Two as filler
        board.drop_piece(0, Cell::One).unwrap();

        board.drop_piece(1, Cell::Two).unwrap();
        board.drop_piece(1, Cell::One).unwrap();

        board.drop_piece(2, Cell::Two).unwrap();
        board.drop_piece(2, Cell::Two).unwrap();
        let row = board.drop_piece(2, Cell::One).unwrap();

        assert!(board.check_win(row, 2, 3));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::new(3, 5);
        // Build a \ diagonal for One with Two as filler
        board.drop_piece(4, Cell::One).unwrap();

        board.drop_piece(3, Cell::Two).unwrap();
        board.drop_piece(3, Cell::One).unwrap();

        board.drop_piece(2, Cell::Two).unwrap();
        board.drop_piece(2, Cell::Two).unwrap();
        let row = board.drop_piece(2, Cell::One).unwrap();

        assert!(board.check_win(row, 2, 3));
    }

    #[test]
    fn test_no_win_with_shorter_run() {
        let mut board = Board::new(3, 5);
        for col in 0..2 {
            board.drop_piece(col, Cell::One).unwrap();
        }
        assert!(!board.check_win(2, 1, 3)); // Only 2 in a row
    }

    #[test]
    fn test_run_broken_by_opponent() {
        let mut board = Board::new(3, 5);
        board.drop_piece(0, Cell::One).unwrap();
        board.drop_piece(1, Cell::Two).unwrap();
        board.drop_piece(2, Cell::One).unwrap();
        board.drop_piece(3, Cell::One).unwrap();
        assert!(!board.check_win(2, 3, 3));
    }

    #[test]
    fn test_display_renders_grid() {
        let mut board = Board::new(2, 3);
        board.drop_piece(0, Cell::One).unwrap();
        board.drop_piece(1, Cell::Two).unwrap();

        assert_eq!(board.to_string(), ". . .\nx o .\n0 1 2");
    }
}
