//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::types::{BOARD_SIZE, Cell};
use tracing::instrument;

/// Checks if every cell is occupied.
///
/// Returns `false` for a slice that is not exactly 9 cells.
#[instrument(level = "trace", skip(cells))]
pub fn is_full(cells: &[Cell]) -> bool {
    cells.len() == BOARD_SIZE && cells.iter().all(|c| !c.is_empty())
}

/// A full board with no winner.
#[instrument(level = "trace", skip(cells))]
pub fn is_draw(cells: &[Cell]) -> bool {
    is_full(cells) && check_winner(cells).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Mark};

    const X: Cell = Cell::Marked(Mark::X);
    const O: Cell = Cell::Marked(Mark::O);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(Board::new().cells()));
        assert!(!is_draw(Board::new().cells()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::from_cells([X, O, X, E, E, E, E, E, E]);
        assert!(!is_full(board.cells()));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / X O O / O X X
        let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        assert!(is_full(board.cells()));
        assert!(is_draw(board.cells()));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // Full board, X wins the diagonal.
        let board = Board::from_cells([X, O, O, O, X, X, X, O, X]);
        assert!(is_full(board.cells()));
        assert!(!is_draw(board.cells()));
    }

    #[test]
    fn test_malformed_length() {
        assert!(!is_full(&[X; 8]));
        assert!(!is_draw(&[X, O, X, X, O, O, O, X, X, O]));
    }
}
