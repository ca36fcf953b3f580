//! Move validity checks.

use crate::types::{BOARD_SIZE, Cell};
use tracing::instrument;

/// Checks if a mark may be placed at `index`.
///
/// True iff the slice is exactly 9 cells, `index` is in `0..=8`, and that
/// cell is empty. Any other input yields `false`.
#[instrument(level = "trace", skip(cells))]
pub fn is_valid_move(cells: &[Cell], index: i64) -> bool {
    if cells.len() != BOARD_SIZE {
        return false;
    }
    usize::try_from(index)
        .ok()
        .and_then(|i| cells.get(i))
        .is_some_and(|c| c.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Mark};

    #[test]
    fn test_every_cell_valid_on_empty_board() {
        let board = Board::new();
        assert!((0..9).all(|i| is_valid_move(board.cells(), i)));
    }

    #[test]
    fn test_out_of_range() {
        let board = Board::new();
        assert!(!is_valid_move(board.cells(), -1));
        assert!(!is_valid_move(board.cells(), 9));
        assert!(!is_valid_move(board.cells(), i64::MIN));
        assert!(!is_valid_move(board.cells(), i64::MAX));
    }

    #[test]
    fn test_occupied_cell() {
        let board = Board::new().with_mark(3, Mark::O).unwrap();
        assert!(!is_valid_move(board.cells(), 3));
        assert!(is_valid_move(board.cells(), 4));
    }

    #[test]
    fn test_malformed_board() {
        assert!(!is_valid_move(&[Cell::Empty; 4], 0));
    }
}
