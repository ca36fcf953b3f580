//! Win detection logic for tic-tac-toe.

use crate::types::{BOARD_SIZE, Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the 8 fixed winning lines.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum WinLine {
    /// Row 0: cells 0, 1, 2.
    Top,
    /// Row 1: cells 3, 4, 5.
    Middle,
    /// Row 2: cells 6, 7, 8.
    Bottom,
    /// Column 0: cells 0, 3, 6.
    Left,
    /// Column 1: cells 1, 4, 7.
    Center,
    /// Column 2: cells 2, 5, 8.
    Right,
    /// Top-left to bottom-right: cells 0, 4, 8.
    Diagonal,
    /// Top-right to bottom-left: cells 2, 4, 6.
    AntiDiagonal,
}

impl WinLine {
    /// All lines in evaluation order: rows, then columns, then diagonals.
    pub const ALL: [WinLine; 8] = [
        WinLine::Top,
        WinLine::Middle,
        WinLine::Bottom,
        WinLine::Left,
        WinLine::Center,
        WinLine::Right,
        WinLine::Diagonal,
        WinLine::AntiDiagonal,
    ];

    /// Board indices covered by this line.
    pub fn indices(self) -> [usize; 3] {
        match self {
            WinLine::Top => [0, 1, 2],
            WinLine::Middle => [3, 4, 5],
            WinLine::Bottom => [6, 7, 8],
            WinLine::Left => [0, 3, 6],
            WinLine::Center => [1, 4, 7],
            WinLine::Right => [2, 5, 8],
            WinLine::Diagonal => [0, 4, 8],
            WinLine::AntiDiagonal => [2, 4, 6],
        }
    }

    /// Checks if `index` lies on this line.
    pub fn contains(self, index: usize) -> bool {
        self.indices().contains(&index)
    }
}

/// A completed line and the mark that completed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Win {
    /// The winning mark.
    pub winner: Mark,
    /// The line it filled.
    pub line: WinLine,
}

/// Checks if there is a winner on the board.
///
/// Lines are checked in [`WinLine::ALL`] order and the first complete one
/// is returned. Returns `None` for a slice that is not exactly 9 cells.
#[instrument(level = "trace", skip(cells))]
pub fn check_winner(cells: &[Cell]) -> Option<Win> {
    if cells.len() != BOARD_SIZE {
        return None;
    }

    WinLine::ALL.into_iter().find_map(|line| {
        let [a, b, c] = line.indices();
        match cells[a] {
            Cell::Marked(mark) if cells[b] == cells[a] && cells[c] == cells[a] => {
                Some(Win::new(mark, line))
            }
            _ => None,
        }
    })
}
