//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Number of cells on the board.
pub const BOARD_SIZE: usize = 9;

/// A player's mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// First player (moves first).
    #[display("X")]
    X,
    /// Second player.
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a mark.
    Marked(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Display symbol: blank, `X` or `O`.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Marked(Mark::X) => 'X',
            Cell::Marked(Mark::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// A plain value: cloning yields independent storage, and moves produce a
/// new board through [`Board::with_mark`] rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Builds a board from explicit cells.
    pub fn from_cells(cells: [Cell; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Gets the cell at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// All cells as a slice, for the rule functions.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns a copy of this board with `mark` placed at `index`.
    ///
    /// `None` when `index` is out of range. Occupancy is not checked here;
    /// that is the job of [`crate::rules::is_valid_move`].
    pub fn with_mark(&self, index: usize, mark: Mark) -> Option<Self> {
        let mut next = self.clone();
        *next.cells.get_mut(index)? = Cell::Marked(mark);
        Some(next)
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        crate::rules::is_full(&self.cells)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            write!(
                f,
                "{}|{}|{}",
                chunk[0].symbol(),
                chunk[1].symbol(),
                chunk[2].symbol()
            )?;
        }
        Ok(())
    }
}
