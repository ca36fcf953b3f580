//! Presentation contract.
//!
//! Read-only derivations a front-end needs to draw a snapshot: per-cell
//! labels, highlight and enabled flags. No game logic lives here.

use crate::position::Position;
use crate::rules::{WinLine, is_valid_move};
use crate::state::GameState;
use crate::types::Cell;
use serde::Serialize;
use tracing::instrument;

/// Display data for one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellView {
    /// Board index (0-8).
    pub index: usize,
    /// 1-based row.
    pub row: usize,
    /// 1-based column.
    pub column: usize,
    /// Blank, `X` or `O`.
    pub symbol: char,
    /// On the winning line.
    pub highlighted: bool,
    /// Accepts input.
    pub enabled: bool,
    /// Holds a mark.
    pub pressed: bool,
    /// Screen-reader label.
    pub accessible_label: String,
}

impl CellView {
    /// Builds the view of cell `position` in `state`.
    pub fn new(state: &GameState, position: Position) -> Self {
        let index = position.to_index();
        let cell = state.board().get(index).unwrap_or_default();
        let row = position.row() + 1;
        let column = position.column() + 1;

        let accessible_label = match cell {
            Cell::Marked(mark) => format!("Row {row} column {column} is {mark}"),
            Cell::Empty if state.is_game_over() => {
                format!("Square at row {row} column {column} is empty. Game over.")
            }
            Cell::Empty => format!(
                "Place {} at row {row} column {column}",
                state.current_player()
            ),
        };

        Self {
            index,
            row,
            column,
            symbol: cell.symbol(),
            highlighted: state.winning_line().is_some_and(|line| line.contains(index)),
            enabled: !state.is_game_over() && is_valid_move(state.board().cells(), index as i64),
            pressed: !cell.is_empty(),
            accessible_label,
        }
    }
}

/// Display data for a whole snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    /// Cells in index order.
    pub cells: Vec<CellView>,
    /// Indices of the winning line, if any.
    pub winning_cells: Option<[usize; 3]>,
    /// Status line.
    pub status: String,
}

impl BoardView {
    /// Derives the view from a snapshot.
    #[instrument(level = "trace", skip(state))]
    pub fn from_state(state: &GameState) -> Self {
        Self {
            cells: Position::ALL
                .iter()
                .map(|&pos| CellView::new(state, pos))
                .collect(),
            winning_cells: state.winning_line().map(WinLine::indices),
            status: state.status().to_string(),
        }
    }

    /// Rows of three cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellView]> {
        self.cells.chunks(3)
    }
}
