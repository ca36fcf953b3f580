//! Text and JSON rendering of snapshots.

use serde::Serialize;
use tictactoe_core::{BoardView, GameState, WinLine};

/// JSON form of a snapshot, with the winning line spelled out as indices.
#[derive(Serialize)]
struct JsonSnapshot<'a> {
    #[serde(flatten)]
    state: &'a GameState,
    winning_cells: Option<[usize; 3]>,
}

/// Renders the board as a text grid followed by the status line.
///
/// Winning cells are wrapped in brackets. Empty cells show their number
/// (1-based when `one_based`) if `show_numbers` is set.
pub fn render_text(state: &GameState, show_numbers: bool, one_based: bool) -> String {
    let view = BoardView::from_state(state);
    let offset = usize::from(one_based);

    let rows: Vec<String> = view
        .rows()
        .map(|row| {
            row.iter()
                .map(|cell| {
                    let symbol = match cell.symbol {
                        ' ' if show_numbers => char::from_digit((cell.index + offset) as u32, 10)
                            .unwrap_or(' '),
                        other => other,
                    };
                    if cell.highlighted {
                        format!("[{symbol}]")
                    } else {
                        format!(" {symbol} ")
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    format!("{}\n\n{}", rows.join("\n---+---+---\n"), view.status)
}

/// Renders the snapshot as pretty JSON.
pub fn render_json(state: &GameState) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonSnapshot {
        state,
        winning_cells: state.winning_line().map(WinLine::indices),
    })
}
