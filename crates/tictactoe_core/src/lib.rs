//! Tic-tac-toe game core.
//!
//! A pure rule engine plus a controller that turns one immutable
//! [`GameState`] into the next.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{apply_move, create_initial_state, Mark};
//!
//! let state = create_initial_state();
//! let state = apply_move(&state, 4);
//! assert_eq!(state.current_player(), Mark::O);
//! assert_eq!(state.status(), "Player O");
//! ```

#![warn(missing_docs)]

mod controller;
mod position;
pub mod rules;
mod state;
mod types;
mod view;

// Crate-level exports - Data model
pub use position::Position;
pub use types::{BOARD_SIZE, Board, Cell, Mark};

// Crate-level exports - Rule engine
pub use rules::{Win, WinLine, check_winner, is_draw, is_full, is_valid_move};

// Crate-level exports - State and controller
pub use controller::{GameController, MoveOutcome, apply_move, create_initial_state, reset};
pub use state::{GameState, Outcome, SnapshotError};

// Crate-level exports - Presentation contract
pub use view::{BoardView, CellView};
