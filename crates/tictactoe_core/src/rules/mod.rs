//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. Every function is total: cell
//! slices of the wrong length and out-of-range indices produce `None` or
//! `false` instead of panicking.

pub mod draw;
pub mod validity;
pub mod win;

pub use draw::{is_draw, is_full};
pub use validity::is_valid_move;
pub use win::{Win, WinLine, check_winner};
