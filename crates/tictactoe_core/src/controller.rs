//! Game state controller.
//!
//! Transitions are pure functions from one shared snapshot to the next.
//! A rejected move hands back the same `Arc` it was given, so callers can
//! detect a no-op with [`Arc::ptr_eq`].

use crate::rules::{check_winner, is_draw, is_valid_move};
use crate::state::{GameState, Outcome};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Creates a fresh game with its own board.
#[instrument]
pub fn create_initial_state() -> Arc<GameState> {
    Arc::new(GameState::new())
}

/// Starts over. Identical to [`create_initial_state`].
#[instrument]
pub fn reset() -> Arc<GameState> {
    create_initial_state()
}

/// Applies the current player's mark at `index`.
///
/// Returns `state` itself when the game is over or the move is invalid.
#[instrument(skip(state), fields(player = %state.current_player()))]
pub fn apply_move(state: &Arc<GameState>, index: i64) -> Arc<GameState> {
    if state.is_game_over() {
        debug!("Game is already over, ignoring move");
        return Arc::clone(state);
    }
    if !is_valid_move(state.board().cells(), index) {
        debug!("Invalid move, ignoring");
        return Arc::clone(state);
    }

    let player = state.current_player();
    let Some(next_board) = usize::try_from(index)
        .ok()
        .and_then(|i| state.board().with_mark(i, player))
    else {
        return Arc::clone(state);
    };

    let next = if let Some(win) = check_winner(next_board.cells()) {
        info!(winner = %win.winner, line = ?win.line, "Game won");
        GameState::from_outcome(next_board, player, Outcome::Won(win))
    } else if is_draw(next_board.cells()) {
        info!("Game drawn");
        GameState::from_outcome(next_board, player, Outcome::Draw)
    } else {
        GameState::from_outcome(next_board, player.opponent(), Outcome::InProgress)
    };

    debug!(status = %next.status(), "Move applied");
    Arc::new(next)
}

/// Whether a call to [`GameController::play`] changed the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveOutcome {
    /// A new snapshot replaced the old one.
    #[display("accepted")]
    Accepted,
    /// The move was a no-op.
    #[display("ignored")]
    Ignored,
}

/// Owns the single live snapshot.
#[derive(Debug, Clone)]
pub struct GameController {
    current: Arc<GameState>,
}

impl GameController {
    /// Creates a controller holding a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            current: create_initial_state(),
        }
    }

    /// The live snapshot.
    pub fn state(&self) -> &Arc<GameState> {
        &self.current
    }

    /// Plays at `index` and swaps in the resulting snapshot.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: i64) -> MoveOutcome {
        let next = apply_move(&self.current, index);
        if Arc::ptr_eq(&next, &self.current) {
            MoveOutcome::Ignored
        } else {
            self.current = next;
            MoveOutcome::Accepted
        }
    }

    /// Discards the current game and starts a new one.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> &Arc<GameState> {
        self.current = reset();
        &self.current
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}
