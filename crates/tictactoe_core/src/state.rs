//! Immutable game state snapshots.

use crate::rules::{Win, WinLine, check_winner, is_draw};
use crate::types::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};

/// Derived result of a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves can still be made.
    InProgress,
    /// A line was completed.
    Won(Win),
    /// The board filled with no winner.
    Draw,
}

impl Outcome {
    /// Status text shown to players.
    ///
    /// `current` is the mark whose turn is active; it is only used while
    /// the game is in progress.
    pub fn status_text(&self, current: Mark) -> String {
        match self {
            Outcome::InProgress => format!("Player {}", current),
            Outcome::Won(win) => format!("Player {} wins!", win.winner),
            Outcome::Draw => "It's a draw!".to_string(),
        }
    }
}

/// Complete game state.
///
/// Snapshots are never modified after construction; every accepted move
/// produces a new one. Deserialized snapshots are checked against their
/// board and rejected if any field disagrees with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    board: Board,
    current_player: Mark,
    status: String,
    winning_line: Option<WinLine>,
    is_game_over: bool,
}

impl GameState {
    /// Fresh game: empty board, X to move.
    pub fn new() -> Self {
        Self::from_outcome(Board::new(), Mark::X, Outcome::InProgress)
    }

    /// Builds a snapshot whose status, line, and game-over flag all derive
    /// from `outcome`, so they cannot disagree.
    pub(crate) fn from_outcome(board: Board, current_player: Mark, outcome: Outcome) -> Self {
        let (winning_line, is_game_over) = match outcome {
            Outcome::InProgress => (None, false),
            Outcome::Won(win) => (Some(win.line), true),
            Outcome::Draw => (None, true),
        };
        Self {
            status: outcome.status_text(current_player),
            board,
            current_player,
            winning_line,
            is_game_over,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark whose turn is active. After a win this is the winner.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Human-readable status.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// The completed line, if the game was won.
    pub fn winning_line(&self) -> Option<WinLine> {
        self.winning_line
    }

    /// True once there is a winner or the board is full.
    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    /// Outcome derived from the stored fields.
    pub fn outcome(&self) -> Outcome {
        match (self.winning_line, self.is_game_over) {
            (Some(line), _) => Outcome::Won(Win::new(self.current_player, line)),
            (None, true) => Outcome::Draw,
            (None, false) => Outcome::InProgress,
        }
    }

    /// The winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        self.winning_line.map(|_| self.current_player)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    board: Board,
    current_player: Mark,
    status: String,
    winning_line: Option<WinLine>,
    is_game_over: bool,
}

/// A snapshot whose fields contradict its board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Inconsistent game snapshot: {}", reason)]
pub struct SnapshotError {
    /// What did not match.
    pub reason: String,
}

impl SnapshotError {
    fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl TryFrom<RawGameState> for GameState {
    type Error = SnapshotError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let cells = raw.board.cells();
        let count = |mark| cells.iter().filter(|&&c| c == Cell::Marked(mark)).count();
        let (x_count, o_count) = (count(Mark::X), count(Mark::O));

        // X moves first, so X is level with O or one ahead.
        let (to_move, last_mover) = if x_count == o_count {
            (Mark::X, Mark::O)
        } else if x_count == o_count + 1 {
            (Mark::O, Mark::X)
        } else {
            return Err(SnapshotError::new(format!(
                "{x_count} X marks and {o_count} O marks"
            )));
        };

        let outcome = match check_winner(cells) {
            Some(win) => Outcome::Won(win),
            None if is_draw(cells) => Outcome::Draw,
            None => Outcome::InProgress,
        };
        let expected_player = match outcome {
            Outcome::InProgress => to_move,
            Outcome::Won(_) | Outcome::Draw => last_mover,
        };
        if raw.current_player != expected_player {
            return Err(SnapshotError::new(format!(
                "current player {} but board says {}",
                raw.current_player, expected_player
            )));
        }

        let expected = GameState::from_outcome(raw.board, raw.current_player, outcome);
        if raw.winning_line != expected.winning_line {
            return Err(SnapshotError::new("winning line does not match board"));
        }
        if raw.is_game_over != expected.is_game_over {
            return Err(SnapshotError::new("game-over flag does not match board"));
        }
        if raw.status != expected.status {
            return Err(SnapshotError::new(format!(
                "status {:?} but board says {:?}",
                raw.status, expected.status
            )));
        }
        Ok(expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new();
        assert_eq!(state.board(), &Board::new());
        assert_eq!(state.current_player(), Mark::X);
        assert_eq!(state.status(), "Player X");
        assert_eq!(state.winning_line(), None);
        assert!(!state.is_game_over());
        assert_eq!(state.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_status_text() {
        assert_eq!(Outcome::InProgress.status_text(Mark::O), "Player O");
        assert_eq!(
            Outcome::Won(Win::new(Mark::O, WinLine::Left)).status_text(Mark::O),
            "Player O wins!"
        );
        assert_eq!(Outcome::Draw.status_text(Mark::X), "It's a draw!");
    }

    fn raw(board: Board, current_player: Mark, outcome: Outcome) -> RawGameState {
        let state = GameState::from_outcome(board, current_player, outcome);
        RawGameState {
            board: state.board,
            current_player: state.current_player,
            status: state.status,
            winning_line: state.winning_line,
            is_game_over: state.is_game_over,
        }
    }

    #[test]
    fn test_consistent_raw_accepted() {
        let board = Board::new().with_mark(4, Mark::X).unwrap();
        let state = GameState::try_from(raw(board, Mark::O, Outcome::InProgress)).unwrap();
        assert_eq!(state.status(), "Player O");
    }

    #[test]
    fn test_claimed_win_on_empty_board_rejected() {
        let win = Outcome::Won(Win::new(Mark::X, WinLine::Top));
        assert!(GameState::try_from(raw(Board::new(), Mark::X, win)).is_err());
    }

    #[test]
    fn test_wrong_turn_rejected() {
        let board = Board::new().with_mark(0, Mark::X).unwrap();
        let err = GameState::try_from(raw(board, Mark::X, Outcome::InProgress)).unwrap_err();
        assert!(err.reason.starts_with("current player X"));
    }

    #[test]
    fn test_too_many_marks_rejected() {
        let board = Board::new()
            .with_mark(0, Mark::O)
            .and_then(|b| b.with_mark(1, Mark::O))
            .unwrap();
        assert!(GameState::try_from(raw(board, Mark::X, Outcome::InProgress)).is_err());
    }

    #[test]
    fn test_tampered_status_rejected() {
        let mut bad = raw(Board::new(), Mark::X, Outcome::InProgress);
        bad.status = "It's a draw!".to_string();
        assert!(GameState::try_from(bad).is_err());
    }

    #[test]
    fn test_outcome_round_trips_through_fields() {
        let win = Outcome::Won(Win::new(Mark::O, WinLine::Middle));
        let state = GameState::from_outcome(Board::new(), Mark::O, win);
        assert_eq!(state.outcome(), win);
        assert_eq!(state.winner(), Some(Mark::O));

        let draw = GameState::from_outcome(Board::new(), Mark::X, Outcome::Draw);
        assert_eq!(draw.outcome(), Outcome::Draw);
        assert_eq!(draw.winner(), None);
        assert!(draw.is_game_over());
    }
}
