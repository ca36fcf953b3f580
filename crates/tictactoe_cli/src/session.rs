//! Interactive and scripted play against a [`GameController`].

use crate::config::CliConfig;
use crate::render::{render_json, render_text};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tictactoe_core::{GameController, GameState, MoveOutcome, Position};
use tracing::{debug, info, instrument, warn};

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Play at a 0-based index (possibly out of range).
    Cell(i64),
    /// Start a new game.
    Reset,
    /// Leave the session.
    Quit,
}

/// Parses one line.
///
/// Numbers are shifted down by one when `one_based` is set. Position
/// labels such as `center` are accepted too. `None` for blank or
/// unrecognised input.
pub fn parse_input(line: &str, one_based: bool) -> Option<Input> {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "" => None,
        "q" | "quit" | "exit" => Some(Input::Quit),
        "r" | "reset" | "new" => Some(Input::Reset),
        _ => match line.parse::<i64>() {
            Ok(n) if one_based => Some(Input::Cell(n.saturating_sub(1))),
            Ok(n) => Some(Input::Cell(n)),
            Err(_) => Position::parse(line).map(|p| Input::Cell(p.to_index() as i64)),
        },
    }
}

/// Terminal harness state.
#[derive(Debug)]
pub struct Session {
    controller: GameController,
    config: CliConfig,
    json: bool,
}

impl Session {
    /// Creates a session with a fresh game.
    pub fn new(config: CliConfig, json: bool) -> Self {
        Self {
            controller: GameController::new(),
            config,
            json,
        }
    }

    /// The live snapshot.
    pub fn state(&self) -> &GameState {
        self.controller.state()
    }

    fn render(&self) -> Result<String> {
        if self.json {
            render_json(self.controller.state()).context("Failed to serialize state")
        } else {
            Ok(render_text(
                self.controller.state(),
                *self.config.show_cell_numbers(),
                *self.config.one_based_input(),
            ))
        }
    }

    /// Applies 0-based indices in order.
    #[instrument(skip(self))]
    pub fn replay(&mut self, moves: &[i64]) {
        for &index in moves {
            if self.controller.play(index) == MoveOutcome::Ignored {
                warn!(index, "Move ignored during replay");
            }
        }
    }

    /// Writes the current snapshot to `out`.
    pub fn print(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "{}", self.render()?)?;
        Ok(())
    }

    /// Reads commands from `input` until EOF or quit.
    #[instrument(skip_all)]
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> Result<()> {
        info!("Starting interactive session");
        self.print(out)?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            match parse_input(&line, *self.config.one_based_input()) {
                Some(Input::Quit) => break,
                Some(Input::Reset) => {
                    self.controller.reset();
                    self.print(out)?;
                }
                Some(Input::Cell(index)) => {
                    let outcome = self.controller.play(index);
                    debug!(index, %outcome, "Move processed");
                    if outcome == MoveOutcome::Ignored {
                        writeln!(out, "Move ignored.")?;
                    }
                    self.print(out)?;
                }
                None => writeln!(out, "Enter a cell number, 'r' to reset or 'q' to quit.")?,
            }
        }

        info!("Session ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{Mark, WinLine};

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("5", true), Some(Input::Cell(4)));
        assert_eq!(parse_input("5", false), Some(Input::Cell(5)));
        assert_eq!(parse_input("0", true), Some(Input::Cell(-1)));
        assert_eq!(
            parse_input("-9223372036854775808", true),
            Some(Input::Cell(i64::MIN))
        );
        assert_eq!(parse_input(" Q ", true), Some(Input::Quit));
        assert_eq!(parse_input("reset", true), Some(Input::Reset));
        assert_eq!(parse_input("top-right", true), Some(Input::Cell(2)));
        assert_eq!(parse_input("", true), None);
        assert_eq!(parse_input("banana", true), None);
    }

    #[test]
    fn test_replay_to_win() {
        let mut session = Session::new(CliConfig::default(), false);
        session.replay(&[0, 3, 1, 4, 2]);
        assert_eq!(session.state().winner(), Some(Mark::X));
        assert_eq!(session.state().winning_line(), Some(WinLine::Top));
    }

    #[test]
    fn test_interactive_session() {
        let mut session = Session::new(CliConfig::default(), false);
        let input = "1\n1\nhello\n4\nr\n9\nq\n5\n";
        let mut out = Vec::new();
        session.run(input.as_bytes(), &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Move ignored."));
        assert!(out.contains("Enter a cell number"));
        // After reset X played 9; the trailing 5 comes after quit.
        assert_eq!(session.state().current_player(), Mark::O);
        let filled = session
            .state()
            .board()
            .cells()
            .iter()
            .filter(|c| !c.is_empty())
            .count();
        assert_eq!(filled, 1);
        assert!(out.ends_with("Player O\n"));
    }
}
