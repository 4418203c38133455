#![cfg(feature = "std")]

//! Text rendering of a [`Game`]. Pure functions returning strings; printing
//! is left to the caller.

use crate::{
    board::Board,
    common::{Cell, TurnOutcome},
    config::{Line, BOARD_WIDTH},
    game::{Game, GameStatus},
};
use std::fmt::Write;
use std::string::String;
use std::vec::Vec;

/// Render the grid. Open cells show their 1-based number; cells in
/// `highlight` are bracketed.
pub fn render_board(board: &Board, highlight: Option<Line>) -> String {
    let mut out = String::new();
    for (r, row) in board.cells().chunks(BOARD_WIDTH).enumerate() {
        if r > 0 {
            out.push_str("---+---+---\n");
        }
        for (c, cell) in row.iter().enumerate() {
            let index = r * BOARD_WIDTH + c;
            let symbol = match cell {
                Cell::Empty => char::from(b'1' + index as u8),
                Cell::Marked(m) => m.symbol(),
            };
            let lit = highlight.is_some_and(|line| line.contains(&index));
            if c > 0 {
                out.push('|');
            }
            if lit {
                let _ = write!(out, "[{}]", symbol);
            } else {
                let _ = write!(out, " {} ", symbol);
            }
        }
        out.push('\n');
    }
    out
}

/// Status line above the board: whose turn it is, or how the round ended.
pub fn turn_indicator(game: &Game) -> String {
    match (game.status(), game.current_player()) {
        (GameStatus::NotStarted, _) | (_, Err(_)) => String::from("Enter names and start the game"),
        (GameStatus::InProgress { .. }, Ok(p)) => {
            std::format!("{}'s Turn ({})", p.name(), p.marker())
        }
        (GameStatus::Won { .. }, Ok(p)) => std::format!("{} wins! 🎉", p.name()),
        (GameStatus::Draw, Ok(_)) => String::from("It's a draw!"),
    }
}

/// Both players with their running scores.
pub fn scoreboard(game: &Game) -> String {
    let Ok(players) = game.players() else {
        return String::new();
    };
    let scores = game.scores();
    players
        .iter()
        .zip(scores.iter())
        .map(|(p, (marker, wins))| std::format!("{} ({}): {}", p.name(), marker, wins))
        .collect::<Vec<_>>()
        .join("  |  ")
}

/// Post-render highlight step: the board with the winning line marked, for
/// `Won` outcomes only.
pub fn highlight_winning_line(board: &Board, outcome: &TurnOutcome) -> Option<String> {
    match outcome {
        TurnOutcome::Won { line, .. } => Some(render_board(board, Some(*line))),
        _ => None,
    }
}

/// Full view: scoreboard, indicator and board.
pub fn render_view(game: &Game) -> String {
    std::format!(
        "{}\n{}\n\n{}",
        scoreboard(game),
        turn_indicator(game),
        render_board(game.board(), None)
    )
}
