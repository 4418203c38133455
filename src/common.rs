//! Common types for tic-tac-toe: markers, cells, turn outcomes and errors.

use crate::config::Line;
use core::fmt;

/// Symbol identifying a player's moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Marker {
    /// First player's marker.
    X,
    /// Second player's marker.
    O,
}

impl Marker {
    /// Markers in seat order.
    pub const ALL: [Marker; 2] = [Marker::X, Marker::O];

    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Marker::X => 'X',
            Marker::O => 'O',
        }
    }

    /// Seat index of the player holding this marker.
    pub fn seat(self) -> usize {
        match self {
            Marker::X => 0,
            Marker::O => 1,
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Content of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Marked(Marker),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Why a move was refused. Refusals leave the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Rejection {
    /// The target cell already holds a marker.
    Occupied,
    /// The round has already been won or drawn.
    GameOver,
}

/// Result of a single `play_turn` call, interpreted by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnOutcome {
    /// Move was not applied.
    Rejected(Rejection),
    /// Move was applied and the turn passed to `next`.
    Switched { next: Marker },
    /// Move completed `line` for `winner`.
    Won { winner: Marker, line: Line },
    /// Move filled the board without a winning line.
    Draw,
}

impl TurnOutcome {
    /// Returns `true` if a marker was placed.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, TurnOutcome::Rejected(_))
    }

    /// Returns `true` if this move ended the round.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TurnOutcome::Won { .. } | TurnOutcome::Draw)
    }
}

/// Precondition violations reported by the game engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// No session has been started yet, so there are no players.
    NotStarted,
    /// Cell index outside 0..=8.
    InvalidIndex(usize),
    /// Snapshot whose seats or status contradict each other.
    InvalidState,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NotStarted => write!(f, "Game has not been started"),
            GameError::InvalidIndex(i) => write!(f, "Cell index {} is out of range (0-8)", i),
            GameError::InvalidState => write!(f, "Game state is inconsistent"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
