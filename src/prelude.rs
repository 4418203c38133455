//! Commonly used types and utilities for ease of import.

pub use crate::{Board, Cell, Game, GameError, GameStatus, Marker, Player, Scores, TurnOutcome};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliSession};
