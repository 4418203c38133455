//! Session lifecycle, turn order and scoring on top of the board.

use crate::{
    board::Board,
    common::{Cell, GameError, Marker, Rejection, TurnOutcome},
    config::{Line, BOARD_CELLS},
    player::{Player, Scores},
    rules,
};
use log::{debug, info};

/// Lifecycle of a session. Seats are indices into the player pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    NotStarted,
    InProgress { current: usize },
    Won { winner: usize, line: Line },
    Draw,
}

/// Serializable snapshot of a whole session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub board: Board,
    pub players: Option<[Player; 2]>,
    pub current: usize,
    pub status: GameStatus,
    pub scores: Scores,
}

/// Turn sequencing, win/draw detection and scoring on top of a [`Board`].
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    players: Option<[Player; 2]>,
    current: usize,
    status: GameStatus,
    scores: Scores,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Create an engine with no session yet.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            players: None,
            current: 0,
            status: GameStatus::NotStarted,
            scores: Scores::new(),
        }
    }

    /// Begin a fresh session: new players, zeroed scores, empty board, first
    /// player to move. Blank names fall back to the seat defaults.
    pub fn start(&mut self, name_a: &str, name_b: &str) {
        let players = [
            Player::seated(name_a, Marker::X),
            Player::seated(name_b, Marker::O),
        ];
        info!(
            "starting session: {} ({}) vs {} ({})",
            players[0].name(),
            players[0].marker(),
            players[1].name(),
            players[1].marker()
        );
        self.players = Some(players);
        self.scores = Scores::new();
        self.reset_round();
    }

    /// Begin a new round with the same players and scores.
    pub fn restart(&mut self) -> Result<(), GameError> {
        if self.players.is_none() {
            return Err(GameError::NotStarted);
        }
        info!("restarting round");
        self.reset_round();
        Ok(())
    }

    fn reset_round(&mut self) {
        self.board.reset();
        self.current = 0;
        self.status = GameStatus::InProgress { current: 0 };
    }

    /// Place the current player's marker at `index` and advance the game.
    ///
    /// Occupied cells and finished rounds are refused with
    /// [`TurnOutcome::Rejected`] and leave every piece of state untouched.
    pub fn play_turn(&mut self, index: usize) -> Result<TurnOutcome, GameError> {
        let players = self.players.as_ref().ok_or(GameError::NotStarted)?;
        if index >= BOARD_CELLS {
            return Err(GameError::InvalidIndex(index));
        }
        if matches!(self.status, GameStatus::Won { .. } | GameStatus::Draw) {
            debug!("move at {} refused: round is over", index);
            return Ok(TurnOutcome::Rejected(Rejection::GameOver));
        }

        let mover = &players[self.current];
        if !self.board.place(index, mover.marker()) {
            debug!("move at {} refused: cell occupied", index);
            return Ok(TurnOutcome::Rejected(Rejection::Occupied));
        }
        debug!("{} placed {} at {}", mover.name(), mover.marker(), index);

        if let Some(line) = rules::winning_line(&self.board, mover.marker()) {
            self.scores.record_win(mover.marker());
            self.status = GameStatus::Won {
                winner: self.current,
                line,
            };
            info!("{} wins on {:?}", mover.name(), line);
            return Ok(TurnOutcome::Won {
                winner: mover.marker(),
                line,
            });
        }

        if rules::is_full(&self.board) {
            self.status = GameStatus::Draw;
            info!("round drawn");
            return Ok(TurnOutcome::Draw);
        }

        self.current = 1 - self.current;
        self.status = GameStatus::InProgress {
            current: self.current,
        };
        Ok(TurnOutcome::Switched {
            next: players[self.current].marker(),
        })
    }

    /// Player whose turn it is. After a round ends this is the player who
    /// made the final move.
    pub fn current_player(&self) -> Result<&Player, GameError> {
        Ok(&self.players()?[self.current])
    }

    pub fn players(&self) -> Result<&[Player; 2], GameError> {
        self.players.as_ref().ok_or(GameError::NotStarted)
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        self.board.cells()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns `true` once the round has been won or drawn.
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Won { .. } | GameStatus::Draw)
    }

    /// Winner of the current round, if it has one.
    pub fn winner(&self) -> Option<&Player> {
        match (self.status, self.players.as_ref()) {
            (GameStatus::Won { winner, .. }, Some(players)) => Some(&players[winner]),
            _ => None,
        }
    }

    /// Generate a serializable snapshot of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            board: self.board,
            players: self.players.clone(),
            current: self.current,
            status: self.status,
            scores: self.scores,
        }
    }

    /// Restore an engine from a previously taken snapshot.
    ///
    /// Fails with [`GameError::InvalidState`] if the seats, markers and status
    /// do not describe a reachable session.
    pub fn from_state(state: GameState) -> Result<Self, GameError> {
        if state.current > 1 {
            return Err(GameError::InvalidState);
        }
        let consistent = match (&state.players, state.status) {
            (None, GameStatus::NotStarted) => state.current == 0,
            (None, _) | (Some(_), GameStatus::NotStarted) => false,
            (Some(_), GameStatus::InProgress { current }) => current == state.current,
            (Some(_), GameStatus::Won { winner, .. }) => winner <= 1,
            (Some(_), GameStatus::Draw) => true,
        };
        let seated = state.players.as_ref().map_or(true, |players| {
            players
                .iter()
                .zip(Marker::ALL)
                .all(|(p, m)| p.marker() == m)
        });
        if !consistent || !seated {
            return Err(GameError::InvalidState);
        }
        Ok(Self {
            board: state.board,
            players: state.players,
            current: state.current,
            status: state.status,
            scores: state.scores,
        })
    }
}
