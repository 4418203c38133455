//! Seeded random playouts used to exercise the engine.

use crate::{
    common::{GameError, Marker, TurnOutcome},
    game::Game,
};
use rand::seq::IteratorRandom;
use rand::Rng;

/// Tally of simulated rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationSummary {
    pub rounds: u32,
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

/// Restart the round and play uniformly random open cells until it ends.
///
/// Returns the terminal outcome (`Won` or `Draw`).
pub fn simulate_round<R: Rng>(game: &mut Game, rng: &mut R) -> Result<TurnOutcome, GameError> {
    game.restart()?;
    loop {
        let index = match game.board().empty_cells().choose(rng) {
            Some(i) => i,
            // unreachable for a consistent game: a full board is always terminal
            None => return Ok(TurnOutcome::Draw),
        };
        let outcome = game.play_turn(index)?;
        if outcome.is_terminal() {
            return Ok(outcome);
        }
    }
}

/// Play `rounds` random rounds in the current session and tally the results.
pub fn simulate_rounds<R: Rng>(
    game: &mut Game,
    rng: &mut R,
    rounds: u32,
) -> Result<SimulationSummary, GameError> {
    let mut summary = SimulationSummary::default();
    for _ in 0..rounds {
        match simulate_round(game, rng)? {
            TurnOutcome::Won {
                winner: Marker::X, ..
            } => summary.x_wins += 1,
            TurnOutcome::Won {
                winner: Marker::O, ..
            } => summary.o_wins += 1,
            _ => summary.draws += 1,
        }
        summary.rounds += 1;
    }
    Ok(summary)
}
