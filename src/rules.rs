//! Win and draw detection over a [`Board`].

use crate::board::Board;
use crate::common::{Cell, Marker};
use crate::config::{Line, WIN_LINES};

/// First line in [`WIN_LINES`] order whose three cells all hold `marker`.
pub fn winning_line(board: &Board, marker: Marker) -> Option<Line> {
    let cells = board.cells();
    WIN_LINES
        .iter()
        .copied()
        .find(|line| line.iter().all(|&i| cells[i] == Cell::Marked(marker)))
}

/// Returns `true` when no cell is empty.
///
/// A full board is only a draw if [`winning_line`] found nothing first.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| !c.is_empty())
}
