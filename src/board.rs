//! The 3x3 grid. Knows nothing about players or rules.

use crate::common::{Cell, Marker};
use crate::config::{BOARD_CELLS, BOARD_WIDTH};
use core::fmt;

/// Nine cells in row-major order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; BOARD_CELLS],
        }
    }

    /// Immutable view of all cells.
    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Cell at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Put `marker` into the cell at `index`.
    ///
    /// Returns `false` and leaves the board unchanged if the cell is already
    /// taken or does not exist.
    pub fn place(&mut self, index: usize, marker: Marker) -> bool {
        match self.cells.get_mut(index) {
            Some(cell @ Cell::Empty) => {
                *cell = Cell::Marked(marker);
                true
            }
            _ => false,
        }
    }

    /// Clear every cell.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; BOARD_CELLS];
    }

    /// Indices of the cells still open, ascending.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| i)
    }

    /// Number of marked cells.
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in self.cells.chunks(BOARD_WIDTH) {
            write!(f, " ")?;
            for cell in row {
                match cell {
                    Cell::Empty => write!(f, " .")?,
                    Cell::Marked(m) => write!(f, " {}", m)?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_rejects_out_of_range() {
        let mut board = Board::new();
        assert!(!board.place(BOARD_CELLS, Marker::X));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn empty_cells_tracks_placements() {
        let mut board = Board::new();
        board.place(4, Marker::X);
        board.place(0, Marker::O);
        let open: alloc::vec::Vec<usize> = board.empty_cells().collect();
        assert_eq!(open, [1, 2, 3, 5, 6, 7, 8]);
        assert_eq!(board.marked_count(), 2);
    }
}
