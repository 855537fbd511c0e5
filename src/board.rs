//! The board value type: a fixed 10×10 grid of cell states.

use crate::config::BOARD_SIZE;
use crate::coord::Coord;
use core::fmt;
use serde::{Deserialize, Serialize};

/// State of a single board cell.
///
/// A cell moves `Empty -> Ship` at placement and `{Empty, Ship} -> {Miss,
/// Hit}` when attacked. `Hit` and `Miss` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Empty,
    Ship,
    Hit,
    Miss,
}

impl CellState {
    /// A resolved cell has already been attacked and can never be targeted
    /// again.
    pub fn is_resolved(self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss)
    }
}

/// One player's grid. A plain `Copy` value: transitions copy the grid and
/// return a new board, so the input is never observed half-updated.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[CellState; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// An all-`Empty` board.
    pub fn new() -> Self {
        Self {
            cells: [[CellState::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// State of the cell at `coord`, or `None` when out of bounds.
    pub fn cell(&self, coord: Coord) -> Option<CellState> {
        if coord.row < BOARD_SIZE && coord.col < BOARD_SIZE {
            Some(self.cells[coord.row][coord.col])
        } else {
            None
        }
    }

    /// Iterate every coordinate of a board in row-major order.
    pub fn coords() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord::new(row, col)))
    }

    /// Caller must have validated `coord` against the board bounds.
    pub(crate) fn set_cell(&mut self, coord: Coord, state: CellState) {
        self.cells[coord.row][coord.col] = state;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                let glyph = match cell {
                    CellState::Empty => '.',
                    CellState::Ship => 'S',
                    CellState::Hit => 'x',
                    CellState::Miss => 'o',
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
