//! Board coordinates and the ship-geometry helper.

use serde::{Deserialize, Serialize};

/// A cell position on the board, 0-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Expand a (start, length, orientation) triple into the ordered cells a
/// ship occupies. Horizontal runs walk columns, vertical runs walk rows.
/// Performs no bounds checking; validating against a board is the caller's
/// job.
pub fn ship_coords(start: Coord, length: usize, orientation: Orientation) -> Vec<Coord> {
    (0..length)
        .map(|i| match orientation {
            Orientation::Horizontal => Coord::new(start.row, start.col + i),
            Orientation::Vertical => Coord::new(start.row + i, start.col),
        })
        .collect()
}
