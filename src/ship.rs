//! Ship catalog entries and fleet ships.

use crate::board::{Board, CellState};
use crate::coord::Coord;
use serde::{Deserialize, Serialize};

/// Catalog entry: ship class name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipSpec {
    name: &'static str,
    length: usize,
}

impl ShipSpec {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship slot in a player's fleet.
///
/// `coords` is empty until the ship is placed; once placed it holds the
/// occupied cells in placement order. Emptiness is the only "unplaced"
/// signal — there is no separate flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    pub id: String,
    pub name: String,
    pub length: usize,
    pub coords: Vec<Coord>,
}

impl Ship {
    /// An unplaced ship slot for a catalog entry.
    pub fn from_spec(id: String, spec: ShipSpec) -> Self {
        Self {
            id,
            name: spec.name().to_string(),
            length: spec.length(),
            coords: Vec::new(),
        }
    }

    pub fn is_placed(&self) -> bool {
        !self.coords.is_empty()
    }

    pub fn occupies(&self, coord: Coord) -> bool {
        self.coords.contains(&coord)
    }

    /// Sunk when every occupied cell reads `Hit` on the owning board.
    /// Derived from the board each call; there is no shadow hit counter to
    /// drift out of sync. An unplaced ship is never sunk.
    pub fn is_sunk(&self, board: &Board) -> bool {
        self.is_placed()
            && self
                .coords
                .iter()
                .all(|&c| board.cell(c) == Some(CellState::Hit))
    }
}
