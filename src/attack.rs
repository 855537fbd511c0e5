//! The attack resolver: applies one shot to a board and its fleet.

use crate::board::{Board, CellState};
use crate::coord::Coord;
use crate::error::GameError;
use crate::ship::Ship;
use serde::{Deserialize, Serialize};

/// Classification of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotOutcome {
    Hit,
    Miss,
    Sunk,
}

/// Result of a resolved attack: the successor board plus the outcome.
/// `sunk_ship` indexes into the fleet slice passed to [`attack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackResult {
    pub board: Board,
    pub outcome: ShotOutcome,
    pub sunk_ship: Option<usize>,
}

/// Resolve a shot at `coord` against `board` and its fleet.
///
/// Out-of-bounds coordinates and already-resolved cells are rejected with
/// [`GameError::InvalidMove`]; a resolved cell is never silently re-counted
/// as a no-op. The input board is left untouched in every case.
pub fn attack(board: &Board, ships: &[Ship], coord: Coord) -> Result<AttackResult, GameError> {
    let cell = match board.cell(coord) {
        Some(cell) if !cell.is_resolved() => cell,
        _ => return Err(GameError::InvalidMove),
    };

    let mut next = *board;
    if cell == CellState::Ship {
        next.set_cell(coord, CellState::Hit);
        // the sunk test runs against the successor board, so the cell just
        // struck counts
        let hit_ship = ships.iter().position(|s| s.occupies(coord));
        match hit_ship.filter(|&i| ships[i].is_sunk(&next)) {
            Some(i) => Ok(AttackResult {
                board: next,
                outcome: ShotOutcome::Sunk,
                sunk_ship: Some(i),
            }),
            None => Ok(AttackResult {
                board: next,
                outcome: ShotOutcome::Hit,
                sunk_ship: None,
            }),
        }
    } else {
        next.set_cell(coord, CellState::Miss);
        Ok(AttackResult {
            board: next,
            outcome: ShotOutcome::Miss,
            sunk_ship: None,
        })
    }
}
