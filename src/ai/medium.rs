//! Hunt/target: prefer orthogonal neighbors of known hits, otherwise hunt
//! randomly like the easy strategy.

use super::{opponent_board, unresolved_cells};
use crate::board::{Board, CellState};
use crate::config::BOARD_SIZE;
use crate::coord::Coord;
use crate::error::GameError;
use crate::game::GameState;
use rand::Rng;

pub fn next_shot<R: Rng>(state: &GameState, side: usize, rng: &mut R) -> Result<Coord, GameError> {
    let board = opponent_board(state, side);

    let targets = target_cells(board);
    if !targets.is_empty() {
        return Ok(targets[rng.random_range(0..targets.len())]);
    }

    let available = unresolved_cells(board);
    if available.is_empty() {
        return Err(GameError::NoAvailableCells);
    }
    Ok(available[rng.random_range(0..available.len())])
}

/// Unresolved orthogonal neighbors of every hit cell, de-duplicated. The
/// pool is re-derived from the board on each call rather than tracked
/// incrementally.
fn target_cells(board: &Board) -> Vec<Coord> {
    let mut targets = Vec::new();
    for coord in Board::coords() {
        if board.cell(coord) != Some(CellState::Hit) {
            continue;
        }
        for n in orthogonal_neighbors(coord) {
            if board.cell(n).is_some_and(|s| !s.is_resolved()) && !targets.contains(&n) {
                targets.push(n);
            }
        }
    }
    targets
}

/// In-bounds cells above, below, left and right of `coord`. Never diagonal.
fn orthogonal_neighbors(coord: Coord) -> Vec<Coord> {
    let mut neighbors = Vec::with_capacity(4);
    if coord.row > 0 {
        neighbors.push(Coord::new(coord.row - 1, coord.col));
    }
    if coord.row + 1 < BOARD_SIZE {
        neighbors.push(Coord::new(coord.row + 1, coord.col));
    }
    if coord.col > 0 {
        neighbors.push(Coord::new(coord.row, coord.col - 1));
    }
    if coord.col + 1 < BOARD_SIZE {
        neighbors.push(Coord::new(coord.row, coord.col + 1));
    }
    neighbors
}
