//! Random hunt: a uniformly random unresolved cell, no memory across calls.

use super::{opponent_board, unresolved_cells};
use crate::coord::Coord;
use crate::error::GameError;
use crate::game::GameState;
use rand::Rng;

pub fn next_shot<R: Rng>(state: &GameState, side: usize, rng: &mut R) -> Result<Coord, GameError> {
    let available = unresolved_cells(opponent_board(state, side));
    if available.is_empty() {
        return Err(GameError::NoAvailableCells);
    }
    Ok(available[rng.random_range(0..available.len())])
}
