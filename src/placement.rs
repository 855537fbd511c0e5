//! Ship placement: validation, copy-on-write application, and the
//! randomized auto-placement used for the computer fleet.

use crate::board::{Board, CellState};
use crate::config::{BOARD_SIZE, FLEET, NUM_SHIPS};
use crate::coord::{ship_coords, Coord, Orientation};
use crate::error::GameError;
use crate::ship::Ship;
use rand::Rng;

/// Randomized attempts before falling back to a first-fit sweep.
const MAX_RANDOM_ATTEMPTS: usize = 100;

/// True when every cell the ship would occupy is in bounds and `Empty`.
/// Overlap with ship cells is forbidden; adjacency to other ships is not.
pub fn can_place_ship(board: &Board, start: Coord, length: usize, orientation: Orientation) -> bool {
    ship_coords(start, length, orientation)
        .iter()
        .all(|&c| board.cell(c) == Some(CellState::Empty))
}

/// Place a ship, returning the successor board. The input board is left
/// untouched.
pub fn place_ship(
    board: &Board,
    start: Coord,
    length: usize,
    orientation: Orientation,
) -> Result<Board, GameError> {
    if !can_place_ship(board, start, length, orientation) {
        return Err(GameError::InvalidPlacement);
    }
    let mut next = *board;
    for c in ship_coords(start, length, orientation) {
        next.set_cell(c, CellState::Ship);
    }
    Ok(next)
}

/// Pick a legal placement for a ship of `length`. Tries random origins and
/// orientations first, then sweeps every position in both orientations, so
/// the result is `Err` only when the board has no legal fit at all.
pub fn random_placement<R: Rng>(
    board: &Board,
    length: usize,
    rng: &mut R,
) -> Result<(Coord, Orientation), GameError> {
    for _ in 0..MAX_RANDOM_ATTEMPTS {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let start = Coord::new(
            rng.random_range(0..BOARD_SIZE),
            rng.random_range(0..BOARD_SIZE),
        );
        if can_place_ship(board, start, length, orientation) {
            return Ok((start, orientation));
        }
    }
    // deterministic fallback: first fit wins
    for orientation in [Orientation::Horizontal, Orientation::Vertical] {
        for start in Board::coords() {
            if can_place_ship(board, start, length, orientation) {
                return Ok((start, orientation));
            }
        }
    }
    Err(GameError::InvalidPlacement)
}

/// Build a board with the full standard fleet auto-placed, as used for the
/// computer side at game creation.
pub fn auto_place_fleet<R: Rng>(
    player_id: &str,
    rng: &mut R,
) -> Result<(Board, Vec<Ship>), GameError> {
    let mut board = Board::new();
    let mut ships = Vec::with_capacity(NUM_SHIPS);
    for (i, spec) in FLEET.iter().enumerate() {
        let (start, orientation) = random_placement(&board, spec.length(), rng)?;
        board = place_ship(&board, start, spec.length(), orientation)?;
        let mut ship = Ship::from_spec(format!("{player_id}-ship-{i}"), *spec);
        ship.coords = ship_coords(start, spec.length(), orientation);
        ships.push(ship);
    }
    Ok((board, ships))
}
