//! Probability density: score every unresolved cell by how many placements
//! of the remaining ships could cover it, then shoot a max-score cell.

use crate::board::{Board, CellState};
use crate::config::BOARD_SIZE;
use crate::coord::{ship_coords, Coord, Orientation};
use crate::error::GameError;
use crate::game::{opponent_of, GameState};
use rand::Rng;

pub fn next_shot<R: Rng>(state: &GameState, side: usize, rng: &mut R) -> Result<Coord, GameError> {
    let opponent = &state.players[opponent_of(side)];

    let remaining: Vec<usize> = opponent
        .ships
        .iter()
        .filter(|s| !s.is_sunk(&opponent.board))
        .map(|s| s.length)
        .collect();

    let scores = cell_scores(&opponent.board, &remaining);
    select_best_cell(&scores, rng)
}

/// For every remaining ship length, every position and both orientations,
/// test whether the run fits (in bounds, crossing no miss — a hit inside
/// the run is fine, a damaged ship still occupies those cells) and credit
/// each unresolved cell of every fitting run. Resolved cells stay `None`
/// and can never be selected.
fn cell_scores(
    board: &Board,
    remaining_lengths: &[usize],
) -> [[Option<u32>; BOARD_SIZE]; BOARD_SIZE] {
    let mut scores = [[None; BOARD_SIZE]; BOARD_SIZE];
    for coord in Board::coords() {
        if board.cell(coord).is_some_and(|s| !s.is_resolved()) {
            scores[coord.row][coord.col] = Some(0);
        }
    }

    for &length in remaining_lengths {
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            for start in Board::coords() {
                if !run_fits(board, start, length, orientation) {
                    continue;
                }
                for c in ship_coords(start, length, orientation) {
                    if let Some(score) = &mut scores[c.row][c.col] {
                        *score += 1;
                    }
                }
            }
        }
    }
    scores
}

/// Fit test: the run stays in bounds and contains no miss.
fn run_fits(board: &Board, start: Coord, length: usize, orientation: Orientation) -> bool {
    ship_coords(start, length, orientation)
        .iter()
        .all(|&c| matches!(board.cell(c), Some(cell) if cell != CellState::Miss))
}

/// Max-score cell, ties broken uniformly at random.
fn select_best_cell<R: Rng>(
    scores: &[[Option<u32>; BOARD_SIZE]; BOARD_SIZE],
    rng: &mut R,
) -> Result<Coord, GameError> {
    let mut best: Vec<Coord> = Vec::new();
    let mut max_score = 0u32;
    for coord in Board::coords() {
        if let Some(score) = scores[coord.row][coord.col] {
            if best.is_empty() || score > max_score {
                max_score = score;
                best.clear();
                best.push(coord);
            } else if score == max_score {
                best.push(coord);
            }
        }
    }
    if best.is_empty() {
        return Err(GameError::NoAvailableCells);
    }
    Ok(best[rng.random_range(0..best.len())])
}
