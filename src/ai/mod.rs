//! Computer targeting strategies.
//!
//! All three share one contract: read the opponent's board out of the game
//! state and return the next shot coordinate. They hold no memory between
//! calls; everything is re-derived from the board. The only error is
//! [`GameError::NoAvailableCells`], which correct win detection makes
//! unreachable in normal play.

pub mod easy;
pub mod hard;
pub mod medium;

use crate::board::Board;
use crate::coord::Coord;
use crate::error::GameError;
use crate::game::{opponent_of, GameState};
use core::str::FromStr;
use rand::Rng;

/// Strategy selector for the computer opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Next shot for `side` under this strategy.
    pub fn next_shot<R: Rng>(
        self,
        state: &GameState,
        side: usize,
        rng: &mut R,
    ) -> Result<Coord, GameError> {
        match self {
            Difficulty::Easy => easy::next_shot(state, side, rng),
            Difficulty::Medium => medium::next_shot(state, side, rng),
            Difficulty::Hard => hard::next_shot(state, side, rng),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// The board the strategy is shooting at.
fn opponent_board(state: &GameState, side: usize) -> &Board {
    &state.players[opponent_of(side)].board
}

/// All cells not yet hit or miss, in row-major order.
fn unresolved_cells(board: &Board) -> Vec<Coord> {
    Board::coords()
        .filter(|&c| board.cell(c).is_some_and(|s| !s.is_resolved()))
        .collect()
}
