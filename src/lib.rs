//! Battleship game engine: an immutable state machine covering ship
//! placement, turn-taking, attack resolution and win detection, plus three
//! computer targeting strategies of increasing sophistication.
//!
//! The engine performs no I/O and owns no global state. Every transition
//! consumes a state by reference and returns a fresh one; every function
//! that draws randomness takes a caller-supplied [`rand::Rng`].

pub mod ai;
mod attack;
mod board;
mod config;
mod coord;
mod error;
mod game;
mod logging;
mod placement;
mod ship;

pub use ai::Difficulty;
pub use attack::*;
pub use board::*;
pub use config::*;
pub use coord::*;
pub use error::*;
pub use game::*;
pub use logging::init_logging;
pub use placement::*;
pub use ship::*;
