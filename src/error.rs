//! Engine-wide error type. Every rejection is synchronous and recoverable
//! by the caller choosing a different input; nothing here is fatal.

/// Errors returned by engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Placement out of bounds or overlapping an occupied cell.
    InvalidPlacement,
    /// Attempted to place a ship that is already placed.
    ShipAlreadyPlaced,
    /// Ship index outside the fleet.
    InvalidShipIndex,
    /// Action attempted in a phase that forbids it.
    WrongPhase,
    /// Battle started before every ship was placed.
    SetupIncomplete,
    /// Shot out of bounds or at an already-resolved cell.
    InvalidMove,
    /// A targeting strategy found no unresolved cells left to shoot.
    NoAvailableCells,
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidPlacement => write!(f, "Cannot place ship at this position"),
            GameError::ShipAlreadyPlaced => write!(f, "Ship is already placed"),
            GameError::InvalidShipIndex => write!(f, "Ship index is out of range"),
            GameError::WrongPhase => write!(f, "Action is not allowed in the current phase"),
            GameError::SetupIncomplete => write!(f, "Not all ships have been placed"),
            GameError::InvalidMove => write!(f, "Invalid move"),
            GameError::NoAvailableCells => write!(f, "No available cells to shoot"),
        }
    }
}

impl std::error::Error for GameError {}
