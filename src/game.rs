//! The game state machine: phases, turn order, action dispatch and win
//! detection.

use crate::attack::{attack, ShotOutcome};
use crate::board::Board;
use crate::config::FLEET;
use crate::coord::{ship_coords, Coord, Orientation};
use crate::error::GameError;
use crate::placement::{auto_place_fleet, place_ship};
use crate::ship::Ship;
use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Phase of the overall game. `Finished` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Setup,
    Playing,
    Finished,
}

/// One side of the game: identity, board and fleet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub board: Board,
    pub ships: Vec<Ship>,
}

impl Player {
    fn with_unplaced_fleet(id: &str, name: &str) -> Self {
        let ships = FLEET
            .iter()
            .enumerate()
            .map(|(i, spec)| Ship::from_spec(format!("{id}-ship-{i}"), *spec))
            .collect();
        Self {
            id: id.to_string(),
            name: name.to_string(),
            board: Board::new(),
            ships,
        }
    }

    fn with_auto_placed_fleet<R: Rng>(id: &str, name: &str, rng: &mut R) -> Result<Self, GameError> {
        let (board, ships) = auto_place_fleet(id, rng)?;
        Ok(Self {
            id: id.to_string(),
            name: name.to_string(),
            board,
            ships,
        })
    }

    /// True when every cell of every placed ship reads `Hit`. Recomputed
    /// from the board on each call, never from a cached counter.
    pub fn fleet_sunk(&self) -> bool {
        self.ships.iter().all(|s| s.is_sunk(&self.board))
    }
}

/// Record of the most recent resolved shot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastMove {
    pub by_player_id: String,
    pub coord: Coord,
    pub outcome: ShotOutcome,
    pub sunk_ship_name: Option<String>,
}

/// Immutable game snapshot. Transitions take a state by reference and
/// return a whole new one; nothing is updated in place.
///
/// Index 0 is the human-controlled side by convention and index 1 the
/// computer side, but nothing in the model depends on that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub players: [Player; 2],
    pub current_player_index: usize,
    pub phase: Phase,
    pub winner: Option<String>,
    pub last_move: Option<LastMove>,
}

/// The closed action set accepted by [`apply_action`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    PlaceShip {
        player_index: usize,
        ship_index: usize,
        start: Coord,
        orientation: Orientation,
    },
    StartBattle,
    Shot {
        coord: Coord,
    },
}

/// Index of the other side. `index` must be 0 or 1.
pub fn opponent_of(index: usize) -> usize {
    1 - index
}

/// Create a fresh game in `Setup`: player 1's fleet unplaced, player 2's
/// auto-placed from the supplied randomness source.
pub fn new_game<R: Rng>(rng: &mut R) -> Result<GameState, GameError> {
    let player1 = Player::with_unplaced_fleet("player1", "Player 1");
    let player2 = Player::with_auto_placed_fleet("player2", "Player 2", rng)?;
    Ok(GameState {
        players: [player1, player2],
        current_player_index: 0,
        phase: Phase::Setup,
        winner: None,
        last_move: None,
    })
}

/// Index of the first unplaced ship for a player, or `None` once all are
/// placed.
pub fn next_unplaced_ship_index(state: &GameState, player_index: usize) -> Option<usize> {
    state.players[player_index]
        .ships
        .iter()
        .position(|s| !s.is_placed())
}

/// True once every ship of the player has coordinates.
pub fn is_setup_complete(state: &GameState, player_index: usize) -> bool {
    next_unplaced_ship_index(state, player_index).is_none()
}

/// Is a shot at `coord` currently legal for the opponent of the current
/// player? False outside `Playing`, out of bounds, or on a resolved cell.
pub fn can_play(state: &GameState, coord: Coord) -> bool {
    if state.phase != Phase::Playing {
        return false;
    }
    let opponent = &state.players[opponent_of(state.current_player_index)];
    opponent
        .board
        .cell(coord)
        .is_some_and(|cell| !cell.is_resolved())
}

/// Place a ship during setup.
///
/// Panics if `player_index` is not 0 or 1; everything else is reported
/// through the error channel.
pub fn place_setup_ship(
    state: &GameState,
    player_index: usize,
    ship_index: usize,
    start: Coord,
    orientation: Orientation,
) -> Result<GameState, GameError> {
    if state.phase != Phase::Setup {
        return Err(GameError::WrongPhase);
    }
    let player = &state.players[player_index];
    let ship = player
        .ships
        .get(ship_index)
        .ok_or(GameError::InvalidShipIndex)?;
    if ship.is_placed() {
        return Err(GameError::ShipAlreadyPlaced);
    }

    let board = place_ship(&player.board, start, ship.length, orientation)?;
    let coords = ship_coords(start, ship.length, orientation);

    let mut next = state.clone();
    let player = &mut next.players[player_index];
    player.board = board;
    player.ships[ship_index].coords = coords;
    debug!(
        "{} placed {} at ({}, {}) {:?}",
        player.id, player.ships[ship_index].name, start.row, start.col, orientation
    );
    Ok(next)
}

/// Transition from `Setup` to `Playing`. Only player 1's fleet gates this;
/// player 2 is auto-placed at game creation.
pub fn start_battle(state: &GameState) -> Result<GameState, GameError> {
    if state.phase != Phase::Setup {
        return Err(GameError::WrongPhase);
    }
    if !is_setup_complete(state, 0) {
        return Err(GameError::SetupIncomplete);
    }
    let mut next = state.clone();
    next.phase = Phase::Playing;
    info!(
        "battle started, {} to move",
        next.players[next.current_player_index].id
    );
    Ok(next)
}

/// Resolve one shot by the current player against the opponent.
///
/// On a win the phase becomes `Finished` and the turn index freezes at the
/// winner; otherwise the turn passes to the opponent.
pub fn play_turn(state: &GameState, coord: Coord) -> Result<GameState, GameError> {
    if state.phase != Phase::Playing {
        return Err(GameError::WrongPhase);
    }
    if !can_play(state, coord) {
        return Err(GameError::InvalidMove);
    }

    let attacker_index = state.current_player_index;
    let defender_index = opponent_of(attacker_index);
    let defender = &state.players[defender_index];

    let result = attack(&defender.board, &defender.ships, coord)?;
    let sunk_ship_name = result.sunk_ship.map(|i| defender.ships[i].name.clone());

    let mut next = state.clone();
    next.players[defender_index].board = result.board;
    next.last_move = Some(LastMove {
        by_player_id: state.players[attacker_index].id.clone(),
        coord,
        outcome: result.outcome,
        sunk_ship_name,
    });
    debug!(
        "{} fired at ({}, {}): {:?}",
        state.players[attacker_index].id, coord.row, coord.col, result.outcome
    );

    if next.players[defender_index].fleet_sunk() {
        next.phase = Phase::Finished;
        next.winner = Some(state.players[attacker_index].id.clone());
        info!("{} wins", state.players[attacker_index].id);
    } else {
        next.current_player_index = defender_index;
    }
    Ok(next)
}

/// Single dispatch entry point over the tagged action set.
pub fn apply_action(state: &GameState, action: &GameAction) -> Result<GameState, GameError> {
    match action {
        GameAction::PlaceShip {
            player_index,
            ship_index,
            start,
            orientation,
        } => place_setup_ship(state, *player_index, *ship_index, *start, *orientation),
        GameAction::StartBattle => start_battle(state),
        GameAction::Shot { coord } => play_turn(state, *coord),
    }
}
