use broadside::{
    apply_action, new_game, next_unplaced_ship_index, opponent_of, random_placement, Board,
    CellState, Coord, Difficulty, GameAction, GameState, Phase,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::collections::HashSet;

const MAX_TURNS: usize = 300;

/// New game with both fleets placed, ready to play.
fn setup_game(rng: &mut SmallRng) -> GameState {
    let mut state = new_game(rng).unwrap();
    while let Some(ship_index) = next_unplaced_ship_index(&state, 0) {
        let length = state.players[0].ships[ship_index].length;
        let (start, orientation) =
            random_placement(&state.players[0].board, length, rng).unwrap();
        state = apply_action(
            &state,
            &GameAction::PlaceShip {
                player_index: 0,
                ship_index,
                start,
                orientation,
            },
        )
        .unwrap();
    }
    apply_action(&state, &GameAction::StartBattle).unwrap()
}

/// Drive a full game, asserting the no-repeat-shot invariant along the way.
fn drive_game(p1: Difficulty, p2: Difficulty, seed: u64) -> GameState {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut state = setup_game(&mut rng);
    let strategies = [p1, p2];
    let mut shots: [HashSet<Coord>; 2] = [HashSet::new(), HashSet::new()];

    let mut turns = 0;
    while state.phase == Phase::Playing {
        turns += 1;
        assert!(turns <= MAX_TURNS, "game exceeded {MAX_TURNS} turns");
        let side = state.current_player_index;
        let coord = strategies[side].next_shot(&state, side, &mut rng).unwrap();
        assert!(
            shots[side].insert(coord),
            "{:?} repeated shot {coord:?}",
            strategies[side]
        );
        state = apply_action(&state, &GameAction::Shot { coord }).unwrap();
    }
    state
}

fn assert_clean_finish(state: &GameState) {
    assert_eq!(state.phase, Phase::Finished);
    let winner_index = state.current_player_index;
    assert_eq!(
        state.winner.as_deref(),
        Some(state.players[winner_index].id.as_str())
    );
    let loser = &state.players[opponent_of(winner_index)];
    assert!(loser.fleet_sunk());
    for ship in &loser.ships {
        for &coord in &ship.coords {
            assert_eq!(loser.board.cell(coord), Some(CellState::Hit));
        }
    }
}

#[test]
fn test_easy_self_play_runs_to_completion() {
    for seed in [1, 2, 3] {
        let state = drive_game(Difficulty::Easy, Difficulty::Easy, seed);
        assert_clean_finish(&state);
    }
}

#[test]
fn test_medium_self_play_runs_to_completion() {
    for seed in [1, 2, 3] {
        let state = drive_game(Difficulty::Medium, Difficulty::Medium, seed);
        assert_clean_finish(&state);
    }
}

#[test]
fn test_hard_self_play_runs_to_completion() {
    for seed in [1, 2, 3] {
        let state = drive_game(Difficulty::Hard, Difficulty::Hard, seed);
        assert_clean_finish(&state);
    }
}

#[test]
fn test_mixed_strategies_run_to_completion() {
    for seed in [4, 5] {
        assert_clean_finish(&drive_game(Difficulty::Hard, Difficulty::Easy, seed));
        assert_clean_finish(&drive_game(Difficulty::Easy, Difficulty::Medium, seed));
        assert_clean_finish(&drive_game(Difficulty::Medium, Difficulty::Hard, seed));
    }
}

/// Unresolved orthogonal neighbors of hit cells: the medium strategy must
/// shoot from this pool whenever it is non-empty.
fn target_pool(board: &Board) -> HashSet<Coord> {
    let mut pool = HashSet::new();
    for coord in Board::coords() {
        if board.cell(coord) != Some(CellState::Hit) {
            continue;
        }
        let mut push = |row: usize, col: usize| {
            let n = Coord::new(row, col);
            if board.cell(n).is_some_and(|s| !s.is_resolved()) {
                pool.insert(n);
            }
        };
        if coord.row > 0 {
            push(coord.row - 1, coord.col);
        }
        push(coord.row + 1, coord.col);
        if coord.col > 0 {
            push(coord.row, coord.col - 1);
        }
        push(coord.row, coord.col + 1);
    }
    pool
}

#[test]
fn test_medium_always_follows_up_on_hits() {
    let mut rng = SmallRng::seed_from_u64(21);
    let mut state = setup_game(&mut rng);

    let mut turns = 0;
    while state.phase == Phase::Playing {
        turns += 1;
        assert!(turns <= MAX_TURNS);
        let side = state.current_player_index;
        let pool = target_pool(&state.players[opponent_of(side)].board);
        let coord = Difficulty::Medium
            .next_shot(&state, side, &mut rng)
            .unwrap();
        if !pool.is_empty() {
            assert!(pool.contains(&coord), "hunted {coord:?} with targets {pool:?}");
        }
        state = apply_action(&state, &GameAction::Shot { coord }).unwrap();
    }
    assert_clean_finish(&state);
}
