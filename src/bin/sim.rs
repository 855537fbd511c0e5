//! AI-vs-AI simulator: drives complete games through the engine's action
//! API and reports per-strategy win counts.

use anyhow::Context;
use broadside::{
    apply_action, init_logging, new_game, next_unplaced_ship_index, random_placement, Difficulty,
    GameAction, Phase,
};
use clap::Parser;
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Turn cap: 100 cells per side, so any legal game ends well before this.
const MAX_TURNS: usize = 300;

#[derive(Parser)]
#[command(name = "sim", about = "Drive complete games between two computer strategies")]
struct Args {
    /// Strategy for player 1: easy, medium or hard.
    #[arg(long, default_value = "hard")]
    p1: Difficulty,
    /// Strategy for player 2: easy, medium or hard.
    #[arg(long, default_value = "medium")]
    p2: Difficulty,
    /// Number of games to play.
    #[arg(long, default_value_t = 100)]
    games: u32,
    /// RNG seed; omit for a fresh seed per run.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let mut wins = [0u32; 2];
    for game_no in 1..=args.games {
        let winner_index = run_game(args.p1, args.p2, &mut rng)?;
        wins[winner_index] += 1;
        info!("game {game_no}: player{} wins", winner_index + 1);
    }

    println!("player1 ({:?}): {} wins", args.p1, wins[0]);
    println!("player2 ({:?}): {} wins", args.p2, wins[1]);
    Ok(())
}

/// Play one full game; returns the winning player index.
fn run_game(p1: Difficulty, p2: Difficulty, rng: &mut SmallRng) -> anyhow::Result<usize> {
    let mut state = new_game(rng)?;

    // player 1's slots start unplaced; fill them the same way the engine
    // auto-places player 2
    while let Some(ship_index) = next_unplaced_ship_index(&state, 0) {
        let length = state.players[0].ships[ship_index].length;
        let (start, orientation) = random_placement(&state.players[0].board, length, rng)?;
        state = apply_action(
            &state,
            &GameAction::PlaceShip {
                player_index: 0,
                ship_index,
                start,
                orientation,
            },
        )?;
    }
    state = apply_action(&state, &GameAction::StartBattle)?;

    let strategies = [p1, p2];
    let mut turns = 0;
    while state.phase == Phase::Playing {
        turns += 1;
        anyhow::ensure!(turns <= MAX_TURNS, "game exceeded {MAX_TURNS} turns");
        let side = state.current_player_index;
        let coord = strategies[side].next_shot(&state, side, rng)?;
        state = apply_action(&state, &GameAction::Shot { coord })?;
    }

    let winner = state
        .winner
        .as_deref()
        .context("finished game without a winner")?;
    Ok(if winner == state.players[0].id { 0 } else { 1 })
}
