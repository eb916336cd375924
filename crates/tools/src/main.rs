//! Headless soak harness: runs the session for many frames with scripted
//! input, asserting board invariants every frame, then prints a JSON summary.

use anyhow::{Context, Result, ensure};
use clap::Parser;
use pacman_core::game::maze::GHOST_HOUSE;
use pacman_core::{DirectionKeys, FrameOutcome, Game, GameConfig};
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};
use serde::Serialize;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Maximum frames to simulate (60 per second of play).
    #[arg(short, long, default_value_t = 18_000)]
    frames: u32,
    /// Frames between scripted direction changes.
    #[arg(long, default_value_t = 45)]
    dir_period: u32,
}

#[derive(Serialize)]
struct EnemyReport {
    name: &'static str,
    col: i32,
    row: i32,
    score: i64,
}

#[derive(Serialize)]
struct Summary {
    seed: u64,
    frames_run: u32,
    outcome: String,
    score: i64,
    lives: u32,
    dots_left: usize,
    snapshot_hash: String,
    enemies: Vec<EnemyReport>,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn scripted_keys(rng: &mut ChaCha8Rng) -> DirectionKeys {
    choose(rng, &[
        DirectionKeys { left: true, ..Default::default() },
        DirectionKeys { right: true, ..Default::default() },
        DirectionKeys { up: true, ..Default::default() },
        DirectionKeys { down: true, ..Default::default() },
    ])
}

fn check_invariants(game: &Game) -> Result<()> {
    let player_tile = game.player().cell().tile();
    ensure!(!game.grid().is_wall(player_tile), "player inside wall at {player_tile:?}");

    for enemy in game.enemies() {
        let tile = enemy.cell().tile();
        ensure!(
            !game.grid().is_wall(tile) || GHOST_HOUSE.contains(&tile),
            "{} inside wall at {tile:?}",
            enemy.variant.name()
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut game = Game::new(args.seed, GameConfig::default());
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut keys = scripted_keys(&mut rng);
    let mut frames_run = 0;
    let mut outcome = FrameOutcome::Continue;

    for frame in 0..args.frames {
        if frame % args.dir_period.max(1) == 0 {
            keys = scripted_keys(&mut rng);
        }
        outcome = game.frame(&keys);
        frames_run = frame + 1;

        check_invariants(&game)
            .with_context(|| format!("invariant violated on frame {frames_run}"))?;

        if matches!(
            outcome,
            FrameOutcome::GameOver { .. } | FrameOutcome::LevelComplete { .. }
        ) {
            break;
        }
    }

    let summary = Summary {
        seed: args.seed,
        frames_run,
        outcome: match outcome {
            FrameOutcome::Continue => "running".to_string(),
            FrameOutcome::LifeLost { lives_left } => format!("life-lost({lives_left})"),
            FrameOutcome::GameOver { .. } => "game-over".to_string(),
            FrameOutcome::LevelComplete { .. } => "level-complete".to_string(),
        },
        score: game.score(),
        lives: game.lives(),
        dots_left: game.dots().len(),
        snapshot_hash: format!("0x{:016x}", game.snapshot_hash()),
        enemies: game
            .enemies()
            .iter()
            .map(|enemy| EnemyReport {
                name: enemy.variant.name(),
                col: enemy.cell().col,
                row: enemy.cell().row,
                score: enemy.score,
            })
            .collect(),
    };

    println!("{}", serde_json::to_string_pretty(&summary).context("serialize summary")?);
    Ok(())
}
