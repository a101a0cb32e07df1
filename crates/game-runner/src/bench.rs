//! Seeded random playouts in parallel: one rayon task per game, a progress
//! bar for long batches, and a summary of how the policy fared.

use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;
use twenty48_core::{Game, Side};

use crate::spawner;

/// Bench configuration supplied by the CLI.
#[derive(Clone, Debug)]
pub struct BenchOptions {
    pub games: u64,
    pub size: usize,
    pub base_seed: u64,
    pub max_steps: u64,
    pub max_workers: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchSummary {
    pub games: u64,
    pub total_steps: u64,
    pub mean_score: u64,
    pub best_score: u64,
    pub best_tile: u32,
}

/// One finished playout.
#[derive(Debug, Clone)]
struct GameResult {
    seed: u64,
    steps: u64,
    score: u64,
    highest_tile: u32,
}

pub fn run_bench(opts: BenchOptions) -> Result<BenchSummary> {
    if opts.games == 0 {
        bail!("games must be > 0");
    }
    if opts.size < 2 {
        bail!("boards smaller than 2x2 cannot host a game");
    }

    info!(
        "Running {} seeded games on {}x{} boards",
        opts.games, opts.size, opts.size
    );
    let pb = ProgressBar::new(opts.games);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] {wide_bar} {pos}/{len} ({eta})",
        )
        .unwrap()
        .progress_chars("█▉▊▋▌▍▎▏  "),
    );

    let process = || -> Result<Vec<GameResult>> {
        (0..opts.games)
            .into_par_iter()
            .map(|idx| {
                let result = play_one(&opts, opts.base_seed.wrapping_add(idx));
                pb.inc(1);
                result
            })
            .collect()
    };

    let results: Vec<GameResult> = if let Some(n) = opts.max_workers {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build()
            .context("failed to build rayon thread pool")?
            .install(process)?
    } else {
        process()?
    };

    pb.finish_with_message("games finished");

    let total_steps: u64 = results.iter().map(|r| r.steps).sum();
    let total_score: u64 = results.iter().map(|r| r.score).sum();
    let best = results
        .iter()
        .max_by_key(|r| r.score)
        .expect("games is non-zero");
    info!(
        "Best game: seed {} scored {} with tile {} in {} steps",
        best.seed, best.score, best.highest_tile, best.steps
    );

    Ok(BenchSummary {
        games: opts.games,
        total_steps,
        mean_score: total_score / opts.games,
        best_score: best.score,
        best_tile: results.iter().map(|r| r.highest_tile).max().unwrap_or(0),
    })
}

/// Drive one seeded game with a random policy until it ends, no direction
/// changes anything, or the step cap trips.
fn play_one(opts: &BenchOptions, seed: u64) -> Result<GameResult> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::new(opts.size);
    spawner::seed_board(&mut game, &mut rng)?;

    let mut steps = 0u64;
    let mut sides = Side::ALL;
    while !game.game_over() && steps < opts.max_steps {
        sides.shuffle(&mut rng);
        let mut moved = false;
        for side in sides {
            if game.tilt(side)? {
                moved = true;
                break;
            }
        }
        if !moved {
            break;
        }
        steps += 1;
        if !game.game_over() {
            spawner::spawn_random_tile(&mut game, &mut rng)?;
        }
    }

    debug!(
        "seed {}: {} steps, score {}, best tile {}",
        seed,
        steps,
        game.score(),
        game.highest_tile()
    );
    Ok(GameResult {
        seed,
        steps,
        score: game.score(),
        highest_tile: game.highest_tile(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(games: u64) -> BenchOptions {
        BenchOptions {
            games,
            size: 3,
            base_seed: 42,
            max_steps: 500,
            max_workers: Some(2),
        }
    }

    #[test]
    fn one_seed_always_replays_the_same_game() {
        let opts = options(1);
        let a = play_one(&opts, 99).unwrap();
        let b = play_one(&opts, 99).unwrap();
        assert_eq!(a.steps, b.steps);
        assert_eq!(a.score, b.score);
        assert_eq!(a.highest_tile, b.highest_tile);
    }

    #[test]
    fn a_batch_plays_through_and_aggregates() {
        let summary = run_bench(options(4)).unwrap();
        assert_eq!(summary.games, 4);
        assert!(summary.total_steps >= 4);
        assert!(summary.best_score >= summary.mean_score);
        assert!(summary.best_tile >= 4);
    }

    #[test]
    fn zero_games_is_rejected() {
        assert!(run_bench(BenchOptions {
            games: 0,
            ..options(1)
        })
        .is_err());
    }
}
