mod bench;
mod play;
mod spawner;

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;

use bench::BenchOptions;
use play::PlayOptions;

#[derive(Debug, Parser)]
#[command(author, version, about = "Drive 2048 games on the twenty48-core rule engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Board width and height
        #[arg(long, value_name = "N", default_value_t = 4)]
        size: usize,

        /// Seed for the spawn RNG (defaults to entropy)
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,
    },
    /// Run seeded random playouts and report summary statistics
    Bench {
        /// Number of games to play
        #[arg(long, value_name = "N", default_value_t = 100)]
        games: u64,

        /// Board width and height
        #[arg(long, value_name = "N", default_value_t = 4)]
        size: usize,

        /// Base seed; game i plays with seed + i
        #[arg(long, value_name = "SEED", default_value_t = 0)]
        seed: u64,

        /// Step cap per game, as a runaway guard
        #[arg(long, value_name = "N", default_value_t = 100_000)]
        max_steps: u64,

        /// Number of worker threads (defaults to Rayon default)
        #[arg(long, value_name = "N")]
        workers: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match cli.command {
        Command::Play { size, seed } => play::run_play(PlayOptions { size, seed }),
        Command::Bench {
            games,
            size,
            seed,
            max_steps,
            workers,
        } => {
            let summary = bench::run_bench(BenchOptions {
                games,
                size,
                base_seed: seed,
                max_steps,
                max_workers: workers,
            })?;
            info!(
                "Completed {} games: {} total steps, mean score {}, best score {}, best tile {}",
                summary.games,
                summary.total_steps,
                summary.mean_score,
                summary.best_score,
                summary.best_tile
            );
            Ok(())
        }
    }
}
