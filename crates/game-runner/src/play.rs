//! Interactive terminal session: render the board, read a key, tilt, spawn.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use twenty48_core::{Game, Side};

use crate::spawner;

/// Interactive options supplied by the CLI.
#[derive(Clone, Debug)]
pub struct PlayOptions {
    pub size: usize,
    pub seed: Option<u64>,
}

fn parse_side(input: &str) -> Option<Side> {
    match input.trim() {
        "w" => Some(Side::North),
        "a" => Some(Side::West),
        "s" => Some(Side::South),
        "d" => Some(Side::East),
        _ => None,
    }
}

/// Play one game on stdin/stdout until it ends, `q`, or end of input.
pub fn run_play(opts: PlayOptions) -> Result<()> {
    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut game = Game::new(opts.size);
    spawner::seed_board(&mut game, &mut rng)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{game}");
        if game.game_over() {
            break;
        }
        print!("tilt [w/a/s/d, q quits]: ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let trimmed = line.trim();
        if trimmed == "q" {
            break;
        }
        let side = match parse_side(trimmed) {
            Some(side) => side,
            None => {
                println!("unknown input '{trimmed}' (w/a/s/d to tilt, q to quit)");
                continue;
            }
        };
        if game.tilt(side)? && !game.game_over() {
            spawner::spawn_random_tile(&mut game, &mut rng)?;
        }
    }

    info!(
        "Session over: score {}, best tile {}, max score {}",
        game.score(),
        game.highest_tile(),
        game.max_score()
    );
    Ok(())
}
