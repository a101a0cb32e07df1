//! # twenty48-core
//!
//! The rule engine of the sliding-tile game 2048, with no UI, input, or
//! spawn policy attached.
//!
//! ## Features
//!
//! - Square grid of positional tiles with checked placement and movement
//! - The classic tilt: slide toward a side, merge equal pairs once each,
//!   score twice the consumed value per merge
//! - Terminal detection (2048 reached, or full board with no touching pair)
//!   and a running cross-game maximum score
//! - Layout round-tripping for saving and resuming games
//!
//! ## Quick start
//!
//! ```
//! use twenty48_core::{Game, Side, Tile};
//!
//! let mut game = Game::new(4);
//! game.add_tile(Tile::new(2, 0, 0)).unwrap();
//! game.add_tile(Tile::new(2, 0, 1)).unwrap();
//!
//! let changed = game.tilt(Side::North).unwrap();
//! assert!(changed);
//! assert_eq!(game.score(), 4);
//! assert_eq!(game.tile(0, 3).unwrap().map(|t| t.value()), Some(4));
//! assert!(!game.game_over());
//! ```
//!
//! ## Driving a full game
//!
//! The engine is passive: spawning tiles between tilts is the caller's job.
//!
//! ```
//! use twenty48_core::{Game, Side, Tile};
//!
//! let mut game = Game::new(4);
//! game.add_tile(Tile::new(2, 1, 1)).unwrap();
//! for _ in 0..100 {
//!     if game.game_over() || !game.tilt(Side::South).unwrap() {
//!         break;
//!     }
//!     if let Some(&(col, row)) = game.empty_positions().last() {
//!         game.add_tile(Tile::new(2, col, row)).unwrap();
//!     }
//! }
//! assert!(game.score() > 0);
//! ```

pub mod engine;

pub use engine::{EngineError, Game, Grid, Side, Tile};
