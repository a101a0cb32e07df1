//! Engine module: positional tile grid, directional tilt/merge, and
//! terminal detection. Public API stays small and ergonomic.
//!
//! - `Grid` is the square board of optional tiles; each tile records its
//!   own (col, row) and the grid keeps the two in lockstep.
//! - `Game` owns a grid plus score accounting and the game-over flag, and
//!   implements the tilt algorithm on top of it.
//! - `Side` maps tilted-frame coordinates to the standard frame so every
//!   direction reuses the same northward scan.

mod error;
mod game;
mod grid;
mod side;
mod tile;

pub use error::EngineError;
pub use game::Game;
pub use grid::Grid;
pub use side::Side;
pub use tile::Tile;
