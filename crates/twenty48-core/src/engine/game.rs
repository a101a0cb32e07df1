use std::fmt;

use super::error::EngineError;
use super::grid::Grid;
use super::side::Side;
use super::tile::Tile;

/// The 2048 rule engine: a grid plus score accounting and terminal state.
///
/// `Game` is deliberately passive. It never spawns tiles, reads input, or
/// renders beyond the diagnostic `Display`; callers place tiles with
/// [`add_tile`](Game::add_tile), move with [`tilt`](Game::tilt), and consult
/// [`game_over`](Game::game_over) between the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    grid: Grid,
    score: u64,
    max_score: u64,
    game_over: bool,
}

impl Game {
    /// Largest tile value; a board containing it is terminal.
    pub const MAX_TILE: u32 = 2048;

    /// An empty `size` x `size` game with zeroed scores.
    pub fn new(size: usize) -> Self {
        Game {
            grid: Grid::new(size),
            score: 0,
            max_score: 0,
            game_over: false,
        }
    }

    /// Rebuild a game from rows of tile values plus its scalar state.
    ///
    /// `rows[0]` is the top visual row and `0` marks an empty cell. The
    /// scalars are taken as given, not recomputed, so saved states resume
    /// exactly, terminal ones included.
    ///
    /// ```
    /// use twenty48_core::Game;
    ///
    /// let game = Game::from_layout(
    ///     &[
    ///         vec![4, 0],
    ///         vec![2, 2],
    ///     ],
    ///     12,
    ///     40,
    ///     false,
    /// )
    /// .unwrap();
    /// assert_eq!(game.tile(0, 1).unwrap().map(|t| t.value()), Some(4));
    /// assert_eq!(game.score(), 12);
    /// assert_eq!(game.max_score(), 40);
    /// ```
    pub fn from_layout(
        rows: &[Vec<u32>],
        score: u64,
        max_score: u64,
        game_over: bool,
    ) -> Result<Self, EngineError> {
        let size = rows.len();
        let mut grid = Grid::new(size);
        for (visual, values) in rows.iter().enumerate() {
            if values.len() != size {
                return Err(EngineError::BadLayout {
                    row: visual,
                    expected: size,
                    got: values.len(),
                });
            }
            let row = size - 1 - visual;
            for (col, &value) in values.iter().enumerate() {
                if value != 0 {
                    grid.add_tile(Tile::new(value, col, row))?;
                }
            }
        }
        Ok(Game {
            grid,
            score,
            max_score,
            game_over,
        })
    }

    /// Board width (and height).
    #[inline]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// The tile at (`col`, `row`), or `None` for an empty cell.
    #[inline]
    pub fn tile(&self, col: usize, row: usize) -> Result<Option<Tile>, EngineError> {
        self.grid.tile(col, row)
    }

    /// The current game's score.
    #[inline]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Best score seen across games, folded in whenever a game ends.
    #[inline]
    pub fn max_score(&self) -> u64 {
        self.max_score
    }

    /// Whether the game has ended. A pure read; `tilt` and `add_tile` keep
    /// the flag current.
    #[inline]
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Highest tile value on the board, `0` when the board is empty.
    pub fn highest_tile(&self) -> u32 {
        self.grid.tiles().map(Tile::value).max().unwrap_or(0)
    }

    /// Empty cells as (col, row), bottom row first.
    #[inline]
    pub fn empty_positions(&self) -> Vec<(usize, usize)> {
        self.grid.empty_positions()
    }

    /// The board as rows of tile values, top row first. Inverse of
    /// [`from_layout`](Game::from_layout).
    pub fn layout(&self) -> Vec<Vec<u32>> {
        let size = self.grid.size();
        let mut rows = vec![vec![0; size]; size];
        for tile in self.grid.tiles() {
            rows[size - 1 - tile.row()][tile.col()] = tile.value();
        }
        rows
    }

    /// Place a freshly spawned tile, then recompute the terminal state.
    pub fn add_tile(&mut self, tile: Tile) -> Result<(), EngineError> {
        self.grid.add_tile(tile)?;
        self.refresh_game_over();
        Ok(())
    }

    /// Tilt the board toward `side`, sliding every tile as far as it goes
    /// and merging equal-valued collisions.
    ///
    /// Returns whether any tile moved. Each merge adds twice the consumed
    /// tile's value to the score, and a cell that absorbed a merge cannot
    /// merge again within the same tilt. The terminal state is recomputed
    /// before returning.
    ///
    /// ```
    /// use twenty48_core::{Game, Side, Tile};
    ///
    /// let mut game = Game::new(4);
    /// game.add_tile(Tile::new(2, 0, 0)).unwrap();
    /// game.add_tile(Tile::new(2, 0, 1)).unwrap();
    /// assert!(game.tilt(Side::North).unwrap());
    /// assert_eq!(game.tile(0, 3).unwrap().map(|t| t.value()), Some(4));
    /// assert_eq!(game.score(), 4);
    /// ```
    pub fn tilt(&mut self, side: Side) -> Result<bool, EngineError> {
        let size = self.grid.size();
        // One marker per logical cell, set once a merge lands there.
        let mut merged = vec![false; size * size];
        let mut changed = false;

        // The top logical row never moves. Below it, higher rows settle
        // first so later tiles see final positions above them.
        for row in (0..size.saturating_sub(1)).rev() {
            for col in 0..size {
                let (c, r) = side.to_standard(col, row, size);
                if let Some(tile) = self.grid.at(c, r) {
                    changed |= self.slide_tile(tile, col, row, side, &mut merged)?;
                }
            }
        }

        self.refresh_game_over();
        Ok(changed)
    }

    /// Restart: fold the score into the running maximum if the game was
    /// over, then zero the score, reset the flag, and empty the grid.
    pub fn clear(&mut self) {
        if self.game_over {
            self.max_score = self.max_score.max(self.score);
        }
        self.score = 0;
        self.game_over = false;
        self.grid.clear();
    }

    /// Slide one tile up its logical column. Returns whether it moved.
    fn slide_tile(
        &mut self,
        tile: Tile,
        col: usize,
        row: usize,
        side: Side,
        merged: &mut [bool],
    ) -> Result<bool, EngineError> {
        let size = self.grid.size();
        let target = match self.nearest_above(col, row, side) {
            None => size - 1,
            Some((above, other))
                if other.value() == tile.value() && !merged[above * size + col] =>
            {
                above
            }
            Some((above, _)) if above == row + 1 => return Ok(false),
            Some((above, _)) => above - 1,
        };

        let (c, r) = side.to_standard(col, target, size);
        let did_merge = self.grid.move_tile(c, r, tile)?;
        merged[target * size + col] = did_merge;
        if did_merge {
            self.score += 2 * u64::from(tile.value());
        }
        Ok(true)
    }

    /// Nearest occupied cell strictly above (`col`, `row`) in the tilted
    /// frame, as (logical row, tile).
    fn nearest_above(&self, col: usize, row: usize, side: Side) -> Option<(usize, Tile)> {
        let size = self.grid.size();
        for above in row + 1..size {
            let (c, r) = side.to_standard(col, above, size);
            if let Some(tile) = self.grid.at(c, r) {
                return Some((above, tile));
            }
        }
        None
    }

    /// Recompute `game_over`; while the state is terminal the score stays
    /// folded into the running maximum.
    fn refresh_game_over(&mut self) {
        self.game_over = is_terminal(&self.grid);
        if self.game_over {
            self.max_score = self.max_score.max(self.score);
        }
    }
}

/// A grid is terminal when the winning tile is present, or when it is full
/// and no two equal tiles touch.
fn is_terminal(grid: &Grid) -> bool {
    max_tile_exists(grid) || !any_move_exists(grid)
}

fn max_tile_exists(grid: &Grid) -> bool {
    grid.tiles().any(|tile| tile.value() == Game::MAX_TILE)
}

/// True when some tilt could still change the board: an empty cell, or two
/// equal tiles side by side.
fn any_move_exists(grid: &Grid) -> bool {
    let size = grid.size();
    for row in 0..size {
        for col in 0..size {
            let value = match grid.at(col, row) {
                Some(tile) => tile.value(),
                None => return true,
            };
            if col + 1 < size && grid.at(col + 1, row).map(Tile::value) == Some(value) {
                return true;
            }
            if row + 1 < size && grid.at(col, row + 1).map(Tile::value) == Some(value) {
                return true;
            }
        }
    }
    false
}

impl fmt::Display for Game {
    /// Rows top to bottom, each cell in a fixed-width field, then a score
    /// trailer. Diagnostic only; equality on `Game` is structural.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.grid.size();
        writeln!(f)?;
        writeln!(f, "[")?;
        for row in (0..size).rev() {
            for col in 0..size {
                match self.grid.at(col, row) {
                    Some(tile) => write!(f, "|{:>4}", tile.value())?,
                    None => write!(f, "|    ")?,
                }
            }
            writeln!(f, "|")?;
        }
        let status = if self.game_over { "over" } else { "not over" };
        writeln!(f, "] {} (max: {}) (game is {})", self.score, self.max_score, status)
    }
}
