use thiserror::Error;

/// Precondition violations surfaced by grid and game operations.
///
/// Each of these marks a caller bug (stale coordinates, stale tile values,
/// malformed layouts). The engine reports them as errors instead of
/// panicking, and never limps on with silently clamped input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Coordinate outside the grid.
    #[error("position ({col}, {row}) is out of range for a {size}x{size} grid")]
    OutOfRange { col: usize, row: usize, size: usize },

    /// `add_tile` aimed at a cell that already holds a tile.
    #[error("cell ({col}, {row}) is already occupied")]
    Occupied { col: usize, row: usize },

    /// The tile handed to `move_tile` is not the one the grid records at
    /// the tile's stated origin.
    #[error("tile does not match the grid's record at ({col}, {row})")]
    StaleTile { col: usize, row: usize },

    /// A layout row with the wrong number of columns.
    #[error("layout row {row} has {got} columns, expected {expected}")]
    BadLayout { row: usize, expected: usize, got: usize },
}
