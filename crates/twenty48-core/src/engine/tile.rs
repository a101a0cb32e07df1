use serde::{Deserialize, Serialize};

/// A single tile: a face value plus the (col, row) cell it occupies.
///
/// Tiles are plain copyable values; the grid is the source of truth for
/// placement. A `Tile` you hold goes stale the moment the grid moves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    value: u32,
    col: usize,
    row: usize,
}

impl Tile {
    /// A tile of `value` at (`col`, `row`).
    #[inline]
    pub fn new(value: u32, col: usize, row: usize) -> Self {
        Tile { value, col, row }
    }

    /// The face value (2, 4, 8, ...).
    #[inline]
    pub fn value(self) -> u32 {
        self.value
    }

    #[inline]
    pub fn col(self) -> usize {
        self.col
    }

    #[inline]
    pub fn row(self) -> usize {
        self.row
    }

    /// The same tile relocated to (`col`, `row`).
    #[inline]
    pub(crate) fn moved_to(self, col: usize, row: usize) -> Self {
        Tile { value: self.value, col, row }
    }

    /// The tile left behind when this one lands on an equal-valued tile at
    /// (`col`, `row`): same cell, doubled value.
    #[inline]
    pub(crate) fn merged_at(self, col: usize, row: usize) -> Self {
        Tile { value: self.value * 2, col, row }
    }
}
