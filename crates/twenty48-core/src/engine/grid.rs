use super::error::EngineError;
use super::tile::Tile;

/// A square board of optional tiles, origin (0, 0) at the bottom-left
/// corner, rows growing upward and columns rightward.
///
/// Cells are stored row-major. The grid upholds one invariant: a stored
/// tile's recorded (col, row) always names the cell holding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<Tile>>,
}

impl Grid {
    /// An empty `size` x `size` grid.
    pub fn new(size: usize) -> Self {
        Grid {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Board width (and height).
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The tile at (`col`, `row`), or `None` for an empty cell.
    pub fn tile(&self, col: usize, row: usize) -> Result<Option<Tile>, EngineError> {
        Ok(self.cells[self.index(col, row)?])
    }

    /// Place `tile` on the cell its position names.
    pub fn add_tile(&mut self, tile: Tile) -> Result<(), EngineError> {
        let idx = self.index(tile.col(), tile.row())?;
        if self.cells[idx].is_some() {
            return Err(EngineError::Occupied {
                col: tile.col(),
                row: tile.row(),
            });
        }
        self.cells[idx] = Some(tile);
        Ok(())
    }

    /// Relocate `tile` to (`col`, `row`), merging with an equal-valued
    /// occupant into a doubled tile. Returns whether a merge happened.
    ///
    /// `tile` must be the grid's current record at its origin; anything
    /// else is a stale value and rejected. Moving a tile onto its own cell
    /// is a no-op.
    pub fn move_tile(&mut self, col: usize, row: usize, tile: Tile) -> Result<bool, EngineError> {
        let src = self.index(tile.col(), tile.row())?;
        let dst = self.index(col, row)?;
        if self.cells[src] != Some(tile) {
            return Err(EngineError::StaleTile {
                col: tile.col(),
                row: tile.row(),
            });
        }
        if src == dst {
            return Ok(false);
        }
        self.cells[src] = None;
        match self.cells[dst] {
            Some(other) => {
                debug_assert_eq!(other.value(), tile.value(), "merging unequal tiles");
                self.cells[dst] = Some(tile.merged_at(col, row));
                Ok(true)
            }
            None => {
                self.cells[dst] = Some(tile.moved_to(col, row));
                Ok(false)
            }
        }
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Occupied cells, bottom row first, left to right within a row.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Empty cells as (col, row), in the same scan order as `tiles`.
    pub fn empty_positions(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(idx, _)| (idx % self.size, idx / self.size))
            .collect()
    }

    /// Infallible cell read for coordinates already known to be in range;
    /// the engine's scan loops use this.
    #[inline]
    pub(crate) fn at(&self, col: usize, row: usize) -> Option<Tile> {
        debug_assert!(col < self.size && row < self.size);
        self.cells[row * self.size + col]
    }

    #[inline]
    fn index(&self, col: usize, row: usize) -> Result<usize, EngineError> {
        if col >= self.size || row >= self.size {
            return Err(EngineError::OutOfRange {
                col,
                row,
                size: self.size,
            });
        }
        Ok(row * self.size + col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_read_back() {
        let mut grid = Grid::new(4);
        grid.add_tile(Tile::new(2, 1, 2)).unwrap();
        assert_eq!(grid.tile(1, 2).unwrap(), Some(Tile::new(2, 1, 2)));
        assert_eq!(grid.tile(0, 0).unwrap(), None);
    }

    #[test]
    fn out_of_range_is_an_error() {
        let mut grid = Grid::new(4);
        assert_eq!(
            grid.tile(4, 0),
            Err(EngineError::OutOfRange {
                col: 4,
                row: 0,
                size: 4,
            })
        );
        assert_eq!(
            grid.add_tile(Tile::new(2, 0, 9)),
            Err(EngineError::OutOfRange {
                col: 0,
                row: 9,
                size: 4,
            })
        );
    }

    #[test]
    fn add_onto_occupied_cell_is_an_error() {
        let mut grid = Grid::new(4);
        grid.add_tile(Tile::new(2, 0, 0)).unwrap();
        assert_eq!(
            grid.add_tile(Tile::new(4, 0, 0)),
            Err(EngineError::Occupied { col: 0, row: 0 })
        );
    }

    #[test]
    fn move_into_empty_cell() {
        let mut grid = Grid::new(4);
        let tile = Tile::new(2, 0, 0);
        grid.add_tile(tile).unwrap();
        assert_eq!(grid.move_tile(0, 3, tile), Ok(false));
        assert_eq!(grid.tile(0, 0).unwrap(), None);
        assert_eq!(grid.tile(0, 3).unwrap(), Some(Tile::new(2, 0, 3)));
    }

    #[test]
    fn move_onto_equal_tile_merges() {
        let mut grid = Grid::new(4);
        let mover = Tile::new(2, 0, 0);
        grid.add_tile(mover).unwrap();
        grid.add_tile(Tile::new(2, 0, 3)).unwrap();
        assert_eq!(grid.move_tile(0, 3, mover), Ok(true));
        assert_eq!(grid.tile(0, 0).unwrap(), None);
        assert_eq!(grid.tile(0, 3).unwrap(), Some(Tile::new(4, 0, 3)));
    }

    #[test]
    fn stale_tile_is_rejected() {
        let mut grid = Grid::new(4);
        let tile = Tile::new(2, 0, 0);
        grid.add_tile(tile).unwrap();
        grid.move_tile(0, 1, tile).unwrap();
        // `tile` still says (0, 0); the grid has moved on.
        assert_eq!(
            grid.move_tile(0, 2, tile),
            Err(EngineError::StaleTile { col: 0, row: 0 })
        );
    }

    #[test]
    fn move_onto_own_cell_is_a_no_op() {
        let mut grid = Grid::new(4);
        let tile = Tile::new(2, 2, 2);
        grid.add_tile(tile).unwrap();
        assert_eq!(grid.move_tile(2, 2, tile), Ok(false));
        assert_eq!(grid.tile(2, 2).unwrap(), Some(tile));
    }

    #[test]
    fn clear_empties_every_cell() {
        let mut grid = Grid::new(2);
        grid.add_tile(Tile::new(2, 0, 0)).unwrap();
        grid.add_tile(Tile::new(4, 1, 1)).unwrap();
        grid.clear();
        assert_eq!(grid.tiles().count(), 0);
        assert_eq!(grid.empty_positions().len(), 4);
    }

    #[test]
    fn empty_positions_scan_bottom_row_first() {
        let mut grid = Grid::new(2);
        grid.add_tile(Tile::new(2, 1, 0)).unwrap();
        assert_eq!(grid.empty_positions(), vec![(0, 0), (0, 1), (1, 1)]);
    }
}
