use serde::{Deserialize, Serialize};

/// A direction to tilt the board toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    North,
    South,
    East,
    West,
}

impl Side {
    /// All four sides.
    pub const ALL: [Side; 4] = [Side::North, Side::South, Side::East, Side::West];

    /// Map (`col`, `row`) from this side's tilted frame, where the side
    /// plays the role of north, to the standard frame of a `size`-wide grid.
    ///
    /// The mapping is a bijection on the cell lattice; `North` is the
    /// identity, and one step up a tilted column is one step toward this
    /// side on the standard grid.
    ///
    /// ```
    /// use twenty48_core::Side;
    ///
    /// assert_eq!(Side::North.to_standard(1, 2, 4), (1, 2));
    /// assert_eq!(Side::East.to_standard(0, 2, 4), (2, 3));
    /// assert_eq!(Side::East.to_standard(0, 3, 4), (3, 3));
    /// ```
    #[inline]
    pub fn to_standard(self, col: usize, row: usize, size: usize) -> (usize, usize) {
        debug_assert!(col < size && row < size);
        let n = size - 1;
        match self {
            Side::North => (col, row),
            Side::South => (n - col, n - row),
            Side::East => (row, n - col),
            Side::West => (n - row, col),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn north_is_the_identity() {
        for col in 0..4 {
            for row in 0..4 {
                assert_eq!(Side::North.to_standard(col, row, 4), (col, row));
            }
        }
    }

    #[test]
    fn every_side_is_a_bijection() {
        for side in Side::ALL {
            let mut seen = HashSet::new();
            for col in 0..5 {
                for row in 0..5 {
                    seen.insert(side.to_standard(col, row, 5));
                }
            }
            assert_eq!(seen.len(), 25);
        }
    }

    #[test]
    fn logical_up_steps_toward_the_tilt_side() {
        assert_eq!(Side::North.to_standard(1, 1, 4), (1, 1));
        assert_eq!(Side::North.to_standard(1, 2, 4), (1, 2));
        assert_eq!(Side::South.to_standard(1, 1, 4), (2, 2));
        assert_eq!(Side::South.to_standard(1, 2, 4), (2, 1));
        assert_eq!(Side::East.to_standard(1, 1, 4), (1, 2));
        assert_eq!(Side::East.to_standard(1, 2, 4), (2, 2));
        assert_eq!(Side::West.to_standard(1, 1, 4), (2, 1));
        assert_eq!(Side::West.to_standard(1, 2, 4), (1, 1));
    }

    #[test]
    fn corners_land_on_corners() {
        for side in Side::ALL {
            for (col, row) in [(0, 0), (0, 3), (3, 0), (3, 3)] {
                let (c, r) = side.to_standard(col, row, 4);
                assert!(c == 0 || c == 3);
                assert!(r == 0 || r == 3);
            }
        }
    }
}
