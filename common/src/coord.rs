use std::{fmt, ops::Sub};

use crate::{NR_CELLS, SIZE};

/// A cell coordinate on the square grid. Row 0 is the top row.
///
/// Invariant: can only represent coordinates inside the grid
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub struct Coord {
    row: i8,
    col: i8,
}

impl Sub for Coord {
    type Output = (i8, i8);

    fn sub(self, rhs: Self) -> Self::Output {
        (self.row - rhs.row, self.col - rhs.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Coord {
    pub fn new(row: i8, col: i8) -> Option<Self> {
        let coord = Coord { row, col };
        if coord.is_valid() { Some(coord) } else { None }
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        if idx >= NR_CELLS {
            return None;
        }
        Self::new((idx / SIZE) as i8, (idx % SIZE) as i8)
    }

    /// Cell index, `row * SIZE + col`. Also the bit index in a `Position`.
    pub fn index(self) -> usize {
        self.row as usize * SIZE + self.col as usize
    }

    pub fn bitmask(self) -> u64 {
        1u64 << self.index()
    }

    /// Quarter turn around the centre of the grid: (i, j) -> (j, N-1-i)
    pub fn rotate(self) -> Coord {
        Coord {
            row: self.col,
            col: SIZE as i8 - 1 - self.row,
        }
    }

    /// Mirror image along the vertical axis: (i, j) -> (i, N-1-j)
    pub fn mirror(self) -> Coord {
        Coord {
            row: self.row,
            col: SIZE as i8 - 1 - self.col,
        }
    }

    /// Returns `None` when the shifted coordinate leaves the grid, which
    /// also rules out wrapping around into the neighbouring row.
    pub fn shift(self, row: i8, col: i8) -> Option<Coord> {
        Self::new(self.row + row, self.col + col)
    }

    fn is_valid(self) -> bool {
        let range = 0..SIZE as i8;
        range.contains(&self.row) && range.contains(&self.col)
    }

    /// All coordinates in increasing index order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..NR_CELLS).filter_map(Coord::from_index)
    }

    pub fn row(self) -> i8 {
        self.row
    }
    pub fn col(self) -> i8 {
        self.col
    }
}
