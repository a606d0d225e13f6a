//! Text encoding of boards.
//!
//! A board is `SIZE` lines of `SIZE` characters each, joined by `\n`:
//!
//! ```text
//! xxoooxx
//! xxoooxx
//! ooooooo
//! ooo.ooo
//! ooooooo
//! xxoooxx
//! xxoooxx
//! ```
//!
//! `.` is a free hole, `o` a peg and `x` a cell that is not part of the
//! board. The set of `x` cells must look the same under every rotation and
//! reflection, the pegs may be placed arbitrarily.

use crate::{
    Position, SIZE,
    coord::Coord,
    error::{Error, FormatError, Result},
    symmetry,
};

pub const FREE: char = '.';
pub const OCCUPIED: char = 'o';
pub const INVALID: char = 'x';

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Invalid,
    Occupied,
    Free,
}

impl Cell {
    pub fn glyph(self) -> char {
        match self {
            Cell::Invalid => INVALID,
            Cell::Occupied => OCCUPIED,
            Cell::Free => FREE,
        }
    }

    pub fn from_glyph(c: char) -> Option<Cell> {
        match c {
            INVALID => Some(Cell::Invalid),
            OCCUPIED => Some(Cell::Occupied),
            FREE => Some(Cell::Free),
            _ => None,
        }
    }
}

/// The cells that are not part of the board.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default)]
pub struct Shape(pub u64);

impl Shape {
    pub fn contains(&self, coord: Coord) -> bool {
        self.0 & coord.bitmask() > 0
    }

    /// Number of cells that are part of the board
    pub fn valid_positions(&self) -> u32 {
        crate::NR_CELLS as u32 - self.0.count_ones()
    }

    pub fn is_symmetric(&self) -> bool {
        symmetry::is_symmetric(self.0)
    }
}

/// Parse board text into the occupied cells and the board shape.
pub fn parse(text: &str) -> Result<(Position, Shape)> {
    let rows: Vec<&str> = text.split('\n').collect();
    if rows.len() != SIZE {
        return Err(FormatError::RowCount {
            expected: SIZE,
            found: rows.len(),
        }
        .into());
    }

    let mut occupied = 0;
    let mut invalid = 0;
    for (row, line) in rows.into_iter().enumerate() {
        let found = line.chars().count();
        if found != SIZE {
            return Err(FormatError::RowLength {
                row,
                expected: SIZE,
                found,
            }
            .into());
        }

        for (col, c) in line.chars().enumerate() {
            let mask = 1u64 << (row * SIZE + col);
            match Cell::from_glyph(c) {
                Some(Cell::Invalid) => invalid |= mask,
                Some(Cell::Occupied) => occupied |= mask,
                Some(Cell::Free) => {}
                None => return Err(FormatError::InvalidChar { row, col, found: c }.into()),
            }
        }
    }

    let shape = Shape(invalid);
    if !shape.is_symmetric() {
        return Err(Error::Asymmetry);
    }

    Ok((Position(occupied), shape))
}

pub fn cell(position: Position, shape: Shape, coord: Coord) -> Cell {
    if shape.contains(coord) {
        Cell::Invalid
    } else if position.is_occupied(coord) {
        Cell::Occupied
    } else {
        Cell::Free
    }
}

/// Inverse of [`parse`].
pub fn render(position: Position, shape: Shape) -> String {
    let mut out = String::with_capacity(SIZE * (SIZE + 1));
    for coord in Coord::all() {
        if coord.col() == 0 && coord.row() > 0 {
            out.push('\n');
        }
        out.push(cell(position, shape, coord).glyph());
    }
    out
}
