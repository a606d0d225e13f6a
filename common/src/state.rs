use std::{fmt, str::FromStr};

use crate::{
    Jump, Position,
    board::{self, Cell, Shape},
    coord::Coord,
    error::{Error, Result},
    problem::{Direction, SearchState},
};

/// A snapshot of the board. Never changes once created; a move produces a
/// new `State`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct State {
    position: Position,
    shape: Shape,
    /// Smallest encoding among the symmetric variants of `position`
    min_code: u64,
    remaining_pegs: u32,
}

impl State {
    /// Parse board text, see [`crate::board`] for the format.
    pub fn parse(text: &str) -> Result<State> {
        let (position, shape) = board::parse(text)?;
        Ok(Self::from_parts(position, shape))
    }

    /// Build a state from raw masks without any validation.
    pub fn from_bits(occupancy: u64, invalid_mask: u64) -> State {
        Self::from_parts(Position(occupancy), Shape(invalid_mask))
    }

    fn from_parts(position: Position, shape: Shape) -> State {
        State {
            position,
            shape,
            min_code: position.normalize().0,
            remaining_pegs: position.count(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn remaining_pegs(&self) -> u32 {
        self.remaining_pegs
    }

    /// Number of cells on the board, free or occupied
    pub fn valid_positions(&self) -> u32 {
        self.shape.valid_positions()
    }

    pub fn cell(&self, coord: Coord) -> Cell {
        board::cell(self.position, self.shape, coord)
    }

    /// Jump the peg at `peg` in `direction`, if that is a legal move.
    pub fn make_move(&self, peg: Coord, direction: Direction) -> Option<State> {
        let (drow, dcol) = direction.offset();
        let over = peg.shift(drow, dcol)?;
        let dst = peg.shift(2 * drow, 2 * dcol)?;
        if self.shape.contains(over) || self.shape.contains(dst) {
            return None;
        }

        let jump = Jump::from_coordinate_pair(peg, dst)?;
        if !self.position.can_jump(jump) {
            return None;
        }

        Some(Self::from_parts(self.position.apply_jump(jump), self.shape))
    }

    pub fn to_text(&self) -> String {
        board::render(self.position, self.shape)
    }
}

impl SearchState for State {
    fn code(&self) -> u64 {
        self.position.0
    }

    fn min_code(&self) -> u64 {
        self.min_code
    }
}

impl FromStr for State {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        State::parse(s)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
