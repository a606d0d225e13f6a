//! Exhaustive depth-first search for peg solitaire.
//!
//! A board is parsed into a [`State`], wrapped in a [`PegSolitaire`]
//! problem and handed to a [`DepthFirstSearch`]. States are deduplicated up
//! to the eight symmetries of the grid, and every route into an equivalence
//! class is kept as a predecessor edge, so that all move sequences leading to
//! a solution can be reconstructed afterwards.

pub mod board;
pub mod boards;
pub mod coord;
pub mod error;
pub mod graph;
pub mod paths;
pub mod problem;
pub mod search;
pub mod state;
pub mod symmetry;

use bitvec::{prelude::Lsb0, view::BitView};

pub use board::{Cell, Shape};
pub use coord::Coord;
pub use error::{Error, FormatError, Result};
pub use graph::{StateGraph, StateId};
pub use problem::{Direction, PegSolitaire, Problem, SearchState};
pub use search::{DepthFirstSearch, Phase, SearchOptions};
pub use state::State;

/// Side length of the grid
pub const SIZE: usize = 7;
pub const NR_CELLS: usize = SIZE * SIZE;
/// Mask with one bit set for every cell of the grid
pub const CELL_MASK: u64 = (1u64 << NR_CELLS) - 1;

/// Occupied cells, bit `i` set iff cell `i` holds a peg.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Default)]
pub struct Position(pub u64);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Jump {
    src: Coord,
    over: Coord,
    dst: Coord,
}

impl Jump {
    pub fn from_coordinate_pair(src: Coord, dst: Coord) -> Option<Jump> {
        let (drow, dcol) = dst - src;
        if !matches!((drow.abs(), dcol.abs()), (0, 2) | (2, 0)) {
            // coordinates are not axis-aligned and two cells apart
            return None;
        }

        let over = src.shift(drow / 2, dcol / 2)?;

        Some(Jump { src, over, dst })
    }

    /// Recover the jump that turns `from` into `to`, if the two positions
    /// are exactly one literal jump apart.
    pub fn between(from: Position, to: Position) -> Option<Jump> {
        let removed = from.0 & !to.0;
        let added = to.0 & !from.0;
        if removed.count_ones() != 2 || added.count_ones() != 1 {
            return None;
        }

        let dst = Coord::from_index(added.trailing_zeros() as usize)?;
        let a = Coord::from_index(removed.trailing_zeros() as usize)?;
        let b = Coord::from_index(63 - removed.leading_zeros() as usize)?;

        [(a, b), (b, a)].into_iter().find_map(|(src, over)| {
            Jump::from_coordinate_pair(src, dst).filter(|jump| jump.over == over)
        })
    }

    pub fn src(&self) -> Coord {
        self.src
    }
    pub fn over(&self) -> Coord {
        self.over
    }
    pub fn dst(&self) -> Coord {
        self.dst
    }

    fn remove_bits(&self) -> u64 {
        self.src.bitmask() | self.over.bitmask()
    }
    fn add_bits(&self) -> u64 {
        self.dst.bitmask()
    }
}

impl Position {
    /// Number of occupied cells in this position
    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }

    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.0 & coord.bitmask() > 0
    }

    /// Occupied cells in increasing index order
    pub fn pegs(&self) -> impl Iterator<Item = Coord> + '_ {
        self.0
            .view_bits::<Lsb0>()
            .iter_ones()
            .filter_map(Coord::from_index)
    }

    pub fn can_jump(&self, jump: Jump) -> bool {
        (self.0 & jump.add_bits()) == 0 && (self.0 & jump.remove_bits()).count_ones() == 2
    }
    pub fn apply_jump(&self, jump: Jump) -> Position {
        let mut next = self.0;
        next &= !jump.remove_bits();
        next |= jump.add_bits();
        Position(next)
    }

    pub fn rotate(&self) -> Position {
        Position(symmetry::rotate(self.0))
    }

    pub fn mirror(&self) -> Position {
        Position(symmetry::reflect(self.0))
    }

    /// The smallest of the eight symmetric variants of this position.
    pub fn normalize(&self) -> Position {
        Position(symmetry::canonicalize(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(row: i8, col: i8) -> Coord {
        Coord::new(row, col).unwrap()
    }

    fn position(cells: &[(i8, i8)]) -> Position {
        Position(cells.iter().fold(0, |p, &(r, c)| p | coord(r, c).bitmask()))
    }

    #[test]
    // test if the coordinate bits appear in the expected sequential order
    fn test_coords() {
        let mut next_mask = 1;
        for coord in Coord::all() {
            assert_eq!(next_mask, coord.bitmask());
            next_mask *= 2;
        }

        assert_eq!(next_mask, 1u64 << NR_CELLS);
    }

    #[test]
    fn test_pegs_in_index_order() {
        let pos = position(&[(4, 1), (0, 3), (3, 3)]);
        let pegs: Vec<_> = pos.pegs().collect();
        assert_eq!(pegs, vec![coord(0, 3), coord(3, 3), coord(4, 1)]);
        assert_eq!(pos.count(), 3);
    }

    #[test]
    fn test_rotate() {
        let a = position(&[(2, 1), (2, 2), (3, 2)]);
        let b = position(&[(1, 4), (2, 4), (2, 3)]);
        assert_eq!(a.rotate(), b);
    }

    #[test]
    fn test_mirror() {
        let a = position(&[(1, 4), (2, 1), (2, 2), (3, 2)]);
        let b = position(&[(1, 2), (2, 5), (2, 4), (3, 4)]);
        assert_eq!(a.mirror(), b);
    }

    #[test]
    fn test_normalize() {
        let a = position(&[(1, 4), (2, 1), (2, 2), (3, 2)]);
        let b = a.rotate();

        assert_eq!(a.normalize(), b.normalize());

        let b = a.mirror();
        assert_eq!(a.normalize(), b.normalize());
        assert!(a.normalize() <= a);
    }

    #[test]
    fn test_jump_from_coordinate_pair() {
        let jump = Jump::from_coordinate_pair(coord(3, 1), coord(3, 3)).unwrap();
        assert_eq!(jump.over(), coord(3, 2));
        assert!(Jump::from_coordinate_pair(coord(3, 1), coord(4, 2)).is_none());
        assert!(Jump::from_coordinate_pair(coord(3, 1), coord(3, 4)).is_none());
    }

    #[test]
    fn test_apply_jump() {
        let pos = position(&[(3, 1), (3, 2)]);
        let jump = Jump::from_coordinate_pair(coord(3, 1), coord(3, 3)).unwrap();
        assert!(pos.can_jump(jump));
        assert_eq!(pos.apply_jump(jump), position(&[(3, 3)]));
        assert!(!position(&[(3, 1), (3, 2), (3, 3)]).can_jump(jump));
    }

    #[test]
    fn test_jump_between_positions() {
        let from = position(&[(1, 3), (2, 3), (5, 5)]);
        let to = position(&[(3, 3), (5, 5)]);
        let jump = Jump::between(from, to).unwrap();
        assert_eq!(jump.src(), coord(1, 3));
        assert_eq!(jump.over(), coord(2, 3));
        assert_eq!(jump.dst(), coord(3, 3));

        let upward = Jump::between(position(&[(3, 3), (4, 3)]), position(&[(2, 3)])).unwrap();
        assert_eq!(upward.src(), coord(4, 3));

        // two cells cleared but not in line with the landing cell
        assert!(Jump::between(position(&[(0, 0), (6, 6)]), position(&[(3, 3)])).is_none());
        assert!(Jump::between(from, from).is_none());
    }
}
