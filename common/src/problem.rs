use std::{fmt, str::FromStr};

use crate::{
    CELL_MASK,
    error::{Error, Result},
    state::State,
};

/// A node of a search problem. Equal `min_code`s mark states that are the
/// same up to symmetry.
pub trait SearchState: Clone + fmt::Display {
    /// Raw encoding of the state
    fn code(&self) -> u64;
    /// Encoding shared by all equivalent states
    fn min_code(&self) -> u64;
}

/// A search problem: an initial state, successor rules and a goal test.
pub trait Problem {
    type State: SearchState;

    fn initial_state(&self) -> &Self::State;

    fn is_solution(&self, state: &Self::State) -> bool;

    /// Successor states in a deterministic order.
    fn next_states(&self, state: &Self::State) -> Vec<Self::State>;
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Order in which moves are enumerated
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// (row, column) step of one cell
    pub fn offset(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Direction::ALL
            .into_iter()
            .find(|dir| dir.name() == s)
            .ok_or_else(|| Error::InvalidDirection(s.to_owned()))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Orthogonal jumps over a neighbouring peg into a free hole, solved when a
/// single peg is left.
#[derive(Clone, Debug)]
pub struct PegSolitaire {
    initial: State,
}

impl PegSolitaire {
    pub fn new(initial: State) -> Result<Self> {
        let position = initial.position().0;
        let shape = initial.shape();
        if position & !CELL_MASK != 0 {
            return Err(Error::InvalidProblemType(
                "pegs outside of the grid".to_owned(),
            ));
        }
        if position & shape.0 != 0 {
            return Err(Error::InvalidProblemType(
                "pegs on cells that are not part of the board".to_owned(),
            ));
        }
        if !shape.is_symmetric() {
            return Err(Error::InvalidProblemType(
                "board shape is not symmetric".to_owned(),
            ));
        }

        Ok(Self { initial })
    }
}

impl Problem for PegSolitaire {
    type State = State;

    fn initial_state(&self) -> &State {
        &self.initial
    }

    fn is_solution(&self, state: &State) -> bool {
        state.remaining_pegs() == 1
    }

    fn next_states(&self, state: &State) -> Vec<State> {
        let position = state.position();
        position
            .pegs()
            .flat_map(|peg| {
                Direction::ALL
                    .into_iter()
                    .filter_map(move |dir| state.make_move(peg, dir))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{boards, coord::Coord};

    fn problem(text: &str) -> PegSolitaire {
        PegSolitaire::new(State::parse(text).unwrap()).unwrap()
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!("left".parse::<Direction>(), Ok(Direction::Left));
        for dir in Direction::ALL {
            assert_eq!(dir.to_string().parse::<Direction>(), Ok(dir));
        }
        assert_eq!(
            "north".parse::<Direction>(),
            Err(Error::InvalidDirection("north".to_owned()))
        );
        assert!("Up".parse::<Direction>().is_err());
    }

    #[test]
    fn test_english_opening_moves() {
        let problem = problem(boards::ENGLISH);
        let next = problem.next_states(problem.initial_state());
        // four jumps into the centre, all equivalent
        assert_eq!(next.len(), 4);
        let code = next[0].min_code();
        assert!(next.iter().all(|s| s.min_code() == code));
        assert!(next.iter().all(|s| s.position().is_occupied(Coord::new(3, 3).unwrap())));
    }

    #[test]
    fn test_enumeration_order() {
        // pegs (3, 2) (3, 3): the first peg jumps right, then the second left
        let problem = problem(".......\n.......\n.......\n..oo...\n.......\n.......\n.......");
        let next: Vec<_> = problem
            .next_states(problem.initial_state())
            .iter()
            .map(|s| s.position().pegs().collect::<Vec<_>>())
            .collect();
        assert_eq!(
            next,
            vec![
                vec![Coord::new(3, 4).unwrap()],
                vec![Coord::new(3, 1).unwrap()]
            ]
        );
    }

    #[test]
    fn test_moves_remove_one_peg() {
        let problem = problem(boards::EUROPEAN);
        let mut frontier = vec![*problem.initial_state()];
        for _ in 0..3 {
            let mut next_frontier = Vec::new();
            for state in &frontier {
                for next in problem.next_states(state) {
                    assert_eq!(next.remaining_pegs() + 1, state.remaining_pegs());
                    assert_eq!(next.shape(), state.shape());
                    assert_eq!(next.position().0 & next.shape().0, 0);
                    next_frontier.push(next);
                }
            }
            frontier = next_frontier;
        }
        assert!(!frontier.is_empty());
    }

    #[test]
    fn test_dead_end_state() {
        let problem = problem("xx...xx\nxx...xx\no......\n...o...\n.......\nxx...xx\nxx...xx");
        let state = problem.initial_state();
        assert_eq!(state.remaining_pegs(), 2);
        assert!(!problem.is_solution(state));
        assert!(problem.next_states(state).is_empty());
    }

    #[test]
    fn test_is_solution() {
        let problem = problem(boards::ENGLISH);
        let single = State::parse("xx...xx\nxx...xx\n.......\n...o...\n.......\nxx...xx\nxx...xx").unwrap();
        assert!(problem.is_solution(&single));
        assert!(!problem.is_solution(problem.initial_state()));
    }

    #[test]
    fn test_reject_unsuitable_initial_state() {
        let english = State::parse(boards::ENGLISH).unwrap();
        let on_invalid = State::from_bits(english.position().0 | 1, english.shape().0);
        assert!(matches!(
            PegSolitaire::new(on_invalid),
            Err(Error::InvalidProblemType(_))
        ));

        let lopsided = State::from_bits(0b10, 0b1);
        assert!(matches!(
            PegSolitaire::new(lopsided),
            Err(Error::InvalidProblemType(_))
        ));

        let off_grid = State::from_bits(1 << 60, 0);
        assert!(matches!(
            PegSolitaire::new(off_grid),
            Err(Error::InvalidProblemType(_))
        ));
    }
}
