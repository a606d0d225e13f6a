//! Reconstruction of move sequences from the predecessor graph.
//!
//! [`DepthFirstSearch::all_paths`] only knows the representatives the
//! search stored, and the search skips every state whose class it had seen
//! before. [`DepthFirstSearch::build_all_possible_paths`] walks each path
//! forward again and adds the concrete states it skipped, so that the
//! reported paths cover every literal move sequence equivalent to a found
//! solution.

use rustc_hash::FxHashMap;

use crate::{
    graph::StateId,
    problem::{Problem, SearchState},
    search::DepthFirstSearch,
};

impl<P: Problem> DepthFirstSearch<P> {
    /// Every chain of predecessors from a state without predecessors (the
    /// initial state) to `id`, each path starting at the initial state.
    pub fn all_paths(&self, id: StateId) -> Vec<Vec<StateId>> {
        let predecessors = self.graph.predecessors(id);
        if predecessors.is_empty() {
            return vec![vec![id]];
        }

        let mut all_paths = Vec::new();
        for &predecessor in predecessors {
            for mut path in self.all_paths(predecessor) {
                path.push(id);
                all_paths.push(path);
            }
        }
        all_paths
    }

    /// Extend the graph with the concrete states equivalent to the ones on
    /// the paths to the final states found so far, and append the final
    /// states discovered that way.
    ///
    /// Only the final states present when this is called are expanded.
    pub fn build_all_possible_paths(&mut self) {
        let final_states = self.final_states.clone();

        for final_state in final_states {
            for path in self.all_paths(final_state) {
                let mut alternates = Vec::new();
                for step in path.windows(2) {
                    let mut level = vec![step[0]];
                    for id in alternates {
                        if !level.contains(&id) {
                            level.push(id);
                        }
                    }
                    alternates = self.expand_level(&level, step[0], step[1]);
                }

                for id in alternates {
                    if !self.final_states.contains(&id) {
                        log::debug!("new equivalent final state:\n{}", self.graph[id]);
                        self.final_states.push(id);
                    }
                }
            }
        }
    }

    /// Successors of the states in `level` that are equivalent to `target`.
    ///
    /// `level[0]` is `current`, the state preceding `target` on the path.
    /// A successor with the same occupancy as `target` is `target` itself;
    /// it is skipped when reached from `current`, where the edge exists
    /// already. Other equivalent successors become new states, one per
    /// occupancy.
    fn expand_level(&mut self, level: &[StateId], current: StateId, target: StateId) -> Vec<StateId> {
        let target_code = self.graph[target].code();
        let target_min_code = self.graph[target].min_code();

        let mut by_code: FxHashMap<u64, StateId> = FxHashMap::default();
        let mut next_level = Vec::new();

        for &parent in level {
            let parent_state = self.graph[parent].clone();
            for next in self.problem().next_states(&parent_state) {
                let candidate = if next.code() == target_code {
                    if parent == current {
                        continue;
                    }
                    target
                } else if next.min_code() == target_min_code {
                    let code = next.code();
                    *by_code
                        .entry(code)
                        .or_insert_with(|| self.graph.insert(next))
                } else {
                    continue;
                };

                self.graph.add_predecessor(candidate, parent);
                if !next_level.contains(&candidate) {
                    next_level.push(candidate);
                }
            }
        }

        next_level
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        PegSolitaire, Position, Problem, SearchState, State, StateId,
        boards,
        coord::Coord,
        search::{DepthFirstSearch, SearchOptions},
    };

    const MIRRORED: &str = "xx...xx\nxx...xx\n...o...\n.oo.oo.\n.......\nxx...xx\nxx...xx";

    fn search(text: &str, max_solutions: usize) -> DepthFirstSearch<PegSolitaire> {
        let problem = PegSolitaire::new(State::parse(text).unwrap()).unwrap();
        let mut search = DepthFirstSearch::new(
            problem,
            SearchOptions {
                max_solutions,
                ..SearchOptions::default()
            },
        );
        search.do_search();
        search
    }

    fn position(cells: &[(i8, i8)]) -> Position {
        Position(
            cells
                .iter()
                .fold(0, |p, &(r, c)| p | Coord::new(r, c).unwrap().bitmask()),
        )
    }

    fn positions(search: &DepthFirstSearch<PegSolitaire>, path: &[StateId]) -> Vec<Position> {
        path.iter().map(|&id| search.state(id).position()).collect()
    }

    /// Consecutive states differ by one move, up to symmetry.
    fn assert_valid_path(search: &DepthFirstSearch<PegSolitaire>, path: &[StateId]) {
        assert_eq!(path[0], search.root());
        for step in path.windows(2) {
            let from = search.state(step[0]);
            let to = search.state(step[1]);
            assert_eq!(from.remaining_pegs(), to.remaining_pegs() + 1);
            assert!(
                search
                    .problem()
                    .next_states(from)
                    .iter()
                    .any(|next| next.min_code() == to.min_code())
            );
        }
    }

    #[test]
    fn test_single_path_to_first_solution() {
        let search = search(MIRRORED, 1);
        let final_state = search.final_states()[0];

        let paths = search.all_paths(final_state);
        assert_eq!(paths.len(), 1);
        assert_eq!(
            positions(&search, &paths[0]),
            vec![
                search.state(search.root()).position(),
                position(&[(2, 3), (3, 3), (3, 4), (3, 5)]),
                position(&[(3, 4), (3, 5), (4, 3)]),
                position(&[(3, 3), (4, 3)]),
                position(&[(5, 3)]),
            ]
        );
    }

    #[test]
    fn test_path_of_initial_state() {
        let search = search(MIRRORED, 1);
        assert_eq!(search.all_paths(search.root()), vec![vec![search.root()]]);
    }

    #[test]
    fn test_mirrored_route_is_added() {
        let mut search = search(MIRRORED, 1);
        let final_state = search.final_states()[0];

        search.build_all_possible_paths();

        // the mirrored route ends in the same final state
        assert_eq!(search.final_states(), &[final_state]);

        let paths = search.all_paths(final_state);
        assert_eq!(paths.len(), 2);
        assert_eq!(
            positions(&search, &paths[1]),
            vec![
                search.state(search.root()).position(),
                position(&[(2, 3), (3, 1), (3, 2), (3, 3)]),
                position(&[(3, 1), (3, 2), (4, 3)]),
                position(&[(3, 3), (4, 3)]),
                position(&[(5, 3)]),
            ]
        );
        // the mirrored route is made of literal moves
        let states: Vec<_> = paths[1].iter().map(|&id| *search.state(id)).collect();
        for pair in states.windows(2) {
            assert!(
                search
                    .problem()
                    .next_states(&pair[0])
                    .iter()
                    .any(|next| next.code() == pair[1].code())
            );
        }
    }

    #[test]
    fn test_expansion_keeps_paths_valid() {
        let mut search = search(MIRRORED, 0);
        let before: Vec<_> = search.final_states().to_vec();
        let codes: Vec<_> = before.iter().map(|&id| search.state(id).min_code()).collect();

        search.build_all_possible_paths();

        let after = search.final_states();
        assert_eq!(&after[..before.len()], &before[..]);
        for (i, id) in after.iter().enumerate() {
            assert!(!after[..i].contains(id), "final state listed twice");
            let state = search.state(*id);
            assert_eq!(state.remaining_pegs(), 1);
            assert!(codes.contains(&state.min_code()));
        }

        for &id in after {
            for path in search.all_paths(id) {
                assert_valid_path(&search, &path);
            }
        }
    }

    #[test]
    fn test_greek_cross_paths_are_valid() {
        let mut search = search(boards::GREEK_CROSS, 2);
        search.build_all_possible_paths();
        for &id in search.final_states() {
            assert_eq!(search.state(id).remaining_pegs(), 1);
            for path in search.all_paths(id) {
                assert_eq!(path.len(), 9);
                assert_valid_path(&search, &path);
            }
        }
    }

    #[test]
    fn test_nothing_to_expand_without_solutions() {
        let mut search = search(".......\n.......\n.......\n..ooo..\n.......\n.......\n.......", 1);
        let nodes = search.graph().len();
        search.build_all_possible_paths();
        assert!(search.final_states().is_empty());
        assert_eq!(search.graph().len(), nodes);
    }
}
