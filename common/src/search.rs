//! Depth-first search over equivalence classes of states.
//!
//! Every non-goal state is marked visited under its canonical code before
//! its successors are explored. A successor whose class was already visited
//! is not explored again; instead the current state is recorded as one more
//! predecessor of the stored representative, so the predecessor graph keeps
//! every route into a class and not just the first one.
//!
//! Goal states are never marked visited: each time the search reaches one it
//! is appended to the final states. Once `max_solutions` goal states are
//! recorded the search stops. The stop flag is checked at the top of every
//! successor loop, so already running iterations finish first.

use std::collections::BTreeMap;

use crate::{
    graph::{StateGraph, StateId},
    problem::{Problem, SearchState},
};

/// How often `debug` progress is reported, in newly visited states
const PROGRESS_INTERVAL: usize = 100;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SearchOptions {
    /// Stop after this many goal states. 0 searches exhaustively.
    pub max_solutions: usize,
    /// Intended cap on the number of visited states. Not enforced.
    pub max_states: usize,
    /// Log progress every hundred visited states
    pub debug: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_solutions: 2,
            max_states: 1000,
            debug: false,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Idle,
    Searching,
    Done,
}

pub struct DepthFirstSearch<P: Problem> {
    problem: P,
    options: SearchOptions,
    pub(crate) graph: StateGraph<P::State>,
    root: StateId,
    /// Canonical code -> representative state
    visited: BTreeMap<u64, StateId>,
    pub(crate) final_states: Vec<StateId>,
    discarded: u64,
    stop: bool,
    phase: Phase,
}

impl<P: Problem> DepthFirstSearch<P> {
    pub fn new(problem: P, options: SearchOptions) -> Self {
        let mut graph = StateGraph::new();
        let root = graph.insert(problem.initial_state().clone());

        Self {
            problem,
            options,
            graph,
            root,
            visited: BTreeMap::new(),
            final_states: Vec::new(),
            discarded: 0,
            stop: false,
            phase: Phase::Idle,
        }
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The initial state
    pub fn root(&self) -> StateId {
        self.root
    }

    pub fn state(&self, id: StateId) -> &P::State {
        self.graph.state(id)
    }

    pub fn predecessors(&self, id: StateId) -> &[StateId] {
        self.graph.predecessors(id)
    }

    pub fn graph(&self) -> &StateGraph<P::State> {
        &self.graph
    }

    pub fn final_states(&self) -> &[StateId] {
        &self.final_states
    }

    pub fn visited_states_count(&self) -> usize {
        self.visited.len()
    }

    /// Successors skipped because their class had been visited before
    pub fn discarded_states_count(&self) -> u64 {
        self.discarded
    }

    pub fn is_visited(&self, state: &P::State) -> bool {
        self.visited.contains_key(&state.min_code())
    }

    /// Representative stored for the class of `state`, if visited.
    pub fn representative(&self, state: &P::State) -> Option<StateId> {
        self.visited.get(&state.min_code()).copied()
    }

    /// Run the search. Returns true if at least one goal state was found.
    ///
    /// The search runs only once; later calls report the result of the
    /// first run.
    pub fn do_search(&mut self) -> bool {
        if self.phase == Phase::Idle {
            self.phase = Phase::Searching;
            log::debug!(
                "starting depth-first search, max_solutions={} max_states={}",
                self.options.max_solutions,
                self.options.max_states
            );

            self.search_inner(self.root);

            self.phase = Phase::Done;
            log::debug!(
                "search done: {} solutions, {} visited, {} discarded",
                self.final_states.len(),
                self.visited.len(),
                self.discarded
            );
        }

        !self.final_states.is_empty()
    }

    fn search_inner(&mut self, id: StateId) {
        let state = self.graph[id].clone();

        if self.problem.is_solution(&state) {
            self.final_states.push(id);
            if self.final_states.len() == self.options.max_solutions {
                log::debug!("found {} solutions, stopping", self.final_states.len());
                self.stop = true;
            }
            return;
        }

        self.set_visited(id, &state);
        if self.options.debug && self.visited.len() % PROGRESS_INTERVAL == 0 {
            self.report_progress(&state);
        }

        for next in self.problem.next_states(&state) {
            if self.stop {
                break;
            }

            match self.visited.get(&next.min_code()).copied() {
                None => {
                    let next_id = self.graph.insert(next);
                    self.graph.add_predecessor(next_id, id);
                    self.search_inner(next_id);
                }
                Some(existing) => {
                    self.discarded += 1;
                    log::trace!("class {:#x} already visited", next.min_code());
                    self.graph.add_predecessor(existing, id);
                }
            }
        }
    }

    fn set_visited(&mut self, id: StateId, state: &P::State) {
        self.visited.insert(state.min_code(), id);
    }

    fn report_progress(&self, state: &P::State) {
        log::info!(
            "visited {} states, discarded {}, current state:\n{state}",
            self.visited.len(),
            self.discarded
        );
    }
}
