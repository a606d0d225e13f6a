use std::{fmt, time::Duration};

use colored::Colorize;
use common::{Coord, DepthFirstSearch, Jump, PegSolitaire, State, StateId};
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Report {
    pub board: String,
    pub elapsed_ms: u128,
    pub visited: usize,
    pub discarded: u64,
    pub solutions: Vec<Solution>,
}

#[derive(Serialize, Debug)]
pub struct Solution {
    pub board: String,
    /// Number of paths leading here, including those not listed
    pub path_count: usize,
    pub paths: Vec<Vec<Step>>,
}

#[derive(Serialize, Debug)]
pub struct Step {
    #[serde(skip)]
    pub state: State,
    pub board: String,
    pub pegs: u32,
    /// The literal jump from the previous board. Missing for the first
    /// board, and where the previous board is only equivalent up to symmetry.
    pub jump: Option<JumpReport>,
}

#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct JumpReport {
    pub src: (i8, i8),
    pub over: (i8, i8),
    pub dst: (i8, i8),
}

impl From<Jump> for JumpReport {
    fn from(jump: Jump) -> Self {
        let pair = |c: Coord| (c.row(), c.col());
        JumpReport {
            src: pair(jump.src()),
            over: pair(jump.over()),
            dst: pair(jump.dst()),
        }
    }
}

/// Collect the final states and up to `max_paths` paths each (0 for all).
pub fn build(
    search: &DepthFirstSearch<PegSolitaire>,
    elapsed: Duration,
    max_paths: usize,
) -> Report {
    let solutions = search
        .final_states()
        .iter()
        .map(|&id| {
            let paths = search.all_paths(id);
            let path_count = paths.len();
            let limit = if max_paths == 0 { path_count } else { max_paths };
            Solution {
                board: search.state(id).to_text(),
                path_count,
                paths: paths
                    .iter()
                    .take(limit)
                    .map(|path| steps(search, path))
                    .collect(),
            }
        })
        .collect();

    Report {
        board: search.state(search.root()).to_text(),
        elapsed_ms: elapsed.as_millis(),
        visited: search.visited_states_count(),
        discarded: search.discarded_states_count(),
        solutions,
    }
}

fn steps(search: &DepthFirstSearch<PegSolitaire>, path: &[StateId]) -> Vec<Step> {
    let mut previous: Option<&State> = None;
    path.iter()
        .map(|&id| {
            let state = search.state(id);
            let jump = previous
                .and_then(|from| Jump::between(from.position(), state.position()))
                .map(JumpReport::from);
            previous = Some(state);
            Step {
                state: *state,
                board: state.to_text(),
                pegs: state.remaining_pegs(),
                jump,
            }
        })
        .collect()
}

/// The board with the landing cell of `jump` on red and the cells it
/// emptied on blue.
pub fn draw_with_jump(state: &State, jump: Option<JumpReport>) -> String {
    let mut out = String::new();
    for coord in Coord::all() {
        if coord.col() == 0 && coord.row() > 0 {
            out.push('\n');
        }

        let glyph = state.cell(coord).glyph().to_string();
        let at = (coord.row(), coord.col());
        match jump {
            Some(jump) if jump.dst == at => out.push_str(&glyph.on_red().to_string()),
            Some(jump) if jump.src == at || jump.over == at => {
                out.push_str(&glyph.on_blue().to_string())
            }
            _ => out.push_str(&glyph),
        }
    }
    out
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", self.board)?;
        writeln!(f, "search took {} ms", self.elapsed_ms)?;
        writeln!(f, "visited {} states. discarded {}.", self.visited, self.discarded)?;

        if self.solutions.is_empty() {
            return writeln!(f, "No solution was found.");
        }

        for (i, solution) in self.solutions.iter().enumerate() {
            writeln!(
                f,
                "\nsolution {} ({} paths, showing {}):",
                i + 1,
                solution.path_count,
                solution.paths.len()
            )?;
            for (j, path) in solution.paths.iter().enumerate() {
                writeln!(f, "\npath {}:", j + 1)?;
                for step in path {
                    writeln!(f, "{} pegs", step.pegs)?;
                    writeln!(f, "{}\n", draw_with_jump(&step.state, step.jump))?;
                }
            }
        }
        Ok(())
    }
}
