mod report;

use std::{path::PathBuf, time::Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use common::{DepthFirstSearch, PegSolitaire, SearchOptions, State, boards};
use env_logger::Env;

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
enum Preset {
    English,
    European,
    Submarine,
    GreekCross,
    #[value(name = "square5x5")]
    Square5x5,
    Pyramid,
    Diamond,
}

impl Preset {
    fn text(self) -> &'static str {
        match self {
            Preset::English => boards::ENGLISH,
            Preset::European => boards::EUROPEAN,
            Preset::Submarine => boards::SUBMARINE,
            Preset::GreekCross => boards::GREEK_CROSS,
            Preset::Square5x5 => boards::SQUARE_5X5,
            Preset::Pyramid => boards::PYRAMID,
            Preset::Diamond => boards::DIAMOND,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "solver")]
#[command(about = "Exhaustive peg solitaire search up to board symmetry")]
struct Args {
    /// Built-in starting board
    #[arg(long, value_enum, default_value_t = Preset::English, conflicts_with = "file")]
    board: Preset,

    /// Read the starting board from a file instead
    #[arg(long)]
    file: Option<PathBuf>,

    /// Stop after this many solutions, 0 searches exhaustively
    #[arg(long, default_value_t = 1)]
    max_solutions: usize,

    #[arg(long, default_value_t = SearchOptions::default().max_states)]
    max_states: usize,

    /// Log search progress
    #[arg(long)]
    debug: bool,

    /// Only report the paths found by the search itself
    #[arg(long)]
    no_expand: bool,

    /// Paths printed per solution, 0 for all
    #[arg(long, default_value_t = 10)]
    max_paths: usize,

    #[arg(long)]
    json: bool,

    #[arg(long)]
    no_color: bool,
}

impl Args {
    fn board_text(&self) -> Result<String> {
        match &self.file {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read board file {}", path.display()))?;
                Ok(text.strip_suffix('\n').unwrap_or(&text).to_owned())
            }
            None => Ok(self.board.text().to_owned()),
        }
    }

    fn search_options(&self) -> SearchOptions {
        SearchOptions {
            max_solutions: self.max_solutions,
            max_states: self.max_states,
            debug: self.debug,
        }
    }

    fn board_name(&self) -> String {
        match &self.file {
            Some(path) => path.display().to_string(),
            None => format!("{:?}", self.board),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    let text = args.board_text()?;
    let state = State::parse(&text).with_context(|| format!("invalid board {}", args.board_name()))?;
    let problem = PegSolitaire::new(state)
        .with_context(|| format!("board {} cannot be played", args.board_name()))?;

    let mut search = DepthFirstSearch::new(problem, args.search_options());
    log::info!("searching {} with {} pegs", args.board_name(), state.remaining_pegs());

    let start = Instant::now();
    let found = search.do_search();
    if found && !args.no_expand {
        search.build_all_possible_paths();
    }
    let elapsed = start.elapsed();
    log::info!("done in {elapsed:?}, found {}", search.final_states().len());

    let report = report::build(&search, elapsed, args.max_paths);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }

    Ok(())
}
