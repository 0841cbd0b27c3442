use docopt::Docopt;
use log::{warn, Level, Log, Metadata, Record};
use serde_derive::Deserialize;
use maze_search::{
    frontier::FrontierKind,
    generators,
    grid::Grid,
    grid_displays::{SolutionDisplay, TextLayout},
    heuristics::HeuristicKind,
    pathing::{CostModel, PathSearch, SearchOptionsBuilder, Solution},
    units::{ColumnsCount, RowsCount},
};
use std::{
    fs,
    io::{self, Write},
    process,
};

const USAGE: &str = "Maze Search

Usage:
    maze_search_driver -h | --help
    maze_search_driver generate [--rows=<n>] [--cols=<n>] [--seed=<s>] [--out=<path>] [--space-joined] [--verbose]
    maze_search_driver [--algorithm=<alg>] [--heuristic=<h>] [--accumulate-cost] [--max-iterations=<n>] [--show-explored] [--verbose] <maze-file>

Options:
    -h --help               Show this screen.
    --rows=<n>              Height of a generated maze [default: 21].
    --cols=<n>              Width of a generated maze [default: 21].
    --seed=<s>              Seed for the maze generator. A random maze each run if not given.
    --out=<path>            Write the generated maze to a file rather than stdout.
    --space-joined          Separate the cells of each generated row with a space.
    --algorithm=<alg>       Search algorithm: dfs, bfs or astar [default: astar].
    --heuristic=<h>         Distance estimate for astar: summed-offset or manhattan [default: summed-offset].
    --accumulate-cost       Astar scores a state by its path length so far plus the estimate, rather than one plus the estimate.
    --max-iterations=<n>    Give up after taking n states off the frontier.
    --show-explored         Mark every explored cell in the printed maze.
    --verbose               Log search and generation progress to stderr.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    cmd_generate: bool,
    flag_rows: usize,
    flag_cols: usize,
    flag_seed: Option<u64>,
    flag_out: Option<String>,
    flag_space_joined: bool,
    flag_algorithm: String,
    flag_heuristic: String,
    flag_accumulate_cost: bool,
    flag_max_iterations: Option<usize>,
    flag_show_explored: bool,
    flag_verbose: bool,
    arg_maze_file: Option<String>,
}

mod errors {
    #![allow(deprecated)]
    use error_chain::*;
    error_chain! {
        links {
            Maze(maze_search::errors::Error, maze_search::errors::ErrorKind);
        }

        foreign_links {
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Algorithm {
    DepthFirst,
    BreadthFirst,
    AStar,
}

impl Algorithm {
    fn from_arg(name: &str) -> Result<Algorithm> {
        match name {
            "dfs" => Ok(Algorithm::DepthFirst),
            "bfs" => Ok(Algorithm::BreadthFirst),
            "astar" => Ok(Algorithm::AStar),
            _ => Err(format!("Unknown search algorithm '{}', expected dfs, bfs or astar", name).into()),
        }
    }
}

/// Writes every enabled log record to stderr.
struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::Debug } else { Level::Warn };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level.to_level_filter());
    }
}

fn main() {
    let args: MazeArgs = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    init_logging(args.flag_verbose);

    if let Err(ref e) = run(&args) {
        eprintln!("error: {}", e);
        for cause in e.iter().skip(1) {
            eprintln!("caused by: {}", cause);
        }
        process::exit(1);
    }
}

fn run(args: &MazeArgs) -> Result<()> {
    if args.cmd_generate {
        generate_maze(args)
    } else {
        let path = args.arg_maze_file.as_ref().ok_or("No maze file given")?;
        solve_maze(args, path)
    }
}

fn generate_maze(args: &MazeArgs) -> Result<()> {
    let (rows, columns) = (RowsCount(args.flag_rows), ColumnsCount(args.flag_cols));
    let maze = if let Some(seed) = args.flag_seed {
        generators::generate_with_seed(rows, columns, seed)?
    } else {
        generators::generate(rows, columns, &mut rand::thread_rng())?
    };

    let layout = if args.flag_space_joined { TextLayout::SpaceJoined } else { TextLayout::Compact };
    let text = maze.to_maze_text(layout);

    if let Some(ref out_path) = args.flag_out {
        fs::write(out_path, text).chain_err(|| format!("Failed to write maze to text file {}", out_path))?;
    } else {
        print!("{}", text);
    }
    Ok(())
}

fn solve_maze(args: &MazeArgs, path: &str) -> Result<()> {
    let algorithm = Algorithm::from_arg(&args.flag_algorithm)?;
    let heuristic = args.flag_heuristic.parse::<HeuristicKind>()?;
    if algorithm != Algorithm::AStar && args.flag_accumulate_cost {
        warn!("--accumulate-cost only applies to astar, ignored for {}", args.flag_algorithm);
    }
    let contents = fs::read_to_string(path).chain_err(|| format!("Failed to read maze file {}", path))?;
    let maze = Grid::parse(&contents).chain_err(|| format!("Failed to load maze file {}", path))?;

    println!("Maze:");
    print!("{}", SolutionDisplay::new(&maze));
    println!();

    let cost_model = if args.flag_accumulate_cost { CostModel::PathDepth } else { CostModel::ConstantStep };
    let options = SearchOptionsBuilder::new()
        .max_iterations(args.flag_max_iterations)
        .cost_model(cost_model)
        .build();
    let mut search = PathSearch::with_options(&maze, options);

    println!("Solving...");
    let solved = run_search(&mut search, algorithm, heuristic);
    println!("States Explored: {}", search.num_explored());
    let solution = solved?;

    println!("Solution:");
    let explored = if args.flag_show_explored { Some(search.explored()) } else { None };
    print!("{}",
           SolutionDisplay::new(&maze)
               .solution(Some(&solution))
               .explored(explored));
    Ok(())
}

fn run_search(search: &mut PathSearch, algorithm: Algorithm, heuristic: HeuristicKind) -> Result<Solution> {
    let solution = match algorithm {
        Algorithm::DepthFirst => search.solve(FrontierKind::Lifo)?,
        Algorithm::BreadthFirst => search.solve(FrontierKind::Fifo)?,
        Algorithm::AStar => search.solve_informed(&heuristic)?,
    };
    Ok(solution)
}
