//! # griddler
//!
//! `griddler` is a command-line nonogram (griddler, paint-by-numbers) solver.
//!
//! It reads a puzzle description from a file or standard input, solves it by
//! constraint propagation with a backtracking fallback, and draws the
//! resulting picture.
//!
//! ## Input format
//!
//! The first line carries the picture width and height. It is followed by
//! one clue line per row (top to bottom) and then one per column (left to
//! right), each holding the block lengths separated by spaces; a lone `0`
//! marks a line with no blocks.
//!
//! ```text
//! 5 5
//! 1
//! 1
//! 5
//! 1
//! 1
//! 1
//! 1
//! 5
//! 1
//! 1
//! ```
//!
//! ## Usage
//!
//! ```sh
//! griddler [OPTIONS] [PATH]
//! ```
//!
//! -   `-m, --mono`: never colour the output.
//! -   `-H, --html`: emit an HTML table instead of text.
//! -   `--xhtml`: emit XHTML instead of HTML.
//! -   `-s, --stats`: print solving statistics instead of the picture.
//!
//! Coloured output is used automatically when standard output is a
//! terminal. The `completions` subcommand generates shell completion
//! scripts.

use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, CommandFactory, Parser, Subcommand};
use griddler::input::{ParseError, ParsedPuzzle, parse_puzzle};
use griddler::render::{Style, render};
use griddler::solver::{SolveOutcome, Solver};
use tikv_jemalloc_ctl::{epoch, stats};

/// Global allocator using `tikv-jemallocator` for potentially better
/// performance and accurate memory statistics.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Defines the command-line interface for the solver.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(name = "griddler", version, about = "A nonogram solver")]
struct Cli {
    /// Path to the puzzle file. Standard input is read when omitted.
    path: Option<PathBuf>,

    #[clap(subcommand)]
    command: Option<Commands>,

    /// Common options applicable to every run.
    #[command(flatten)]
    common: CommonOptions,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args, Debug, Default)]
struct CommonOptions {
    /// Never use colours, even on a terminal.
    #[arg(short, long, default_value_t = false)]
    mono: bool,

    /// Emit an HTML table instead of text.
    #[arg(short = 'H', long, default_value_t = false)]
    html: bool,

    /// Emit XHTML instead of HTML.
    #[arg(long, default_value_t = false)]
    xhtml: bool,

    /// Print solving statistics instead of the picture.
    #[arg(short, long, default_value_t = false)]
    stats: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "griddler", &mut io::stdout());
        return;
    }

    let time = std::time::Instant::now();
    let puzzle = match read_puzzle(cli.path.as_deref()) {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    let parse_time = time.elapsed();

    let mut solver = match Solver::new(
        puzzle.rows,
        puzzle.cols,
        puzzle.row_clues,
        puzzle.col_clues,
    ) {
        Ok(solver) => solver,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let time = std::time::Instant::now();
    let outcome = solver.solve();
    let elapsed = time.elapsed();

    match &outcome {
        SolveOutcome::Solved(grid) => {
            if !cli.common.stats {
                print!("{}", render(grid, solver.clues(), output_style(&cli.common)));
            }
        }
        SolveOutcome::Inconsistent => message(&cli.common, "Inconsistent! Bamf!"),
        SolveOutcome::AmbiguousUnsolved => {
            message(&cli.common, "Not only ambiguous but also inconsistent! Bamf!");
        }
    }

    if cli.common.stats {
        print_stats(parse_time, elapsed, &solver, &outcome);
    }
}

/// Reads and parses the puzzle from `path`, or from standard input when no
/// path was given.
fn read_puzzle(path: Option<&Path>) -> Result<ParsedPuzzle, ParseError> {
    match path {
        Some(path) => parse_puzzle(BufReader::new(File::open(path)?)),
        None => parse_puzzle(io::stdin().lock()),
    }
}

/// Picks the output style from the flags, falling back to plain text when
/// standard output is not a terminal.
fn output_style(common: &CommonOptions) -> Style {
    if common.xhtml {
        Style::Xhtml
    } else if common.html {
        Style::Html
    } else if common.mono || !io::stdout().is_terminal() {
        Style::Plain
    } else {
        Style::Color
    }
}

/// Prints a diagnostic unless statistics mode silenced it.
fn message(common: &CommonOptions, text: &str) {
    if !common.stats {
        eprintln!("{text}");
    }
}

/// Helper function to print a single statistic line in a formatted table row.
fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Helper function to print a statistic line that includes a rate (value/second).
#[allow(clippy::cast_precision_loss)]
fn stat_line_with_rate(label: &str, value: u64, elapsed: f64) {
    let rate = if elapsed > 0.0 {
        value as f64 / elapsed
    } else {
        0.0
    };
    println!("|  {label:<20} {value:>12} ({rate:>9.0}/sec)  |");
}

/// Prints a summary of problem and search statistics.
#[allow(clippy::cast_precision_loss)]
fn print_stats(parse_time: Duration, elapsed: Duration, solver: &Solver, outcome: &SolveOutcome) {
    // Advance the epoch so jemalloc refreshes its counters before reading.
    epoch::advance().unwrap();
    let allocated_bytes = stats::allocated::mib().unwrap().read().unwrap();
    let resident_bytes = stats::resident::mib().unwrap().read().unwrap();
    let allocated_mib = allocated_bytes as f64 / (1024.0 * 1024.0);
    let resident_mib = resident_bytes as f64 / (1024.0 * 1024.0);

    let elapsed_secs = elapsed.as_secs_f64();
    let grid = solver.grid();

    println!("\n=======================[ Problem Statistics ]========================");
    stat_line("Parse time (s)", format!("{:.3}", parse_time.as_secs_f64()));
    stat_line("Grid", format!("{}x{}", grid.cols(), grid.rows()));
    stat_line("Cells", grid.rows() * grid.cols());
    println!("========================[ Search Statistics ]========================");
    stat_line_with_rate("Line visits", solver.work_count(), elapsed_secs);
    stat_line("Unresolved cells", grid.unresolved());
    stat_line("Memory usage (MiB)", format!("{allocated_mib:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident_mib:.2}"));
    stat_line("CPU time (s)", format!("{elapsed_secs:.3}"));
    println!("=====================================================================");

    println!(
        "\n{}",
        match outcome {
            SolveOutcome::Solved(_) => "SOLVED",
            SolveOutcome::Inconsistent => "INCONSISTENT",
            SolveOutcome::AmbiguousUnsolved => "UNSOLVED",
        }
    );
}
