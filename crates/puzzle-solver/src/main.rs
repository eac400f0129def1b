//! CLI entry point for the puzzle solver.
//!
//! Usage:
//!   puzzle-solver solve <puzzle.json> [options]
//!   puzzle-solver solve --stdin [options]
//!
//! Options:
//!   --strategy <s>   dfs, bfs or lookahead (default: dfs)
//!   --words <FILE>   Whitespace-separated word list for word ladders
//!
//! Set `RUST_LOG=debug` for search statistics on stderr.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use puzzle_solver::{parse_word_list, solve, PuzzleDescription, SolverConfig, SolverResult, Strategy};

#[derive(Parser)]
#[command(name = "puzzle-solver")]
#[command(about = "Depth-first and breadth-first solvers for grid and word puzzles")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a puzzle described in JSON
    Solve {
        /// Path to puzzle JSON file (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read puzzle from stdin instead of file
        #[arg(long)]
        stdin: bool,

        /// Search strategy
        #[arg(long, value_enum, default_value_t = StrategyArg::Dfs)]
        strategy: StrategyArg,

        /// Word list for word ladders, replacing any inline words
        #[arg(long, value_name = "FILE")]
        words: Option<PathBuf>,
    },
}

/// Command-line names for the search strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    /// Depth-first, first solution in extension order
    #[value(alias = "depth-first")]
    Dfs,
    /// Breadth-first, shortest solution
    #[value(alias = "breadth-first")]
    Bfs,
    /// Recursive two-ply lookahead
    Lookahead,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Dfs => Strategy::DepthFirst,
            StrategyArg::Bfs => Strategy::BreadthFirst,
            StrategyArg::Lookahead => Strategy::Lookahead,
        }
    }
}

/// Output format for a solve
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    solved: bool,
    kind: &'static str,
    strategy: Strategy,
    #[serde(skip_serializing_if = "Option::is_none")]
    moves: Option<usize>,
    states_explored: usize,
    time_elapsed_ms: u64,
    /// Printable form of each state on the solution path, start first
    path: Vec<String>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Run the command, returning whether a solution was found
fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Commands::Solve {
            file,
            stdin,
            strategy,
            words,
        } => {
            // Read puzzle JSON
            let json_content = if stdin {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("failed to read from stdin")?;
                buffer
            } else if let Some(path) = file {
                fs::read_to_string(&path)
                    .with_context(|| format!("failed to read file {}", path.display()))?
            } else {
                bail!("must provide either a file path or --stdin");
            };

            let mut description: PuzzleDescription =
                serde_json::from_str(&json_content).context("failed to parse puzzle JSON")?;

            if let Some(path) = words {
                let text = fs::read_to_string(&path)
                    .with_context(|| format!("failed to read word list {}", path.display()))?;
                let dictionary = parse_word_list(&text);
                log::info!("loaded {} words from {}", dictionary.len(), path.display());
                description = description.with_words(dictionary);
            }

            let puzzle = description.build().context("invalid puzzle")?;
            let kind = puzzle.kind();

            let strategy = Strategy::from(strategy);
            let config = SolverConfig { strategy };
            let result = solve(puzzle, &config);
            let output = format_result(kind, strategy, &result);

            println!("{}", serde_json::to_string_pretty(&output)?);

            Ok(output.solved)
        }
    }
}

fn format_result<P: std::fmt::Display>(
    kind: &'static str,
    strategy: Strategy,
    result: &SolverResult<P>,
) -> SolveOutput {
    SolveOutput {
        solved: result.is_solved(),
        kind,
        strategy,
        moves: result.solution.as_ref().map(|node| node.depth()),
        states_explored: result.stats.states_explored,
        time_elapsed_ms: result.stats.time_elapsed_ms,
        path: result
            .solution
            .iter()
            .flat_map(|node| node.path())
            .map(ToString::to_string)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_strategy(args: &[&str]) -> Strategy {
        let mut argv = vec!["puzzle-solver", "solve", "puzzle.json"];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Commands::Solve { strategy, .. } => strategy.into(),
        }
    }

    #[test]
    fn test_strategy_names() {
        assert_eq!(parse_strategy(&[]), Strategy::DepthFirst);
        assert_eq!(parse_strategy(&["--strategy", "dfs"]), Strategy::DepthFirst);
        assert_eq!(parse_strategy(&["--strategy", "bfs"]), Strategy::BreadthFirst);
        assert_eq!(
            parse_strategy(&["--strategy", "breadth-first"]),
            Strategy::BreadthFirst
        );
        assert_eq!(
            parse_strategy(&["--strategy", "lookahead"]),
            Strategy::Lookahead
        );
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        assert!(
            Cli::try_parse_from(["puzzle-solver", "solve", "p.json", "--strategy", "astar"])
                .is_err()
        );
    }
}
