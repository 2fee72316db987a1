//! Command-line parsing for the complexity estimator.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the measuring/fitting code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::app::algorithms::Algorithm;
use crate::domain::{Charset, DEFAULT_RUNS};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "algo-bench",
    version,
    about = "Empirical complexity estimator and correctness checker"
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Time a built-in algorithm across input sizes and estimate its complexity.
    Estimate(EstimateArgs),
    /// Run the built-in correctness cases for an algorithm.
    Check(CheckArgs),
    /// Print a generated argument.
    Generate(GenerateArgs),
    /// Print the measured and fitted grid from a saved report JSON.
    Plot(PlotArgs),
}

/// Options for `estimate`.
#[derive(Debug, Args, Clone)]
pub struct EstimateArgs {
    /// Algorithm to measure.
    #[arg(short, long, value_enum, default_value_t = Algorithm::Sort)]
    pub algo: Algorithm,

    /// Comma-separated input sizes (positive integers).
    #[arg(long, value_delimiter = ',', default_values_t = [100usize, 200, 400, 800, 1600])]
    pub sizes: Vec<usize>,

    /// Timed runs per input size.
    #[arg(short, long, env = "ALGO_BENCH_RUNS", default_value_t = DEFAULT_RUNS)]
    pub runs: usize,

    /// Seed for argument generation.
    #[arg(long, env = "ALGO_BENCH_SEED", default_value_t = 42)]
    pub seed: u64,

    /// Fit the curve catalog in parallel.
    #[arg(long)]
    pub parallel: bool,

    /// Print a measured-vs-fitted table.
    #[arg(long)]
    pub plot: bool,

    /// Export the report (samples, fits, fitted grid) to JSON.
    #[arg(long = "export-json")]
    pub export_json: Option<PathBuf>,

    /// Export samples to CSV.
    #[arg(long = "export-csv")]
    pub export_csv: Option<PathBuf>,
}

/// Options for `check`.
#[derive(Debug, Args, Clone)]
pub struct CheckArgs {
    /// Algorithm to check.
    #[arg(short, long, value_enum, default_value_t = Algorithm::Sort)]
    pub algo: Algorithm,
}

/// Kinds of generated arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ArgKind {
    IntList,
    String,
    Matrix,
    Tree,
    LinkedList,
    Graph,
}

/// Options for `generate`.
#[derive(Debug, Args, Clone)]
pub struct GenerateArgs {
    #[arg(short, long, value_enum)]
    pub kind: ArgKind,

    /// Element count (rows and columns for matrices, nodes for graphs/trees).
    #[arg(short = 'n', long, default_value_t = 10)]
    pub size: usize,

    /// Seed; omit for an entropy-seeded generator.
    #[arg(long, env = "ALGO_BENCH_SEED")]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub min: i64,

    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    pub max: i64,

    /// Draw distinct integers (int-list only).
    #[arg(long)]
    pub unique: bool,

    #[arg(long, value_enum, default_value_t = Charset::Lower)]
    pub charset: Charset,

    /// Edge probability (graph only).
    #[arg(long, default_value_t = 0.2)]
    pub edge_probability: f64,

    /// Directed edges (graph only).
    #[arg(long)]
    pub directed: bool,
}

/// Options for `plot`.
#[derive(Debug, Args, Clone)]
pub struct PlotArgs {
    /// Report JSON produced by `algo-bench estimate --export-json`.
    #[arg(long, value_name = "JSON")]
    pub report: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_defaults() {
        let cli = Cli::try_parse_from(["algo-bench", "estimate"]).unwrap();
        let Command::Estimate(args) = cli.command else {
            panic!("expected estimate");
        };
        assert_eq!(args.algo, Algorithm::Sort);
        assert_eq!(args.sizes, vec![100, 200, 400, 800, 1600]);
        assert!(!args.parallel);
    }

    #[test]
    fn sizes_are_comma_separated() {
        let cli = Cli::try_parse_from([
            "algo-bench",
            "-vv",
            "estimate",
            "--algo",
            "pair-count",
            "--sizes",
            "10,20,40",
            "--runs",
            "2",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Command::Estimate(args) = cli.command else {
            panic!("expected estimate");
        };
        assert_eq!(args.algo, Algorithm::PairCount);
        assert_eq!(args.sizes, vec![10, 20, 40]);
        assert_eq!(args.runs, 2);
    }

    #[test]
    fn negative_sizes_are_rejected_by_parser() {
        assert!(Cli::try_parse_from(["algo-bench", "estimate", "--sizes", "10,-5"]).is_err());
    }

    #[test]
    fn generate_accepts_negative_bounds() {
        let cli = Cli::try_parse_from([
            "algo-bench", "generate", "--kind", "int-list", "--min", "-10", "--max", "10",
        ])
        .unwrap();
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.kind, ArgKind::IntList);
        assert_eq!(args.min, -10);
    }
}
