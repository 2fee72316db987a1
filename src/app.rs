//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` defaults and parses CLI arguments
//! - runs estimates / correctness checks / argument generation
//! - prints reports
//! - writes optional exports

use clap::Parser;
use tracing::info;

use crate::cli::{ArgKind, CheckArgs, Command, EstimateArgs, GenerateArgs, PlotArgs};
use crate::data::ArgumentGenerator;
use crate::domain::EstimateConfig;
use crate::error::AppError;
use crate::report::{TablePlot, emit_plot, fmt_secs};

pub mod algorithms;
pub mod pipeline;

/// Entry point for the `algo-bench` binary.
pub fn run() -> Result<(), AppError> {
    // `.env` may supply ALGO_BENCH_RUNS / ALGO_BENCH_SEED; a missing file is fine.
    dotenvy::dotenv().ok();

    let cli = crate::cli::Cli::parse();
    crate::logging::init(cli.verbose);

    match cli.command {
        Command::Estimate(args) => handle_estimate(args),
        Command::Check(args) => handle_check(args),
        Command::Generate(args) => handle_generate(args),
        Command::Plot(args) => handle_plot(args),
    }
}

pub fn estimate_config_from_args(args: &EstimateArgs) -> EstimateConfig {
    EstimateConfig {
        sizes: args.sizes.clone(),
        runs: args.runs,
        parallel: args.parallel,
    }
}

fn handle_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let config = estimate_config_from_args(&args);
    info!(algo = args.algo.name(), sizes = ?config.sizes, runs = config.runs, "estimating");

    let estimate = pipeline::run_estimate(args.algo, &config, args.seed)?;

    println!("{}", crate::report::format_estimate_summary(args.algo.name(), &estimate));

    if args.plot {
        let mut table = TablePlot::default();
        if emit_plot(&estimate, &mut table)? {
            println!("{}", table.rendered);
        }
    }

    // Optional exports.
    if let Some(path) = &args.export_json {
        let report = crate::io::build_report(args.algo.name(), &estimate);
        crate::io::write_report_json(path, &report)?;
        info!(path = %path.display(), "report written");
    }
    if let Some(path) = &args.export_csv {
        crate::io::write_samples_csv(path, &estimate.samples, estimate.best())?;
        info!(path = %path.display(), "samples written");
    }

    Ok(())
}

fn handle_check(args: CheckArgs) -> Result<(), AppError> {
    let algo = args.algo;
    let cases = algo.cases();
    let report = crate::check::check_correctness_eq(
        |input: &Vec<i64>| Ok::<_, AppError>(algo.run(input)),
        &cases,
    );

    print!("{}", crate::report::format_correctness_report(&report));

    if report.all_passed() {
        Ok(())
    } else {
        Err(AppError::new(
            4,
            format!("{}: {} of {} cases failed.", algo.name(), report.failed(), report.cases.len()),
        ))
    }
}

fn handle_generate(args: GenerateArgs) -> Result<(), AppError> {
    let mut generator = ArgumentGenerator::new(args.seed);
    let n = args.size;

    let rendered = match args.kind {
        ArgKind::IntList => {
            let values = generator.int_list(n, args.min, args.max, args.unique)?;
            format!("{values:?}")
        }
        ArgKind::String => generator.string(n, args.charset),
        ArgKind::Matrix => {
            let rows = generator.matrix(n, n, args.min, args.max)?;
            rows.iter().map(|r| format!("{r:?}")).collect::<Vec<_>>().join("\n")
        }
        ArgKind::Tree => match generator.binary_tree(n, args.min, args.max)? {
            Some(root) => format!("level order: {:?}", root.level_order()),
            None => "(empty tree)".to_string(),
        },
        ArgKind::LinkedList => match generator.linked_list(n, args.min, args.max)? {
            Some(head) => head
                .to_vec()
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" -> "),
            None => "(empty list)".to_string(),
        },
        ArgKind::Graph => {
            let graph = generator.graph(n, args.edge_probability, args.directed)?;
            graph
                .iter()
                .map(|(node, neighbours)| format!("{node}: {neighbours:?}"))
                .collect::<Vec<_>>()
                .join("\n")
        }
    };

    println!("{rendered}");
    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let report = crate::io::read_report_json(&args.report)?;

    println!("Report: {} ({} runs/size, {})", report.algorithm, report.runs, report.generated_at);
    let (Some(best), Some(grid)) = (&report.best, &report.grid) else {
        println!("No fit determined.");
        return Ok(());
    };

    println!("Best fit: {} (c={:.4e})", best.label(), best.c);
    println!("{:>10} {:>14} {:>14}", "n", "measured", "fitted");
    for (sample, fitted) in report.samples.iter().zip(grid.time_secs.iter()) {
        println!(
            "{:>10} {:>14} {:>14}",
            sample.input_size,
            fmt_secs(sample.time_secs),
            fmt_secs(*fitted)
        );
    }
    Ok(())
}
