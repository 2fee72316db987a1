//! Shared estimate pipeline used by the CLI.
//!
//! validate plan -> generate arguments -> measure -> fit catalog -> select

use std::hint::black_box;

use crate::app::algorithms::Algorithm;
use crate::data::{ArgumentGenerator, validate_plan};
use crate::domain::EstimateConfig;
use crate::error::AppError;
use crate::fit::{Estimate, estimate};

/// Measure a built-in algorithm and fit the catalog.
///
/// Arguments for every size are drawn up front from one generator seeded with
/// `seed`, so repeated runs time identical inputs and a generation failure is
/// reported before anything is timed.
pub fn run_estimate(
    algo: Algorithm,
    config: &EstimateConfig,
    seed: u64,
) -> Result<Estimate, AppError> {
    validate_plan(&config.sizes, config.runs)?;

    let mut generator = ArgumentGenerator::seeded(seed);
    let mut inputs = prepare_inputs(algo, &mut generator, &config.sizes)?.into_iter();

    estimate(
        |data: &Vec<i64>| black_box(algo.run(data)),
        |_| inputs.next().unwrap_or_default(),
        config,
    )
}

/// One argument per size, in size order.
pub fn prepare_inputs(
    algo: Algorithm,
    generator: &mut ArgumentGenerator,
    sizes: &[usize],
) -> Result<Vec<Vec<i64>>, AppError> {
    sizes
        .iter()
        .map(|&n| algo.arguments(generator, n))
        .collect()
}
