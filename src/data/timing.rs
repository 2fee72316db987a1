//! Wall-clock timing samples.
//!
//! For every input size the argument generator is called once, then the target
//! is invoked `runs` times on those same arguments. Each invocation is timed
//! individually with a monotonic clock and the per-size sample is the mean.
//!
//! The target receives a shared reference. Targets that destroy their input
//! (in-place sorts, draining queues) must clone inside the call, otherwise later
//! runs would see already-processed data.

use std::hint::black_box;
use std::time::Instant;

use tracing::debug;

use crate::domain::{Sample, SampleSet};
use crate::error::AppError;

/// Check sizes and run count before anything is measured.
pub fn validate_plan(sizes: &[usize], runs: usize) -> Result<(), AppError> {
    if sizes.is_empty() {
        return Err(AppError::invalid_argument("At least one input size is required."));
    }
    if let Some(pos) = sizes.iter().position(|&n| n == 0) {
        return Err(AppError::invalid_argument(format!(
            "Input sizes must be positive integers (size #{} is 0).",
            pos + 1
        )));
    }
    if runs == 0 {
        return Err(AppError::invalid_argument("Run count must be >= 1."));
    }
    Ok(())
}

/// Time an infallible target.
///
/// A panic inside `target` or `generate` is not caught.
pub fn measure<A, R, G, F>(
    mut target: F,
    sizes: &[usize],
    generate: G,
    runs: usize,
) -> Result<SampleSet, AppError>
where
    G: FnMut(usize) -> A,
    F: FnMut(&A) -> R,
{
    try_measure(|args| Ok::<R, AppError>(target(args)), sizes, generate, runs)
}

/// Time a fallible target; the first `Err` aborts measurement and is returned.
pub fn try_measure<A, R, E, G, F>(
    mut target: F,
    sizes: &[usize],
    mut generate: G,
    runs: usize,
) -> Result<SampleSet, E>
where
    E: From<AppError>,
    G: FnMut(usize) -> A,
    F: FnMut(&A) -> Result<R, E>,
{
    validate_plan(sizes, runs)?;

    let mut samples = Vec::with_capacity(sizes.len());
    for &n in sizes {
        let args = generate(n);

        let mut total = 0.0;
        for _ in 0..runs {
            let start = Instant::now();
            let out = target(black_box(&args))?;
            let elapsed = start.elapsed();
            black_box(out);
            total += elapsed.as_secs_f64();
        }

        let time_secs = total / runs as f64;
        debug!(input_size = n, runs, time_secs, "measured");
        samples.push(Sample {
            input_size: n,
            time_secs,
        });
    }

    Ok(SampleSet { runs, samples })
}

/// Default argument generator: a list of `n` zeros.
pub fn zeros(n: usize) -> Vec<i64> {
    vec![0; n]
}
