//! Measure-then-fit entry points.

use crate::data::timing::{try_measure, zeros};
use crate::domain::{CurveFit, EstimateConfig, SampleSet};
use crate::error::AppError;
use crate::fit::selection::{FitSelection, select_best, select_best_parallel};

/// Samples plus the fit selection computed from them.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    pub samples: SampleSet,
    pub selection: FitSelection,
}

impl Estimate {
    /// Fit an already measured sample set.
    pub fn from_samples(samples: SampleSet, parallel: bool) -> Self {
        let selection = if parallel {
            select_best_parallel(&samples)
        } else {
            select_best(&samples)
        };
        Self { samples, selection }
    }

    /// Label of the winning curve, `None` when no fit was determined.
    pub fn label(&self) -> Option<&'static str> {
        self.selection.label()
    }

    pub fn best(&self) -> Option<&CurveFit> {
        self.selection.best.as_ref()
    }
}

/// Measure `target` over `config.sizes` and select the best-fitting curve.
///
/// A panicking target unwinds through this call.
pub fn estimate<A, R, G, F>(
    mut target: F,
    generate: G,
    config: &EstimateConfig,
) -> Result<Estimate, AppError>
where
    G: FnMut(usize) -> A,
    F: FnMut(&A) -> R,
{
    try_estimate(|args| Ok::<R, AppError>(target(args)), generate, config)
}

/// [`estimate`] with the default argument generator: `n` zeros per size.
pub fn estimate_with_zeros<R, F>(target: F, config: &EstimateConfig) -> Result<Estimate, AppError>
where
    F: FnMut(&Vec<i64>) -> R,
{
    estimate(target, zeros, config)
}

/// Like [`estimate`], for targets that can fail.
///
/// The first error returned by `target` aborts the measurement and is handed
/// back unchanged.
pub fn try_estimate<A, R, E, G, F>(
    target: F,
    generate: G,
    config: &EstimateConfig,
) -> Result<Estimate, E>
where
    E: From<AppError>,
    G: FnMut(usize) -> A,
    F: FnMut(&A) -> Result<R, E>,
{
    let samples = try_measure(target, &config.sizes, generate, config.runs)?;
    Ok(Estimate::from_samples(samples, config.parallel))
}
