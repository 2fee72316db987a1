//! Best-fit selection across the reference-curve catalog.
//!
//! Each catalog curve is fitted independently (see [`fit_curve`]) and the one
//! with the smallest residual error wins.
//!
//! Selection rules:
//! 1. Curves that cannot be fitted are skipped and reported with a reason.
//! 2. A later curve replaces the current best only with a strictly smaller error,
//!    so ties go to the earlier catalog entry.
//! 3. If nothing could be fitted, there is no best fit. This is a reportable
//!    outcome, not an error.

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::domain::{Complexity, CurveFit, SampleSet, SkippedCurve};
use crate::fit::fitter::{NotApplicable, fit_curve};

/// Catalog index, curve, and the fit or the reason it was skipped.
type Outcome = (usize, Complexity, Result<CurveFit, NotApplicable>);

/// Output of fitting + selection.
#[derive(Debug, Clone, PartialEq)]
pub struct FitSelection {
    /// Winning fit, or `None` when no curve was applicable.
    pub best: Option<CurveFit>,
    /// Fits for every applicable curve, in catalog order.
    pub fits: Vec<CurveFit>,
    /// Curves that were skipped and why (for diagnostics).
    pub skipped: Vec<SkippedCurve>,
}

impl FitSelection {
    pub fn label(&self) -> Option<&'static str> {
        self.best.map(|b| b.label())
    }

    pub fn best_complexity(&self) -> Option<Complexity> {
        self.best.map(|b| b.complexity)
    }
}

/// Fit every catalog curve sequentially and select the best.
pub fn select_best(samples: &SampleSet) -> FitSelection {
    let outcomes: Vec<Outcome> = Complexity::ALL
        .iter()
        .enumerate()
        .map(|(idx, &kind)| (idx, kind, fit_curve(samples, kind)))
        .collect();
    assemble(outcomes)
}

/// Same as [`select_best`], but fits the catalog on the rayon pool.
///
/// The result is identical to the sequential version: ties are still resolved
/// by catalog index, never by completion order.
pub fn select_best_parallel(samples: &SampleSet) -> FitSelection {
    let outcomes: Vec<Outcome> = Complexity::ALL
        .par_iter()
        .enumerate()
        .map(|(idx, &kind)| (idx, kind, fit_curve(samples, kind)))
        .collect();
    assemble(outcomes)
}

fn assemble(mut outcomes: Vec<Outcome>) -> FitSelection {
    outcomes.sort_by_key(|(idx, _, _)| *idx);

    let mut fits = Vec::new();
    let mut skipped = Vec::new();
    let mut best: Option<(usize, CurveFit)> = None;

    for (idx, kind, outcome) in outcomes {
        match outcome {
            Ok(fit) => {
                debug!(
                    curve = kind.label(),
                    c = fit.c,
                    error = fit.error,
                    used = fit.used,
                    "curve fitted"
                );
                let replace = match &best {
                    None => fit.error < f64::INFINITY,
                    Some((best_idx, current)) => {
                        fit.error < current.error || (fit.error == current.error && idx < *best_idx)
                    }
                };
                if replace {
                    best = Some((idx, fit));
                }
                fits.push(fit);
            }
            Err(why) => {
                debug!(curve = kind.label(), reason = why.reason(), "curve skipped");
                skipped.push(SkippedCurve {
                    complexity: kind,
                    reason: why.reason().to_string(),
                });
            }
        }
    }

    let best = best.map(|(_, fit)| fit);
    match &best {
        Some(fit) => info!(curve = fit.label(), c = fit.c, error = fit.error, "best fit selected"),
        None => warn!("no reference curve could be fitted"),
    }

    FitSelection { best, fits, skipped }
}

/// Evaluate the fitted curve at each size (plotting hand-off).
pub fn fitted_grid(fit: &CurveFit, sizes: &[usize]) -> Vec<f64> {
    sizes.iter().map(|&n| fit.predict(n)).collect()
}
