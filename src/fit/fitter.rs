//! Least-squares fit of a sample set against a single reference curve.
//!
//! Given:
//! - input sizes `n_i`
//! - mean timings `t_i`
//! - a catalog curve `f`
//!
//! we find the scale `c` minimising `Σ (t_i - c f(n_i))^2`.
//!
//! Edge cases:
//! - a curve that is zero at every measured size (e.g. `log n` at `n = 1`) is
//!   fitted by the mean timing instead
//! - points where `f` is zero or not finite are left out of the regression
//! - a curve with no usable points is not applicable

use nalgebra::DVector;

use crate::domain::{Complexity, CurveFit, SampleSet};
use crate::math::{fit_mean, solve_scalar_least_squares};

/// Why a curve could not be fitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotApplicable {
    /// The sample set has no samples.
    NoSamples,
    /// Every `f(n_i)` was infinite or zero-filtered.
    NoValidPairs,
    /// `Σ f_i^2` collapsed to zero or overflowed.
    SingularDenominator,
}

impl NotApplicable {
    pub fn reason(self) -> &'static str {
        match self {
            NotApplicable::NoSamples => "no samples",
            NotApplicable::NoValidPairs => "no finite, non-zero curve values",
            NotApplicable::SingularDenominator => "zero or non-finite denominator",
        }
    }
}

/// Fit one catalog curve to the samples.
pub fn fit_curve(samples: &SampleSet, kind: Complexity) -> Result<CurveFit, NotApplicable> {
    if samples.is_empty() {
        return Err(NotApplicable::NoSamples);
    }

    let f_values: Vec<f64> = samples.samples.iter().map(|s| kind.growth(s.input_size)).collect();

    if f_values.iter().all(|&v| v == 0.0) {
        let t = DVector::from_vec(samples.times());
        let fit = fit_mean(&t).ok_or(NotApplicable::NoSamples)?;
        return Ok(CurveFit {
            complexity: kind,
            c: fit.c,
            error: fit.sse,
            used: samples.len(),
            degenerate: true,
        });
    }

    let (t_valid, f_valid): (Vec<f64>, Vec<f64>) = samples
        .samples
        .iter()
        .zip(f_values.iter())
        .filter(|(_, fv)| fv.is_finite() && **fv != 0.0)
        .map(|(s, &fv)| (s.time_secs, fv))
        .unzip();

    if t_valid.is_empty() {
        return Err(NotApplicable::NoValidPairs);
    }

    let used = t_valid.len();
    let t = DVector::from_vec(t_valid);
    let f = DVector::from_vec(f_valid);
    let fit = solve_scalar_least_squares(&t, &f).ok_or(NotApplicable::SingularDenominator)?;

    Ok(CurveFit {
        complexity: kind,
        c: fit.c,
        error: fit.sse,
        used,
        degenerate: false,
    })
}
