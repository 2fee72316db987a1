//! Scalar least squares.
//!
//! Every catalog curve has a single free parameter, so the regression is:
//!
//! ```text
//! minimize Σ (t_i - c f_i)^2   =>   c = (t · f) / (f · f)
//! ```
//!
//! The closed form only breaks down when `f · f` is zero or not finite; callers
//! get `None` in that case and decide how to treat the curve.

use nalgebra::DVector;

/// Scale constant and residual sum of squares.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarFit {
    pub c: f64,
    pub sse: f64,
}

/// Solve `t ≈ c f` in the least-squares sense.
///
/// Returns `None` for empty inputs, mismatched lengths, or a zero / non-finite
/// denominator.
pub fn solve_scalar_least_squares(t: &DVector<f64>, f: &DVector<f64>) -> Option<ScalarFit> {
    if t.is_empty() || t.len() != f.len() {
        return None;
    }

    let denom = f.dot(f);
    if denom == 0.0 || !denom.is_finite() {
        return None;
    }

    let c = t.dot(f) / denom;
    if !c.is_finite() {
        return None;
    }

    let sse = (t - f * c).norm_squared();
    Some(ScalarFit { c, sse })
}

/// Fit `t ≈ c` with `c = mean(t)`.
///
/// Returns `None` for an empty input.
pub fn fit_mean(t: &DVector<f64>) -> Option<ScalarFit> {
    if t.is_empty() {
        return None;
    }
    let c = t.mean();
    let sse = t.add_scalar(-c).norm_squared();
    Some(ScalarFit { c, sse })
}
