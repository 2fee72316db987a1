//! Growth functions for the reference-curve catalog.
//!
//! Every function maps an input size `n` to a non-negative real. Two entries are
//! clamped at the bottom of their domain (`ln n` and `n ln n` are `0` for
//! `n <= 1`) and the exponential curve is cut off at `n >= 30`, where it
//! returns `+inf` so the fitter can discard the point.

use crate::domain::Complexity;

/// First size at which `2^n` is treated as unusable.
pub const EXPONENTIAL_CUTOFF: usize = 30;

fn constant(_n: usize) -> f64 {
    1.0
}

fn logarithmic(n: usize) -> f64 {
    if n > 1 { (n as f64).ln() } else { 0.0 }
}

fn square_root(n: usize) -> f64 {
    (n as f64).sqrt()
}

fn linear(n: usize) -> f64 {
    n as f64
}

fn linearithmic(n: usize) -> f64 {
    if n > 1 {
        let n = n as f64;
        n * n.ln()
    } else {
        0.0
    }
}

fn quadratic(n: usize) -> f64 {
    let n = n as f64;
    n * n
}

fn cubic(n: usize) -> f64 {
    let n = n as f64;
    n * n * n
}

fn exponential(n: usize) -> f64 {
    if n < EXPONENTIAL_CUTOFF {
        (n as f64).exp2()
    } else {
        f64::INFINITY
    }
}

/// The growth function for a catalog entry.
pub fn growth_fn(kind: Complexity) -> fn(usize) -> f64 {
    match kind {
        Complexity::Constant => constant,
        Complexity::Logarithmic => logarithmic,
        Complexity::SquareRoot => square_root,
        Complexity::Linear => linear,
        Complexity::Linearithmic => linearithmic,
        Complexity::Quadratic => quadratic,
        Complexity::Cubic => cubic,
        Complexity::Exponential => exponential,
    }
}

/// Evaluate `f(n)` for a catalog entry.
pub fn growth(kind: Complexity, n: usize) -> f64 {
    growth_fn(kind)(n)
}
