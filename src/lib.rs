//! `algo-bench` library crate.
//!
//! Estimates the empirical time complexity of a function by timing it over
//! growing input sizes and fitting the timings against a fixed catalog of
//! growth curves. Also ships a correctness-test runner and a seedable
//! argument generator.
//!
//! The binary (`algo-bench`) is a thin wrapper around this library so that
//! core logic is testable without spawning processes.

pub mod app;
pub mod check;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod logging;
pub mod math;
pub mod models;
pub mod report;

pub use domain::{Complexity, CurveFit, EstimateConfig, Sample, SampleSet};
pub use error::AppError;
pub use fit::{
    Estimate, FitSelection, estimate, estimate_with_zeros, select_best, try_estimate,
};
