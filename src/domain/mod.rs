//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the reference-curve catalog (`Complexity`)
//! - timing samples (`Sample`, `SampleSet`)
//! - fit outputs (`CurveFit`) and the saved report schema (`ReportFile`)

pub mod types;

pub use types::*;
