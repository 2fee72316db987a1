//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during measurement and fitting
//! - exported to JSON/CSV for external plotting
//! - reloaded later by the `plot` subcommand

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Default input sizes used when the caller does not supply any.
pub const DEFAULT_INPUT_SIZES: [usize; 5] = [100, 200, 400, 800, 1600];

/// Default number of timed runs per input size.
pub const DEFAULT_RUNS: usize = 5;

/// A reference growth curve from the fixed catalog.
///
/// The declaration order is the catalog order; it decides ties during best-fit
/// selection (earlier entries win).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Constant,
    Logarithmic,
    SquareRoot,
    Linear,
    Linearithmic,
    Quadratic,
    Cubic,
    Exponential,
}

impl Complexity {
    /// The catalog, in selection order.
    pub const ALL: [Complexity; 8] = [
        Complexity::Constant,
        Complexity::Logarithmic,
        Complexity::SquareRoot,
        Complexity::Linear,
        Complexity::Linearithmic,
        Complexity::Quadratic,
        Complexity::Cubic,
        Complexity::Exponential,
    ];

    /// Big-O label for terminal output and reports.
    pub fn label(self) -> &'static str {
        match self {
            Complexity::Constant => "O(1)",
            Complexity::Logarithmic => "O(log n)",
            Complexity::SquareRoot => "O(√n)",
            Complexity::Linear => "O(n)",
            Complexity::Linearithmic => "O(n log n)",
            Complexity::Quadratic => "O(n²)",
            Complexity::Cubic => "O(n³)",
            Complexity::Exponential => "O(2^n)",
        }
    }

    /// Position in [`Complexity::ALL`].
    pub fn catalog_index(self) -> usize {
        self as usize
    }

    /// Evaluate the growth function at `n`.
    pub fn growth(self, n: usize) -> f64 {
        crate::models::growth(self, n)
    }

    /// The growth function itself, for callers that want to keep it around
    /// (e.g. a plotting collaborator).
    pub fn growth_fn(self) -> fn(usize) -> f64 {
        crate::models::growth_fn(self)
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One averaged timing measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub input_size: usize,
    /// Mean wall-clock duration of one invocation, in seconds.
    pub time_secs: f64,
}

/// Ordered timing samples, one per requested input size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSet {
    /// Number of timed invocations averaged into each sample.
    pub runs: usize,
    pub samples: Vec<Sample>,
}

impl SampleSet {
    /// Build a sample set from `(size, seconds)` pairs.
    ///
    /// Useful for fitting synthetic or externally measured timings.
    pub fn from_pairs(runs: usize, pairs: &[(usize, f64)]) -> Self {
        Self {
            runs,
            samples: pairs
                .iter()
                .map(|&(input_size, time_secs)| Sample {
                    input_size,
                    time_secs,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn sizes(&self) -> Vec<usize> {
        self.samples.iter().map(|s| s.input_size).collect()
    }

    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.time_secs).collect()
    }
}

/// Result of fitting one reference curve to a sample set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveFit {
    pub complexity: Complexity,
    /// Scale constant: predicted time is `c * f(n)`.
    pub c: f64,
    /// Sum of squared residuals.
    pub error: f64,
    /// Number of samples that took part in the fit.
    pub used: usize,
    /// `true` when the curve was identically zero and `c` is the mean time.
    pub degenerate: bool,
}

impl CurveFit {
    pub fn label(&self) -> &'static str {
        self.complexity.label()
    }

    /// Predicted time at `n` under this fit.
    ///
    /// Degenerate fits predict the mean time everywhere.
    pub fn predict(&self, n: usize) -> f64 {
        if self.degenerate {
            self.c
        } else {
            self.c * self.complexity.growth(n)
        }
    }
}

/// Library-level estimator configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimateConfig {
    pub sizes: Vec<usize>,
    pub runs: usize,
    /// Fit the catalog on the rayon pool.
    pub parallel: bool,
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_INPUT_SIZES.to_vec(),
            runs: DEFAULT_RUNS,
            parallel: false,
        }
    }
}

/// Alphabet for generated strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Charset {
    Lower,
    Upper,
    Mixed,
}

/// Fitted curve sampled at the measured sizes (plotting hand-off).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittedGrid {
    pub input_size: Vec<usize>,
    pub time_secs: Vec<f64>,
}

/// A saved estimate (JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub algorithm: String,
    pub runs: usize,
    pub samples: Vec<Sample>,
    pub fits: Vec<CurveFit>,
    pub skipped: Vec<SkippedCurve>,
    pub best: Option<CurveFit>,
    pub grid: Option<FittedGrid>,
}

/// A catalog entry that could not be fitted, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedCurve {
    pub complexity: Complexity,
    pub reason: String,
}
