//! Built-in demo algorithms with known complexity.
//!
//! Each algorithm takes a list of integers and returns a list of integers so
//! the same shape works for both timing and correctness checks.

use clap::ValueEnum;

use crate::data::ArgumentGenerator;
use crate::error::AppError;

/// Number of lookups performed by `binary-search` per call.
const PROBES: i64 = 1_000;

/// Upper bound for generated values (inclusive).
const VALUE_MAX: i64 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// Return the first element: O(1).
    Constant,
    /// `PROBES` lookups in a sorted list: O(log n).
    BinarySearch,
    /// Sum of all elements: O(n).
    Sum,
    /// Sort a copy of the list: O(n log n).
    Sort,
    /// Count inversions with a nested loop: O(n²).
    PairCount,
    /// Count zero-sum triples with three nested loops: O(n³).
    TripleLoop,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Constant => "constant",
            Algorithm::BinarySearch => "binary-search",
            Algorithm::Sum => "sum",
            Algorithm::Sort => "sort",
            Algorithm::PairCount => "pair-count",
            Algorithm::TripleLoop => "triple-loop",
        }
    }

    /// Build the input for size `n`.
    pub fn arguments(
        self,
        generator: &mut ArgumentGenerator,
        n: usize,
    ) -> Result<Vec<i64>, AppError> {
        match self {
            Algorithm::TripleLoop => generator.int_list(n, -VALUE_MAX, VALUE_MAX, false),
            Algorithm::BinarySearch => {
                let mut v = generator.int_list(n, 0, VALUE_MAX, false)?;
                v.sort_unstable();
                Ok(v)
            }
            _ => generator.int_list(n, 0, VALUE_MAX, false),
        }
    }

    pub fn run(self, data: &[i64]) -> Vec<i64> {
        match self {
            Algorithm::Constant => data.first().copied().into_iter().collect(),
            Algorithm::BinarySearch => {
                let found = (0..PROBES).filter(|k| data.binary_search(k).is_ok()).count();
                vec![found as i64]
            }
            Algorithm::Sum => vec![data.iter().sum()],
            Algorithm::Sort => {
                let mut out = data.to_vec();
                out.sort();
                out
            }
            Algorithm::PairCount => {
                let mut inversions = 0i64;
                for i in 0..data.len() {
                    for j in (i + 1)..data.len() {
                        if data[i] > data[j] {
                            inversions += 1;
                        }
                    }
                }
                vec![inversions]
            }
            Algorithm::TripleLoop => {
                let mut triples = 0i64;
                let n = data.len();
                for i in 0..n {
                    for j in (i + 1)..n {
                        for k in (j + 1)..n {
                            if data[i] + data[j] + data[k] == 0 {
                                triples += 1;
                            }
                        }
                    }
                }
                vec![triples]
            }
        }
    }

    /// Known `(input, expected)` pairs for the correctness runner.
    pub fn cases(self) -> Vec<(Vec<i64>, Vec<i64>)> {
        match self {
            Algorithm::Constant => vec![(vec![7, 1, 2], vec![7]), (vec![], vec![])],
            Algorithm::BinarySearch => vec![
                (vec![0, 1, 2, 999, 1000, 1001], vec![4]),
                (vec![], vec![0]),
            ],
            Algorithm::Sum => vec![
                (vec![1, 2, 3], vec![6]),
                (vec![], vec![0]),
                (vec![-5, 5], vec![0]),
            ],
            Algorithm::Sort => vec![
                (vec![3, 1, 2], vec![1, 2, 3]),
                (vec![5, 3, 5, 2], vec![2, 3, 5, 5]),
                (vec![], vec![]),
                (vec![10, 9, 8, 8, 9], vec![8, 8, 9, 9, 10]),
            ],
            Algorithm::PairCount => vec![
                (vec![1, 2, 3], vec![0]),
                (vec![3, 2, 1], vec![3]),
                (vec![2, 4, 1, 3, 5], vec![3]),
            ],
            Algorithm::TripleLoop => vec![
                (vec![-1, 0, 1, 2], vec![1]),
                (vec![1, 2, 3], vec![0]),
                (vec![0, 0, 0, 0], vec![4]),
            ],
        }
    }
}
