//! Correctness-test runner.
//!
//! Runs a function against `(arguments, expected)` cases and records a verdict
//! per case. A case that returns `Err` or panics is marked failed and the
//! remaining cases still run.

use std::any::Any;
use std::fmt::{Debug, Display};
use std::panic::{AssertUnwindSafe, catch_unwind};

use tracing::{info, warn};

/// Verdict for one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseOutcome {
    Pass,
    /// Output did not satisfy the comparator (both sides `Debug`-rendered).
    Mismatch { expected: String, got: String },
    /// The function returned an error or panicked.
    Error(String),
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, CaseOutcome::Pass)
    }
}

/// Verdict plus its 1-based case number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseResult {
    pub number: usize,
    pub outcome: CaseOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorrectnessReport {
    pub cases: Vec<CaseResult>,
}

impl CorrectnessReport {
    /// Aggregate verdict. An empty case list counts as passing.
    pub fn all_passed(&self) -> bool {
        self.cases.iter().all(|c| c.outcome.passed())
    }

    pub fn passed(&self) -> usize {
        self.cases.iter().filter(|c| c.outcome.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.cases.len() - self.passed()
    }
}

/// Check `func` against `cases` using `comparator(result, expected)`.
pub fn check_correctness<A, X, R, E, F, C>(
    func: F,
    cases: &[(A, X)],
    comparator: C,
) -> CorrectnessReport
where
    F: Fn(&A) -> Result<R, E>,
    C: Fn(&R, &X) -> bool,
    R: Debug,
    X: Debug,
    E: Display,
{
    let mut report = CorrectnessReport::default();

    for (i, (args, expected)) in cases.iter().enumerate() {
        let number = i + 1;
        let outcome = match catch_unwind(AssertUnwindSafe(|| func(args))) {
            Ok(Ok(result)) => {
                if comparator(&result, expected) {
                    CaseOutcome::Pass
                } else {
                    CaseOutcome::Mismatch {
                        expected: format!("{expected:?}"),
                        got: format!("{result:?}"),
                    }
                }
            }
            Ok(Err(e)) => CaseOutcome::Error(e.to_string()),
            Err(payload) => {
                CaseOutcome::Error(format!("panicked: {}", panic_message(payload.as_ref())))
            }
        };

        match &outcome {
            CaseOutcome::Pass => info!(case = number, "pass"),
            CaseOutcome::Mismatch { expected, got } => {
                warn!(case = number, %expected, %got, "mismatch")
            }
            CaseOutcome::Error(message) => warn!(case = number, %message, "error"),
        }
        report.cases.push(CaseResult { number, outcome });
    }

    report
}

/// [`check_correctness`] with `==` as the comparator.
pub fn check_correctness_eq<A, X, R, E, F>(func: F, cases: &[(A, X)]) -> CorrectnessReport
where
    F: Fn(&A) -> Result<R, E>,
    R: Debug + PartialEq<X>,
    X: Debug,
    E: Display,
{
    check_correctness(func, cases, |result: &R, expected: &X| result == expected)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(v: &Vec<i32>) -> Result<Vec<i32>, String> {
        let mut out = v.clone();
        out.sort();
        Ok(out)
    }

    #[test]
    fn all_cases_pass() {
        let cases = vec![
            (vec![3, 1, 2], vec![1, 2, 3]),
            (vec![5, 3, 5, 2], vec![2, 3, 5, 5]),
            (vec![], vec![]),
            (vec![10, 9, 8, 8, 9], vec![8, 8, 9, 9, 10]),
        ];
        let report = check_correctness_eq(sorted, &cases);
        assert!(report.all_passed());
        assert_eq!(report.passed(), 4);
        assert_eq!(report.cases[3].number, 4);
    }

    #[test]
    fn mismatch_is_reported_with_values() {
        let cases = vec![(vec![2, 1], vec![2, 1])];
        let report = check_correctness_eq(sorted, &cases);
        assert!(!report.all_passed());
        assert_eq!(
            report.cases[0].outcome,
            CaseOutcome::Mismatch {
                expected: "[2, 1]".to_string(),
                got: "[1, 2]".to_string(),
            }
        );
    }

    #[test]
    fn errors_and_panics_do_not_stop_later_cases() {
        let func = |x: &i32| -> Result<i32, String> {
            match *x {
                0 => Err("zero input".to_string()),
                1 => panic!("one is cursed"),
                n => Ok(n * 2),
            }
        };
        let cases = vec![(0, 0), (1, 2), (2, 4)];
        let report = check_correctness_eq(func, &cases);

        assert_eq!(report.cases.len(), 3);
        assert_eq!(report.cases[0].outcome, CaseOutcome::Error("zero input".to_string()));
        assert_eq!(
            report.cases[1].outcome,
            CaseOutcome::Error("panicked: one is cursed".to_string())
        );
        assert!(report.cases[2].outcome.passed());
        assert_eq!(report.failed(), 2);
    }

    #[test]
    fn custom_comparator_is_used() {
        let func = |x: &f64| Ok::<f64, String>(x.sqrt());
        let cases = vec![(2.0, 1.41421)];
        let strict = check_correctness_eq(func, &cases);
        let loose = check_correctness(func, &cases, |r: &f64, e: &f64| (r - e).abs() < 1e-4);
        assert!(!strict.all_passed());
        assert!(loose.all_passed());
    }

    #[test]
    fn empty_case_list_passes() {
        let cases: Vec<(i32, i32)> = Vec::new();
        assert!(check_correctness_eq(|x: &i32| Ok::<i32, String>(*x), &cases).all_passed());
    }
}
