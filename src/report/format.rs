//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized

use crate::check::{CaseOutcome, CorrectnessReport};
use crate::domain::{CurveFit, SampleSet};
use crate::fit::Estimate;

/// Format the full estimate summary (samples + fit diagnostics + chosen curve).
pub fn format_estimate_summary(name: &str, estimate: &Estimate) -> String {
    let mut out = String::new();

    out.push_str("=== algo-bench - Complexity Estimate ===\n");
    out.push_str(&format!("Algorithm: {name}\n"));
    out.push_str(&format!(
        "Samples: n={} | runs/size={}\n",
        estimate.samples.len(),
        estimate.samples.runs
    ));

    out.push_str("\nMeasured:\n");
    out.push_str(&format!("{:>10} {:>14}\n", "n", "time"));
    for s in &estimate.samples.samples {
        out.push_str(&format!("{:>10} {:>14}\n", s.input_size, fmt_secs(s.time_secs)));
    }

    let selection = &estimate.selection;
    let best = selection.best_complexity();

    out.push_str("\nCurve diagnostics:\n");
    for fit in &selection.fits {
        let chosen = if Some(fit.complexity) == best { "*" } else { " " };
        let mode = if fit.degenerate { " (mean)" } else { "" };
        out.push_str(&format!(
            "{chosen} {:<11} c={:<12.4e} SSE={:.4e}{mode}\n",
            fit.label(),
            fit.c,
            fit.error
        ));
    }
    for skipped in &selection.skipped {
        out.push_str(&format!("  (skipped {}) {}\n", skipped.complexity.label(), skipped.reason));
    }

    out.push_str("\nEstimated complexity: ");
    match &selection.best {
        Some(fit) => out.push_str(&format!("{} (c={:.4e})\n", fit.label(), fit.c)),
        None => out.push_str("no fit determined\n"),
    }

    out
}

/// Format per-case verdicts and the aggregate line.
pub fn format_correctness_report(report: &CorrectnessReport) -> String {
    let mut out = String::new();
    for case in &report.cases {
        let line = match &case.outcome {
            CaseOutcome::Pass => format!("Test case {}: PASS", case.number),
            CaseOutcome::Mismatch { expected, got } => {
                format!("Test case {}: FAIL - Expected {expected}, got {got}", case.number)
            }
            CaseOutcome::Error(message) => {
                format!("Test case {}: FAIL - Error: {message}", case.number)
            }
        };
        out.push_str(&line);
        out.push('\n');
    }

    if report.all_passed() {
        out.push_str("All test cases passed!\n");
    } else {
        out.push_str(&format!(
            "Some test cases failed. ({}/{} passed)\n",
            report.passed(),
            report.cases.len()
        ));
    }
    out
}

/// Side-by-side table of measured and fitted times.
pub fn format_grid_table(samples: &SampleSet, fit: &CurveFit) -> String {
    let mut out = String::new();
    out.push_str(&format!("Best fit: {}\n", fit.label()));
    out.push_str(&format!("{:>10} {:>14} {:>14}\n", "n", "measured", "fitted"));
    for s in &samples.samples {
        out.push_str(&format!(
            "{:>10} {:>14} {:>14}\n",
            s.input_size,
            fmt_secs(s.time_secs),
            fmt_secs(fit.predict(s.input_size))
        ));
    }
    out
}

/// Render seconds with a readable unit.
pub fn fmt_secs(secs: f64) -> String {
    if !secs.is_finite() {
        return "-".to_string();
    }
    let abs = secs.abs();
    if abs >= 1.0 {
        format!("{secs:.3}s")
    } else if abs >= 1e-3 {
        format!("{:.3}ms", secs * 1e3)
    } else if abs >= 1e-6 {
        format!("{:.3}µs", secs * 1e6)
    } else {
        format!("{:.1}ns", secs * 1e9)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::CaseResult;

    #[test]
    fn summary_marks_chosen_curve() {
        let samples = SampleSet::from_pairs(1, &[(10, 30.0), (20, 60.0), (40, 120.0)]);
        let estimate = Estimate::from_samples(samples, false);
        let text = format_estimate_summary("linear", &estimate);
        assert!(text.contains("Algorithm: linear"));
        assert!(text.contains("* O(n) "));
        assert!(text.contains("Estimated complexity: O(n)"));
    }

    #[test]
    fn summary_reports_missing_fit() {
        let estimate = Estimate::from_samples(SampleSet::from_pairs(1, &[]), false);
        let text = format_estimate_summary("empty", &estimate);
        assert!(text.contains("no fit determined"));
        assert!(text.contains("(skipped O(1)) no samples"));
    }

    #[test]
    fn correctness_lines() {
        let report = CorrectnessReport {
            cases: vec![
                CaseResult {
                    number: 1,
                    outcome: CaseOutcome::Pass,
                },
                CaseResult {
                    number: 2,
                    outcome: CaseOutcome::Mismatch {
                        expected: "[1, 2]".to_string(),
                        got: "[2, 1]".to_string(),
                    },
                },
            ],
        };
        let text = format_correctness_report(&report);
        assert!(text.contains("Test case 1: PASS\n"));
        assert!(text.contains("Test case 2: FAIL - Expected [1, 2], got [2, 1]\n"));
        assert!(text.contains("Some test cases failed. (1/2 passed)"));
    }

    #[test]
    fn seconds_units() {
        assert_eq!(fmt_secs(2.0), "2.000s");
        assert_eq!(fmt_secs(0.0015), "1.500ms");
        assert_eq!(fmt_secs(2.5e-6), "2.500µs");
        assert_eq!(fmt_secs(4e-8), "40.0ns");
        assert_eq!(fmt_secs(f64::INFINITY), "-");
    }
}
