//! Read/write estimate report JSON files.
//!
//! The report is the "portable" representation of an estimate:
//! - the measured samples
//! - every curve fit (and the skipped curves)
//! - the winning fit plus its fitted grid, for external plotting
//!
//! The schema is defined by `domain::ReportFile`.

use std::fs::File;
use std::path::Path;

use chrono::Utc;

use crate::domain::ReportFile;
use crate::error::AppError;
use crate::fit::Estimate;
use crate::report::build_grid;

/// Assemble a report for a finished estimate.
pub fn build_report(algorithm: &str, estimate: &Estimate) -> ReportFile {
    let selection = &estimate.selection;
    ReportFile {
        tool: "algo-bench".to_string(),
        generated_at: Utc::now(),
        algorithm: algorithm.to_string(),
        runs: estimate.samples.runs,
        samples: estimate.samples.samples.clone(),
        fits: selection.fits.clone(),
        skipped: selection.skipped.clone(),
        best: selection.best,
        grid: selection.best.as_ref().map(|fit| build_grid(&estimate.samples, fit)),
    }
}

/// Write a report JSON file.
pub fn write_report_json(path: &Path, report: &ReportFile) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(2, format!("Failed to create report JSON '{}': {e}", path.display()))
    })?;

    serde_json::to_writer_pretty(file, report)
        .map_err(|e| AppError::new(2, format!("Failed to write report JSON: {e}")))?;

    Ok(())
}

/// Read a report JSON file.
pub fn read_report_json(path: &Path) -> Result<ReportFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(2, format!("Failed to open report JSON '{}': {e}", path.display()))
    })?;
    let report: ReportFile = serde_json::from_reader(file)
        .map_err(|e| AppError::new(2, format!("Invalid report JSON: {e}")))?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Complexity, SampleSet};

    #[test]
    fn report_survives_disk() {
        let samples = SampleSet::from_pairs(5, &[(10, 30.0), (20, 60.0), (40, 120.0)]);
        let estimate = Estimate::from_samples(samples, false);
        let report = build_report("sum", &estimate);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        write_report_json(&path, &report).unwrap();
        let loaded = read_report_json(&path).unwrap();

        assert_eq!(loaded.algorithm, "sum");
        assert_eq!(loaded.runs, 5);
        assert_eq!(loaded.best.map(|b| b.complexity), Some(Complexity::Linear));
        let grid = loaded.grid.unwrap();
        assert_eq!(grid.input_size, vec![10, 20, 40]);
    }

    #[test]
    fn report_without_fit_has_no_grid() {
        let estimate = Estimate::from_samples(SampleSet::from_pairs(1, &[]), false);
        let report = build_report("nothing", &estimate);
        assert!(report.best.is_none());
        assert!(report.grid.is_none());
        assert_eq!(report.skipped.len(), Complexity::ALL.len());
    }

    #[test]
    fn missing_file_is_exit_code_two() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_report_json(&dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
