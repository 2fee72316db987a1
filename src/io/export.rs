//! Export timing samples to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or plotting scripts.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::{CurveFit, SampleSet};
use crate::error::AppError;

/// Write `input_size,time_secs,fitted_secs` rows.
///
/// `fitted_secs` is left empty when no fit was determined.
pub fn write_samples_csv(
    path: &Path,
    samples: &SampleSet,
    best: Option<&CurveFit>,
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display()))
    })?;
    let mut file = BufWriter::new(file);

    writeln!(file, "input_size,time_secs,fitted_secs")
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for s in &samples.samples {
        let fitted = best
            .map(|fit| format!("{:.12e}", fit.predict(s.input_size)))
            .unwrap_or_default();
        writeln!(file, "{},{:.12e},{}", s.input_size, s.time_secs, fitted)
            .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    file.flush()
        .map_err(|e| AppError::new(2, format!("Failed to flush export CSV: {e}")))?;
    Ok(())
}
