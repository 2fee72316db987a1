//! Reporting: terminal formatting and the plotting hand-off.
//!
//! Rendering charts is left to whoever implements [`PlotSink`]; this crate
//! only supplies the measured points and the winning curve.

pub mod format;

pub use format::*;

use crate::domain::{CurveFit, FittedGrid, SampleSet};
use crate::error::AppError;
use crate::fit::{Estimate, fitted_grid};

/// Receives measured samples together with the best-fitting curve.
pub trait PlotSink {
    fn plot(&mut self, samples: &SampleSet, fit: &CurveFit) -> Result<(), AppError>;
}

/// Hand an estimate to a plot sink.
///
/// Returns `Ok(false)` without calling the sink when no fit was determined.
pub fn emit_plot<S: PlotSink + ?Sized>(
    estimate: &Estimate,
    sink: &mut S,
) -> Result<bool, AppError> {
    let Some(fit) = estimate.best() else {
        return Ok(false);
    };
    sink.plot(&estimate.samples, fit)?;
    Ok(true)
}

/// Fitted curve evaluated at every measured size.
pub fn build_grid(samples: &SampleSet, fit: &CurveFit) -> FittedGrid {
    let input_size = samples.sizes();
    let time_secs = fitted_grid(fit, &input_size);
    FittedGrid {
        input_size,
        time_secs,
    }
}

/// Plot sink that renders a measured-vs-fitted text table.
#[derive(Debug, Default, Clone)]
pub struct TablePlot {
    pub rendered: String,
}

impl PlotSink for TablePlot {
    fn plot(&mut self, samples: &SampleSet, fit: &CurveFit) -> Result<(), AppError> {
        self.rendered = format_grid_table(samples, fit);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: usize,
        label: Option<&'static str>,
    }

    impl PlotSink for Recorder {
        fn plot(&mut self, _samples: &SampleSet, fit: &CurveFit) -> Result<(), AppError> {
            self.calls += 1;
            self.label = Some(fit.label());
            Ok(())
        }
    }

    #[test]
    fn emit_plot_passes_best_fit() {
        let samples = SampleSet::from_pairs(1, &[(10, 100.0), (20, 400.0), (40, 1600.0)]);
        let estimate = Estimate::from_samples(samples, false);
        let mut sink = Recorder::default();
        assert!(emit_plot(&estimate, &mut sink).unwrap());
        assert_eq!(sink.calls, 1);
        assert_eq!(sink.label, Some("O(n²)"));
    }

    #[test]
    fn emit_plot_skips_sink_without_fit() {
        let estimate = Estimate::from_samples(SampleSet::from_pairs(1, &[]), false);
        let mut sink = Recorder::default();
        assert!(!emit_plot(&estimate, &mut sink).unwrap());
        assert_eq!(sink.calls, 0);
    }

    #[test]
    fn grid_follows_samples() {
        let samples = SampleSet::from_pairs(1, &[(10, 30.0), (20, 60.0)]);
        let estimate = Estimate::from_samples(samples.clone(), false);
        let grid = build_grid(&samples, estimate.best().unwrap());
        assert_eq!(grid.input_size, vec![10, 20]);
        assert!((grid.time_secs[1] - 60.0).abs() < 1e-9);
    }

    #[test]
    fn table_plot_renders_rows() {
        let samples = SampleSet::from_pairs(1, &[(10, 30.0), (20, 60.0)]);
        let estimate = Estimate::from_samples(samples, false);
        let mut table = TablePlot::default();
        emit_plot(&estimate, &mut table).unwrap();
        assert!(table.rendered.starts_with("Best fit: O(n)"));
        assert_eq!(table.rendered.lines().count(), 4);
    }
}
