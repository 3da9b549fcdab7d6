//! The test suite visualizer: load every labelled file in order, collect one
//! series per file on a shared chart, finalize the labels and hand the chart
//! to a render target.

use crate::chart::{Chart, Series};
use crate::config::{Policy, VisualizerConfig};
use crate::error::{RunError, VisualizeError};
use crate::labels::SeriesLabel;
use crate::record::load_series;
use crate::render::RenderTarget;

/// Result of loading one input file.
#[derive(Debug)]
pub struct FileOutcome {
    pub label: SeriesLabel,
    pub path: String,
    pub result: Result<Series, VisualizeError>,
}

impl FileOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Visualizer {
    config: VisualizerConfig,
}

impl Visualizer {
    pub fn new(config: VisualizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    /// Load the configured files in label order.
    ///
    /// Under [`Policy::AllOrNothing`] collection stops after the first failed
    /// file, so the last outcome is the failure and later labels are never read.
    pub fn collect(&self, base_path: &str) -> Vec<FileOutcome> {
        let mut outcomes = Vec::with_capacity(self.config.labels.len());
        for label in &self.config.labels {
            let result = load_series(label, base_path);
            let failed = result.is_err();
            outcomes.push(FileOutcome {
                label: label.clone(),
                path: label.file_path(base_path),
                result,
            });
            if failed && self.config.policy == Policy::AllOrNothing {
                break;
            }
        }
        outcomes
    }

    /// Build the chart for `base_path` and render it.
    ///
    /// Returns the rendered chart. On failure the error carries the finalized
    /// chart as it stood, with every series added before the failure.
    pub fn run<T: RenderTarget>(&self, base_path: &str, target: &mut T) -> Result<Chart, RunError> {
        let mut chart = Chart::new();
        let mut skipped = 0usize;

        for outcome in self.collect(base_path) {
            match outcome.result {
                Ok(series) => {
                    log::debug!("{}: {} points", series.name, series.points.len());
                    chart.add_series(series);
                }
                Err(error) => match self.config.policy {
                    Policy::AllOrNothing => {
                        log::debug!("aborting at test {}", outcome.label);
                        chart.finalize();
                        return Err(RunError { error, chart });
                    }
                    Policy::BestEffort => {
                        log::warn!("skipping test {}: {}", outcome.label, error);
                        skipped += 1;
                    }
                },
            }
        }

        chart.finalize();
        if chart.is_empty() && !self.config.labels.is_empty() {
            return Err(RunError { error: VisualizeError::NoSeries, chart });
        }
        log::info!("plotting {} series ({} skipped)", chart.len(), skipped);

        if let Err(e) = target.render(&chart) {
            return Err(RunError { error: e.into(), chart });
        }
        Ok(chart)
    }
}

/// Plot `test[A-Z].json` under `base_path` onto one chart and render it.
///
/// `base_path` is joined to each file name by plain concatenation, so it
/// should end with a path separator.
pub fn visualize<T: RenderTarget>(base_path: &str, target: &mut T) -> Result<Chart, RunError> {
    Visualizer::default().run(base_path, target)
}
