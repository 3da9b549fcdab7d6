//! suiteplot crate root: re-exports and module wiring.
//!
//! Loads one JSON result file per test run (`testA.json` ... `testZ.json` by
//! default), overlays their frequency/error curves on a single chart and shows
//! it in an egui/eframe window.
//!
//! - `labels`: series labels and the ordered label set
//! - `record`: input file parsing and validation
//! - `chart`: the accumulating chart surface
//! - `render`: render target trait and a recording target
//! - `window`: native window render target
//! - `visualizer`: the load-assemble-render procedure
//! - `config`: run configuration

pub mod chart;
pub mod config;
pub mod error;
pub mod labels;
pub mod record;
pub mod render;
pub mod visualizer;
pub mod window;

pub use chart::{Chart, Series, CHART_TITLE, X_AXIS_LABEL, Y_AXIS_LABEL};
pub use config::{Policy, VisualizerConfig, WindowConfig};
pub use error::{ConfigError, LabelError, RenderError, RunError, SchemaMismatch, VisualizeError};
pub use labels::{LabelSet, SeriesLabel};
pub use record::{load_record, load_series, InputRecord};
pub use render::{RecordingTarget, RenderTarget};
pub use visualizer::{visualize, FileOutcome, Visualizer};
pub use window::NativeWindow;
