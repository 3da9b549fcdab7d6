//! Error taxonomy for loading, assembling and rendering a test suite chart.

use std::io;

use thiserror::Error;

use crate::chart::Chart;
use crate::labels::SeriesLabel;

/// Ways a parsed record can fail to describe a series.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaMismatch {
    /// `freq` or `errors` is absent or not an array of numbers.
    #[error("missing or invalid field: {0}")]
    MissingOrInvalidField(String),
    #[error("`freq` has {freq} values but `errors` has {errors}")]
    LengthMismatch { freq: usize, errors: usize },
}

/// Failure while handing a finished chart to its display sink.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("display backend failed: {0}")]
    Backend(String),
}

/// Invalid label list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    #[error("label `{0}` listed more than once")]
    Duplicate(SeriesLabel),
}

impl From<eframe::Error> for RenderError {
    fn from(e: eframe::Error) -> Self {
        RenderError::Backend(e.to_string())
    }
}

#[derive(Debug, Error)]
pub enum VisualizeError {
    #[error("test {label}: input file not found: {path}")]
    MissingFile { label: SeriesLabel, path: String },
    #[error("test {label}: cannot read {path}: {source}")]
    Io {
        label: SeriesLabel,
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("test {label}: malformed JSON in {path}: {source}")]
    MalformedContent {
        label: SeriesLabel,
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("test {label}: unexpected content in {path}: {kind}")]
    SchemaMismatch {
        label: SeriesLabel,
        path: String,
        kind: SchemaMismatch,
    },
    #[error("no series could be loaded")]
    NoSeries,
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl VisualizeError {
    /// Label of the file that caused the failure, if the failure is tied to one.
    pub fn label(&self) -> Option<&SeriesLabel> {
        match self {
            VisualizeError::MissingFile { label, .. }
            | VisualizeError::Io { label, .. }
            | VisualizeError::MalformedContent { label, .. }
            | VisualizeError::SchemaMismatch { label, .. } => Some(label),
            VisualizeError::NoSeries | VisualizeError::Render(_) => None,
        }
    }
}

/// An aborted run: the error plus the finalized chart as it stood when the run stopped.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct RunError {
    #[source]
    pub error: VisualizeError,
    pub chart: Chart,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Labels(#[from] LabelError),
    #[error("cannot read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
