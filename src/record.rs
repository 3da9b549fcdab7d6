//! Input records: one JSON file per test run.

use std::io;

use serde::{Deserialize, Serialize};
use serde_json::error::Category;

use crate::chart::Series;
use crate::error::{SchemaMismatch, VisualizeError};
use crate::labels::SeriesLabel;

/// Paired measurements read from one `test<label>.json` file.
///
/// Point `i` is `(freq[i], errors[i])`. Any other keys in the file are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputRecord {
    pub freq: Vec<f64>,
    pub errors: Vec<f64>,
}

impl InputRecord {
    pub fn check_lengths(&self) -> Result<(), SchemaMismatch> {
        if self.freq.len() != self.errors.len() {
            return Err(SchemaMismatch::LengthMismatch {
                freq: self.freq.len(),
                errors: self.errors.len(),
            });
        }
        Ok(())
    }

    /// Consume the record into a plotted series named `Test <label>`.
    pub fn into_series(self, label: &SeriesLabel, path: &str) -> Result<Series, VisualizeError> {
        self.check_lengths()
            .map_err(|kind| VisualizeError::SchemaMismatch {
                label: label.clone(),
                path: path.to_string(),
                kind,
            })?;
        let points = self
            .freq
            .into_iter()
            .zip(self.errors)
            .map(|(f, e)| [f, e])
            .collect();
        Ok(Series::new(label.clone(), points))
    }
}

/// Parse a record from the raw bytes of `path`.
///
/// The whole file must be UTF-8, including values of ignored keys; anything
/// else is malformed content.
pub fn parse_record(label: &SeriesLabel, path: &str, bytes: &[u8]) -> Result<InputRecord, VisualizeError> {
    let text = std::str::from_utf8(bytes).map_err(|e| VisualizeError::MalformedContent {
        label: label.clone(),
        path: path.to_string(),
        source: <serde_json::Error as serde::de::Error>::custom(e),
    })?;
    serde_json::from_str(text).map_err(|e| match e.classify() {
        Category::Data => VisualizeError::SchemaMismatch {
            label: label.clone(),
            path: path.to_string(),
            kind: SchemaMismatch::MissingOrInvalidField(e.to_string()),
        },
        _ => VisualizeError::MalformedContent {
            label: label.clone(),
            path: path.to_string(),
            source: e,
        },
    })
}

/// Read and parse the file at `path`. The file is closed before returning.
pub fn load_record(label: &SeriesLabel, path: &str) -> Result<InputRecord, VisualizeError> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => VisualizeError::MissingFile {
            label: label.clone(),
            path: path.to_string(),
        },
        _ => VisualizeError::Io {
            label: label.clone(),
            path: path.to_string(),
            source: e,
        },
    })?;
    parse_record(label, path, &bytes)
}

/// Load the file for `label` under `base_path` and turn it into a series.
pub fn load_series(label: &SeriesLabel, base_path: &str) -> Result<Series, VisualizeError> {
    let path = label.file_path(base_path);
    log::debug!("loading {}", path);
    let record = load_record(label, &path)?;
    record.into_series(label, &path)
}
