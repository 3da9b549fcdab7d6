//! Run configuration: which labels to load, how to react to bad files, and
//! how the native window is sized.
//!
//! Every field has a default matching the classic behaviour (letters A to Z,
//! abort on the first failure), so an empty JSON object `{}` is a valid config.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chart::CHART_TITLE;
use crate::error::ConfigError;
use crate::labels::LabelSet;

/// What a run does when one input file cannot be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// Stop at the first failure; nothing is rendered.
    #[default]
    AllOrNothing,
    /// Skip failing files and render whatever loaded.
    BestEffort,
}

/// Native window options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: CHART_TITLE.to_string(),
            width: 1400.0,
            height: 900.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    pub labels: LabelSet,
    pub policy: Policy,
    pub window: WindowConfig,
}

impl VisualizerConfig {
    pub fn with_labels(mut self, labels: LabelSet) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    pub fn from_json_str(path: &str, text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: display.clone(),
            source,
        })?;
        Self::from_json_str(&display, &text)
    }
}
