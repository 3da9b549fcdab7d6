//! Series labels: the tokens that name one input file and its legend entry.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LabelError;

/// Identifies one test run. The default set is the 26 uppercase letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesLabel(pub String);

impl SeriesLabel {
    pub fn new<S: Into<String>>(label: S) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Input file name for this label, e.g. `testA.json`.
    pub fn file_name(&self) -> String {
        format!("test{}.json", self.0)
    }

    /// Full input path. Plain concatenation: the caller owns the trailing separator.
    pub fn file_path(&self, base_path: &str) -> String {
        format!("{}{}", base_path, self.file_name())
    }

    /// Legend entry, e.g. `Test A`.
    pub fn series_name(&self) -> String {
        format!("Test {}", self.0)
    }
}

impl fmt::Display for SeriesLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SeriesLabel {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<char> for SeriesLabel {
    fn from(c: char) -> Self {
        Self(c.to_string())
    }
}

/// Ordered set of labels processed by one run.
///
/// Labels are unique: two series with the same legend name would be merged
/// by the plot legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SeriesLabel>", into = "Vec<SeriesLabel>")]
pub struct LabelSet(Vec<SeriesLabel>);

impl LabelSet {
    pub fn new(labels: Vec<SeriesLabel>) -> Result<Self, LabelError> {
        for (i, label) in labels.iter().enumerate() {
            if labels[..i].contains(label) {
                return Err(LabelError::Duplicate(label.clone()));
            }
        }
        Ok(Self(labels))
    }

    /// `A` through `Z`, ascending.
    pub fn alphabet() -> Self {
        Self(('A'..='Z').map(SeriesLabel::from).collect())
    }

    /// Parse a label list from the command line.
    ///
    /// Accepts either a comma separated list (`A,B,extra`) or a run of single
    /// characters (`ABC`). Whitespace around entries is ignored and empty
    /// entries are dropped. Repeated labels are rejected.
    pub fn parse(spec: &str) -> Result<Self, LabelError> {
        let labels = if spec.contains(',') {
            spec.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(SeriesLabel::from)
                .collect()
        } else {
            spec.chars()
                .filter(|c| !c.is_whitespace())
                .map(SeriesLabel::from)
                .collect()
        };
        Self::new(labels)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SeriesLabel> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for LabelSet {
    fn default() -> Self {
        Self::alphabet()
    }
}

impl<'a> IntoIterator for &'a LabelSet {
    type Item = &'a SeriesLabel;
    type IntoIter = std::slice::Iter<'a, SeriesLabel>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl TryFrom<Vec<SeriesLabel>> for LabelSet {
    type Error = LabelError;

    fn try_from(labels: Vec<SeriesLabel>) -> Result<Self, Self::Error> {
        Self::new(labels)
    }
}

impl From<LabelSet> for Vec<SeriesLabel> {
    fn from(set: LabelSet) -> Self {
        set.0
    }
}
