//! The chart surface: series accumulated during a run plus the final labels.

use crate::labels::SeriesLabel;

pub const X_AXIS_LABEL: &str = "Frequency";
pub const Y_AXIS_LABEL: &str = "Errors";
pub const CHART_TITLE: &str = "Graphical Summary of Test Suite";

/// One plotted line: the `(frequency, error)` pairs of one input file.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: SeriesLabel,
    /// Legend entry, `Test <label>`.
    pub name: String,
    pub points: Vec<[f64; 2]>,
}

impl Series {
    pub fn new(label: SeriesLabel, points: Vec<[f64; 2]>) -> Self {
        let name = label.series_name();
        Self { label, name, points }
    }
}

/// Accumulating plot surface.
///
/// Starts empty; series are appended in the order they are added. `finalize`
/// applies the axis labels, title and legend.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Chart {
    series: Vec<Series>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub title: Option<String>,
    pub legend: bool,
}

impl Chart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn finalize(&mut self) {
        self.x_label = Some(X_AXIS_LABEL.to_string());
        self.y_label = Some(Y_AXIS_LABEL.to_string());
        self.title = Some(CHART_TITLE.to_string());
        self.legend = true;
    }

    pub fn is_finalized(&self) -> bool {
        self.x_label.is_some() && self.y_label.is_some() && self.title.is_some() && self.legend
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Legend entries in insertion order. Empty while the legend is disabled.
    pub fn legend_entries(&self) -> Vec<&str> {
        if !self.legend {
            return Vec::new();
        }
        self.series.iter().map(|s| s.name.as_str()).collect()
    }

    /// Bounding box `([xmin, ymin], [xmax, ymax])` over all finite points.
    pub fn bounds(&self) -> Option<([f64; 2], [f64; 2])> {
        let mut min = [f64::INFINITY, f64::INFINITY];
        let mut max = [f64::NEG_INFINITY, f64::NEG_INFINITY];
        for p in self.series.iter().flat_map(|s| s.points.iter()) {
            if !(p[0].is_finite() && p[1].is_finite()) {
                continue;
            }
            for i in 0..2 {
                min[i] = min[i].min(p[i]);
                max[i] = max[i].max(p[i]);
            }
        }
        if min[0].is_finite() { Some((min, max)) } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finalize_sets_fixed_labels() {
        let mut c = Chart::new();
        assert!(!c.is_finalized());
        c.finalize();
        assert_eq!(c.x_label.as_deref(), Some("Frequency"));
        assert_eq!(c.y_label.as_deref(), Some("Errors"));
        assert_eq!(c.title.as_deref(), Some("Graphical Summary of Test Suite"));
        assert!(c.legend);
    }

    #[test]
    fn legend_follows_insertion_order() {
        let mut c = Chart::new();
        c.add_series(Series::new("B".into(), vec![[0.0, 1.0]]));
        c.add_series(Series::new("A".into(), vec![[0.0, 2.0]]));
        assert!(c.legend_entries().is_empty());
        c.finalize();
        assert_eq!(c.legend_entries(), vec!["Test B", "Test A"]);
    }

    #[test]
    fn bounds_skip_non_finite() {
        let mut c = Chart::new();
        assert!(c.bounds().is_none());
        c.add_series(Series::new("A".into(), vec![[1.0, -2.0], [f64::NAN, 100.0], [4.0, 3.0]]));
        assert_eq!(c.bounds(), Some(([1.0, -2.0], [4.0, 3.0])));
    }
}
