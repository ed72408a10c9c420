// Base series domain models
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    /// Position of the variation in the catalog; selects palette colors.
    pub slot: usize,
    pub points: Vec<f64>,
}

impl Series {
    pub fn new(label: String, slot: usize, points: Vec<f64>) -> Self {
        Self {
            label,
            slot,
            points,
        }
    }
}

/// Shared chronological labels plus one series per variation.
///
/// Every `series[i].points` has exactly `labels.len()` entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeriesSet {
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

impl SeriesSet {
    pub fn new(labels: Vec<String>, series: Vec<Series>) -> Self {
        Self { labels, series }
    }

    pub fn is_aligned(&self) -> bool {
        self.series
            .iter()
            .all(|s| s.points.len() == self.labels.len())
    }
}
