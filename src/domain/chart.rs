// Displayed chart domain models - what the renderer consumes
use serde::Serialize;

/// Per-series drawing parameters. Never affects the numeric points.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderHints {
    pub tension: f64,
    pub fill: bool,
    pub border_width: u32,
    pub point_radius: u32,
    pub point_hit_radius: u32,
    pub stroke: Option<String>,
    pub fill_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyledSeries {
    pub label: String,
    pub points: Vec<f64>,
    pub style: RenderHints,
}

impl StyledSeries {
    pub fn new(label: String, points: Vec<f64>, style: RenderHints) -> Self {
        Self {
            label,
            points,
            style,
        }
    }
}

/// Bounds the renderer applies to x-axis zoom and pan, in label indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoomLimits {
    pub min: usize,
    pub max: usize,
    pub min_range: usize,
}

pub const MIN_ZOOM_RANGE: usize = 5;

impl ZoomLimits {
    pub fn for_labels(label_count: usize) -> Self {
        Self {
            min: 0,
            max: label_count.saturating_sub(1),
            min_range: MIN_ZOOM_RANGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartView {
    pub labels: Vec<String>,
    pub series: Vec<StyledSeries>,
    pub zoom_limits: ZoomLimits,
}

impl ChartView {
    pub fn new(labels: Vec<String>, series: Vec<StyledSeries>) -> Self {
        let zoom_limits = ZoomLimits::for_labels(labels.len());
        Self {
            labels,
            series,
            zoom_limits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_limits() {
        assert_eq!(
            ZoomLimits::for_labels(30),
            ZoomLimits { min: 0, max: 29, min_range: 5 }
        );
        assert_eq!(ZoomLimits::for_labels(0).max, 0);
    }
}
