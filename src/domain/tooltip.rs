// Hover tooltip content and placement
use super::chart::ChartView;
use serde::Serialize;

pub const TOOLTIP_WIDTH: f64 = 228.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipEntry {
    pub label: String,
    pub value: f64,
    pub stroke: Option<String>,
    /// Highest value at the hovered index.
    pub leader: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub title: String,
    pub left: f64,
    pub max_width: f64,
    pub entries: Vec<TooltipEntry>,
}

impl Tooltip {
    /// Returns `None` when the index is off the label axis or nothing is plotted.
    pub fn at(view: &ChartView, index: usize, caret_x: f64, chart_width: Option<f64>) -> Option<Self> {
        let title = view.labels.get(index)?.clone();
        if view.series.is_empty() {
            return None;
        }

        let mut entries: Vec<TooltipEntry> = view
            .series
            .iter()
            .map(|s| TooltipEntry {
                label: s.label.clone(),
                value: s.points.get(index).copied().unwrap_or(0.0),
                stroke: s.style.stroke.clone(),
                leader: false,
            })
            .collect();

        entries.sort_by(|a, b| b.value.total_cmp(&a.value));
        if let Some(first) = entries.first_mut() {
            first.leader = true;
        }

        Some(Self {
            title,
            left: place(caret_x, chart_width),
            max_width: TOOLTIP_WIDTH,
            entries,
        })
    }
}

/// Flip the box to the left of the caret once it passes the chart's midline.
pub fn place(caret_x: f64, chart_width: Option<f64>) -> f64 {
    match chart_width {
        Some(width) if width > 0.0 && width / 2.0 < caret_x => caret_x - TOOLTIP_WIDTH,
        _ => caret_x,
    }
}
