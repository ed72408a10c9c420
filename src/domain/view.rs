// User view selection
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    Day,
    Week,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    Curve,
    #[default]
    Area,
    Straight,
}

pub const ALL_VARIATIONS: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VariationFilter {
    #[default]
    All,
    Only(String),
}

impl VariationFilter {
    /// Absent, empty or exactly `all` selects every variation; anything else
    /// is an exact label.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") | Some(ALL_VARIATIONS) => Self::All,
            Some(value) => Self::Only(value.to_string()),
        }
    }

    pub fn matches(&self, label: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == label,
        }
    }
}

/// Drives a full re-derivation of the displayed series; never mutates the base.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewSelection {
    pub granularity: Granularity,
    pub variation_filter: VariationFilter,
    pub line_style: LineStyle,
}

impl ViewSelection {
    pub fn new(granularity: Granularity, variation_filter: VariationFilter, line_style: LineStyle) -> Self {
        Self {
            granularity,
            variation_filter,
            line_style,
        }
    }
}
