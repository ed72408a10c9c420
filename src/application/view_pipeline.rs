// View transform pipeline - Filter, aggregate, style
use crate::domain::chart::{ChartView, RenderHints, StyledSeries};
use crate::domain::series::{Series, SeriesSet};
use crate::domain::view::{Granularity, LineStyle, VariationFilter, ViewSelection};
use crate::infrastructure::config::ChartConfig;

pub const WEEK_LENGTH: usize = 7;
pub const SMOOTH_TENSION: f64 = 0.4;

/// Derive the displayed chart from the immutable base set.
///
/// Pure: the same `(base, selection, style)` always yields an equal view.
pub fn derive_view(base: &SeriesSet, selection: &ViewSelection, style: &ChartConfig) -> ChartView {
    let filtered = filter_by_variation(base, &selection.variation_filter);

    let shaped = match selection.granularity {
        Granularity::Day => filtered,
        Granularity::Week => group_by_weeks(&filtered),
    };
    debug_assert!(shaped.is_aligned());

    let series = apply_style(shaped.series, selection.line_style, style);
    ChartView::new(shaped.labels, series)
}

pub fn filter_by_variation(base: &SeriesSet, filter: &VariationFilter) -> SeriesSet {
    let series = base
        .series
        .iter()
        .filter(|s| filter.matches(&s.label))
        .cloned()
        .collect();

    SeriesSet::new(base.labels.clone(), series)
}

/// Fixed windows of seven consecutive labels, summed per series.
/// The trailing window may be shorter and is still emitted.
pub fn group_by_weeks(source: &SeriesSet) -> SeriesSet {
    let bucket_count = source.labels.len().div_ceil(WEEK_LENGTH);

    let labels = (1..=bucket_count).map(|n| format!("Week {}", n)).collect();

    let series = source
        .series
        .iter()
        .map(|s| {
            let points = (0..bucket_count)
                .map(|bucket| {
                    let start = bucket * WEEK_LENGTH;
                    let end = (start + WEEK_LENGTH).min(source.labels.len());
                    (start..end)
                        .map(|i| s.points.get(i).copied().unwrap_or(0.0))
                        .sum::<f64>()
                })
                .collect();
            Series::new(s.label.clone(), s.slot, points)
        })
        .collect();

    SeriesSet::new(labels, series)
}

pub fn apply_style(series: Vec<Series>, line_style: LineStyle, style: &ChartConfig) -> Vec<StyledSeries> {
    series
        .into_iter()
        .map(|s| {
            let hints = render_hints(s.slot, line_style, style);
            StyledSeries::new(s.label, s.points, hints)
        })
        .collect()
}

fn render_hints(slot: usize, line_style: LineStyle, style: &ChartConfig) -> RenderHints {
    let (tension, fill) = match line_style {
        LineStyle::Curve => (SMOOTH_TENSION, false),
        LineStyle::Area => (SMOOTH_TENSION, true),
        LineStyle::Straight => (0.0, false),
    };
    let colors = style.palette.get(slot);

    RenderHints {
        tension,
        fill,
        border_width: style.border_width,
        point_radius: 0,
        point_hit_radius: style.point_hit_radius,
        stroke: colors.map(|c| c.stroke.clone()),
        fill_color: colors.map(|c| c.fill.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(days: usize) -> SeriesSet {
        let labels = (1..=days).map(|d| format!("{:02}.01.25", d)).collect();
        SeriesSet::new(
            labels,
            vec![
                Series::new("Original".to_string(), 0, vec![10.0; days]),
                Series::new("Variation A".to_string(), 1, (0..days).map(|d| d as f64).collect()),
                Series::new("Variation B".to_string(), 2, vec![2.5; days]),
            ],
        )
    }

    fn selection(granularity: Granularity, filter: VariationFilter, line_style: LineStyle) -> ViewSelection {
        ViewSelection::new(granularity, filter, line_style)
    }

    fn assert_aligned(view: &ChartView) {
        for s in &view.series {
            assert_eq!(s.points.len(), view.labels.len(), "series {}", s.label);
        }
    }

    #[test]
    fn test_day_view_passes_values_through() {
        let base = base(3);
        let view = derive_view(&base, &ViewSelection::default(), &ChartConfig::default());

        assert_eq!(view.labels, base.labels);
        assert_eq!(view.series.len(), 3);
        assert_eq!(view.series[1].points, vec![0.0, 1.0, 2.0]);
        assert_aligned(&view);
    }

    #[test]
    fn test_week_bucket_is_a_sum() {
        let view = derive_view(
            &base(7),
            &selection(Granularity::Week, VariationFilter::All, LineStyle::Area),
            &ChartConfig::default(),
        );

        assert_eq!(view.labels, vec!["Week 1"]);
        assert_eq!(view.series[0].points, vec![70.0]);
        assert_eq!(view.series[1].points, vec![21.0]);
        assert_aligned(&view);
    }

    #[test]
    fn test_trailing_partial_week_is_kept() {
        let view = derive_view(
            &base(10),
            &selection(Granularity::Week, VariationFilter::All, LineStyle::Area),
            &ChartConfig::default(),
        );

        assert_eq!(view.labels, vec!["Week 1", "Week 2"]);
        assert_eq!(view.series[0].points, vec![70.0, 30.0]);
        // 0..=6 and 7..=9
        assert_eq!(view.series[1].points, vec![21.0, 24.0]);
        assert_eq!(view.series[2].points, vec![17.5, 7.5]);
        assert_aligned(&view);
    }

    #[test]
    fn test_week_view_of_empty_axis() {
        let view = derive_view(
            &base(0),
            &selection(Granularity::Week, VariationFilter::All, LineStyle::Area),
            &ChartConfig::default(),
        );

        assert!(view.labels.is_empty());
        assert_eq!(view.series.len(), 3);
        assert_aligned(&view);
    }

    #[test]
    fn test_filter_single_variation() {
        let view = derive_view(
            &base(14),
            &selection(
                Granularity::Week,
                VariationFilter::Only("Variation B".to_string()),
                LineStyle::Curve,
            ),
            &ChartConfig::default(),
        );

        assert_eq!(view.series.len(), 1);
        assert_eq!(view.series[0].label, "Variation B");
        assert_eq!(view.series[0].points, vec![17.5, 17.5]);
    }

    #[test]
    fn test_unknown_filter_yields_no_series() {
        let view = derive_view(
            &base(5),
            &selection(
                Granularity::Day,
                VariationFilter::Only("Variation Z".to_string()),
                LineStyle::Area,
            ),
            &ChartConfig::default(),
        );

        assert_eq!(view.labels.len(), 5);
        assert!(view.series.is_empty());
    }

    #[test]
    fn test_empty_catalog_yields_empty_view() {
        let base = SeriesSet::new(vec!["01.01.25".to_string()], Vec::new());
        let view = derive_view(&base, &ViewSelection::default(), &ChartConfig::default());
        assert!(view.series.is_empty());
    }

    #[test]
    fn test_line_styles() {
        let config = ChartConfig::default();
        let cases = [
            (LineStyle::Curve, SMOOTH_TENSION, false),
            (LineStyle::Area, SMOOTH_TENSION, true),
            (LineStyle::Straight, 0.0, false),
        ];

        for (line_style, tension, fill) in cases {
            let view = derive_view(
                &base(3),
                &selection(Granularity::Day, VariationFilter::All, line_style),
                &config,
            );
            for s in &view.series {
                assert_eq!(s.style.tension, tension);
                assert_eq!(s.style.fill, fill);
                assert_eq!(s.style.border_width, 3);
                assert_eq!(s.style.point_radius, 0);
                assert_eq!(s.style.point_hit_radius, 10);
            }
        }
    }

    #[test]
    fn test_style_never_touches_points() {
        let base = base(9);
        for line_style in [LineStyle::Curve, LineStyle::Area, LineStyle::Straight] {
            let styled = apply_style(base.series.clone(), line_style, &ChartConfig::default());
            let points: Vec<&Vec<f64>> = styled.iter().map(|s| &s.points).collect();
            let expected: Vec<&Vec<f64>> = base.series.iter().map(|s| &s.points).collect();
            assert_eq!(points, expected);
        }
    }

    #[test]
    fn test_colors_follow_catalog_slot() {
        let config = ChartConfig::default();
        let view = derive_view(
            &base(2),
            &selection(
                Granularity::Day,
                VariationFilter::Only("Variation B".to_string()),
                LineStyle::Area,
            ),
            &config,
        );

        assert_eq!(view.series[0].style.stroke.as_deref(), Some(config.palette[2].stroke.as_str()));
        assert_eq!(view.series[0].style.fill_color.as_deref(), Some(config.palette[2].fill.as_str()));
    }

    #[test]
    fn test_slot_past_palette_has_no_colors() {
        let config = ChartConfig {
            palette: Vec::new(),
            ..ChartConfig::default()
        };
        let view = derive_view(&base(2), &ViewSelection::default(), &config);
        assert!(view.series.iter().all(|s| s.style.stroke.is_none() && s.style.fill_color.is_none()));
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let base = base(10);
        let config = ChartConfig::default();
        let selection = selection(Granularity::Week, VariationFilter::All, LineStyle::Straight);

        let first = derive_view(&base, &selection, &config);
        let second = derive_view(&base, &selection, &config);

        assert_eq!(first, second);
        assert_eq!(base, self::base(10));
    }

    #[test]
    fn test_zoom_limits_track_derived_labels() {
        let config = ChartConfig::default();
        let day = derive_view(&base(10), &ViewSelection::default(), &config);
        assert_eq!(day.zoom_limits.max, 9);

        let week = derive_view(
            &base(10),
            &selection(Granularity::Week, VariationFilter::All, LineStyle::Area),
            &config,
        );
        assert_eq!(week.zoom_limits.max, 1);
    }
}
