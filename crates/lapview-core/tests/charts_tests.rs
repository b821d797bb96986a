use lapview_core::charts::{AxisSide, YScale};
use lapview_core::{ChartId, Theme, DASHBOARD_CHARTS};

#[test]
fn catalogue_has_five_charts_with_metrics() {
    assert_eq!(DASHBOARD_CHARTS.len(), 5);
    for chart in &DASHBOARD_CHARTS {
        assert!(!chart.metrics.is_empty(), "{} has no metrics", chart.title);
        assert!(chart.metrics.len() <= 3, "{} names too many metrics", chart.title);
    }
}

#[test]
fn right_axis_metrics_have_a_right_axis() {
    for chart in &DASHBOARD_CHARTS {
        let uses_right = chart.metrics.iter().any(|m| m.axis == AxisSide::Right);
        assert_eq!(
            uses_right,
            chart.right.is_some(),
            "axis mismatch on {}",
            chart.title
        );
    }
}

#[test]
fn light_and_exposure_use_log_scale() {
    for chart in &DASHBOARD_CHARTS {
        let expect_log = matches!(chart.id, ChartId::Light | ChartId::Exposure);
        assert_eq!(chart.left.scale == YScale::Log10, expect_log, "{}", chart.title);
    }
}

#[test]
fn brightness_axis_is_pinned_to_byte_range() {
    let brightness = DASHBOARD_CHARTS
        .iter()
        .find(|c| c.id == ChartId::Brightness)
        .unwrap();
    assert_eq!(brightness.left.min, Some(0.0));
    assert_eq!(brightness.left.max, Some(255.0));
}

#[test]
fn palettes_cover_every_catalogue_metric() {
    for theme in [Theme::Light, Theme::Dark] {
        let palette = theme.palette();
        for chart in &DASHBOARD_CHARTS {
            for metric in chart.metrics {
                // A fallback color is fine for unknown names, but catalogue
                // metrics should all have a dedicated entry.
                assert_ne!(
                    palette.metric(metric.metric),
                    palette.metric("no_such_metric"),
                    "missing palette entry for {}",
                    metric.metric
                );
            }
        }
    }
}
