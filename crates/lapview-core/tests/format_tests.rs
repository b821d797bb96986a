use lapview_core::{parse_iso8601, series_points, ChartDataResponse};
use std::collections::HashMap;

fn response(timestamps: &[&str], data: &[(&str, Vec<Option<f64>>)]) -> ChartDataResponse {
    ChartDataResponse {
        timestamps: timestamps.iter().map(|s| s.to_string()).collect(),
        data: data
            .iter()
            .map(|(metric, values)| (metric.to_string(), values.clone()))
            .collect::<HashMap<_, _>>(),
        point_count: timestamps.len(),
        original_count: timestamps.len(),
    }
}

#[test]
fn null_samples_are_dropped() {
    let resp = response(
        &[
            "2026-08-20T00:00:00Z",
            "2026-08-20T00:01:00Z",
            "2026-08-20T00:02:00Z",
        ],
        &[("lux", vec![Some(1.0), None, Some(3.0)])],
    );
    let points = series_points(&resp, "lux");
    let t0 = parse_iso8601("2026-08-20T00:00:00Z").unwrap().unix_timestamp() as f64;
    let t2 = parse_iso8601("2026-08-20T00:02:00Z").unwrap().unix_timestamp() as f64;
    assert_eq!(points, vec![(t0, 1.0), (t2, 3.0)]);
}

#[test]
fn absent_metric_yields_empty() {
    let resp = response(
        &["2026-08-20T00:00:00Z"],
        &[("lux", vec![Some(1.0)])],
    );
    assert!(series_points(&resp, "humidity").is_empty());
}

#[test]
fn absent_timestamps_yield_empty() {
    let resp = response(&[], &[("lux", vec![])]);
    assert!(series_points(&resp, "lux").is_empty());
}

#[test]
fn unparseable_timestamp_drops_the_point() {
    let resp = response(
        &["garbage", "2026-08-20T00:01:00Z"],
        &[("lux", vec![Some(1.0), Some(2.0)])],
    );
    let points = series_points(&resp, "lux");
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].1, 2.0);
}

#[test]
fn offsetless_timestamps_are_assumed_utc() {
    let resp = response(
        &["2026-08-20T00:00:00"],
        &[("lux", vec![Some(5.0)])],
    );
    let points = series_points(&resp, "lux");
    let expected = parse_iso8601("2026-08-20T00:00:00Z").unwrap().unix_timestamp() as f64;
    assert_eq!(points, vec![(expected, 5.0)]);
}
