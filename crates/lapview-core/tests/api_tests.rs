use lapview_core::api::data_url;
use lapview_core::{ChartDataResponse, DataRangeResponse, TimeRange};

#[test]
fn data_url_assembles_query() {
    let range = TimeRange::from_inputs("2026-08-20T00:00:00Z", "2026-08-21T00:00:00Z").unwrap();
    let url = data_url(
        "http://localhost:8080",
        &["lux", "sun_elevation"],
        &range,
        500,
    );
    assert_eq!(
        url,
        "http://localhost:8080/charts/api/data?metrics=lux,sun_elevation\
         &start=2026-08-20T00:00:00Z&end=2026-08-21T00:00:00Z&downsample=500"
    );
}

#[test]
fn chart_data_response_deserializes() {
    let json = r#"{
        "timestamps": ["2026-08-20T00:00:00", "2026-08-20T00:05:00"],
        "data": {
            "lux": [120.5, null],
            "analogue_gain": [1.0, 2.0]
        },
        "point_count": 2,
        "original_count": 840
    }"#;
    let resp: ChartDataResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.timestamps.len(), 2);
    assert_eq!(resp.data["lux"], vec![Some(120.5), None]);
    assert_eq!(resp.point_count, 2);
    assert_eq!(resp.original_count, 840);
}

#[test]
fn chart_data_response_tolerates_missing_fields() {
    let resp: ChartDataResponse = serde_json::from_str(r#"{"error": "Database not found"}"#).unwrap();
    assert!(resp.timestamps.is_empty());
    assert!(resp.data.is_empty());
}

#[test]
fn data_range_response_deserializes() {
    let json = r#"{"earliest": "2026-07-01T00:00:00", "latest": "2026-08-20T00:00:00", "count": 41230}"#;
    let resp: DataRangeResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.earliest.as_deref(), Some("2026-07-01T00:00:00"));
    assert_eq!(resp.count, 41230);
}
