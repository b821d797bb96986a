use crate::api::ChartDataResponse;
use crate::timeutils::parse_iso8601;

/// Pair the response's shared timestamp array with one metric's values,
/// dropping indices where the sample is missing. An absent metric (or an
/// empty timestamp array) yields an empty vec rather than an error, so the
/// result may be shorter than the timestamp array and non-contiguous.
pub fn series_points(response: &ChartDataResponse, metric: &str) -> Vec<(f64, f64)> {
    let Some(values) = response.data.get(metric) else {
        return Vec::new();
    };

    response
        .timestamps
        .iter()
        .zip(values.iter())
        .filter_map(|(ts, value)| {
            let y = (*value)?;
            let x = parse_iso8601(ts).ok()?.unix_timestamp() as f64;
            Some((x, y))
        })
        .collect()
}
