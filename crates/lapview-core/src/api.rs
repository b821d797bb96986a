use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;

use crate::config::ApiConfig;
use crate::models::TimeRange;
use crate::timeutils::format_rfc3339;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Response of `GET /charts/api/data`: one shared timestamp array plus
/// per-metric value arrays of the same length, `null` marking a missing
/// sample. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ChartDataResponse {
    #[serde(default)]
    pub timestamps: Vec<String>,
    #[serde(default)]
    pub data: HashMap<String, Vec<Option<f64>>>,
    #[serde(default)]
    pub point_count: usize,
    #[serde(default)]
    pub original_count: usize,
}

/// Response of `GET /charts/api/range`: bounds of what the backend has.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DataRangeResponse {
    pub earliest: Option<String>,
    pub latest: Option<String>,
    #[serde(default)]
    pub count: u64,
}

pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch downsampled series for the named metrics over `range`.
    pub async fn fetch_chart_data(
        &self,
        metrics: &[&str],
        range: &TimeRange,
        downsample: u32,
    ) -> ApiResult<ChartDataResponse> {
        let url = data_url(&self.base_url, metrics, range, downsample);
        self.get_json(&url).await
    }

    /// Fetch the earliest/latest timestamps the backend holds.
    pub async fn fetch_data_range(&self) -> ApiResult<DataRangeResponse> {
        let url = format!("{}/charts/api/range", self.base_url);
        self.get_json(&url).await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                body: response.text().await.unwrap_or_default(),
            });
        }
        Ok(response.json().await?)
    }
}

/// Query assembly kept separate from the client so it is testable without a
/// server. RFC3339 bounds contain no characters needing percent-encoding.
pub fn data_url(base_url: &str, metrics: &[&str], range: &TimeRange, downsample: u32) -> String {
    format!(
        "{}/charts/api/data?metrics={}&start={}&end={}&downsample={}",
        base_url,
        metrics.join(","),
        format_rfc3339(range.start),
        format_rfc3339(range.end),
        downsample
    )
}
