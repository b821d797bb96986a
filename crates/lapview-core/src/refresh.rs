//! Dashboard refresh: one fetch per chart over the resolved range, all five
//! issued concurrently and joined. A chart's failure is logged and reported
//! as a failed update so its siblings are unaffected.

use std::sync::mpsc::Sender;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::api::ApiClient;
use crate::charts::{ChartDef, ChartId, DASHBOARD_CHARTS};
use crate::format::series_points;
use crate::models::{ChartSeries, SampleStats, TimeRange};

#[derive(Debug, Clone)]
pub enum ChartUpdate {
    Loaded {
        id: ChartId,
        series: Vec<ChartSeries>,
        stats: SampleStats,
    },
    Failed {
        id: ChartId,
    },
}

impl ChartUpdate {
    pub fn id(&self) -> ChartId {
        match self {
            ChartUpdate::Loaded { id, .. } | ChartUpdate::Failed { id } => *id,
        }
    }
}

/// Fan out one fetch task per chart and join them all, streaming each
/// chart's update over `tx` as soon as it completes.
pub async fn refresh_dashboard(
    client: Arc<ApiClient>,
    range: TimeRange,
    downsample: u32,
    tx: Sender<ChartUpdate>,
) {
    let tasks: Vec<_> = DASHBOARD_CHARTS
        .iter()
        .map(|chart| {
            let client = Arc::clone(&client);
            let tx = tx.clone();
            tokio::spawn(async move {
                let update = load_chart(&client, chart, &range, downsample).await;
                // The receiver going away means the viewer quit mid-refresh;
                // the result is simply discarded.
                let _ = tx.send(update);
            })
        })
        .collect();

    for result in futures::future::join_all(tasks).await {
        if let Err(err) = result {
            warn!("chart refresh task panicked: {err}");
        }
    }
}

/// Fetch and join all charts, returning the updates directly. Used by the
/// one-shot CSV export path.
pub async fn fetch_dashboard(
    client: Arc<ApiClient>,
    range: TimeRange,
    downsample: u32,
) -> Vec<ChartUpdate> {
    let (tx, rx) = std::sync::mpsc::channel();
    refresh_dashboard(client, range, downsample, tx).await;
    rx.try_iter().collect()
}

async fn load_chart(
    client: &ApiClient,
    chart: &'static ChartDef,
    range: &TimeRange,
    downsample: u32,
) -> ChartUpdate {
    let metrics = chart.metric_names();
    match client.fetch_chart_data(&metrics, range, downsample).await {
        Ok(response) => {
            let series = chart
                .metrics
                .iter()
                .map(|def| {
                    let mut s = ChartSeries::new(def.metric, def.label);
                    s.points = series_points(&response, def.metric);
                    s
                })
                .collect();
            debug!(
                chart = chart.id.slug(),
                points = response.point_count,
                "chart refreshed"
            );
            ChartUpdate::Loaded {
                id: chart.id,
                series,
                stats: SampleStats {
                    point_count: response.point_count,
                    original_count: response.original_count,
                },
            }
        }
        Err(err) => {
            warn!(chart = chart.id.slug(), "chart refresh failed: {err}");
            ChartUpdate::Failed { id: chart.id }
        }
    }
}
