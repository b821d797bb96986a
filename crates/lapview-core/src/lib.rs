pub mod api;
pub mod charts;
pub mod config;
pub mod format;
pub mod models;
pub mod prefs;
pub mod range;
pub mod refresh;
pub mod theme;
pub mod timeutils;

pub use api::{ApiClient, ApiError, ChartDataResponse, DataRangeResponse};
pub use charts::{AxisSide, ChartDef, ChartId, MetricDef, YScale, DASHBOARD_CHARTS};
pub use config::{ApiConfig, Config, LoggingConfig, RefreshConfig, ViewerConfig};
pub use format::series_points;
pub use models::{ChartSeries, SampleStats, TimeRange};
pub use prefs::UiState;
pub use range::RangePreset;
pub use refresh::{fetch_dashboard, refresh_dashboard, ChartUpdate};
pub use theme::{Palette, Rgb, Theme};
pub use timeutils::{now_utc, parse_iso8601, parse_range};
