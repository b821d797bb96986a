use time::{Duration, OffsetDateTime};

use crate::timeutils::parse_iso8601;

/// A concrete `[start, end]` interval with `start <= end`, either resolved
/// from a preset or supplied explicitly by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: OffsetDateTime,
    pub end: OffsetDateTime,
}

impl TimeRange {
    pub fn ending_now(duration: Duration) -> Self {
        let end = OffsetDateTime::now_utc();
        let start = end.checked_sub(duration).unwrap_or(end);
        Self { start, end }
    }

    /// Explicit user-supplied bounds. Both fields must be non-empty; beyond
    /// that, parse errors are the caller's to surface.
    pub fn from_inputs(start: &str, end: &str) -> anyhow::Result<Self> {
        anyhow::ensure!(
            !start.trim().is_empty() && !end.trim().is_empty(),
            "both start and end are required"
        );
        Ok(Self {
            start: parse_iso8601(start.trim())?,
            end: parse_iso8601(end.trim())?,
        })
    }

    pub fn span(&self) -> Duration {
        self.end - self.start
    }
}

/// One metric's plotted series: `(unix seconds, value)` pairs, missing
/// samples already dropped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSeries {
    pub metric: String,
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

impl ChartSeries {
    pub fn new<M: Into<String>, L: Into<String>>(metric: M, label: L) -> Self {
        Self {
            metric: metric.into(),
            label: label.into(),
            points: Vec::new(),
        }
    }

    pub fn latest(&self) -> Option<f64> {
        self.points.last().map(|&(_, y)| y)
    }
}

/// Point counts reported by the backend for the footer line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SampleStats {
    pub point_count: usize,
    pub original_count: usize,
}
