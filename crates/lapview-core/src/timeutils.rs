use anyhow::{Context, Result};
use std::time::Duration as StdDuration;
use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime, PrimitiveDateTime};

pub fn now_utc() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

/// Parse an ISO8601 timestamp as sent by the backend. RFC3339 is tried
/// first; timestamps without a UTC offset are assumed to be UTC.
pub fn parse_iso8601(s: &str) -> Result<OffsetDateTime> {
    if let Ok(ts) = OffsetDateTime::parse(s, &Rfc3339) {
        return Ok(ts);
    }
    let format = time::macros::format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
    );
    let naive =
        PrimitiveDateTime::parse(s, &format).with_context(|| format!("invalid timestamp: {s}"))?;
    Ok(naive.assume_utc())
}

pub fn format_rfc3339(ts: OffsetDateTime) -> String {
    ts.format(&Rfc3339)
        .unwrap_or_else(|_| ts.unix_timestamp().to_string())
}

/// X-axis tick label: time of day inside a one-day window, date beyond it.
pub fn axis_label(ts: OffsetDateTime, span: Duration) -> String {
    if span <= Duration::days(1) {
        ts.format(&time::macros::format_description!("[hour]:[minute]"))
            .unwrap_or_default()
    } else {
        ts.format(&time::macros::format_description!("[month repr:short] [day]"))
            .unwrap_or_default()
    }
}

pub fn parse_range(spec: &str) -> Result<Duration> {
    let std = humantime::parse_duration(spec).context("invalid duration format")?;
    Ok(duration_from_std(std))
}

pub fn duration_from_std(std: StdDuration) -> Duration {
    Duration::new(std.as_secs() as i64, std.subsec_nanos() as i32)
}

pub fn duration_to_std(duration: Duration) -> StdDuration {
    if duration.is_negative() {
        StdDuration::from_secs(0)
    } else {
        StdDuration::new(
            duration.whole_seconds() as u64,
            duration.subsec_nanoseconds() as u32,
        )
    }
}
