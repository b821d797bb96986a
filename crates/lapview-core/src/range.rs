use time::Duration;

use crate::models::TimeRange;

/// Named fixed-duration window ending at the current time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangePreset {
    Hour1,
    Hour6,
    Hour12,
    Hour24,
    Day7,
    Day30,
}

impl Default for RangePreset {
    fn default() -> Self {
        RangePreset::Hour24
    }
}

impl RangePreset {
    pub const ALL: [RangePreset; 6] = [
        RangePreset::Hour1,
        RangePreset::Hour6,
        RangePreset::Hour12,
        RangePreset::Hour24,
        RangePreset::Day7,
        RangePreset::Day30,
    ];

    /// Unrecognized keys fall back to the 24h default.
    pub fn from_key(key: &str) -> Self {
        match key {
            "1h" => RangePreset::Hour1,
            "6h" => RangePreset::Hour6,
            "12h" => RangePreset::Hour12,
            "24h" => RangePreset::Hour24,
            "7d" => RangePreset::Day7,
            "30d" => RangePreset::Day30,
            _ => RangePreset::Hour24,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            RangePreset::Hour1 => "1h",
            RangePreset::Hour6 => "6h",
            RangePreset::Hour12 => "12h",
            RangePreset::Hour24 => "24h",
            RangePreset::Day7 => "7d",
            RangePreset::Day30 => "30d",
        }
    }

    pub fn duration(&self) -> Duration {
        match self {
            RangePreset::Hour1 => Duration::hours(1),
            RangePreset::Hour6 => Duration::hours(6),
            RangePreset::Hour12 => Duration::hours(12),
            RangePreset::Hour24 => Duration::hours(24),
            RangePreset::Day7 => Duration::days(7),
            RangePreset::Day30 => Duration::days(30),
        }
    }

    pub fn resolve(&self) -> TimeRange {
        TimeRange::ending_now(self.duration())
    }
}
