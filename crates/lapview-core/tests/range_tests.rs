use lapview_core::{now_utc, RangePreset, TimeRange};
use time::Duration;

#[test]
fn presets_resolve_to_their_fixed_durations() {
    let expected = [
        (RangePreset::Hour1, Duration::hours(1)),
        (RangePreset::Hour6, Duration::hours(6)),
        (RangePreset::Hour12, Duration::hours(12)),
        (RangePreset::Hour24, Duration::hours(24)),
        (RangePreset::Day7, Duration::days(7)),
        (RangePreset::Day30, Duration::days(30)),
    ];
    for (preset, duration) in expected {
        let range = preset.resolve();
        assert_eq!(range.span(), duration, "span for {}", preset.key());
        assert!(
            (now_utc() - range.end) < Duration::seconds(2),
            "end should be the time of resolution for {}",
            preset.key()
        );
    }
}

#[test]
fn unknown_key_falls_back_to_24h() {
    let preset = RangePreset::from_key("90m");
    assert_eq!(preset, RangePreset::Hour24);
    assert_eq!(preset.duration(), Duration::hours(24));
}

#[test]
fn keys_round_trip() {
    for preset in RangePreset::ALL {
        assert_eq!(RangePreset::from_key(preset.key()), preset);
    }
}

#[test]
fn explicit_inputs_parse_rfc3339() {
    let range = TimeRange::from_inputs("2026-08-01T00:00:00Z", "2026-08-02T12:30:00Z").unwrap();
    assert_eq!(range.span(), Duration::hours(36) + Duration::minutes(30));
}

#[test]
fn explicit_inputs_accept_offsetless_timestamps() {
    let range = TimeRange::from_inputs("2026-08-01T00:00:00", "2026-08-01T06:00:00").unwrap();
    assert_eq!(range.span(), Duration::hours(6));
}

#[test]
fn empty_or_malformed_inputs_error() {
    assert!(TimeRange::from_inputs("", "2026-08-01T00:00:00Z").is_err());
    assert!(TimeRange::from_inputs("2026-08-01T00:00:00Z", "  ").is_err());
    assert!(TimeRange::from_inputs("not-a-date", "2026-08-01T00:00:00Z").is_err());
}
