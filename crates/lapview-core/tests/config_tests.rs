use lapview_core::{Config, Theme};
use std::io::Write;

#[test]
fn defaults_expand_paths() {
    let cfg = Config::load(None).expect("load default config");
    let log_file = cfg.logging.file.expect("default log file");
    assert!(
        !log_file.to_string_lossy().contains('~'),
        "log path should be expanded"
    );
    assert_eq!(cfg.api.downsample, 500);
    assert_eq!(cfg.refresh.interval.as_secs(), 60);
    assert_eq!(cfg.viewer.default_range, "24h");
}

#[test]
fn parses_toml_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[api]
base_url = "http://camera.local:9000"
timeout = "10s"
downsample = 200

[refresh]
interval = "2m"

[viewer]
default_range = "7d"
theme = "light"
"#
    )
    .unwrap();

    let cfg = Config::load(Some(file.path())).unwrap();
    assert_eq!(cfg.api.base_url, "http://camera.local:9000");
    assert_eq!(cfg.api.timeout.as_secs(), 10);
    assert_eq!(cfg.api.downsample, 200);
    assert_eq!(cfg.refresh.interval.as_secs(), 120);
    assert_eq!(cfg.viewer.default_range, "7d");
    assert_eq!(cfg.viewer.theme, Theme::Light);
}
