use lapview_core::{RangePreset, UiState};

#[test]
fn saves_and_reloads_range() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state").join("ui-state.json");

    let state = UiState { range: "7d".into() };
    state.save(&path).unwrap();

    let loaded = UiState::load(&path).expect("saved state loads");
    assert_eq!(loaded, state);
    assert_eq!(loaded.preset(), RangePreset::Day7);
}

#[test]
fn missing_file_yields_none() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(UiState::load(&dir.path().join("nope.json")), None);
}

#[test]
fn corrupt_file_yields_none() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ui-state.json");
    std::fs::write(&path, "{not json").unwrap();
    assert_eq!(UiState::load(&path), None);
}

#[test]
fn unknown_persisted_key_resolves_to_default_preset() {
    let state = UiState { range: "forever".into() };
    assert_eq!(state.preset(), RangePreset::Hour24);
}
