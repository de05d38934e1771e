use std::fs;
use std::path::PathBuf;

use connect_four::{Dimensions, Settings, SettingsError};

fn scratch_file(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("connect-four-tests-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    let _ = fs::remove_file(&path);
    path
}

#[test]
fn test_missing_file_gives_defaults() {
    let path = scratch_file("missing.json");
    let settings = Settings::load(&path).unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.dimensions(), Dimensions::new(6, 7));
    assert!(!path.exists());
}

#[test]
fn test_save_then_load() {
    let path = scratch_file("roundtrip.json");
    let settings = Settings::default().with_size(8, 9);
    settings.save(&path).unwrap();
    assert_eq!(Settings::load(&path).unwrap(), settings);

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["rows"], 8);
    assert_eq!(json["columns"], 9);
}

#[test]
fn test_out_of_range_values_are_clamped() {
    let path = scratch_file("clamped.json");
    fs::write(&path, r#"{"rows": 2, "columns": 15}"#).unwrap();
    let settings = Settings::load(&path).unwrap();
    assert_eq!((settings.rows, settings.columns), (4, 10));

    fs::write(&path, r#"{"rows": -3, "columns": 7}"#).unwrap();
    let settings = Settings::load(&path).unwrap();
    assert_eq!(settings.dimensions(), Dimensions::new(4, 7));
}

#[test]
fn test_sizes_beyond_i64_are_clamped() {
    let path = scratch_file("huge.json");
    fs::write(
        &path,
        r#"{"rows": 100000000000000000000, "columns": -100000000000000000000}"#,
    )
    .unwrap();
    let settings = Settings::load(&path).unwrap();
    assert_eq!((settings.rows, settings.columns), (10, 4));

    fs::write(&path, r#"{"rows": 18446744073709551615, "columns": 6.9}"#).unwrap();
    let settings = Settings::load(&path).unwrap();
    assert_eq!(settings.dimensions(), Dimensions::new(10, 6));
}

#[test]
fn test_non_numeric_size_is_a_parse_error() {
    let path = scratch_file("text-size.json");
    fs::write(&path, r#"{"rows": "six"}"#).unwrap();
    assert!(matches!(
        Settings::load(&path).unwrap_err(),
        SettingsError::Parse { .. }
    ));
}

#[test]
fn test_partial_file_fills_in_defaults() {
    let path = scratch_file("partial.json");
    fs::write(&path, r#"{"rows": 5}"#).unwrap();
    let settings = Settings::load(&path).unwrap();
    assert_eq!(settings.rows, 5);
    assert_eq!(settings.columns, 7);
    assert!(settings.animate_drops);
}

#[test]
fn test_malformed_file_is_a_parse_error() {
    let path = scratch_file("broken.json");
    fs::write(&path, "rows = 6").unwrap();
    let err = Settings::load(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Parse { .. }));
    assert!(err.to_string().starts_with("failed to parse settings in"));
}

#[test]
fn test_with_size_clamps() {
    let settings = Settings::default().with_size(1, 100);
    assert_eq!((settings.rows, settings.columns), (4, 10));
}
